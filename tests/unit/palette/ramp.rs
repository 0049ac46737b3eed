//! Tests for palette construction

#[cfg(test)]
mod tests {
    use tilenoise::NoiseError;
    use tilenoise::palette::color::Color;
    use tilenoise::palette::ramp::Palette;

    #[test]
    fn test_from_hex_preserves_order() {
        let palette = Palette::from_hex(&["#ffffff", "000000", "#FF0000"]).expect("valid palette");
        assert_eq!(
            palette.colors(),
            &[
                Color::new(255, 255, 255),
                Color::new(0, 0, 0),
                Color::new(255, 0, 0)
            ]
        );
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
    }

    // Tests the error identifies which entry is malformed
    // Verified by dropping the entry index context
    #[test]
    fn test_from_hex_reports_entry_index() {
        match Palette::from_hex(&["#ffffff", "#12345g", "#000000"]) {
            Err(NoiseError::InvalidColor { index, entry, .. }) => {
                assert_eq!(index, Some(1));
                assert_eq!(entry, "#12345g");
            }
            other => unreachable!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new(Vec::new()), Err(NoiseError::EmptyPalette)));
        let no_entries: [&str; 0] = [];
        assert!(matches!(
            Palette::from_hex(&no_entries),
            Err(NoiseError::EmptyPalette)
        ));
    }

    #[test]
    fn test_default_palette_is_gray_ramp() {
        let palette = Palette::default();
        assert_eq!(
            palette.to_hex(),
            vec!["#ffffff", "#bfbfbf", "#7f7f7f", "#3f3f3f", "#000000"]
        );
    }

    #[test]
    fn test_get() {
        let palette = Palette::from_hex(&["#010203"]).expect("valid palette");
        assert_eq!(palette.get(0), Some(Color::new(1, 2, 3)));
        assert_eq!(palette.get(1), None);
    }
}
