//! Tests for palette edit operations and the pending action slot

#[cfg(test)]
mod tests {
    use tilenoise::NoiseError;
    use tilenoise::palette::color::Color;
    use tilenoise::palette::editor::{
        ActionSlot, PaletteAction, append, move_down, move_up, remove_at, replace_all, replace_at,
    };
    use tilenoise::palette::ramp::Palette;

    fn abc() -> Palette {
        Palette::from_hex(&["#aa0000", "#00bb00", "#0000cc"]).expect("valid palette")
    }

    fn hex(palette: &Palette) -> Vec<String> {
        palette.to_hex()
    }

    fn is_invalid_index<T>(result: &Result<T, NoiseError>) -> bool {
        matches!(result, Err(NoiseError::InvalidIndex { .. }))
    }

    #[test]
    fn test_append_adds_to_end() {
        let palette = abc();
        let extended = append(&palette, Color::new(1, 2, 3));
        assert_eq!(extended.len(), 4);
        assert_eq!(extended.get(3), Some(Color::new(1, 2, 3)));
        assert_eq!(palette.len(), 3, "original must be untouched");
    }

    #[test]
    fn test_remove_at() {
        let palette = abc();
        let removed = remove_at(&palette, 1).expect("index in range");
        assert_eq!(hex(&removed), vec!["#aa0000", "#0000cc"]);
        assert_eq!(palette.len(), 3, "original must be untouched");
    }

    // Tests a single-entry palette can never be emptied
    // Verified by allowing removal down to zero entries
    #[test]
    fn test_remove_last_remaining_entry_fails() {
        let single = Palette::from_hex(&["#123456"]).expect("valid palette");
        assert!(is_invalid_index(&remove_at(&single, 0)));
    }

    #[test]
    fn test_remove_out_of_range_fails() {
        assert!(is_invalid_index(&remove_at(&abc(), 3)));
    }

    #[test]
    fn test_move_up_swaps_with_predecessor() {
        let moved = move_up(&abc(), 2).expect("index in range");
        assert_eq!(hex(&moved), vec!["#aa0000", "#0000cc", "#00bb00"]);
    }

    #[test]
    fn test_move_down_swaps_with_successor() {
        let moved = move_down(&abc(), 0).expect("index in range");
        assert_eq!(hex(&moved), vec!["#00bb00", "#aa0000", "#0000cc"]);
    }

    // Tests boundary moves are no-ops rather than errors
    // Verified by wrapping the first entry to the end
    #[test]
    fn test_boundary_moves_are_no_ops() {
        let palette = abc();
        assert_eq!(move_up(&palette, 0).expect("index in range"), palette);
        assert_eq!(move_down(&palette, 2).expect("index in range"), palette);
    }

    #[test]
    fn test_moves_out_of_range_fail() {
        assert!(is_invalid_index(&move_up(&abc(), 3)));
        assert!(is_invalid_index(&move_down(&abc(), 7)));
    }

    #[test]
    fn test_replace_at() {
        let replaced = replace_at(&abc(), 1, Color::new(9, 9, 9)).expect("index in range");
        assert_eq!(hex(&replaced), vec!["#aa0000", "#090909", "#0000cc"]);
        assert!(is_invalid_index(&replace_at(&abc(), 3, Color::new(0, 0, 0))));
    }

    // Tests moves and color replacements conserve length
    #[test]
    fn test_length_conserved() {
        let palette = abc();
        for index in 0..palette.len() {
            assert_eq!(move_up(&palette, index).expect("in range").len(), 3);
            assert_eq!(move_down(&palette, index).expect("in range").len(), 3);
            assert_eq!(
                replace_at(&palette, index, Color::new(0, 0, 0))
                    .expect("in range")
                    .len(),
                3
            );
        }
    }

    #[test]
    fn test_replace_all_later_edits_win() {
        let edits = [
            (0, Color::new(1, 1, 1)),
            (2, Color::new(2, 2, 2)),
            (0, Color::new(3, 3, 3)),
        ];
        let replaced = replace_all(&abc(), &edits).expect("indices in range");
        assert_eq!(hex(&replaced), vec!["#030303", "#00bb00", "#020202"]);
        assert!(is_invalid_index(&replace_all(
            &abc(),
            &[(5, Color::new(0, 0, 0))]
        )));
    }

    #[test]
    fn test_add_action_appends_white() {
        let added = PaletteAction::Add.apply(&abc()).expect("add never fails");
        assert_eq!(added.len(), 4);
        assert_eq!(added.get(3), Some(Color::new(255, 255, 255)));
    }

    #[test]
    fn test_actions_dispatch() {
        let palette = abc();
        assert_eq!(
            PaletteAction::Remove(0).apply(&palette).expect("valid"),
            remove_at(&palette, 0).expect("valid")
        );
        assert_eq!(
            PaletteAction::MoveUp(1).apply(&palette).expect("valid"),
            move_up(&palette, 1).expect("valid")
        );
        assert_eq!(
            PaletteAction::MoveDown(1).apply(&palette).expect("valid"),
            move_down(&palette, 1).expect("valid")
        );
    }

    // Tests only the most recent submission survives until the cycle
    // Verified by queueing every submission
    #[test]
    fn test_slot_holds_single_action() {
        let mut slot = ActionSlot::new();
        assert!(!slot.is_pending());
        assert_eq!(slot.submit(PaletteAction::Add), None);
        assert_eq!(
            slot.submit(PaletteAction::Remove(0)),
            Some(PaletteAction::Add)
        );
        assert_eq!(slot.peek(), Some(PaletteAction::Remove(0)));
        assert_eq!(slot.take(), Some(PaletteAction::Remove(0)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_cycle_applies_colors_then_action_once() {
        let mut slot = ActionSlot::new();
        slot.submit(PaletteAction::MoveDown(0));

        let edits = [(0, Color::new(1, 1, 1))];
        let next = slot.apply_cycle(&abc(), &edits).expect("valid edits");
        assert_eq!(hex(&next), vec!["#00bb00", "#010101", "#0000cc"]);
        assert!(!slot.is_pending());

        let unchanged = slot.apply_cycle(&next, &[]).expect("no edits");
        assert_eq!(unchanged, next);
    }

    #[test]
    fn test_cycle_consumes_failing_action() {
        let mut slot = ActionSlot::new();
        slot.submit(PaletteAction::Remove(10));
        assert!(is_invalid_index(&slot.apply_cycle(&abc(), &[])));
        assert!(!slot.is_pending());
    }
}
