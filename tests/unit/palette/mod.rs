mod editor;
mod ramp;
