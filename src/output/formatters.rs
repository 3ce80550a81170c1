//! Formatting utilities shared by the terminal front-ends

use crate::core::BodyPart;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Draw the gallows with the given body parts as ASCII art
#[must_use]
pub fn gallows_lines(parts: &[BodyPart]) -> [String; 7] {
    let show = |part: BodyPart, glyph: char| if parts.contains(&part) { glyph } else { ' ' };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", show(BodyPart::Head, 'O')),
        format!(
            " {}{}{}  |",
            show(BodyPart::LeftArm, '/'),
            show(BodyPart::Body, '|'),
            show(BodyPart::RightArm, '\\')
        ),
        format!(
            " {} {}  |",
            show(BodyPart::LeftLeg, '/'),
            show(BodyPart::RightLeg, '\\')
        ),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
