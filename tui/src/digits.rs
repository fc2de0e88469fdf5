//! Large 3x5 score digits.

use ratatui::text::Line;

pub const DIGIT_WIDTH: u16 = 3;
pub const DIGIT_HEIGHT: u16 = 5;
const DIGIT_GAP: u16 = 1;

#[rustfmt::skip]
const FONT: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

/// Columns needed to draw `value` in large digits.
#[must_use]
pub fn big_width(value: u32) -> u16 {
    let count = u16::try_from(value.to_string().len()).unwrap_or(u16::MAX);
    count
        .saturating_mul(DIGIT_WIDTH + DIGIT_GAP)
        .saturating_sub(DIGIT_GAP)
}

/// Render `value` as five rows, painting lit cells with `fill`.
#[must_use]
pub fn big_lines(value: u32, fill: &str) -> Vec<Line<'static>> {
    let digits: Vec<usize> = value
        .to_string()
        .bytes()
        .map(|b| usize::from(b - b'0'))
        .collect();

    (0..usize::from(DIGIT_HEIGHT))
        .map(|row| {
            let mut text = String::new();
            for (i, digit) in digits.iter().enumerate() {
                if i > 0 {
                    text.push(' ');
                }
                for cell in FONT[*digit][row].chars() {
                    if cell == '#' {
                        text.push_str(fill);
                    } else {
                        text.push(' ');
                    }
                }
            }
            Line::from(text)
        })
        .collect()
}
