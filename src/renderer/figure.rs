//! Hangman figure pose
//!
//! Six parts, revealed one per wrong guess in a fixed order.

use crate::consts::MAX_WRONG;

/// Figure parts in reveal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    pub const ALL: [FigurePart; 6] = [
        FigurePart::Head,
        FigurePart::Body,
        FigurePart::LeftArm,
        FigurePart::RightArm,
        FigurePart::LeftLeg,
        FigurePart::RightLeg,
    ];

    /// Wrong-guess count at which this part appears (1-based)
    pub fn threshold(&self) -> u8 {
        match self {
            FigurePart::Head => 1,
            FigurePart::Body => 2,
            FigurePart::LeftArm => 3,
            FigurePart::RightArm => 4,
            FigurePart::LeftLeg => 5,
            FigurePart::RightLeg => 6,
        }
    }

    /// CSS class used by the browser front end
    pub fn css_class(&self) -> &'static str {
        match self {
            FigurePart::Head => "head",
            FigurePart::Body => "body",
            FigurePart::LeftArm => "arm left",
            FigurePart::RightArm => "arm right",
            FigurePart::LeftLeg => "leg left",
            FigurePart::RightLeg => "leg right",
        }
    }
}

// Part thresholds must line up with the loss threshold
const _: () = assert!(FigurePart::ALL.len() == MAX_WRONG as usize);

/// Parts visible after `wrong` wrong guesses
pub fn visible_parts(wrong: u8) -> Vec<FigurePart> {
    FigurePart::ALL
        .into_iter()
        .filter(|part| wrong >= part.threshold())
        .collect()
}

/// Terminal drawing of the gallows and the visible parts
pub fn ascii_art(wrong: u8) -> Vec<String> {
    let parts = visible_parts(wrong);
    let has = |part: FigurePart| parts.contains(&part);
    let pick = |part: FigurePart, glyph: char| if has(part) { glyph } else { ' ' };

    let head = pick(FigurePart::Head, 'O');
    let left_arm = pick(FigurePart::LeftArm, '/');
    let body = pick(FigurePart::Body, '|');
    let right_arm = pick(FigurePart::RightArm, '\\');
    let left_leg = pick(FigurePart::LeftLeg, '/');
    let right_leg = pick(FigurePart::RightLeg, '\\');

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", head),
        format!(" {}{}{}  |", left_arm, body, right_arm),
        format!(" {} {}  |", left_leg, right_leg),
        "      |".to_string(),
        "=======".to_string(),
    ]
}
