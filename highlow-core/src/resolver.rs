use crate::{Choice, DrawnNumber, Outcome};

/// Numbers above this are high. The midpoint itself counts as low.
pub const MIDPOINT: u8 = 50;

pub fn is_high(drawn: DrawnNumber) -> bool {
    drawn.value() > MIDPOINT
}

/// Outcome of a guess against the drawn number
pub fn resolve(choice: Choice, drawn: DrawnNumber) -> Outcome {
    match (choice, is_high(drawn)) {
        (Choice::High, true) | (Choice::Low, false) => Outcome::Win,
        _ => Outcome::Lose,
    }
}
