use serde::Serialize;
use std::fmt;

/// Letter grade bands, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Letter {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Letter {
    pub fn as_str(self) -> &'static str {
        match self {
            Letter::S => "S",
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a percentage into a letter grade.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 90  | S     |
/// | >= 80  | A     |
/// | >= 70  | B     |
/// | >= 60  | C     |
/// | >= 50  | D     |
/// | >= 40  | E     |
/// | < 40   | F     |
///
/// Defined for every input: values above 100 stay `S`, negatives and NaN
/// fall through to `F`.
pub fn grade(p: f64) -> Letter {
    match p {
        p if p >= 90.0 => Letter::S,
        p if p >= 80.0 => Letter::A,
        p if p >= 70.0 => Letter::B,
        p if p >= 60.0 => Letter::C,
        p if p >= 50.0 => Letter::D,
        p if p >= 40.0 => Letter::E,
        _ => Letter::F,
    }
}
