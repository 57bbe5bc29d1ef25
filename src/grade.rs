use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::LedgerError;

/// Letter grade awarded for a subject.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    O,
    A,
    B,
    C,
    D,
    P,
    F,
}

impl Grade {
    /// Every grade, best first. This is also the order of the grade picker.
    pub const ALL: [Grade; 7] = [
        Grade::O,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::P,
        Grade::F,
    ];

    pub fn points(self) -> u32 {
        match self {
            Grade::O => 10,
            Grade::A => 9,
            Grade::B => 8,
            Grade::C => 7,
            Grade::D => 6,
            Grade::P => 5,
            Grade::F => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::P => "P",
            Grade::F => "F",
        }
    }

    /// Parses the value of a grade picker. The blank option means "no grade yet".
    pub fn parse_selection(value: &str) -> Result<Option<Grade>, LedgerError> {
        match value.trim() {
            "" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for Grade {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .iter()
            .copied()
            .find(|grade| grade.label() == s)
            .ok_or_else(|| LedgerError::InvalidGrade(s.to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
