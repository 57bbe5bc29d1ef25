use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::LedgerError;

/// Credit-hours of a subject, the weighting factor of its grade.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditWeight {
    Four,
    Three,
    Two,
}

impl CreditWeight {
    /// Order of the buckets in the ledger and in the credit picker.
    pub const ALL: [CreditWeight; 3] = [CreditWeight::Four, CreditWeight::Three, CreditWeight::Two];

    pub fn hours(self) -> u32 {
        match self {
            CreditWeight::Four => 4,
            CreditWeight::Three => 3,
            CreditWeight::Two => 2,
        }
    }

    /// Parses the value of the credit picker. The blank option means nothing is selected.
    pub fn parse_selection(value: &str) -> Result<Option<CreditWeight>, LedgerError> {
        match value.trim() {
            "" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for CreditWeight {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4" => Ok(CreditWeight::Four),
            "3" => Ok(CreditWeight::Three),
            "2" => Ok(CreditWeight::Two),
            _ => Err(LedgerError::InvalidCreditWeight(s.to_string())),
        }
    }
}

impl fmt::Display for CreditWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours() {
        assert_eq!(CreditWeight::Four.hours(), 4);
        assert_eq!(CreditWeight::Three.hours(), 3);
        assert_eq!(CreditWeight::Two.hours(), 2);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(CreditWeight::parse_selection(""), Ok(None));
        assert_eq!(CreditWeight::parse_selection("3"), Ok(Some(CreditWeight::Three)));
        assert_eq!(
            CreditWeight::parse_selection("5"),
            Err(LedgerError::InvalidCreditWeight("5".to_string()))
        );
        assert!(CreditWeight::parse_selection("four").is_err());
    }

    #[test]
    fn test_display_round_trips_through_picker_value() {
        for weight in CreditWeight::ALL.iter() {
            assert_eq!(CreditWeight::parse_selection(&weight.to_string()), Ok(Some(*weight)));
        }
    }
}
