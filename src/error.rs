//! Errors raised by the grade ledger.
//!
//! Every error is local and recoverable: the operation that raised it leaves
//! the session untouched and the form keeps running.

use itertools::Itertools;
use thiserror::Error;

use crate::credit::CreditWeight;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Submit was attempted while some subjects of the bucket have no grade.
    /// `positions` are 1-based, as shown to the user.
    #[error(
        "missing grade for {weight}-credit subject(s) {}",
        .positions.iter().join(", ")
    )]
    MissingGrade {
        weight: CreditWeight,
        positions: Vec<usize>,
    },

    /// An index that does not address a rendered subject.
    #[error("no {weight}-credit subject at index {index} (bucket has {len})")]
    IndexOutOfRange {
        weight: CreditWeight,
        index: usize,
        len: usize,
    },

    #[error("no credit type selected")]
    NoCreditWeightSelected,

    #[error("invalid credit weight: {0:?}")]
    InvalidCreditWeight(String),

    #[error("invalid grade: {0:?}")]
    InvalidGrade(String),
}

impl LedgerError {
    /// Message shown in the alert banner.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::MissingGrade { .. } => {
                "Please select a grade for all subjects before submitting.".to_string()
            }
            LedgerError::NoCreditWeightSelected => "Please select a credit type first.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_grade_lists_positions() {
        let err = LedgerError::MissingGrade {
            weight: CreditWeight::Three,
            positions: vec![1, 3],
        };
        assert_eq!(err.to_string(), "missing grade for 3-credit subject(s) 1, 3");
        assert_eq!(
            err.user_message(),
            "Please select a grade for all subjects before submitting."
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = LedgerError::IndexOutOfRange {
            weight: CreditWeight::Two,
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "no 2-credit subject at index 4 (bucket has 2)");
        assert_eq!(err.user_message(), err.to_string());
    }
}
