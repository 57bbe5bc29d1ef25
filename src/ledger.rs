//! Subjects grouped by credit weight, and the CGPA derived from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    credit::CreditWeight,
    error::LedgerError,
    grade::Grade,
    util::{format_hundredths, round_to_hundredths},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    pub grade: Option<Grade>,
}

/// A credit-weighted grade point average, kept as an exact number of hundredths.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cgpa {
    hundredths: u64,
}

impl Cgpa {
    pub fn from_totals(points: u64, credits: u64) -> Self {
        Cgpa {
            hundredths: round_to_hundredths(points, credits),
        }
    }

    pub fn hundredths(self) -> u64 {
        self.hundredths
    }

}

impl fmt::Display for Cgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hundredths(self.hundredths))
    }
}

/// Per-credit-weight subject lists. Every bucket is always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    buckets: IndexMap<CreditWeight, Vec<Subject>>,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger {
            buckets: CreditWeight::ALL
                .iter()
                .map(|weight| (*weight, Vec::new()))
                .collect(),
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subjects(&self, weight: CreditWeight) -> &[Subject] {
        self.buckets.get(&weight).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, weight: CreditWeight) -> usize {
        self.subjects(weight).len()
    }

    fn bucket_mut(&mut self, weight: CreditWeight) -> &mut Vec<Subject> {
        self.buckets.entry(weight).or_insert_with(Vec::new)
    }

    /// Appends an ungraded subject and returns its index.
    pub fn push(&mut self, weight: CreditWeight) -> usize {
        let bucket = self.bucket_mut(weight);
        bucket.push(Subject::default());
        bucket.len() - 1
    }

    pub fn set_grade(
        &mut self,
        weight: CreditWeight,
        index: usize,
        grade: Option<Grade>,
    ) -> Result<(), LedgerError> {
        let bucket = self.bucket_mut(weight);
        let len = bucket.len();
        let subject = bucket.get_mut(index).ok_or(LedgerError::IndexOutOfRange {
            weight,
            index,
            len,
        })?;
        subject.grade = grade;
        Ok(())
    }

    pub fn remove(&mut self, weight: CreditWeight, index: usize) -> Result<Subject, LedgerError> {
        let bucket = self.bucket_mut(weight);
        if index >= bucket.len() {
            return Err(LedgerError::IndexOutOfRange {
                weight,
                index,
                len: bucket.len(),
            });
        }
        Ok(bucket.remove(index))
    }

    /// 1-based positions of the ungraded subjects in a bucket.
    pub fn ungraded_positions(&self, weight: CreditWeight) -> Vec<usize> {
        self.subjects(weight)
            .iter()
            .enumerate()
            .filter(|(_, subject)| subject.grade.is_none())
            .map(|(index, _)| index + 1)
            .collect()
    }

    fn graded(&self) -> impl Iterator<Item = (CreditWeight, Grade)> + '_ {
        self.buckets.iter().flat_map(|(weight, subjects)| {
            subjects
                .iter()
                .filter_map(move |subject| subject.grade.map(|grade| (*weight, grade)))
        })
    }

    /// Total credit-hours of graded subjects across all buckets.
    pub fn graded_credits(&self) -> u64 {
        self.graded().map(|(weight, _)| u64::from(weight.hours())).sum()
    }

    /// Weighted average over every graded subject in every bucket.
    /// Ungraded subjects count toward neither side; no graded subjects gives zero.
    pub fn cgpa(&self) -> Cgpa {
        let (points, credits) = self.graded().fold((0u64, 0u64), |(points, credits), (weight, grade)| {
            let hours = u64::from(weight.hours());
            (points + u64::from(grade.points()) * hours, credits + hours)
        });
        Cgpa::from_totals(points, credits)
    }
}
