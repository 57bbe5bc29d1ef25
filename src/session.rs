//! The state of one form session: the ledger plus the transient selections
//! that drive which part of the form is shown.

use serde::{Deserialize, Serialize};

use crate::{
    credit::CreditWeight,
    error::LedgerError,
    grade::Grade,
    ledger::{Cgpa, Ledger, Subject},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    ledger: Ledger,
    selected: Option<CreditWeight>,
    submitted: bool,
    // `None` whenever the ledger changed since the last calculation.
    cgpa: Option<Cgpa>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn selected(&self) -> Option<CreditWeight> {
        self.selected
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The last calculated CGPA, if nothing changed since.
    pub fn cgpa(&self) -> Option<Cgpa> {
        self.cgpa
    }

    /// Subjects of the selected bucket; empty when nothing is selected.
    pub fn subjects(&self) -> &[Subject] {
        match self.selected {
            Some(weight) => self.ledger.subjects(weight),
            None => &[],
        }
    }

    fn selected_or_err(&self) -> Result<CreditWeight, LedgerError> {
        self.selected.ok_or(LedgerError::NoCreditWeightSelected)
    }

    /// Switches the bucket being edited and returns to edit mode.
    /// Subjects in other buckets are kept.
    pub fn select_credit_weight(&mut self, weight: Option<CreditWeight>) {
        self.selected = weight;
        self.submitted = false;
    }

    pub fn add_subject(&mut self) -> Result<usize, LedgerError> {
        let weight = self.selected_or_err()?;
        let index = self.ledger.push(weight);
        self.cgpa = None;
        Ok(index)
    }

    pub fn set_grade(&mut self, index: usize, grade: Option<Grade>) -> Result<(), LedgerError> {
        let weight = self.selected_or_err()?;
        self.ledger.set_grade(weight, index, grade)?;
        self.cgpa = None;
        Ok(())
    }

    pub fn delete_subject(&mut self, index: usize) -> Result<Subject, LedgerError> {
        let weight = self.selected_or_err()?;
        let removed = self.ledger.remove(weight, index)?;
        self.cgpa = None;
        Ok(removed)
    }

    /// Marks the selected bucket as complete. Fails if any of its subjects
    /// has no grade; an empty bucket is complete.
    pub fn submit(&mut self) -> Result<(), LedgerError> {
        let weight = self.selected_or_err()?;
        let positions = self.ledger.ungraded_positions(weight);
        if !positions.is_empty() {
            return Err(LedgerError::MissingGrade { weight, positions });
        }
        self.submitted = true;
        Ok(())
    }

    /// Computes the CGPA over every bucket, not only the selected one.
    pub fn calculate_cgpa(&mut self) -> Cgpa {
        let cgpa = self.ledger.cgpa();
        self.cgpa = Some(cgpa);
        cgpa
    }
}
