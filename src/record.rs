//! The certificate record collected from the prompts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validate;

/// One fully collected set of certificate fields.
///
/// Every field holds the raw text accepted at its prompt: the certificate
/// template interpolates exactly what was typed, so a year entered as `"01"`
/// prints as `"01"`. Numeric interpretation happens only inside the
/// predicates and suffix derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub name: String,
    pub roll_number: String,
    pub year: String,
    pub semester: String,
    pub date: String,
    pub branch: String,
    pub fathers_name: String,
    pub academic_year: String,
}

impl CertificateRecord {
    /// Re-checks every field predicate, naming the first field that fails.
    ///
    /// The collector only hands out records whose fields already passed the
    /// prompts, but the composer requires a verified record and calls this
    /// rather than trusting its caller. Roll numbers are free-form and have
    /// no predicate.
    pub fn validate(&self) -> Result<()> {
        if !validate::is_valid_name(&self.name) {
            return Err(Error::Validation(format!(
                "invalid student name: {:?}",
                self.name
            )));
        }
        if !validate::is_valid_year(&self.year) {
            return Err(Error::Validation(format!(
                "invalid year (expected 1-4): {:?}",
                self.year
            )));
        }
        if !validate::is_valid_semester(&self.semester) {
            return Err(Error::Validation(format!(
                "invalid semester (expected 1 or 2): {:?}",
                self.semester
            )));
        }
        if !validate::is_valid_date(&self.date) {
            return Err(Error::Validation(format!(
                "invalid or out-of-range date: {:?}",
                self.date
            )));
        }
        if !validate::is_valid_branch(&self.branch) {
            return Err(Error::Validation(format!(
                "unknown branch code: {:?}",
                self.branch
            )));
        }
        if !validate::is_valid_fathers_name(&self.fathers_name) {
            return Err(Error::Validation(format!(
                "invalid father's name: {:?}",
                self.fathers_name
            )));
        }
        if !validate::is_valid_academic_year(&self.academic_year) {
            return Err(Error::Validation(format!(
                "invalid academic year (expected yyyy-yy): {:?}",
                self.academic_year
            )));
        }
        Ok(())
    }
}
