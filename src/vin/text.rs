//! VIN normalization and validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Length of every modern VIN.
pub const VIN_LENGTH: usize = 17;

/// Letters excluded from the VIN alphabet, being easily misread as 1 and 0.
pub const FORBIDDEN_LETTERS: [char; 3] = ['I', 'O', 'Q'];

/// Why a VIN was rejected. The `Display` text is the inline message shown to
/// the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum VinError {
    #[error("Enter a VIN")]
    Empty,
    #[error("VIN must be exactly 17 characters (got {0})")]
    Length(usize),
    #[error("VIN cannot contain the letters I, O, or Q")]
    ForbiddenLetter,
}

/// Project free-form text onto the VIN alphabet.
///
/// Trims, upper-cases and drops everything that is not an ASCII letter or
/// digit. Applying it twice gives the same result as applying it once.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Check a normalized VIN.
///
/// An empty string is not an error: nothing has been typed yet.
pub fn validate(vin: &str) -> Result<(), VinError> {
    if vin.is_empty() {
        return Ok(());
    }

    let len = vin.chars().count();
    if len != VIN_LENGTH {
        return Err(VinError::Length(len));
    }

    if has_forbidden_letter(vin) {
        return Err(VinError::ForbiddenLetter);
    }

    Ok(())
}

pub(crate) fn has_forbidden_letter(s: &str) -> bool {
    s.contains(FORBIDDEN_LETTERS)
}

/// A syntactically valid VIN: 17 characters, uppercase alphanumeric, no I/O/Q.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Normalize then validate `text`. Unlike [`validate`], empty input is
    /// rejected.
    pub fn parse(text: &str) -> Result<Self, VinError> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(VinError::Empty);
        }
        validate(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}
