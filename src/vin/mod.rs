//! VIN text utilities.
//!
//! This module provides functionality to:
//! - Normalize typed or recognised text into a VIN candidate
//! - Validate VIN syntax with user-facing error messages
//! - Extract a VIN from unstructured OCR output

mod extract;
mod text;

pub use extract::extract_vin;
pub use text::{FORBIDDEN_LETTERS, VIN_LENGTH, Vin, VinError, normalize, validate};
