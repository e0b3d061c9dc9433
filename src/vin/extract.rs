//! VIN extraction from OCR output.
//!
//! Recognised text is noisy: words, labels, line breaks and stray symbols
//! surround the VIN, and OCR sometimes splits it across lines. Extraction
//! first looks for a whole token that is a VIN, then falls back to scanning
//! the glued-together text.

use super::text::{VIN_LENGTH, has_forbidden_letter};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Matches each run of characters outside the uppercase VIN alphabet.
    static ref NON_ALNUM_RUN: Regex = Regex::new(r"[^A-Z0-9]+").unwrap();
}

/// Find the first plausible VIN in free-form text.
///
/// Returns `None` when nothing qualifies.
pub fn extract_vin(text: &str) -> Option<String> {
    let upper = text.to_uppercase();
    let spaced = NON_ALNUM_RUN.replace_all(&upper, " ");
    let tokens: Vec<&str> = spaced.split_whitespace().collect();

    if let Some(token) = tokens.iter().find(|t| is_vin_candidate(t)) {
        debug!(vin = %token, "VIN found as a whole token");
        return Some((*token).to_string());
    }

    let joined = tokens.concat();
    let found = scan_windows(&joined);
    match &found {
        Some(vin) => debug!(%vin, "VIN found by window scan"),
        None => debug!(tokens = tokens.len(), "no VIN in text"),
    }
    found
}

/// Slide a 17-character window across `joined`, left to right.
fn scan_windows(joined: &str) -> Option<String> {
    // Only ASCII survives the split above, so byte offsets are char offsets
    if joined.len() < VIN_LENGTH {
        return None;
    }

    (0..=joined.len() - VIN_LENGTH)
        .map(|start| &joined[start..start + VIN_LENGTH])
        .find(|window| !has_forbidden_letter(window))
        .map(str::to_string)
}

fn is_vin_candidate(token: &str) -> bool {
    token.len() == VIN_LENGTH && !has_forbidden_letter(token)
}
