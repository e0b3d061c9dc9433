//! A pocket calculator engine and VIN lookup toolkit.
//!
//! - [`calculator`]: the keypad state machine
//! - [`vin`]: VIN normalization, validation and OCR extraction
//! - [`recents`]: the persisted list of recently decoded VINs
//! - [`decode`]: the remote vehicle-decode client

pub mod calculator;
pub mod config;
pub mod decode;
pub mod recents;
pub mod vin;
