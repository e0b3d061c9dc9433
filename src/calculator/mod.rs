//! Calculator module implementing a pocket-calculator keypad.
//!
//! This module provides functionality to:
//! - Step the calculator state machine one key press at a time
//! - Parse key sequences into actions
//! - Format numbers for the display

mod engine;
mod format;
mod keys;

pub use engine::{Action, CalcState, Calculator, Entry, Operator, Pending, transition};
pub use format::{ERROR_DISPLAY, format_display, parse_display};
pub use keys::{KeyError, parse_keys};
