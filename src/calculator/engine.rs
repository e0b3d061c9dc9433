//! The calculator state machine.
//!
//! [`transition`] takes the current [`CalcState`] and one [`Action`] and
//! returns the next state. Operators evaluate left to right as they are
//! pressed (`3 + 4 × 2 =` is `14`), like a pocket calculator.

use super::format::{format_display, parse_display};
use tracing::debug;

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator. Division by zero yields NaN.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }
}

/// A discrete key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Clear,
    /// A single decimal digit, `0..=9`. Values above 9 are clamped to 9.
    EnterDigit(u8),
    EnterDecimalPoint,
    ToggleSign,
    Percent,
    ApplyOperator(Operator),
    Equals,
}

/// Where the current operand is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entry {
    /// The user is typing the current operand.
    #[default]
    Typing,
    /// The display holds a settled value; the next digit starts a new operand.
    Settled,
    /// Equals was just pressed. No operator is pending.
    Evaluated,
}

/// The confirmed left operand together with the operator waiting on it.
///
/// Both halves live in one value so they are always set and cleared together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    pub accumulator: f64,
    pub operator: Operator,
}

/// Complete calculator state.
#[derive(Clone, Debug, PartialEq)]
pub struct CalcState {
    display: String,
    pending: Option<Pending>,
    entry: Entry,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    /// The power-on state: display `"0"`, nothing pending, typing.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            entry: Entry::Typing,
        }
    }

    /// Text currently shown.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The previously confirmed operand, if a computation is pending.
    pub fn accumulator(&self) -> Option<f64> {
        self.pending.map(|p| p.accumulator)
    }

    /// The operator awaiting its second operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn entry(&self) -> Entry {
        self.entry
    }

    /// True while the user is typing the current operand.
    pub fn is_entering(&self) -> bool {
        self.entry == Entry::Typing
    }

    /// True immediately after equals, before any other input.
    pub fn just_evaluated(&self) -> bool {
        self.entry == Entry::Evaluated
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == super::format::ERROR_DISPLAY
    }

    fn value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// A new operand replaces the display instead of extending it.
    fn starts_fresh(&self) -> bool {
        match self.entry {
            Entry::Typing => false,
            Entry::Settled => true,
            Entry::Evaluated => self.pending.is_none(),
        }
    }
}

/// Compute the state that follows `state` after `action`.
///
/// The input is left untouched.
pub fn transition(state: &CalcState, action: Action) -> CalcState {
    let next = match action {
        Action::Clear => CalcState::new(),
        Action::EnterDigit(digit) => enter_digit(state, digit),
        Action::EnterDecimalPoint => enter_decimal_point(state),
        Action::ToggleSign => toggle_sign(state),
        Action::Percent => percent(state),
        Action::ApplyOperator(op) => apply_operator(state, op),
        Action::Equals => equals(state),
    };

    debug!(?action, display = %next.display, entry = ?next.entry, "calculator transition");
    next
}

fn enter_digit(state: &CalcState, digit: u8) -> CalcState {
    let digit = char::from(b'0' + digit.min(9));

    let display = if state.starts_fresh() || state.display == "0" {
        digit.to_string()
    } else {
        format!("{}{}", state.display, digit)
    };

    CalcState {
        display,
        pending: state.pending,
        entry: Entry::Typing,
    }
}

fn enter_decimal_point(state: &CalcState) -> CalcState {
    if state.starts_fresh() {
        return CalcState {
            display: "0.".to_string(),
            pending: state.pending,
            entry: Entry::Typing,
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }

    CalcState {
        display: format!("{}.", state.display),
        pending: state.pending,
        entry: state.entry,
    }
}

fn toggle_sign(state: &CalcState) -> CalcState {
    if state.display == "0" {
        return state.clone();
    }

    CalcState {
        display: format_display(-state.value()),
        ..state.clone()
    }
}

fn percent(state: &CalcState) -> CalcState {
    let entry = match state.entry {
        Entry::Evaluated => Entry::Settled,
        other => other,
    };

    CalcState {
        display: format_display(state.value() / 100.0),
        pending: state.pending,
        entry,
    }
}

fn apply_operator(state: &CalcState, op: Operator) -> CalcState {
    match state.pending {
        // Chained operation: fold the previous operator before installing the new one
        Some(pending) if state.is_entering() => {
            let result = pending.operator.apply(pending.accumulator, state.value());
            CalcState {
                display: format_display(result),
                pending: Some(Pending {
                    accumulator: result,
                    operator: op,
                }),
                entry: Entry::Settled,
            }
        }
        // Operator pressed again without a new operand keeps the accumulator
        Some(pending) => CalcState {
            display: state.display.clone(),
            pending: Some(Pending {
                accumulator: pending.accumulator,
                operator: op,
            }),
            entry: Entry::Settled,
        },
        None => CalcState {
            display: state.display.clone(),
            pending: Some(Pending {
                accumulator: state.value(),
                operator: op,
            }),
            entry: Entry::Settled,
        },
    }
}

fn equals(state: &CalcState) -> CalcState {
    match state.pending {
        None => CalcState {
            display: state.display.clone(),
            pending: None,
            entry: Entry::Evaluated,
        },
        Some(pending) => CalcState {
            display: format_display(pending.operator.apply(pending.accumulator, state.value())),
            pending: None,
            entry: Entry::Evaluated,
        },
    }
}

/// A single-writer session over [`transition`].
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalcState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Apply one action, replacing the held state.
    pub fn press(&mut self, action: Action) -> &CalcState {
        self.state = transition(&self.state, action);
        &self.state
    }

    /// Apply a sequence of actions in order.
    pub fn press_all(&mut self, actions: impl IntoIterator<Item = Action>) -> &CalcState {
        for action in actions {
            self.state = transition(&self.state, action);
        }
        &self.state
    }
}
