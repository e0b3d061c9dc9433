//! Parsing of calculator key presses.
//!
//! A key sequence such as `3+4×2=` turns into the [`Action`]s a keypad would
//! send. Multi-character keys (`AC`, `neg`) are recognised when written as
//! separate whitespace-delimited tokens.

use super::engine::{Action, Operator};
use std::str::FromStr;
use thiserror::Error;

/// A key that does not map to any calculator action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown calculator key: {0:?}")]
pub struct KeyError(pub String);

impl Action {
    /// Map a single key character to an action.
    pub fn from_key(key: char) -> Option<Self> {
        let action = match key {
            '0'..='9' => Self::EnterDigit(key as u8 - b'0'),
            '.' | ',' => Self::EnterDecimalPoint,
            '+' => Self::ApplyOperator(Operator::Add),
            '-' | '−' => Self::ApplyOperator(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Self::ApplyOperator(Operator::Multiply),
            '/' | '÷' => Self::ApplyOperator(Operator::Divide),
            '=' => Self::Equals,
            '%' => Self::Percent,
            '±' | '~' => Self::ToggleSign,
            'c' | 'C' => Self::Clear,
            _ => return None,
        };
        Some(action)
    }
}

impl FromStr for Action {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "ac" | "clear" => return Ok(Self::Clear),
            "neg" | "+/-" => return Ok(Self::ToggleSign),
            _ => {}
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_key(c).ok_or_else(|| KeyError(key.to_string())),
            _ => Err(KeyError(key.to_string())),
        }
    }
}

/// Parse a key sequence into actions.
///
/// Whitespace separates tokens. A token that is a named key (`AC`, `neg`,
/// `+/-`) becomes one action; any other token is read one character at a
/// time.
pub fn parse_keys(input: &str) -> Result<Vec<Action>, KeyError> {
    let mut actions = Vec::new();

    for token in input.split_whitespace() {
        if let Ok(action) = token.parse::<Action>() {
            actions.push(action);
            continue;
        }

        for c in token.chars() {
            let action = Action::from_key(c).ok_or_else(|| KeyError(c.to_string()))?;
            actions.push(action);
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;

    fn eval(keys: &str) -> String {
        let mut calc = Calculator::new();
        calc.press_all(parse_keys(keys).unwrap());
        calc.display().to_string()
    }

    #[test]
    fn test_single_keys() {
        assert_eq!(Action::from_key('7'), Some(Action::EnterDigit(7)));
        assert_eq!(Action::from_key('×'), Some(Action::ApplyOperator(Operator::Multiply)));
        assert_eq!(Action::from_key('?'), None);
        assert_eq!("AC".parse::<Action>(), Ok(Action::Clear));
        assert_eq!("neg".parse::<Action>(), Ok(Action::ToggleSign));
        assert!("sin".parse::<Action>().is_err());
    }

    #[test]
    fn test_sequences() {
        assert_eq!(eval("3+4*2="), "14");
        assert_eq!(eval("3 + 4 × 2 ="), "14");
        assert_eq!(eval("5/0="), "Error");
        assert_eq!(eval("50%"), "0.5");
        assert_eq!(eval("5 neg"), "-5");
        assert_eq!(eval("5 neg neg"), "5");
        assert_eq!(eval("9+1= AC"), "0");
        assert_eq!(eval("1.5*4="), "6");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(parse_keys("2+q"), Err(KeyError("q".to_string())));
    }
}
