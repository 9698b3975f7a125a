//! The built-in function registry.
//!
//! The set of plottable functions is fixed and known at compile time, so the
//! registry is a closed enum rather than a table of closures. Keys are the
//! single digits typed into the function selector; unknown keys are rejected
//! when the selection is parsed, before anything reaches the sampler.

use crate::error::{OrdinateError, Result};

/// A plottable function, identified by its selector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `y = x`
    Identity,
    /// `y = x^2`
    Square,
    /// `y = 1` away from zero, `y = 0` at zero (a point discontinuity).
    Notch,
    /// `y = 1/x`, undefined at `x = 0`.
    Reciprocal,
    /// `y = ln x`, defined for `x > 0`.
    NaturalLog,
}

impl Function {
    /// Every registered function, in key order.
    pub const ALL: [Function; 5] = [
        Function::Identity,
        Function::Square,
        Function::Notch,
        Function::Reciprocal,
        Function::NaturalLog,
    ];

    /// The numeric key used in the function selector.
    pub fn key(self) -> u8 {
        match self {
            Function::Identity => 1,
            Function::Square => 2,
            Function::Notch => 3,
            Function::Reciprocal => 4,
            Function::NaturalLog => 5,
        }
    }

    /// Look up a function by selector key.
    pub fn from_key(key: u8) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.key() == key)
    }

    /// The formula shown in the legend and the clipboard header.
    pub fn label(self) -> &'static str {
        match self {
            Function::Identity => "y = x",
            Function::Square => "y = x^2",
            Function::Notch => "y = 1 (x ≠ 0), 0 (x = 0)",
            Function::Reciprocal => "y = 1/x",
            Function::NaturalLog => "y = ln x",
        }
    }

    /// Evaluate the function at `x`.
    ///
    /// Returns `None` outside the function's domain (and for the rare
    /// evaluation that overflows to a non-finite value). Callers treat such
    /// samples as gaps, not failures.
    pub fn evaluate(self, x: f64) -> Option<f64> {
        let y = match self {
            Function::Identity => x,
            Function::Square => x * x,
            Function::Notch => {
                if x == 0.0 {
                    0.0
                } else {
                    1.0
                }
            },
            Function::Reciprocal => {
                if x == 0.0 {
                    return None;
                }
                x.recip()
            },
            Function::NaturalLog => {
                if x <= 0.0 {
                    return None;
                }
                x.ln()
            },
        };
        y.is_finite().then_some(y)
    }

    /// Parse a comma-separated key list ("1,2") into functions.
    ///
    /// Preserves first-seen order and drops duplicate keys. An empty
    /// selection is valid and yields an empty list. Unknown or malformed
    /// keys are rejected with the offending token.
    pub fn parse_selection(text: &str) -> Result<Vec<Function>> {
        let mut selected = Vec::new();
        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let function = token
                .parse::<u8>()
                .ok()
                .and_then(Function::from_key)
                .ok_or_else(|| OrdinateError::unknown_function(token))?;
            if !selected.contains(&function) {
                selected.push(function);
            }
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for function in Function::ALL {
            assert_eq!(Function::from_key(function.key()), Some(function));
        }
        assert_eq!(Function::from_key(0), None);
        assert_eq!(Function::from_key(6), None);
    }

    #[test]
    fn identity_and_square_are_total() {
        assert_eq!(Function::Identity.evaluate(-3.5), Some(-3.5));
        assert_eq!(Function::Square.evaluate(-3.0), Some(9.0));
    }

    #[test]
    fn notch_is_one_except_at_zero() {
        assert_eq!(Function::Notch.evaluate(0.0), Some(0.0));
        assert_eq!(Function::Notch.evaluate(1e-12), Some(1.0));
        assert_eq!(Function::Notch.evaluate(-7.0), Some(1.0));
    }

    #[test]
    fn reciprocal_is_undefined_at_zero() {
        assert_eq!(Function::Reciprocal.evaluate(0.0), None);
        assert_eq!(Function::Reciprocal.evaluate(2.0), Some(0.5));
        assert_eq!(Function::Reciprocal.evaluate(-0.5), Some(-2.0));
    }

    #[test]
    fn natural_log_requires_positive_x() {
        assert_eq!(Function::NaturalLog.evaluate(0.0), None);
        assert_eq!(Function::NaturalLog.evaluate(-1.0), None);
        assert_eq!(Function::NaturalLog.evaluate(1.0), Some(0.0));
    }

    #[test]
    fn overflow_counts_as_undefined() {
        assert_eq!(Function::Square.evaluate(1e200), None);
    }

    #[test]
    fn parse_selection_preserves_order() {
        let selected = Function::parse_selection("2, 1").unwrap();
        assert_eq!(selected, vec![Function::Square, Function::Identity]);
    }

    #[test]
    fn parse_selection_drops_duplicates() {
        let selected = Function::parse_selection("1,1,2").unwrap();
        assert_eq!(selected, vec![Function::Identity, Function::Square]);
    }

    #[test]
    fn parse_selection_accepts_empty() {
        assert!(Function::parse_selection("").unwrap().is_empty());
        assert!(Function::parse_selection(" , ").unwrap().is_empty());
    }

    #[test]
    fn parse_selection_rejects_unknown_keys() {
        let err = Function::parse_selection("1,9").unwrap_err();
        assert!(err.to_string().contains("'9'"));
        assert!(Function::parse_selection("abc").is_err());
    }
}
