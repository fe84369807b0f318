//! Engine errors.

use thiserror::Error;

/// Result alias for engine operations.
pub type SolowResult<T> = std::result::Result<T, SolowError>;

/// Errors raised by the simulator and the steady-state calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolowError {
    /// A structural precondition failed before any computation started.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A quantity left the domain where the model is defined.
    /// `period` is `None` when the failure is not tied to a simulated period.
    #[error("numeric domain error{}: {quantity} = {value} ({reason})", at_period(.period))]
    NumericDomain {
        period: Option<usize>,
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },
}

fn at_period(period: &Option<usize>) -> String {
    match period {
        Some(t) => format!(" at period {t}"),
        None => String::new(),
    }
}

impl SolowError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SolowError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn domain(
        period: Option<usize>,
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        SolowError::NumericDomain {
            period,
            quantity,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolowError;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SolowError::invalid("alpha", 1.0, "must lie strictly between 0 and 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter alpha = 1: must lie strictly between 0 and 1"
        );

        let err = SolowError::domain(Some(7), "k", -0.25, "capital per worker must stay positive");
        assert_eq!(
            err.to_string(),
            "numeric domain error at period 7: k = -0.25 (capital per worker must stay positive)"
        );

        let err = SolowError::domain(None, "n + delta", 0.0, "effective depreciation is zero");
        assert_eq!(
            err.to_string(),
            "numeric domain error: n + delta = 0 (effective depreciation is zero)"
        );
    }
}
