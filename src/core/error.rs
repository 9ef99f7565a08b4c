//! Error types for vector arithmetic.
//!
//! Failures are reported before any destination is written, so a caller that receives an
//! error still holds its inputs exactly as they were.

use crate::util::linalg::Vector2;
use thiserror::Error;

/// Errors that can occur during [`Vector2`] operations.
///
/// ## Example
///
/// ```rust
/// use vector2::core::prelude::*;
///
/// match linalg::divide(Vector2::new(4.0, 6.0), 0.0) {
///     Ok(v) => println!("quotient: {v}"),
///     Err(LinalgError::DivisionByZero { dividend }) => eprintln!("cannot divide {dividend}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// A vector was divided by a scalar equal to zero (either sign).
    #[error("division by zero: cannot divide {dividend} by 0")]
    DivisionByZero {
        /// The vector that was to be divided.
        dividend: Vector2,
    },
}

/// Result type alias for fallible vector operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LinalgError::DivisionByZero {
            dividend: Vector2::new(1.5, -2.0),
        };
        assert_eq!(
            err.to_string(),
            "division by zero: cannot divide Vector2(1.5, -2) by 0"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<LinalgError>();
    }

    #[test]
    fn error_converts_to_anyhow() {
        fn fallible() -> anyhow::Result<Vector2> {
            Ok(crate::util::linalg::divide(Vector2::one(), 0.0)?)
        }
        let err = fallible().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LinalgError>(),
            Some(LinalgError::DivisionByZero { .. })
        ));
    }
}
