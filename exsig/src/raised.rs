//! The typed value produced by a raise.

use std::fmt;

/// An owned snapshot of the error signal taken at raise time.
///
/// Every raise operation returns a `Raised`, so a fallible function can
/// record the error ambiently and hand a typed failure to its caller in one
/// step:
///
/// ```rust
/// use exsig::Result;
///
/// fn parse_port(raw: &str) -> Result<u16> {
///     raw.parse()
///         .map_err(|_| exsig::raise!(1001, "bad port '{}'", raw))
/// }
///
/// let err = parse_port("not-a-port").unwrap_err();
/// assert_eq!(err.code(), 1001);
/// assert_eq!(err.message(), "Unknown error 1001 : bad port 'not-a-port'");
/// # exsig::clear();
/// ```
///
/// Unlike the ambient cell, a `Raised` is immutable: clearing the signal does
/// not affect snapshots already handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raised {
    code: i32,
    message: String,
}

impl Raised {
    pub(crate) fn new(code: i32, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }

    /// The error code recorded by the raise. Always nonzero.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The composed message recorded by the raise.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "error {}", self.code)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for Raised {}
