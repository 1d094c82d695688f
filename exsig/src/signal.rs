//! The error signal cell: an integer code plus a bounded message buffer.

use core::fmt::{self, Write};

use nix::errno::Errno;

use crate::Raised;

/// Maximum stored message length in bytes.
///
/// Messages longer than this are truncated at a character boundary;
/// truncation is silent and never produces invalid UTF-8.
pub const MSG_CAPACITY: usize = 511;

/// A single error cell holding the most recently raised error.
///
/// `code == 0` means no error is signaled and [`message`](Self::message)
/// returns `""`. Raising overwrites any previous state unconditionally;
/// there is no stacking or chaining.
///
/// Most callers use the thread-local cell through the free functions in this
/// crate (see [`raise!`](crate::raise!), [`is_set`](crate::is_set), ...).
/// An `ErrorSignal` value can also be owned directly and threaded through
/// call signatures when an explicit error context is preferred.
///
/// # Example
///
/// ```rust
/// use exsig::ErrorSignal;
///
/// let mut signal = ErrorSignal::new();
/// assert!(!signal.is_set());
///
/// signal.raise(nix::errno::Errno::EINVAL as i32, format_args!("bad input"));
/// assert!(signal.is_set());
/// assert_eq!(signal.message(), "Invalid argument : bad input");
///
/// signal.clear();
/// assert_eq!(signal.code(), 0);
/// ```
pub struct ErrorSignal {
    code: i32,
    message: heapless::String<MSG_CAPACITY>,
}

impl ErrorSignal {
    /// Create an unset signal.
    pub const fn new() -> Self {
        Self {
            code: 0,
            message: heapless::String::new(),
        }
    }

    // =========================================================================
    // Raising
    // =========================================================================

    /// Record an error with only its default description.
    ///
    /// The description is the platform errno text when `code` maps to a known
    /// errno value, otherwise `Unknown error <code>`. The previous state, if
    /// any, is overwritten.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if `code` is 0, which is reserved for "no error".
    pub fn raise_code(&mut self, code: i32) -> Raised {
        self.record(code);
        self.snapshot()
    }

    /// Record an error with a formatted custom message.
    ///
    /// The stored message is the default description for `code`, the literal
    /// separator `" : "`, then the formatted text. If the description were
    /// empty the formatted text would stand alone, with no leading separator.
    /// All writes are bounded by [`MSG_CAPACITY`]; overflow truncates
    /// silently.
    pub fn raise(&mut self, code: i32, args: fmt::Arguments<'_>) -> Raised {
        self.record(code);
        let mut out = Truncating(&mut self.message);
        if !out.0.is_empty() {
            let _ = out.write_str(" : ");
        }
        let _ = out.write_fmt(args);
        self.snapshot()
    }

    /// Store the code and write its default description from offset 0.
    fn record(&mut self, code: i32) {
        debug_assert!(code != 0, "error code 0 is reserved for the unset state");
        self.code = code;
        self.message.clear();
        let mut out = Truncating(&mut self.message);
        match Errno::from_raw(code) {
            Errno::UnknownErrno => {
                let _ = write!(out, "Unknown error {}", code);
            }
            errno => {
                let _ = out.write_str(errno.desc());
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether an error is currently signaled.
    pub fn is_set(&self) -> bool {
        self.code != 0
    }

    /// The current error code, 0 when unset.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The current message, `""` when unset.
    pub fn message(&self) -> &str {
        if self.code == 0 {
            ""
        } else {
            self.message.as_str()
        }
    }

    // =========================================================================
    // Resetting
    // =========================================================================

    /// Reset to the unset state. Idempotent.
    pub fn clear(&mut self) {
        self.code = 0;
        self.message.clear();
    }

    /// Snapshot the current error and reset the cell, or `None` when unset.
    pub fn take(&mut self) -> Option<Raised> {
        if self.code == 0 {
            return None;
        }
        let raised = self.snapshot();
        self.clear();
        Some(raised)
    }

    fn snapshot(&self) -> Raised {
        Raised::new(self.code, self.message.as_str())
    }
}

impl Default for ErrorSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded writer over the message buffer. Content past capacity is dropped
/// at a character boundary; writes never report failure outward, so a raise
/// always completes with best-effort content.
struct Truncating<'a>(&'a mut heapless::String<MSG_CAPACITY>);

impl fmt::Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MSG_CAPACITY - self.0.len();
        if s.len() <= remaining {
            let _ = self.0.push_str(s);
        } else {
            let mut end = remaining;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            let _ = self.0.push_str(&s[..end]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_signal_is_unset() {
        let signal = ErrorSignal::new();
        assert!(!signal.is_set());
        assert_eq!(signal.code(), 0);
        assert_eq!(signal.message(), "");
    }

    #[test]
    fn test_raise_sets_state() {
        let mut signal = ErrorSignal::new();
        signal.raise_code(Errno::ENOENT as i32);
        assert!(signal.is_set());
        assert_eq!(signal.code(), Errno::ENOENT as i32);
    }

    #[test]
    fn test_raise_code_uses_platform_description() {
        let mut signal = ErrorSignal::new();
        signal.raise_code(Errno::EOVERFLOW as i32);
        assert_eq!(signal.message(), "Value too large for defined data type");
    }

    #[test]
    fn test_raise_appends_custom_message_after_separator() {
        let mut signal = ErrorSignal::new();
        signal.raise(
            Errno::EINVAL as i32,
            format_args!("Number must be larger than zero"),
        );
        assert_eq!(
            signal.message(),
            "Invalid argument : Number must be larger than zero"
        );
    }

    #[test]
    fn test_unknown_code_gets_fallback_description() {
        let mut signal = ErrorSignal::new();
        signal.raise_code(99999);
        assert_eq!(signal.message(), "Unknown error 99999");

        signal.raise(-7, format_args!("custom detail"));
        assert_eq!(signal.message(), "Unknown error -7 : custom detail");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut signal = ErrorSignal::new();
        signal.raise_code(Errno::EIO as i32);

        signal.clear();
        assert!(!signal.is_set());
        assert_eq!(signal.code(), 0);
        assert_eq!(signal.message(), "");

        signal.clear();
        assert!(!signal.is_set());
        assert_eq!(signal.code(), 0);
    }

    #[test]
    fn test_second_raise_replaces_first() {
        let mut signal = ErrorSignal::new();
        signal.raise(Errno::EINVAL as i32, format_args!("first"));
        signal.raise_code(Errno::ENOMEM as i32);

        assert_eq!(signal.code(), Errno::ENOMEM as i32);
        assert_eq!(signal.message(), "Cannot allocate memory");
        assert!(!signal.message().contains("first"));
    }

    #[test]
    fn test_overlong_message_is_truncated_prefix() {
        let mut signal = ErrorSignal::new();
        let long = "a".repeat(2 * MSG_CAPACITY);
        signal.raise(Errno::EINVAL as i32, format_args!("{}", long));

        let expected_full = format!("Invalid argument : {}", long);
        let stored = signal.message();
        assert_eq!(stored.len(), MSG_CAPACITY);
        assert_eq!(stored, &expected_full[..MSG_CAPACITY]);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let mut signal = ErrorSignal::new();
        // "Invalid argument : x" is 20 bytes, leaving 491 for the 3-byte
        // chars; 491 % 3 == 2, so the last char cannot fit whole and must
        // be dropped entirely rather than split, leaving two bytes unused.
        let long = "€".repeat(MSG_CAPACITY);
        signal.raise(Errno::EINVAL as i32, format_args!("x{}", long));

        let stored = signal.message();
        assert_eq!(stored.len(), MSG_CAPACITY - 2);
        assert!(stored.starts_with("Invalid argument : x€"));
        assert!(stored.ends_with('€'));
    }

    #[test]
    fn test_exact_fit_is_not_truncated() {
        let mut signal = ErrorSignal::new();
        let prefix_len = "Invalid argument : ".len();
        let filler = "x".repeat(MSG_CAPACITY - prefix_len);
        signal.raise(Errno::EINVAL as i32, format_args!("{}", filler));

        assert_eq!(signal.message().len(), MSG_CAPACITY);
        assert!(signal.message().ends_with('x'));
    }

    #[test]
    fn test_take_returns_snapshot_and_clears() {
        let mut signal = ErrorSignal::new();
        assert!(signal.take().is_none());

        signal.raise(Errno::EINVAL as i32, format_args!("detail"));
        let raised = signal.take().expect("error was set");
        assert_eq!(raised.code(), Errno::EINVAL as i32);
        assert_eq!(raised.message(), "Invalid argument : detail");
        assert!(!signal.is_set());
        assert!(signal.take().is_none());
    }

    #[test]
    fn test_raise_returns_matching_snapshot() {
        let mut signal = ErrorSignal::new();
        let raised = signal.raise(Errno::ENOENT as i32, format_args!("missing '{}'", "cfg"));
        assert_eq!(raised.code(), signal.code());
        assert_eq!(raised.message(), signal.message());
    }
}
