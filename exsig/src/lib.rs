//! # exsig
//!
//! Errno-style ambient error signaling for code that wants an
//! exception-like raise/inspect/clear contract without unwinding.
//!
//! ## Design Philosophy
//!
//! - **One cell per thread**: every thread owns its own error signal, so the
//!   ambient contract stays race-free without locks
//! - **Raise overwrites**: the cell holds only the most recent error; there
//!   is no stacking and no chained causes
//! - **Typed failure**: every raise yields a [`Raised`] value, so fallible
//!   functions return `Result<T, Raised>` and callers cannot silently drop
//!   an error the way a return-value convention allows
//! - **Bounded messages**: composition never overflows the fixed-capacity
//!   buffer; overlong text is truncated silently at a character boundary
//!
//! ## Usage
//!
//! ```rust
//! use nix::errno::Errno;
//!
//! fn checked_double(n: i32) -> exsig::Result<i32> {
//!     n.checked_mul(2)
//!         .ok_or_else(|| exsig::raise!(Errno::EOVERFLOW as i32))
//! }
//!
//! if checked_double(i32::MAX).is_err() {
//!     assert!(exsig::is_set());
//!     assert_eq!(exsig::message(), "Value too large for defined data type");
//!     exsig::clear();
//! }
//! ```
//!
//! ## Calling Convention
//!
//! - A fallible operation raises with [`raise!`] and returns the `Err`
//! - The caller checks [`is_set`] (or matches the `Result`), reads
//!   [`code`]/[`message`] for reporting, then calls [`clear`] before any
//!   further fallible work ([`take`] does inspect-and-clear in one step)
//! - A set signal that nobody reads is inert: nothing logs or crashes

mod current;
mod raised;
mod signal;

pub use current::{clear, code, is_set, message, raise, raise_code, take};
pub use raised::Raised;
pub use signal::{ErrorSignal, MSG_CAPACITY};

/// Result type alias for operations that raise into the error signal.
pub type Result<T> = std::result::Result<T, Raised>;
