//! The thread-local error cell and its free-function facade.
//!
//! Each thread owns exactly one [`ErrorSignal`], zero-initialized on first
//! access. Scoping the cell per thread keeps the ambient raise/inspect/clear
//! contract safe under concurrency without any locking: two threads can never
//! observe or overwrite each other's error state.

use core::fmt;
use std::cell::RefCell;

use crate::{ErrorSignal, Raised};

thread_local! {
    static CURRENT: RefCell<ErrorSignal> = const { RefCell::new(ErrorSignal::new()) };
}

/// Record an error with a formatted custom message in the current thread's
/// cell. Usually invoked through the [`raise!`](crate::raise!) macro.
pub fn raise(code: i32, args: fmt::Arguments<'_>) -> Raised {
    CURRENT.with(|cell| cell.borrow_mut().raise(code, args))
}

/// Record an error with only its default description in the current thread's
/// cell.
pub fn raise_code(code: i32) -> Raised {
    CURRENT.with(|cell| cell.borrow_mut().raise_code(code))
}

/// Whether the current thread has a signaled error.
pub fn is_set() -> bool {
    CURRENT.with(|cell| cell.borrow().is_set())
}

/// The current thread's error code, 0 when unset.
pub fn code() -> i32 {
    CURRENT.with(|cell| cell.borrow().code())
}

/// The current thread's error message, `""` when unset.
pub fn message() -> String {
    CURRENT.with(|cell| cell.borrow().message().to_string())
}

/// Reset the current thread's cell to the unset state. Idempotent.
pub fn clear() {
    CURRENT.with(|cell| cell.borrow_mut().clear())
}

/// Snapshot and clear the current thread's error, or `None` when unset.
pub fn take() -> Option<Raised> {
    CURRENT.with(|cell| cell.borrow_mut().take())
}

/// Raise an error in the current thread's cell.
///
/// With a single argument the message is just the default description for
/// the code; with a format string and arguments the formatted text is
/// appended after `" : "`. Yields the [`Raised`] snapshot, so a fallible
/// function raises and fails in one expression:
///
/// ```rust
/// use nix::errno::Errno;
///
/// fn read_setting(name: &str) -> exsig::Result<String> {
///     Err(exsig::raise!(Errno::ENOENT as i32, "no setting named '{}'", name))
/// }
///
/// let err = read_setting("timeout").unwrap_err();
/// assert_eq!(
///     err.message(),
///     "No such file or directory : no setting named 'timeout'"
/// );
/// # exsig::clear();
/// ```
#[macro_export]
macro_rules! raise {
    ($code:expr) => {
        $crate::raise_code($code)
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::raise($code, ::core::format_args!($($arg)+))
    };
}
