//! crates/logging/src/os_error.rs
//! Platform error codes attached to error-level diagnostics.

use std::fmt;
use std::io;

/// Raw value callers pass when no platform error code applies.
pub const NO_ERROR_CODE: i32 = -1;

/// A platform (`errno`-style) error identifier.
///
/// Absence is modelled as `Option<OsErrorCode>`; the raw [`NO_ERROR_CODE`]
/// sentinel never produces a value, so it is never looked up.
///
/// # Examples
///
/// ```
/// use logging::{NO_ERROR_CODE, OsErrorCode};
///
/// assert!(OsErrorCode::from_raw(NO_ERROR_CODE).is_none());
/// let code = OsErrorCode::from_raw(2).unwrap();
/// assert_eq!(code.raw(), 2);
/// assert!(!code.describe().contains("os error"));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OsErrorCode(i32);

impl OsErrorCode {
    /// Wraps a raw code, mapping [`NO_ERROR_CODE`] to `None`.
    #[must_use]
    pub const fn from_raw(code: i32) -> Option<Self> {
        if code == NO_ERROR_CODE {
            None
        } else {
            Some(Self(code))
        }
    }

    /// Extracts the raw OS code carried by an [`io::Error`], if any.
    #[must_use]
    pub fn from_io(error: &io::Error) -> Option<Self> {
        error.raw_os_error().and_then(Self::from_raw)
    }

    /// The raw numeric code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Human-readable description supplied by the platform.
    ///
    /// This is the `strerror` text; the ` (os error N)` suffix that
    /// [`io::Error`]'s `Display` adds is removed. Unknown codes yield whatever
    /// text the platform produces for them.
    #[must_use]
    pub fn describe(self) -> String {
        let rendered = io::Error::from_raw_os_error(self.0).to_string();
        let suffix = format!(" (os error {})", self.0);
        match rendered.strip_suffix(&suffix) {
            Some(description) => description.to_owned(),
            None => rendered,
        }
    }
}

impl fmt::Display for OsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
