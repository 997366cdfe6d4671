//! crates/logging/src/call_site.rs
//! Source location attached to every emitted diagnostic line.

use std::fmt;

/// Line, file and enclosing function of a diagnostic call.
///
/// Callers normally obtain a value through [`call_site!`](crate::call_site),
/// which fills every field from the invocation point. The type is `Copy` and
/// only borrows static strings, so building one per call costs nothing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    line: u32,
    file: &'static str,
    function: &'static str,
}

impl CallSite {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(line: u32, file: &'static str, function: &'static str) -> Self {
        Self {
            line,
            file,
            function,
        }
    }

    /// Source line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Source file path as reported by `file!()`.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Name of the enclosing function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }
}

/// Renders the location suffix: `at line <line> in <file>:<function>`.
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at line {} in {}:{}",
            self.line, self.file, self.function
        )
    }
}

/// Reduces a `type_name` path of a nested marker item to the bare name of the
/// function that contains it.
///
/// `path` is expected to look like `crate::module::function::{{closure}}::__marker`.
/// Closure segments are skipped so diagnostics emitted from closures still
/// report the named function that owns them.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function_name(path: &'static str) -> &'static str {
    let mut segments = path.rsplit("::").skip(1);
    segments
        .find(|segment| !segment.starts_with('{'))
        .unwrap_or(path)
}

/// Captures the [`CallSite`] of the macro invocation.
///
/// # Examples
///
/// ```
/// use logging::call_site;
///
/// fn open_device() -> logging::CallSite {
///     call_site!()
/// }
///
/// let site = open_device();
/// assert_eq!(site.function(), "open_device");
/// assert!(site.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(
            ::std::line!(),
            ::std::file!(),
            $crate::__private::enclosing_function_name(__type_name_of(__marker)),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_location_suffix() {
        let site = CallSite::new(42, "src/proxy.rs", "connect");
        assert_eq!(site.to_string(), "at line 42 in src/proxy.rs:connect");
    }

    #[test]
    fn enclosing_function_name_strips_marker_and_closures() {
        assert_eq!(
            enclosing_function_name("clkmgr::proxy::connect::__marker"),
            "connect"
        );
        assert_eq!(
            enclosing_function_name("clkmgr::proxy::connect::{{closure}}::__marker"),
            "connect"
        );
        assert_eq!(enclosing_function_name("__marker"), "__marker");
    }

    #[test]
    fn macro_captures_enclosing_function() {
        let site = crate::call_site!();
        assert_eq!(site.function(), "macro_captures_enclosing_function");
        assert_eq!(site.file(), file!());
        assert_eq!(site.line(), line!() - 3);
    }

    #[test]
    fn macro_inside_closure_reports_owner() {
        let capture = || crate::call_site!();
        assert_eq!(capture().function(), "macro_inside_closure_reports_owner");
    }
}
