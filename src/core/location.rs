//! Call-site identity attached to every record

use serde::Serialize;

/// Where a log call was made.
///
/// Built at the call site, usually by [`location!`](crate::location), and
/// copied verbatim into the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub module_path: &'static str,
    /// Fully qualified path of the enclosing function
    pub qualified_function: &'static str,
    /// Last path segment of `qualified_function`
    pub function: &'static str,
}

impl Location {
    pub fn new(
        file: &'static str,
        line: u32,
        module_path: &'static str,
        qualified_function: &'static str,
    ) -> Self {
        Self {
            file,
            line,
            module_path,
            qualified_function,
            function: short_function_name(qualified_function),
        }
    }

    /// Like [`Location::new`], but with the short function name given
    /// explicitly instead of derived, for call sites produced by a generator
    /// or another language's bindings.
    pub fn with_function(
        file: &'static str,
        line: u32,
        module_path: &'static str,
        qualified_function: &'static str,
        function: &'static str,
    ) -> Self {
        Self {
            file,
            line,
            module_path,
            qualified_function,
            function,
        }
    }

    /// File and line of the caller, without function or module identity.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self {
            file: caller.file(),
            line: caller.line(),
            module_path: "",
            qualified_function: "",
            function: "",
        }
    }
}

/// Strip the marker item that `location!` declares from a type name,
/// leaving the path of the function that contains it.
#[doc(hidden)]
pub fn enclosing_function(marker_type_name: &'static str) -> &'static str {
    marker_type_name
        .strip_suffix("::__log_location_marker")
        .unwrap_or(marker_type_name)
}

fn short_function_name(qualified: &'static str) -> &'static str {
    let mut path = qualified;
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Capture the current file, line, module and enclosing function.
///
/// ```
/// use rust_sink_logger::location;
///
/// fn handler() -> rust_sink_logger::Location {
///     location!()
/// }
///
/// let here = handler();
/// assert_eq!(here.function, "handler");
/// assert!(here.file.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! location {
    () => {{
        fn __log_location_marker() {}
        $crate::core::location::Location::new(
            ::std::file!(),
            ::std::line!(),
            ::std::module_path!(),
            $crate::core::location::enclosing_function(::std::any::type_name_of_val(
                &__log_location_marker,
            )),
        )
    }};
}
