//! Colored status lines. Every macro prints `label: message`, with the label
//! styled when the stream supports color.

#[doc(hidden)]
#[macro_export]
macro_rules! __status {
    ($print:ident, $stream:ident, $label:literal, $style:expr, $($arg:tt)+) => {
        {
            use owo_colors::OwoColorize;

            $print!(
                "{}: {}",
                $label.if_supports_color(owo_colors::Stream::$stream, |s| s.style($style)),
                format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__status!(eprintln, Stderr, "error", owo_colors::Style::new().bold().red(), $fmt $($arg)*)
    };
    ($single:expr) => {
        $crate::error!("{}", $single)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::__status!(println, Stdout, "warning", owo_colors::Style::new().bold().yellow(), $fmt $($arg)*)
    };
    ($single:expr) => {
        $crate::warn!("{}", $single)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__status!(println, Stdout, "info", owo_colors::Style::new().bold().green(), $($arg)+)
    };
}

/// Prints only when `NODEGEN_TRACE` is set.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        if $crate::log::tracing_enabled() {
            $crate::__status!(println, Stdout, "trace", owo_colors::Style::new().bold(), $($arg)+)
        }
    };
}

#[doc(hidden)]
#[must_use]
pub fn tracing_enabled() -> bool {
    std::env::var_os("NODEGEN_TRACE").is_some()
}

#[cfg(test)]
mod tests {
    #[test]
    fn every_form_expands() {
        let name = "my app";
        let err = std::io::Error::other("boom");

        crate::error!(err);
        crate::error!("{name}: {}", err);
        crate::warn!("Invalid project name \"{name}\"");
        crate::warn!(name);
        crate::info!("Dependencies installed.");
        crate::trace!("Running `{}`", "npm install");
    }
}
