//! Formatting options of the output sink.

/// Line terminator written by [`crate::output::DecompilerOutput::write_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The line terminator of the platform this crate was built for
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// The terminator characters
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::native()
    }
}

/// Formatting options of a [`crate::output::MethodOutput`].
///
/// The defaults indent with four spaces per level and end lines with the platform line
/// terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Text written once per indentation level at the start of an indented line
    pub indent_unit: String,
    /// Line terminator
    pub line_ending: LineEnding,
}

impl OutputOptions {
    /// Four spaces, the default indentation unit
    pub const DEFAULT_INDENT: &'static str = "    ";
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            indent_unit: Self::DEFAULT_INDENT.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = OutputOptions::default();
        assert_eq!(options.indent_unit, "    ");
        assert_eq!(options.line_ending, LineEnding::native());
    }

    #[test]
    fn terminators() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
        if cfg!(windows) {
            assert_eq!(LineEnding::native(), LineEnding::CrLf);
        } else {
            assert_eq!(LineEnding::native(), LineEnding::Lf);
        }
    }
}
