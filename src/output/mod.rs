//! Text output for disassembled and decompiled methods.
//!
//! A disassembler or decompiler writes its result through the [`DecompilerOutput`] trait: a
//! stream of text fragments, line breaks and indentation changes, interleaved with
//! [`CustomData`] such as the method's debug information. [`MethodOutput`] is the plain-text
//! implementation used when exactly one method is rendered at a time.
//!
//! # Key Components
//!
//! - [`DecompilerOutput`] - The interface producers write through
//! - [`MethodOutput`] - Reusable in-memory sink for the text of one method
//! - [`Fragment`] - One piece of text with its optional annotations
//! - [`CustomData`] - Out-of-band data attached next to the text
//! - [`OutputOptions`] - Indentation unit and line terminator
//!
//! # Examples
//!
//! ```rust
//! use dotscope_output::{
//!     metadata::token::Token,
//!     output::{DecompilerOutput, LineEnding, MethodOutput, OutputOptions, TextStyle},
//! };
//!
//! let mut output = MethodOutput::with_options(OutputOptions {
//!     line_ending: LineEnding::Lf,
//!     ..OutputOptions::default()
//! });
//! output.initialize(Token::method_def(1));
//!
//! output.write_text(".method", TextStyle::ILDirective);
//! output.write_text(" Main", TextStyle::Method);
//! output.write_line();
//! output.increase_indent();
//! output.write_text("ret", TextStyle::OpCode);
//!
//! assert_eq!(output.to_string(), ".method Main\n    ret");
//! ```

mod customdata;
mod fragment;
mod options;
mod sink;

pub use customdata::{CustomData, CustomDataKind};
pub use fragment::{Fragment, ReferenceFlags, TextReference, TextStyle};
pub use options::{LineEnding, OutputOptions};
pub use sink::MethodOutput;

/// Interface a disassembler or decompiler writes its output through.
///
/// Text is appended in call order. Indentation is applied lazily: after
/// [`DecompilerOutput::write_line`] the indentation of the new line is only written
/// together with the next fragment, at the indentation level current at that point.
pub trait DecompilerOutput {
    /// Number of bytes written so far
    fn length(&self) -> usize;

    /// Offset the next written text will start at, including pending indentation
    fn next_position(&self) -> usize;

    /// Returns true if the sink consumes [`CustomData`], letting producers skip building it
    fn uses_custom_data(&self) -> bool;

    /// Attach out-of-band data. Sinks ignore data they don't understand.
    fn add_custom_data(&mut self, data: CustomData);

    /// Indent following lines one more level
    fn increase_indent(&mut self);

    /// Indent following lines one level less
    fn decrease_indent(&mut self);

    /// End the current line
    fn write_line(&mut self);

    /// Append a fragment, preceded by pending indentation
    fn write(&mut self, fragment: Fragment<'_>);

    /// Append `text` with a style hint
    fn write_text(&mut self, text: &str, style: TextStyle) {
        self.write(Fragment::new(text).with_style(style));
    }

    /// Append `text` that refers to `reference`
    fn write_reference(
        &mut self,
        text: &str,
        reference: &TextReference,
        flags: ReferenceFlags,
        style: TextStyle,
    ) {
        self.write(
            Fragment::new(text)
                .with_reference(reference, flags)
                .with_style(style),
        );
    }
}
