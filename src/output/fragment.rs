//! Text fragments handed to an output sink.
//!
//! A [`Fragment`] bundles everything a producer may say about one piece of text: the text
//! itself, an optional sub-range of it, an optional reference target with
//! [`ReferenceFlags`], and a [`TextStyle`] hint. Plain-text sinks only look at the text;
//! the other fields are there for richer consumers such as syntax highlighters or
//! hyperlinking views.

use std::ops::Range;

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::metadata::token::Token;

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    /// Flags describing how a reference in the text relates to its target
    pub struct ReferenceFlags: u32 {
        /// The text defines the referenced item rather than using it
        const DEFINITION = 0x01;
        /// The reference target is local to the current method (local, label, parameter)
        const LOCAL = 0x02;
        /// The reference is not highlighted as such
        const HIDDEN = 0x04;
        /// The reference cannot be navigated to
        const NO_FOLLOW = 0x08;
    }
}

/// Target a piece of text refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextReference {
    /// A metadata item (type, method, field, ...)
    Token(Token),
    /// A local variable or parameter by name
    Local(String),
    /// A branch target label at an IL offset
    Label(u32),
    /// An IL instruction offset
    ILOffset(u32),
    /// A namespace by full name
    Namespace(String),
}

/// Style hint for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TextStyle {
    /// Unclassified text
    #[default]
    Text,
    /// Whitespace
    Whitespace,
    /// Punctuation and operators
    Punctuation,
    /// Language keyword
    Keyword,
    /// IL directive (`.method`, `.maxstack`, ...)
    ILDirective,
    /// IL opcode mnemonic
    OpCode,
    /// Numeric literal
    Number,
    /// String literal
    String,
    /// Character literal
    Char,
    /// Comment
    Comment,
    /// Branch label
    Label,
    /// Local variable
    Local,
    /// Parameter
    Parameter,
    /// Namespace name
    Namespace,
    /// Type name
    Type,
    /// Method name
    Method,
    /// Field name
    Field,
    /// Property name
    Property,
    /// Event name
    Event,
}

/// One piece of text to append, with optional annotations.
///
/// Built from a `&str` directly or through the `with_*` builders:
///
/// ```rust
/// use dotscope_output::output::{Fragment, ReferenceFlags, TextReference, TextStyle};
///
/// let reference = TextReference::Label(0x12);
/// let fragment = Fragment::new("IL_0012: br.s IL_0020")
///     .with_range(0..7)
///     .with_reference(&reference, ReferenceFlags::LOCAL | ReferenceFlags::DEFINITION)
///     .with_style(TextStyle::Label);
/// assert_eq!(fragment.content(), Some("IL_0012"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Source text
    pub text: &'a str,
    /// Byte range of `text` to write, `None` for all of it
    pub range: Option<Range<usize>>,
    /// Reference target of the text
    pub reference: Option<&'a TextReference>,
    /// Reference flags, only meaningful together with `reference`
    pub flags: ReferenceFlags,
    /// Style hint
    pub style: TextStyle,
}

impl<'a> Fragment<'a> {
    /// Fragment writing all of `text` with no annotations
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Fragment {
            text,
            range: None,
            reference: None,
            flags: ReferenceFlags::empty(),
            style: TextStyle::Text,
        }
    }

    /// Only write the byte range `range` of the text
    #[must_use]
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    /// Attach a reference target
    #[must_use]
    pub fn with_reference(mut self, reference: &'a TextReference, flags: ReferenceFlags) -> Self {
        self.reference = Some(reference);
        self.flags = flags;
        self
    }

    /// Set the style hint
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// The text to be written, `None` if `range` is out of bounds or splits a character
    #[must_use]
    pub fn content(&self) -> Option<&'a str> {
        match &self.range {
            Some(range) => self.text.get(range.clone()),
            None => Some(self.text),
        }
    }
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(text: &'a str) -> Self {
        Fragment::new(text)
    }
}

impl<'a> From<&'a String> for Fragment<'a> {
    fn from(text: &'a String) -> Self {
        Fragment::new(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_text_by_default() {
        let fragment = Fragment::from("ldarg.0");
        assert_eq!(fragment.content(), Some("ldarg.0"));
        assert_eq!(fragment.style, TextStyle::Text);
        assert!(fragment.reference.is_none());
        assert!(fragment.flags.is_empty());
    }

    #[test]
    fn sub_range() {
        let fragment = Fragment::new("call void Foo::Bar()").with_range(5..9);
        assert_eq!(fragment.content(), Some("void"));

        let empty = Fragment::new("abc").with_range(1..1);
        assert_eq!(empty.content(), Some(""));
    }

    #[test]
    fn invalid_sub_range() {
        assert_eq!(Fragment::new("abc").with_range(2..8).content(), None);
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = Fragment::new("abc").with_range(2..1);
        assert_eq!(reversed.content(), None);
        // 'ä' is two bytes, 1..2 splits it
        assert_eq!(Fragment::new("äb").with_range(1..2).content(), None);
    }

    #[test]
    fn reference_annotations() {
        let reference = TextReference::Token(Token::method_def(3));
        let fragment = Fragment::new("Bar")
            .with_reference(&reference, ReferenceFlags::NO_FOLLOW)
            .with_style(TextStyle::Method);
        assert_eq!(fragment.reference, Some(&reference));
        assert_eq!(fragment.flags, ReferenceFlags::NO_FOLLOW);
        assert_eq!(fragment.style.to_string(), "Method");
    }
}
