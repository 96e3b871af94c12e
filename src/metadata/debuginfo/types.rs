//! Value types carried inside a [`crate::metadata::debuginfo::MethodDebugInfo`].
//!
//! These are plain owned records. The output sink moves them around unchanged; the only
//! ones it ever builds itself are an [`ILSpan`] and an empty [`MethodDebugScope`].

use std::ops::Range;

use crate::metadata::token::Token;

/// A half-open range `[start, end)` of IL offsets within one method body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ILSpan {
    /// First IL offset covered
    pub start: u32,
    /// First IL offset past the span
    pub end: u32,
}

impl ILSpan {
    /// Create a span from `start` covering `length` bytes
    #[must_use]
    pub fn new(start: u32, length: u32) -> Self {
        ILSpan {
            start,
            end: start.saturating_add(length),
        }
    }

    /// Create a span from explicit start and end offsets
    #[must_use]
    pub fn from_bounds(start: u32, end: u32) -> Self {
        ILSpan { start, end }
    }

    /// Number of IL bytes covered
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no IL bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if `offset` lies inside the span
    #[must_use]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }
}

impl From<Range<u32>> for ILSpan {
    fn from(range: Range<u32>) -> Self {
        ILSpan::from_bounds(range.start, range.end)
    }
}

/// A span of characters in the generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextSpan {
    /// Offset of the first character
    pub start: usize,
    /// Number of characters
    pub length: usize,
}

impl TextSpan {
    /// Create a new text span
    #[must_use]
    pub fn new(start: usize, length: usize) -> Self {
        TextSpan { start, length }
    }

    /// Offset past the last character, saturating at `usize::MAX`
    #[must_use]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }
}

/// Maps a range of IL instructions to the text generated for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceStatement {
    /// IL instructions of the statement
    pub il_span: ILSpan,
    /// Text written for the statement
    pub text_span: TextSpan,
}

/// A local variable visible in a scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocal {
    /// Name shown in the generated text
    pub name: String,
    /// Slot index in the local variable signature, `None` for decompiler-only locals
    pub index: Option<u32>,
    /// Local was introduced by the decompiler and has no IL slot
    pub is_decompiler_generated: bool,
}

/// A method parameter as named in the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceParameter {
    /// Name shown in the generated text
    pub name: String,
    /// Parameter index, `0` being `this` for instance methods
    pub index: u32,
}

/// One import (using directive) active in a scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportInfo {
    /// Import namespace members
    Namespace {
        /// Namespace name
        namespace: String,
        /// Assembly the namespace is imported from, if restricted
        assembly: Option<String>,
    },
    /// Import the static members of a type
    Type {
        /// Type token
        type_ref: Token,
    },
    /// Alias for a namespace
    NamespaceAlias {
        /// Alias name
        alias: String,
        /// Target namespace
        namespace: String,
    },
    /// Alias for a type
    TypeAlias {
        /// Alias name
        alias: String,
        /// Target type token
        type_ref: Token,
    },
    /// XML namespace prefix (VB)
    XmlNamespace {
        /// Prefix
        alias: String,
        /// Namespace URI
        namespace: String,
    },
}

/// Value of a [`MethodDebugConstant`].
#[derive(Debug, Clone, PartialEq)]
pub enum DebugConstantValue {
    /// `null` reference
    Null,
    /// Boolean constant
    Boolean(bool),
    /// Any integral constant
    Integer(i64),
    /// Floating point constant
    Float(f64),
    /// String constant
    String(String),
}

/// A named local constant visible in a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDebugConstant {
    /// Name shown in the generated text
    pub name: String,
    /// Constant value
    pub value: DebugConstantValue,
}

/// A lexical scope of a method and everything declared inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodDebugScope {
    /// IL range covered by the scope
    pub span: ILSpan,
    /// Nested scopes
    pub scopes: Vec<MethodDebugScope>,
    /// Locals declared in this scope
    pub locals: Vec<SourceLocal>,
    /// Imports active in this scope
    pub imports: Vec<ImportInfo>,
    /// Constants declared in this scope
    pub constants: Vec<MethodDebugConstant>,
}

impl MethodDebugScope {
    /// Create a scope covering `span` with no children, locals, imports or constants
    #[must_use]
    pub fn empty(span: ILSpan) -> Self {
        MethodDebugScope {
            span,
            ..Default::default()
        }
    }

    /// Returns true if this scope declares nothing and has no children
    #[must_use]
    pub fn is_leaf_without_declarations(&self) -> bool {
        self.scopes.is_empty()
            && self.locals.is_empty()
            && self.imports.is_empty()
            && self.constants.is_empty()
    }
}
