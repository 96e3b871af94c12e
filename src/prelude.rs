//! # dotscope-output Prelude
//!
//! Re-exports the types needed to render a method into a [`MethodOutput`] and to build the
//! debug records attached to it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type
pub use crate::Error;

/// The result type used throughout the crate
pub use crate::Result;

// ================================================================================================
// Output
// ================================================================================================

/// Output interface and the plain-text method sink
pub use crate::output::{
    CustomData, CustomDataKind, DecompilerOutput, Fragment, LineEnding, MethodOutput,
    OutputOptions, ReferenceFlags, TextReference, TextStyle,
};

// ================================================================================================
// Metadata
// ================================================================================================

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

/// Methods and body headers
pub use crate::metadata::method::{Method, MethodBody, MethodRc};

/// Debug information records
pub use crate::metadata::debuginfo::{
    ILSpan, MethodDebugInfo, MethodDebugScope, SourceStatement, StateMachineKind, TextSpan,
};
