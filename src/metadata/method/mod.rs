//! Methods as seen by the output sink.
//!
//! The sink never loads metadata itself. It is handed [`Method`] values by the engine and
//! only reads two facts from them: the metadata token, to match debug records against the
//! announced method, and the IL code size, to scope a synthesized kickoff record.
//!
//! # Key Components
//!
//! - [`Method`] - A method definition with an optional parsed body
//! - [`MethodBody`] - Header information of a CIL method body
//! - [`MethodBodyFlags`] - Flags of the method body header

mod body;
mod types;

pub use body::MethodBody;
pub use types::*;

use std::sync::Arc;

use crate::metadata::token::Token;

/// A reference-counted pointer to a [`Method`]
pub type MethodRc = Arc<Method>;

/// A method definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// The `MethodDef` token of this method
    pub token: Token,
    /// The name of this method
    pub name: String,
    /// The body of this method, `None` for abstract, extern and runtime-implemented methods
    pub body: Option<MethodBody>,
}

impl Method {
    /// Create a new method description
    #[must_use]
    pub fn new(token: Token, name: impl Into<String>, body: Option<MethodBody>) -> Self {
        Method {
            token,
            name: name.into(),
            body,
        }
    }

    /// Size of the IL code of this method in bytes, `0` if the method has no body
    #[must_use]
    pub fn code_size(&self) -> usize {
        self.body.as_ref().map_or(0, |body| body.size_code)
    }

    /// Returns true if this method has a CIL body
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}
