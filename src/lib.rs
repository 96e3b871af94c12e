// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotscope-output
//!
//! Text output sink for .NET method disassembly and decompilation.
//!
//! A disassembler renders one method at a time into a [`output::MethodOutput`]: text
//! fragments, line breaks and indentation changes, plus the method's debug information as
//! out-of-band data. Afterwards the sink hands back the rendered text and the debug
//! information that belongs to the rendered method, presenting compiler-generated `async`
//! and iterator state machines under their user-visible kickoff method.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use dotscope_output::prelude::*;
//!
//! let kickoff = Arc::new(Method::new(
//!     Token::method_def(1),
//!     "LoadAsync",
//!     Some(MethodBody::with_code_size(0x2A)),
//! ));
//! let move_next = Arc::new(Method::new(
//!     Token::method_def(2),
//!     "MoveNext",
//!     Some(MethodBody::with_code_size(0x140)),
//! ));
//!
//! let mut output = MethodOutput::new();
//! output.initialize(kickoff.token);
//! output.write_text("nop", TextStyle::OpCode);
//!
//! // the engine reports the debug info of the state machine it actually rendered
//! let mut debug_info = MethodDebugInfo::new("IL", move_next);
//! debug_info.state_machine_kind = StateMachineKind::AsyncMethod;
//! debug_info.kickoff_method = Some(Arc::clone(&kickoff));
//! output.add_custom_data(debug_info.into());
//!
//! let (shown, state_machine) = output.try_get_method_debug_info().unwrap();
//! assert_eq!(shown.method.token, kickoff.token);
//! assert_eq!(shown.scope.span, ILSpan::new(0, 0x2A));
//! assert_eq!(state_machine.unwrap().method.name, "MoveNext");
//!
//! // reuse for the next method
//! output.reset();
//! assert_eq!(output.length(), 0);
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`output`] - The [`output::DecompilerOutput`] interface and the [`output::MethodOutput`] sink
//! - [`metadata`] - Tokens, methods, body headers and debug information records
//! - [`Error`] and [`Result`] - Error handling for the byte-level readers

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotscope_output::prelude::*;
///
/// let mut output = MethodOutput::new();
/// output.write_text("ret", TextStyle::OpCode);
/// assert_eq!(output.to_string(), "ret");
/// ```
pub mod prelude;

/// Tokens, methods and debug information of generated method text
pub mod metadata;

/// Output sinks for disassembled and decompiled methods
///
/// The [`output::DecompilerOutput`] trait is what producers write through;
/// [`output::MethodOutput`] buffers the text of one method and resolves its debug
/// information, including the kickoff method rule for `async` and iterator state machines.
pub mod output;

/// `dotscope-output` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotscope-output` Error type
///
/// Returned by the byte-level readers, e.g. when parsing a method body header. The output
/// sink itself never fails.
pub use error::Error;
