//! Debug information produced alongside disassembled or decompiled method text.
//!
//! A [`MethodDebugInfo`] describes, for one method body, how the generated text maps back to
//! IL instructions: statement spans, the scope tree with its locals, imports and constants,
//! and the parameters. The output sink treats these records as opaque values; it only reads
//! the owning method, the kickoff method, and the fields it needs to derive a kickoff record.
//!
//! # Kickoff methods
//!
//! For `async` and iterator methods the compiler moves the user code into a generated
//! state machine (`MoveNext`). The user-visible method (the *kickoff* method) keeps a short
//! stub that creates and starts the state machine. Debug records for the state machine
//! carry a link to their kickoff method so tooling can present them under its identity;
//! [`MethodDebugInfo::kickoff_stub`] builds the minimal record used for that.
//!
//! # Key Components
//!
//! - [`MethodDebugInfo`] - Debug information of one method body
//! - [`MethodDebugScope`] - Scope tree node with locals, imports and constants
//! - [`StateMachineKind`] - Kind of compiler-generated state machine
//! - [`ILSpan`], [`TextSpan`], [`SourceStatement`] - IL and text ranges

mod types;

pub use types::*;

use strum::{Display, EnumIter};

use crate::metadata::method::MethodRc;

/// Kind of compiler-generated state machine a method body implements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StateMachineKind {
    /// Not a state machine method
    #[default]
    None,
    /// `MoveNext` of an iterator (`yield return`)
    IteratorMethod,
    /// `MoveNext` of an `async` method
    AsyncMethod,
    /// `MoveNext` of an `async` iterator
    AsyncIteratorMethod,
}

impl StateMachineKind {
    /// Returns true for any state machine kind
    #[must_use]
    pub fn is_state_machine(self) -> bool {
        self != StateMachineKind::None
    }
}

/// Await points of an `async` state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsyncMethodDebugInfo {
    /// IL offset of the compiler-generated catch handler, if any
    pub catch_handler_offset: Option<u32>,
    /// IL offsets where execution yields at an `await`
    pub yield_offsets: Vec<u32>,
    /// IL offsets where execution resumes after an `await`
    pub resume_offsets: Vec<u32>,
}

/// Debug information of one method body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDebugInfo {
    /// Name of the decompiler (language) that produced the text
    pub compiler_name: String,
    /// Version of the decompiler settings used to produce the text
    pub decompiler_settings_version: i32,
    /// State machine kind of [`Self::method`]
    pub state_machine_kind: StateMachineKind,
    /// The method whose body this record describes
    pub method: MethodRc,
    /// The user-visible method when [`Self::method`] is a state machine's `MoveNext`
    pub kickoff_method: Option<MethodRc>,
    /// Parameters, `None` if unknown
    pub parameters: Option<Vec<SourceParameter>>,
    /// Statements in text order
    pub statements: Vec<SourceStatement>,
    /// Root scope of the method
    pub scope: MethodDebugScope,
    /// IL range of the whole method, `None` if it equals the body
    pub method_span: Option<ILSpan>,
    /// Await points, only present for async state machines
    pub async_info: Option<AsyncMethodDebugInfo>,
}

impl MethodDebugInfo {
    /// Create a record for `method` with no statements, no parameters and an empty root scope
    /// covering its whole body.
    #[must_use]
    pub fn new(compiler_name: impl Into<String>, method: MethodRc) -> Self {
        let scope = MethodDebugScope::empty(body_span(&method));
        MethodDebugInfo {
            compiler_name: compiler_name.into(),
            decompiler_settings_version: 0,
            state_machine_kind: StateMachineKind::None,
            method,
            kickoff_method: None,
            parameters: None,
            statements: Vec::new(),
            scope,
            method_span: None,
            async_info: None,
        }
    }

    /// Derive the minimal record shown for the kickoff method of this state machine.
    ///
    /// The stub keeps the compiler name and settings version, points at the kickoff method,
    /// and holds a single empty scope over the kickoff method's whole body (an empty span if
    /// it has no body). It has no statements, parameters, locals, imports or constants.
    /// Returns `None` if this record has no kickoff method.
    #[must_use]
    pub fn kickoff_stub(&self) -> Option<MethodDebugInfo> {
        let kickoff = self.kickoff_method.as_ref()?;
        Some(MethodDebugInfo {
            compiler_name: self.compiler_name.clone(),
            decompiler_settings_version: self.decompiler_settings_version,
            state_machine_kind: StateMachineKind::None,
            method: MethodRc::clone(kickoff),
            kickoff_method: None,
            parameters: None,
            statements: Vec::new(),
            scope: MethodDebugScope::empty(body_span(kickoff)),
            method_span: None,
            async_info: None,
        })
    }
}

/// IL span covering the whole body of `method`, saturating at `u32::MAX`
fn body_span(method: &MethodRc) -> ILSpan {
    let size = u32::try_from(method.code_size()).unwrap_or(u32::MAX);
    ILSpan::new(0, size)
}
