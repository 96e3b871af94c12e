//! In-memory output sink for the text of a single method.
//!
//! [`MethodOutput`] buffers text, applies indentation and collects the debug information
//! of the method it was initialized for. One instance is meant to be reused across many
//! methods: [`MethodOutput::reset`] returns it to its freshly constructed state while
//! keeping the buffer allocation.
//!
//! # Debug information and kickoff methods
//!
//! Debug records are matched against the announced method token. When the engine renders
//! an `async` or iterator method, the record it attaches may describe the compiler-generated
//! state machine instead, linking back to the announced method as its kickoff method. In
//! that case the sink keeps the state machine record and derives a minimal record for the
//! kickoff method, so consumers show the state machine nested under the method the user
//! asked for. See [`MethodOutput::try_get_method_debug_info`].

use std::fmt;

use crate::{
    metadata::{debuginfo::MethodDebugInfo, token::Token},
    output::{CustomData, DecompilerOutput, Fragment, OutputOptions},
};

/// Reusable plain-text [`DecompilerOutput`] for one method at a time.
///
/// Lengths and positions are byte offsets into the UTF-8 text. The indentation level never
/// drops below zero: an unbalanced [`DecompilerOutput::decrease_indent`] is logged and
/// ignored.
#[derive(Debug, Clone)]
pub struct MethodOutput {
    text: String,
    indent_level: usize,
    add_indent: bool,
    method_token: Token,
    method_debug_info: Option<MethodDebugInfo>,
    kickoff_method_debug_info: Option<MethodDebugInfo>,
    options: OutputOptions,
}

impl MethodOutput {
    /// Create an empty sink with default options
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(OutputOptions::default())
    }

    /// Create an empty sink with the given formatting options
    #[must_use]
    pub fn with_options(options: OutputOptions) -> Self {
        MethodOutput {
            text: String::new(),
            indent_level: 0,
            add_indent: true,
            method_token: Token::default(),
            method_debug_info: None,
            kickoff_method_debug_info: None,
            options,
        }
    }

    /// Formatting options of this sink
    #[must_use]
    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    /// Discard all text, indentation, the announced token and collected debug information.
    ///
    /// Formatting options and the buffer allocation are kept.
    pub fn reset(&mut self) {
        self.text.clear();
        self.indent_level = 0;
        self.add_indent = true;
        self.method_token = Token::default();
        self.method_debug_info = None;
        self.kickoff_method_debug_info = None;
    }

    /// Announce the method this sink now renders.
    ///
    /// Must be called before debug information is attached, otherwise it cannot be matched.
    pub fn initialize(&mut self, method_token: Token) {
        self.method_token = method_token;
    }

    /// The announced method token, null if [`MethodOutput::initialize`] was not called
    #[must_use]
    pub fn method_token(&self) -> Token {
        self.method_token
    }

    /// Current indentation level
    #[must_use]
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Debug information collected for the announced method.
    ///
    /// Returns `(debug_info, state_machine_debug_info)`:
    /// - if the attached record belonged to a state machine whose kickoff method is the
    ///   announced one: the derived kickoff record and the state machine record,
    /// - if it belonged to the announced method itself: that record and `None`,
    /// - `None` if no matching record was attached.
    #[must_use]
    pub fn try_get_method_debug_info(
        &self,
    ) -> Option<(&MethodDebugInfo, Option<&MethodDebugInfo>)> {
        let debug_info = self.method_debug_info.as_ref()?;
        match &self.kickoff_method_debug_info {
            Some(kickoff) => Some((kickoff, Some(debug_info))),
            None => Some((debug_info, None)),
        }
    }

    /// The text written so far
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn add_debug_info(&mut self, debug_info: MethodDebugInfo) {
        if debug_info.method.token == self.method_token {
            self.method_debug_info = Some(debug_info);
            return;
        }

        let is_kickoff = debug_info
            .kickoff_method
            .as_ref()
            .is_some_and(|kickoff| kickoff.token == self.method_token);
        if is_kickoff {
            log::trace!(
                "debug info of {} attached to kickoff method {}",
                debug_info.method.token,
                self.method_token
            );
            self.kickoff_method_debug_info = debug_info.kickoff_stub();
            self.method_debug_info = Some(debug_info);
        } else {
            log::debug!(
                "dropping debug info of {} while rendering {}",
                debug_info.method.token,
                self.method_token
            );
        }
    }

    fn add_indent(&mut self) {
        if !self.add_indent {
            return;
        }

        self.add_indent = false;
        for _ in 0..self.indent_level {
            self.text.push_str(&self.options.indent_unit);
        }
    }
}

impl DecompilerOutput for MethodOutput {
    fn length(&self) -> usize {
        self.text.len()
    }

    fn next_position(&self) -> usize {
        let pending = if self.add_indent {
            self.indent_level * self.options.indent_unit.len()
        } else {
            0
        };
        self.text.len() + pending
    }

    fn uses_custom_data(&self) -> bool {
        true
    }

    fn add_custom_data(&mut self, data: CustomData) {
        match data {
            CustomData::DebugInfo(debug_info) => self.add_debug_info(*debug_info),
            other => log::trace!("ignoring custom data '{}'", other.id()),
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level == 0 {
            log::warn!(
                "unbalanced indentation decrease while rendering {}",
                self.method_token
            );
            return;
        }
        self.indent_level -= 1;
    }

    fn write_line(&mut self) {
        self.add_indent = true;
        self.text.push_str(self.options.line_ending.as_str());
    }

    fn write(&mut self, fragment: Fragment<'_>) {
        self.add_indent();
        match fragment.content() {
            Some(text) => self.text.push_str(text),
            None => log::warn!(
                "skipping fragment with invalid range {:?} of {} bytes",
                fragment.range,
                fragment.text.len()
            ),
        }
    }
}

impl Default for MethodOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MethodOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
