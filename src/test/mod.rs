//! Fixtures shared by the unit tests.

use std::sync::Arc;

use crate::metadata::{
    debuginfo::{
        AsyncMethodDebugInfo, ILSpan, ImportInfo, MethodDebugInfo, MethodDebugScope,
        SourceLocal, SourceParameter, SourceStatement, StateMachineKind, TextSpan,
    },
    method::{Method, MethodBody, MethodRc},
    token::Token,
};

// Helper function to create a method with a body of `code_size` bytes
pub fn create_method(row: u32, name: &str, code_size: usize) -> MethodRc {
    Arc::new(Method::new(
        Token::method_def(row),
        name,
        Some(MethodBody::with_code_size(code_size)),
    ))
}

// Helper function to create a fully populated debug record for `method`
pub fn create_debug_info(method: &MethodRc) -> MethodDebugInfo {
    let body_len = u32::try_from(method.code_size()).unwrap();
    let mut debug_info = MethodDebugInfo::new("C#", Arc::clone(method));
    debug_info.decompiler_settings_version = 3;
    debug_info.parameters = Some(vec![SourceParameter {
        name: "args".to_string(),
        index: 0,
    }]);
    debug_info.statements = vec![SourceStatement {
        il_span: ILSpan::new(0, body_len),
        text_span: TextSpan::new(0, 12),
    }];
    debug_info.scope = MethodDebugScope {
        span: ILSpan::new(0, body_len),
        scopes: vec![MethodDebugScope::empty(ILSpan::new(0, body_len / 2))],
        locals: vec![SourceLocal {
            name: "i".to_string(),
            index: Some(0),
            is_decompiler_generated: false,
        }],
        imports: vec![ImportInfo::Namespace {
            namespace: "System".to_string(),
            assembly: None,
        }],
        constants: Vec::new(),
    };
    debug_info
}

// Helper function to create the debug record of an async state machine's `MoveNext`
pub fn create_state_machine_debug_info(
    move_next: &MethodRc,
    kickoff: &MethodRc,
) -> MethodDebugInfo {
    let mut debug_info = create_debug_info(move_next);
    debug_info.state_machine_kind = StateMachineKind::AsyncMethod;
    debug_info.kickoff_method = Some(Arc::clone(kickoff));
    debug_info.async_info = Some(AsyncMethodDebugInfo {
        catch_handler_offset: Some(0x30),
        yield_offsets: vec![0x12],
        resume_offsets: vec![0x1A],
    });
    debug_info
}
