#![no_main]

use std::sync::Arc;

use dotscope_output::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = MethodBody::from(data) else {
        return;
    };

    let kickoff = Arc::new(Method::new(Token::method_def(1), "Kickoff", Some(body)));
    let move_next = Arc::new(Method::new(Token::method_def(2), "MoveNext", None));

    let mut debug_info = MethodDebugInfo::new("IL", move_next);
    debug_info.kickoff_method = Some(Arc::clone(&kickoff));

    let mut output = MethodOutput::new();
    output.initialize(kickoff.token);
    output.add_custom_data(debug_info.into());

    let (shown, _) = output
        .try_get_method_debug_info()
        .expect("kickoff debug info must resolve");
    assert_eq!(shown.scope.span.len() as usize, kickoff.code_size());
});
