//! Benchmarks for the method output sink.
//!
//! Measures rendering throughput for a typical IL listing and the cost of resolving
//! debug information, including the kickoff method path.

extern crate dotscope_output;

use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, Criterion};
use dotscope_output::prelude::*;

/// Render `lines` lines of IL into `output`, one indentation level deep.
fn render_listing(output: &mut MethodOutput, lines: u32) {
    output.write_text(".method", TextStyle::ILDirective);
    output.write_text(" public hidebysig instance void Run () cil managed", TextStyle::Text);
    output.write_line();
    output.write_text("{", TextStyle::Punctuation);
    output.write_line();
    output.increase_indent();
    for offset in 0..lines {
        let label = format!("IL_{offset:04x}");
        let reference = TextReference::Label(offset);
        output.write_reference(
            &label,
            &reference,
            ReferenceFlags::LOCAL | ReferenceFlags::DEFINITION,
            TextStyle::Label,
        );
        output.write_text(": ", TextStyle::Punctuation);
        output.write_text("ldarg.0", TextStyle::OpCode);
        output.write_line();
    }
    output.decrease_indent();
    output.write_text("}", TextStyle::Punctuation);
}

/// Benchmark rendering a 1000 instruction listing into a reused sink.
fn bench_render_listing(c: &mut Criterion) {
    let mut output = MethodOutput::new();

    c.bench_function("output_render_1000_lines", |b| {
        b.iter(|| {
            output.reset();
            output.initialize(Token::method_def(1));
            render_listing(&mut output, black_box(1000));
            black_box(output.length())
        });
    });
}

/// Benchmark attaching a state machine record and resolving it under its kickoff method.
fn bench_resolve_kickoff(c: &mut Criterion) {
    let kickoff = Arc::new(Method::new(
        Token::method_def(1),
        "RunAsync",
        Some(MethodBody::with_code_size(0x2A)),
    ));
    let move_next = Arc::new(Method::new(
        Token::method_def(2),
        "MoveNext",
        Some(MethodBody::with_code_size(0x140)),
    ));
    let mut debug_info = MethodDebugInfo::new("IL", move_next);
    debug_info.state_machine_kind = StateMachineKind::AsyncMethod;
    debug_info.kickoff_method = Some(Arc::clone(&kickoff));

    let mut output = MethodOutput::new();

    c.bench_function("output_resolve_kickoff", |b| {
        b.iter(|| {
            output.reset();
            output.initialize(kickoff.token);
            output.add_custom_data(black_box(debug_info.clone()).into());
            let resolved = output.try_get_method_debug_info().map(|(shown, _)| shown.scope.span);
            black_box(resolved)
        });
    });
}

criterion_group!(benches, bench_render_listing, bench_resolve_kickoff);
criterion_main!(benches);
