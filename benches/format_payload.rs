use criterion::{criterion_group, criterion_main, Criterion};
use debug_overlay::overlay::{format_payload, DisplayOptions, DisplayText};
use debug_overlay::Payload;

fn bench_format(c: &mut Criterion) {
    let rows: Vec<serde_json::Value> = (0..2_000)
        .map(|i| serde_json::json!({ "id": i, "label": format!("Item {i}"), "tags": ["a", "b"] }))
        .collect();
    let payload = Payload::Value(serde_json::Value::Array(rows));
    let options = DisplayOptions {
        show_line_numbers: true,
        ..DisplayOptions::default()
    };

    c.bench_function("format_2k_rows", |b| b.iter(|| format_payload(Some(&payload))));

    let text = format_payload(Some(&payload));
    c.bench_function("gutter_2k_rows", |b| b.iter(|| DisplayText::new(&text, &options)));
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
