use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resolver_compose::{
    CandidateList, Composer, FieldCoordinate, ResolutionMode, Resolver, SchemaComposer,
};

fn field_candidates(i: usize, batched: bool) -> Vec<Resolver> {
    vec![
        Resolver::placeholder(format!("Type{i}.field")),
        Resolver::override_method(format!("Type{i}.field"), "Overrides", "field", batched),
        Resolver::other(format!("iface{i}"), ResolutionMode::from_batched(batched)),
        Resolver::property("field"),
    ]
}

fn bench_compose_field(c: &mut Criterion) {
    let composer = Composer::new();
    c.bench_function("compose/field_scalar", |b| {
        b.iter(|| {
            let list = CandidateList::new(field_candidates(0, false)).unwrap();
            black_box(composer.compose(list).unwrap())
        });
    });
    c.bench_function("compose/field_batched", |b| {
        b.iter(|| {
            let list = CandidateList::new(field_candidates(0, true)).unwrap();
            black_box(composer.compose(list).unwrap())
        });
    });
}

fn bench_compose_schema(c: &mut Criterion) {
    c.bench_function("compose/schema_1k_fields", |b| {
        b.iter(|| {
            let mut schema = SchemaComposer::new();
            for i in 0..1000 {
                schema.add_field(
                    FieldCoordinate::new(format!("Type{i}"), "field"),
                    field_candidates(i, i % 3 == 0),
                );
            }
            black_box(schema.build().unwrap())
        });
    });
}

criterion_group!(benches, bench_compose_field, bench_compose_schema);
criterion_main!(benches);
