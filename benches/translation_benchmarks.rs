use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use holonet::qa::Translator;
use holonet::query::{build_query, format_answer, Intent, Relation};
use holonet::store::Row;
use serde_json::json;

const QUESTIONS: [&str; 5] = [
    "Quantas naves Han Solo pilota?",
    "Listar citações de Darth Vader",
    "Quem é Luke Skywalker?",
    "Qual o planeta natal de Leia Organa?",
    "Listar personagens",
];

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::default();
    let mut group = c.benchmark_group("translate");

    for question in QUESTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(question), question, |b, q| {
            b.iter(|| translator.translate(black_box(q)))
        });
    }
    group.finish();
}

fn bench_build_query(c: &mut Criterion) {
    c.bench_function("build_query/detail", |b| {
        b.iter(|| build_query(Intent::Detail, black_box(Some("Yoda")), None))
    });
    c.bench_function("build_query/list", |b| {
        b.iter(|| {
            build_query(
                Intent::List,
                black_box(Some("Darth Vader")),
                Some(Relation::Quotes),
            )
        })
    });
}

fn bench_format(c: &mut Criterion) {
    let list: Vec<Row> = (0..50)
        .map(|i| Row::from_json(json!({ "value": format!("Starship {}", i) })))
        .collect();
    let detail = vec![Row::from_json(json!({
        "name": "Luke Skywalker",
        "gender": "male",
        "birth_year": "19BBY",
        "species": "Human",
        "planet": "Tatooine",
        "ships": ["X-wing", "Imperial shuttle"],
        "quotes": ["I am a Jedi, like my father before me."],
    }))];

    c.bench_function("format/list", |b| b.iter(|| format_answer(Intent::List, black_box(&list))));
    c.bench_function("format/detail", |b| {
        b.iter(|| format_answer(Intent::Detail, black_box(&detail)))
    });
}

criterion_group!(benches, bench_translate, bench_build_query, bench_format);
criterion_main!(benches);
