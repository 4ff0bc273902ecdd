// benches/search.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use docente::catalog::{Catalog, RawRecord};
use docente::search;

fn synthetic_catalog(n: usize) -> Catalog {
    let professors = ["Juan Pérez", "María García", "José Rodríguez", "Ana Núñez"];
    let campuses = ["Santo Domingo", "Santiago", "Higüey", "La Vega"];

    let records = (0..n)
        .map(|i| RawRecord {
            clave: format!("MAT{:03}", i % 120),
            asignatura: format!("Matemática Básica {}", i % 120),
            profesor: professors[i % professors.len()].to_string(),
            horario: "LUN 08:00-10:00".to_string(),
            provincia: campuses[i % campuses.len()].to_string(),
            nrc: format!("{}", 10_000 + i),
            modalidad: "Presencial".to_string(),
            calificacion: if i % 3 == 0 { "N/A".into() } else { "7/10".into() },
        })
        .collect();

    Catalog::from_records(records)
}

fn bench_filter(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);

    c.bench_function("filter_query_accented", |b| {
        b.iter(|| {
            let view = search::filter(black_box(&catalog), black_box("garcía"), "");
            black_box(view.len())
        })
    });

    c.bench_function("filter_query_and_campus", |b| {
        b.iter(|| {
            let view = search::filter(black_box(&catalog), black_box("mat"), black_box("Santiago"));
            black_box(view.len())
        })
    });

    c.bench_function("filter_empty_query", |b| {
        b.iter(|| {
            let view = search::filter(black_box(&catalog), "", "");
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
