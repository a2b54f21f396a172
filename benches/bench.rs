// Criterion benchmarks for Parcheggi Map

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use parcheggi_map::core::{classify, haversine_distance, is_visible, MapOptions, ParkingMap};
use parcheggi_map::models::{Coordinate, Dataset, FilterState, LocationRecord, ReferencePoint};
use std::sync::Arc;

const LABELS: [&str; 6] = [
    "Parcheggio multipiano",
    "Parcheggio a raso",
    "Autorimessa privata",
    "Park & Ride",
    "Stazione FS",
    "Strisce blu",
];

fn create_record(id: usize, lat: f64, lon: f64) -> LocationRecord {
    LocationRecord {
        name: format!("Parcheggio {}", id),
        category: Some(LABELS[id % LABELS.len()].to_string()),
        coordinate: Coordinate::new(lat, lon),
        precomputed_distance_km: None,
        distance_km: 1.0,
        address: None,
        hours: None,
        source_url: None,
    }
}

fn create_reference() -> Arc<ReferencePoint> {
    Arc::new(ReferencePoint {
        name: "Casa".to_string(),
        address: "Via Arturo Chiari 4".to_string(),
        coordinate: Coordinate::new(43.451639, 11.845278),
    })
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(Coordinate::new(43.451639, 11.845278)),
                black_box(Coordinate::new(43.4681, 11.8842)),
            )
        });
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_labels", |b| {
        b.iter(|| {
            for label in LABELS {
                black_box(classify(black_box(Some(label))));
                black_box(is_visible(black_box(Some(label)), &FilterState::all()));
            }
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for record_count in [10, 100, 1000].iter() {
        let records: Vec<LocationRecord> = (0..*record_count)
            .map(|i| {
                let offset = (i as f64 * 0.001) % 0.2;
                create_record(i, 43.4 + offset, 11.8 + offset)
            })
            .collect();
        let map = ParkingMap::new(
            create_reference(),
            Arc::new(Dataset::new(records, 0)),
            MapOptions::default(),
        );

        group.bench_with_input(
            BenchmarkId::new("render", record_count),
            record_count,
            |b, _| {
                b.iter(|| map.render(black_box(&FilterState::new(true, true, false))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_classify,
    bench_render
);

criterion_main!(benches);
