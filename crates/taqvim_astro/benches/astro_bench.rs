use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taqvim_astro::{
    Season, delta_t, equation_of_time, equinox_or_solstice, nutation_deg,
    obliquity_of_ecliptic_deg, seasons_of_year, solar_position,
};

fn frames_bench(c: &mut Criterion) {
    let jd = 2_460_389.5;

    let mut group = c.benchmark_group("frames");
    group.bench_function("obliquity", |b| {
        b.iter(|| obliquity_of_ecliptic_deg(black_box(jd)))
    });
    group.bench_function("nutation_63", |b| b.iter(|| nutation_deg(black_box(jd))));
    group.finish();
}

fn sun_bench(c: &mut Criterion) {
    let jd = 2_460_389.5;

    let mut group = c.benchmark_group("sun");
    group.bench_function("solar_position", |b| b.iter(|| solar_position(black_box(jd))));
    group.bench_function("equation_of_time", |b| {
        b.iter(|| equation_of_time(black_box(jd)))
    });
    group.bench_function("delta_t_table", |b| b.iter(|| delta_t(black_box(1987.3))));
    group.finish();
}

fn seasons_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("seasons");
    group.bench_function("march_equinox", |b| {
        b.iter(|| equinox_or_solstice(black_box(2024), Season::MarchEquinox))
    });
    group.bench_function("seasons_of_year", |b| b.iter(|| seasons_of_year(black_box(2024))));
    group.finish();
}

criterion_group!(benches, frames_bench, sun_bench, seasons_bench);
criterion_main!(benches);
