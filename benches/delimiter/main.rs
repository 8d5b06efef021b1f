mod split_nom;
mod split_scanlet;

use criterion::{black_box, criterion_group, Criterion};
use log::trace;
use split_nom::nom_fields;
use split_scanlet::scanlet_fields;

const LINE: &str = "alpha,beta,gamma,delta,epsilon,zeta,eta,theta,iota,kappa";

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("fields_nom", |b| b.iter(|| nom_fields(black_box(LINE))));
}

pub fn bench_scanlet(c: &mut Criterion) {
    c.bench_function("fields_scanlet", |b| {
        b.iter(|| scanlet_fields(black_box(LINE)))
    });
}

criterion_group!(benches, bench_nom, bench_scanlet);
// criterion_main!(benches);

fn main() {
    env_logger::init();
    trace!(target: "scanlet", "logging enabled");
    benches();
    Criterion::default().configure_from_args().final_summary();
}
