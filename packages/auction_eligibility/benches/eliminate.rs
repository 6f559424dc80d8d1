//! Benchmarks applying each elimination strategy to a large eligibility matrix.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use auction_eligibility::{Eliminate, EligibilityMatrix, EliminationStrategy};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const BIDDERS: usize = 64;
const AUCTIONS: usize = 4096;

const BIDDER: usize = BIDDERS / 2;
const AUCTION: usize = AUCTIONS / 2;

fn entrypoint(c: &mut Criterion) {
    let matrix = EligibilityMatrix::new(BIDDERS, AUCTIONS);

    let mut group = c.benchmark_group("eliminate");

    for strategy in EliminationStrategy::VARIANTS {
        group.bench_function(strategy.name(), |b| {
            b.iter_batched_ref(
                || matrix.clone(),
                |matrix| {
                    strategy
                        .eliminate(black_box(BIDDER), black_box(AUCTION), matrix)
                        .unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }

    // Eliminating a bidder that has already been eliminated only scans the row.
    let mut eliminated = matrix.clone();
    EliminationStrategy::All
        .eliminate(BIDDER, AUCTION, &mut eliminated)
        .unwrap();

    group.bench_function("all_already_eliminated", |b| {
        b.iter(|| {
            EliminationStrategy::All
                .eliminate(black_box(BIDDER), black_box(AUCTION), &mut eliminated)
                .unwrap();
        });
    });

    group.finish();
}
