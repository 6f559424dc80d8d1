//! Runs a few rounds of eliminations with each strategy and prints the resulting matrices,
//! followed by the elimination metrics collected along the way.
//!
//! Every elimination is also logged at `trace` level.

use auction_eligibility::{Eliminate, EligibilityMatrix, EliminationStrategy};
use nm::Report;
use tracing::Level;

const BIDDERS: usize = 3;
const AUCTIONS: usize = 4;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .init();

    for strategy in EliminationStrategy::VARIANTS {
        let mut matrix = EligibilityMatrix::new(BIDDERS, AUCTIONS);

        // Bidder 1 is eliminated in auction 2, then bidder 0 in the final auction.
        strategy.eliminate(1, 2, &mut matrix).unwrap();
        strategy.eliminate(0, AUCTIONS - 1, &mut matrix).unwrap();

        println!("=== {strategy} ===");
        print!("{matrix}");
        println!(
            "Eligible cells remaining: {} of {}",
            matrix.eligible_count(),
            BIDDERS * AUCTIONS
        );
        println!();
    }

    let mut matrix = EligibilityMatrix::new(BIDDERS, AUCTIONS);
    match EliminationStrategy::Current.eliminate(BIDDERS, 0, &mut matrix) {
        Ok(()) => println!("Unexpectedly eliminated a bidder outside the matrix"),
        Err(error) => println!("Rejected: {error}"),
    }

    println!();
    println!("{}", Report::collect());
}
