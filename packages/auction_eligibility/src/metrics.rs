//! Metrics for elimination requests.
//!
//! The events are per-thread to keep observation cheap when many simulations run in parallel.

use nm::{Event, Magnitude};

/// Histogram buckets for the number of cells cleared by a single elimination.
///
/// `Current` clears at most one cell, while `Subsequent` and `All` clear up to a full row, so
/// the buckets span from nothing to a few thousand auctions.
const CELLS_CLEARED_BUCKETS: &[Magnitude] = &[0, 1, 2, 5, 10, 20, 50, 100, 500, 1000, 5000];

thread_local! {
    /// Event for observing each elimination that was applied to a matrix.
    pub(crate) static ELIMINATIONS: Event = Event::builder()
        .name("auction_eligibility_eliminations")
        .build();

    /// Event for observing how many cells changed from eligible to eliminated in one call.
    ///
    /// Cells that were already eliminated do not count.
    pub(crate) static CELLS_CLEARED: Event = Event::builder()
        .name("auction_eligibility_cells_cleared")
        .histogram(CELLS_CLEARED_BUCKETS)
        .build();

    /// Event for observing eliminations rejected because an index was out of range.
    pub(crate) static REJECTED_ELIMINATIONS: Event = Event::builder()
        .name("auction_eligibility_rejected_eliminations")
        .build();
}
