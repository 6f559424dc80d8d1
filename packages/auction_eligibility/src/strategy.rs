use std::fmt::Debug;
use std::ops::Bound;

use tracing::{debug, trace};

use crate::metrics::{CELLS_CLEARED, ELIMINATIONS, REJECTED_ELIMINATIONS};
use crate::{EligibilityMatrix, Error};

/// A policy for clearing a bidder's eligibility flags when that bidder is eliminated.
///
/// Implementations only describe which columns of the bidder's row to clear via
/// [`columns()`][Self::columns]. The provided [`eliminate()`][Self::eliminate] validates the
/// request and applies it to the matrix.
///
/// # Examples
///
/// ```
/// use auction_eligibility::{All, Current, Eliminate, EligibilityMatrix};
///
/// let mut matrix = EligibilityMatrix::new(3, 4);
///
/// All.eliminate(0, 1, &mut matrix).unwrap();
/// Current.eliminate(2, 3, &mut matrix).unwrap();
///
/// assert_eq!(matrix.to_string(), "0000\n1111\n1110\n");
/// ```
pub trait Eliminate: Debug {
    /// The columns of the eliminated bidder's row that this strategy clears when the bidder is
    /// eliminated in `auction`.
    ///
    /// The bounds are only used after `auction` has been validated against the matrix, so an
    /// implementation may assume `auction` is a valid column index.
    fn columns(&self, auction: usize) -> (Bound<usize>, Bound<usize>);

    /// Eliminates `bidder` in `auction`, clearing the cells selected by
    /// [`columns()`][Self::columns] in the bidder's row. Other rows are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `bidder` or `auction` is outside the matrix.
    /// The matrix is not modified in this case.
    fn eliminate(
        &self,
        bidder: usize,
        auction: usize,
        matrix: &mut EligibilityMatrix,
    ) -> crate::Result<()> {
        let (bidders, auctions) = matrix.shape();

        let cells = if auction < auctions {
            matrix
                .row_mut(bidder)
                .and_then(|row| row.get_mut(self.columns(auction)))
        } else {
            None
        };

        let Some(cells) = cells else {
            REJECTED_ELIMINATIONS.with(|e| e.observe_once());

            debug!(
                bidder,
                auction,
                bidders,
                auctions,
                strategy = ?self,
                "rejected elimination outside the eligibility matrix"
            );

            return Err(Error::IndexOutOfRange {
                bidder,
                auction,
                bidders,
                auctions,
            });
        };

        let cleared = cells.iter().filter(|cell| **cell).count();
        cells.fill(false);

        ELIMINATIONS.with(|e| e.observe_once());
        CELLS_CLEARED.with(|e| e.observe(cleared));

        trace!(bidder, auction, strategy = ?self, cleared, "eliminated bidder");

        Ok(())
    }
}

/// Eliminates the bidder from the current auction and every later auction.
///
/// Auctions before the current one keep their flags, modeling a bidder that drops out from this
/// round onward while remaining part of rounds already resolved.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[allow(
    clippy::exhaustive_structs,
    reason = "stateless marker type, there is nothing to add"
)]
pub struct Subsequent;

impl Eliminate for Subsequent {
    fn columns(&self, auction: usize) -> (Bound<usize>, Bound<usize>) {
        (Bound::Included(auction), Bound::Unbounded)
    }
}

/// Eliminates the bidder from every auction, including ones before the current auction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[allow(
    clippy::exhaustive_structs,
    reason = "stateless marker type, there is nothing to add"
)]
pub struct All;

impl Eliminate for All {
    fn columns(&self, _auction: usize) -> (Bound<usize>, Bound<usize>) {
        (Bound::Unbounded, Bound::Unbounded)
    }
}

/// Eliminates the bidder from the current auction only.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[allow(
    clippy::exhaustive_structs,
    reason = "stateless marker type, there is nothing to add"
)]
pub struct Current;

impl Eliminate for Current {
    fn columns(&self, auction: usize) -> (Bound<usize>, Bound<usize>) {
        (Bound::Included(auction), Bound::Included(auction))
    }
}
