use std::fmt::{self, Write as _};
use std::iter;

use crate::Error;

/// Tracks which bidders are still eligible to bid in which auctions.
///
/// The matrix has one row per bidder and one column per auction. A `true` cell means the bidder
/// is still eligible to participate in that auction. The shape is fixed when the matrix is
/// created.
///
/// Cells are cleared by elimination strategies (see [`Eliminate`][crate::Eliminate]). There is no
/// operation that makes a bidder eligible again, so once a cell is `false` it stays `false`.
///
/// # Examples
///
/// ```
/// use auction_eligibility::EligibilityMatrix;
///
/// let matrix = EligibilityMatrix::new(2, 3);
///
/// assert_eq!(matrix.shape(), (2, 3));
/// assert_eq!(matrix.is_eligible(1, 2), Some(true));
/// assert_eq!(matrix.is_eligible(2, 0), None);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EligibilityMatrix {
    auctions: usize,

    // Every row has exactly `auctions` cells.
    rows: Vec<Box<[bool]>>,
}

impl EligibilityMatrix {
    /// Creates a matrix in which every bidder is eligible for every auction.
    ///
    /// Either dimension may be zero, in which case the matrix has no cells.
    #[must_use]
    pub fn new(bidders: usize, auctions: usize) -> Self {
        Self {
            auctions,
            rows: iter::repeat_with(|| vec![true; auctions].into_boxed_slice())
                .take(bidders)
                .collect(),
        }
    }

    /// Creates a matrix from existing per-bidder rows of eligibility flags.
    ///
    /// An empty sequence of rows produces a matrix with no bidders and no auctions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if the rows do not all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use auction_eligibility::EligibilityMatrix;
    ///
    /// let matrix = EligibilityMatrix::from_rows([[true, false], [false, false]]).unwrap();
    ///
    /// assert_eq!(matrix.eligible_count(), 1);
    /// assert_eq!(matrix.is_fully_eliminated(1), Some(true));
    /// ```
    pub fn from_rows<I>(rows: I) -> crate::Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[bool]>,
    {
        let mut auctions = None;

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let row = row.as_ref();
                let expected = *auctions.get_or_insert(row.len());

                if row.len() != expected {
                    return Err(Error::RaggedRows {
                        row: index,
                        expected,
                        actual: row.len(),
                    });
                }

                Ok(Box::<[bool]>::from(row))
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            auctions: auctions.unwrap_or_default(),
            rows,
        })
    }

    /// Number of bidders (rows) in the matrix.
    #[must_use]
    pub fn bidders(&self) -> usize {
        self.rows.len()
    }

    /// Number of auctions (columns) in the matrix.
    #[must_use]
    pub fn auctions(&self) -> usize {
        self.auctions
    }

    /// The shape of the matrix as `(bidders, auctions)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.bidders(), self.auctions)
    }

    /// Whether `bidder` is still eligible to bid in `auction`.
    ///
    /// Returns `None` if either index is outside the matrix.
    #[must_use]
    pub fn is_eligible(&self, bidder: usize, auction: usize) -> Option<bool> {
        self.row(bidder)?.get(auction).copied()
    }

    /// The eligibility flags of `bidder` for every auction, in auction order.
    ///
    /// Returns `None` if `bidder` is outside the matrix.
    #[must_use]
    pub fn row(&self, bidder: usize) -> Option<&[bool]> {
        self.rows.get(bidder).map(AsRef::as_ref)
    }

    /// Iterates over the rows of all bidders, in bidder order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(AsRef::as_ref)
    }

    /// Iterates over the bidders still eligible to bid in `auction`, in ascending order.
    ///
    /// If `auction` is outside the matrix, no bidders are eligible for it.
    pub fn eligible_bidders(&self, auction: usize) -> impl Iterator<Item = usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| row.get(auction) == Some(&true))
            .map(|(bidder, _)| bidder)
    }

    /// Number of cells that are still eligible across the whole matrix.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| **cell).count())
            .sum()
    }

    /// Whether `bidder` has been eliminated from every auction.
    ///
    /// A bidder in a matrix with zero auctions is considered fully eliminated.
    /// Returns `None` if `bidder` is outside the matrix.
    #[must_use]
    pub fn is_fully_eliminated(&self, bidder: usize) -> Option<bool> {
        self.row(bidder).map(|row| !row.contains(&true))
    }

    pub(crate) fn row_mut(&mut self, bidder: usize) -> Option<&mut [bool]> {
        self.rows.get_mut(bidder).map(AsMut::as_mut)
    }
}

/// Renders one line per bidder, with `1` for an eligible cell and `0` for an eliminated one.
impl fmt::Display for EligibilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                f.write_char(if *cell { '1' } else { '0' })?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::{Debug, Display};
    use std::hash::Hash;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(EligibilityMatrix: Send, Sync, Clone, Debug, Display, Eq, Hash);

    #[test]
    fn new_is_fully_eligible() {
        let matrix = EligibilityMatrix::new(3, 4);

        assert_eq!(matrix.bidders(), 3);
        assert_eq!(matrix.auctions(), 4);
        assert_eq!(matrix.shape(), (3, 4));
        assert_eq!(matrix.eligible_count(), 12);
        assert!(matrix.rows().all(|row| row == [true; 4]));
    }

    #[test]
    fn new_with_zero_dimensions() {
        let no_bidders = EligibilityMatrix::new(0, 5);
        assert_eq!(no_bidders.shape(), (0, 5));
        assert_eq!(no_bidders.eligible_count(), 0);
        assert_eq!(no_bidders.row(0), None);

        let no_auctions = EligibilityMatrix::new(2, 0);
        assert_eq!(no_auctions.shape(), (2, 0));
        assert_eq!(no_auctions.row(1), Some(&[][..]));
        assert_eq!(no_auctions.is_eligible(1, 0), None);
        assert_eq!(no_auctions.is_fully_eliminated(1), Some(true));
    }

    #[test]
    fn from_rows_keeps_flags() {
        let matrix =
            EligibilityMatrix::from_rows(vec![vec![true, false, true], vec![false, true, true]])
                .unwrap();

        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.is_eligible(0, 1), Some(false));
        assert_eq!(matrix.is_eligible(1, 2), Some(true));
        assert_eq!(matrix.eligible_count(), 4);
    }

    #[test]
    fn from_rows_empty_is_empty_matrix() {
        let matrix = EligibilityMatrix::from_rows(Vec::<Vec<bool>>::new()).unwrap();

        assert_eq!(matrix.shape(), (0, 0));
    }

    #[test]
    fn from_rows_ragged_is_error() {
        let result = EligibilityMatrix::from_rows([&[true, true][..], &[true, true][..], &[true][..]]);

        assert_eq!(
            result.unwrap_err(),
            Error::RaggedRows {
                row: 2,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let matrix = EligibilityMatrix::new(2, 3);

        assert_eq!(matrix.is_eligible(2, 0), None);
        assert_eq!(matrix.is_eligible(0, 3), None);
        assert_eq!(matrix.row(2), None);
        assert_eq!(matrix.is_fully_eliminated(2), None);
        assert_eq!(matrix.eligible_bidders(3).count(), 0);
    }

    #[test]
    fn eligible_bidders_in_ascending_order() {
        let matrix = EligibilityMatrix::from_rows([
            [true, false],
            [false, false],
            [true, true],
            [true, false],
        ])
        .unwrap();

        assert_eq!(matrix.eligible_bidders(0).collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(matrix.eligible_bidders(1).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn fully_eliminated_requires_whole_row() {
        let matrix = EligibilityMatrix::from_rows([[false, false], [false, true]]).unwrap();

        assert_eq!(matrix.is_fully_eliminated(0), Some(true));
        assert_eq!(matrix.is_fully_eliminated(1), Some(false));
    }

    #[test]
    fn row_mut_writes_through() {
        let mut matrix = EligibilityMatrix::new(2, 2);

        if let Some(cell) = matrix.row_mut(1).and_then(|row| row.get_mut(0)) {
            *cell = false;
        }

        assert_eq!(matrix.row(1), Some(&[false, true][..]));
        assert!(matrix.row_mut(2).is_none());
    }

    #[test]
    fn display_renders_one_line_per_bidder() {
        let matrix = EligibilityMatrix::from_rows([[true, false, true], [false, false, true]])
            .unwrap();

        assert_eq!(matrix.to_string(), "101\n001\n");
        assert_eq!(EligibilityMatrix::new(0, 3).to_string(), "");
    }
}
