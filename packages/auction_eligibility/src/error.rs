use thiserror::Error;

/// Errors that can occur when building or updating an eligibility matrix.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A bidder or auction index was outside the bounds of the eligibility matrix.
    ///
    /// The matrix is not modified when this error is returned.
    #[error(
        "cell ({bidder}, {auction}) is outside the eligibility matrix of {bidders} bidders and {auctions} auctions"
    )]
    IndexOutOfRange {
        /// The bidder (row) index that was requested.
        bidder: usize,

        /// The auction (column) index that was requested.
        auction: usize,

        /// Number of bidders (rows) in the matrix.
        bidders: usize,

        /// Number of auctions (columns) in the matrix.
        auctions: usize,
    },

    /// The rows provided to build a matrix did not all have the same number of auctions.
    #[error("row {row} has {actual} auctions but the preceding rows have {expected}")]
    RaggedRows {
        /// Index of the first row whose length did not match.
        row: usize,

        /// Number of auctions in the preceding rows.
        expected: usize,

        /// Number of auctions in the mismatched row.
        actual: usize,
    },

    /// A strategy name did not match any known elimination strategy.
    #[error("unknown elimination strategy '{name}', expected one of: subsequent, all, current")]
    UnknownStrategy {
        /// The name that could not be matched.
        name: String,
    },
}

/// A specialized `Result` type for eligibility operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
