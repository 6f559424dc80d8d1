#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Elimination strategies for bidder eligibility in simultaneous multi-round auctions.
//!
//! An auction simulation tracks which bidders may still bid in which auctions using an
//! [`EligibilityMatrix`]: rows are bidders, columns are auctions, and a `true` cell means the
//! bidder is still eligible to bid in that auction.
//!
//! When a bidder is eliminated, the simulation applies an elimination strategy that clears some
//! subset of that bidder's row:
//!
//! * [`Subsequent`] clears the current auction and every later one.
//! * [`All`] clears the entire row, regardless of the current auction.
//! * [`Current`] clears only the current auction.
//!
//! Each strategy is a stateless unit type implementing the [`Eliminate`] trait. When the strategy
//! is chosen at runtime (e.g. from configuration), use the [`EliminationStrategy`] tag, which
//! implements the same trait and can be parsed from its name.
//!
//! # Example
//!
//! ```
//! use auction_eligibility::{Eliminate, EligibilityMatrix, Subsequent};
//!
//! let mut matrix = EligibilityMatrix::new(3, 4);
//!
//! // Bidder 1 drops out in auction 2 but keeps the auctions already resolved.
//! Subsequent.eliminate(1, 2, &mut matrix).unwrap();
//!
//! assert_eq!(matrix.row(1), Some(&[true, true, false, false][..]));
//! assert_eq!(matrix.row(0), Some(&[true, true, true, true][..]));
//! ```
//!
//! Selecting the strategy by name:
//!
//! ```
//! use auction_eligibility::{Eliminate, EligibilityMatrix, EliminationStrategy};
//!
//! let strategy: EliminationStrategy = "current".parse().unwrap();
//!
//! let mut matrix = EligibilityMatrix::new(3, 4);
//! strategy.eliminate(2, 3, &mut matrix).unwrap();
//!
//! assert_eq!(matrix.is_eligible(2, 3), Some(false));
//! assert_eq!(matrix.eligible_count(), 11);
//! ```
//!
//! # Out of range indices
//!
//! Eliminating with a bidder or auction index outside the matrix is a caller bug. It is reported
//! as [`Error::IndexOutOfRange`] before any cell is modified, so a failed call never leaves the
//! matrix partially updated.
//!
//! ```
//! use auction_eligibility::{All, Eliminate, EligibilityMatrix, Error};
//!
//! let mut matrix = EligibilityMatrix::new(2, 2);
//!
//! let error = All.eliminate(5, 0, &mut matrix).unwrap_err();
//! assert!(matches!(error, Error::IndexOutOfRange { bidder: 5, .. }));
//! assert_eq!(matrix.eligible_count(), 4);
//! ```
//!
//! # Observability
//!
//! Eliminations are logged via `tracing` (at `trace` level on success, `debug` level when
//! rejected) and counted via `nm` events whose names start with `auction_eligibility_`.
//! Use `nm::Report::collect()` to inspect the counts.

mod error;
mod matrix;
mod metrics;
mod selection;
mod strategy;

pub use error::*;
pub use matrix::*;
pub use selection::*;
pub use strategy::*;
