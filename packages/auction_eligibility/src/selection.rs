use std::fmt;
use std::ops::Bound;
use std::str::FromStr;

use crate::{All, Current, Eliminate, Error, Subsequent};

/// Selects one of the elimination strategies at runtime.
///
/// This is the form to use when the strategy comes from configuration. It implements
/// [`Eliminate`] by dispatching to the matching strategy type and can be parsed from the
/// strategy name (case-insensitive).
///
/// # Examples
///
/// ```
/// use auction_eligibility::{Eliminate, EligibilityMatrix, EliminationStrategy};
///
/// let strategy = "Subsequent".parse::<EliminationStrategy>().unwrap();
/// assert_eq!(strategy, EliminationStrategy::Subsequent);
///
/// let mut matrix = EligibilityMatrix::new(1, 3);
/// strategy.eliminate(0, 1, &mut matrix).unwrap();
///
/// assert_eq!(matrix.row(0), Some(&[true, false, false][..]));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EliminationStrategy {
    /// See [`Subsequent`].
    Subsequent,

    /// See [`All`].
    All,

    /// See [`Current`].
    Current,
}

impl EliminationStrategy {
    /// Every available strategy.
    pub const VARIANTS: [Self; 3] = [Self::Subsequent, Self::All, Self::Current];

    /// The lowercase name of the strategy, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Subsequent => "subsequent",
            Self::All => "all",
            Self::Current => "current",
        }
    }
}

impl Eliminate for EliminationStrategy {
    fn columns(&self, auction: usize) -> (Bound<usize>, Bound<usize>) {
        match self {
            Self::Subsequent => Subsequent.columns(auction),
            Self::All => All.columns(auction),
            Self::Current => Current.columns(auction),
        }
    }
}

impl FromStr for EliminationStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::VARIANTS
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for EliminationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
