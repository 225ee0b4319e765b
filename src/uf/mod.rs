#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Eager strategy, every site stores its component id directly
pub mod quick_find;
/// Lazy strategy, sites form a forest of parent links
pub mod quick_union;
/// Size balanced forest with path halving
pub mod weighted;

pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::WeightedQuickUnion;

/// Errors raised by union-find structures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnionFindError {
    /// A structure was requested over zero sites
    #[error("a union-find structure needs at least one site")]
    Empty,
    /// A site index outside of `0..len`
    #[error("index {index} is out of bounds.")]
    OutOfBounds {
        /// the offending index
        index: usize,
        /// number of sites in the structure
        len:   usize,
    },
    /// Storage for the requested number of sites could not be allocated
    #[error("cannot allocate a union-find structure over {len} sites")]
    TooLarge {
        /// number of sites requested
        len: usize,
    },
}

/// A data structure which can dynamically determine whether two sites are
/// connected.
///
/// Sites are identified by indices in `0..len()`. Every operation taking a
/// site validates it before touching any state.
pub trait UnionFind: Send {
    /// Adds a connection between `p` and `q`. Connecting two sites that are
    /// already connected changes nothing.
    fn union(&mut self, p: usize, q: usize) -> Result<(), UnionFindError>;

    /// Returns the component identifier for `p`.
    ///
    /// Takes `&mut self` since some strategies compress paths while searching.
    fn find(&mut self, p: usize) -> Result<usize, UnionFindError>;

    /// Number of components.
    fn count(&self) -> usize;

    /// Number of sites.
    fn len(&self) -> usize;

    /// Whether the structure has no sites. Construction rejects this, so it is
    /// only ever true for hand-rolled implementations.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` and `q` share a component.
    fn connected(&mut self, p: usize, q: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

/// Checks that `index` names one of `len` sites.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), UnionFindError> {
    if index < len {
        Ok(())
    } else {
        Err(UnionFindError::OutOfBounds { index, len })
    }
}

/// An empty vector with room for exactly `len` entries. Sizes the allocator
/// refuses become an error instead of an abort.
fn reserve(len: usize) -> Result<Vec<usize>, UnionFindError> {
    let mut entries = Vec::new();
    entries
        .try_reserve_exact(len)
        .map_err(|_| UnionFindError::TooLarge { len })?;
    Ok(entries)
}

/// One entry per site, each pointing at itself. Rejects zero sites.
pub(crate) fn singletons(len: usize) -> Result<Vec<usize>, UnionFindError> {
    if len == 0 {
        return Err(UnionFindError::Empty);
    }
    let mut entries = reserve(len)?;
    entries.extend(0..len);
    Ok(entries)
}

/// `len` copies of `value`.
pub(crate) fn filled(len: usize, value: usize) -> Result<Vec<usize>, UnionFindError> {
    let mut entries = reserve(len)?;
    entries.resize(len, value);
    Ok(entries)
}

/// Names the available union-find strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// See [`QuickFind`]
    QuickFind,
    /// See [`QuickUnion`]
    QuickUnion,
    /// See [`WeightedQuickUnion`]
    Weighted,
}

impl Algorithm {
    /// Every strategy, in order of increasing sophistication.
    pub const ALL: [Algorithm; 3] =
        [Algorithm::QuickFind, Algorithm::QuickUnion, Algorithm::Weighted];

    /// The name used on the command line and in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::QuickFind => "quick-find",
            Algorithm::QuickUnion => "quick-union",
            Algorithm::Weighted => "weighted",
        }
    }

    /// Builds a fresh structure over `n` sites using this strategy.
    pub fn build(&self, n: usize) -> Result<Box<dyn UnionFind>, UnionFindError> {
        Ok(match self {
            Algorithm::QuickFind => Box::new(QuickFind::new(n)?),
            Algorithm::QuickUnion => Box::new(QuickUnion::new(n)?),
            Algorithm::Weighted => Box::new(WeightedQuickUnion::new(n)?),
        })
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick-find" | "quickfind" | "qf" => Ok(Algorithm::QuickFind),
            "quick-union" | "quickunion" | "qu" => Ok(Algorithm::QuickUnion),
            "weighted" | "weighted-quick-union" | "wqu" => Ok(Algorithm::Weighted),
            other => anyhow::bail!(
                "unknown algorithm `{other}`, expected one of: {}",
                Algorithm::ALL.iter().map(Algorithm::name).join(", ")
            ),
        }
    }
}

/// Groups every site by component.
///
/// Members of a group are ascending and groups are ordered by their smallest
/// member, so the output does not depend on which site a strategy picks as
/// the component identifier.
pub fn components(uf: &mut dyn UnionFind) -> Result<Vec<Vec<usize>>, UnionFindError> {
    let mut roots = Vec::with_capacity(uf.len());
    for site in 0..uf.len() {
        roots.push((uf.find(site)?, site));
    }

    Ok(roots
        .into_iter()
        .into_group_map()
        .into_values()
        .sorted_unstable_by_key(|group| group.first().copied())
        .collect())
}
