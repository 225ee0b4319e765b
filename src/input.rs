#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Write, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A connection request between two sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// first site
    pub p: usize,
    /// second site
    pub q: usize,
}

impl Pair {
    /// Creates a new pair
    pub fn new(p: usize, q: usize) -> Self {
        Self { p, q }
    }
}

impl From<(usize, usize)> for Pair {
    fn from((p, q): (usize, usize)) -> Self {
        Self { p, q }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.p, self.q)
    }
}

/// Errors found while decoding or validating a dataset
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// Text input without the leading site count
    #[error("dataset is missing the number of sites")]
    MissingTotal,
    /// A dataset over zero sites
    #[error("dataset declares zero sites")]
    NoSites,
    /// A token that is not a non-negative integer
    #[error("line {line}: `{token}` is not a site index")]
    InvalidToken {
        /// 1-based line number
        line:  usize,
        /// the token as it appears in the input
        token: String,
    },
    /// An odd number of site indices after the count
    #[error("line {line}: pair is missing its second site")]
    DanglingSite {
        /// 1-based line number of the lone site
        line: usize,
    },
    /// A pair naming a site outside `0..total`
    #[error("pair #{position} ({pair}) references a site outside 0..{total}")]
    OutOfRange {
        /// 1-based position of the pair in the dataset
        position: usize,
        /// the offending pair
        pair:     Pair,
        /// number of sites
        total:    usize,
    },
    /// Malformed JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A number of sites and the pairs to connect, in order.
///
/// Serialized as `{"total": 10, "data": [{"p": 4, "q": 3}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Number of sites
    pub total: usize,
    /// Pairs to connect
    #[serde(default)]
    pub data:  Vec<Pair>,
}

impl Dataset {
    /// Creates a dataset, validating every pair against `total`.
    pub fn new(
        total: usize,
        data: impl IntoIterator<Item = impl Into<Pair>>,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            total,
            data: data.into_iter().map(Into::into).collect(),
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Decodes the JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Decodes the algs4 text form: the number of sites followed by
    /// whitespace separated pairs, e.g. `tinyUF.txt`.
    pub fn from_text(text: &str) -> Result<Self, DatasetError> {
        let mut tokens = text.lines().enumerate().flat_map(|(idx, line)| {
            line.split_whitespace().map(move |token| (idx + 1, token))
        });

        let parse = |(line, token): (usize, &str)| {
            token
                .parse::<usize>()
                .map(|value| (line, value))
                .map_err(|_| DatasetError::InvalidToken {
                    line,
                    token: token.to_string(),
                })
        };

        let (_, total) = parse(tokens.next().ok_or(DatasetError::MissingTotal)?)?;

        let mut data = Vec::new();
        while let Some(first) = tokens.next() {
            let (line, p) = parse(first)?;
            let (_, q) = parse(tokens.next().ok_or(DatasetError::DanglingSite { line })?)?;
            data.push(Pair { p, q });
        }

        let dataset = Self { total, data };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reads a dataset from disk. `.json` files are decoded as JSON, anything
    /// else as algs4 text.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read dataset {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let dataset = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_text(&contents)
        }
        .with_context(|| format!("Could not parse dataset {}", path.display()))?;

        tracing::info!(
            "Loaded {} pairs over {} sites from {}",
            dataset.data.len(),
            dataset.total,
            path.display()
        );
        Ok(dataset)
    }

    /// Renders the algs4 text form.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.total);
        for pair in &self.data {
            let _ = writeln!(out, "{pair}");
        }
        out
    }

    /// Checks that there is at least one site and every pair is in range.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.total == 0 {
            return Err(DatasetError::NoSites);
        }

        match self
            .data
            .iter()
            .position(|pair| pair.p >= self.total || pair.q >= self.total)
        {
            Some(idx) => Err(DatasetError::OutOfRange {
                position: idx + 1,
                pair:     self.data[idx],
                total:    self.total,
            }),
            None => Ok(()),
        }
    }
}
