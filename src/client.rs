#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use futures::future::try_join_all;
use serde::Serialize;
use tabled::Tabled;

use crate::{
    input::{Dataset, Pair},
    uf::{Algorithm, UnionFind, UnionFindError},
};

/// Outcome of feeding a sequence of pairs to a union-find structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Pairs that joined two previously separate components, in input order
    pub connections: Vec<Pair>,
    /// Number of components left
    pub components:  usize,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pair in &self.connections {
            writeln!(f, "{pair}")?;
        }
        write!(f, "{} components", self.components)
    }
}

/// The classic algs4 client: connects every pair that is not already
/// connected and records it.
pub fn process(uf: &mut dyn UnionFind, pairs: &[Pair]) -> Result<Report, UnionFindError> {
    let mut connections = Vec::new();
    for &pair in pairs {
        if uf.connected(pair.p, pair.q)? {
            tracing::debug!("{pair} already connected");
            continue;
        }
        uf.union(pair.p, pair.q)?;
        connections.push(pair);
    }

    Ok(Report {
        connections,
        components: uf.count(),
    })
}

/// Builds `algorithm` over the dataset's sites and processes every pair.
///
/// The structure is returned alongside the report so callers can keep
/// querying it.
pub fn replay(
    algorithm: Algorithm,
    dataset: &Dataset,
) -> Result<(Box<dyn UnionFind>, Report), UnionFindError> {
    let mut uf = algorithm.build(dataset.total)?;
    let report = process(uf.as_mut(), &dataset.data)?;
    tracing::info!(
        "{algorithm}: {} connections, {} components",
        report.connections.len(),
        report.components
    );
    Ok((uf, report))
}

#[derive(Tabled, Debug, Clone, Serialize)]
/// How one algorithm fared on a dataset
pub struct Timing {
    #[tabled(rename = "Algorithm")]
    /// * `algorithm`: the strategy that was run
    pub algorithm:   Algorithm,
    #[tabled(rename = "Components")]
    /// * `components`: components left at the end
    pub components:  usize,
    #[tabled(rename = "Connections")]
    /// * `connections`: pairs that merged two components
    pub connections: usize,
    #[tabled(rename = "Elapsed (µs)", display = "elapsed_micros")]
    /// * `elapsed`: wall clock time spent
    pub elapsed:     Duration,
}

/// Renders a duration as whole microseconds.
fn elapsed_micros(elapsed: &Duration) -> String {
    elapsed.as_micros().to_string()
}

/// Runs every algorithm over `dataset` concurrently, each on a blocking
/// worker, and reports how long each one took. Rows are ordered by algorithm.
pub async fn compare(dataset: Arc<Dataset>) -> Result<Vec<Timing>> {
    let handles = Algorithm::ALL.into_iter().map(|algorithm| {
        let dataset = Arc::clone(&dataset);
        tokio::task::spawn_blocking(move || -> Result<Timing> {
            let start = Instant::now();
            let (_, report) = replay(algorithm, &dataset)
                .with_context(|| format!("{algorithm} failed on the dataset"))?;
            let elapsed = start.elapsed();

            Ok(Timing {
                algorithm,
                components: report.components,
                connections: report.connections.len(),
                elapsed,
            })
        })
    });

    let mut timings = try_join_all(handles)
        .await
        .context("An algorithm worker panicked")?
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    timings.sort_by_key(|timing| timing.algorithm);

    Ok(timings)
}
