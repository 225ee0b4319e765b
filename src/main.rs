#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # alg
//!
//! Command line front end for the union-find workbook. Datasets are either
//! algs4 text files (`tinyUF.txt` style) or JSON documents shaped like
//! `{"total": 10, "data": [{"p": 4, "q": 3}]}`.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use alg::{
    client, config,
    input::Dataset,
    uf::{self, Algorithm, UnionFind},
};
use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use itertools::Itertools;
use tabled::Table;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Union-find subcommands.
#[derive(Debug, Clone)]
enum UfCmd {
    /// Run the algs4 client over a dataset
    Run(Option<Algorithm>, PathBuf),
    /// List the components left after processing a dataset
    Components(Option<Algorithm>, PathBuf),
    /// Ask whether two sites end up connected
    Connected(Option<Algorithm>, PathBuf, usize, usize),
    /// Time every algorithm on a dataset
    Compare(PathBuf),
    /// Print cost tables
    Info(Option<Algorithm>),
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Union-find operations
    Uf(UfCmd),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the algorithm override
    fn a() -> impl Parser<Option<Algorithm>> {
        short('a')
            .long("algorithm")
            .help("quick-find, quick-union or weighted (defaults to $ALG_ALGORITHM)")
            .argument::<Algorithm>("ALG")
            .optional()
    }

    /// parses dataset path
    fn f() -> impl Parser<PathBuf> {
        positional::<PathBuf>("FILE").help("Dataset, .json or algs4 text")
    }

    /// parses the first site
    fn p() -> impl Parser<usize> {
        positional::<usize>("P").help("Site index")
    }

    /// parses the second site
    fn q() -> impl Parser<usize> {
        positional::<usize>("Q").help("Site index")
    }

    /// parses the algorithm to describe
    fn i() -> impl Parser<Option<Algorithm>> {
        positional::<Algorithm>("ALG")
            .help("Only show this algorithm")
            .optional()
    }

    let uf_run = construct!(UfCmd::Run(a(), f()))
        .to_options()
        .command("run")
        .help("Connect every pair and print the ones that merged components");

    let uf_components = construct!(UfCmd::Components(a(), f()))
        .to_options()
        .command("components")
        .help("Print every component, one per line");

    let uf_connected = construct!(UfCmd::Connected(a(), f(), p(), q()))
        .to_options()
        .command("connected")
        .help("Check whether P and Q are connected once the dataset is processed");

    let uf_compare = construct!(UfCmd::Compare(f()))
        .to_options()
        .command("compare")
        .help("Run every algorithm on a dataset and time them");

    let uf_info = construct!(UfCmd::Info(i()))
        .to_options()
        .command("info")
        .help("Print the time complexity of each operation");

    let uf = construct!([uf_run, uf_components, uf_connected, uf_compare, uf_info])
        .to_options()
        .command("uf")
        .help("Union-find commands")
        .map(Cmd::Uf);

    let cmd = construct!([uf]);

    cmd.to_options()
        .descr("Dynamic connectivity workbook")
        .run()
}

/// Loads a dataset and replays it with `algorithm`, or the configured default.
fn replay(
    algorithm: Option<Algorithm>,
    path: &Path,
) -> Result<(Box<dyn UnionFind>, client::Report)> {
    let algorithm = algorithm.unwrap_or_else(|| config::get().algorithm());
    let dataset = Dataset::from_path(path)?;
    client::replay(algorithm, &dataset)
        .with_context(|| format!("Could not process {} with {algorithm}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = config::get();

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(config.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    let cmd = options();

    match cmd {
        Cmd::Uf(uf_cmd) => match uf_cmd {
            UfCmd::Run(a, f) => {
                let (_, report) = replay(a, &f)?;
                println!("{report}");
            }
            UfCmd::Components(a, f) => {
                let (mut structure, _) = replay(a, &f)?;
                for group in uf::components(structure.as_mut())? {
                    println!("{}", group.iter().join(" "));
                }
            }
            UfCmd::Connected(a, f, p, q) => {
                let (mut structure, _) = replay(a, &f)?;
                let connected = structure
                    .connected(p, q)
                    .with_context(|| format!("Could not query sites {p} and {q}"))?;
                println!("{connected}");
            }
            UfCmd::Compare(f) => {
                let dataset = Arc::new(Dataset::from_path(&f)?);
                let timings = client::compare(dataset).await?;
                println!("{}", Table::new(timings));
            }
            UfCmd::Info(a) => {
                let algorithms = match a {
                    Some(algorithm) => vec![algorithm],
                    None => Algorithm::ALL.to_vec(),
                };
                let tables = algorithms
                    .iter()
                    .map(|algorithm| format!("{algorithm}\n{}", Table::new(algorithm.costs())))
                    .join("\n\n");
                println!("{tables}");
            }
        },
    };

    Ok(())
}
