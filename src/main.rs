#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use fitcalc::{Package, cli, process_packages, sample_packages, utils};

#[macro_use]
extern crate fitcalc;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let mut packages: Vec<Package> = Vec::new();
    if let Some(path) = &cli.file {
        packages.extend(utils::read_packages(path)?);
    }
    for raw in &cli.packages {
        let p = Package::parse(raw).with_context(|| format!("parsing package argument {raw:?}"))?;
        packages.push(p);
    }

    if packages.is_empty() && cli.file.is_none() {
        dlog!("mode=sample");
        packages = sample_packages();
    }

    dlog!("packages={} format={:?}", packages.len(), cli.format);

    let summaries = process_packages(&packages)?;
    if summaries.is_empty() {
        anyhow::bail!("No workouts computed. Check the package type codes (SWM, RUN, WLK).");
    }

    for s in &summaries {
        match cli.format {
            cli::Format::Text => println!("{s}"),
            cli::Format::Json => println!("{}", s.to_json()?),
        }
    }

    tracing::info!(workouts = summaries.len(), "done");
    Ok(())
}
