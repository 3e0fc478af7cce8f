// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};
use fbstats_scrape::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = cli::run().map_err(|e| eyre!("{e}"))?;
    println!(
        "Wrote {} rows to {}",
        summary.dataset.row_count(),
        summary.path.display()
    );
    Ok(())
}
