mod cli;

use crate::cli::Cli;
use anyhow::{Context, Result, bail};
use clap::Parser;
use sashikomi::batch::output::WriteMode;
use sashikomi::batch::{self, BatchOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = BatchOptions {
        out_dir: cli.out_dir,
        clean: cli.clean,
        fname_column: cli.fname,
        mode: if cli.overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Append
        },
    };

    let report = batch::run(&cli.in_tmpl, &cli.in_csv, &options)
        .with_context(|| format!("failed to render {}", cli.in_tmpl.display()))?;

    if !report.is_success() {
        bail!(
            "{} of {} rows failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }
    Ok(())
}
