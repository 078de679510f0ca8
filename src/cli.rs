use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sashikomi", version)]
#[command(about = "Render a template once per CSV row, one output file per row", long_about = None)]
pub struct Cli {
    /// Template file
    pub in_tmpl: PathBuf,

    /// Parameter CSV file; the first row names the columns
    pub in_csv: PathBuf,

    /// Output directory
    pub out_dir: PathBuf,

    /// Clean the output directory before writing
    #[arg(long)]
    pub clean: bool,

    /// Column holding each row's output file name
    #[arg(long, default_value = "__n")]
    pub fname: String,

    /// Overwrite output files instead of appending to them
    #[arg(short = 'w', long)]
    pub overwrite: bool,
}
