//! One output file per CSV row: the template is parsed once, then rendered
//! with each row's bindings and written under the output directory.

pub mod output;
pub mod rows;

use crate::error::{Error, Result};
use crate::tpl::engine::Template;
use crate::tpl::render_context::Bindings;
use log::{debug, error, info};
use output::WriteMode;
use rows::{ROW_INDEX_KEY, RowReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub out_dir: PathBuf,
    /// Remove `out_dir` before writing anything.
    pub clean: bool,
    /// Column whose value names each row's output file.
    pub fname_column: String,
    pub mode: WriteMode,
}

impl BatchOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            clean: false,
            fname_column: ROW_INDEX_KEY.to_string(),
            mode: WriteMode::default(),
        }
    }
}

#[derive(Debug)]
pub struct RowFailure {
    pub row: usize,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files in row order. A file appears once per row written to it.
    pub written: Vec<PathBuf>,
    pub failed: Vec<RowFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render `template` once per row of `csv` into `options.out_dir`.
///
/// Errors reading the template or the CSV abort the batch. A row that fails to
/// render or write is logged and reported, and the next row still runs.
pub fn run(template: &Path, csv: &Path, options: &BatchOptions) -> Result<BatchReport> {
    output::prepare_dir(&options.out_dir, options.clean)?;
    let template = Template::load(template)?;
    let rows = RowReader::from_path(csv)?;
    render_rows(&template, rows, options)
}

/// Render every row produced by `rows`. The output directory must exist.
pub fn render_rows<I>(template: &Template, rows: I, options: &BatchOptions) -> Result<BatchReport>
where
    I: IntoIterator<Item = Result<Bindings>>,
{
    let mut report = BatchReport::default();

    for (n, row) in rows.into_iter().enumerate() {
        let row = row?;
        match render_row(template, &row, n, options) {
            Ok(path) => {
                debug!("Row {}: wrote {}", n, path.display());
                report.written.push(path);
            }
            Err(e) => {
                error!("Row {}: {}", n, e);
                report.failed.push(RowFailure { row: n, error: e });
            }
        }
    }

    info!(
        "Batch: written={}, failed={}, out_dir={}",
        report.written.len(),
        report.failed.len(),
        options.out_dir.display()
    );
    Ok(report)
}

/// Render first, then write: a row that fails to render leaves no output.
fn render_row(template: &Template, row: &Bindings, n: usize, options: &BatchOptions) -> Result<PathBuf> {
    let name = row
        .get(&options.fname_column)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::MissingOutputName {
            column: options.fname_column.clone(),
            row: n,
        })?;

    let text = template.render(row)?;
    let path = options.out_dir.join(name);
    output::write(&path, &text, options.mode)?;
    Ok(path)
}
