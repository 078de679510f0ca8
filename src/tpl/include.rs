use crate::error::{Error, Result};
use crate::tpl::parser::parse_template;
use crate::tpl::render;
use crate::tpl::render_context::Context;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the template named by `arg`, resolved against the directory of the
/// including file `source`, with the bindings of the enclosing render.
pub fn include(source: &Path, arg: &str, ctx: &mut Context) -> Result<String> {
    let path = resolve(source, arg);
    debug!(
        "Include: from={}, path={}, depth={}",
        source.display(),
        path.display(),
        ctx.depth()
    );

    let text = read_template(&path)?;
    let root = parse_template(&path, &text);
    render::render_node(&root, ctx)
}

/// Resolve an include argument relative to the directory holding `source`.
pub fn resolve(source: &Path, arg: &str) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    dir.join(arg.trim())
}

pub(crate) fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })
}
