use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Column name to value, one table per rendered row.
pub type Bindings = HashMap<String, String>;

/// State of one render pass: the row's bindings and the chain of template
/// files currently being rendered, outermost first.
pub struct Context<'a> {
    bindings: &'a Bindings,
    includes: Vec<PathBuf>,
}

impl<'a> Context<'a> {
    pub fn new(bindings: &'a Bindings) -> Self {
        Self {
            bindings,
            includes: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &'a Bindings {
        self.bindings
    }

    /// Strict lookup; an unbound key fails the whole render.
    pub fn lookup(&self, key: &str) -> Result<&'a str> {
        self.bindings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingVariable {
                key: key.to_string(),
                file: self.current_file().to_path_buf(),
            })
    }

    /// Enter `file`. Fails if it is already being rendered further up the chain.
    pub fn push(&mut self, file: PathBuf) -> Result<()> {
        let key = identity(&file);
        if self.includes.iter().any(|open| identity(open) == key) {
            let mut chain = self.includes.clone();
            chain.push(file);
            return Err(Error::CyclicInclude { chain });
        }
        self.includes.push(file);
        Ok(())
    }

    pub fn pop(&mut self) {
        self.includes.pop();
    }

    pub fn current_file(&self) -> &Path {
        self.includes
            .last()
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(""))
    }

    pub fn depth(&self) -> usize {
        self.includes.len()
    }
}

/// Canonical form used to compare files on the include chain. Paths that do
/// not exist on disk (in-memory templates) compare as written.
fn identity(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
