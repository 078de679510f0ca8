use crate::error::{Error, Result};
use crate::tpl::render_context::Bindings;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Binding added to every row, holding the 0-based index of the data row.
pub const ROW_INDEX_KEY: &str = "__n";

/// Reads CSV data rows as binding tables.
///
/// The first record is the header. Each later record maps header names to its
/// fields positionally; a record with fewer fields than the header binds only
/// the columns it has, extra fields are ignored. `__n` is always set and
/// overrides a column of the same name.
pub struct RowReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    header: Vec<String>,
    index: usize,
}

impl RowReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read> RowReader<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr)
            .into_records();

        let header = match records.next() {
            Some(record) => record?.iter().map(String::from).collect(),
            None => Vec::new(),
        };

        Ok(Self {
            records,
            header,
            index: 0,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Bindings>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        let mut row: Bindings = self
            .header
            .iter()
            .cloned()
            .zip(record.iter().map(String::from))
            .collect();
        row.insert(ROW_INDEX_KEY.to_string(), self.index.to_string());
        self.index += 1;

        Some(Ok(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(csv: &str) -> Vec<Bindings> {
        RowReader::from_reader(csv.as_bytes())
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_rows_are_keyed_by_header() {
        let rows = read_all("name,file\nAnn,a.txt\nBob,b.txt\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Ann");
        assert_eq!(rows[0]["file"], "a.txt");
        assert_eq!(rows[0][ROW_INDEX_KEY], "0");
        assert_eq!(rows[1]["name"], "Bob");
        assert_eq!(rows[1][ROW_INDEX_KEY], "1");
    }

    #[test]
    fn test_short_and_long_records() {
        let rows = read_all("a,b\n1\n1,2,3\n");
        assert_eq!(rows[0].get("a").map(String::as_str), Some("1"));
        assert_eq!(rows[0].get("b"), None);
        assert_eq!(rows[1].len(), 3); // a, b, __n
    }

    #[test]
    fn test_quoted_fields() {
        let rows = read_all("text\n\"hello, \"\"world\"\"\nnext line\"\n");
        assert_eq!(rows[0]["text"], "hello, \"world\"\nnext line");
    }

    #[test]
    fn test_row_index_overrides_column() {
        let rows = read_all("__n,x\nfirst,1\n");
        assert_eq!(rows[0][ROW_INDEX_KEY], "0");
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        let reader = RowReader::from_reader("".as_bytes()).unwrap();
        assert!(reader.header().is_empty());
        assert_eq!(reader.count(), 0);

        assert!(read_all("only,header\n").is_empty());
    }
}
