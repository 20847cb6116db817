use anyhow::{Context, Result};
use boolsearch_core::DocId;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered document texts; a document's id is its line number (0-based).
pub struct Corpus {
    docs: Vec<String>,
}

impl Corpus {
    pub fn from_lines(docs: Vec<String>) -> Self { Self { docs } }

    /// One document per line. Blank lines are kept so ids stay aligned with line numbers.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self { docs: read_lines(path)? })
    }

    pub fn docs(&self) -> &[String] { &self.docs }

    pub fn get(&self, doc_id: DocId) -> Option<&str> {
        self.docs.get(doc_id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.docs.len() }
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(f);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        lines.push(line.trim_end_matches('\r').to_string());
    }
    Ok(lines)
}
