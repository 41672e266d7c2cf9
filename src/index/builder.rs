use crate::error::{IndexError, Result};
use crate::index::types::{Entry, SearchIndex};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Variable name used by the script-wrapped index form.
///
/// Generated documentation sites load the index as a plain `<script>` tag,
/// so the blob is published as a JavaScript assignment rather than raw JSON.
pub const SCRIPT_VAR: &str = "documenterSearchIndex";

/// Index builder accumulating entries from the documentation pipeline.
///
/// Records pass through in input order with no transformation other than
/// format encoding. A build run produces a complete index; there is no
/// incremental update path.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: Vec<Entry>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-constructed entry
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append an entry from its raw fields
    #[allow(dead_code)]
    pub fn add(
        &mut self,
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) {
        self.entries.push(Entry::new(location, page, title, text, category));
    }

    /// Current entry count
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand over the accumulated entries as an immutable index
    pub fn finish(self) -> SearchIndex {
        SearchIndex { docs: self.entries }
    }
}

/// Serialize an index to its wire format: `{"docs":[...]}`.
///
/// Entries are encoded one at a time so a failure can name the entry that
/// could not be represented.
pub fn to_json(index: &SearchIndex) -> Result<String> {
    // Rough size guess: entry fields plus JSON framing
    let cap: usize = index
        .docs
        .iter()
        .map(|e| {
            e.location.len() + e.page.len() + e.title.len() + e.text.len() + e.category.len() + 64
        })
        .sum();

    let mut out = String::with_capacity(cap + 16);
    out.push_str("{\"docs\":[");

    for (i, entry) in index.docs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let encoded = serde_json::to_string(entry).map_err(|source| IndexError::Encoding {
            location: entry.location.clone(),
            source,
        })?;
        out.push_str(&encoded);
    }

    out.push_str("]}");
    Ok(out)
}

/// Serialize an index to the script-wrapped form used by generated sites:
/// `var documenterSearchIndex = {"docs":[...]}`.
pub fn to_script(index: &SearchIndex) -> Result<String> {
    let json = to_json(index)?;
    Ok(format!("var {} = {}\n", SCRIPT_VAR, json))
}

/// Write the raw JSON blob to disk
pub fn write_json(index: &SearchIndex, path: &Path) -> Result<()> {
    let json = to_json(index)?;
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Write the script-wrapped blob to disk
pub fn write_script(index: &SearchIndex, path: &Path) -> Result<()> {
    let script = to_script(index)?;
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(script.as_bytes())?;
    file.flush()?;
    Ok(())
}
