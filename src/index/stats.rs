use crate::index::loader;
use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Display index statistics
pub fn show_stats(index_path: &Path) -> Result<()> {
    let index = loader::load_path(index_path)?;

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Index file:       {}", index_path.display());
    println!("Entry count:      {}", index.len());

    // Count distinct pages (by the path portion of the location)
    let pages: HashSet<&str> = index.entries().map(|e| e.page_path()).collect();
    println!("Page count:       {}", pages.len());

    let anchored = index.entries().filter(|e| e.anchor().is_some()).count();
    println!("Anchored entries: {}", anchored);

    let empty_text = index.entries().filter(|e| e.text.is_empty()).count();
    println!("Empty-text:       {}", empty_text);

    // Breakdown by category tag
    let mut category_counts: HashMap<&str, usize> = HashMap::new();
    for entry in index.entries() {
        *category_counts.entry(entry.category.as_str()).or_insert(0) += 1;
    }

    println!();
    println!("Entries by category:");
    let mut sorted: Vec<_> = category_counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    for (category, count) in sorted {
        println!("  {:15} {}", category, count);
    }

    // File size on disk
    if let Ok(meta) = std::fs::metadata(index_path) {
        println!();
        println!("Index size:       {}", format_size(meta.len()));
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
