use crate::index::types::{Entry, SearchIndex};
use memchr::memmem::Finder;

/// Which field of an entry satisfied the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// The section title contains the query (ranks first)
    Title,
    /// Only the text content contains the query
    Text,
}

/// A ranked query hit referencing an index entry
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub entry: &'a Entry,
    /// Position of the entry in the original index (the ranking tie-break)
    pub index: usize,
    pub field: MatchField,
}

/// Search options
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum number of hits to return
    pub limit: Option<usize>,
    /// Restrict hits to one category tag ("page", "section", "method", ...)
    pub category: Option<String>,
}

/// Query engine over a loaded search index.
///
/// Lowercased copies of every title and text are built once at construction
/// so each query is a plain substring scan. Searches borrow the index
/// immutably, so calls are independent and reentrant.
pub struct Searcher<'a> {
    index: &'a SearchIndex,
    /// (lowercased title, lowercased text) per entry, in index order
    haystacks: Vec<(String, String)>,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        let haystacks = index
            .docs
            .iter()
            .map(|e| (e.title.to_lowercase(), e.text.to_lowercase()))
            .collect();

        Self { index, haystacks }
    }

    /// Run a case-insensitive substring query.
    ///
    /// Hits whose title contains the query rank before hits matching on text
    /// alone; within each tier, original index order is preserved. An empty
    /// query returns every entry in original order. No match is an empty
    /// result, never an error.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'a>> {
        if query.is_empty() {
            let hits = self
                .index
                .docs
                .iter()
                .enumerate()
                .filter(|(_, e)| self.category_ok(e, options))
                .map(|(index, entry)| SearchHit {
                    entry,
                    index,
                    field: MatchField::Title,
                })
                .collect::<Vec<_>>();
            return truncate(hits, options.limit);
        }

        let needle = query.to_lowercase();
        let finder = Finder::new(needle.as_bytes());

        let mut title_hits = Vec::new();
        let mut text_hits = Vec::new();

        for (index, entry) in self.index.docs.iter().enumerate() {
            if !self.category_ok(entry, options) {
                continue;
            }

            let (title, text) = &self.haystacks[index];
            if finder.find(title.as_bytes()).is_some() {
                title_hits.push(SearchHit {
                    entry,
                    index,
                    field: MatchField::Title,
                });
            } else if finder.find(text.as_bytes()).is_some() {
                text_hits.push(SearchHit {
                    entry,
                    index,
                    field: MatchField::Text,
                });
            }
        }

        title_hits.extend(text_hits);
        truncate(title_hits, options.limit)
    }

    fn category_ok(&self, entry: &Entry, options: &SearchOptions) -> bool {
        match &options.category {
            Some(category) => entry.category == *category,
            None => true,
        }
    }
}

fn truncate<T>(mut hits: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::Entry;

    fn sample_index() -> SearchIndex {
        SearchIndex {
            docs: vec![
                Entry::new("/", "Home", "Home", "welcome to the docs", "page"),
                Entry::new(
                    "/#TextClassification",
                    "Home",
                    "TextClassification",
                    "",
                    "section",
                ),
                Entry::new(
                    "/#predict",
                    "Home",
                    "TextClassification.predict",
                    "predicts the label of the given input",
                    "method",
                ),
                Entry::new(
                    "/#vectorize",
                    "Home",
                    "TextSearch.vectorize",
                    "creates a weighted vector using the model",
                    "method",
                ),
            ],
        }
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let index = sample_index();
        let searcher = Searcher::new(&index);
        let hits = searcher.search("", &SearchOptions::default());

        assert_eq!(hits.len(), 4);
        let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_match() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        let upper = searcher.search("TEXTCLASSIFICATION", &SearchOptions::default());
        let lower = searcher.search("textclassification", &SearchOptions::default());

        assert_eq!(upper.len(), 2);
        assert_eq!(upper.len(), lower.len());
        assert_eq!(upper[0].index, lower[0].index);
    }

    #[test]
    fn test_title_ranks_before_text_only() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        // "vector" appears in entry 3's title and entry 3's text; "predict"
        // appears in entry 2's title. "the" hits titles nowhere but texts of
        // 0, 2, 3. Use a query spanning both tiers:
        let hits = searcher.search("predict", &SearchOptions::default());

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].field, MatchField::Title);

        // "model" only appears in text
        let hits = searcher.search("model", &SearchOptions::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].field, MatchField::Text);
    }

    #[test]
    fn test_tier_ordering_with_mixed_matches() {
        let index = SearchIndex {
            docs: vec![
                Entry::new("/a", "A", "nothing here", "foo in text", "page"),
                Entry::new("/b", "B", "Foo in title", "", "page"),
                Entry::new("/c", "C", "also foo", "", "page"),
                Entry::new("/d", "D", "plain", "trailing foo", "page"),
            ],
        };
        let searcher = Searcher::new(&index);
        let hits = searcher.search("foo", &SearchOptions::default());

        // Title tier first (original order), then text tier (original order)
        let order: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
        assert_eq!(hits[0].field, MatchField::Title);
        assert_eq!(hits[2].field, MatchField::Text);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let index = sample_index();
        let searcher = Searcher::new(&index);
        let hits = searcher.search("qux", &SearchOptions::default());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        let options = SearchOptions {
            category: Some("method".to_string()),
            ..Default::default()
        };
        let hits = searcher.search("textclassification", &options);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.category, "method");
    }

    #[test]
    fn test_limit() {
        let index = sample_index();
        let searcher = Searcher::new(&index);

        let options = SearchOptions {
            limit: Some(2),
            ..Default::default()
        };
        let hits = searcher.search("", &options);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn test_empty_text_entries_still_searchable_by_title() {
        let index = sample_index();
        let searcher = Searcher::new(&index);
        let hits = searcher.search("textsearch", &SearchOptions::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.location, "/#vectorize");
    }
}
