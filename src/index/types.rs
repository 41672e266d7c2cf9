use serde::{Deserialize, Serialize};

/// One indexed documentation fragment.
///
/// Field order matters: serde serializes struct fields in declaration order,
/// and the on-disk format consumed by existing search widgets expects
/// `location`, `page`, `title`, `text`, `category` in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Page path, optionally with an in-page anchor (`guide/#setup`)
    pub location: String,
    /// Human-readable page name
    pub page: String,
    /// Human-readable section title
    pub title: String,
    /// Indexed text content (may be empty)
    pub text: String,
    /// Tag classifying the entry ("page", "section", "method", ...)
    pub category: String,
}

impl Entry {
    pub fn new(
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            page: page.into(),
            title: title.into(),
            text: text.into(),
            category: category.into(),
        }
    }

    /// Page path portion of the location (everything before the anchor)
    pub fn page_path(&self) -> &str {
        match self.location.split_once('#') {
            Some((path, _)) => path,
            None => &self.location,
        }
    }

    /// In-page anchor, if the location carries one
    pub fn anchor(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, anchor)| anchor)
    }
}

/// The full ordered sequence of entries for a documentation site.
///
/// Entries are immutable once built; a build run replaces the previous index
/// wholesale. Insertion order is preserved for stable output and is the
/// ranking tie-break at query time. Duplicate locations are allowed since
/// multiple categories can share one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub docs: Vec<Entry>,
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate entries in original index order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.docs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_and_anchor() {
        let entry = Entry::new("guide/#setup", "Guide", "Setup", "", "section");
        assert_eq!(entry.page_path(), "guide/");
        assert_eq!(entry.anchor(), Some("setup"));

        let bare = Entry::new("guide/", "Guide", "Guide", "", "page");
        assert_eq!(bare.page_path(), "guide/");
        assert_eq!(bare.anchor(), None);
    }

    #[test]
    fn test_serialized_field_order() {
        let entry = Entry::new("/a", "A", "Foo", "bar", "page");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"location":"/a","page":"A","title":"Foo","text":"bar","category":"page"}"#
        );
    }

    #[test]
    fn test_duplicate_locations_allowed() {
        let index = SearchIndex {
            docs: vec![
                Entry::new("/a#x", "A", "X", "", "page"),
                Entry::new("/a#x", "A", "X", "", "section"),
            ],
        };
        assert_eq!(index.len(), 2);
    }
}
