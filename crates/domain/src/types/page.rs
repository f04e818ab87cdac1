//! Paginated results

use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated endpoint.
///
/// `cursor` is the opaque continuation token for the next page and is
/// `None` once the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    /// Build a page, treating an empty cursor as exhausted.
    pub fn new(items: Vec<T>, cursor: Option<String>) -> Self {
        Self { items, cursor: cursor.filter(|c| !c.is_empty()) }
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn is_last(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor_means_last_page() {
        let page = Page::new(vec![1, 2], Some(String::new()));
        assert!(page.is_last());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn cursor_is_exposed() {
        let page = Page::new(vec!["a"], Some("next".to_string()));
        assert!(!page.is_last());
        assert_eq!(page.next_cursor(), Some("next"));
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec!["a"]);
    }
}
