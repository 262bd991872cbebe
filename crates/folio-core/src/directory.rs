//! Author directory lookup

use std::collections::HashMap;

use folio_domain::Author;

/// Exact-name lookup over the authoritative author records.
///
/// The production directory does extremely convoluted work to resolve a
/// name to the one author behind it, whether it is their real name or a
/// pseudonym; that resolution stays behind this trait. An unknown name is
/// an ordinary miss, never an error.
pub trait AuthorDirectory {
    /// Find the author using this name, if any.
    fn find_by_name(&self, name: &str) -> Option<&Author>;
}

/// Directory backed by an in-memory name → author map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAuthorDirectory {
    authors: HashMap<String, Author>,
}

impl InMemoryAuthorDirectory {
    /// Create a directory over a prebuilt name → author map.
    pub fn new(authors: HashMap<String, Author>) -> Self {
        Self { authors }
    }

    /// Create a directory keying each author by its `name` field.
    pub fn from_authors(authors: impl IntoIterator<Item = Author>) -> Self {
        let authors = authors
            .into_iter()
            .map(|author| (author.name.clone(), author))
            .collect();
        Self { authors }
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

impl AuthorDirectory for InMemoryAuthorDirectory {
    fn find_by_name(&self, name: &str) -> Option<&Author> {
        self.authors.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_author() {
        let directory = InMemoryAuthorDirectory::from_authors(vec![Author::new("Ursula")]);
        assert!(directory.find_by_name("Ursula").is_some());
    }

    #[test]
    fn unknown_name_is_a_miss_not_an_error() {
        let directory = InMemoryAuthorDirectory::default();
        assert!(directory.find_by_name("Ursula").is_none());
    }

    #[test]
    fn lookup_is_exact_match() {
        let directory = InMemoryAuthorDirectory::from_authors(vec![Author::new("Ursula")]);
        assert!(directory.find_by_name("ursula").is_none());
        assert!(directory.find_by_name("Ursula ").is_none());
    }

    #[test]
    fn from_authors_keys_by_name() {
        let directory = InMemoryAuthorDirectory::from_authors(vec![
            Author::new("A"),
            Author::new("B"),
        ]);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.find_by_name("B").unwrap().name, "B");
    }
}
