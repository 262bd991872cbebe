//! Author representation

use serde::Serialize;

use crate::{Book, MeanRating, RatingModel};

/// An author's publishing history under one name.
///
/// Only books published under this name are in `books`. Books published
/// under other pseudonyms live in their own `Author`, listed in
/// `pseudonyms`; no back-references are kept.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Author {
    pub name: String,
    pub id: String,
    pub pseudonyms: Vec<Author>,
    pub books: Vec<Book>,
}

impl Author {
    /// Create a new author with a generated id and no books.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: uuid::Uuid::new_v4().to_string(),
            pseudonyms: Vec::new(),
            books: Vec::new(),
        }
    }

    /// Builder method to override the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method to set the book list.
    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    /// Builder method to set the pseudonym list.
    pub fn with_pseudonyms(mut self, pseudonyms: Vec<Author>) -> Self {
        self.pseudonyms = pseudonyms;
        self
    }

    /// The highest-rated book published under this name, if any.
    ///
    /// Uses the default [`MeanRating`] model.
    pub fn best_rated_book(&self) -> Option<&Book> {
        self.best_rated_book_with(&MeanRating)
    }

    /// The highest-rated book under a caller-supplied rating model.
    ///
    /// Books with no ratings are skipped, not treated as rated zero. A
    /// candidate replaces the running best only when its rating is strictly
    /// higher, so the first of equally-rated books in list order wins.
    pub fn best_rated_book_with(&self, model: &dyn RatingModel) -> Option<&Book> {
        let mut best: Option<(&Book, f64)> = None;
        for book in &self.books {
            if let Some(rating) = book.weighted_rating_with(model) {
                match best {
                    Some((_, top)) if rating <= top => {}
                    _ => best = Some((book, rating)),
                }
            }
        }
        best.map(|(book, _)| book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str, ratings: Vec<u8>) -> Book {
        Book::new(isbn, "title", vec![], ratings).unwrap()
    }

    #[test]
    fn test_author_new() {
        let author = Author::new("Robert Galbraith");
        assert_eq!(author.name, "Robert Galbraith");
        assert!(!author.id.is_empty());
        assert!(author.books.is_empty());
        assert!(author.pseudonyms.is_empty());
    }

    #[test]
    fn test_best_rated_book_no_books() {
        let author = Author::new("name");
        assert!(author.best_rated_book().is_none());
    }

    #[test]
    fn test_best_rated_book_all_unrated() {
        let author =
            Author::new("name").with_books(vec![book("a", vec![]), book("b", vec![])]);
        assert!(author.best_rated_book().is_none());
    }

    #[test]
    fn test_best_rated_book_picks_highest() {
        let author = Author::new("name").with_books(vec![
            book("a", vec![3]),
            book("b", vec![5, 4]),
            book("c", vec![2, 2]),
        ]);
        assert_eq!(author.best_rated_book().unwrap().isbn(), "b");
    }

    #[test]
    fn test_best_rated_book_first_wins_on_tie() {
        let author = Author::new("name").with_books(vec![
            book("a", vec![4]),
            book("b", vec![3, 5]),
            book("c", vec![4, 4]),
        ]);
        assert_eq!(author.best_rated_book().unwrap().isbn(), "a");
    }

    #[test]
    fn test_unrated_books_are_skipped_not_zero() {
        // An unrated book must not be preferred over a poorly rated one.
        let author = Author::new("name").with_books(vec![book("a", vec![]), book("b", vec![1])]);
        assert_eq!(author.best_rated_book().unwrap().isbn(), "b");
    }

    #[test]
    fn test_pseudonym_books_not_considered() {
        let pseudonym = Author::new("pen name").with_books(vec![book("hit", vec![5, 5])]);
        let author = Author::new("name")
            .with_books(vec![book("own", vec![2])])
            .with_pseudonyms(vec![pseudonym]);
        assert_eq!(author.best_rated_book().unwrap().isbn(), "own");
    }

    #[test]
    fn test_best_rated_book_with_custom_model() {
        struct CountVotes;
        impl RatingModel for CountVotes {
            fn weighted_rating(&self, ratings: &[u8]) -> Option<f64> {
                if ratings.is_empty() {
                    None
                } else {
                    Some(ratings.len() as f64)
                }
            }
        }

        let author = Author::new("name")
            .with_books(vec![book("a", vec![5]), book("b", vec![1, 1, 1])]);
        assert_eq!(author.best_rated_book_with(&CountVotes).unwrap().isbn(), "b");
    }
}
