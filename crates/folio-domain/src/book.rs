//! Book representation

use serde::Serialize;

use crate::{DomainError, DomainResult, MeanRating, Printing, PrintingType, RatingModel};

/// An ISBN-keyed work with its printings and the star ratings readers have
/// left for it.
///
/// Both sequences may be empty; the ISBN and title may not. Fields are
/// private and handed out as borrows, so a book cannot be mutated after
/// construction.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Book {
    isbn: String,
    title: String,
    printings: Vec<Printing>,
    star_ratings: Vec<u8>,
}

impl Book {
    /// Create a new book.
    ///
    /// An empty ISBN or title is a construction error, not an absence.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        printings: Vec<Printing>,
        star_ratings: Vec<u8>,
    ) -> DomainResult<Self> {
        let isbn = isbn.into();
        let title = title.into();
        if isbn.is_empty() {
            return Err(DomainError::MissingIsbn);
        }
        if title.is_empty() {
            return Err(DomainError::MissingTitle);
        }
        Ok(Self {
            isbn,
            title,
            printings,
            star_ratings,
        })
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn printings(&self) -> &[Printing] {
        &self.printings
    }

    pub fn star_ratings(&self) -> &[u8] {
        &self.star_ratings
    }

    /// The book's weighted star rating, if any ratings have been left.
    ///
    /// Uses the default [`MeanRating`] model; see [`RatingModel`] for the
    /// seam the real aggregation plugs into.
    pub fn weighted_rating(&self) -> Option<f64> {
        self.weighted_rating_with(&MeanRating)
    }

    /// The weighted rating under a caller-supplied model.
    pub fn weighted_rating_with(&self, model: &dyn RatingModel) -> Option<f64> {
        model.weighted_rating(&self.star_ratings)
    }

    /// The latest paperback printing of the book, if any.
    ///
    /// A candidate replaces the running best only when its print date is
    /// strictly later, so the first of several equal-dated paperbacks in
    /// printing order is the one returned.
    pub fn paperback(&self) -> Option<&Printing> {
        let mut latest: Option<&Printing> = None;
        for printing in &self.printings {
            if printing.printing_type() != PrintingType::Paperback {
                continue;
            }
            match latest {
                Some(best) if printing.print_date() <= best.print_date() => {}
                _ => latest = Some(printing),
            }
        }
        latest
    }
}
