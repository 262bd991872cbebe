//! Catalog loading
//!
//! A catalog is a JSON document listing author records. Records are plain
//! serde shapes; domain values are built through the validated
//! constructors, so a record that violates a construction invariant fails
//! the whole load instead of slipping through as data.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use folio_domain::{Author, Book, Printing, PrintingType, Publisher};

use crate::{CatalogError, InMemoryAuthorDirectory};

/// Publisher entry of a printing record.
#[derive(Clone, Debug, Deserialize)]
pub struct PublisherRecord {
    pub id: String,
    pub name: String,
    pub contact: String,
}

/// One printing of a book record. `print_date` is RFC 3339.
#[derive(Clone, Debug, Deserialize)]
pub struct PrintingRecord {
    pub printing_type: String,
    #[serde(default)]
    pub publisher: Option<PublisherRecord>,
    pub print_date: String,
}

/// One book of an author record.
#[derive(Clone, Debug, Deserialize)]
pub struct BookRecord {
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub printings: Vec<PrintingRecord>,
    #[serde(default)]
    pub star_ratings: Vec<u8>,
}

/// A catalog author, possibly with nested pseudonym records.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub pseudonyms: Vec<AuthorRecord>,
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

impl PublisherRecord {
    fn into_publisher(self) -> Publisher {
        Publisher::new(self.name, self.contact).with_id(self.id)
    }
}

impl PrintingRecord {
    fn into_printing(self) -> Result<Printing, CatalogError> {
        let printing_type = PrintingType::parse(&self.printing_type)
            .ok_or_else(|| CatalogError::UnknownPrintingType(self.printing_type.clone()))?;
        let print_date: DateTime<Utc> =
            DateTime::parse_from_rfc3339(&self.print_date)?.with_timezone(&Utc);
        let publisher = self.publisher.map(PublisherRecord::into_publisher);
        Ok(Printing::new(printing_type, publisher, print_date))
    }
}

impl BookRecord {
    fn into_book(self) -> Result<Book, CatalogError> {
        let printings = self
            .printings
            .into_iter()
            .map(PrintingRecord::into_printing)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Book::new(self.isbn, self.title, printings, self.star_ratings)?)
    }
}

impl AuthorRecord {
    fn into_author(self) -> Result<Author, CatalogError> {
        let books = self
            .books
            .into_iter()
            .map(BookRecord::into_book)
            .collect::<Result<Vec<_>, _>>()?;
        let pseudonyms = self
            .pseudonyms
            .into_iter()
            .map(AuthorRecord::into_author)
            .collect::<Result<Vec<_>, _>>()?;

        let mut author = Author::new(self.name);
        if let Some(id) = self.id {
            author = author.with_id(id);
        }
        Ok(author.with_books(books).with_pseudonyms(pseudonyms))
    }
}

impl InMemoryAuthorDirectory {
    /// Load a directory from a JSON catalog of author records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<AuthorRecord> = serde_json::from_str(json)?;
        let authors = records
            .into_iter()
            .map(AuthorRecord::into_author)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_authors(authors))
    }
}
