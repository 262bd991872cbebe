//! Printing representation

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Publisher;

/// Format a book was printed in. Paperback, hardcover, ebook, audio...
/// who knows what the future will hold?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintingType {
    Paperback,
    Hardcover,
    Ebook,
    Audio,
}

impl PrintingType {
    /// Parse from a catalog record value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "paperback" => Some(Self::Paperback),
            "hardcover" => Some(Self::Hardcover),
            "ebook" => Some(Self::Ebook),
            "audio" => Some(Self::Audio),
            _ => None,
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Paperback => "Paperback",
            Self::Hardcover => "Hardcover",
            Self::Ebook => "Ebook",
            Self::Audio => "Audio",
        }
    }
}

/// One printed edition of a book.
///
/// A printing may predate or bypass formal publisher tracking, so its
/// publisher is optional; that absence is an ordinary state, not an error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Printing {
    printing_type: PrintingType,
    publisher: Option<Publisher>,
    print_date: DateTime<Utc>,
}

impl Printing {
    /// Create a new printing.
    pub fn new(
        printing_type: PrintingType,
        publisher: Option<Publisher>,
        print_date: DateTime<Utc>,
    ) -> Self {
        Self {
            printing_type,
            publisher,
            print_date,
        }
    }

    pub fn printing_type(&self) -> PrintingType {
        self.printing_type
    }

    /// The publisher of this printing, if one was ever tracked.
    pub fn publisher(&self) -> Option<&Publisher> {
        self.publisher.as_ref()
    }

    pub fn print_date(&self) -> DateTime<Utc> {
        self.print_date
    }
}
