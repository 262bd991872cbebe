//! folio-core: author directory, catalog loading, and the
//! best-paperback-publisher lookup.
//!
//! The lookup answers one question: given an author's name, who published
//! the most recent paperback printing of that author's highest-rated book?
//! Any of the four steps (author, best-rated book, paperback printing,
//! publisher) may come up empty; every ordinary miss flows through the
//! chain as `None`, while invalid input and malformed catalog data surface
//! as explicit errors.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod lookup;

pub use catalog::*;
pub use directory::*;
pub use error::*;
pub use lookup::*;

pub use folio_domain as domain;
