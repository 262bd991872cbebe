//! Publisher representation

use serde::Serialize;

/// A publishing house. Created once at data-load time, never mutated.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Publisher {
    pub id: String,
    pub name: String,
    pub contact: String,
}

impl Publisher {
    /// Create a new publisher with a generated id.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Builder method to override the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
