use chrono::NaiveDate;

use crate::domain::context::TemplateContext;
use crate::domain::types::SnapshotName;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonContextReader;

/// Identifies the context snapshot to render a document from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextRequest {
    pub snapshot: SnapshotName,
    /// Overrides the reference date used by `oggi`-style variables.
    pub today: Option<NaiveDate>,
}

impl ContextRequest {
    pub fn new(snapshot: SnapshotName) -> Self {
        Self {
            snapshot,
            today: None,
        }
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

/// Loads template contexts assembled by the persistence layer.
pub trait ContextReader {
    fn load_template_context(&self, request: &ContextRequest) -> RepositoryResult<TemplateContext>;
}
