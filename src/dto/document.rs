//! DTOs returned by document rendering.

use serde::Serialize;

use crate::domain::block::BlockData;
use crate::domain::context::TemplateContext;
use crate::domain::variable::Variable;

/// A template body with its variables substituted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub html: String,
    /// Known variables that had no value in the context.
    pub unresolved: Vec<Variable>,
    /// Tokens outside the variable vocabulary, left as written.
    pub unknown: Vec<String>,
}

impl RenderedDocument {
    /// Every token was known and resolved to data.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty() && self.unknown.is_empty()
    }
}

/// Field record of a block requested by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedBlock {
    pub name: String,
    /// Empty for names that are not a block type.
    pub data: BlockData,
}

/// A rendered document together with the snapshot it was rendered from.
#[derive(Debug)]
pub struct PreparedDocument {
    pub context: TemplateContext,
    pub rendered: RenderedDocument,
    pub blocks: Vec<PreparedBlock>,
}
