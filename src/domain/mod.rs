//! Domain types for stage pipelines and document templates.

pub mod block;
pub mod context;
pub mod stage;
pub mod types;
pub mod variable;
