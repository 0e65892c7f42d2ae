//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::variable::PlaceholderMode;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the document renderer.
pub struct RenderConfig {
    /// Glob of the Tera templates, e.g. `./templates/**/*`.
    pub templates_dir: String,
    /// Directory holding exported context snapshots.
    pub snapshots_dir: String,
    #[serde(default)]
    pub default_mode: PlaceholderMode,
}
