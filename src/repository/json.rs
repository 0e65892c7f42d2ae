//! File-backed context reader for exported JSON snapshots.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::domain::context::TemplateContext;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContextReader, ContextRequest};

/// Reads `<base_dir>/<snapshot>.json`.
#[derive(Debug, Clone)]
pub struct JsonContextReader {
    base_dir: PathBuf,
}

impl JsonContextReader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn snapshot_path(&self, request: &ContextRequest) -> PathBuf {
        self.base_dir
            .join(format!("{}.json", request.snapshot.as_str()))
    }
}

impl ContextReader for JsonContextReader {
    fn load_template_context(&self, request: &ContextRequest) -> RepositoryResult<TemplateContext> {
        let path = self.snapshot_path(request);
        log::debug!("Loading context snapshot from {}", path.display());

        let file = File::open(&path)?;
        let mut context: TemplateContext = serde_json::from_reader(BufReader::new(file))?;

        if request.today.is_some() {
            context.today = request.today;
        }

        Ok(context)
    }
}
