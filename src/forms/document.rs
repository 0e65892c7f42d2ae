use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::SnapshotName;
use crate::domain::variable::PlaceholderMode;
use crate::forms::FormError;
use crate::repository::ContextRequest;

#[derive(Debug, Deserialize, Validate)]
/// Request to render a rich-text template against a stored snapshot.
pub struct RenderDocumentForm {
    /// Name of the context snapshot to load.
    #[validate(length(min = 1))]
    pub snapshot: String,
    /// Template body with `{{ token }}` placeholders.
    #[validate(length(min = 1))]
    pub body: String,
    /// `example`, `keep` or `blank`; the configured default when absent.
    #[serde(default)]
    pub mode: Option<String>,
    /// Reference date (`YYYY-MM-DD`) for date variables.
    #[serde(default)]
    pub today: Option<String>,
    /// Dynamic blocks to render alongside the body.
    #[serde(default)]
    pub blocks: Vec<String>,
}

/// Validated counterpart of [`RenderDocumentForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDocumentPayload {
    pub request: ContextRequest,
    pub body: String,
    pub mode: Option<PlaceholderMode>,
    pub blocks: Vec<String>,
}

impl TryFrom<RenderDocumentForm> for RenderDocumentPayload {
    type Error = FormError;

    fn try_from(form: RenderDocumentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let snapshot = SnapshotName::new(form.snapshot).map_err(|_| FormError::InvalidSnapshot)?;
        let mut request = ContextRequest::new(snapshot);

        if let Some(today) = form.today.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
                .map_err(|_| FormError::InvalidDate)?;
            request = request.today(today);
        }

        let mode = form
            .mode
            .as_deref()
            .map(str::parse::<PlaceholderMode>)
            .transpose()
            .map_err(|_| FormError::InvalidPlaceholderMode)?;

        Ok(Self {
            request,
            body: form.body,
            mode,
            blocks: form.blocks,
        })
    }
}
