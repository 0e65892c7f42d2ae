//! Substitution of `{{ token }}` placeholders in rich-text templates.

use crate::domain::context::TemplateContext;
use crate::domain::variable::{PlaceholderMode, Variable};
use crate::dto::document::{PreparedBlock, PreparedDocument, RenderedDocument};
use crate::formatting::escape_html;
use crate::forms::document::{RenderDocumentForm, RenderDocumentPayload};
use crate::repository::ContextReader;
use crate::services::ServiceResult;
use crate::services::blocks::resolve_block_str;
use crate::services::variables::resolve;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Sanitizes `body` and replaces every known placeholder with its escaped value.
///
/// Known variables without data are handled according to `mode`; tokens
/// outside the vocabulary are left exactly as written.
pub fn render_document(
    body: &str,
    ctx: &TemplateContext,
    mode: PlaceholderMode,
) -> RenderedDocument {
    let sanitized = ammonia::clean(body);
    let mut html = String::with_capacity(sanitized.len());
    let mut unresolved: Vec<Variable> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    let mut rest = sanitized.as_str();

    while let Some(first) = rest.find(OPEN) {
        let Some(len) = rest[first + OPEN.len()..].find(CLOSE) else {
            break;
        };
        let close = first + OPEN.len() + len;
        // A stray `{{` stays text; the token opens at the last `{{` before `}}`.
        let start = rest[..close].rfind(OPEN).unwrap_or(first);
        let end = close + CLOSE.len();
        let literal = &rest[start..end];
        let token = rest[start + OPEN.len()..close].trim();

        html.push_str(&rest[..start]);

        match token.parse::<Variable>() {
            Ok(variable) => match resolve(variable, ctx) {
                Some(value) => html.push_str(&escape_html(&value)),
                None => {
                    if !unresolved.contains(&variable) {
                        unresolved.push(variable);
                    }
                    match mode {
                        PlaceholderMode::Example => html.push_str(variable.example()),
                        PlaceholderMode::Keep => html.push_str(literal),
                        PlaceholderMode::Blank => {}
                    }
                }
            },
            Err(_) => {
                if !unknown.iter().any(|seen| seen == token) {
                    unknown.push(token.to_string());
                }
                html.push_str(literal);
            }
        }

        rest = &rest[end..];
    }
    html.push_str(rest);

    if !unresolved.is_empty() {
        log::debug!("Variables without data: {unresolved:?}");
    }

    RenderedDocument {
        html,
        unresolved,
        unknown,
    }
}

/// Loads the requested snapshot and renders the body and blocks from it.
pub fn prepare_document<R>(
    repo: &R,
    payload: &RenderDocumentPayload,
    default_mode: PlaceholderMode,
) -> ServiceResult<PreparedDocument>
where
    R: ContextReader + ?Sized,
{
    let context = repo
        .load_template_context(&payload.request)
        .map_err(|err| {
            log::error!(
                "Failed to load context snapshot {}: {err}",
                payload.request.snapshot
            );
            err
        })?;

    let rendered = render_document(&payload.body, &context, payload.mode.unwrap_or(default_mode));
    if !rendered.unknown.is_empty() {
        log::warn!("Template uses unknown variables: {:?}", rendered.unknown);
    }

    let blocks = payload
        .blocks
        .iter()
        .map(|name| PreparedBlock {
            name: name.clone(),
            data: resolve_block_str(name, &context),
        })
        .collect();

    Ok(PreparedDocument {
        context,
        rendered,
        blocks,
    })
}

/// Validates the raw form and prepares the document it describes.
pub fn render_document_form<R>(
    repo: &R,
    form: RenderDocumentForm,
    default_mode: PlaceholderMode,
) -> ServiceResult<PreparedDocument>
where
    R: ContextReader + ?Sized,
{
    let payload = RenderDocumentPayload::try_from(form).map_err(|err| {
        log::error!("Invalid render request: {err}");
        err
    })?;

    prepare_document(repo, &payload, default_mode)
}
