//! HTML fragments for dynamic blocks, rendered through Tera templates.
//!
//! Each block type has a template named `blocks/<type>.html` that receives
//! the block's field record as its context. Templates can format raw
//! amounts with the `currency` filter.

use std::collections::HashMap;

use tera::{Context, Tera, Value};

use crate::domain::block::{BlockData, BlockType};
use crate::domain::context::TemplateContext;
use crate::formatting::currency;
use crate::services::ServiceResult;
use crate::services::blocks::resolve_block;

pub struct BlockRenderer {
    tera: Tera,
}

impl BlockRenderer {
    /// Parses every template matching `templates_glob`.
    pub fn new(templates_glob: &str) -> ServiceResult<Self> {
        let tera = Tera::new(templates_glob).map_err(|err| {
            log::error!("Template parsing error(s): {err}");
            err
        })?;
        Ok(Self::from_tera(tera))
    }

    pub fn from_tera(mut tera: Tera) -> Self {
        tera.register_filter("currency", currency_filter);
        Self { tera }
    }

    fn template_name(block: BlockType) -> String {
        format!("blocks/{}.html", block.as_str())
    }

    /// Renders a block straight from a context snapshot.
    pub fn render(&self, block: BlockType, ctx: &TemplateContext) -> ServiceResult<String> {
        self.render_data(block, &resolve_block(block, ctx))
    }

    pub fn render_data(&self, block: BlockType, data: &BlockData) -> ServiceResult<String> {
        let context = Context::from_serialize(data)?;
        let name = Self::template_name(block);
        self.tera.render(&name, &context).map_err(|err| {
            log::error!("Failed to render {name}: {err}");
            err.into()
        })
    }

    /// Renders a block by name; unknown names render as nothing.
    pub fn render_named(&self, name: &str, data: &BlockData) -> ServiceResult<String> {
        match name.parse::<BlockType>() {
            Ok(block) => self.render_data(block, data),
            Err(_) => Ok(String::new()),
        }
    }
}

fn currency_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let amount = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("currency expects a number, got {value}")))?;
    Ok(Value::String(currency(amount)))
}
