//! Renders a template body and its dynamic blocks from a stored context snapshot.
//!
//! Usage: `render_document <payload.json>` where the payload is a
//! `RenderDocumentForm` (`snapshot`, `body`, optional `mode`, `today`, `blocks`).

use std::{env, fs, process};

use config::Config;
use dotenvy::dotenv;
use serde_json::json;

use property_crm::forms::document::RenderDocumentForm;
use property_crm::models::config::RenderConfig;
use property_crm::render::BlockRenderer;
use property_crm::repository::JsonContextReader;
use property_crm::services::document::render_document_form;

fn load_config() -> Result<RenderConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let render_config = match load_config() {
        Ok(render_config) => render_config,
        Err(err) => {
            log::error!("Error loading render config: {err}");
            process::exit(1);
        }
    };

    let Some(payload_path) = env::args().nth(1) else {
        log::error!("Usage: render_document <payload.json>");
        process::exit(2);
    };

    let form: RenderDocumentForm = match fs::read_to_string(&payload_path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
    {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to read payload {payload_path}: {err}");
            process::exit(1);
        }
    };

    let repo = JsonContextReader::new(&render_config.snapshots_dir);
    let prepared = match render_document_form(&repo, form, render_config.default_mode) {
        Ok(prepared) => prepared,
        Err(err) => {
            log::error!("Failed to render document: {err}");
            process::exit(1);
        }
    };

    let renderer = match BlockRenderer::new(&render_config.templates_dir) {
        Ok(renderer) => renderer,
        Err(err) => {
            log::error!("Failed to load templates: {err}");
            process::exit(1);
        }
    };

    let mut blocks = serde_json::Map::new();
    for block in &prepared.blocks {
        match renderer.render_named(&block.name, &block.data) {
            Ok(html) => {
                blocks.insert(block.name.clone(), json!(html));
            }
            Err(err) => {
                log::error!("Failed to render block {}: {err}", block.name);
                process::exit(1);
            }
        }
    }

    let output = json!({
        "html": prepared.rendered.html,
        "unresolved": prepared.rendered.unresolved,
        "unknown": prepared.rendered.unknown,
        "blocks": blocks,
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            log::error!("Failed to serialize output: {err}");
            process::exit(1);
        }
    }
}
