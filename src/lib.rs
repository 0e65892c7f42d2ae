//! Stage pipelines and document template resolution for a property-management CRM.
//!
//! Leads, properties and clients move through fixed stage catalogs
//! ([`domain::stage`]); documents are materialized by resolving template
//! variables and dynamic blocks against a [`domain::context::TemplateContext`]
//! snapshot ([`services`]).

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod formatting;
pub mod forms;
pub mod models;
#[cfg(feature = "render")]
pub mod render;
pub mod repository;
pub mod services;
