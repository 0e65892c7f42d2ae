//! Phase taxonomy: the fixed stage pipelines of every staged entity.
//!
//! Catalog order is the pipeline order; a stage's index is its progress
//! ordinal. Records only hold a stage id and look the stage up here.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{StageCode, TypeConstraintError};

/// One named step of a pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Stage {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    #[serde(rename = "textColor", skip_serializing_if = "Option::is_none")]
    pub text_color: Option<&'static str>,
}

impl Stage {
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str, color: &'static str) -> Self {
        Self {
            id,
            label,
            color,
            text_color: None,
        }
    }

    #[must_use]
    pub const fn with_text_color(mut self, text_color: &'static str) -> Self {
        self.text_color = Some(text_color);
        self
    }
}

/// Ordered stages of one entity kind.
pub type StageCatalog = [Stage];

pub static LEAD_STAGES: [Stage; 6] = [
    Stage::new("P0", "Nuovo contatto", "#e2e8f0").with_text_color("#1e293b"),
    Stage::new("P1", "Primo contatto", "#bfdbfe").with_text_color("#1e3a8a"),
    Stage::new("P2", "Sopralluogo", "#60a5fa"),
    Stage::new("P3", "Proposta inviata", "#f59e0b"),
    Stage::new("P4", "Trattativa", "#f97316"),
    Stage::new("P5", "Contratto firmato", "#16a34a"),
];

pub static PROPERTY_LEAD_STAGES: [Stage; 6] = [
    Stage::new("P0", "Segnalazione", "#e2e8f0").with_text_color("#1e293b"),
    Stage::new("P1", "Valutazione immobile", "#c7d2fe").with_text_color("#312e81"),
    Stage::new("P2", "Sopralluogo tecnico", "#818cf8"),
    Stage::new("P3", "Proposta di gestione", "#f59e0b"),
    Stage::new("P4", "Negoziazione", "#f97316"),
    Stage::new("P5", "Immobile acquisito", "#16a34a"),
];

pub static CLIENT_STAGES: [Stage; 5] = [
    Stage::new("C0", "Onboarding", "#e2e8f0").with_text_color("#1e293b"),
    Stage::new("C1", "Raccolta documenti", "#a5f3fc").with_text_color("#164e63"),
    Stage::new("C2", "Contratto di gestione", "#0ea5e9"),
    Stage::new("C3", "Cliente attivo", "#16a34a"),
    Stage::new("C4", "Rinnovo", "#7c3aed"),
];

pub static PROPERTY_STAGES: [Stage; 6] = [
    Stage::new("P0", "Acquisizione", "#e2e8f0").with_text_color("#1e293b"),
    Stage::new("P1", "Pratiche CIR/CIN", "#fde68a").with_text_color("#78350f"),
    Stage::new("P2", "Servizio fotografico", "#fb923c"),
    Stage::new("P3", "Allestimento", "#f472b6"),
    Stage::new("P4", "Pubblicazione annunci", "#6366f1"),
    Stage::new("P5", "Operativa", "#16a34a"),
];

/// Entity kinds that move through a stage pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Lead,
    PropertyLead,
    Client,
    Property,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Lead,
        EntityKind::PropertyLead,
        EntityKind::Client,
        EntityKind::Property,
    ];

    /// The static catalog for this kind.
    pub fn catalog(self) -> &'static StageCatalog {
        match self {
            EntityKind::Lead => &LEAD_STAGES,
            EntityKind::PropertyLead => &PROPERTY_LEAD_STAGES,
            EntityKind::Client => &CLIENT_STAGES,
            EntityKind::Property => &PROPERTY_STAGES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Lead => "lead",
            EntityKind::PropertyLead => "property-lead",
            EntityKind::Client => "client",
            EntityKind::Property => "property",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lead" => Ok(EntityKind::Lead),
            "property-lead" => Ok(EntityKind::PropertyLead),
            "client" => Ok(EntityKind::Client),
            "property" => Ok(EntityKind::Property),
            other => Err(TypeConstraintError::UnknownEntityKind(other.to_string())),
        }
    }
}

/// Position and stage for `id`, `None` when the catalog does not contain it.
pub fn find_stage<'a>(catalog: &'a StageCatalog, id: &str) -> Option<(usize, &'a Stage)> {
    catalog.iter().enumerate().find(|(_, stage)| stage.id == id)
}

/// A business record that references its current stage by id.
pub trait Staged {
    fn entity_kind(&self) -> EntityKind;
    fn stage_code(&self) -> Option<&StageCode>;
}

#[derive(Deserialize)]
struct RawTaskCount {
    totali: u32,
    completati: u32,
}

/// Task completion aggregate for a single stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTaskCount")]
pub struct TaskCount {
    #[serde(rename = "totali")]
    total: u32,
    #[serde(rename = "completati")]
    completed: u32,
}

impl TaskCount {
    /// Creates a count ensuring `completed <= total`.
    pub fn new(total: u32, completed: u32) -> Result<Self, TypeConstraintError> {
        if completed > total {
            return Err(TypeConstraintError::InvalidTaskCount { completed, total });
        }
        Ok(Self { total, completed })
    }

    pub const fn total(self) -> u32 {
        self.total
    }

    pub const fn completed(self) -> u32 {
        self.completed
    }

    /// Every task done, and there was at least one.
    pub const fn is_complete(self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl TryFrom<RawTaskCount> for TaskCount {
    type Error = TypeConstraintError;

    fn try_from(raw: RawTaskCount) -> Result<Self, Self::Error> {
        Self::new(raw.totali, raw.completati)
    }
}

/// Task counts keyed by stage id.
pub type TaskCounts = BTreeMap<String, TaskCount>;
