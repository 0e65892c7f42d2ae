//! DTOs shaped for status badges, progress bars and kanban boards.

use serde::Serialize;

use crate::domain::stage::{Stage, TaskCount};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

/// One catalog stage as seen from a record's current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StageProgress<'a> {
    pub stage: &'a Stage,
    pub status: StageStatus,
    pub tasks: Option<TaskCount>,
    /// All tasks of the stage are done; independent of `status`.
    pub fully_done: bool,
}

/// Result of evaluating a stage id against its catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhaseProgress<'a> {
    /// Position of the current stage, `None` for ids outside the catalog.
    pub index: Option<usize>,
    pub stages: Vec<StageProgress<'a>>,
}

impl<'a> PhaseProgress<'a> {
    /// Index as a signed ordinal, `-1` when the stage is unknown.
    pub fn ordinal(&self) -> i32 {
        self.index
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(-1)
    }

    pub fn current_stage(&self) -> Option<&'a Stage> {
        self.index.map(|index| self.stages[index].stage)
    }

    pub fn completed_stages(&self) -> Vec<&'a Stage> {
        self.with_status(StageStatus::Completed)
    }

    pub fn pending_stages(&self) -> Vec<&'a Stage> {
        self.with_status(StageStatus::Pending)
    }

    fn with_status(&self, status: StageStatus) -> Vec<&'a Stage> {
        self.stages
            .iter()
            .filter(|progress| progress.status == status)
            .map(|progress| progress.stage)
            .collect()
    }

    /// Share of stages reached (completed plus current), 0 to 100.
    pub fn percent(&self) -> u8 {
        match self.index {
            Some(index) if !self.stages.is_empty() => {
                ((index + 1) * 100 / self.stages.len()) as u8
            }
            _ => 0,
        }
    }
}

/// Colors and label for a stage badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageBadge {
    pub label: String,
    pub color: String,
    pub text_color: String,
    /// The id was not found in the catalog.
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct KanbanColumn<'a, T> {
    pub stage: &'a Stage,
    pub items: Vec<T>,
}

/// Records grouped by stage, one column per catalog stage in order.
#[derive(Debug, Serialize)]
pub struct KanbanBoard<'a, T> {
    pub columns: Vec<KanbanColumn<'a, T>>,
    /// Records whose stage id is missing or not in the catalog.
    pub unassigned: Vec<T>,
}
