//! Phase progress evaluation and the UI views derived from it.

use std::cmp::Ordering;

use crate::domain::stage::{Stage, StageCatalog, Staged, TaskCounts, find_stage};
use crate::dto::phase::{
    KanbanBoard, KanbanColumn, PhaseProgress, StageBadge, StageProgress, StageStatus,
};

pub const FALLBACK_BADGE_COLOR: &str = "#e5e7eb";
pub const FALLBACK_TEXT_COLOR: &str = "#374151";
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Places `current_stage_id` within `catalog`.
///
/// Stages before the current one are completed, later ones pending. An id
/// outside the catalog highlights nothing and leaves every stage pending.
/// Task counts only set the `fully_done` overlay.
pub fn evaluate<'a>(
    current_stage_id: &str,
    catalog: &'a StageCatalog,
    task_counts: Option<&TaskCounts>,
) -> PhaseProgress<'a> {
    let index = find_stage(catalog, current_stage_id).map(|(index, _)| index);

    let stages = catalog
        .iter()
        .enumerate()
        .map(|(position, stage)| {
            let status = match index {
                Some(current) if position < current => StageStatus::Completed,
                Some(current) if position == current => StageStatus::Current,
                _ => StageStatus::Pending,
            };
            let tasks = task_counts.and_then(|counts| counts.get(stage.id)).copied();

            StageProgress {
                stage,
                status,
                tasks,
                fully_done: tasks.is_some_and(|count| count.is_complete()),
            }
        })
        .collect();

    PhaseProgress { index, stages }
}

/// Evaluates a record against the catalog of its entity kind.
pub fn evaluate_record<R>(record: &R, task_counts: Option<&TaskCounts>) -> PhaseProgress<'static>
where
    R: Staged + ?Sized,
{
    let stage_id = record.stage_code().map_or("", |code| code.as_str());
    evaluate(stage_id, record.entity_kind().catalog(), task_counts)
}

/// Badge for `stage_id`; unknown ids show the raw id on neutral colors.
pub fn stage_badge(stage_id: &str, catalog: &StageCatalog) -> StageBadge {
    match find_stage(catalog, stage_id) {
        Some((_, stage)) => StageBadge {
            label: stage.label.to_string(),
            color: stage.color.to_string(),
            text_color: stage.text_color.unwrap_or(DEFAULT_TEXT_COLOR).to_string(),
            fallback: false,
        },
        None => {
            log::debug!("Stage {stage_id:?} not in catalog, using fallback badge");
            StageBadge {
                label: stage_id.to_string(),
                color: FALLBACK_BADGE_COLOR.to_string(),
                text_color: FALLBACK_TEXT_COLOR.to_string(),
                fallback: true,
            }
        }
    }
}

pub fn next_stage<'a>(stage_id: &str, catalog: &'a StageCatalog) -> Option<&'a Stage> {
    find_stage(catalog, stage_id).and_then(|(index, _)| catalog.get(index + 1))
}

pub fn previous_stage<'a>(stage_id: &str, catalog: &'a StageCatalog) -> Option<&'a Stage> {
    find_stage(catalog, stage_id)
        .and_then(|(index, _)| index.checked_sub(1))
        .and_then(|index| catalog.get(index))
}

/// Pipeline order of two stage ids, `None` if either is unknown.
pub fn compare_stages(a: &str, b: &str, catalog: &StageCatalog) -> Option<Ordering> {
    let (a, _) = find_stage(catalog, a)?;
    let (b, _) = find_stage(catalog, b)?;
    Some(a.cmp(&b))
}

/// Groups `(stage id, record)` pairs into one column per catalog stage.
pub fn kanban_columns<'a, S, T, I>(catalog: &'a StageCatalog, records: I) -> KanbanBoard<'a, T>
where
    S: AsRef<str>,
    I: IntoIterator<Item = (S, T)>,
{
    let mut columns: Vec<KanbanColumn<'a, T>> = catalog
        .iter()
        .map(|stage| KanbanColumn {
            stage,
            items: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for (stage_id, record) in records {
        match find_stage(catalog, stage_id.as_ref()) {
            Some((index, _)) => columns[index].items.push(record),
            None => unassigned.push(record),
        }
    }

    KanbanBoard {
        columns,
        unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::PropertyRecord;
    use crate::domain::stage::{LEAD_STAGES, PROPERTY_STAGES, TaskCount};
    use crate::domain::types::StageCode;

    #[test]
    fn evaluate_splits_around_current() {
        let progress = evaluate("P2", &LEAD_STAGES, None);

        assert_eq!(progress.index, Some(2));
        assert_eq!(progress.ordinal(), 2);
        assert_eq!(progress.current_stage().map(|s| s.id), Some("P2"));
        let completed: Vec<_> = progress.completed_stages().iter().map(|s| s.id).collect();
        assert_eq!(completed, vec!["P0", "P1"]);
        let pending: Vec<_> = progress.pending_stages().iter().map(|s| s.id).collect();
        assert_eq!(pending, vec!["P3", "P4", "P5"]);
        assert_eq!(progress.percent(), 50);
    }

    #[test]
    fn unknown_stage_leaves_everything_pending() {
        let progress = evaluate("X9", &LEAD_STAGES, None);

        assert_eq!(progress.index, None);
        assert_eq!(progress.ordinal(), -1);
        assert!(progress.current_stage().is_none());
        assert!(progress.completed_stages().is_empty());
        assert_eq!(progress.pending_stages().len(), LEAD_STAGES.len());
        assert_eq!(progress.percent(), 0);
    }

    #[test]
    fn task_counts_only_flag_fully_done() {
        let mut counts = TaskCounts::new();
        counts.insert("P4".to_string(), TaskCount::new(2, 2).unwrap());
        counts.insert("P1".to_string(), TaskCount::new(3, 1).unwrap());
        counts.insert("P0".to_string(), TaskCount::new(0, 0).unwrap());

        let progress = evaluate("P2", &LEAD_STAGES, Some(&counts));

        let p4 = &progress.stages[4];
        assert_eq!(p4.status, StageStatus::Pending);
        assert!(p4.fully_done);
        let p1 = &progress.stages[1];
        assert_eq!(p1.status, StageStatus::Completed);
        assert!(!p1.fully_done);
        assert!(!progress.stages[0].fully_done);
        assert_eq!(progress.stages[3].tasks, None);
    }

    #[test]
    fn evaluate_record_uses_kind_catalog() {
        let property = PropertyRecord {
            stage: Some(StageCode::new("P5").unwrap()),
            ..Default::default()
        };
        let progress = evaluate_record(&property, None);
        assert_eq!(progress.current_stage(), Some(&PROPERTY_STAGES[5]));
        assert_eq!(progress.percent(), 100);

        let unstaged = PropertyRecord::default();
        assert_eq!(evaluate_record(&unstaged, None).index, None);
    }

    #[test]
    fn badge_falls_back_to_raw_id() {
        let badge = stage_badge("P3", &LEAD_STAGES);
        assert_eq!(badge.label, "Proposta inviata");
        assert_eq!(badge.text_color, DEFAULT_TEXT_COLOR);
        assert!(!badge.fallback);

        let light = stage_badge("P0", &LEAD_STAGES);
        assert_eq!(light.text_color, "#1e293b");

        let unknown = stage_badge("legacy", &LEAD_STAGES);
        assert_eq!(unknown.label, "legacy");
        assert_eq!(unknown.color, FALLBACK_BADGE_COLOR);
        assert!(unknown.fallback);
    }

    #[test]
    fn neighbours_and_ordering() {
        assert_eq!(next_stage("P0", &LEAD_STAGES).map(|s| s.id), Some("P1"));
        assert!(next_stage("P5", &LEAD_STAGES).is_none());
        assert_eq!(previous_stage("P1", &LEAD_STAGES).map(|s| s.id), Some("P0"));
        assert!(previous_stage("P0", &LEAD_STAGES).is_none());
        assert!(previous_stage("nope", &LEAD_STAGES).is_none());

        assert_eq!(compare_stages("P1", "P4", &LEAD_STAGES), Some(Ordering::Less));
        assert_eq!(compare_stages("P4", "P4", &LEAD_STAGES), Some(Ordering::Equal));
        assert_eq!(compare_stages("P4", "C1", &LEAD_STAGES), None);
    }

    #[test]
    fn kanban_keeps_catalog_order_and_unknown_records() {
        let records = vec![
            ("P3", "Villa Sole"),
            ("P0", "Bilocale Navigli"),
            ("P3", "Attico Duomo"),
            ("Z1", "Import legacy"),
        ];

        let board = kanban_columns(&LEAD_STAGES, records);

        assert_eq!(board.columns.len(), LEAD_STAGES.len());
        assert_eq!(board.columns[0].items, vec!["Bilocale Navigli"]);
        assert_eq!(board.columns[3].items, vec!["Villa Sole", "Attico Duomo"]);
        assert!(board.columns[5].items.is_empty());
        assert_eq!(board.unassigned, vec!["Import legacy"]);
    }
}
