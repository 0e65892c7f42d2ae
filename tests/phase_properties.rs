use proptest::prelude::*;

use property_crm::domain::stage::{EntityKind, TaskCount, TaskCounts};
use property_crm::dto::phase::StageStatus;
use property_crm::services::phase::{evaluate, kanban_columns, stage_badge};

fn any_kind() -> impl Strategy<Value = EntityKind> {
    prop::sample::select(EntityKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn known_stage_index_matches_position(kind in any_kind(), pick in any::<prop::sample::Index>()) {
        let catalog = kind.catalog();
        let position = pick.index(catalog.len());
        let progress = evaluate(catalog[position].id, catalog, None);

        prop_assert_eq!(progress.index, Some(position));
        for (i, stage) in progress.stages.iter().enumerate() {
            let expected = match i.cmp(&position) {
                std::cmp::Ordering::Less => StageStatus::Completed,
                std::cmp::Ordering::Equal => StageStatus::Current,
                std::cmp::Ordering::Greater => StageStatus::Pending,
            };
            prop_assert_eq!(stage.status, expected);
        }
    }

    #[test]
    fn unknown_stage_never_highlights(kind in any_kind(), id in "[a-z]{1,6}|X[0-9]{1,3}") {
        let catalog = kind.catalog();
        let progress = evaluate(&id, catalog, None);

        prop_assert_eq!(progress.index, None);
        prop_assert!(progress.current_stage().is_none());
        prop_assert!(progress.completed_stages().is_empty());
        prop_assert_eq!(progress.pending_stages().len(), catalog.len());
        prop_assert!(stage_badge(&id, catalog).fallback);
    }

    #[test]
    fn fully_done_tracks_task_counts(
        kind in any_kind(),
        pick in any::<prop::sample::Index>(),
        total in 0u32..10,
        done in 0u32..10,
    ) {
        let catalog = kind.catalog();
        let stage = &catalog[pick.index(catalog.len())];
        let completed = done.min(total);
        let mut counts = TaskCounts::new();
        counts.insert(stage.id.to_string(), TaskCount::new(total, completed).unwrap());

        let progress = evaluate("none", catalog, Some(&counts));
        let flagged: Vec<_> = progress.stages.iter().filter(|s| s.fully_done).collect();

        if total > 0 && completed == total {
            prop_assert_eq!(flagged.len(), 1);
            prop_assert_eq!(flagged[0].stage.id, stage.id);
        } else {
            prop_assert!(flagged.is_empty());
        }
    }

    #[test]
    fn evaluate_is_idempotent(kind in any_kind(), id in "[PC][0-9]") {
        let catalog = kind.catalog();
        prop_assert_eq!(evaluate(&id, catalog, None), evaluate(&id, catalog, None));
    }

    #[test]
    fn kanban_places_every_record_once(
        kind in any_kind(),
        ids in prop::collection::vec("[PCZ][0-9]", 0..20),
    ) {
        let catalog = kind.catalog();
        let records: Vec<_> = ids.iter().cloned().enumerate().map(|(i, id)| (id, i)).collect();
        let board = kanban_columns(catalog, records);

        let placed: usize = board.columns.iter().map(|c| c.items.len()).sum::<usize>()
            + board.unassigned.len();
        prop_assert_eq!(placed, ids.len());
        for column in &board.columns {
            for &i in &column.items {
                prop_assert_eq!(ids[i].as_str(), column.stage.id);
            }
        }
    }
}
