use chrono::NaiveDate;
use meeting_core::{
    IdGenerationError, Meeting, MeetingCreate, MeetingPatch, MeetingRepository, MeetingStore,
    StoreConfig, StoreError,
};
use std::collections::HashSet;

fn standup() -> MeetingCreate {
    MeetingCreate {
        title: "Standup".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        start_time: "09:00".to_string(),
        end_time: "09:15".to_string(),
        attendees: vec!["alice".to_string(), "bob".to_string()],
        notes: String::new(),
        tags: vec!["daily".to_string()],
    }
}

fn planning() -> MeetingCreate {
    MeetingCreate {
        title: "Planning".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        start_time: "13:00".to_string(),
        end_time: "14:00".to_string(),
        attendees: vec!["carol".to_string()],
        notes: "bring roadmap".to_string(),
        tags: vec!["sprint".to_string(), "q1".to_string()],
    }
}

#[test]
fn create_returns_record_with_fresh_id_and_lists_it() {
    let mut store = MeetingStore::new();

    let created = store.create(standup()).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Standup");
    assert_eq!(created.to_create(), standup());

    assert_eq!(store.get_all(), vec![created]);
}

#[test]
fn get_returns_record_equal_to_create_result() {
    let mut store = MeetingStore::new();

    for payload in [standup(), planning()] {
        let created = store.create(payload).unwrap();
        assert_eq!(store.get(&created.id), Some(created));
    }
}

#[test]
fn get_unknown_id_is_absent() {
    let mut store = MeetingStore::new();
    store.create(standup()).unwrap();

    assert_eq!(store.get("nonexistent-id"), None);
    assert_eq!(store.get(""), None);
    assert!(!store.contains("nonexistent-id"));
}

#[test]
fn create_never_repeats_ids() {
    let mut store = MeetingStore::new();
    let mut seen = HashSet::new();

    for _ in 0..2_000 {
        let created = store.create(standup()).unwrap();
        assert!(seen.insert(created.id), "duplicate id generated");
    }
    assert_eq!(store.len(), 2_000);
}

#[test]
fn delete_removes_record_and_keeps_relative_order() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();
    let b = store.create(planning()).unwrap();

    assert!(store.delete(&a.id));
    assert_eq!(store.get_all(), vec![b]);
    assert_eq!(store.get(&a.id), None);
}

#[test]
fn delete_twice_returns_false_second_time() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();

    assert!(store.delete(&a.id));
    assert!(!store.delete(&a.id));
    assert!(store.is_empty());
}

#[test]
fn update_replaces_only_supplied_fields() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();

    assert!(store.update(&a.id, &MeetingPatch::new().title("Retro")));

    let loaded = store.get(&a.id).unwrap();
    assert_eq!(loaded.title, "Retro");
    assert_eq!(
        loaded,
        Meeting {
            title: "Retro".to_string(),
            ..a
        }
    );
}

#[test]
fn update_replaces_sequences_instead_of_merging() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();

    let patch = MeetingPatch::new().attendees(["dave"]).tags(Vec::<String>::new());
    assert!(store.update(&a.id, &patch));

    let loaded = store.get(&a.id).unwrap();
    assert_eq!(loaded.attendees, vec!["dave".to_string()]);
    assert!(loaded.tags.is_empty());
    assert_eq!(loaded.start_time, a.start_time);
}

#[test]
fn update_ignores_id_slot() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();

    let patch = MeetingPatch {
        id: Some("other-id".to_string()),
        notes: Some("hijack attempt".to_string()),
        ..MeetingPatch::default()
    };
    assert!(store.update(&a.id, &patch));

    let loaded = store.get(&a.id).unwrap();
    assert_eq!(loaded.id, a.id);
    assert_eq!(loaded.notes, "hijack attempt");
    assert_eq!(store.get("other-id"), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn update_unknown_id_returns_false_and_changes_nothing() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();
    let before = store.get_all();

    assert!(!store.update("missing", &MeetingPatch::new().title("Retro")));
    assert_eq!(store.get_all(), before);
    assert_eq!(store.get(&a.id).unwrap().title, "Standup");
}

#[test]
fn update_keeps_position_in_listing() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();
    let b = store.create(planning()).unwrap();

    assert!(store.update(&a.id, &MeetingPatch::new().title("Retro")));

    let ids: Vec<_> = store.get_all().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[test]
fn empty_patch_is_a_successful_no_op() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();

    assert!(MeetingPatch::new().is_empty());
    assert!(store.update(&a.id, &MeetingPatch::new()));
    assert_eq!(store.get(&a.id), Some(a));
}

#[test]
fn listing_is_a_snapshot() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();
    let snapshot = store.get_all();

    store.update(&a.id, &MeetingPatch::new().title("Retro"));
    store.create(planning()).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "Standup");
}

#[test]
fn returned_records_do_not_alias_store() {
    let mut store = MeetingStore::new();
    let mut created = store.create(standup()).unwrap();

    created.title = "Changed locally".to_string();
    created.attendees.push("mallory".to_string());

    let stored = store.get(&created.id).unwrap();
    assert_eq!(stored.title, "Standup");
    assert_eq!(stored.attendees.len(), 2);
}

#[test]
fn listing_length_tracks_creates_minus_deletes() {
    let mut store = MeetingStore::new();
    let mut ids = Vec::new();
    for _ in 0..10 {
        ids.push(store.create(planning()).unwrap().id);
    }

    let mut deleted = 0;
    for id in ids.iter().step_by(3) {
        if store.delete(id) {
            deleted += 1;
        }
    }
    store.delete("missing");
    store.delete(&ids[0]);

    assert_eq!(store.get_all().len(), 10 - deleted);
    assert_eq!(store.len(), 10 - deleted);
}

#[test]
fn deleted_ids_are_not_reused() {
    let mut store = MeetingStore::new();
    let a = store.create(standup()).unwrap();
    store.delete(&a.id);

    for _ in 0..100 {
        assert_ne!(store.create(standup()).unwrap().id, a.id);
    }
}

#[test]
fn independent_stores_do_not_share_records() {
    let mut first = MeetingStore::new();
    let second = MeetingStore::new();

    let a = first.create(standup()).unwrap();
    assert_eq!(second.get(&a.id), None);
    assert!(second.is_empty());
}

#[test]
fn collision_with_live_id_triggers_regeneration() {
    let mut draws = vec!["id-a", "id-a", "id-b"].into_iter();
    let generator = move || {
        draws
            .next()
            .map(str::to_string)
            .ok_or_else(|| IdGenerationError::new("exhausted"))
    };
    let mut store = MeetingStore::with_generator(generator);

    let a = store.create(standup()).unwrap();
    assert_eq!(a.id, "id-a");

    let b = store.create(planning()).unwrap();
    assert_eq!(b.id, "id-b");
    assert_eq!(store.len(), 2);
}

#[test]
fn persistent_collisions_surface_as_fault() {
    let generator = || Ok::<_, IdGenerationError>("fixed".to_string());
    let config = StoreConfig { max_id_attempts: 3 };
    let mut store = MeetingStore::with_config(config, generator);

    store.create(standup()).unwrap();
    let err = store.create(planning()).unwrap_err();

    assert_eq!(
        err,
        StoreError::IdCollision {
            attempts: 3,
            last_id: "fixed".to_string(),
        }
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("fixed").unwrap().title, "Standup");
}

#[test]
fn zero_attempt_config_still_draws_once() {
    let generator = || Ok::<_, IdGenerationError>("only".to_string());
    let mut store = MeetingStore::with_config(StoreConfig { max_id_attempts: 0 }, generator);

    assert_eq!(store.create(standup()).unwrap().id, "only");
    assert!(matches!(
        store.create(standup()),
        Err(StoreError::IdCollision { attempts: 1, .. })
    ));
}

#[test]
fn unavailable_id_source_is_a_fault_not_a_panic() {
    let generator = || Err::<String, _>(IdGenerationError::new("no entropy"));
    let mut store = MeetingStore::with_generator(generator);

    let err = store.create(standup()).unwrap_err();
    assert!(matches!(err, StoreError::IdGeneration(_)));
    assert!(err.to_string().contains("no entropy"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(store.is_empty());
}

#[test]
fn repository_trait_drives_the_store_generically() {
    fn exercise<R: MeetingRepository>(repo: &mut R) {
        let a = repo.create(standup()).unwrap();
        let b = repo.create(planning()).unwrap();
        assert!(repo.update(&b.id, &MeetingPatch::new().notes("moved")));
        assert!(repo.delete(&a.id));
        assert!(!repo.delete(&a.id));
        assert_eq!(repo.get(&b.id).unwrap().notes, "moved");
        assert_eq!(repo.get_all().len(), 1);
    }

    let mut store = MeetingStore::new();
    exercise(&mut store);
    assert_eq!(store.len(), 1);
}

#[test]
fn default_config_allows_several_attempts() {
    let store = MeetingStore::default();
    assert_eq!(store.config(), StoreConfig::default());
    assert!(store.config().max_id_attempts > 1);
}
