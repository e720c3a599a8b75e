//! Collection store behaviour
//!
//! Exercises the public store API against the in-memory fake

mod common;

use std::collections::HashSet;

use chrono::NaiveDate;

use ironcore_admin::error::Error;
use ironcore_admin::storage::KeyValueStore;
use ironcore_admin::types::{LeadStatus, MemberPatch, MemberStatus, NewMember, NewPlan, NewTrainer};

use common::{memory_store, sample_lead, store_with_leads};

fn draft() -> NewMember {
    NewMember {
        name: "Jordan Lee".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "555-0111".to_string(),
        status: MemberStatus::Pending,
        renewal_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        plan_id: "p3".to_string(),
        trainer_id: Some("t2".to_string()),
        last_attendance: None,
    }
}

// ─────────────────────────────────────────────────────────────────
// Seeding
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_storage_returns_seed_once() {
    let (memory, store) = memory_store();

    let first = store.members().get_all().await.unwrap();
    let names: Vec<_> = first.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Johnson", "Sarah Miller"]);

    let second = store.members().get_all().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(memory.call_count("set"), 1);
}

#[tokio::test]
async fn test_reads_are_idempotent_for_every_collection() {
    let (_, store) = memory_store();

    assert_eq!(
        store.members().get_all().await.unwrap(),
        store.members().get_all().await.unwrap()
    );
    assert_eq!(
        store.trainers().get_all().await.unwrap(),
        store.trainers().get_all().await.unwrap()
    );
    assert_eq!(
        store.plans().get_all().await.unwrap(),
        store.plans().get_all().await.unwrap()
    );
    assert_eq!(
        store.leads().get_all().await.unwrap(),
        store.leads().get_all().await.unwrap()
    );
}

#[tokio::test]
async fn test_collections_are_independent_keys() {
    let (memory, store) = memory_store();
    store.plans().get_all().await.unwrap();

    assert!(memory.contains("plans").await.unwrap());
    assert!(!memory.contains("members").await.unwrap());
}

// ─────────────────────────────────────────────────────────────────
// Create
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_adds_exactly_one_record_with_fresh_id() {
    let (_, store) = memory_store();
    let before: HashSet<_> = store
        .members()
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();

    let created = store.members().create(draft()).await.unwrap();
    assert!(!before.contains(&created.id));

    let after = store.members().get_all().await.unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.iter().filter(|m| m.id == created.id).count(), 1);

    let stored = after.iter().find(|m| m.id == created.id).unwrap();
    assert_eq!(stored.name, "Jordan Lee");
    assert_eq!(stored.plan_id, "p3");
    assert_eq!(stored.trainer_id.as_deref(), Some("t2"));
}

#[tokio::test]
async fn test_member_ids_stay_unique() {
    let (_, store) = memory_store();
    for _ in 0..20 {
        store.members().create(draft()).await.unwrap();
    }
    let members = store.members().get_all().await.unwrap();
    let ids: HashSet<_> = members.iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), members.len());
}

#[tokio::test]
async fn test_members_prepend_plans_append() {
    let (_, store) = memory_store();

    let member = store.members().create(draft()).await.unwrap();
    assert_eq!(store.members().get_all().await.unwrap()[0].id, member.id);

    let plan = store
        .plans()
        .create(NewPlan {
            name: "Off-Peak".to_string(),
            price: 24.0,
            duration_months: 3,
        })
        .await
        .unwrap();
    let plans = store.plans().get_all().await.unwrap();
    assert_eq!(plans.last().unwrap().id, plan.id);
    assert_eq!(plans[0].id, "p1");
}

#[tokio::test]
async fn test_trainer_create_ignores_caller_counts() {
    let (_, store) = memory_store();
    let trainer = store
        .trainers()
        .create(NewTrainer {
            name: "Ana Souza".to_string(),
            specialty: "Yoga".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(trainer.assigned_members, 0);
    assert_eq!(trainer.performance, 100);
    assert_eq!(
        trainer.avatar,
        "https://ui-avatars.com/api/?name=Ana+Souza&background=3b82f6&color=fff"
    );
}

// ─────────────────────────────────────────────────────────────────
// Update
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_overwrites_only_patched_fields() {
    let (_, store) = memory_store();
    let original = store.members().get("1").await.unwrap();

    let patch = MemberPatch {
        status: Some(MemberStatus::Inactive),
        last_attendance: Some(None),
        ..Default::default()
    };
    let updated = store.members().update("1", patch).await.unwrap();

    assert_eq!(updated.status, MemberStatus::Inactive);
    assert!(updated.last_attendance.is_none());
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.email, original.email);
    assert_eq!(updated.renewal_date, original.renewal_date);

    let stored = store.members().get("1").await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_create_then_empty_update_round_trip() {
    let (_, store) = memory_store();
    let created = store.members().create(draft()).await.unwrap();
    store
        .members()
        .update(&created.id, MemberPatch::default())
        .await
        .unwrap();

    let stored = store.members().get(&created.id).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let (memory, store) = memory_store();
    store.members().get_all().await.unwrap();
    let before = memory.raw("members");

    let err = store
        .members()
        .update("no-such-id", MemberPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(err.to_string(), "No record 'no-such-id' in members");
    assert_eq!(memory.raw("members"), before);
}

// ─────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let (_, store) = memory_store();
    let created = store.members().create(draft()).await.unwrap();
    let before: Vec<_> = store
        .members()
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();

    store.members().delete("1").await.unwrap();

    let after: Vec<_> = store
        .members()
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    let expected: Vec<_> = before.into_iter().filter(|id| id != "1").collect();
    assert_eq!(after, expected);
    assert!(after.contains(&created.id));
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found_everywhere() {
    let (memory, store) = memory_store();
    store.trainers().get_all().await.unwrap();
    store.plans().get_all().await.unwrap();
    let writes = memory.call_count("set");

    assert!(matches!(
        store.members().delete("x").await,
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        store.trainers().delete("x").await,
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        store.plans().delete("x").await,
        Err(Error::NotFound { .. })
    ));

    // members was seeded by the first call, nothing else written
    assert_eq!(memory.call_count("set"), writes + 1);
}

// ─────────────────────────────────────────────────────────────────
// Leads
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_lead_pipeline() {
    let (_, store) = store_with_leads(&[
        sample_lead("l1", LeadStatus::New),
        sample_lead("l2", LeadStatus::New),
        sample_lead("l3", LeadStatus::Lost),
    ]);

    store
        .leads()
        .update_status("l1", LeadStatus::FollowUp)
        .await
        .unwrap();
    store
        .leads()
        .update_status("l1", LeadStatus::Joined)
        .await
        .unwrap();

    let board = store.leads().board().await.unwrap();
    assert_eq!(board.column(LeadStatus::New).len(), 1);
    assert_eq!(board.column(LeadStatus::Joined)[0].id, "l1");
    assert!(board.column(LeadStatus::FollowUp).is_empty());
    assert_eq!(board.column(LeadStatus::Lost)[0].id, "l3");

    let lead = &board.column(LeadStatus::Joined)[0];
    assert_eq!(lead.notes, vec!["Asked about classes".to_string()]);
    assert_eq!(lead.assigned_to.as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_lead_status_missing_id() {
    let (_, store) = store_with_leads(&[sample_lead("l1", LeadStatus::New)]);
    let err = store
        .leads()
        .update_status("l9", LeadStatus::Lost)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { ref collection, .. } if collection == "leads"));
}

// ─────────────────────────────────────────────────────────────────
// Corruption
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_corrupt_collection_is_fatal() {
    let (memory, store) = memory_store();
    memory.set("trainers", b"[{\"id\": 1}]".to_vec()).await.unwrap();

    let err = store.trainers().get_all().await.unwrap_err();
    assert!(matches!(err, Error::StorageCorrupt { .. }));
    assert!(err.is_fatal());
    assert_eq!(err.code().as_str(), "E210");
}
