mod common;

use crate::common::memory_db;
use crate::common::user::create_test_user;
use cadence_db::entry::{Mutation, Query};
use cadence_entity::entry::{Impact, Mood};
use chrono::DateTime;
use sea_orm::DbErr;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_create_and_list_entries() {
    let db = &memory_db().await;
    let user = create_test_user(db).await;
    let other = create_test_user(db).await;

    let older = DateTime::parse_from_rfc3339("2024-06-01T09:00:00Z").unwrap();
    let newer = DateTime::parse_from_rfc3339("2024-06-03T09:00:00Z").unwrap();

    let first = Mutation::create_entry(db, user.id, "Older".to_owned(), None, older, Impact::Low, Mood::Neutral)
        .await
        .unwrap();
    let second = Mutation::create_entry(
        db,
        user.id,
        "Newer".to_owned(),
        Some("with notes".to_owned()),
        newer,
        Impact::High,
        Mood::Flow,
    )
    .await
    .unwrap();
    Mutation::create_entry(db, other.id, "Not mine".to_owned(), None, newer, Impact::High, Mood::Flow)
        .await
        .unwrap();

    let entries = Query::get_user_entries(db, user.id).await.unwrap();
    assert_eq!(
        entries.iter().map(|entry| entry.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert_eq!(entries[0].description.as_deref(), Some("with notes"));
    assert_eq!(entries[0].impact, Impact::High);
    assert_eq!(entries[1].mood, Mood::Neutral);
}

#[test(tokio::test)]
async fn test_update_entry() {
    let db = &memory_db().await;
    let user = create_test_user(db).await;
    let date = DateTime::parse_from_rfc3339("2024-06-01T09:00:00+02:00").unwrap();
    let entry = Mutation::create_entry(db, user.id, "Draft".to_owned(), Some("x".to_owned()), date, Impact::Low, Mood::Drain)
        .await
        .unwrap();

    Mutation::update_user_entry(
        db,
        user.id,
        entry.id,
        Some("Final".to_owned()),
        Some(None),
        None,
        Some(Impact::Medium),
        None,
    )
    .await
    .unwrap();

    let updated = Query::get_user_entry(db, user.id, entry.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, None);
    assert_eq!(updated.impact, Impact::Medium);
    assert_eq!(updated.mood, Mood::Drain);
    assert_eq!(updated.date, date);
}

#[test(tokio::test)]
async fn test_update_requires_owner() {
    let db = &memory_db().await;
    let user = create_test_user(db).await;
    let intruder = create_test_user(db).await;
    let date = DateTime::parse_from_rfc3339("2024-06-01T09:00:00Z").unwrap();
    let entry = Mutation::create_entry(db, user.id, "Mine".to_owned(), None, date, Impact::Low, Mood::Flow)
        .await
        .unwrap();

    let res = Mutation::update_user_entry(db, intruder.id, entry.id, Some("Stolen".to_owned()), None, None, None, None).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));

    let res = Mutation::update_user_entry(db, user.id, Uuid::new_v4(), None, None, None, None, None).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));

    let unchanged = Query::get_user_entry(db, user.id, entry.id).await.unwrap().unwrap();
    assert_eq!(unchanged.title, "Mine");
}

#[test(tokio::test)]
async fn test_delete_entry() {
    let db = &memory_db().await;
    let user = create_test_user(db).await;
    let date = DateTime::parse_from_rfc3339("2024-06-01T09:00:00Z").unwrap();
    let entry = Mutation::create_entry(db, user.id, "Gone soon".to_owned(), None, date, Impact::Low, Mood::Flow)
        .await
        .unwrap();

    Mutation::delete_user_entry(db, user.id, entry.id).await.unwrap();
    assert!(Query::get_user_entry(db, user.id, entry.id).await.unwrap().is_none());

    let res = Mutation::delete_user_entry(db, user.id, entry.id).await;
    assert!(matches!(res, Err(DbErr::RecordNotFound(_))));
}
