use cadence::{DbRepository, MutationOutcome, Session, Store, StoreError};
use cadence_db::schema::setup_schema;
use cadence_db::user;
use cadence_model::badge::BadgeId;
use cadence_model::entry::{EntryDraft, Impact, Mood};
use cadence_test_helpers::{SqliteDb, TestDb};
use cadence_utils::date::FixedClock;
use chrono::{Days, NaiveDate, NaiveTime};
use sea_orm::Database;
use std::sync::Arc;
use test_log::test;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

fn draft(days_ago: u64, impact: Impact) -> EntryDraft {
    let day = today().checked_sub_days(Days::new(days_ago)).unwrap();
    EntryDraft {
        title: format!("win {days_ago}"),
        description: Some("logged from the integration test".to_owned()),
        date: day.and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()).and_utc().fixed_offset(),
        impact,
        mood: Mood::Neutral,
    }
}

async fn setup(db: &SqliteDb) -> (Store<DbRepository>, Uuid) {
    let conn = Database::connect(db.db_uri().as_ref()).await.unwrap();
    setup_schema(&conn).await.unwrap();
    let user = user::Mutation::create_user(&conn, Some("Ada".to_owned())).await.unwrap();
    let store = Store::builder()
        .repository(DbRepository::new(conn))
        .auth(Arc::new(Session::signed_in(user.id)))
        .clock(Arc::new(FixedClock::on(today())))
        .build();
    (store, user.id)
}

#[test(tokio::test)]
async fn test_entries_round_trip_through_sqlite() {
    let db = SqliteDb::new().unwrap();
    let (store, user_id) = setup(&db).await;

    for days_ago in [2, 0, 1] {
        assert!(store.add_entry(draft(days_ago, Impact::High)).await.is_committed());
    }
    let entries = store.entries();
    assert_eq!(entries.len(), 3);
    assert!(entries.windows(2).all(|pair| pair[0].date >= pair[1].date));
    assert!(entries.iter().all(|entry| entry.user_id == user_id));
    assert_eq!(store.streak(), 3);

    let mut changed = entries[0].clone();
    changed.mood = Mood::Flow;
    assert!(store.update_entry(changed).await.is_committed());
    store.fetch_entries().await.unwrap();
    assert_eq!(store.entries()[0].mood, Mood::Flow);

    let removed = store.delete_entry(entries[2].id).await.committed().unwrap();
    store.fetch_entries().await.unwrap();
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.streak(), 2);

    let restored = store.restore_entry(removed).await.committed().unwrap();
    assert_eq!(store.entries().len(), 3);
    assert_eq!(store.entries()[2].id, restored.id);
}

#[test(tokio::test)]
async fn test_hat_trick_is_announced() {
    let db = SqliteDb::new().unwrap();
    let (store, _) = setup(&db).await;

    for _ in 0..3 {
        store.add_entry(draft(0, Impact::High)).await.committed().unwrap();
    }
    let queued: Vec<_> = store.newly_unlocked_badges().into_iter().map(|badge| badge.id).collect();
    assert_eq!(queued, vec![BadgeId::HatTrick]);
    assert!(store.clear_newly_unlocked_badge(BadgeId::HatTrick));
}

#[test(tokio::test)]
async fn test_deleting_a_missing_entry_rolls_back() {
    let db = SqliteDb::new().unwrap();
    let (store, user_id) = setup(&db).await;
    let entry = store.add_entry(draft(0, Impact::Low)).await.committed().unwrap();

    // Removed behind the store's back, so the remote delete finds nothing.
    cadence_db::entry::Mutation::delete_user_entry(store_connection(&store), user_id, entry.id)
        .await
        .unwrap();

    let outcome = store.delete_entry(entry.id).await;
    assert!(matches!(outcome, MutationOutcome::RolledBack(StoreError::Repository(_))));
    assert_eq!(store.entries(), vec![entry]);
}

fn store_connection(store: &Store<DbRepository>) -> &sea_orm::DatabaseConnection {
    store.repository().connection()
}
