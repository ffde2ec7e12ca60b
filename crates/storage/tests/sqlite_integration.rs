use tracker_core::model::UserId;
use tracker_core::seed::seed_document;
use tracker_core::time::fixed_now;

use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_the_document() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let user = UserId::new("11111111-2222-3333-4444-555555555555");
    assert!(repo.load(&user).await.unwrap().is_none());

    let mut doc = seed_document();
    let week_id = doc.months[0].weeks[0].id.clone();
    let task_id = doc.months[0].weeks[0].daily_tasks[0].id.clone();
    doc.toggle_daily_task(&week_id, &task_id);
    doc.update_daily_hours(&week_id, &task_id, 1.5);
    let custom = doc.add_daily_task(&week_id, "Extra reading", None).unwrap();

    repo.upsert(&user, &doc, fixed_now()).await.expect("upsert");

    let record = repo.load(&user).await.expect("load").expect("record");
    assert_eq!(record.user_id, user);
    assert_eq!(record.updated_at, fixed_now());
    assert_eq!(record.document, doc);
    assert!(record.document.week(&week_id).unwrap().daily_task(&custom).is_some());
}

#[tokio::test]
async fn sqlite_upsert_updates_in_place() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let user = UserId::new("user-upsert");
    let doc = seed_document();
    repo.upsert(&user, &doc, fixed_now()).await.unwrap();

    let mut changed = doc.clone();
    changed.current_week = 12;
    let later = fixed_now() + chrono::Duration::minutes(5);
    repo.upsert(&user, &changed, later).await.unwrap();

    let record = repo.load(&user).await.unwrap().unwrap();
    assert_eq!(record.document.current_week, 12);
    assert_eq!(record.updated_at, later);
}

#[tokio::test]
async fn sqlite_delete_removes_only_that_user() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_delete?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let alice = UserId::new("alice");
    let bob = UserId::new("bob");
    let doc = seed_document();
    repo.upsert(&alice, &doc, fixed_now()).await.unwrap();
    repo.upsert(&bob, &doc, fixed_now()).await.unwrap();

    repo.delete(&alice).await.unwrap();
    // Deleting an absent record is not an error.
    repo.delete(&alice).await.unwrap();

    assert!(repo.load(&alice).await.unwrap().is_none());
    assert!(repo.load(&bob).await.unwrap().is_some());
}

#[tokio::test]
async fn sqlite_loads_legacy_documents_without_schema_version() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_legacy?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    // A record written by the pre-versioning client: camelCase JSON, no
    // schemaVersion, no origin tags, custom entities marked by id only.
    let mut legacy = serde_json::to_value(seed_document()).unwrap();
    let obj = legacy.as_object_mut().unwrap();
    obj.remove("schemaVersion");
    obj["months"][0]["weeks"][0]["dailyTasks"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({
            "id": "task-custom-1767000000000-ab12cd34e",
            "day": "Custom",
            "topic": "Legacy custom task",
            "hours": 0,
            "completed": false,
            "notes": ""
        }));

    sqlx::query(
        "INSERT INTO user_progress (user_id, progress_data, updated_at) VALUES (?1, ?2, ?3)",
    )
    .bind("legacy-user")
    .bind(legacy.to_string())
    .bind(fixed_now())
    .execute(repo.pool())
    .await
    .unwrap();

    let record = repo
        .load(&UserId::new("legacy-user"))
        .await
        .unwrap()
        .expect("legacy record");
    assert_eq!(record.document.schema_version, 0);

    let mut doc = record.document;
    assert!(doc.migrate_in_place());
    let week_id = doc.months[0].weeks[0].id.clone();
    let legacy_task = tracker_core::model::TaskId::new("task-custom-1767000000000-ab12cd34e");
    assert!(doc.remove_daily_task(&week_id, &legacy_task));
}
