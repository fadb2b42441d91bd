//! Live tests against a MongoDB server at the default address.
//!
//! Run with `cargo test -p db -- --ignored`. Each test works in its own
//! throwaway collection and drops it afterwards.

use db::mongodb::bson::oid::ObjectId;
use db::{
    connect_with, CreateJobListingInput, DbConfig, DbError, DbHandle, JobStore,
    UpdateJobListingInput,
};

async fn scratch_store() -> DbHandle {
    let config = DbConfig {
        collection: format!("jobs_it_{}", ObjectId::new().to_hex()),
        ..DbConfig::default()
    };
    connect_with(config).await.expect("mongodb must be running on localhost:27017")
}

async fn drop_collection(db: &DbHandle) {
    db.client()
        .database(&db.config().database)
        .collection::<db::mongodb::bson::Document>(&db.config().collection)
        .drop()
        .await
        .unwrap();
}

fn engineer() -> CreateJobListingInput {
    CreateJobListingInput {
        title: "Engineer".into(),
        description: "Build things".into(),
        company: "Acme".into(),
        url: "http://acme.example/job/1".into(),
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn create_get_update_delete_round_trip() {
    let db = scratch_store().await;

    let created = db.create_job_listing(engineer()).await.unwrap();
    assert!(ObjectId::parse_str(&created.id).is_ok());
    assert_eq!(db.get_job(&created.id).await.unwrap(), created);

    let updated = db
        .update_job_listing(
            &created.id,
            UpdateJobListingInput {
                title: Some("Senior Engineer".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Senior Engineer");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.company, created.company);
    assert_eq!(updated.url, created.url);

    let unchanged = db
        .update_job_listing(&created.id, UpdateJobListingInput::default())
        .await
        .unwrap();
    assert_eq!(unchanged, updated);

    let ack = db.delete_job_listing(&created.id).await.unwrap();
    assert_eq!(ack.delete_job_id.as_deref(), Some(created.id.as_str()));
    assert!(matches!(db.get_job(&created.id).await, Err(DbError::NotFound)));

    drop_collection(&db).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn get_jobs_returns_every_remaining_listing() {
    let db = scratch_store().await;

    let a = db.create_job_listing(engineer()).await.unwrap();
    let b = db.create_job_listing(engineer()).await.unwrap();
    let c = db.create_job_listing(engineer()).await.unwrap();
    db.delete_job_listing(&b.id).await.unwrap();

    let ids: Vec<String> = db.get_jobs().await.unwrap().into_iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);

    drop_collection(&db).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn delete_of_malformed_id_still_acknowledges() {
    let db = scratch_store().await;
    db.create_job_listing(engineer()).await.unwrap();

    let ack = db.delete_job_listing("not-an-object-id").await.unwrap();
    assert_eq!(ack.delete_job_id.as_deref(), Some("not-an-object-id"));
    assert_eq!(db.get_jobs().await.unwrap().len(), 1);

    drop_collection(&db).await;
}
