use super::*;

/// Tests fetching a soldier by business ID.
///
/// Expected: 200 with the stored fields
#[tokio::test]
async fn returns_soldier() -> Result<(), crate::server::error::data::DataError> {
    let app = TestApp::connected().await;
    let db = app.data_loader.connection().await?;
    let soldier = factory::soldier::SoldierFactory::new(&db)
        .business_id(15)
        .first_name("Tamar")
        .rank("Lt")
        .build()
        .await?;

    let (status, body) = app.get("/soldiersdb/15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ID"], 15);
    assert_eq!(body["_id"], soldier.id.to_string());
    assert_eq!(body["first_name"], "Tamar");
    assert_eq!(body["rank"], "Lt");

    Ok(())
}

/// Tests fetching a business ID that does not exist.
///
/// Expected: 404 with "Soldier with ID {id} not found"
#[tokio::test]
async fn returns_not_found() {
    let app = TestApp::connected().await;

    let (status, body) = app.get("/soldiersdb/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Soldier with ID 42 not found");
}

/// Tests fetching with a non-integer path ID.
///
/// Expected: 400 from the path extractor
#[tokio::test]
async fn rejects_non_integer_id() {
    let app = TestApp::connected().await;

    let (status, _) = app.get("/soldiersdb/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
