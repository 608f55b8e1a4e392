use super::*;

/// Tests listing an empty collection.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn returns_empty_array() {
    let app = TestApp::connected().await;

    let (status, body) = app.get("/soldiersdb/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Tests listing every stored soldier.
///
/// Expected: 200 with one entry per soldier, in wire format
#[tokio::test]
async fn returns_all_soldiers() -> Result<(), crate::server::error::data::DataError> {
    let app = TestApp::connected().await;
    let db = app.data_loader.connection().await?;
    let first = factory::create_soldier(&db).await?;
    let second = factory::create_soldier(&db).await?;

    let (status, body) = app.get("/soldiersdb").await;

    assert_eq!(status, StatusCode::OK);
    let soldiers = body.as_array().unwrap();
    assert_eq!(soldiers.len(), 2);

    let ids: Vec<i64> = soldiers.iter().map(|s| s["ID"].as_i64().unwrap()).collect();
    assert!(ids.contains(&first.business_id));
    assert!(ids.contains(&second.business_id));

    let entry = soldiers
        .iter()
        .find(|s| s["ID"] == first.business_id)
        .unwrap();
    assert_eq!(entry["_id"], first.id.to_string());

    Ok(())
}
