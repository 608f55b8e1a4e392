use super::*;

/// Tests creating a soldier through the API.
///
/// Expected: 201 with every field echoed and a non-empty `_id`
#[tokio::test]
async fn creates_soldier() {
    let app = TestApp::connected().await;

    let (status, body) = app
        .post("/soldiersdb/", fixture::soldier::create_body(1))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ID"], 1);
    assert_eq!(body["first_name"], fixture::soldier::DEFAULT_FIRST_NAME);
    assert_eq!(body["last_name"], fixture::soldier::DEFAULT_LAST_NAME);
    assert_eq!(body["phone_number"], fixture::soldier::DEFAULT_PHONE_NUMBER);
    assert_eq!(body["rank"], fixture::soldier::DEFAULT_RANK);
    assert!(!body["_id"].as_str().unwrap().is_empty());
}

/// Tests that the collection route works without the trailing slash.
///
/// Expected: 201
#[tokio::test]
async fn creates_soldier_without_trailing_slash() {
    let app = TestApp::connected().await;

    let (status, body) = app
        .post("/soldiersdb", fixture::soldier::create_body(2))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ID"], 2);
}

/// Tests creating a soldier whose business ID is taken.
///
/// Expected: 409 with an error message naming the ID
#[tokio::test]
async fn rejects_duplicate_id() {
    let app = TestApp::connected().await;
    app.post("/soldiersdb/", fixture::soldier::create_body(7))
        .await;

    let (status, body) = app
        .post("/soldiersdb/", fixture::soldier::create_body(7))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Soldier with ID 7 already exists.");
}

/// Tests creating a soldier with a required field missing.
///
/// Expected: 422 and nothing stored
#[tokio::test]
async fn rejects_missing_field() -> Result<(), crate::server::error::data::DataError> {
    let app = TestApp::connected().await;

    let (status, _) = app
        .post(
            "/soldiersdb/",
            json!({
                "ID": 3,
                "first_name": "Dana",
                "phone_number": 521234567,
                "rank": "Private",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.data_loader.get_all().await?.is_empty());

    Ok(())
}

/// Tests creating a soldier with a mistyped field.
///
/// Expected: 422
#[tokio::test]
async fn rejects_wrong_field_type() {
    let app = TestApp::connected().await;

    let mut body = fixture::soldier::create_body(4);
    body["phone_number"] = json!("not a number");

    let (status, _) = app.post("/soldiersdb/", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
