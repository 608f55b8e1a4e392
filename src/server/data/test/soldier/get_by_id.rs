use super::*;

/// Tests that a created soldier reads back unchanged.
///
/// Expected: Ok(Some) equal to the record returned by create
#[tokio::test]
async fn round_trips_created_soldier() -> Result<(), DataError> {
    let loader = connected_loader().await;

    let created = loader
        .create_item(CreateSoldierParams {
            business_id: 1,
            first_name: "Noa".to_string(),
            last_name: "Levi".to_string(),
            phone_number: 501112233,
            rank: "Cpl".to_string(),
        })
        .await?;

    let fetched = loader.get_by_id(1).await?.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.first_name, "Noa");
    assert_eq!(fetched.last_name, "Levi");
    assert_eq!(fetched.phone_number, 501112233);
    assert_eq!(fetched.rank, "Cpl");
    assert!(!fetched.internal_id.is_empty());

    Ok(())
}

/// Tests that the internal ID is stable across reads.
///
/// Expected: same internal ID string from create and from repeated lookups
#[tokio::test]
async fn internal_id_is_stable() -> Result<(), DataError> {
    let loader = connected_loader().await;
    let db = loader.connection().await?;
    let model = factory::create_soldier_with_id(&db, 9).await?;

    let first = loader.get_by_id(9).await?.unwrap();
    let second = loader.get_by_id(9).await?.unwrap();

    assert_eq!(first.internal_id, model.id.to_string());
    assert_eq!(first.internal_id, second.internal_id);

    Ok(())
}

/// Tests that internal IDs beyond the 32-bit range are rendered losslessly.
///
/// Expected: Ok(Some) with the full 64-bit row ID as the internal ID
#[tokio::test]
async fn renders_large_internal_id() -> Result<(), DataError> {
    let loader = connected_loader().await;
    let db = loader.connection().await?;

    db.execute_unprepared(
        r#"INSERT INTO "soldiers" ("id", "business_id", "first_name", "last_name", "phone_number", "rank")
           VALUES (3000000000, 12, 'Big', 'Row', 1, 'Pvt')"#,
    )
    .await?;

    let soldier = loader.get_by_id(12).await?.unwrap();

    assert_eq!(soldier.internal_id, "3000000000");

    Ok(())
}

/// Tests looking up a business ID that does not exist.
///
/// Expected: Ok(None), not an error
#[tokio::test]
async fn returns_none_for_missing_soldier() -> Result<(), DataError> {
    let loader = connected_loader().await;
    loader.create_item(create_params(1)).await?;

    let result = loader.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
