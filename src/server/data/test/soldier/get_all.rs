use super::*;

/// Tests reading an empty collection.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_empty_collection() -> Result<(), DataError> {
    let loader = connected_loader().await;

    let soldiers = loader.get_all().await?;

    assert!(soldiers.is_empty());

    Ok(())
}

/// Tests reading every stored soldier.
///
/// Expected: Ok with all records, each with its own fields
#[tokio::test]
async fn returns_all_soldiers() -> Result<(), DataError> {
    let loader = connected_loader().await;
    let db = loader.connection().await?;

    factory::soldier::SoldierFactory::new(&db)
        .business_id(10)
        .rank("Sgt")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(&db)
        .business_id(20)
        .rank("Lt")
        .build()
        .await?;
    factory::soldier::SoldierFactory::new(&db)
        .business_id(30)
        .rank("Cpt")
        .build()
        .await?;

    let soldiers = loader.get_all().await?;

    assert_eq!(soldiers.len(), 3);

    let mut ids: Vec<i64> = soldiers.iter().map(|s| s.business_id).collect();
    ids.sort();
    assert_eq!(ids, vec![10, 20, 30]);

    let lieutenant = soldiers.iter().find(|s| s.business_id == 20).unwrap();
    assert_eq!(lieutenant.rank, "Lt");

    Ok(())
}

/// Tests that deleted soldiers are no longer listed.
///
/// Expected: Ok with only the remaining record
#[tokio::test]
async fn excludes_deleted_soldiers() -> Result<(), DataError> {
    let loader = connected_loader().await;
    loader.create_item(create_params(1)).await?;
    loader.create_item(create_params(2)).await?;

    loader.delete_item(1).await?;

    let soldiers = loader.get_all().await?;
    assert_eq!(soldiers.len(), 1);
    assert_eq!(soldiers[0].business_id, 2);

    Ok(())
}
