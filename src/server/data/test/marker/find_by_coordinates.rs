use super::*;

/// Tests the exact-string coordinate match.
///
/// Expected: Ok(Some(Model)) only for byte-identical coordinate strings
#[tokio::test]
async fn matches_exact_coordinate_strings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Marker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::marker::MarkerFactory::new(db)
        .coordinates("37.5665", "126.9780")
        .build()
        .await?;

    let repo = MarkerRepository::new(db);

    let found = repo.find_by_coordinates("37.5665", "126.9780").await?;
    assert_eq!(found.unwrap().id, created.id);

    // Numerically equal but textually different coordinates are a
    // different marker.
    let trailing_zero = repo.find_by_coordinates("37.56650", "126.9780").await?;
    assert!(trailing_zero.is_none());

    Ok(())
}
