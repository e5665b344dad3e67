use super::*;

/// Tests updating a place's mutable fields.
///
/// Only the name and detail address change; the address and marker stay.
///
/// Expected: Ok(Some(Model)) with the new fields
#[tokio::test]
async fn updates_name_and_detail_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let place = factory::place::create_place(db).await?;

    let updated = PlaceRepository::new(db)
        .update(
            place.id,
            &UpdatePlaceParams {
                place_name: "Renamed Cafe".to_string(),
                detail_address: "B1".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.place_name, "Renamed Cafe");
    assert_eq!(updated.detail_address, "B1");
    assert_eq!(updated.address, place.address);
    assert_eq!(updated.marker_id, place.marker_id);

    Ok(())
}

/// Tests updating a place that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlaceRepository::new(db)
        .update(
            999,
            &UpdatePlaceParams {
                place_name: "Ghost".to_string(),
                detail_address: String::new(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
