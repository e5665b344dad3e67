use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests registering a place at fresh coordinates.
///
/// Verifies a marker is created, the place attaches to it, and the sentinel
/// headcount row is seeded.
///
/// Expected: place, marker, and one headcount of -1
#[tokio::test]
async fn creates_marker_place_and_sentinel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlaceRepository::new(db);
    let place = repo
        .create_with_coordinates(&create_params("37.5665", "126.9780"))
        .await?;

    assert_eq!(place.place_name, "Corner Cafe");

    let marker = entity::prelude::Marker::find_by_id(place.marker_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(marker.latitude, "37.5665");
    assert_eq!(marker.longitude, "126.9780");

    let readings = entity::prelude::Headcount::find()
        .filter(entity::headcount::Column::PlaceId.eq(place.id))
        .all(db)
        .await?;
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].headcount, -1);

    Ok(())
}

/// Tests registering a second place at coordinates that already have a
/// marker.
///
/// Expected: both places share one marker; no duplicate marker row
#[tokio::test]
async fn reuses_marker_at_same_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlaceRepository::new(db);
    let first = repo
        .create_with_coordinates(&create_params("37.5665", "126.9780"))
        .await?;
    let second = repo
        .create_with_coordinates(&create_params("37.5665", "126.9780"))
        .await?;

    assert_eq!(first.marker_id, second.marker_id);
    assert_eq!(entity::prelude::Marker::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests that textually different coordinates get their own marker even
/// when numerically equal.
///
/// Expected: two markers
#[tokio::test]
async fn distinct_coordinate_strings_get_distinct_markers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlaceRepository::new(db);
    let first = repo
        .create_with_coordinates(&create_params("37.5665", "126.9780"))
        .await?;
    let second = repo
        .create_with_coordinates(&create_params("37.56650", "126.9780"))
        .await?;

    assert_ne!(first.marker_id, second.marker_id);

    Ok(())
}
