use super::*;
use crate::server::util::time::parse_created_time;

/// Tests recording a reading.
///
/// Expected: the row carries the given value and a parseable timestamp
#[tokio::test]
async fn stores_reading_with_current_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let place = factory::place::create_place(db).await?;

    let reading = HeadcountRepository::new(db).create(place.id, 17).await?;

    assert_eq!(reading.place_id, place.id);
    assert_eq!(reading.headcount, 17);
    assert!(parse_created_time(&reading.created_time).is_some());

    Ok(())
}
