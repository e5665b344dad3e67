use super::*;

/// Tests fetching a subset of places by id, with stale ids ignored.
///
/// Expected: only the existing places come back
#[tokio::test]
async fn returns_only_existing_places() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::place::create_place(db).await?;
    let second = factory::place::create_place(db).await?;

    let found = PlaceRepository::new(db)
        .find_by_ids(&[first.id, second.id, 999])
        .await?;

    let mut ids: Vec<i32> = found.iter().map(|place| place.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests the empty id list.
///
/// Expected: Ok(empty) without touching the database
#[tokio::test]
async fn empty_id_list_yields_empty_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_place_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlaceRepository::new(db).find_by_ids(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
