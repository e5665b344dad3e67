//! Bookmark place-list maintenance.
//!
//! A bookmark's place list may reference places that were deleted after the
//! reference was added. Rather than cascade bookmark updates on place
//! deletion, readers prune stale ids when they notice them.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bookmark::BookmarkRepository, place::PlaceRepository},
    error::AppError,
    model::headcount::{Annotated, PlaceReading},
    service::headcount::HeadcountService,
};

pub struct BookmarkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the latest annotated reading for each place in a bookmark,
    /// pruning place ids whose place no longer exists.
    ///
    /// # Returns
    /// - `Ok(Vec<Annotated<PlaceReading>>)` - Readings for the surviving places
    /// - `Err(AppError::NotFound)` - The bookmark is absent or not owned by the user
    pub async fn places_for_bookmark(
        &self,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<Vec<Annotated<PlaceReading>>, AppError> {
        let repo = BookmarkRepository::new(self.db);

        let bookmark = repo
            .find_by_id_for_user(bookmark_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bookmark {} not found", bookmark_id)))?;

        let live: HashSet<i32> = PlaceRepository::new(self.db)
            .find_by_ids(&bookmark.place_ids.0)
            .await?
            .into_iter()
            .map(|place| place.id)
            .collect();

        // Filter the stored list rather than adopting query row order; the
        // list's order is user data and surviving ids must keep it.
        let live_ids: Vec<i32> = bookmark
            .place_ids
            .0
            .iter()
            .copied()
            .filter(|id| live.contains(id))
            .collect();

        if live_ids.len() != bookmark.place_ids.0.len() {
            repo.set_place_ids(bookmark.id, live_ids.clone()).await?;
        }

        HeadcountService::new(self.db)
            .latest_for_places(&live_ids)
            .await
    }

    /// Adds a place reference to each of the targeted bookmarks.
    ///
    /// All-or-nothing on the conflict check: when any targeted bookmark
    /// already references the place, nothing is modified.
    ///
    /// # Returns
    /// - `Ok(())` - The reference was appended to every targeted bookmark
    /// - `Err(AppError::NotFound)` - The place is absent, or none of the
    ///   targeted bookmarks belong to the user
    /// - `Err(AppError::Conflict)` - A targeted bookmark already references
    ///   the place
    pub async fn add_place(
        &self,
        user_id: i32,
        place_id: i32,
        bookmark_ids: &[i32],
    ) -> Result<(), AppError> {
        PlaceRepository::new(self.db)
            .find_by_id(place_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Place {} not found", place_id)))?;

        let repo = BookmarkRepository::new(self.db);
        let bookmarks = repo.find_by_ids_for_user(bookmark_ids, user_id).await?;

        if bookmarks.is_empty() {
            return Err(AppError::NotFound("No matching bookmarks".to_string()));
        }

        if bookmarks
            .iter()
            .any(|bookmark| bookmark.place_ids.contains(place_id))
        {
            return Err(AppError::Conflict(
                "Place is already bookmarked".to_string(),
            ));
        }

        for bookmark in bookmarks {
            repo.push_place(bookmark, place_id).await?;
        }

        Ok(())
    }

    /// Removes a place reference from each of the targeted bookmarks.
    /// Bookmarks that never referenced the place are left unchanged.
    pub async fn remove_place(
        &self,
        user_id: i32,
        place_id: i32,
        bookmark_ids: &[i32],
    ) -> Result<(), AppError> {
        let repo = BookmarkRepository::new(self.db);
        let bookmarks = repo.find_by_ids_for_user(bookmark_ids, user_id).await?;

        for bookmark in bookmarks {
            repo.pull_place(bookmark, place_id).await?;
        }

        Ok(())
    }

    /// Lists the user's bookmarks that reference a place.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - At least one bookmark references the place
    /// - `Err(AppError::NotFound)` - None do
    pub async fn bookmarks_containing_place(
        &self,
        user_id: i32,
        place_id: i32,
    ) -> Result<Vec<entity::bookmark::Model>, AppError> {
        let bookmarks = BookmarkRepository::new(self.db)
            .find_by_user_and_place(user_id, place_id)
            .await?;

        if bookmarks.is_empty() {
            return Err(AppError::NotFound(format!(
                "No bookmarks contain place {}",
                place_id
            )));
        }

        Ok(bookmarks)
    }
}
