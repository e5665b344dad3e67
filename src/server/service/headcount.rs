//! Headcount aggregation.
//!
//! The interesting part of this module is pure: given a batch of readings
//! and an explicit `now`, compute each place's current reading and how stale
//! it is. The async methods only fetch and delegate.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::headcount::HeadcountRepository,
    error::AppError,
    model::headcount::{Annotated, PlaceReading, Reading},
    util::time::parse_created_time,
};

pub struct HeadcountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeadcountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the overview: one row per marker, carrying the most recently
    /// updated place at that marker, most recent first.
    pub async fn overview(&self) -> Result<Vec<Annotated<PlaceReading>>, AppError> {
        let readings = HeadcountRepository::new(self.db).find_all_detailed().await?;
        let annotated = annotate_latest_per_place(readings, Utc::now().naive_utc());

        Ok(latest_per_marker(annotated))
    }

    /// Latest annotated reading for a single place.
    ///
    /// # Returns
    /// - `Ok(Annotated)` - The place's current reading
    /// - `Err(AppError::NotFound)` - The place has no readings at all
    pub async fn latest_for_place(
        &self,
        place_id: i32,
    ) -> Result<Annotated<entity::headcount::Model>, AppError> {
        let readings = HeadcountRepository::new(self.db)
            .find_by_place(place_id)
            .await?;

        annotate_latest_per_place(readings, Utc::now().naive_utc())
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::NotFound(format!("No headcount readings for place {}", place_id))
            })
    }

    /// Latest annotated reading for every place at a marker.
    pub async fn latest_for_marker(
        &self,
        marker_id: i32,
    ) -> Result<Vec<Annotated<PlaceReading>>, AppError> {
        let readings = HeadcountRepository::new(self.db)
            .find_detailed_by_marker(marker_id)
            .await?;

        Ok(annotate_latest_per_place(readings, Utc::now().naive_utc()))
    }

    /// Latest annotated reading for each of the given places.
    pub async fn latest_for_places(
        &self,
        place_ids: &[i32],
    ) -> Result<Vec<Annotated<PlaceReading>>, AppError> {
        let readings = HeadcountRepository::new(self.db)
            .find_detailed_by_places(place_ids)
            .await?;

        Ok(annotate_latest_per_place(readings, Utc::now().naive_utc()))
    }
}

/// Reduces readings to one annotated reading per place.
///
/// Within a place, readings sort descending by parsed `created_time`;
/// unparseable timestamps sort last and ties keep encounter order. The
/// newest reading is the place's current value. `update_elapsed_time` is the
/// whole seconds between `now` and the second-newest reading's timestamp, or
/// `-1` when the place has a single reading (or the second-newest timestamp
/// cannot be parsed). The result sorts descending by each current reading's
/// own timestamp.
pub fn annotate_latest_per_place<T: Reading>(
    readings: Vec<T>,
    now: NaiveDateTime,
) -> Vec<Annotated<T>> {
    let mut groups: BTreeMap<i32, Vec<(Option<NaiveDateTime>, T)>> = BTreeMap::new();
    for reading in readings {
        let parsed = parse_created_time(reading.created_time());
        groups
            .entry(reading.place_id())
            .or_default()
            .push((parsed, reading));
    }

    let mut annotated: Vec<Annotated<T>> = Vec::with_capacity(groups.len());
    for (_, mut group) in groups {
        // Descending; `None` orders below every `Some`, so unparseable
        // timestamps land at the end. The sort is stable.
        group.sort_by(|a, b| b.0.cmp(&a.0));

        let update_elapsed_time = match group.get(1).and_then(|(parsed, _)| *parsed) {
            Some(previous) => (now - previous).num_seconds(),
            None => -1,
        };

        if let Some((_, newest)) = group.into_iter().next() {
            annotated.push(Annotated {
                reading: newest,
                update_elapsed_time,
            });
        }
    }

    annotated.sort_by(|a, b| {
        parse_created_time(b.reading.created_time())
            .cmp(&parse_created_time(a.reading.created_time()))
    });
    annotated
}

/// Keeps only the most recently updated place within each marker group.
///
/// A later reading replaces the held one only when strictly newer, so ties
/// keep the first-encountered place. Output sorts most recent first.
pub fn latest_per_marker(items: Vec<Annotated<PlaceReading>>) -> Vec<Annotated<PlaceReading>> {
    let mut best: BTreeMap<i32, Annotated<PlaceReading>> = BTreeMap::new();
    for item in items {
        let marker_id = item.reading.marker.id;
        let candidate = parse_created_time(item.reading.created_time());

        match best.get(&marker_id) {
            Some(held) if candidate <= parse_created_time(held.reading.created_time()) => {}
            _ => {
                best.insert(marker_id, item);
            }
        }
    }

    let mut reduced: Vec<Annotated<PlaceReading>> = best.into_values().collect();
    reduced.sort_by(|a, b| {
        parse_created_time(b.reading.created_time())
            .cmp(&parse_created_time(a.reading.created_time()))
    });
    reduced
}
