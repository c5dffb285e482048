//! Persistence models for completed-game records.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::store::schema;

/// A stored completed-game record. Immutable after creation; this system
/// never updates or deletes records.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Getters, new)]
#[diesel(table_name = schema::game_results)]
pub struct GameResult {
    id: i32,
    clicks: i32,
    completed_at: NaiveDateTime,
}

/// Insertable record for a newly completed game. `completed_at` is
/// assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Insertable, new, Getters)]
#[diesel(table_name = schema::game_results)]
pub struct NewGameResult {
    clicks: i32,
}
