//! Room domain entity

use chrono::{DateTime, Utc};

/// A rentable unit inside a house. Occupied by at most one tenant.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i32,
    pub house_id: i32,
    pub room_number: String,
    pub room_name: Option<String>,
    pub is_occupied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
