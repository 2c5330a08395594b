//! House domain entity

use chrono::{DateTime, Utc};

/// A building owned by one landlord account.
#[derive(Debug, Clone)]
pub struct House {
    pub id: i32,
    /// Owner user id; every house query is scoped by it.
    pub owner_id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
