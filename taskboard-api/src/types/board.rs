//! Board wire types

use super::ids::BoardId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of tasks, owned by the remote service. The client
/// holds a read-through cached copy and never mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Server-assigned identifier. The legacy backend spells this `_id`.
    #[serde(alias = "_id")]
    pub id: BoardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /boards`.
#[derive(Debug, Clone, Serialize)]
pub struct NewBoard {
    pub name: String,
}

impl NewBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Partial update for `PUT /boards/{id}`. Absent fields are left untouched
/// by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BoardPatch {
    /// Patch that renames the board.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
