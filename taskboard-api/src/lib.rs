//! REST client and wire types for the taskboard service
//!
//! This crate wraps the board/task HTTP API behind typed operations and
//! normalizes every failure into a single human-readable message.
//!
//! ## Overview
//!
//! - **Closed enumerations** - `Status` and `Priority` each have exactly
//!   three variants; unknown wire values are rejected when a response is
//!   decoded, never deeper in the UI
//! - **One round trip per operation** - no retries, no pagination
//! - **Normalized errors** - a failing response yields the body's `error`
//!   field when present, otherwise the HTTP status line; callers only ever
//!   see the message
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard_api::{ApiClient, ApiConfig};
//!
//! # async fn example() -> taskboard_api::Result<()> {
//! let client = ApiClient::with_config(&ApiConfig::from_env());
//!
//! for board in client.list_boards().await? {
//!     let tasks = client.list_tasks(&board.id).await?;
//!     println!("{}: {} tasks", board.name, tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
mod error;
pub mod types;

pub use client::{ApiClient, KanbanApi};
pub use config::ApiConfig;
pub use error::{ApiError, Result};

// Re-export commonly used types
pub use types::{
    Board, BoardId, BoardPatch, NewBoard, NewTask, Priority, Status, Task, TaskId, TaskPatch,
};
