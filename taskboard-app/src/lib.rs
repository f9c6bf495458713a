//! Application state layer for the taskboard kanban client
//!
//! This crate holds everything between the REST client and a rendering
//! surface: the state snapshot, the controller with its named commands,
//! client-side filtering, the task edit form, and the column/drag-drop
//! model. Presentation is someone else's problem; every type here is
//! UI-framework-agnostic.
//!
//! ## Data flow
//!
//! ```text
//! load_boards -> select first board -> load_tasks
//!       user mutates (form submit, column drop, delete)
//!            -> API call -> reload tasks for the active board
//! ```
//!
//! The controller never patches task state optimistically; after any
//! successful mutation it re-fetches the authoritative list. Readers take
//! [`Snapshot`] clones and derive the filtered, per-column views from
//! them.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard_api::ApiClient;
//! use taskboard_app::Controller;
//!
//! # async fn example() {
//! let controller = Controller::new(ApiClient::new());
//! controller.load_boards().await;
//!
//! let snapshot = controller.snapshot().await;
//! for column in taskboard_app::COLUMNS {
//!     println!("{column}: {} tasks", snapshot.column_tasks(column).len());
//! }
//! # }
//! ```

pub mod columns;
mod controller;
mod error;
pub mod filter;
pub mod form;
mod state;

pub use columns::{column_tasks, DragState, COLUMNS};
pub use controller::Controller;
pub use error::{AppError, Result};
pub use filter::{filtered_tasks, FilterState, PriorityFilter};
pub use form::{TaskDraft, TaskForm};
pub use state::Snapshot;
