//! Wire types for the taskboard REST service

mod board;
mod ids;
mod task;

pub use board::{Board, BoardPatch, NewBoard};
pub use ids::{BoardId, TaskId};
pub use task::{NewTask, Priority, Status, Task, TaskPatch};
