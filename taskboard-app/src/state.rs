//! Application state snapshot

use crate::columns::{column_tasks, DragState};
use crate::filter::{filtered_tasks, FilterState};
use crate::form::TaskForm;
use taskboard_api::{Board, BoardId, Status, Task};

/// One immutable view of the whole application state.
///
/// The controller owns the live copy behind a lock and replaces it through
/// named commands only; readers take clones and never observe a partially
/// applied mutation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Read-through cache of the server's boards, in server order.
    pub boards: Vec<Board>,
    pub active_board: Option<BoardId>,
    /// Tasks of the active board, replaced wholesale on every load.
    pub tasks: Vec<Task>,
    pub filter: FilterState,
    pub form: TaskForm,
    pub drag: DragState,
    /// Banner message for load failures. Replaced by the next successful
    /// load rather than dismissed.
    pub error: Option<String>,
    /// Gates only the initial boot sequence, not later reloads.
    pub loading: bool,
}

impl Snapshot {
    /// The active board's record, when it is still in the collection.
    pub fn active(&self) -> Option<&Board> {
        let id = self.active_board.as_ref()?;
        self.boards.iter().find(|b| &b.id == id)
    }

    /// Tasks passing the current filters, in server order.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filtered_tasks(&self.tasks, &self.filter)
    }

    /// Filtered tasks belonging to one column.
    pub fn column_tasks(&self, status: Status) -> Vec<&Task> {
        column_tasks(&self.filtered_tasks(), status)
    }
}
