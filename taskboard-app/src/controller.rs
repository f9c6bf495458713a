//! The controller: owns the application state and applies named commands
//!
//! Every mutation of the snapshot goes through a command below. Commands
//! that talk to the service follow one shape: call, then on success reload
//! the authoritative task list for the active board — state is never
//! patched optimistically.
//!
//! Overlapping loads are resolved by a per-collection request sequence:
//! a response is applied only when no later request has been applied yet,
//! and a task response only when its board is still the active one. The
//! wall-clock race stays, but a slow early response can no longer clobber
//! a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::filter::PriorityFilter;
use crate::form::{TaskDraft, TaskForm};
use crate::state::Snapshot;
use taskboard_api::{Board, BoardId, KanbanApi, NewBoard, Status, Task, TaskId, TaskPatch};

/// Live state plus the bookkeeping needed to discard stale responses.
struct Inner {
    snapshot: Snapshot,
    /// Highest board-list request sequence applied so far.
    boards_applied: u64,
    /// Highest task-list request sequence applied so far.
    tasks_applied: u64,
}

/// Owns the application state and the API port.
///
/// Single-writer: only commands mutate the snapshot. Readers call
/// [`snapshot`](Controller::snapshot) and work on the returned clone.
pub struct Controller<A> {
    api: A,
    state: RwLock<Inner>,
    boards_seq: AtomicU64,
    tasks_seq: AtomicU64,
}

impl<A: KanbanApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(Inner {
                snapshot: Snapshot {
                    loading: true,
                    ..Snapshot::default()
                },
                boards_applied: 0,
                tasks_applied: 0,
            }),
            boards_seq: AtomicU64::new(0),
            tasks_seq: AtomicU64::new(0),
        }
    }

    /// Current state as an immutable value.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.snapshot.clone()
    }

    fn next_seq(counter: &AtomicU64) -> u64 {
        counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    // =========================================================================
    // Boards
    // =========================================================================

    /// Fetch all boards, replacing the collection. When no board is active
    /// yet the first returned board becomes active (the server's ordering
    /// is authoritative) and its tasks are loaded. On failure the banner is
    /// set and the previous collection kept.
    pub async fn load_boards(&self) {
        let seq = Self::next_seq(&self.boards_seq);
        let result = self.api.list_boards().await;

        let select = {
            let mut state = self.state.write().await;
            if seq <= state.boards_applied {
                debug!(seq, "discarding stale board list response");
                return;
            }
            state.boards_applied = seq;
            let snapshot = &mut state.snapshot;
            snapshot.loading = false;
            match result {
                Ok(boards) => {
                    debug!(count = boards.len(), "board list loaded");
                    snapshot.boards = boards;
                    snapshot.error = None;
                    if snapshot.active_board.is_none() {
                        let first = snapshot.boards.first().map(|b| b.id.clone());
                        snapshot.active_board = first.clone();
                        first
                    } else {
                        None
                    }
                }
                Err(err) => {
                    warn!(error = %err, "board list load failed");
                    snapshot.error = Some(format!("Failed to load boards: {err}"));
                    None
                }
            }
        };

        if let Some(board) = select {
            self.load_tasks(&board).await;
        }
    }

    /// Create a board and make it active. Empty or whitespace-only names
    /// are rejected locally, without a network call. On API failure the
    /// board collection is unchanged and the error propagates to the
    /// caller for display.
    pub async fn create_board(&self, name: &str) -> Result<Board> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::required("Board name"));
        }

        let board = self.api.create_board(&NewBoard::new(name)).await?;
        {
            let mut state = self.state.write().await;
            state.snapshot.boards.push(board.clone());
            state.snapshot.active_board = Some(board.id.clone());
        }
        self.load_tasks(&board.id).await;
        Ok(board)
    }

    /// Make a board active and reload its tasks.
    pub async fn select_board(&self, id: BoardId) {
        {
            let mut state = self.state.write().await;
            state.snapshot.active_board = Some(id.clone());
        }
        self.load_tasks(&id).await;
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// Fetch the task list for a board, replacing the collection wholesale.
    /// A response is dropped when a newer one was applied already or the
    /// board is no longer active. On failure the previous collection stays
    /// (stale tasks beat a blank board) and the banner is set.
    pub async fn load_tasks(&self, board: &BoardId) {
        let seq = Self::next_seq(&self.tasks_seq);
        let result = self.api.list_tasks(board).await;

        let mut state = self.state.write().await;
        if seq <= state.tasks_applied {
            debug!(seq, board = %board, "discarding stale task list response");
            return;
        }
        if state.snapshot.active_board.as_ref() != Some(board) {
            debug!(board = %board, "dropping task list for an inactive board");
            return;
        }
        state.tasks_applied = seq;
        match result {
            Ok(tasks) => {
                debug!(board = %board, count = tasks.len(), "task list loaded");
                state.snapshot.tasks = tasks;
                state.snapshot.error = None;
            }
            Err(err) => {
                warn!(board = %board, error = %err, "task list load failed");
                state.snapshot.error = Some(format!("Failed to load tasks: {err}"));
            }
        }
    }

    /// Delete a task. The yes/no confirmation gate sits with the caller;
    /// this command assumes it already fired. Reloads the task collection
    /// on success; on failure returns the message with no local change.
    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.api.delete_task(id).await?;
        let board = self.state.read().await.snapshot.active_board.clone();
        if let Some(board) = board {
            self.load_tasks(&board).await;
        }
        Ok(())
    }

    // =========================================================================
    // Filters
    // =========================================================================

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.snapshot.filter.search_term = term.into();
    }

    pub async fn set_priority_filter(&self, priority: PriorityFilter) {
        self.state.write().await.snapshot.filter.priority = priority;
    }

    // =========================================================================
    // Edit form
    // =========================================================================

    /// Open the form on a fresh draft for the given column.
    pub async fn open_new_task(&self, status: Status) {
        self.state.write().await.snapshot.form = TaskForm::open_new(status);
    }

    /// Open the form editing an existing task.
    pub async fn open_edit_task(&self, task: &Task) {
        self.state.write().await.snapshot.form = TaskForm::open_edit(task);
    }

    /// Close the form, discarding the draft.
    pub async fn cancel_form(&self) {
        self.state.write().await.snapshot.form = TaskForm::Closed;
    }

    /// Replace the open draft's title, clearing a previous title error.
    pub async fn set_draft_title(&self, title: impl Into<String>) {
        self.state.write().await.snapshot.form.set_title(title);
    }

    /// Mutate the open draft's other fields. No-op when the form is closed.
    pub async fn edit_draft(&self, edit: impl FnOnce(&mut TaskDraft) + Send) {
        self.state.write().await.snapshot.form.edit_draft(edit);
    }

    /// Submit the open form. A validation failure keeps the form open with
    /// the field error and never reaches the network. Success closes the
    /// form and reloads the active board's tasks; an API failure attaches
    /// its message to the form, which stays open for retry or cancel.
    pub async fn submit_form(&self) {
        let (draft, board) = {
            let mut state = self.state.write().await;
            if state.snapshot.form.is_submitting() {
                return;
            }
            if !state.snapshot.form.validate() {
                return;
            }
            let Some(draft) = state.snapshot.form.draft().cloned() else {
                return;
            };
            let Some(board) = state.snapshot.active_board.clone() else {
                return;
            };
            state.snapshot.form.set_submitting(true);
            (draft, board)
        };

        let result = match &draft.id {
            Some(id) => self.api.update_task(id, &draft.to_patch()).await.map(|_| ()),
            None => self
                .api
                .create_task(&draft.to_new_task(&board))
                .await
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.state.write().await.snapshot.form = TaskForm::Closed;
                self.load_tasks(&board).await;
            }
            Err(err) => {
                warn!(error = %err, "task save failed");
                self.state
                    .write()
                    .await
                    .snapshot
                    .form
                    .set_submit_error(err.to_string());
            }
        }
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Begin dragging a task. Unknown ids are ignored.
    pub async fn drag_start(&self, id: &TaskId) {
        let mut state = self.state.write().await;
        let task = state.snapshot.tasks.iter().find(|t| &t.id == id).cloned();
        if let Some(task) = task {
            state.snapshot.drag.start(&task);
        }
    }

    /// A drag entered the given column.
    pub async fn drag_over(&self, column: Status) {
        self.state.write().await.snapshot.drag.hover(column);
    }

    /// A drag left the given column.
    pub async fn drag_leave(&self, column: Status) {
        self.state.write().await.snapshot.drag.leave(column);
    }

    /// Abort the drag without dropping.
    pub async fn drag_abort(&self) {
        self.state.write().await.snapshot.drag.abort();
    }

    /// Drop the dragged task on a column. Dropping on its current column
    /// issues no network call; otherwise exactly one status update goes
    /// out, followed by exactly one task reload. A failure is returned for
    /// the caller's alert and leaves local state untouched.
    pub async fn drop_on(&self, column: Status) -> Result<()> {
        let (update, board) = {
            let mut state = self.state.write().await;
            let update = state.snapshot.drag.drop_on(column);
            (update, state.snapshot.active_board.clone())
        };
        let Some((task, status)) = update else {
            return Ok(());
        };

        self.api
            .update_task(&task, &TaskPatch::status_only(status))
            .await?;
        if let Some(board) = board {
            self.load_tasks(&board).await;
        }
        Ok(())
    }
}
