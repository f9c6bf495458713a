//! Status columns and the drag-drop model
//!
//! The board always renders the same three columns, in the order given by
//! [`Status::ALL`]. Dragging is a small state machine: idle, dragging a
//! task, optionally hovering one column at a time.

use taskboard_api::{Status, Task, TaskId};

/// The workflow columns in render order.
pub const COLUMNS: [Status; 3] = Status::ALL;

/// Tasks of the filtered set belonging to one column, in collection order.
pub fn column_tasks<'a>(tasks: &[&'a Task], status: Status) -> Vec<&'a Task> {
    tasks.iter().copied().filter(|t| t.status == status).collect()
}

/// Drag-drop state. A drop either yields exactly one status update or is a
/// local no-op when the task is already in the target column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    source: Option<(TaskId, Status)>,
    over: Option<Status>,
}

impl DragState {
    /// Begin dragging a task.
    pub fn start(&mut self, task: &Task) {
        self.source = Some((task.id.clone(), task.status));
        self.over = None;
    }

    /// A drag entered the given column. Ignored when nothing is dragged.
    pub fn hover(&mut self, column: Status) {
        if self.source.is_some() {
            self.over = Some(column);
        }
    }

    /// A drag left the given column.
    pub fn leave(&mut self, column: Status) {
        if self.over == Some(column) {
            self.over = None;
        }
    }

    /// Whether a drag is currently hovering the given column.
    pub fn is_over(&self, column: Status) -> bool {
        self.over == Some(column)
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// Finish the drag over `column`. Returns the status update to issue,
    /// or `None` when nothing was dragged or the task already sits in that
    /// column. Either way the state returns to idle.
    pub fn drop_on(&mut self, column: Status) -> Option<(TaskId, Status)> {
        self.over = None;
        let (id, current) = self.source.take()?;
        (current != column).then_some((id, column))
    }

    /// Abort the drag without dropping.
    pub fn abort(&mut self) {
        self.source = None;
        self.over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_api::{BoardId, Priority};

    fn task(id: &str, status: Status) -> Task {
        Task {
            id: TaskId::new(id),
            board_id: BoardId::new("b1"),
            title: format!("task {id}"),
            description: None,
            status,
            priority: Priority::Medium,
            assigned_to: None,
            due_date: None,
        }
    }

    #[test]
    fn test_partition_by_column() {
        let tasks = vec![
            task("t1", Status::ToDo),
            task("t2", Status::Done),
            task("t3", Status::ToDo),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();

        let todo = column_tasks(&refs, Status::ToDo);
        assert_eq!(todo.len(), 2);
        assert_eq!(todo[0].id, TaskId::new("t1"));
        assert_eq!(todo[1].id, TaskId::new("t3"));
        assert!(column_tasks(&refs, Status::InProgress).is_empty());
        assert_eq!(column_tasks(&refs, Status::Done).len(), 1);
    }

    #[test]
    fn test_drop_on_same_column_is_noop() {
        let mut drag = DragState::default();
        drag.start(&task("t1", Status::ToDo));
        assert_eq!(drag.drop_on(Status::ToDo), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_on_other_column_yields_update() {
        let mut drag = DragState::default();
        drag.start(&task("t1", Status::ToDo));
        drag.hover(Status::Done);
        assert_eq!(
            drag.drop_on(Status::Done),
            Some((TaskId::new("t1"), Status::Done))
        );
        assert!(!drag.is_dragging());
        assert!(!drag.is_over(Status::Done));
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut drag = DragState::default();
        assert_eq!(drag.drop_on(Status::Done), None);
    }

    #[test]
    fn test_hover_tracks_one_column() {
        let mut drag = DragState::default();
        drag.hover(Status::Done);
        assert!(!drag.is_over(Status::Done), "hover without a drag is ignored");

        drag.start(&task("t1", Status::ToDo));
        drag.hover(Status::InProgress);
        assert!(drag.is_over(Status::InProgress));

        drag.hover(Status::Done);
        assert!(drag.is_over(Status::Done));
        assert!(!drag.is_over(Status::InProgress));

        drag.leave(Status::Done);
        assert!(!drag.is_over(Status::Done));
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let mut drag = DragState::default();
        drag.start(&task("t1", Status::ToDo));
        drag.hover(Status::Done);
        drag.abort();
        assert_eq!(drag, DragState::default());
    }
}
