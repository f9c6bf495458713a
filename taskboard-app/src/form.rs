//! Task create/edit form state machine
//!
//! The form is either closed or holds a transient draft of a task's fields.
//! Exactly one validation rule exists: the trimmed title must be non-empty.
//! Every other field is accepted as-is.

use chrono::NaiveDate;
use taskboard_api::{BoardId, NewTask, Priority, Status, Task, TaskId, TaskPatch};

pub(crate) const TITLE_REQUIRED: &str = "Title is required";

/// Transient, unsaved copy of a task's fields held while the form is open.
/// Discarded on close or successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Present when editing an existing task, absent for a new one.
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub assigned_to: String,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Fresh skeleton for a new task in the given column.
    pub fn new(status: Status) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            status,
            priority: Priority::default(),
            assigned_to: String::new(),
            due_date: None,
        }
    }

    /// Editable copy of an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            assigned_to: task.assigned_to.clone().unwrap_or_default(),
            due_date: task.due_date,
        }
    }

    /// Create payload, merged with the active board's id.
    pub fn to_new_task(&self, board: &BoardId) -> NewTask {
        NewTask {
            board_id: board.clone(),
            title: self.title.clone(),
            description: non_empty(&self.description),
            status: self.status,
            priority: self.priority,
            assigned_to: non_empty(&self.assigned_to),
            due_date: self.due_date,
        }
    }

    /// Full-fields update payload for an edited task.
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            status: Some(self.status),
            priority: Some(self.priority),
            assigned_to: Some(self.assigned_to.clone()),
            due_date: self.due_date,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Form state machine.
///
/// `Closed -> Open(new | editing) -> Closed` on success or cancel; a
/// validation failure or a rejected submit keeps the form `Open` with the
/// error attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TaskForm {
    #[default]
    Closed,
    Open {
        draft: TaskDraft,
        /// Field-level error for the one required field.
        title_error: Option<String>,
        /// Last submit failure, shown inline; the form stays open so the
        /// user can retry or cancel.
        submit_error: Option<String>,
        /// Guards against double-submit while a save is in flight.
        submitting: bool,
    },
}

impl TaskForm {
    /// Open on a fresh draft for a new task in the given column.
    pub fn open_new(status: Status) -> Self {
        Self::open_with(TaskDraft::new(status))
    }

    /// Open on a copy of an existing task.
    pub fn open_edit(task: &Task) -> Self {
        Self::open_with(TaskDraft::from_task(task))
    }

    fn open_with(draft: TaskDraft) -> Self {
        TaskForm::Open {
            draft,
            title_error: None,
            submit_error: None,
            submitting: false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TaskForm::Open { .. })
    }

    pub fn draft(&self) -> Option<&TaskDraft> {
        match self {
            TaskForm::Open { draft, .. } => Some(draft),
            TaskForm::Closed => None,
        }
    }

    pub fn title_error(&self) -> Option<&str> {
        match self {
            TaskForm::Open { title_error, .. } => title_error.as_deref(),
            TaskForm::Closed => None,
        }
    }

    pub fn submit_error(&self) -> Option<&str> {
        match self {
            TaskForm::Open { submit_error, .. } => submit_error.as_deref(),
            TaskForm::Closed => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            TaskForm::Open {
                submitting: true,
                ..
            }
        )
    }

    /// Replace the draft's title, clearing a previous title error.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if let TaskForm::Open {
            draft, title_error, ..
        } = self
        {
            draft.title = title.into();
            *title_error = None;
        }
    }

    /// Mutate the open draft's non-validated fields. No-op when closed.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut TaskDraft)) {
        if let TaskForm::Open { draft, .. } = self {
            edit(draft);
        }
    }

    /// Apply the required-title rule. Returns false and records the field
    /// error when the trimmed title is empty; submission must not proceed.
    pub fn validate(&mut self) -> bool {
        if let TaskForm::Open {
            draft, title_error, ..
        } = self
        {
            if draft.title.trim().is_empty() {
                *title_error = Some(TITLE_REQUIRED.to_string());
                return false;
            }
            *title_error = None;
        }
        true
    }

    /// Mark a submit as started or finished.
    pub fn set_submitting(&mut self, value: bool) {
        if let TaskForm::Open { submitting, .. } = self {
            *submitting = value;
        }
    }

    /// Attach a failed submit's message and clear the in-flight flag.
    pub fn set_submit_error(&mut self, message: impl Into<String>) {
        if let TaskForm::Open {
            submit_error,
            submitting,
            ..
        } = self
        {
            *submit_error = Some(message.into());
            *submitting = false;
        }
    }
}
