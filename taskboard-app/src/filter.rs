//! Client-side task filtering: text search plus priority filter
//!
//! Filtering is a pure function over the task snapshot, computed fresh on
//! every read. There is no memoized index; the collections involved are
//! small enough that a linear pass wins on simplicity.

use taskboard_api::{Priority, Task};

/// Priority filter options. `All` disables priority matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityFilter::Low,
            Priority::Medium => PriorityFilter::Medium,
            Priority::High => PriorityFilter::High,
        }
    }
}

/// Transient, client-only filter state. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search_term: String,
    pub priority: PriorityFilter,
}

/// Select the tasks passing the current filters, in collection order.
///
/// A task matches when the lower-cased search term is empty or a substring
/// of the lower-cased title or description (a task without a description
/// never matches on the description side), and the priority filter is
/// `All` or equals the task's priority exactly.
pub fn filtered_tasks<'a>(tasks: &'a [Task], filter: &FilterState) -> Vec<&'a Task> {
    let needle = filter.search_term.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            let matches_search = needle.is_empty()
                || task.title.to_lowercase().contains(&needle)
                || task
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
            matches_search && filter.priority.matches(task.priority)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_api::{BoardId, Status, TaskId};

    fn task(id: &str, title: &str, description: &str, priority: Priority) -> Task {
        Task {
            id: TaskId::new(id),
            board_id: BoardId::new("b1"),
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status: Status::ToDo,
            priority,
            assigned_to: None,
            due_date: None,
        }
    }

    fn fixture() -> Vec<Task> {
        vec![
            task("t1", "Fix bug", "", Priority::High),
            task("t2", "Write docs", "bug notes", Priority::Low),
        ]
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let tasks = fixture();
        let filter = FilterState {
            search_term: "bug".into(),
            priority: PriorityFilter::All,
        };
        let matched = filtered_tasks(&tasks, &filter);
        // "Fix bug" on title, "bug notes" on description.
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_priority_filter_narrows() {
        let tasks = fixture();
        let filter = FilterState {
            search_term: "bug".into(),
            priority: PriorityFilter::High,
        };
        let matched = filtered_tasks(&tasks, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, TaskId::new("t1"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tasks = fixture();
        let filter = FilterState {
            search_term: "BUG".into(),
            priority: PriorityFilter::All,
        };
        assert_eq!(filtered_tasks(&tasks, &filter).len(), 2);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let tasks = fixture();
        let filter = FilterState::default();
        assert_eq!(filtered_tasks(&tasks, &filter).len(), 2);
    }

    #[test]
    fn test_absent_description_never_matches_substring() {
        let tasks = vec![task("t1", "Fix bug", "", Priority::High)];
        let filter = FilterState {
            search_term: "notes".into(),
            priority: PriorityFilter::All,
        };
        assert!(filtered_tasks(&tasks, &filter).is_empty());
    }

    #[test]
    fn test_is_pure() {
        let tasks = fixture();
        let filter = FilterState {
            search_term: "bug".into(),
            priority: PriorityFilter::All,
        };
        let first: Vec<_> = filtered_tasks(&tasks, &filter)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        let second: Vec<_> = filtered_tasks(&tasks, &filter)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(first, second);
    }
}
