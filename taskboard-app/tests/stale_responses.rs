//! Tests for stale-response handling on overlapping task loads
//!
//! Task list responses resolve through a gate the test controls, so two
//! in-flight loads can be completed out of order deterministically.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

use taskboard_api::{
    ApiError, Board, BoardId, BoardPatch, KanbanApi, NewBoard, NewTask, Priority,
    Result as ApiResult, Status, Task, TaskId, TaskPatch,
};
use taskboard_app::Controller;

fn task(id: &str, board: &str, title: &str) -> Task {
    Task {
        id: TaskId::new(id),
        board_id: BoardId::new(board),
        title: title.into(),
        description: None,
        status: Status::ToDo,
        priority: Priority::Medium,
        assigned_to: None,
        due_date: None,
    }
}

/// API whose `list_tasks` blocks until the test releases it.
#[derive(Default)]
struct GatedApi {
    pending: Mutex<Vec<(BoardId, oneshot::Sender<ApiResult<Vec<Task>>>)>>,
}

impl GatedApi {
    fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Complete the pending request at `index` with the given tasks.
    fn release(&self, index: usize, tasks: Vec<Task>) {
        let (_, sender) = self.pending.lock().unwrap().remove(index);
        let _ = sender.send(Ok(tasks));
    }
}

#[async_trait]
impl KanbanApi for GatedApi {
    async fn list_boards(&self) -> ApiResult<Vec<Board>> {
        Ok(Vec::new())
    }

    async fn get_board(&self, _id: &BoardId) -> ApiResult<Board> {
        Err(ApiError::server("not scripted"))
    }

    async fn create_board(&self, _board: &NewBoard) -> ApiResult<Board> {
        Err(ApiError::server("not scripted"))
    }

    async fn update_board(&self, _id: &BoardId, _patch: &BoardPatch) -> ApiResult<Board> {
        Err(ApiError::server("not scripted"))
    }

    async fn delete_board(&self, _id: &BoardId) -> ApiResult<()> {
        Err(ApiError::server("not scripted"))
    }

    async fn list_tasks(&self, board: &BoardId) -> ApiResult<Vec<Task>> {
        let (sender, receiver) = oneshot::channel();
        self.pending.lock().unwrap().push((board.clone(), sender));
        receiver
            .await
            .unwrap_or_else(|_| Err(ApiError::server("gate dropped")))
    }

    async fn get_task(&self, _id: &TaskId) -> ApiResult<Task> {
        Err(ApiError::server("not scripted"))
    }

    async fn create_task(&self, _task: &NewTask) -> ApiResult<Task> {
        Err(ApiError::server("not scripted"))
    }

    async fn update_task(&self, _id: &TaskId, _patch: &TaskPatch) -> ApiResult<Task> {
        Err(ApiError::server("not scripted"))
    }

    async fn delete_task(&self, _id: &TaskId) -> ApiResult<()> {
        Err(ApiError::server("not scripted"))
    }
}

async fn wait_for(mut condition: impl FnMut() -> bool) {
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("condition not reached within the wait budget");
}

// `select_board` awaits its task load, so the overlapping requests are
// driven from spawned tasks below.

#[tokio::test]
async fn test_same_board_reloads_latest_request_wins() {
    let api = Arc::new(GatedApi::default());
    let controller = Arc::new(Controller::new(api.clone()));
    let board = BoardId::new("b1");

    // First load starts and blocks on the gate.
    let first = {
        let controller = controller.clone();
        let board = board.clone();
        tokio::spawn(async move { controller.select_board(board).await })
    };
    wait_for(|| api.pending_count() == 1).await;

    // Second load for the same board starts behind it.
    let second = {
        let controller = controller.clone();
        let board = board.clone();
        tokio::spawn(async move { controller.load_tasks(&board).await })
    };
    wait_for(|| api.pending_count() == 2).await;

    // The later request resolves first and is applied.
    api.release(1, vec![task("t2", "b1", "from second load")]);
    second.await.unwrap();
    assert_eq!(
        controller.snapshot().await.tasks[0].title,
        "from second load"
    );

    // The earlier request resolves last; its response is stale and dropped.
    api.release(0, vec![task("t1", "b1", "from first load")]);
    first.await.unwrap();
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.tasks[0].title, "from second load");
}

#[tokio::test]
async fn test_response_for_switched_away_board_is_dropped() {
    let api = Arc::new(GatedApi::default());
    let controller = Arc::new(Controller::new(api.clone()));

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.select_board(BoardId::new("b1")).await })
    };
    wait_for(|| api.pending_count() == 1).await;

    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.select_board(BoardId::new("b2")).await })
    };
    wait_for(|| api.pending_count() == 2).await;

    // The switched-away board answers first, before b2's response exists.
    api.release(0, vec![task("t1", "b1", "belongs to b1")]);
    first.await.unwrap();
    assert!(
        controller.snapshot().await.tasks.is_empty(),
        "tasks for an inactive board must not land"
    );

    api.release(0, vec![task("t2", "b2", "belongs to b2")]);
    second.await.unwrap();
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.active_board, Some(BoardId::new("b2")));
    assert_eq!(snapshot.tasks[0].title, "belongs to b2");
}
