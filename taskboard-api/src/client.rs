//! HTTP client for the board/task REST service.
//!
//! Every operation is a single request/response round trip — no retries,
//! no pagination. Non-success responses are normalized into a single
//! human-readable message before they leave this module, so nothing above
//! the client ever inspects an HTTP status code.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::types::{Board, BoardId, BoardPatch, NewBoard, NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error body the service emits on failure: `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Port over the board/task REST surface.
///
/// The application layer is generic over this trait so tests can substitute
/// a scripted implementation for the live client.
#[async_trait]
pub trait KanbanApi: Send + Sync {
    async fn list_boards(&self) -> Result<Vec<Board>>;
    async fn get_board(&self, id: &BoardId) -> Result<Board>;
    async fn create_board(&self, board: &NewBoard) -> Result<Board>;
    async fn update_board(&self, id: &BoardId, patch: &BoardPatch) -> Result<Board>;
    async fn delete_board(&self, id: &BoardId) -> Result<()>;
    async fn list_tasks(&self, board: &BoardId) -> Result<Vec<Task>>;
    async fn get_task(&self, id: &TaskId) -> Result<Task>;
    async fn create_task(&self, task: &NewTask) -> Result<Task>;
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task>;
    async fn delete_task(&self, id: &TaskId) -> Result<()>;
}

/// REST client for the taskboard service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    /// Base path without a trailing slash, e.g. `http://localhost:5000/api`.
    base_url: String,
}

impl ApiClient {
    /// Create a client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&ApiConfig::default())
    }

    /// Create a client with the given configuration.
    pub fn with_config(config: &ApiConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to [`ApiError::Server`], preferring the
    /// service's own message when the body carries one.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        debug!(status = %status, "non-success response");
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => format!("HTTP {status}"),
        };
        Err(ApiError::server(message))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(ApiError::from)
    }

    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    #[instrument(skip(self, body))]
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    #[instrument(skip(self, body))]
    async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    #[instrument(skip(self))]
    async fn delete_path(&self, path: &str) -> Result<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        // The ack body carries nothing the client needs.
        Self::check(response).await?;
        Ok(())
    }

    /// `GET /boards`
    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        self.get_json("/boards").await
    }

    /// `GET /boards/{id}`
    pub async fn get_board(&self, id: &BoardId) -> Result<Board> {
        self.get_json(&format!("/boards/{id}")).await
    }

    /// `POST /boards`
    pub async fn create_board(&self, board: &NewBoard) -> Result<Board> {
        self.post_json("/boards", board).await
    }

    /// `PUT /boards/{id}`
    pub async fn update_board(&self, id: &BoardId, patch: &BoardPatch) -> Result<Board> {
        self.put_json(&format!("/boards/{id}"), patch).await
    }

    /// `DELETE /boards/{id}`
    pub async fn delete_board(&self, id: &BoardId) -> Result<()> {
        self.delete_path(&format!("/boards/{id}")).await
    }

    /// `GET /boards/{id}/tasks`
    pub async fn list_tasks(&self, board: &BoardId) -> Result<Vec<Task>> {
        self.get_json(&format!("/boards/{board}/tasks")).await
    }

    /// `GET /tasks/{id}`
    pub async fn get_task(&self, id: &TaskId) -> Result<Task> {
        self.get_json(&format!("/tasks/{id}")).await
    }

    /// `POST /tasks`
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.post_json("/tasks", task).await
    }

    /// `PUT /tasks/{id}`
    pub async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        self.put_json(&format!("/tasks/{id}"), patch).await
    }

    /// `DELETE /tasks/{id}`
    pub async fn delete_task(&self, id: &TaskId) -> Result<()> {
        self.delete_path(&format!("/tasks/{id}")).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KanbanApi for ApiClient {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        ApiClient::list_boards(self).await
    }

    async fn get_board(&self, id: &BoardId) -> Result<Board> {
        ApiClient::get_board(self, id).await
    }

    async fn create_board(&self, board: &NewBoard) -> Result<Board> {
        ApiClient::create_board(self, board).await
    }

    async fn update_board(&self, id: &BoardId, patch: &BoardPatch) -> Result<Board> {
        ApiClient::update_board(self, id, patch).await
    }

    async fn delete_board(&self, id: &BoardId) -> Result<()> {
        ApiClient::delete_board(self, id).await
    }

    async fn list_tasks(&self, board: &BoardId) -> Result<Vec<Task>> {
        ApiClient::list_tasks(self, board).await
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task> {
        ApiClient::get_task(self, id).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        ApiClient::create_task(self, task).await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        ApiClient::update_task(self, id, patch).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        ApiClient::delete_task(self, id).await
    }
}

// Shared-handle convenience: an application can hold the client in an Arc
// and still pass it wherever the port is expected.
#[async_trait]
impl<T: KanbanApi + ?Sized> KanbanApi for std::sync::Arc<T> {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        (**self).list_boards().await
    }

    async fn get_board(&self, id: &BoardId) -> Result<Board> {
        (**self).get_board(id).await
    }

    async fn create_board(&self, board: &NewBoard) -> Result<Board> {
        (**self).create_board(board).await
    }

    async fn update_board(&self, id: &BoardId, patch: &BoardPatch) -> Result<Board> {
        (**self).update_board(id, patch).await
    }

    async fn delete_board(&self, id: &BoardId) -> Result<()> {
        (**self).delete_board(id).await
    }

    async fn list_tasks(&self, board: &BoardId) -> Result<Vec<Task>> {
        (**self).list_tasks(board).await
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task> {
        (**self).get_task(id).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        (**self).create_task(task).await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> Result<Task> {
        (**self).update_task(id, patch).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<()> {
        (**self).delete_task(id).await
    }
}
