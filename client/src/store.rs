//! In-memory todo collection synchronized with the remote API.
//!
//! # Design
//! `TodoStore` owns the authoritative local copy of the todo list.
//! Consumers read `todos()` and call the mutation methods; every mutation
//! goes through the server first and applies the server's canonical record
//! to local state only after a successful response. A failed operation
//! never mutates the collection.
//!
//! Each operation returns a `Result` scoped to that invocation rather
//! than recording into a shared error field, and operations take
//! `&mut self`, so two operations on the same id cannot interleave.

use crate::client::TodoClient;
use crate::error::StoreError;
use crate::http::Transport;
use crate::transport::HttpTransport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// State controller for the todo list.
///
/// Generic over `Transport` so tests can drive it with scripted responses;
/// production code uses `TodoStore::connect` for a ureq-backed transport.
#[derive(Debug)]
pub struct TodoStore<T: Transport> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
}

impl TodoStore<HttpTransport> {
    /// Store talking to a live server at `base_url` over real HTTP.
    pub fn connect(base_url: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }
}

impl<T: Transport> TodoStore<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            todos: Vec::new(),
        }
    }

    /// The local collection, in display order: server order after
    /// `refresh`, newly created todos at the front.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Fetch the full list and replace the local collection with it.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        let req = self.client.build_list_todos();
        let resp = self.transport.send(req)?;
        self.todos = self.client.parse_list_todos(resp)?;
        Ok(())
    }

    /// Create a todo on the server and prepend the returned record.
    pub fn create(&mut self, input: &CreateTodo) -> Result<Todo, StoreError> {
        let req = self.client.build_create_todo(input)?;
        let resp = self.transport.send(req)?;
        let created = self.client.parse_create_todo(resp)?;
        self.todos.insert(0, created.clone());
        Ok(created)
    }

    /// Update a todo on the server and replace the local entry with the
    /// server-returned record. An id missing from the local collection
    /// still round-trips; nothing is replaced in that case.
    pub fn update(&mut self, id: i64, input: &UpdateTodo) -> Result<Todo, StoreError> {
        let req = self.client.build_update_todo(id, input)?;
        let resp = self.transport.send(req)?;
        let updated = self.client.parse_update_todo(resp)?;
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a todo on the server, then drop the local entry. The entry
    /// stays put until the server confirms.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let req = self.client.build_delete_todo(id);
        let resp = self.transport.send(req)?;
        self.client.parse_delete_todo(resp)?;
        if let Some(pos) = self.todos.iter().position(|t| t.id == id) {
            self.todos.remove(pos);
        }
        Ok(())
    }

    /// Flip the completion flag of a local todo via `update`. An id absent
    /// from the local collection fails without sending a request.
    pub fn toggle(&mut self, id: i64) -> Result<Todo, StoreError> {
        let completed = self
            .get(id)
            .ok_or(StoreError::UnknownId(id))?
            .completed;
        self.update(id, &UpdateTodo::completed(!completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::{HttpRequest, HttpResponse};
    use std::collections::VecDeque;

    /// Transport replaying a scripted sequence of responses, recording
    /// every request it was asked to send.
    struct ScriptedTransport {
        responses: VecDeque<Result<HttpResponse, ApiError>>,
        requests: Vec<HttpRequest>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self {
                responses: responses.into(),
                requests: Vec::new(),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.push(request);
            self.responses.pop_front().expect("unscripted request")
        }
    }

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: String::new(),
            completed,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn json_response(status: u16, value: serde_json::Value) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: value.to_string(),
        })
    }

    fn store_with(
        responses: Vec<Result<HttpResponse, ApiError>>,
    ) -> TodoStore<ScriptedTransport> {
        TodoStore::with_transport("http://localhost:5000/api", ScriptedTransport::new(responses))
    }

    fn seeded_store(
        seed: Vec<Todo>,
        responses: Vec<Result<HttpResponse, ApiError>>,
    ) -> TodoStore<ScriptedTransport> {
        let mut all = vec![json_response(200, serde_json::to_value(&seed).unwrap())];
        all.extend(responses);
        let mut store = store_with(all);
        store.refresh().unwrap();
        store
    }

    #[test]
    fn refresh_replaces_collection() {
        let record = todo(1, "A", false);
        let mut store = store_with(vec![json_response(
            200,
            serde_json::to_value(vec![record.clone()]).unwrap(),
        )]);
        store.refresh().unwrap();
        assert_eq!(store.todos(), &[record]);
    }

    #[test]
    fn refresh_failure_keeps_previous_collection() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![Err(ApiError::Transport("connection refused".to_string()))],
        );
        let err = store.refresh().unwrap_err();
        assert!(matches!(err, StoreError::Api(ApiError::Transport(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_prepends_server_record() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![json_response(201, serde_json::to_value(todo(2, "B", false)).unwrap())],
        );
        let created = store
            .create(&CreateTodo {
                title: "B".to_string(),
                description: String::new(),
            })
            .unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.todos()[0], created);
    }

    #[test]
    fn create_failure_leaves_collection_unchanged() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![Err(ApiError::Transport("connection reset".to_string()))],
        );
        let before = store.todos().to_vec();
        let result = store.create(&CreateTodo {
            title: "B".to_string(),
            description: String::new(),
        });
        assert!(result.is_err());
        assert_eq!(store.todos(), &before[..]);
    }

    #[test]
    fn update_replaces_entry_with_server_record() {
        // The server may normalize fields the client never sent; the
        // local entry must equal the server record verbatim.
        let mut server_record = todo(1, "Renamed", false);
        server_record.description = "server filled this in".to_string();
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![json_response(200, serde_json::to_value(&server_record).unwrap())],
        );
        let input = UpdateTodo {
            title: Some("Renamed".to_string()),
            ..UpdateTodo::default()
        };
        let updated = store.update(1, &input).unwrap();
        assert_eq!(updated, server_record);
        assert_eq!(store.get(1), Some(&server_record));
    }

    #[test]
    fn update_of_locally_absent_id_succeeds_without_insert() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![json_response(200, serde_json::to_value(todo(5, "Elsewhere", true)).unwrap())],
        );
        let updated = store.update(5, &UpdateTodo::completed(true)).unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(store.len(), 1);
        assert!(store.get(5).is_none());
    }

    #[test]
    fn update_failure_keeps_local_entry() {
        let original = todo(1, "A", false);
        let mut store = seeded_store(
            vec![original.clone()],
            vec![json_response(500, serde_json::json!({"error": "boom"}))],
        );
        let err = store.update(1, &UpdateTodo::completed(true)).unwrap_err();
        assert!(matches!(err, StoreError::Api(ApiError::Http { status: 500, .. })));
        assert_eq!(store.get(1), Some(&original));
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let mut store = seeded_store(
            vec![todo(2, "B", false), todo(1, "A", false)],
            vec![Ok(HttpResponse {
                status: 204,
                headers: Vec::new(),
                body: String::new(),
            })],
        );
        store.delete(2).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(2).is_none());
        assert!(store.get(1).is_some());
    }

    #[test]
    fn delete_failure_keeps_entry() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![Ok(HttpResponse {
                status: 404,
                headers: Vec::new(),
                body: String::new(),
            })],
        );
        let err = store.delete(1).unwrap_err();
        assert!(matches!(err, StoreError::Api(ApiError::NotFound)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_unknown_id_sends_no_request() {
        let mut store = seeded_store(vec![todo(1, "A", false)], Vec::new());
        let err = store.toggle(42).unwrap_err();
        assert!(matches!(err, StoreError::UnknownId(42)));
        assert_eq!(store.len(), 1);
        // Only the seeding refresh hit the transport.
        assert_eq!(store.transport.requests.len(), 1);
    }

    #[test]
    fn toggle_sends_inverted_completed_flag() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![json_response(200, serde_json::to_value(todo(1, "A", true)).unwrap())],
        );
        let toggled = store.toggle(1).unwrap();
        assert!(toggled.completed);

        let sent = &store.transport.requests[1];
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut store = seeded_store(
            vec![todo(1, "A", false)],
            vec![
                json_response(200, serde_json::to_value(todo(1, "A", true)).unwrap()),
                json_response(200, serde_json::to_value(todo(1, "A", false)).unwrap()),
            ],
        );
        store.toggle(1).unwrap();
        assert!(store.get(1).unwrap().completed);
        store.toggle(1).unwrap();
        assert!(!store.get(1).unwrap().completed);
    }
}
