//! Client library for the todo service.
//!
//! # Overview
//! Owns the authoritative in-memory todo collection and mediates every
//! CRUD call against the REST API. `TodoStore` is the entry point for
//! consumers; underneath it, `TodoClient` builds `HttpRequest` values and
//! parses `HttpResponse` values without touching the network, and a
//! `Transport` executes the actual round-trip.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and
//!   the request/response logic stays deterministic and testable.
//! - `TodoStore` is generic over `Transport`; production code uses the
//!   ureq-backed `HttpTransport`, tests substitute in-memory fakes.
//! - Every store operation returns a `Result` scoped to that invocation;
//!   there is no shared error slot, and a failed operation never mutates
//!   the local collection.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::{ApiError, FormError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::TodoStore;
pub use transport::HttpTransport;
pub use types::{CreateTodo, Todo, UpdateTodo};
