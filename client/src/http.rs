//! HTTP transport types and the transport seam.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe HTTP traffic as plain data.
//! `TodoClient` builds requests and parses responses without ever touching
//! the network; a `Transport` implementation executes the round-trip in
//! between. This separation keeps the request/response logic deterministic
//! and lets tests drive the store with an in-memory fake instead of a
//! socket.
//!
//! All fields use owned types (`String`, `Vec`) so values carry no
//! lifetime constraints across the seam.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and handed to a `Transport` for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, then passed to `TodoClient::parse_*`
/// methods for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes an `HttpRequest` and returns the server's `HttpResponse`.
///
/// Implementations must return non-2xx responses as `Ok` data — status
/// interpretation belongs to the client's `parse_*` methods. `Err` is
/// reserved for failures that produced no response at all.
pub trait Transport {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: FnMut(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}
