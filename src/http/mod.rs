//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x layer: one request per connection, only the
//! method and path of the request line are looked at.
//!
//! # Architecture
//!
//! - **`connection`**: reads one request, updates metrics, dispatches, closes
//! - **`parser`**: extracts method and path, plus the parse-with-default helpers
//! - **`request`**: the parsed request (method + raw path)
//! - **`response`**: status codes, content types and response bodies
//! - **`writer`**: serializes responses onto the stream and accounts sent bytes
//! - **`decode`**: percent-decoding for path and query values
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← single read of up to MAX_REQUEST_SIZE bytes
//!        └──────┬──────┘
//!               │ n > 0 (n == 0 or error → Closed, no response)
//!               ▼
//!        ┌──────────────────┐
//!        │    Routing       │ ← parse request line, pick a handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← send response, count bytes
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod decode;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
