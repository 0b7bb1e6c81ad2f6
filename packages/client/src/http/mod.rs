//! HTTP/1.0 protocol pieces
//!
//! URL decomposition, request rendering and response parsing. All of it is
//! done by hand over strings and byte buffers; no HTTP library is involved.

pub mod request;
pub mod response;
pub mod url;

pub use request::HttpRequest;
pub use response::{ContentLength, HttpResponse, ParsedResponse};
pub use url::{INDEX_PATH, ParsedUrl};
