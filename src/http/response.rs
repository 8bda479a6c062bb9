pub const TEXT_HTML: &str = "text/html";
pub const OCTET_STREAM: &str = "application/octet-stream";

pub const NOT_FOUND_BODY: &str = "<html><body><h1>404 Not Found</h1></body></html>";
pub const FILE_NOT_FOUND_BODY: &str = "<html><body><h1>File Not Found</h1></body></html>";

/// HTTP status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tallyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// How a response goes onto the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Head and body composed into one buffer and written once
    Single,
    /// Head written first, then the raw payload (file contents)
    Split,
}

/// A complete HTTP response ready to be sent to a client.
///
/// Only `Content-Type` and `Content-Length` are ever sent as headers, in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub framing: Framing,
}

impl Response {
    /// An HTML response written in a single buffer.
    pub fn html(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_HTML,
            body: body.into().into_bytes(),
            framing: Framing::Single,
        }
    }

    /// A 200 response carrying raw file bytes.
    pub fn file(contents: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: OCTET_STREAM,
            body: contents,
            framing: Framing::Split,
        }
    }

    /// The generic 404 for unknown routes.
    pub fn not_found() -> Self {
        Self::html(StatusCode::NotFound, NOT_FOUND_BODY)
    }

    /// The 404 for a static file that could not be read.
    pub fn file_not_found() -> Self {
        Self::html(StatusCode::NotFound, FILE_NOT_FOUND_BODY)
    }
}
