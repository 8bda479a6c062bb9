/// Longest method token kept; anything past it is dropped.
pub const MAX_METHOD_LEN: usize = 9;

/// Longest path token kept; anything past it is dropped.
pub const MAX_PATH_LEN: usize = 1023;

/// Represents the parts of a request line the server looks at.
///
/// Headers, body and HTTP version are never modeled. A missing token is an
/// empty string rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The request method as sent (e.g. "GET"), not validated
    pub method: String,
    /// The request target including any unparsed query (e.g. "/calc?a=1&b=2")
    pub path: String,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: truncate_chars(method.into(), MAX_METHOD_LEN),
            path: truncate_chars(path.into(), MAX_PATH_LEN),
        }
    }

    /// Query component after the first `?`, if any.
    pub fn query(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, q)| q)
    }
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
