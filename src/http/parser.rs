use crate::http::request::Request;

/// A value produced by a parse that never fails.
///
/// `valid` is false when the input did not have the expected shape and
/// `value` holds the fallback. Callers keep the fallback but can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Parsed<T> {
    pub fn valid(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn defaulted(value: T) -> Self {
        Self { value, valid: false }
    }
}

/// Text of the request up to the first NUL byte.
///
/// Its byte length is what gets attributed to received bytes.
pub fn request_text(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

/// Parses the method and path from raw request bytes.
///
/// Takes the first two whitespace-delimited tokens. Fewer than two tokens
/// yields empty fields and `valid == false`; this never errors.
pub fn parse_request(buf: &[u8]) -> Parsed<Request> {
    let text = String::from_utf8_lossy(request_text(buf));
    let mut tokens = text.split_ascii_whitespace();

    let method = tokens.next();
    let path = tokens.next();
    let request = Request::new(method.unwrap_or_default(), path.unwrap_or_default());

    if method.is_some() && path.is_some() {
        Parsed::valid(request)
    } else {
        Parsed::defaulted(request)
    }
}

/// Scans a signed decimal `i32` at the start of `input`.
///
/// Accepts leading ASCII whitespace and an optional sign. Returns the parsed
/// value (0 when nothing matched or the digits do not fit) and the rest of
/// the input after the digits.
pub fn parse_leading_i32(input: &str) -> (Parsed<i32>, &str) {
    let trimmed = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return (Parsed::defaulted(0), input);
    }

    let end = sign_len + digits_len;
    let rest = &trimmed[end..];
    match trimmed[..end].parse::<i32>() {
        Ok(n) => (Parsed::valid(n), rest),
        Err(_) => (Parsed::defaulted(0), rest),
    }
}
