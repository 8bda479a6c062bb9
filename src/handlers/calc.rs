//! Addition endpoint
//!
//! `/calc?a=<int>&b=<int>` adds two `i32` values. The query is scanned
//! best-effort: the scan stops at the first mismatch and operands not yet
//! scanned stay 0. A number that does not fit in `i32` reads as 0 but the
//! scan goes on. The sum wraps on overflow.

use tracing::debug;

use crate::http::parser::{Parsed, parse_leading_i32};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Scans `a` and `b` from the query (the text after the first `?`).
pub fn scan_operands(query: Option<&str>) -> (Parsed<i32>, Parsed<i32>) {
    let missing = (Parsed::defaulted(0), Parsed::defaulted(0));

    let Some(rest) = query.and_then(|q| q.strip_prefix("a=")) else {
        return missing;
    };

    let (a, after_a) = parse_leading_i32(rest);
    if after_a.len() == rest.len() {
        // No digits at all: nothing matched.
        return missing;
    }
    let rest = after_a;

    let b = match rest.strip_prefix("&b=") {
        Some(rest) => parse_leading_i32(rest).0,
        None => Parsed::defaulted(0),
    };

    (a, b)
}

pub fn render(a: i32, b: i32) -> String {
    format!(
        "<html><body><h1>Calculation Result</h1><p>{} + {} = {}</p></body></html>",
        a,
        b,
        a.wrapping_add(b)
    )
}

pub fn serve(request: &Request) -> Response {
    let (a, b) = scan_operands(request.query());
    if !(a.valid && b.valid) {
        debug!(
            path = %request.path,
            a_valid = a.valid,
            b_valid = b.valid,
            "Calculator operand defaulted to 0"
        );
    }

    Response::html(StatusCode::Ok, render(a.value, b.value))
}
