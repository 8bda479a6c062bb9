use crate::http::response::{Response, StatusCode};
use crate::metrics::{Metrics, Snapshot};

pub fn render(snap: &Snapshot) -> String {
    format!(
        "<html><body><h1>Server Stats</h1><p>Requests: {}</p><p>Bytes Received: {}</p><p>Bytes Sent: {}</p></body></html>",
        snap.requests, snap.bytes_received, snap.bytes_sent
    )
}

/// Renders the counters as they are right now.
pub fn serve(metrics: &Metrics) -> Response {
    Response::html(StatusCode::Ok, render(&metrics.snapshot()))
}
