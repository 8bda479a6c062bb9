//! Route handlers
//!
//! Requests are matched by path prefix, in a fixed order, to one of three
//! handlers. Each handler only produces a `Response`; writing it is left to
//! the connection.

pub mod calc;
pub mod static_files;
pub mod stats;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::ServerContext;

pub const STATIC_PREFIX: &str = "/static/";
pub const STATS_PATH: &str = "/stats";
pub const CALC_PREFIX: &str = "/calc";

/// Which handler a path is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// File path relative to the document root, with one leading slash
    Static(&'a str),
    Stats,
    Calc,
    NotFound,
}

impl<'a> Route<'a> {
    /// First match wins: `/static/`, exactly `/stats`, then `/calc`.
    pub fn resolve(path: &'a str) -> Self {
        if path.starts_with(STATIC_PREFIX) {
            // Keep the slash that ends the prefix.
            Route::Static(&path[STATIC_PREFIX.len() - 1..])
        } else if path == STATS_PATH {
            Route::Stats
        } else if path.starts_with(CALC_PREFIX) {
            Route::Calc
        } else {
            Route::NotFound
        }
    }
}

/// Routes `request` and builds the response for it.
pub async fn dispatch(ctx: &ServerContext, request: &Request) -> Response {
    match Route::resolve(&request.path) {
        Route::Static(file) => static_files::serve(ctx.document_root(), file).await,
        Route::Stats => stats::serve(ctx.metrics()),
        Route::Calc => calc::serve(request),
        Route::NotFound => Response::not_found(),
    }
}
