use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::debug;

use crate::handlers;
use crate::http::parser::{parse_request, request_text};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::server::ServerContext;

/// Most request bytes read from a connection. Anything past it is ignored.
pub const MAX_REQUEST_SIZE: usize = 2048;

/// One accepted client, served exactly one response.
///
/// `run` consumes the connection, so the stream is closed when it returns,
/// whichever path it took.
pub struct Connection<S> {
    stream: S,
    ctx: ServerContext,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, ctx: ServerContext) -> Self {
        Self { stream, ctx }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let Some(request) = self.read_request().await else {
            return Ok(());
        };

        let response = handlers::dispatch(&self.ctx, &request).await;
        let sent = ResponseWriter::new(self.ctx.metrics())
            .send(&mut self.stream, &response)
            .await?;

        debug!(
            method = %request.method,
            path = %request.path,
            status = response.status.as_u16(),
            bytes = sent,
            "Request served"
        );
        Ok(())
    }

    /// Single read of up to `MAX_REQUEST_SIZE` bytes.
    ///
    /// `None` on EOF or a read error; no response is sent then.
    pub async fn read_request(&mut self) -> Option<Request> {
        let mut buf = BytesMut::zeroed(MAX_REQUEST_SIZE);
        let n = match self.stream.read(&mut buf[..]).await {
            Ok(0) => return None,
            Ok(n) => n,
            Err(e) => {
                debug!(error = %e, "Read failed, closing connection");
                return None;
            }
        };
        buf.truncate(n);

        self.ctx.metrics().record_received(request_text(&buf).len());

        let parsed = parse_request(&buf);
        if !parsed.valid {
            debug!(bytes = n, "Incomplete request line, using empty fields");
        }
        Some(parsed.value)
    }
}
