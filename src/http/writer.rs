use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Framing, Response};
use crate::metrics::Metrics;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Status line, `Content-Type`, `Content-Length` and the blank line.
fn serialize_head(resp: &Response) -> BytesMut {
    let head = format!(
        "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        resp.content_type,
        resp.body.len()
    );

    let mut buf = BytesMut::with_capacity(head.len() + resp.body.len());
    buf.put_slice(head.as_bytes());
    buf
}

/// Full wire form of a response.
pub fn serialize_response(resp: &Response) -> BytesMut {
    let mut buf = serialize_head(resp);
    buf.put_slice(&resp.body);
    buf
}

/// Writes responses to a client stream and accounts sent bytes.
pub struct ResponseWriter<'a> {
    metrics: &'a Metrics,
}

impl<'a> ResponseWriter<'a> {
    pub fn new(metrics: &'a Metrics) -> Self {
        Self { metrics }
    }

    /// Sends `resp` and returns the number of bytes written.
    ///
    /// Bytes are attributed to the metrics only once the whole response went
    /// out. A write failure is returned as is; there is no retry.
    pub async fn send<S>(&self, stream: &mut S, resp: &Response) -> anyhow::Result<usize>
    where
        S: AsyncWrite + Unpin,
    {
        let written = match resp.framing {
            Framing::Single => {
                let buf = serialize_response(resp);
                stream.write_all(&buf).await?;
                buf.len()
            }
            Framing::Split => {
                let head = serialize_head(resp);
                stream.write_all(&head).await?;
                stream.write_all(&resp.body).await?;
                head.len() + resp.body.len()
            }
        };
        stream.flush().await?;

        self.metrics.add_bytes_sent(written);
        Ok(written)
    }
}
