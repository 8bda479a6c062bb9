use std::net::SocketAddr;

use anyhow::Context;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::{ServerContext, Spawner, TokioSpawner};

/// Pending connections the kernel may queue.
pub const BACKLOG: i32 = 128;

/// Binds a listening socket with `SO_REUSEADDR` so a restarted server can
/// take the port back immediately. Must be called inside a tokio runtime.
pub fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .context("failed to create socket")?;
    socket
        .set_reuse_address(true)
        .context("failed to set SO_REUSEADDR")?;
    socket
        .bind(&addr.into())
        .with_context(|| format!("failed to bind {}", addr))?;
    socket.listen(BACKLOG).context("failed to listen")?;
    socket.set_nonblocking(true)?;

    let listener = TcpListener::from_std(socket.into())?;
    Ok(listener)
}

/// Accepts connections forever, handing each one to `spawner`.
///
/// Accept failures are logged and the loop keeps going.
pub async fn serve<P: Spawner>(
    listener: TcpListener,
    ctx: ServerContext,
    spawner: P,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let conn = Connection::new(socket, ctx.clone());
        spawner.spawn(async move {
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg.listen_addr())?;
    info!("Server listening on port {}", listener.local_addr()?.port());

    serve(listener, ServerContext::default(), TokioSpawner).await
}
