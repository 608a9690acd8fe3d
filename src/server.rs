//! HTTP server lifecycle.
//!
//! [`run`] serves until a shutdown future resolves, which is how the binary
//! runs. [`start`] spawns the server in the background and returns a
//! [`ServerHandle`] that test harnesses stop explicitly.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::api::{create_router, AppState};
use crate::error::{PantryError, Result};

/// Serve the API on `addr` until `shutdown` resolves.
pub async fn run<F>(addr: SocketAddr, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("HTTP server listening on {}", local_addr);

    let router = create_router(state.clone());
    state.set_ready(true);

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await;

    state.set_ready(false);
    info!("HTTP server stopped");
    result.map_err(PantryError::from)
}

/// Bind `addr` (port 0 picks a free port) and serve in a background task.
pub async fn start(addr: SocketAddr, state: AppState) -> Result<ServerHandle> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let router = create_router(state.clone());
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
        task_state.set_ready(false);
        result
    });

    state.set_ready(true);
    info!("HTTP server listening on {}", local_addr);

    Ok(ServerHandle {
        local_addr,
        shutdown: shutdown_tx,
        task,
    })
}

/// Running server started with [`start`].
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL for clients, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections, drain in-flight requests and wait for the
    /// server task to finish.
    pub async fn stop(self) -> Result<()> {
        debug!("Stopping HTTP server on {}", self.local_addr);
        // The receiver only disappears if the task already ended.
        let _ = self.shutdown.send(());

        self.task.await.map_err(|e| {
            error!("HTTP server task on {} failed: {}", self.local_addr, e);
            PantryError::ServerTask(e)
        })??;

        info!("HTTP server on {} stopped", self.local_addr);
        Ok(())
    }
}
