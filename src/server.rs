use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::error::ExportError;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Loopback HTTP server for the directory containing the HTML file, so the
/// page's relative asset paths resolve during printing.
pub struct StaticServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl StaticServer {
    /// Bind an OS-assigned port on `127.0.0.1` and serve `root` on a
    /// background task.
    pub async fn start(root: &Path) -> Result<StaticServer, ExportError> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;

        let app = Router::new().fallback_service(ServeDir::new(root));
        let (shutdown, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = rx.await;
            });
            if let Err(err) = serve.await {
                warn!("static file server error: {err}");
            }
        });

        debug!("serving {} at http://{addr}", root.display());
        Ok(StaticServer {
            addr,
            shutdown,
            task,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for the server task to finish.
    /// A task that lingers past the timeout is logged and left behind.
    pub async fn shutdown(self) {
        let StaticServer {
            addr,
            shutdown,
            mut task,
        } = self;

        let _ = shutdown.send(());
        if tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut task).await.is_err() {
            warn!("static file server on {addr} did not shut down within {SHUTDOWN_TIMEOUT:?}");
        }
    }
}
