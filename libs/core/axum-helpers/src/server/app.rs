use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use super::shutdown::ShutdownCoordinator;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Wraps application routes with the cross-cutting pieces every service gets:
/// the JSON 404 fallback and security headers.
///
/// Routes must already have their state applied.
///
/// # Example
/// ```ignore
/// let routes = Router::new()
///     .route("/count", get(count))
///     .with_state(state);
///
/// let router = create_router(routes);
/// ```
pub fn create_router(routes: Router) -> Router {
    routes
        .fallback(not_found)
        .layer(middleware::from_fn(security_headers))
}

/// Binds `server_config.address()` and serves `router` until SIGINT/SIGTERM.
///
/// Handlers can read the peer address through
/// `ConnectInfo<SocketAddr>`. After a shutdown signal the server stops
/// accepting connections and in-flight requests get
/// `server_config.shutdown_timeout` to finish.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while
/// running.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{create_router, serve};
/// use core_config::server::ServerConfig;
///
/// serve(create_router(routes), &ServerConfig::default()).await?;
/// ```
pub async fn serve(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let coordinator = ShutdownCoordinator::new();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    serve_until(listener, router, coordinator, server_config.shutdown_timeout).await
}

/// Serves on an already bound listener until `coordinator` shuts down.
///
/// Once shutdown begins, connections still open after `drain_timeout` are
/// abandoned.
pub async fn serve_until(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    drain_timeout: Duration,
) -> io::Result<()> {
    let graceful = {
        let coordinator = coordinator.clone();
        async move { coordinator.wait().await }
    };

    let server = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(graceful)
    .into_future();

    let deadline = async {
        coordinator.wait().await;
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => {
            result.inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e))?;
            info!("Server stopped");
            Ok(())
        }
        _ = deadline => {
            warn!(
                "In-flight requests exceeded shutdown timeout of {:?}, forcing shutdown",
                drain_timeout
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::ConnectInfo, routing::get};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn get_raw(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: test\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    async fn start(router: Router) -> (SocketAddr, ShutdownCoordinator, tokio::task::JoinHandle<io::Result<()>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let coordinator = ShutdownCoordinator::new();
        let handle = tokio::spawn(serve_until(
            listener,
            router,
            coordinator.clone(),
            Duration::from_secs(1),
        ));
        (addr, coordinator, handle)
    }

    #[tokio::test]
    async fn test_handlers_see_peer_address() {
        let router = Router::new().route(
            "/peer",
            get(|ConnectInfo(peer): ConnectInfo<SocketAddr>| async move { peer.ip().to_string() }),
        );
        let (addr, coordinator, handle) = start(router).await;

        let response = get_raw(addr, "/peer").await;
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("127.0.0.1"));

        coordinator.shutdown();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_unknown_path_gets_json_404_with_security_headers() {
        let router = create_router(Router::new().route("/", get(|| async { "hi" })));
        let (addr, coordinator, handle) = start(router).await;

        let response = get_raw(addr, "/missing").await;
        assert!(response.starts_with("HTTP/1.1 404"));
        assert!(response.to_ascii_lowercase().contains("x-content-type-options: nosniff"));
        assert!(response.ends_with(r#"{"error":"The requested resource was not found"}"#));

        coordinator.shutdown();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_stops_server() {
        let (_, coordinator, handle) = start(Router::new()).await;

        coordinator.shutdown();

        tokio::time::timeout(Duration::from_secs(3), handle)
            .await
            .expect("server must stop after shutdown")
            .unwrap()
            .unwrap();
    }
}
