//! Listener lifecycle: bind on all interfaces, then serve the API router
//! until the listener fails.
//!
//! There is no retry, fallback port, or graceful shutdown. A returned
//! [`ServeError`] is meant to end the process.

use std::{
    io,
    net::{Ipv4Addr, Ipv6Addr, SocketAddr},
};

use tokio::net::TcpListener;

use crate::{routes, Config, ServeError};

// ---

/// Bind `[::]:<port>`, which accepts both IPv6 and IPv4-mapped clients.
///
/// Hosts without IPv6 get `0.0.0.0:<port>` instead. With port 0 the OS
/// assigns an ephemeral port; the bound address is logged and available from
/// [`TcpListener::local_addr`].
pub async fn bind(config: &Config) -> Result<TcpListener, ServeError> {
    // ---
    let addr = SocketAddr::from((Ipv6Addr::UNSPECIFIED, config.port));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) if ipv6_unavailable(&e) => {
            let v4 = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
            let listener = TcpListener::bind(v4)
                .await
                .map_err(|source| ServeError::Bind { addr: v4, source })?;
            tracing::debug!("IPv6 bind on {} failed ({}), using IPv4 only", addr, e);
            listener
        }
        Err(source) => return Err(ServeError::Bind { addr, source }),
    };

    match listener.local_addr() {
        Ok(bound) => tracing::info!("Listening on {}", bound),
        Err(e) => tracing::warn!("Listening on port {} (local address unavailable: {})", config.port, e),
    }

    Ok(listener)
}

/// A port conflict or a permission problem is a real bind failure; anything
/// else on `[::]` is taken to mean the host has no usable IPv6 stack.
fn ipv6_unavailable(e: &io::Error) -> bool {
    // ---
    !matches!(
        e.kind(),
        io::ErrorKind::AddrInUse | io::ErrorKind::PermissionDenied
    )
}

/// Serve the API router on an already bound listener.
///
/// Only returns on failure. Connections are handled concurrently by the
/// runtime; errors writing a response to a dropped client stay inside hyper.
pub async fn serve(listener: TcpListener) -> Result<(), ServeError> {
    // ---
    axum::serve(listener, routes::router())
        .await
        .map_err(ServeError::Serve)
}

/// Bind and serve. Blocks until the listener terminates.
///
/// The configuration is logged only once the bind succeeds, so a failed
/// start leaves the caller's diagnostic as the only line on stderr.
pub async fn run(config: Config) -> Result<(), ServeError> {
    // ---
    let listener = bind(&config).await?;
    config.log_config();

    serve(listener).await
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_conflicts_are_not_treated_as_missing_ipv6() {
        // ---
        assert!(!ipv6_unavailable(&io::Error::from(io::ErrorKind::AddrInUse)));
        assert!(!ipv6_unavailable(&io::Error::from(io::ErrorKind::PermissionDenied)));
        assert!(ipv6_unavailable(&io::Error::from(io::ErrorKind::AddrNotAvailable)));
        assert!(ipv6_unavailable(&io::Error::from(io::ErrorKind::Unsupported)));
    }
}
