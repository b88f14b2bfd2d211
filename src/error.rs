//! Error type for the listener lifecycle.

use std::{io, net::SocketAddr};

use thiserror::Error;

/// Fatal listener failure. Never recovered locally.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The TCP listener could not be established (port in use, permission denied, ...).
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept-and-serve loop terminated with an error.
    #[error("server terminated")]
    Serve(#[source] io::Error),
}
