//! # Errores del Servidor
//! src/error.rs
//!
//! Todos los componentes retornan `Result<T, ServeError>`. La decisión de
//! terminar el proceso se toma solo en el loop de aceptación y en `main`:
//!
//! - **Fatales**: lectura de stdin, memoria, socket/bind/listen, configuración
//! - **Por conexión**: fallos al enviar la respuesta a un cliente

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Errores de httpserve (un tipo por clase de fallo más su mensaje)
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to read from stdin: {0}")]
    Read(#[source] io::Error),

    #[error("out of memory while allocating {requested} bytes")]
    OutOfMemory { requested: usize },

    #[error("failed to bind socket: no usable address for port {port}")]
    NoAddress { port: u16 },

    #[error("failed to set SO_REUSEADDR: {0}")]
    ReuseAddr(#[source] io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to listen: {0}")]
    Listen(#[source] io::Error),

    #[error("failed to send response: {0}")]
    Send(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ServeError {
    /// Indica si el error debe terminar el proceso
    ///
    /// Solo un fallo de envío queda confinado a su conexión.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ServeError::Send(_))
    }
}

pub type Result<T> = std::result::Result<T, ServeError>;
