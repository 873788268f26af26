//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! 1. Crea el socket de escucha en el puerto configurado
//! 2. Acepta conexiones de a una
//! 3. Escribe la respuesta completa y cierra la conexión sin perderla
//!
//! Lo que envía el cliente no se interpreta.

pub mod connection;
pub mod tcp;
pub mod writer;

// Re-exportar para facilitar el uso
pub use connection::Connection;
pub use tcp::{create_listener, Server};
