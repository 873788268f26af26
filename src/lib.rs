//! # httpserve
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo: lee un documento de stdin una sola vez y se lo
//! responde a cada cliente que se conecta, con los headers indicados por
//! línea de comandos y un header `Date` nuevo en cada respuesta.
//!
//! ## Arquitectura
//!
//! - `config`: argumentos CLI y variables de entorno
//! - `input`: lectura completa de stdin a memoria
//! - `http`: composición de la respuesta y header `Date`
//! - `server`: socket de escucha, loop de aceptación y escritura
//! - `error`: tipo de error común
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use httpserve::config::Config;
//! use httpserve::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config, b"hello".to_vec());
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod input;
pub mod server;

#[cfg(test)]
mod mocks;
