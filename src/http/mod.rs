//! # Módulo HTTP
//!
//! Solo se construyen respuestas: el servidor nunca lee ni parsea el
//! request del cliente.
//!
//! - `response`: composición byte a byte del mensaje HTTP/1.1
//! - `date`: valor del header `Date`

pub mod date;
pub mod response;

// Re-exportamos para poder usar `http::compose`
pub use response::{compose, SERVER_NAME, STATUS_LINE};
