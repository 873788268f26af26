//! # Construcción de la Respuesta HTTP/1.1
//!
//! Arma el mensaje completo que se envía a cada cliente. El formato es fijo:
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Date: Wed, 21 Jul 2021 14:03:02 UTC\r\n
//! Server: httpserve\r\n
//! X-Custom: value\r\n          <- bloque de headers, tal cual
//! Content-Length: 5\r\n
//! \r\n
//! hello
//! ```
//!
//! El bloque de headers es opaco: no se valida ni se deduplica. Si el
//! usuario pasa su propio `Content-Length`, aparece dos veces.

use crate::error::{Result, ServeError};

/// Status line de todas las respuestas
pub const STATUS_LINE: &str = "HTTP/1.1 200 OK";

/// Valor del header `Server`
pub const SERVER_NAME: &str = "httpserve";

/// Compone la respuesta para `body` con el `timestamp` y el bloque de headers
///
/// `header_block` son cero o más líneas, cada una terminada en CRLF.
///
/// # Ejemplo
/// ```
/// use httpserve::http::compose;
///
/// let msg = compose(b"hi", "Wed, 21 Jul 2021 14:03:02 UTC", "X-Test: 1\r\n").unwrap();
/// assert!(msg.starts_with(b"HTTP/1.1 200 OK\r\n"));
/// assert!(msg.ends_with(b"Content-Length: 2\r\n\r\nhi"));
/// ```
pub fn compose(body: &[u8], timestamp: &str, header_block: &str) -> Result<Vec<u8>> {
    let head = format!(
        "{STATUS_LINE}\r\n\
         Date: {timestamp}\r\n\
         Server: {SERVER_NAME}\r\n\
         {header_block}\
         Content-Length: {}\r\n\
         \r\n",
        body.len()
    );

    let size = head.len() + body.len();
    let mut message = Vec::new();
    message
        .try_reserve_exact(size)
        .map_err(|_| ServeError::OutOfMemory { requested: size })?;

    message.extend_from_slice(head.as_bytes());
    message.extend_from_slice(body);

    Ok(message)
}
