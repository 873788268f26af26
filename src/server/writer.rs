//! # Escritura de la Respuesta
//! src/server/writer.rs
//!
//! Envía un buffer completo por la conexión tolerando envíos parciales.

use std::io::{self, ErrorKind, Write};

/// Escribe `message` completo en `conn` y retorna los bytes enviados
///
/// Solo se reintenta `Interrupted`. En un socket bloqueante `WouldBlock`
/// o `TimedOut` significan que venció el timeout de escritura, así que se
/// tratan como error de la conexión.
pub fn write_all<W: Write>(conn: &mut W, message: &[u8]) -> io::Result<usize> {
    let mut sent = 0;

    while sent < message.len() {
        match conn.write(&message[sent..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    format!("connection closed after {} of {} bytes", sent, message.len()),
                ));
            }
            Ok(n) => {
                sent += n;
                log::trace!("enviados {}/{} bytes", sent, message.len());
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    conn.flush()?;
    Ok(sent)
}
