//! # Lectura del Body
//! src/input.rs
//!
//! Lee un stream completo (normalmente stdin) a memoria, una sola vez al
//! arrancar. El body tiene que estar entero antes de aceptar clientes porque
//! cada respuesta lleva su `Content-Length` exacto.

use crate::error::{Result, ServeError};
use std::io::{ErrorKind, Read};

/// Tamaño de cada lectura (8 KiB menos un byte)
pub const CHUNK_LEN: usize = 8191;

/// Lee `reader` hasta fin de stream y retorna todos los bytes leídos
///
/// Es binary-safe: los bytes NUL se conservan. Si falla una lectura o no
/// hay memoria para crecer el buffer, el contenido parcial se descarta.
///
/// # Ejemplo
/// ```
/// use httpserve::input::read_all;
///
/// let body = read_all(&b"hello"[..]).unwrap();
/// assert_eq!(body, b"hello");
/// ```
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut chunk = [0u8; CHUNK_LEN];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ServeError::Read(e)),
        };

        // try_reserve crece de forma geométrica
        body.try_reserve(n).map_err(|_| ServeError::OutOfMemory {
            requested: body.len() + n,
        })?;
        body.extend_from_slice(&chunk[..n]);
    }

    log::debug!("body leído: {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Reader que entrega como máximo `step` bytes por llamada
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = (self.pos + self.step).min(self.data.len());
            let n = (end - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    /// Reader que falla después de entregar algunos bytes
    struct FailAfter {
        sent: bool,
        kind: io::ErrorKind,
        interrupts: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupts > 0 {
                self.interrupts -= 1;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            if !self.sent {
                self.sent = true;
                buf[..3].copy_from_slice(b"abc");
                return Ok(3);
            }
            Err(io::Error::new(self.kind, "broken"))
        }
    }

    /// Reader que entrega una secuencia fija de resultados y luego EOF
    struct Scripted(Vec<io::Result<Vec<u8>>>);

    impl Read for Scripted {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Ok(0);
            }
            let data = self.0.remove(0)?;
            buf[..data.len()].copy_from_slice(&data);
            Ok(data.len())
        }
    }

    fn interrupted() -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
    }

    #[test]
    fn test_interrupted_then_eof_returns_full_body() {
        let reader = Scripted(vec![
            interrupted(),
            Ok(b"hel".to_vec()),
            interrupted(),
            interrupted(),
            Ok(b"lo".to_vec()),
        ]);
        assert_eq!(read_all(reader).unwrap(), b"hello");
    }

    #[test]
    fn test_empty_input() {
        let body = read_all(io::empty()).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_small_input() {
        let body = read_all(&b"hello"[..]).unwrap();
        assert_eq!(body, b"hello");
    }

    #[test]
    fn test_binary_input_with_nul() {
        let data = vec![0x00, b'a', 0x00, 0xFF, 0x00];
        let body = read_all(&data[..]).unwrap();
        assert_eq!(body, data);
    }

    #[test]
    fn test_input_larger_than_chunk() {
        let data: Vec<u8> = (0..CHUNK_LEN * 3 + 17).map(|i| (i % 251) as u8).collect();
        let body = read_all(&data[..]).unwrap();
        assert_eq!(body.len(), data.len());
        assert_eq!(body, data);
    }

    #[test]
    fn test_short_reads() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 7) as u8).collect();
        let reader = Trickle { data: data.clone(), pos: 0, step: 3 };
        assert_eq!(read_all(reader).unwrap(), data);
    }

    #[test]
    fn test_interrupted_is_retried() {
        let reader = FailAfter { sent: false, kind: io::ErrorKind::UnexpectedEof, interrupts: 2 };
        // Tras los EINTR lee "abc" y luego falla con el error real
        match read_all(reader) {
            Err(ServeError::Read(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_discards_partial_body() {
        let reader = FailAfter { sent: false, kind: io::ErrorKind::BrokenPipe, interrupts: 0 };
        match read_all(reader) {
            Err(ServeError::Read(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
