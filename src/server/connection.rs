//! # Cierre de Conexiones
//! src/server/connection.rs
//!
//! El request nunca se parsea, pero sigue en el buffer del kernel. Si el
//! socket se cierra con datos sin leer, Linux envía RST en vez de FIN y el
//! cliente puede perder la respuesta. Por eso, después de escribir, se
//! cierra el lado de escritura y se descarta lo que mande el cliente.

use log::trace;
use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

/// Tiempo máximo esperando que el cliente cierre su lado
pub const DRAIN_TIMEOUT: Duration = Duration::from_millis(200);

/// Máximo de bytes del request que se descartan antes de cerrar
pub const DRAIN_LIMIT: u64 = 1 << 20;

/// Una conexión a la que se le escribe una respuesta y luego se cierra
pub trait Connection: Write {
    /// Se llama una vez enviada la respuesta completa, antes del drop
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Connection for TcpStream {
    fn finish(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Write)?;
        self.set_read_timeout(Some(DRAIN_TIMEOUT))?;

        let mut request = Read::by_ref(self).take(DRAIN_LIMIT);
        match io::copy(&mut request, &mut io::sink()) {
            Ok(n) => {
                trace!("descartados {} bytes del request", n);
                Ok(())
            }
            // El cliente no cerró a tiempo: se cierra igual
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
