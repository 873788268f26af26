//! Conexión simulada para los tests del writer y del loop de aceptación

use crate::server::connection::Connection;
use std::io::{self, ErrorKind, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    written: Vec<u8>,
    write_calls: usize,
    interrupts: usize,
    finished: bool,
}

/// Conexión en memoria; los clones comparten lo escrito
#[derive(Debug, Clone, Default)]
pub struct MockConnection {
    state: Arc<Mutex<MockState>>,
    max_write: Option<usize>,
    fail_after: Option<(usize, ErrorKind)>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acepta como máximo `n` bytes por llamada a `write`
    pub fn with_max_write(mut self, n: usize) -> Self {
        self.max_write = Some(n);
        self
    }

    /// Las primeras `n` llamadas fallan con `Interrupted`
    pub fn with_interrupts(self, n: usize) -> Self {
        self.state.lock().unwrap().interrupts = n;
        self
    }

    /// Falla con `kind` una vez escritos `limit` bytes
    pub fn failing_after(mut self, limit: usize, kind: ErrorKind) -> Self {
        self.fail_after = Some((limit, kind));
        self
    }

    pub fn written(&self) -> Vec<u8> {
        self.state.lock().unwrap().written.clone()
    }

    pub fn write_calls(&self) -> usize {
        self.state.lock().unwrap().write_calls
    }

    /// Indica si se llamó a `finish`
    pub fn finished(&self) -> bool {
        self.state.lock().unwrap().finished
    }
}

impl Write for MockConnection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap();

        if state.interrupts > 0 {
            state.interrupts -= 1;
            return Err(io::Error::new(ErrorKind::Interrupted, "interrupted"));
        }

        let mut n = buf.len().min(self.max_write.unwrap_or(usize::MAX));
        if let Some((limit, kind)) = self.fail_after {
            if state.written.len() >= limit {
                return Err(io::Error::new(kind, "mock failure"));
            }
            n = n.min(limit - state.written.len());
        }

        state.written.extend_from_slice(&buf[..n]);
        state.write_calls += 1;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Connection for MockConnection {
    fn finish(&mut self) -> io::Result<()> {
        self.state.lock().unwrap().finished = true;
        Ok(())
    }
}
