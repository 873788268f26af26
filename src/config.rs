//! # Configuración del Servidor
//! src/config.rs
//!
//! Argumentos CLI (y variables de entorno) de httpserve. Se construye una
//! vez al arrancar y no cambia después.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! echo hello | ./httpserve -p 9090 \
//!   -h "X-Test: 1" \
//!   -h "Content-Type: text/plain"
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTPSERVE_PORT=9090 ./httpserve < index.html
//! ```

use crate::error::{Result, ServeError};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::time::Duration;

/// Configuración de httpserve
#[derive(Debug, Clone, Parser)]
#[command(name = "httpserve")]
#[command(about = "Sirve stdin por HTTP/1.1 con headers personalizados")]
#[command(version = "0.1.0")]
#[command(disable_help_flag = true)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8000", env = "HTTPSERVE_PORT")]
    pub port: u16,

    /// Header extra para cada respuesta (repetible, se respeta el orden)
    #[arg(short = 'h', long = "header", value_name = "HEADER", allow_hyphen_values = true)]
    pub headers: Vec<String>,

    /// Backlog de la cola de conexiones pendientes
    #[arg(long, default_value = "100", env = "HTTPSERVE_BACKLOG")]
    pub backlog: i32,

    /// Timeout de escritura por conexión en milisegundos (0 = sin timeout)
    #[arg(long = "write-timeout-ms", default_value = "0", env = "HTTPSERVE_WRITE_TIMEOUT_MS")]
    pub write_timeout_ms: u64,

    /// Muestra la ayuda (`-h` está ocupado por --header)
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Config {
    /// Parsea los argumentos del proceso
    pub fn from_args() -> Result<Self> {
        Self::try_from_args(std::env::args_os())
    }

    /// Parsea argumentos arbitrarios (el primero es el nombre del programa)
    ///
    /// `--help` y `--version` imprimen y terminan el proceso con éxito.
    /// Cualquier otro error, como un flag desconocido, es fatal.
    ///
    /// # Ejemplo
    /// ```
    /// use httpserve::config::Config;
    ///
    /// let config = Config::try_from_args(["httpserve", "-p", "9090", "-h", "X-Test: 1"]).unwrap();
    /// assert_eq!(config.port, 9090);
    /// assert_eq!(config.header_block(), "X-Test: 1\r\n");
    /// ```
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => Ok(config),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => Err(ServeError::Config(first_line(&e.to_string()))),
        }
    }

    /// Bloque de headers: cada header seguido de CRLF, en el orden dado
    pub fn header_block(&self) -> String {
        self.headers
            .iter()
            .map(|header| format!("{}\r\n", header))
            .collect()
    }

    /// Timeout de escritura, `None` si está deshabilitado
    pub fn write_timeout(&self) -> Option<Duration> {
        match self.write_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.backlog < 1 {
            return Err(ServeError::Config("backlog must be >= 1".to_string()));
        }

        Ok(())
    }
}

/// Primera línea del mensaje de clap, sin el prefijo `error: `
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8000,
            headers: Vec::new(),
            backlog: 100,
            write_timeout_ms: 0,
            help: None,
        }
    }
}
