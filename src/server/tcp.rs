//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Crea el socket de escucha y corre el loop de aceptación. Cada conexión
//! se atiende completa (componer, escribir, cerrar) antes de aceptar la
//! siguiente. El request del cliente nunca se parsea: solo se descarta
//! al cerrar (ver `connection`).

use crate::config::Config;
use crate::error::{Result, ServeError};
use crate::http::{compose, date};
use crate::server::connection::Connection;
use crate::server::writer;
use log::{debug, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener, TcpStream};

/// Crea el socket de escucha en la dirección comodín para `port`
///
/// Prueba `[::]` en modo dual-stack (acepta clientes IPv4 e IPv6) y luego
/// `0.0.0.0`. Solo se pasa al siguiente candidato si no se pudo crear el
/// socket; cualquier fallo de `SO_REUSEADDR`, bind o listen es definitivo.
/// Al retornar error el socket se cierra en el drop.
pub fn create_listener(port: u16, backlog: i32) -> Result<TcpListener> {
    let candidates = [
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)),
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
    ];

    for addr in candidates {
        let socket = match open_socket(addr) {
            Ok(socket) => socket,
            Err(e) => {
                debug!("no se pudo crear socket para {}: {}", addr, e);
                continue;
            }
        };

        socket.set_reuse_address(true).map_err(ServeError::ReuseAddr)?;
        socket
            .bind(&addr.into())
            .map_err(|source| ServeError::Bind { addr, source })?;
        socket.listen(backlog).map_err(ServeError::Listen)?;

        debug!("socket escuchando en {} (backlog {})", addr, backlog);
        return Ok(socket.into());
    }

    Err(ServeError::NoAddress { port })
}

fn open_socket(addr: SocketAddr) -> io::Result<Socket> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    Ok(socket)
}

/// Servidor que responde siempre el mismo body
///
/// Config, body y bloque de headers no cambian después de `new`.
pub struct Server {
    config: Config,
    body: Vec<u8>,
    header_block: String,
    clock: fn() -> String,
}

impl Server {
    pub fn new(config: Config, body: Vec<u8>) -> Self {
        let header_block = config.header_block();

        Self {
            config,
            body,
            header_block,
            clock: date::now,
        }
    }

    /// Reemplaza la fuente del header `Date`
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn header_block(&self) -> &str {
        &self.header_block
    }

    /// Crea el socket de escucha con el puerto y backlog configurados
    pub fn bind(&self) -> Result<TcpListener> {
        create_listener(self.config.port, self.config.backlog)
    }

    /// Escucha y atiende conexiones para siempre
    ///
    /// Solo retorna con un error fatal.
    pub fn run(&self) -> Result<()> {
        let listener = self.bind()?;
        let port = listener.local_addr()?.port();
        println!("Server listening on port: {}", port);
        info!(
            "sirviendo {} bytes con {} headers extra",
            self.body.len(),
            self.config.headers.len()
        );

        let write_timeout = self.config.write_timeout();
        let incoming = listener.incoming().map(|stream| -> io::Result<TcpStream> {
            let stream = stream?;
            stream.set_write_timeout(write_timeout)?;
            if let Ok(peer) = stream.peer_addr() {
                debug!("nueva conexión desde {}", peer);
            }
            Ok(stream)
        });

        self.serve(incoming)
    }

    /// Loop de aceptación sobre cualquier fuente de conexiones
    ///
    /// Los errores de `accept` se ignoran y un fallo al enviar solo
    /// descarta esa conexión. Retorna `Ok` cuando `incoming` se agota
    /// (nunca pasa con un `TcpListener`) o `Err` ante un error fatal.
    pub fn serve<I, C>(&self, incoming: I) -> Result<()>
    where
        I: IntoIterator<Item = io::Result<C>>,
        C: Connection,
    {
        for conn in incoming {
            let conn = match conn {
                Ok(conn) => conn,
                Err(e) => {
                    debug!("accept falló: {}", e);
                    continue;
                }
            };

            // La conexión se cierra al salir de este scope
            match self.handle_connection(conn) {
                Ok(sent) => debug!("respuesta enviada: {} bytes", sent),
                Err(e) if !e.is_fatal() => warn!("{}", e),
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Compone la respuesta con un timestamp nuevo, la escribe completa y
    /// cierra la conexión
    pub fn handle_connection<C: Connection>(&self, mut conn: C) -> Result<usize> {
        let timestamp = (self.clock)();
        let message = compose(&self.body, &timestamp, &self.header_block)?;

        let sent = writer::write_all(&mut conn, &message).map_err(ServeError::Send)?;

        // La respuesta ya salió; un fallo al cerrar no cambia nada
        if let Err(e) = conn.finish() {
            debug!("cierre de conexión: {}", e);
        }

        Ok(sent)
    }
}
