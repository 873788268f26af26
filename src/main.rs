//! # httpserve - Entry Point
//! src/main.rs
//!
//! Lee stdin, abre el socket y sirve el mismo documento a cada cliente.

use httpserve::config::Config;
use httpserve::error::Result;
use httpserve::input::read_all;
use httpserve::server::Server;
use log::info;
use std::io;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("httpserve Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args()?;
    config.validate()?;

    let body = read_all(io::stdin().lock())?;
    info!("body de {} bytes leído de stdin", body.len());

    let server = Server::new(config, body);

    // Solo retorna ante un error fatal
    server.run()
}
