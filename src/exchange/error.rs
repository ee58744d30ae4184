//! Errors raised at the edges of the exchange layer
//!
//! Encoding, decoding and mapping never fail; only reading the source file
//! and handing the result to a sink can.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ExchangeError {
    #[error("could not read import file {}", path.display())]
    #[diagnostic(
        code(invx::exchange::read),
        help("check that the file exists, is readable and is UTF-8 text")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write export file {}", path.display())]
    #[diagnostic(code(invx::exchange::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write export to standard output")]
    #[diagnostic(code(invx::exchange::stdout))]
    Stdout(#[source] std::io::Error),
}
