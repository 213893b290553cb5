use std::io;

/// Failures while running a command stream. The tree itself can't fail; only the
/// streams feeding and draining it can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading the next command line failed.
    #[error("failed to read commands")]
    Read(#[source] io::Error),
    /// Writing a result line failed.
    #[error("failed to write results")]
    Write(#[source] io::Error),
}
