use thiserror::Error;

/// Failures from the terminal backend. The grid itself performs no I/O
/// and has no failure modes of its own.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
