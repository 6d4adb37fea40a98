use thiserror::Error;

/// Validation failures of a pace calculation. All of them are recoverable:
/// the caller shows the message and lets the user fix the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceError {
    #[error("Por favor, insira uma distância válida")]
    InvalidDistance,

    #[error("A distância deve estar entre 0.1 e 500 km")]
    DistanceOutOfRange,

    #[error("Por favor, insira um tempo válido")]
    InvalidDuration,

    #[error("O tempo deve ser menor que 24 horas")]
    DurationTooLong,
}

#[derive(Error, Debug)]
pub enum PaceCalcError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Pace(#[from] PaceError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type PcResult<T> = Result<T, PaceCalcError>;
