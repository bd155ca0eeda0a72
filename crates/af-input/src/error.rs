use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("no rooms defined")]
    NoRooms,

    #[error("no ##start room defined")]
    MissingStart,

    #[error("no ##end room defined")]
    MissingEnd,

    #[error("missing agent count")]
    MissingAgentCount,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse { line, msg: msg.into() }
    }
}

pub type InputResult<T> = Result<T, InputError>;
