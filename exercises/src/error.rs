use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    #[error("key length {key} does not match ciphertext length {data}")]
    KeyLengthMismatch { key: usize, data: usize },

    #[error("decrypted bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("fibonacci({0}) does not fit in u64")]
    FibonacciOverflow(u32),

    #[error("cannot place disc {disc} on smaller disc {onto}")]
    IllegalMove { disc: u32, onto: u32 },

    #[error("tower {0} is empty")]
    EmptyTower(usize),
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
