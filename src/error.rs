use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;
use std::convert::From;

use warp::http::StatusCode;

use crate::polls::Id;

#[derive(Debug)]
pub struct ValidationError {
    message: String,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error: {}", self.message)
    }
}

impl Error for ValidationError {}

pub fn poll_question_invalid_size(limits: RangeInclusive<usize>, len: usize) -> ValidationError {
    ValidationError {
        message: format!("poll's question must be between {} and {} characters, got {len}", limits.start(), limits.end()),
    }
}

pub fn poll_option_empty(index: usize) -> ValidationError {
    ValidationError {
        message: format!("poll option {index} is empty"),
    }
}

pub fn poll_option_limit_exceeded(limits: RangeInclusive<usize>, count: usize) -> ValidationError {
    ValidationError {
        message: format!("poll must have between {} and {} options, got {count}", limits.start(), limits.end()),
    }
}

pub fn vote_poll_expired(poll_id: &Id) -> ValidationError {
    ValidationError {
        message: format!("poll {poll_id} has expired and cannot accept votes"),
    }
}

pub fn vote_already_cast(poll_id: &Id, selected: &Id) -> ValidationError {
    ValidationError {
        message: format!("a vote was already cast on poll {poll_id} for option {selected}"),
    }
}

pub fn vote_invalid_option(poll_id: &Id, option_id: &Id) -> ValidationError {
    ValidationError {
        message: format!("poll {poll_id} has no option {option_id}"),
    }
}


#[derive(Debug)]
pub struct StoreError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {source}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|err| err as &(dyn Error + 'static))
    }
}

pub fn store_read(key: &str, source: impl Error + Send + Sync + 'static) -> StoreError {
    StoreError {
        message: format!("failed to read slot '{key}'"),
        source: Some(Box::new(source)),
    }
}

pub fn store_write(key: &str, source: impl Error + Send + Sync + 'static) -> StoreError {
    StoreError {
        message: format!("failed to write slot '{key}'"),
        source: Some(Box::new(source)),
    }
}

pub fn store_decode(key: &str, source: serde_json::Error) -> StoreError {
    StoreError {
        message: format!("slot '{key}' does not hold a valid poll collection"),
        source: Some(Box::new(source)),
    }
}

pub fn store_encode(source: serde_json::Error) -> StoreError {
    StoreError {
        message: String::from("failed to serialize the poll collection"),
        source: Some(Box::new(source)),
    }
}


#[derive(Debug)]
pub enum EngineError {
    Validation(ValidationError),
    Store(StoreError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Validation(err) => write!(f, "{err}"),
            EngineError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Validation(err) => Some(err),
            EngineError::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for EngineError {
    fn from(value: ValidationError) -> Self {
        EngineError::Validation(value)
    }
}

impl From<StoreError> for EngineError {
    fn from(value: StoreError) -> Self {
        EngineError::Store(value)
    }
}


#[derive(Debug)]
pub struct HttpError {
    pub code: StatusCode,
    message: String,
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for HttpError {}

impl From<ValidationError> for HttpError {
    fn from(value: ValidationError) -> Self {
        HttpError {
            message: value.to_string(),
            code: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(value: StoreError) -> Self {
        HttpError {
            message: value.to_string(),
            code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<EngineError> for HttpError {
    fn from(value: EngineError) -> Self {
        match value {
            EngineError::Validation(err) => err.into(),
            EngineError::Store(err) => err.into(),
        }
    }
}
