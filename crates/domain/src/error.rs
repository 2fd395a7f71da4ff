use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{entity}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty { entity: &'static str },

    #[error("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    InvalidTypeProperty { entity: &'static str },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Authorization(String),

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn authorization(msg: impl Into<String>) -> Self {
        Self::Authorization(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
