use keel_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("domain event bus not registered")]
    BusNotRegistered,

    #[error("config: {0}")]
    Config(#[from] figment::Error),
}

pub type AppResult<T> = Result<T, AppError>;
