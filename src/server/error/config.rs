use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable the server cannot start without is unset.
    ///
    /// Raised for a missing `DATABASE_URL`, and for either half of the
    /// `ADMIN_EMAIL`/`ADMIN_PASSWORD` pair when only the other one is given.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
