use schoolhub_core::error::CoreError;

/// Error type surfaced by the repository layer.
///
/// Validation rejections come out as [`DbError::Domain`] before any SQL
/// runs; store failures come out as [`DbError::Sqlx`]. Neither is retried.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
