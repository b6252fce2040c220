#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
