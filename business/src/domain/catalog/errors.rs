#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Transport failure, non-success status or an unreadable body.
    #[error("catalog.fetch_failed")]
    FetchFailed,
}
