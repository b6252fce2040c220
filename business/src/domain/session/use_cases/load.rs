use async_trait::async_trait;

/// Counts of what was restored from durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedSession {
    pub favorites: usize,
    pub cart_lines: usize,
}

/// Restores favorites and cart. Unreadable storage yields an empty collection.
#[async_trait]
pub trait LoadSessionUseCase: Send + Sync {
    async fn execute(&self) -> LoadedSession;
}
