use serde::Serialize;

/// Identifies one catalog request. Only the most recently issued ticket may
/// apply its result to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(pub(crate) u64);

/// What happened to a search outcome when it was handed back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSettlement {
    /// The product list was replaced.
    Applied,
    /// The request failed; the prior list was kept and the alert raised.
    Failed,
    /// A newer search was issued meanwhile; the outcome was discarded.
    Superseded,
}

pub const FETCH_FAILED_ALERT: &str = "Failed to fetch product data. Please try again later.";
