use serde::{Deserialize, Serialize};

/// One purchase record as the database API returns it. The shape is not
/// checked; every field is passed through to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Purchase(pub serde_json::Value);

/// Outcome of looking up a user's purchases.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    /// Downstream answered with a well-formed array.
    Fetched(Vec<Purchase>),
    /// Downstream failed; the user is served without purchases.
    Fallback,
}

impl Enrichment {
    pub fn into_purchases(self) -> Vec<Purchase> {
        match self {
            Enrichment::Fetched(list) => list,
            Enrichment::Fallback => Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Enrichment::Fallback)
    }
}
