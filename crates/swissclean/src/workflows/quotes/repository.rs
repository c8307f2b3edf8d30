use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{QuoteId, QuoteStatus};
use super::estimation::Estimate;
use super::intake::SanitizedQuote;

/// Repository record containing the sanitized quote, its estimate, and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote: SanitizedQuote,
    pub status: QuoteStatus,
    pub estimate: Option<Estimate>,
}

impl QuoteRecord {
    pub fn price_line(&self) -> String {
        match &self.estimate {
            Some(estimate) => estimate.display.clone(),
            None => "pending estimate".to_string(),
        }
    }

    pub fn status_view(&self) -> QuoteStatusView {
        QuoteStatusView {
            quote_id: self.quote.quote_id.clone(),
            status: self.status.label(),
            price_line: self.price_line(),
            total_with_add_ons: self
                .estimate
                .as_ref()
                .map(|estimate| estimate.total_with_add_ons),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait QuoteRepository: Send + Sync {
    fn insert(&self, record: QuoteRecord) -> Result<QuoteRecord, RepositoryError>;
    fn update(&self, record: QuoteRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound notification hooks (e.g., back-office e-mail).
pub trait LeadNotifier: Send + Sync {
    fn publish(&self, notification: LeadNotification) -> Result<(), NotificationError>;
}

/// Simple notification payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadNotification {
    pub template: String,
    pub quote_id: QuoteId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a quote's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteStatusView {
    pub quote_id: QuoteId,
    pub status: &'static str,
    pub price_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_with_add_ons: Option<u32>,
}
