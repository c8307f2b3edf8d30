use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{QuoteId, QuoteRequest, QuoteStatus};
use super::estimation::{Estimate, Estimator, PriceTexts, PricingConfig};
use super::export::{self, ExportError};
use super::intake::{IntakeGuard, IntakePolicy, IntakeViolation};
use super::repository::{
    LeadNotification, LeadNotifier, NotificationError, QuoteRecord, QuoteRepository,
    RepositoryError,
};
use super::selection::QuoteSelection;

/// Service composing the intake guard, repository, and price estimator.
pub struct QuoteService<R, N> {
    guard: Arc<IntakeGuard>,
    repository: Arc<R>,
    notifier: Arc<N>,
    estimator: Arc<Estimator>,
}

static QUOTE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_quote_id() -> QuoteId {
    let id = QUOTE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    QuoteId(format!("quote-{id:06}"))
}

impl<R, N> QuoteService<R, N>
where
    R: QuoteRepository + 'static,
    N: LeadNotifier + 'static,
{
    pub fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        config: PricingConfig,
        texts: PriceTexts,
    ) -> Self {
        Self::with_policy(IntakePolicy::default(), repository, notifier, config, texts)
    }

    pub fn with_policy(
        policy: IntakePolicy,
        repository: Arc<R>,
        notifier: Arc<N>,
        config: PricingConfig,
        texts: PriceTexts,
    ) -> Self {
        Self {
            guard: Arc::new(IntakeGuard::with_policy(policy)),
            repository,
            notifier,
            estimator: Arc::new(Estimator::new(config, texts)),
        }
    }

    /// Stateless estimate for the interactive calculator. Recomputed by the
    /// caller on every selection change; nothing is stored.
    pub fn estimate(&self, selection: &QuoteSelection) -> Estimate {
        self.estimator.estimate(selection)
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// Submit a new quote request, returning the repository-backed record.
    pub fn submit(&self, request: QuoteRequest) -> Result<QuoteRecord, QuoteServiceError> {
        let mut quote = self.guard.quote_from_request(request)?;
        let quote_id = next_quote_id();
        quote.quote_id = quote_id.clone();

        let estimate = self.estimator.estimate(&quote.selection);
        let service_label = quote.selection.service().label();

        let record = QuoteRecord {
            quote,
            status: QuoteStatus::Received,
            estimate: Some(estimate.clone()),
        };

        let stored = self.repository.insert(record)?;

        let mut details = BTreeMap::new();
        details.insert("service".to_string(), service_label.to_string());
        details.insert("price_line".to_string(), estimate.display);
        details.insert(
            "total_with_add_ons".to_string(),
            estimate.total_with_add_ons.to_string(),
        );
        self.notifier.publish(LeadNotification {
            template: "quote_received".to_string(),
            quote_id,
            details,
        })?;

        Ok(stored)
    }

    /// Back-office transition on a stored lead (contacted, scheduled,
    /// closed). The new status is persisted before the record is returned.
    pub fn update_status(
        &self,
        quote_id: &QuoteId,
        status: QuoteStatus,
    ) -> Result<QuoteRecord, QuoteServiceError> {
        let mut record = self
            .repository
            .fetch(quote_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.status = status;
        self.repository.update(record.clone())?;

        Ok(record)
    }

    /// Fetch a quote and current status for API responses.
    pub fn get(&self, quote_id: &QuoteId) -> Result<QuoteRecord, QuoteServiceError> {
        let record = self
            .repository
            .fetch(quote_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Back-office CSV dump of the most recent quotes.
    pub fn export_csv(&self, limit: usize) -> Result<String, QuoteServiceError> {
        let records = self.repository.recent(limit)?;
        Ok(export::export_csv_string(&records)?)
    }
}

/// Error raised by the quote service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
