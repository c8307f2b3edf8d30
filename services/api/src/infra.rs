use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use swissclean::workflows::quotes::{
    LeadNotification, LeadNotifier, NotificationError, QuoteId, QuoteRecord, QuoteRepository,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store. Quote ids are sequential, so the ordered map doubles
/// as submission order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuoteRepository {
    records: Arc<Mutex<BTreeMap<QuoteId, QuoteRecord>>>,
}

impl QuoteRepository for InMemoryQuoteRepository {
    fn insert(&self, record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        let mut store = self.records.lock().expect("quote store poisoned");
        if store.contains_key(&record.quote.quote_id) {
            return Err(RepositoryError::Conflict);
        }
        store.insert(record.quote.quote_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: QuoteRecord) -> Result<(), RepositoryError> {
        let mut store = self.records.lock().expect("quote store poisoned");
        if !store.contains_key(&record.quote.quote_id) {
            return Err(RepositoryError::NotFound);
        }
        store.insert(record.quote.quote_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        let store = self.records.lock().expect("quote store poisoned");
        Ok(store.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        let store = self.records.lock().expect("quote store poisoned");
        Ok(store.values().rev().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl InMemoryLeadNotifier {
    pub(crate) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier poisoned").clone()
    }
}

impl LeadNotifier for InMemoryLeadNotifier {
    fn publish(&self, notification: LeadNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifier poisoned")
            .push(notification);
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
