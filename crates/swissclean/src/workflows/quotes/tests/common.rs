use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::quotes::domain::{
    AddOnId, CustomerContact, EstimationInput, QuoteId, QuoteRequest, ServiceCategory,
    ServiceType,
};
use crate::workflows::quotes::estimation::{Estimator, PriceTexts, PricingConfig};
use crate::workflows::quotes::repository::{
    LeadNotification, LeadNotifier, NotificationError, QuoteRecord, QuoteRepository,
    RepositoryError,
};
use crate::workflows::quotes::selection::QuoteSelection;
use crate::workflows::quotes::{quote_router, QuoteService};

pub(super) fn texts() -> PriceTexts {
    PriceTexts::de()
}

pub(super) fn estimator() -> Estimator {
    Estimator::new(PricingConfig::standard(), texts())
}

pub(super) fn selection_for(service: ServiceType) -> QuoteSelection {
    QuoteSelection::with_service(service.category(), service)
        .expect("catalog services belong to their category")
}

pub(super) fn selection_with_input(
    service: ServiceType,
    input: EstimationInput,
) -> QuoteSelection {
    let mut selection = selection_for(service);
    selection.set_input(input);
    selection
}

pub(super) fn input(square_meters: u32, rooms: u8, hours: u8) -> EstimationInput {
    EstimationInput {
        square_meters,
        rooms,
        hours,
    }
}

pub(super) fn contact() -> CustomerContact {
    CustomerContact {
        name: "Anna Keller".to_string(),
        email: Some("anna.keller@example.ch".to_string()),
        phone: None,
        message: "Bitte um Offerte".to_string(),
    }
}

pub(super) fn request() -> QuoteRequest {
    QuoteRequest {
        category: ServiceCategory::Cleaning,
        service: ServiceType::EndOfTenancyApartment,
        input: input(0, 3, 1),
        add_ons: BTreeSet::new(),
        contact: contact(),
        preferred_date: NaiveDate::from_ymd_opt(2025, 11, 15),
    }
}

pub(super) fn all_add_ons() -> BTreeSet<AddOnId> {
    AddOnId::ALL.into_iter().collect()
}

pub(super) fn build_service() -> (
    QuoteService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = QuoteService::new(
        repository.clone(),
        notifier.clone(),
        PricingConfig::standard(),
        texts(),
    );
    (service, repository, notifier)
}

pub(super) fn quote_router_with_service(
    service: QuoteService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    quote_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<QuoteId, QuoteRecord>>>,
}

impl QuoteRepository for MemoryRepository {
    fn insert(&self, record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.quote.quote_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.quote.quote_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: QuoteRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.quote.quote_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<QuoteRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.quote.quote_id.0.cmp(&b.quote.quote_id.0));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl LeadNotifier for MemoryNotifier {
    fn publish(&self, notification: LeadNotification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl QuoteRepository for ConflictRepository {
    fn insert(&self, _record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: QuoteRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl QuoteRepository for UnavailableRepository {
    fn insert(&self, _record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: QuoteRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
