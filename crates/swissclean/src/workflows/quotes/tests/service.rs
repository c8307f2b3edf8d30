use std::sync::Arc;

use super::common::*;
use crate::workflows::quotes::domain::{QuoteId, QuoteStatus, ServiceCategory};
use crate::workflows::quotes::estimation::{PriceTexts, PricingConfig};
use crate::workflows::quotes::repository::{QuoteRepository, RepositoryError};
use crate::workflows::quotes::{QuoteService, QuoteServiceError};

#[test]
fn submit_persists_an_estimated_record_and_notifies_the_back_office() {
    let (service, repository, notifier) = build_service();

    let record = service.submit(request()).expect("submission succeeds");

    assert_eq!(record.status, QuoteStatus::Received);
    let estimate = record.estimate.as_ref().expect("estimate attached");
    assert_eq!(estimate.base_price_min, 480);

    let stored = repository
        .fetch(&record.quote.quote_id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.status, QuoteStatus::Received);

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "quote_received");
    assert_eq!(events[0].quote_id, record.quote.quote_id);
    assert_eq!(
        events[0].details.get("service").map(String::as_str),
        Some("end-of-tenancy-apartment")
    );
    assert_eq!(
        events[0].details.get("total_with_add_ons").map(String::as_str),
        Some("480")
    );
}

#[test]
fn submit_ids_are_sequential_and_unique() {
    let (service, _, _) = build_service();

    let first = service.submit(request()).expect("first submission");
    let second = service.submit(request()).expect("second submission");

    assert_ne!(first.quote.quote_id, second.quote.quote_id);
    assert!(first.quote.quote_id.0.starts_with("quote-"));
}

#[test]
fn status_transitions_are_persisted() {
    let (service, repository, _) = build_service();
    let record = service.submit(request()).expect("submission succeeds");

    let updated = service
        .update_status(&record.quote.quote_id, QuoteStatus::Contacted)
        .expect("status update succeeds");
    assert_eq!(updated.status, QuoteStatus::Contacted);

    let stored = repository
        .fetch(&record.quote.quote_id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.status, QuoteStatus::Contacted);
    assert!(stored.estimate.is_some(), "estimate survives the transition");
}

#[test]
fn status_updates_on_unknown_quotes_are_not_found() {
    let (service, _, _) = build_service();

    match service.update_status(&QuoteId("quote-424242".to_string()), QuoteStatus::Closed) {
        Err(QuoteServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn intake_violations_surface_before_storage() {
    let (service, repository, notifier) = build_service();
    let mut bad_request = request();
    bad_request.category = ServiceCategory::Moving;

    match service.submit(bad_request) {
        Err(QuoteServiceError::Intake(_)) => {}
        other => panic!("expected intake violation, got {other:?}"),
    }

    assert!(repository.records.lock().expect("lock").is_empty());
    assert!(notifier.events().is_empty());
}

#[test]
fn repository_conflicts_are_propagated() {
    let service = QuoteService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
        PricingConfig::standard(),
        PriceTexts::de(),
    );

    match service.submit(request()) {
        Err(QuoteServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn unavailable_repositories_are_propagated() {
    let service = QuoteService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
        PricingConfig::standard(),
        PriceTexts::de(),
    );

    match service.get(&QuoteId("quote-000001".to_string())) {
        Err(QuoteServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn get_returns_not_found_for_unknown_ids() {
    let (service, _, _) = build_service();

    match service.get(&QuoteId("quote-999999".to_string())) {
        Err(QuoteServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn csv_export_lists_stored_quotes() {
    let (service, _, _) = build_service();
    let record = service.submit(request()).expect("submission succeeds");

    let csv = service.export_csv(10).expect("export succeeds");
    let mut lines = csv.lines();

    let header = lines.next().expect("header row");
    assert!(header.starts_with("quote_id,status,category,service"));

    let row = lines.next().expect("data row");
    assert!(row.starts_with(&record.quote.quote_id.0));
    assert!(row.contains("end-of-tenancy-apartment"));
    assert!(row.contains("480"));
}
