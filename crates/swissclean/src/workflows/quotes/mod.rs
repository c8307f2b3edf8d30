//! Quote calculator and lead intake for the public website.
//!
//! The estimator is a pure function over the published rate card; the
//! surrounding service composes intake validation, storage, and back-office
//! notification behind trait seams so every piece can be exercised in
//! isolation.

pub mod domain;
pub mod estimation;
pub mod export;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod selection;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AddOn, AddOnId, CustomerContact, EstimationInput, ParseTagError, PricingUnit, QuoteId,
    QuoteRequest, QuoteStatus, ServiceCategory, ServiceType,
};
pub use estimation::{
    format_chf, CatalogView, Estimate, Estimator, PriceTexts, PricingConfig, PricingRule,
    QuantitySource, RoomTier,
};
pub use export::{export_csv_string, write_csv, ExportError};
pub use intake::{IntakeGuard, IntakePolicy, IntakeViolation, SanitizedQuote};
pub use repository::{
    LeadNotification, LeadNotifier, NotificationError, QuoteRecord, QuoteRepository,
    QuoteStatusView, RepositoryError,
};
pub use router::quote_router;
pub use selection::{ForeignServiceError, QuoteSelection};
pub use service::{QuoteService, QuoteServiceError};
