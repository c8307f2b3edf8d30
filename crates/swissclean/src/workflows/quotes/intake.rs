use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CustomerContact, EstimationInput, QuoteId, QuoteRequest};
use super::selection::{ForeignServiceError, QuoteSelection};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error(transparent)]
    ForeignService(#[from] ForeignServiceError),
    #[error("contact must include an e-mail address or a phone number")]
    MissingContactChannel,
    #[error("contact name must not be blank")]
    BlankName,
}

const DEFAULT_MAX_ROOMS: u8 = 6;
const DEFAULT_MAX_HOURS: u8 = 12;
const DEFAULT_MAX_SQUARE_METERS: u32 = 10_000;

/// Bounds the guard clamps calculator inputs into. The pricing formulas
/// themselves accept any non-negative integer; the bounds mirror what the
/// website form offers (rooms capped at "6 or more", hours at 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakePolicy {
    pub max_rooms: u8,
    pub max_hours: u8,
    pub max_square_meters: u32,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            max_rooms: DEFAULT_MAX_ROOMS,
            max_hours: DEFAULT_MAX_HOURS,
            max_square_meters: DEFAULT_MAX_SQUARE_METERS,
        }
    }
}

impl IntakePolicy {
    pub fn clamp(&self, input: EstimationInput) -> EstimationInput {
        EstimationInput {
            square_meters: input.square_meters.min(self.max_square_meters),
            rooms: input.rooms.clamp(1, self.max_rooms),
            hours: input.hours.clamp(1, self.max_hours),
        }
    }
}

/// Guard responsible for producing sanitized quotes from raw submissions.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert an inbound request into a sanitized quote. The service must
    /// belong to the submitted category; a mismatch is a contract violation
    /// caught here so the estimator never sees one.
    pub fn quote_from_request(
        &self,
        request: QuoteRequest,
    ) -> Result<SanitizedQuote, IntakeViolation> {
        let QuoteRequest {
            category,
            service,
            input,
            add_ons,
            contact,
            preferred_date,
        } = request;

        if contact.name.trim().is_empty() {
            return Err(IntakeViolation::BlankName);
        }

        let has_email = contact
            .email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty());
        let has_phone = contact
            .phone
            .as_deref()
            .is_some_and(|phone| !phone.trim().is_empty());
        if !has_email && !has_phone {
            return Err(IntakeViolation::MissingContactChannel);
        }

        let mut selection = QuoteSelection::with_service(category, service)?;
        selection.set_input(self.policy.clamp(input));
        selection.select_add_ons(add_ons);

        Ok(SanitizedQuote {
            quote_id: QuoteId("pending".to_string()),
            selection,
            contact,
            preferred_date,
        })
    }
}

/// The validated, clamped quote after intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedQuote {
    pub quote_id: QuoteId,
    pub selection: QuoteSelection,
    pub contact: CustomerContact,
    pub preferred_date: Option<NaiveDate>,
}
