use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{AddOnId, EstimationInput, ServiceCategory, ServiceType};

/// Raised when a caller pairs a service with a foreign category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("service '{service}' does not belong to category '{category}'")]
pub struct ForeignServiceError {
    pub category: &'static str,
    pub service: &'static str,
}

/// Calculator form state owned by the caller. The estimator itself stays a
/// pure function; this struct maintains the one invariant the estimator
/// relies on: the selected service always belongs to the selected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSelection {
    category: ServiceCategory,
    service: ServiceType,
    input: EstimationInput,
    add_ons: BTreeSet<AddOnId>,
}

impl QuoteSelection {
    /// Fresh selection with the category's first listed service.
    pub fn new(category: ServiceCategory) -> Self {
        Self {
            category,
            service: category.default_service(),
            input: EstimationInput::default(),
            add_ons: BTreeSet::new(),
        }
    }

    pub fn with_service(
        category: ServiceCategory,
        service: ServiceType,
    ) -> Result<Self, ForeignServiceError> {
        let mut selection = Self::new(category);
        selection.set_service(service)?;
        Ok(selection)
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    pub fn input(&self) -> &EstimationInput {
        &self.input
    }

    pub fn add_ons(&self) -> &BTreeSet<AddOnId> {
        &self.add_ons
    }

    /// Switching category resets the service to the new category's first
    /// option and clears chosen add-ons. Re-selecting the current category is
    /// a no-op.
    pub fn set_category(&mut self, category: ServiceCategory) {
        if category == self.category {
            return;
        }
        self.category = category;
        self.service = category.default_service();
        self.add_ons.clear();
    }

    pub fn set_service(&mut self, service: ServiceType) -> Result<(), ForeignServiceError> {
        if service.category() != self.category {
            return Err(ForeignServiceError {
                category: self.category.label(),
                service: service.label(),
            });
        }
        self.service = service;
        Ok(())
    }

    pub fn set_input(&mut self, input: EstimationInput) {
        self.input = input;
    }

    /// Returns whether the add-on is selected after the toggle.
    pub fn toggle_add_on(&mut self, id: AddOnId) -> bool {
        if self.add_ons.remove(&id) {
            false
        } else {
            self.add_ons.insert(id);
            true
        }
    }

    pub fn select_add_ons<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = AddOnId>,
    {
        self.add_ons.extend(ids);
    }
}
