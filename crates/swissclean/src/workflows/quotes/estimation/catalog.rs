use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{AddOn, AddOnId, PricingUnit, ServiceCategory, ServiceType};
use super::rules::{PricingRule, QuantitySource, RoomTier};

/// The fixed rate/tier table and add-on catalog behind the public calculator.
/// This is static business data, not environment-driven configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    rules: BTreeMap<ServiceType, PricingRule>,
    add_ons: Vec<AddOn>,
}

impl PricingConfig {
    pub fn new(rules: BTreeMap<ServiceType, PricingRule>, add_ons: Vec<AddOn>) -> Self {
        Self { rules, add_ons }
    }

    /// The published rate card.
    pub fn standard() -> Self {
        let mut rules = BTreeMap::new();

        rules.insert(
            ServiceType::EndOfTenancyApartment,
            tiered(&[(1, 250), (2, 350), (3, 480), (4, 620), (5, 780)]),
        );
        rules.insert(ServiceType::EndOfTenancyHouse, flat(900.0));
        rules.insert(
            ServiceType::ApartmentCleaning,
            hourly_range(45.0, 65.0),
        );
        rules.insert(
            ServiceType::DeepCleaning,
            sqm_range(8.0, 12.0, None),
        );
        rules.insert(
            ServiceType::ConstructionCleaning,
            sqm_range(6.0, 9.0, Some(480)),
        );
        rules.insert(
            ServiceType::GastronomyKitchenDeep,
            flat_range(1200.0, 2400.0),
        );
        rules.insert(
            ServiceType::GastronomyRegular,
            hourly_range(45.0, 65.0),
        );
        rules.insert(ServiceType::GastronomySanitary, flat(350.0));
        rules.insert(ServiceType::WindowCleaning, flat_range(15.0, 25.0));

        rules.insert(ServiceType::ApartmentMove, hourly_range(55.0, 85.0));
        rules.insert(ServiceType::HouseMove, flat(1800.0));
        rules.insert(ServiceType::OfficeMove, hourly(95.0));
        rules.insert(ServiceType::PianoTransport, flat(450.0));
        rules.insert(
            ServiceType::FurnitureAssembly,
            hourly_range(40.0, 60.0),
        );

        rules.insert(
            ServiceType::ResidentialBuildingCare,
            sqm_range(0.6, 1.2, None),
        );
        rules.insert(
            ServiceType::GardenMaintenance,
            hourly_range(45.0, 60.0),
        );
        rules.insert(ServiceType::JanitorService, hourly(55.0));
        rules.insert(ServiceType::SnowRemoval, flat(120.0));

        rules.insert(ServiceType::HouseholdDisposal, flat(30.0));
        rules.insert(ServiceType::ConstructionDebrisDisposal, flat(45.0));
        rules.insert(ServiceType::ApplianceDisposal, flat(80.0));
        rules.insert(ServiceType::BulkyWastePickup, flat(150.0));

        rules.insert(
            ServiceType::ComboApartment,
            tiered(&[(1, 650), (2, 850), (3, 1150), (4, 1450), (5, 1750)]),
        );
        rules.insert(ServiceType::ComboHouse, flat(2400.0));
        rules.insert(ServiceType::ComboOffice, flat_range(1500.0, 3500.0));

        let add_ons = vec![
            AddOn {
                id: AddOnId::BasementAttic,
                price_from: 80,
            },
            AddOn {
                id: AddOnId::BalconyTerrace,
                price_from: 70,
            },
            AddOn {
                id: AddOnId::DisposalVolume,
                price_from: 30,
            },
        ];

        Self { rules, add_ons }
    }

    pub fn rule(&self, service: ServiceType) -> Option<&PricingRule> {
        self.rules.get(&service)
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Flat price for one add-on; unknown ids contribute nothing.
    pub fn add_on_price(&self, id: AddOnId) -> u32 {
        self.add_ons
            .iter()
            .find(|add_on| add_on.id == id)
            .map(|add_on| add_on.price_from)
            .unwrap_or(0)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn tiered(bands: &[(u8, u32)]) -> PricingRule {
    PricingRule::Tiered {
        tiers: bands
            .iter()
            .map(|&(max_rooms, price)| RoomTier { max_rooms, price })
            .collect(),
    }
}

fn flat(rate: f64) -> PricingRule {
    PricingRule::Formula {
        rate,
        rate_high: None,
        quantity: None,
        minimum: None,
    }
}

fn flat_range(rate: f64, rate_high: f64) -> PricingRule {
    PricingRule::Formula {
        rate,
        rate_high: Some(rate_high),
        quantity: None,
        minimum: None,
    }
}

fn hourly(rate: f64) -> PricingRule {
    PricingRule::Formula {
        rate,
        rate_high: None,
        quantity: Some(QuantitySource::Hours),
        minimum: None,
    }
}

fn hourly_range(rate: f64, rate_high: f64) -> PricingRule {
    PricingRule::Formula {
        rate,
        rate_high: Some(rate_high),
        quantity: Some(QuantitySource::Hours),
        minimum: None,
    }
}

fn sqm_range(rate: f64, rate_high: f64, minimum: Option<u32>) -> PricingRule {
    PricingRule::Formula {
        rate,
        rate_high: Some(rate_high),
        quantity: Some(QuantitySource::SquareMeters),
        minimum,
    }
}

/// Option lists rendered by the selection UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub categories: Vec<CategoryOptions>,
    pub add_ons: Vec<AddOnOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOptions {
    pub category: ServiceCategory,
    pub services: Vec<ServiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub service: ServiceType,
    pub unit: PricingUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOnOption {
    pub id: AddOnId,
    pub price_from: u32,
}

impl CatalogView {
    pub fn new(config: &PricingConfig) -> Self {
        let categories = ServiceCategory::ALL
            .iter()
            .map(|&category| CategoryOptions {
                category,
                services: category
                    .services()
                    .iter()
                    .map(|&service| ServiceOption {
                        service,
                        unit: service.unit(),
                    })
                    .collect(),
            })
            .collect();

        let add_ons = config
            .add_ons()
            .iter()
            .map(|add_on| AddOnOption {
                id: add_on.id,
                price_from: add_on.price_from,
            })
            .collect();

        Self {
            categories,
            add_ons,
        }
    }
}
