use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted quote requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

/// Raised when a string tag from the website or CLI matches no catalog entry.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown tag '{0}'")]
pub struct ParseTagError(pub String);

/// Top-level grouping of offered services, mirroring the website's category tabs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    Cleaning,
    Moving,
    Maintenance,
    Disposal,
    Combo,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Cleaning,
        ServiceCategory::Moving,
        ServiceCategory::Maintenance,
        ServiceCategory::Disposal,
        ServiceCategory::Combo,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ServiceCategory::Cleaning => "cleaning",
            ServiceCategory::Moving => "moving",
            ServiceCategory::Maintenance => "maintenance",
            ServiceCategory::Disposal => "disposal",
            ServiceCategory::Combo => "combo",
        }
    }

    /// Service types offered under this category, in the order the website lists them.
    /// The first entry is the default selection after a category switch.
    pub const fn services(self) -> &'static [ServiceType] {
        match self {
            ServiceCategory::Cleaning => &[
                ServiceType::EndOfTenancyApartment,
                ServiceType::EndOfTenancyHouse,
                ServiceType::ApartmentCleaning,
                ServiceType::DeepCleaning,
                ServiceType::ConstructionCleaning,
                ServiceType::GastronomyKitchenDeep,
                ServiceType::GastronomyRegular,
                ServiceType::GastronomySanitary,
                ServiceType::WindowCleaning,
            ],
            ServiceCategory::Moving => &[
                ServiceType::ApartmentMove,
                ServiceType::HouseMove,
                ServiceType::OfficeMove,
                ServiceType::PianoTransport,
                ServiceType::FurnitureAssembly,
            ],
            ServiceCategory::Maintenance => &[
                ServiceType::ResidentialBuildingCare,
                ServiceType::GardenMaintenance,
                ServiceType::JanitorService,
                ServiceType::SnowRemoval,
            ],
            ServiceCategory::Disposal => &[
                ServiceType::HouseholdDisposal,
                ServiceType::ConstructionDebrisDisposal,
                ServiceType::ApplianceDisposal,
                ServiceType::BulkyWastePickup,
            ],
            ServiceCategory::Combo => &[
                ServiceType::ComboApartment,
                ServiceType::ComboHouse,
                ServiceType::ComboOffice,
            ],
        }
    }

    pub fn default_service(self) -> ServiceType {
        self.services()[0]
    }
}

impl FromStr for ServiceCategory {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.label() == value)
            .ok_or_else(|| ParseTagError(value.to_string()))
    }
}

/// A specific offering within a category, each bound to one pricing rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    EndOfTenancyApartment,
    EndOfTenancyHouse,
    ApartmentCleaning,
    DeepCleaning,
    ConstructionCleaning,
    GastronomyKitchenDeep,
    GastronomyRegular,
    GastronomySanitary,
    WindowCleaning,
    ApartmentMove,
    HouseMove,
    OfficeMove,
    PianoTransport,
    FurnitureAssembly,
    ResidentialBuildingCare,
    GardenMaintenance,
    JanitorService,
    SnowRemoval,
    HouseholdDisposal,
    ConstructionDebrisDisposal,
    ApplianceDisposal,
    BulkyWastePickup,
    ComboApartment,
    ComboHouse,
    ComboOffice,
}

impl ServiceType {
    pub const fn label(self) -> &'static str {
        match self {
            ServiceType::EndOfTenancyApartment => "end-of-tenancy-apartment",
            ServiceType::EndOfTenancyHouse => "end-of-tenancy-house",
            ServiceType::ApartmentCleaning => "apartment-cleaning",
            ServiceType::DeepCleaning => "deep-cleaning",
            ServiceType::ConstructionCleaning => "construction-cleaning",
            ServiceType::GastronomyKitchenDeep => "gastronomy-kitchen-deep",
            ServiceType::GastronomyRegular => "gastronomy-regular",
            ServiceType::GastronomySanitary => "gastronomy-sanitary",
            ServiceType::WindowCleaning => "window-cleaning",
            ServiceType::ApartmentMove => "apartment-move",
            ServiceType::HouseMove => "house-move",
            ServiceType::OfficeMove => "office-move",
            ServiceType::PianoTransport => "piano-transport",
            ServiceType::FurnitureAssembly => "furniture-assembly",
            ServiceType::ResidentialBuildingCare => "residential-building-care",
            ServiceType::GardenMaintenance => "garden-maintenance",
            ServiceType::JanitorService => "janitor-service",
            ServiceType::SnowRemoval => "snow-removal",
            ServiceType::HouseholdDisposal => "household-disposal",
            ServiceType::ConstructionDebrisDisposal => "construction-debris-disposal",
            ServiceType::ApplianceDisposal => "appliance-disposal",
            ServiceType::BulkyWastePickup => "bulky-waste-pickup",
            ServiceType::ComboApartment => "combo-apartment",
            ServiceType::ComboHouse => "combo-house",
            ServiceType::ComboOffice => "combo-office",
        }
    }

    pub const fn category(self) -> ServiceCategory {
        match self {
            ServiceType::EndOfTenancyApartment
            | ServiceType::EndOfTenancyHouse
            | ServiceType::ApartmentCleaning
            | ServiceType::DeepCleaning
            | ServiceType::ConstructionCleaning
            | ServiceType::GastronomyKitchenDeep
            | ServiceType::GastronomyRegular
            | ServiceType::GastronomySanitary
            | ServiceType::WindowCleaning => ServiceCategory::Cleaning,
            ServiceType::ApartmentMove
            | ServiceType::HouseMove
            | ServiceType::OfficeMove
            | ServiceType::PianoTransport
            | ServiceType::FurnitureAssembly => ServiceCategory::Moving,
            ServiceType::ResidentialBuildingCare
            | ServiceType::GardenMaintenance
            | ServiceType::JanitorService
            | ServiceType::SnowRemoval => ServiceCategory::Maintenance,
            ServiceType::HouseholdDisposal
            | ServiceType::ConstructionDebrisDisposal
            | ServiceType::ApplianceDisposal
            | ServiceType::BulkyWastePickup => ServiceCategory::Disposal,
            ServiceType::ComboApartment | ServiceType::ComboHouse | ServiceType::ComboOffice => {
                ServiceCategory::Combo
            }
        }
    }

    /// Which input quantity this offering's pricing rule consumes.
    pub const fn unit(self) -> PricingUnit {
        match self {
            ServiceType::EndOfTenancyApartment | ServiceType::ComboApartment => PricingUnit::Rooms,
            ServiceType::EndOfTenancyHouse
            | ServiceType::PianoTransport
            | ServiceType::ApplianceDisposal => PricingUnit::Fixed,
            ServiceType::ApartmentCleaning
            | ServiceType::FurnitureAssembly
            | ServiceType::GardenMaintenance => PricingUnit::HourlyRange,
            ServiceType::DeepCleaning | ServiceType::ResidentialBuildingCare => {
                PricingUnit::SqmRange
            }
            ServiceType::ConstructionCleaning => PricingUnit::Construction,
            ServiceType::GastronomyKitchenDeep | ServiceType::ComboOffice => {
                PricingUnit::FixedRange
            }
            ServiceType::GastronomyRegular | ServiceType::ApartmentMove => {
                PricingUnit::HourlyRangePerPerson
            }
            ServiceType::GastronomySanitary
            | ServiceType::HouseMove
            | ServiceType::SnowRemoval
            | ServiceType::BulkyWastePickup
            | ServiceType::ComboHouse => PricingUnit::FixedFrom,
            ServiceType::WindowCleaning => PricingUnit::PerWindowRange,
            ServiceType::OfficeMove | ServiceType::JanitorService => PricingUnit::HourlyFrom,
            ServiceType::HouseholdDisposal | ServiceType::ConstructionDebrisDisposal => {
                PricingUnit::PerM3From
            }
        }
    }
}

impl FromStr for ServiceType {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .iter()
            .flat_map(|category| category.services().iter().copied())
            .find(|service| service.label() == value)
            .ok_or_else(|| ParseTagError(value.to_string()))
    }
}

/// Tag describing which input parameters a pricing rule reads and how its
/// price line is phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingUnit {
    Rooms,
    Fixed,
    HourlyRange,
    SqmRange,
    Construction,
    FixedRange,
    FixedFrom,
    PerWindowRange,
    HourlyRangePerPerson,
    HourlyFrom,
    PerM3From,
}

/// Numeric parameters collected by the calculator form. Only the field named
/// by the selected type's pricing unit is read; the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationInput {
    #[serde(default)]
    pub square_meters: u32,
    #[serde(default = "default_rooms")]
    pub rooms: u8,
    #[serde(default = "default_hours")]
    pub hours: u8,
}

fn default_rooms() -> u8 {
    1
}

fn default_hours() -> u8 {
    1
}

impl Default for EstimationInput {
    fn default() -> Self {
        Self {
            square_meters: 0,
            rooms: 1,
            hours: 1,
        }
    }
}

/// Optional flat-priced extras, applied uniformly to every category and type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AddOnId {
    BasementAttic,
    BalconyTerrace,
    DisposalVolume,
}

impl AddOnId {
    pub const ALL: [AddOnId; 3] = [
        AddOnId::BasementAttic,
        AddOnId::BalconyTerrace,
        AddOnId::DisposalVolume,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AddOnId::BasementAttic => "basement-attic",
            AddOnId::BalconyTerrace => "balcony-terrace",
            AddOnId::DisposalVolume => "disposal-volume",
        }
    }
}

impl FromStr for AddOnId {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.label() == value)
            .ok_or_else(|| ParseTagError(value.to_string()))
    }
}

/// Catalog entry for an add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    pub price_from: u32,
}

/// Who asked for the quote. Either e-mail or phone must be present so the
/// back office can actually respond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Inbound lead payload: calculator selections plus contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub category: ServiceCategory,
    pub service: ServiceType,
    #[serde(default)]
    pub input: EstimationInput,
    #[serde(default)]
    pub add_ons: BTreeSet<AddOnId>,
    pub contact: CustomerContact,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
}

/// High level status tracked while the back office works a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStatus {
    Received,
    Contacted,
    Scheduled,
    Closed,
}

impl QuoteStatus {
    pub const fn label(self) -> &'static str {
        match self {
            QuoteStatus::Received => "received",
            QuoteStatus::Contacted => "contacted",
            QuoteStatus::Scheduled => "scheduled",
            QuoteStatus::Closed => "closed",
        }
    }
}
