use serde::{Deserialize, Serialize};

use super::super::domain::EstimationInput;

/// A rooms-count band mapped to a fixed price floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTier {
    pub max_rooms: u8,
    pub price: u32,
}

/// Which numeric input a formula multiplies its rate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantitySource {
    Hours,
    SquareMeters,
}

/// Declarative pricing shapes. Every catalog entry is either a stepped
/// rooms-tier table or a rate formula; the dispatch below is the only place
/// that interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PricingRule {
    Tiered {
        tiers: Vec<RoomTier>,
    },
    Formula {
        rate: f64,
        #[serde(default)]
        rate_high: Option<f64>,
        /// `None` marks a quantity-independent flat or advertised-rate price.
        #[serde(default)]
        quantity: Option<QuantitySource>,
        #[serde(default)]
        minimum: Option<u32>,
    },
}

/// Price floor for a rule, or `None` when the rooms value exceeds every tier.
///
/// Tier comparison is `<=` in ascending order, first match wins, so any
/// in-between rooms count lands on the next tier up. Formula results are
/// rounded up to whole francs; sub-franc rates stay exact until the final
/// ceil.
pub(crate) fn base_price(rule: &PricingRule, input: &EstimationInput) -> Option<u32> {
    match rule {
        PricingRule::Tiered { tiers } => tiers
            .iter()
            .find(|tier| input.rooms <= tier.max_rooms)
            .map(|tier| tier.price),
        PricingRule::Formula {
            rate,
            quantity,
            minimum,
            ..
        } => {
            let quantity = match quantity {
                Some(QuantitySource::Hours) => f64::from(input.hours),
                Some(QuantitySource::SquareMeters) => f64::from(input.square_meters),
                None => 1.0,
            };
            let raw = (rate * quantity).ceil() as u32;
            Some(minimum.map_or(raw, |floor| raw.max(floor)))
        }
    }
}
