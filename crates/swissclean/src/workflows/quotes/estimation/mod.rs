mod catalog;
mod display;
mod rules;

pub use catalog::{AddOnOption, CatalogView, CategoryOptions, PricingConfig, ServiceOption};
pub use display::{format_chf, PriceTexts};
pub use rules::{PricingRule, QuantitySource, RoomTier};

use serde::{Deserialize, Serialize};

use super::selection::QuoteSelection;

/// Stateless calculator that applies the rate card to a selection.
///
/// Estimation is a total function: a selection the rate card does not cover,
/// or a rooms count above every tier, degrades to the localized
/// price-on-request sentinel instead of failing.
pub struct Estimator {
    config: PricingConfig,
    texts: PriceTexts,
}

impl Estimator {
    pub fn new(config: PricingConfig, texts: PriceTexts) -> Self {
        Self { config, texts }
    }

    pub fn estimate(&self, selection: &QuoteSelection) -> Estimate {
        let add_ons_total: u32 = selection
            .add_ons()
            .iter()
            .map(|&id| self.config.add_on_price(id))
            .sum();

        let priced = self
            .config
            .rule(selection.service())
            .and_then(|rule| {
                rules::base_price(rule, selection.input()).map(|base| {
                    let line =
                        display::render(selection.service().unit(), rule, base, &self.texts);
                    (base, line)
                })
            });

        let (base_price_min, display) =
            priced.unwrap_or_else(|| (0, self.texts.on_request.clone()));

        Estimate {
            base_price_min,
            display,
            add_ons_total,
            total_with_add_ons: base_price_min + add_ons_total,
        }
    }

    pub fn catalog(&self) -> CatalogView {
        CatalogView::new(&self.config)
    }

    pub fn texts(&self) -> &PriceTexts {
        &self.texts
    }
}

/// Computed price floor and its advertised line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub base_price_min: u32,
    pub display: String,
    pub add_ons_total: u32,
    pub total_with_add_ons: u32,
}
