use super::common::*;
use crate::workflows::quotes::domain::{AddOnId, ServiceType};

#[test]
fn end_of_tenancy_tiers_match_published_prices() {
    let estimator = estimator();
    let expected = [250, 350, 480, 620, 780];

    let mut previous = 0;
    for (rooms, &price) in (1..=5).zip(expected.iter()) {
        let selection =
            selection_with_input(ServiceType::EndOfTenancyApartment, input(0, rooms, 1));
        let estimate = estimator.estimate(&selection);

        assert_eq!(estimate.base_price_min, price, "rooms {rooms}");
        assert!(estimate.base_price_min >= previous, "tiers must not decrease");
        previous = estimate.base_price_min;
    }

    let one_room = selection_with_input(ServiceType::EndOfTenancyApartment, input(0, 1, 1));
    assert_eq!(estimator.estimate(&one_room).display, "ab CHF 250");
}

#[test]
fn rooms_above_every_tier_fall_back_to_on_request() {
    let estimator = estimator();
    let mut selection =
        selection_with_input(ServiceType::EndOfTenancyApartment, input(0, 6, 1));
    selection.select_add_ons(all_add_ons());

    let estimate = estimator.estimate(&selection);

    assert_eq!(estimate.display, texts().on_request);
    assert_eq!(estimate.base_price_min, 0);
    assert_eq!(estimate.add_ons_total, 180);
    assert_eq!(estimate.total_with_add_ons, 180);
}

#[test]
fn hourly_rate_scales_linearly_with_hours() {
    let estimator = estimator();

    for hours in 1..=12 {
        let selection = selection_with_input(ServiceType::ApartmentCleaning, input(0, 1, hours));
        let estimate = estimator.estimate(&selection);
        assert_eq!(estimate.base_price_min, 45 * u32::from(hours));
    }

    let four_hours = selection_with_input(ServiceType::ApartmentCleaning, input(0, 1, 4));
    let estimate = estimator.estimate(&four_hours);
    assert_eq!(estimate.base_price_min, 180);
    assert_eq!(estimate.display, "CHF 45–65/Stunde");
}

#[test]
fn add_ons_sum_uniformly_across_types() {
    let estimator = estimator();

    for service in [ServiceType::DeepCleaning, ServiceType::HouseholdDisposal] {
        let bare = selection_with_input(service, input(50, 1, 1));
        let bare_estimate = estimator.estimate(&bare);
        assert_eq!(bare_estimate.add_ons_total, 0);
        assert_eq!(
            bare_estimate.total_with_add_ons,
            bare_estimate.base_price_min
        );

        let mut loaded = selection_with_input(service, input(50, 1, 1));
        loaded.select_add_ons(all_add_ons());
        let loaded_estimate = estimator.estimate(&loaded);
        assert_eq!(loaded_estimate.add_ons_total, 80 + 70 + 30);
        assert_eq!(
            loaded_estimate.total_with_add_ons,
            loaded_estimate.base_price_min + 180
        );
    }
}

#[test]
fn end_of_tenancy_house_ignores_every_quantity() {
    let estimator = estimator();

    for (square_meters, rooms, hours) in [(0, 1, 1), (250, 6, 12), (10_000, 3, 8)] {
        let selection = selection_with_input(
            ServiceType::EndOfTenancyHouse,
            input(square_meters, rooms, hours),
        );
        let estimate = estimator.estimate(&selection);
        assert_eq!(estimate.base_price_min, 900);
        assert_eq!(estimate.display, "ab CHF 900");
    }
}

#[test]
fn identical_inputs_produce_identical_estimates() {
    let estimator = estimator();
    let mut selection = selection_with_input(ServiceType::ApartmentMove, input(0, 1, 6));
    selection.toggle_add_on(AddOnId::BasementAttic);

    let first = estimator.estimate(&selection);
    let second = estimator.estimate(&selection);

    assert_eq!(first, second);
}

#[test]
fn combo_tiers_match_published_prices() {
    let estimator = estimator();
    let expected = [650, 850, 1150, 1450, 1750];

    for (rooms, &price) in (1..=5).zip(expected.iter()) {
        let selection = selection_with_input(ServiceType::ComboApartment, input(0, rooms, 1));
        assert_eq!(estimator.estimate(&selection).base_price_min, price);
    }

    let six_rooms = selection_with_input(ServiceType::ComboApartment, input(0, 6, 1));
    assert_eq!(estimator.estimate(&six_rooms).base_price_min, 0);
}

#[test]
fn construction_cleaning_applies_the_site_minimum() {
    let estimator = estimator();

    let small_site = selection_with_input(ServiceType::ConstructionCleaning, input(20, 1, 1));
    assert_eq!(estimator.estimate(&small_site).base_price_min, 480);

    let large_site = selection_with_input(ServiceType::ConstructionCleaning, input(200, 1, 1));
    let estimate = estimator.estimate(&large_site);
    assert_eq!(estimate.base_price_min, 1200);
    assert_eq!(estimate.display, "CHF 6–9/m², Mindestpauschale CHF 480");
}

#[test]
fn sub_franc_rates_round_up_to_whole_francs() {
    let estimator = estimator();

    let selection =
        selection_with_input(ServiceType::ResidentialBuildingCare, input(101, 1, 1));
    let estimate = estimator.estimate(&selection);

    assert_eq!(estimate.base_price_min, 61);
    assert_eq!(estimate.display, "CHF 0.60–1.20/m²");
}

#[test]
fn quantity_independent_ranges_advertise_the_lower_bound() {
    let estimator = estimator();

    let windows = selection_with_input(ServiceType::WindowCleaning, input(500, 6, 12));
    let estimate = estimator.estimate(&windows);
    assert_eq!(estimate.base_price_min, 15);
    assert_eq!(estimate.display, "CHF 15–25 pro Fenster");

    let disposal = selection_with_input(ServiceType::HouseholdDisposal, input(0, 1, 1));
    let estimate = estimator.estimate(&disposal);
    assert_eq!(estimate.base_price_min, 30);
    assert_eq!(estimate.display, "ab CHF 30/m³");

    let kitchen = selection_with_input(ServiceType::GastronomyKitchenDeep, input(0, 1, 1));
    let estimate = estimator.estimate(&kitchen);
    assert_eq!(estimate.base_price_min, 1200);
    assert_eq!(estimate.display, "CHF 1'200–2'400");
}

#[test]
fn per_person_rates_name_the_staff_in_the_price_line() {
    let estimator = estimator();

    let selection = selection_with_input(ServiceType::ApartmentMove, input(0, 1, 5));
    let estimate = estimator.estimate(&selection);

    assert_eq!(estimate.base_price_min, 275);
    assert_eq!(estimate.display, "CHF 55–85/Std. pro Mitarbeiter");
}
