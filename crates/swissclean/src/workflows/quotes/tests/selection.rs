use super::common::*;
use crate::workflows::quotes::domain::{AddOnId, ServiceCategory, ServiceType};
use crate::workflows::quotes::selection::QuoteSelection;

#[test]
fn new_selection_defaults_to_the_first_listed_service() {
    for category in ServiceCategory::ALL {
        let selection = QuoteSelection::new(category);
        assert_eq!(selection.service(), category.services()[0]);
        assert!(selection.add_ons().is_empty());
    }
}

#[test]
fn switching_category_resets_service_and_clears_add_ons() {
    let mut selection = selection_for(ServiceType::DeepCleaning);
    selection.toggle_add_on(AddOnId::BalconyTerrace);

    selection.set_category(ServiceCategory::Moving);

    assert_eq!(selection.category(), ServiceCategory::Moving);
    assert_eq!(selection.service(), ServiceType::ApartmentMove);
    assert!(selection.add_ons().is_empty());
}

#[test]
fn reselecting_the_current_category_is_a_no_op() {
    let mut selection = selection_for(ServiceType::DeepCleaning);
    selection.toggle_add_on(AddOnId::BasementAttic);

    selection.set_category(ServiceCategory::Cleaning);

    assert_eq!(selection.service(), ServiceType::DeepCleaning);
    assert_eq!(selection.add_ons().len(), 1);
}

#[test]
fn foreign_services_are_rejected() {
    let mut selection = QuoteSelection::new(ServiceCategory::Cleaning);

    let error = selection
        .set_service(ServiceType::PianoTransport)
        .expect_err("piano transport is a moving service");

    assert_eq!(error.category, "cleaning");
    assert_eq!(error.service, "piano-transport");
    assert_eq!(selection.service(), ServiceType::EndOfTenancyApartment);
}

#[test]
fn toggling_an_add_on_twice_deselects_it() {
    let mut selection = QuoteSelection::new(ServiceCategory::Disposal);

    assert!(selection.toggle_add_on(AddOnId::DisposalVolume));
    assert!(!selection.toggle_add_on(AddOnId::DisposalVolume));
    assert!(selection.add_ons().is_empty());
}

#[test]
fn every_catalog_service_reports_its_own_category() {
    for category in ServiceCategory::ALL {
        for &service in category.services() {
            assert_eq!(service.category(), category, "{}", service.label());
        }
    }
}
