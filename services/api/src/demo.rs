use crate::infra::{InMemoryLeadNotifier, InMemoryQuoteRepository};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::collections::BTreeSet;
use std::sync::Arc;
use swissclean::error::AppError;
use swissclean::workflows::quotes::{
    AddOnId, CustomerContact, Estimator, EstimationInput, IntakeViolation, PriceTexts,
    PricingConfig, QuoteRequest, QuoteSelection, QuoteService, QuoteServiceError,
    ServiceCategory, ServiceType,
};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Service category tag (cleaning, moving, maintenance, disposal, combo)
    #[arg(long)]
    pub(crate) category: ServiceCategory,
    /// Service type tag; defaults to the category's first offering
    #[arg(long)]
    pub(crate) service: Option<ServiceType>,
    /// Room count for rooms-tiered services (6 means 6 or more)
    #[arg(long, default_value_t = 3)]
    pub(crate) rooms: u8,
    /// Hours for hourly services
    #[arg(long, default_value_t = 4)]
    pub(crate) hours: u8,
    /// Area for per-m² services
    #[arg(long, default_value_t = 0)]
    pub(crate) square_meters: u32,
    /// Add-on tags, repeatable (basement-attic, balcony-terrace, disposal-volume)
    #[arg(long = "add-on")]
    pub(crate) add_ons: Vec<AddOnId>,
    /// Display-string locale (de or en)
    #[arg(long, default_value = "de")]
    pub(crate) locale: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Preferred service date for the sample lead (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) preferred_date: Option<NaiveDate>,
    /// Display-string locale (de or en)
    #[arg(long, default_value = "de")]
    pub(crate) locale: String,
    /// Print the back-office CSV export at the end
    #[arg(long)]
    pub(crate) export_csv: bool,
}

fn intake_error(violation: IntakeViolation) -> AppError {
    AppError::from(QuoteServiceError::from(violation))
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        category,
        service,
        rooms,
        hours,
        square_meters,
        add_ons,
        locale,
    } = args;

    let mut selection = QuoteSelection::new(category);
    if let Some(service) = service {
        selection
            .set_service(service)
            .map_err(|err| intake_error(err.into()))?;
    }
    selection.set_input(EstimationInput {
        square_meters,
        rooms,
        hours,
    });
    selection.select_add_ons(add_ons);

    let estimator = Estimator::new(PricingConfig::standard(), PriceTexts::for_locale(&locale));
    let estimate = estimator.estimate(&selection);

    println!(
        "{} / {}",
        selection.category().label(),
        selection.service().label()
    );
    println!("  price line:     {}", estimate.display);
    println!("  base from:      CHF {}", estimate.base_price_min);
    println!("  add-ons:        CHF {}", estimate.add_ons_total);
    println!("  total from:     CHF {}", estimate.total_with_add_ons);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        preferred_date,
        locale,
        export_csv,
    } = args;

    let preferred_date =
        preferred_date.unwrap_or_else(|| Local::now().date_naive() + Duration::days(21));

    let repository = Arc::new(InMemoryQuoteRepository::default());
    let notifier = Arc::new(InMemoryLeadNotifier::default());
    let service = QuoteService::new(
        repository,
        notifier.clone(),
        PricingConfig::standard(),
        PriceTexts::for_locale(&locale),
    );

    println!("Quote calculator demo");
    let samples = [
        (ServiceType::EndOfTenancyApartment, 3, 1, 0),
        (ServiceType::ApartmentCleaning, 1, 4, 0),
        (ServiceType::DeepCleaning, 1, 1, 85),
        (ServiceType::ComboApartment, 6, 1, 0),
    ];
    for (sample, rooms, hours, square_meters) in samples {
        let mut selection = QuoteSelection::new(sample.category());
        selection
            .set_service(sample)
            .map_err(|err| intake_error(err.into()))?;
        selection.set_input(EstimationInput {
            square_meters,
            rooms,
            hours,
        });
        let estimate = service.estimate(&selection);
        println!("  {:30} {}", sample.label(), estimate.display);
    }

    let mut add_ons = BTreeSet::new();
    add_ons.insert(AddOnId::BasementAttic);
    add_ons.insert(AddOnId::BalconyTerrace);

    let record = service
        .submit(QuoteRequest {
            category: ServiceCategory::Combo,
            service: ServiceType::ComboApartment,
            input: EstimationInput {
                square_meters: 0,
                rooms: 3,
                hours: 1,
            },
            add_ons,
            contact: CustomerContact {
                name: "Anna Keller".to_string(),
                email: Some("anna.keller@example.ch".to_string()),
                phone: None,
                message: "Umzug mit Endreinigung, 3.5-Zimmer-Wohnung".to_string(),
            },
            preferred_date: Some(preferred_date),
        })
        .map_err(AppError::from)?;

    let view = record.status_view();
    println!("\nSample lead submitted");
    println!("  quote id:   {}", view.quote_id.0);
    println!("  status:     {}", view.status);
    println!("  price line: {}", view.price_line);
    if let Some(total) = view.total_with_add_ons {
        println!("  total from: CHF {total}");
    }
    println!("  notifications sent: {}", notifier.events().len());

    if export_csv {
        let csv = service.export_csv(100).map_err(AppError::from)?;
        println!("\nBack-office export\n{csv}");
    }

    Ok(())
}
