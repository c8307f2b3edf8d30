use std::io::Write;

use super::repository::QuoteRecord;

/// CSV export error.
#[derive(Debug, thiserror::Error)]
#[error("csv export failed: {0}")]
pub struct ExportError(#[from] csv::Error);

const HEADER: [&str; 12] = [
    "quote_id",
    "status",
    "category",
    "service",
    "rooms",
    "square_meters",
    "hours",
    "add_ons",
    "base_price_min",
    "total_with_add_ons",
    "contact_name",
    "preferred_date",
];

/// Write quote records as the flat table the back office imports into its
/// spreadsheet. Contact e-mail/phone stay out of the export on purpose.
pub fn write_csv<W: Write>(records: &[QuoteRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in records {
        let selection = &record.quote.selection;
        let input = selection.input();
        let add_ons = selection
            .add_ons()
            .iter()
            .map(|id| id.label())
            .collect::<Vec<_>>()
            .join("+");
        let (base, total) = match &record.estimate {
            Some(estimate) => (
                estimate.base_price_min.to_string(),
                estimate.total_with_add_ons.to_string(),
            ),
            None => (String::new(), String::new()),
        };
        let preferred_date = record
            .quote
            .preferred_date
            .map(|date| date.to_string())
            .unwrap_or_default();

        csv_writer.write_record([
            record.quote.quote_id.0.as_str(),
            record.status.label(),
            selection.category().label(),
            selection.service().label(),
            &input.rooms.to_string(),
            &input.square_meters.to_string(),
            &input.hours.to_string(),
            &add_ons,
            &base,
            &total,
            record.quote.contact.name.as_str(),
            &preferred_date,
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// In-memory convenience for the HTTP export endpoint and CLI demo.
pub fn export_csv_string(records: &[QuoteRecord]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("csv writer emits utf-8"))
}
