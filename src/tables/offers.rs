use std::io::Write;
use std::path::Path;

use super::TableError;
use crate::pipeline::MortgageOffer;

/// Output encodings supported by the offer sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferFormat {
    Csv,
    Json,
}

pub fn write_to_path<P: AsRef<Path>>(
    path: P,
    offers: &[MortgageOffer],
    format: OfferFormat,
) -> Result<(), TableError> {
    let file = std::fs::File::create(path)?;
    write_to(file, offers, format)
}

pub fn write_to<W: Write>(
    writer: W,
    offers: &[MortgageOffer],
    format: OfferFormat,
) -> Result<(), TableError> {
    match format {
        OfferFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for offer in offers {
                csv_writer.serialize(offer)?;
            }
            csv_writer.flush()?;
            Ok(())
        }
        OfferFormat::Json => {
            serde_json::to_writer_pretty(writer, offers)?;
            Ok(())
        }
    }
}
