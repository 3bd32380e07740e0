use std::io::{Read, Write};

use csv::{ErrorKind, QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use crate::prelude::{AppError, Contact, HashMap};

const FIELDS_PER_LINE: usize = 3;

/// Writes one `name,phone,email` line per contact.
///
/// Fields are written as-is. A comma inside a field is not escaped, so that
/// record will not survive the next load.
pub fn serialize_contacts<W: Write>(
    writer: W,
    contacts: &HashMap<String, Contact>,
) -> Result<usize, AppError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut counter = 0;
    for contact in contacts.values() {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;
    Ok(counter)
}

/// Reads contacts from comma separated lines.
///
/// Only lines with exactly three fields are kept; anything else (including
/// lines that are not valid UTF-8) is dropped. Fields are taken verbatim and
/// the first one, lowercased, becomes the key.
pub fn deserialize_contacts<R: Read>(reader: R) -> Result<HashMap<String, Contact>, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut contacts = HashMap::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), ErrorKind::Utf8 { .. }) => {
                debug!(error = %e, "skipping line that is not valid UTF-8");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if record.len() != FIELDS_PER_LINE {
            debug!(
                line = record.position().map(|p| p.line()),
                fields = record.len(),
                "skipping malformed contact line"
            );
            continue;
        }

        let contact: Contact = record.deserialize(None)?;
        contacts.insert(contact.key(), contact);
    }

    Ok(contacts)
}
