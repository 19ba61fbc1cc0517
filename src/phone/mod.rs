//! Thin boundary around the external `phonenumber` engine. Everything here is
//! best-effort: malformed input yields `None`, never an error.

pub mod watcher;

use phonenumber::{country, Mode, PhoneNumber};

/// Region identifier for an ISO2 code, when the engine knows the region.
pub(crate) fn region_of(iso2: &str) -> Option<country::Id> {
    iso2.trim().to_ascii_uppercase().parse().ok()
}

/// Parses phone text against a default region.
///
/// The parser is panic-guarded: the upstream engine has a few unwraps on
/// unusual input, and a panic there must degrade to "not a number" like any
/// other parse failure.
pub(crate) fn parse_number(text: &str, region: Option<country::Id>) -> Option<PhoneNumber> {
    let candidate = text.trim().to_owned();
    if candidate.is_empty() {
        return None;
    }
    match std::panic::catch_unwind(move || phonenumber::parse(region, candidate)) {
        Ok(Ok(number)) => Some(number),
        Ok(Err(err)) => {
            log::debug!("failed to parse phone number: {err:?}");
            None
        }
        Err(panic) => {
            log::warn!("phone number engine panicked while parsing: {panic:?}");
            None
        }
    }
}

pub(crate) fn format_national(number: &PhoneNumber) -> String {
    phonenumber::format(number).mode(Mode::National).to_string()
}

pub(crate) fn format_international(number: &PhoneNumber) -> String {
    phonenumber::format(number)
        .mode(Mode::International)
        .to_string()
}

pub(crate) fn format_e164(number: &PhoneNumber) -> String {
    phonenumber::format(number).mode(Mode::E164).to_string()
}

pub(crate) fn is_valid_number(number: &PhoneNumber) -> bool {
    phonenumber::is_valid(number)
}

/// International dial code of a parsed number, without the leading `+`.
pub(crate) fn dial_code(number: &PhoneNumber) -> u16 {
    number.country().code()
}

/// Example mobile number for a region, when the numbering metadata carries
/// one.
pub(crate) fn example_mobile(region: country::Id) -> Option<PhoneNumber> {
    let iso2 = format!("{region:?}");
    let metadata = phonenumber::metadata::DATABASE.by_id(&iso2)?;
    let example = metadata.descriptors().mobile()?.example()?;
    parse_number(example, Some(region))
}
