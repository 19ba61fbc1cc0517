use phonenumber::country;

use super::{dial_code, format_international, format_national, parse_number, region_of};

/// Live formatter scoped to a single region, or raw/unscoped when no country
/// is known.
///
/// A watcher is a value: when the active country changes, the old watcher is
/// discarded and a new one constructed for the new region, so formatting rules
/// can never leak across regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberWatcher {
    region: Option<country::Id>,
}

impl NumberWatcher {
    pub fn new(region: Option<country::Id>) -> Self {
        Self { region }
    }

    /// Watcher for an ISO2 code; an unknown code yields a raw-mode watcher.
    pub fn for_iso2(iso2: &str) -> Self {
        Self::new(region_of(iso2))
    }

    pub fn region(&self) -> Option<country::Id> {
        self.region
    }

    /// Reformats text to the region's national conventions. Input typed with
    /// an international `+` prefix keeps it, so a dial code embedded in the
    /// text survives reformatting. Text that does not parse yet is returned
    /// unchanged.
    pub fn reformat(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return text.to_owned();
        }
        match parse_number(trimmed, self.region) {
            Some(number) if trimmed.starts_with('+') => format_international(&number),
            Some(number) => format_national(&number),
            None => text.to_owned(),
        }
    }

    /// International dial code embedded in the typed text, when the text
    /// parses as a phone number.
    pub fn detect_dial_code(&self, text: &str) -> Option<u16> {
        parse_number(text, self.region).map(|number| dial_code(&number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reformat_passes_garbage_through_unchanged() {
        let watcher = NumberWatcher::for_iso2("ID");
        assert_eq!(watcher.reformat("not a number"), "not a number");
        assert_eq!(watcher.reformat(""), "");
    }

    #[test]
    fn reformat_renders_national_format() {
        let watcher = NumberWatcher::for_iso2("ID");
        let formatted = watcher.reformat("81234567890");
        let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, "081234567890");
        assert!(!formatted.contains('+'));
    }

    #[test]
    fn reformat_keeps_an_international_prefix() {
        let watcher = NumberWatcher::for_iso2("MY");
        let formatted = watcher.reformat("+6281234567890");
        assert!(formatted.starts_with("+62"));
    }

    #[test]
    fn unknown_iso_falls_back_to_raw_mode() {
        let watcher = NumberWatcher::for_iso2("ZZ");
        assert_eq!(watcher.region(), None);
        // raw mode still understands fully qualified international input
        assert_eq!(watcher.detect_dial_code("+6281234567890"), Some(62));
    }

    #[test]
    fn detects_dial_code_change_in_typed_text() {
        let watcher = NumberWatcher::for_iso2("ID");
        assert_eq!(watcher.detect_dial_code("+49301234567"), Some(49));
        assert_eq!(watcher.detect_dial_code("garbage"), None);
    }
}
