mod data;

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// A supported country: display name, ISO 3166-1 alpha-2 code and dial code
/// (international calling prefix without the leading `+`).
///
/// Identity is the ISO2 code alone, compared case-insensitively; the name and
/// dial code never participate in equality.
#[derive(Debug, Clone)]
pub struct Country {
    name: String,
    iso2: String,
    dial_code: u16,
}

impl Country {
    /// The ISO2 code is normalized to uppercase regardless of input case.
    pub fn new(name: impl Into<String>, iso2: impl Into<String>, dial_code: u16) -> Self {
        Self {
            name: name.into(),
            iso2: iso2.into().to_ascii_uppercase(),
            dial_code,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn dial_code(&self) -> u16 {
        self.dial_code
    }

    /// English display name derived from the ISO2 code, falling back to the
    /// name the country was constructed with.
    pub fn display_name(&self) -> &str {
        data::display_name(&self.iso2).unwrap_or(&self.name)
    }

    /// Lowercase `country_<iso2>` identifier for icon lookup.
    pub fn resource_key(&self) -> String {
        format!("country_{}", self.iso2.to_ascii_lowercase())
    }

    /// Regional-indicator flag glyph for this country, or the empty string
    /// when no glyph can be derived (the "no icon" value).
    pub fn flag(&self) -> String {
        flag_glyph(&self.iso2)
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.iso2.eq_ignore_ascii_case(&other.iso2)
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.iso2.bytes() {
            state.write_u8(byte.to_ascii_uppercase());
        }
    }
}

/// Unicode flag for a two-letter country code. Anything that is not two
/// ASCII letters resolves to an empty glyph rather than an error.
pub fn flag_glyph(iso2: &str) -> String {
    let mut glyph = String::new();
    if iso2.len() != 2 {
        return glyph;
    }
    for ch in iso2.chars() {
        if !ch.is_ascii_alphabetic() {
            return String::new();
        }
        let indicator = 0x1F1E6 + (ch.to_ascii_uppercase() as u32 - 'A' as u32);
        if let Some(flag_char) = char::from_u32(indicator) {
            glyph.push(flag_char);
        }
    }
    glyph
}

/// Ordered, immutable-after-build collection of supported countries.
///
/// Built explicitly and injected into the control instead of living as
/// process-wide static state, so tests can run against custom country sets.
/// Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    entries: IndexMap<String, Country>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the full built-in country table.
    pub fn builtin() -> Self {
        Self::from_countries(
            data::COUNTRIES
                .iter()
                .map(|(name, iso2, dial_code)| Country::new(*name, *iso2, *dial_code)),
        )
    }

    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut registry = Self::new();
        for country in countries {
            registry.push(country);
        }
        registry
    }

    /// Adds a country. On a duplicate ISO2 code the first insert wins; later
    /// entries are dropped.
    pub fn push(&mut self, country: Country) {
        self.entries
            .entry(country.iso2().to_string())
            .or_insert(country);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.entries.get_index(index).map(|(_, country)| country)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.entries.values()
    }

    /// Case-insensitive lookup by ISO2 code.
    pub fn position_by_iso2(&self, iso2: &str) -> Option<usize> {
        self.entries.get_index_of(&iso2.to_ascii_uppercase())
    }

    pub fn find_by_iso2(&self, iso2: &str) -> Option<&Country> {
        self.entries.get(&iso2.to_ascii_uppercase())
    }

    /// First country in insertion order with the given dial code. Shared
    /// dial codes (e.g. +1) resolve to whichever entry was registered first.
    pub fn position_by_dial_code(&self, dial_code: u16) -> Option<usize> {
        self.entries
            .values()
            .position(|country| country.dial_code() == dial_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso2_is_normalized_to_uppercase() {
        let country = Country::new("Indonesia", "id", 62);
        assert_eq!(country.iso2(), "ID");
    }

    #[test]
    fn equality_is_case_insensitive_on_iso2_only() {
        let a = Country::new("Indonesia", "id", 62);
        let b = Country::new("Somewhere else", "ID", 999);
        assert_eq!(a, b);
    }

    #[test]
    fn resource_key_is_lowercase() {
        let country = Country::new("Indonesia", "ID", 62);
        assert_eq!(country.resource_key(), "country_id");
    }

    #[test]
    fn flag_glyph_for_valid_code() {
        assert_eq!(flag_glyph("ID"), "\u{1F1EE}\u{1F1E9}");
        assert_eq!(flag_glyph("id"), "\u{1F1EE}\u{1F1E9}");
    }

    #[test]
    fn flag_glyph_missing_resolves_to_no_icon() {
        assert_eq!(flag_glyph(""), "");
        assert_eq!(flag_glyph("1D"), "");
        assert_eq!(flag_glyph("IDN"), "");
    }

    #[test]
    fn display_name_prefers_builtin_table() {
        let country = Country::new("Custom label", "ID", 62);
        assert_eq!(country.display_name(), "Indonesia");
        let unknown = Country::new("Atlantis", "XX", 999);
        assert_eq!(unknown.display_name(), "Atlantis");
    }

    #[test]
    fn registry_keeps_insertion_order() {
        let registry = CountryRegistry::from_countries([
            Country::new("Indonesia", "ID", 62),
            Country::new("Germany", "DE", 49),
        ]);
        assert_eq!(registry.get(0).map(Country::iso2), Some("ID"));
        assert_eq!(registry.get(1).map(Country::iso2), Some("DE"));
    }

    #[test]
    fn duplicate_iso2_first_insert_wins() {
        let registry = CountryRegistry::from_countries([
            Country::new("First", "ID", 62),
            Country::new("Second", "id", 63),
        ]);
        assert_eq!(registry.len(), 1);
        let winner = registry.find_by_iso2("ID").expect("entry");
        assert_eq!(winner.name(), "First");
        assert_eq!(winner.dial_code(), 62);
    }

    #[test]
    fn iso2_lookup_is_case_insensitive() {
        let registry = CountryRegistry::builtin();
        assert_eq!(registry.position_by_iso2("id"), registry.position_by_iso2("ID"));
        assert!(registry.position_by_iso2("id").is_some());
    }

    #[test]
    fn dial_code_lookup_returns_first_match() {
        let registry = CountryRegistry::from_countries([
            Country::new("Canada", "CA", 1),
            Country::new("United States", "US", 1),
        ]);
        let index = registry.position_by_dial_code(1).expect("match");
        assert_eq!(registry.get(index).map(Country::iso2), Some("CA"));
    }

    #[test]
    fn unknown_dial_code_has_no_match() {
        let registry = CountryRegistry::builtin();
        assert_eq!(registry.position_by_dial_code(0), None);
    }
}
