/// Capability interface over the host device's telephony/locale services.
///
/// Every query is optional: `None` models a missing service or a denied
/// permission, and callers degrade to the locale default instead of failing.
pub trait DeviceServices {
    /// Device-reported subscriber number, when available.
    fn line_number(&self) -> Option<String> {
        None
    }

    /// ISO2 country of the current network, when available.
    fn network_country_iso(&self) -> Option<String> {
        None
    }
}

impl<T: DeviceServices + ?Sized> DeviceServices for Box<T> {
    fn line_number(&self) -> Option<String> {
        (**self).line_number()
    }

    fn network_country_iso(&self) -> Option<String> {
        (**self).network_country_iso()
    }
}

/// Host without telephony services; every lookup degrades to defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDevice;

impl DeviceServices for NoDevice {}

/// ISO2 region of the process locale, read from the usual environment
/// variables (`LC_ALL` > `LC_MESSAGES` > `LANG`).
pub fn locale_region() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| region_from_locale(&value))
}

fn region_from_locale(locale: &str) -> Option<String> {
    // "en_US.UTF-8" -> "US"
    let tag = locale.split('.').next()?;
    let region = tag.split(['_', '-']).nth(1)?;
    (region.len() == 2 && region.chars().all(|ch| ch.is_ascii_alphabetic()))
        .then(|| region.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDevice;

    impl DeviceServices for FakeDevice {
        fn network_country_iso(&self) -> Option<String> {
            Some("de".to_string())
        }
    }

    #[test]
    fn region_from_common_locale_tags() {
        assert_eq!(region_from_locale("en_US.UTF-8"), Some("US".to_string()));
        assert_eq!(region_from_locale("id_ID"), Some("ID".to_string()));
        assert_eq!(region_from_locale("de-DE"), Some("DE".to_string()));
    }

    #[test]
    fn region_missing_from_bare_or_odd_tags() {
        assert_eq!(region_from_locale("C"), None);
        assert_eq!(region_from_locale("POSIX"), None);
        assert_eq!(region_from_locale(""), None);
        assert_eq!(region_from_locale("en_Latn"), None);
    }

    #[test]
    fn no_device_reports_nothing() {
        assert_eq!(NoDevice.line_number(), None);
        assert_eq!(NoDevice.network_country_iso(), None);
    }

    #[test]
    fn trait_defaults_only_override_what_exists() {
        assert_eq!(FakeDevice.line_number(), None);
        assert_eq!(FakeDevice.network_country_iso(), Some("de".to_string()));
    }
}
