use crate::country::Country;

/// State of the country selector: current selection plus drop-down list
/// state. Rendering happens in [`crate::ui`]; the labels the two visual
/// variants use are built by [`collapsed_label`] and [`list_label`].
#[derive(Debug, Clone)]
pub struct CountrySelect {
    selected: Option<usize>,
    highlighted: usize,
    open: bool,
    enabled: bool,
    count: usize,
}

impl CountrySelect {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            selected: None,
            highlighted: 0,
            open: false,
            // a list of at most one country is not worth a drop-down
            enabled: count > 1,
            count,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.count {
            self.selected = Some(index);
            self.highlighted = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn open(&mut self) {
        if self.enabled && self.count > 0 {
            self.open = true;
            self.highlighted = self.selected.unwrap_or(0);
        }
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub(crate) fn highlight_previous(&mut self) {
        if self.count == 0 {
            return;
        }
        if self.highlighted == 0 {
            self.highlighted = self.count - 1;
        } else {
            self.highlighted -= 1;
        }
    }

    pub(crate) fn highlight_next(&mut self) {
        if self.count == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % self.count;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.open = false;
        }
    }
}

/// Collapsed selection label: flag plus `+<dial code>`. An unresolved
/// country renders blank rather than failing.
pub fn collapsed_label(country: Option<&Country>) -> String {
    let Some(country) = country else {
        return String::new();
    };
    let flag = country.flag();
    if flag.is_empty() {
        format!("+{}", country.dial_code())
    } else {
        format!("{} +{}", flag, country.dial_code())
    }
}

/// Drop-down row label: flag plus `<name> (+<dial code>)`.
pub fn list_label(country: Option<&Country>) -> String {
    let Some(country) = country else {
        return String::new();
    };
    let flag = country.flag();
    if flag.is_empty() {
        format!("{} (+{})", country.display_name(), country.dial_code())
    } else {
        format!(
            "{} {} (+{})",
            flag,
            country.display_name(),
            country.dial_code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_label_shows_dial_code_and_flag() {
        let country = Country::new("Indonesia", "ID", 62);
        assert_eq!(collapsed_label(Some(&country)), "\u{1F1EE}\u{1F1E9} +62");
    }

    #[test]
    fn list_label_shows_name_and_dial_code() {
        let country = Country::new("Indonesia", "ID", 62);
        assert_eq!(
            list_label(Some(&country)),
            "\u{1F1EE}\u{1F1E9} Indonesia (+62)"
        );
    }

    #[test]
    fn labels_tolerate_absent_country() {
        assert_eq!(collapsed_label(None), "");
        assert_eq!(list_label(None), "");
    }

    #[test]
    fn labels_without_flag_omit_the_icon() {
        let country = Country::new("Atlantis", "X1", 999);
        assert_eq!(collapsed_label(Some(&country)), "+999");
        assert_eq!(list_label(Some(&country)), "Atlantis (+999)");
    }

    #[test]
    fn single_entry_selector_is_disabled() {
        let selector = CountrySelect::new(1);
        assert!(!selector.is_enabled());
        let selector = CountrySelect::new(2);
        assert!(selector.is_enabled());
    }

    #[test]
    fn highlight_wraps_around() {
        let mut selector = CountrySelect::new(3);
        selector.open();
        assert_eq!(selector.highlighted(), 0);
        selector.highlight_previous();
        assert_eq!(selector.highlighted(), 2);
        selector.highlight_next();
        assert_eq!(selector.highlighted(), 0);
    }

    #[test]
    fn open_starts_at_current_selection() {
        let mut selector = CountrySelect::new(3);
        selector.select(2);
        selector.open();
        assert!(selector.is_open());
        assert_eq!(selector.highlighted(), 2);
    }

    #[test]
    fn disabling_closes_the_dropdown() {
        let mut selector = CountrySelect::new(3);
        selector.open();
        selector.set_enabled(false);
        assert!(!selector.is_open());
        selector.open();
        assert!(!selector.is_open());
    }
}
