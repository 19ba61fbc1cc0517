mod device;
mod options;
pub(crate) mod selector;

pub use device::{locale_region, DeviceServices, NoDevice};
pub use options::PhoneInputOptions;
pub use selector::{collapsed_label, list_label, CountrySelect};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phonenumber::PhoneNumber;

use crate::country::{Country, CountryRegistry};
use crate::phone::{self, watcher::NumberWatcher};

/// Single optional observer: receives the current validity.
pub type InputListener = Box<dyn FnMut(bool)>;

/// Which embedded widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Selector,
    Field,
}

/// The embedded phone text field: typed text, example-number placeholder,
/// label and error state.
#[derive(Debug, Clone)]
pub struct TextField {
    pub(crate) buffer: String,
    pub(crate) placeholder: Option<String>,
    pub(crate) label: Option<String>,
    pub(crate) error: Option<String>,
    pub(crate) enabled: bool,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            placeholder: None,
            label: None,
            error: None,
            enabled: true,
        }
    }
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// International phone number input: a country selector, a text field and a
/// live formatter, composed behind one event-driven contract.
///
/// The registry is injected at construction and read-only afterwards. All
/// failure modes (unparseable text, unknown ISO or dial codes, missing device
/// services) are silent no-ops by contract; the only user-visible error
/// channel is the caller-driven [`PhoneInput::set_error`].
pub struct PhoneInput {
    registry: CountryRegistry,
    options: PhoneInputOptions,
    device: Box<dyn DeviceServices>,
    selector: CountrySelect,
    field: TextField,
    watcher: NumberWatcher,
    selected: Option<Country>,
    last_validity: bool,
    focus: Focus,
    enabled: bool,
    validity_listener: Option<InputListener>,
    keyboard_done: Option<InputListener>,
}

impl PhoneInput {
    /// A fresh control: no selection, empty field, no hint. A single-country
    /// registry is selected immediately and its selector disabled.
    pub fn new(registry: CountryRegistry) -> Self {
        let selector = CountrySelect::new(registry.len());
        let mut input = Self {
            registry,
            options: PhoneInputOptions::default(),
            device: Box::new(NoDevice),
            selector,
            field: TextField::default(),
            watcher: NumberWatcher::default(),
            selected: None,
            last_validity: false,
            focus: Focus::Field,
            enabled: true,
            validity_listener: None,
            keyboard_done: None,
        };
        input.apply_attribute_defaults();
        input
    }

    pub fn with_options(mut self, options: PhoneInputOptions) -> Self {
        self.options = options;
        self.field.label = self.options.label.clone();
        self.apply_attribute_defaults();
        self
    }

    pub fn with_device(mut self, device: impl DeviceServices + 'static) -> Self {
        self.device = Box::new(device);
        self
    }

    fn apply_attribute_defaults(&mut self) {
        if self.registry.len() == 1 {
            if let Some(iso2) = self.registry.get(0).map(|country| country.iso2().to_string()) {
                self.set_empty_default(Some(&iso2));
            }
        } else if let Some(iso2) = self.options.default_iso.clone() {
            self.set_empty_default(Some(&iso2));
        }
    }

    /// Resolves the initial value from the device: a reported subscriber
    /// number feeds [`PhoneInput::set_number`]; otherwise the network country
    /// (or, failing that, the locale default) selects an empty field's
    /// country. Device failures never surface.
    pub fn set_default(&mut self) {
        if let Some(line) = self.device.line_number() {
            if !line.is_empty() {
                self.set_number(&line);
                return;
            }
        }
        let network_iso = self.device.network_country_iso();
        self.set_empty_default(network_iso.as_deref());
    }

    /// Selects the registry country matching `iso2` (case-insensitive);
    /// `None` or an empty code falls back to the configured/locale default.
    /// No registry match leaves the selection and hint untouched.
    pub fn set_empty_default(&mut self, iso2: Option<&str>) {
        let iso2 = match iso2 {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => self.default_iso(),
        };
        if let Some(index) = self.registry.position_by_iso2(&iso2) {
            self.apply_selection(index);
        }
    }

    fn default_iso(&self) -> String {
        self.options
            .default_iso
            .clone()
            .or_else(locale_region)
            .unwrap_or_default()
    }

    /// Selection change: update the back-reference, swap in a watcher scoped
    /// to the new region and refresh the example-number hint.
    fn apply_selection(&mut self, index: usize) {
        let Some(country) = self.registry.get(index).cloned() else {
            self.selected = None;
            self.watcher = NumberWatcher::default();
            return;
        };
        self.selector.select(index);
        self.watcher = NumberWatcher::for_iso2(country.iso2());
        self.refresh_example_hint(&country);
        self.selected = Some(country);
    }

    /// Mobile example number for the region, in national format. Regions
    /// without an example leave the previous hint alone.
    fn refresh_example_hint(&mut self, country: &Country) {
        let example = phone::region_of(country.iso2()).and_then(phone::example_mobile);
        if let Some(example) = example {
            self.field.placeholder = Some(phone::format_national(&example));
        }
    }

    fn select_country_by_dial_code(&mut self, dial_code: u16) {
        if let Some(index) = self.registry.position_by_dial_code(dial_code) {
            self.apply_selection(index);
        }
    }

    /// Sets the field from phone text (national or E.164). Unparseable input
    /// changes nothing. A dial code different from the current selection
    /// re-selects the first matching registry country, and the field shows
    /// the national format.
    pub fn set_number(&mut self, number: &str) {
        let Some(parsed) = self.parse_with_selected(number) else {
            return;
        };
        let dial_code = phone::dial_code(&parsed);
        if self.selected.as_ref().map(Country::dial_code) != Some(dial_code) {
            self.select_country_by_dial_code(dial_code);
        }
        self.field.buffer = phone::format_national(&parsed);
        self.notify_validity();
    }

    fn parse_with_selected(&self, text: &str) -> Option<PhoneNumber> {
        let region = self
            .selected
            .as_ref()
            .and_then(|country| phone::region_of(country.iso2()));
        phone::parse_number(text, region)
    }

    /// Current field contents in E.164 format, or `None` when they do not
    /// parse.
    pub fn number(&self) -> Option<String> {
        self.phone_number()
            .map(|number| phone::format_e164(&number))
    }

    /// Alias for [`PhoneInput::number`].
    pub fn text(&self) -> Option<String> {
        self.number()
    }

    /// The literal field contents as displayed.
    pub fn raw_text(&self) -> &str {
        &self.field.buffer
    }

    /// Structured parse of the current field contents.
    pub fn phone_number(&self) -> Option<PhoneNumber> {
        self.parse_with_selected(&self.field.buffer)
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    /// `false` whenever the field does not parse; otherwise the numbering
    /// plan's verdict for the selected region.
    pub fn is_valid(&self) -> bool {
        self.phone_number()
            .map(|number| phone::is_valid_number(&number))
            .unwrap_or(false)
    }

    /// Registers the edge-triggered validity observer: it fires only when a
    /// text update flips validity, not on every keystroke.
    pub fn set_on_validity_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.validity_listener = Some(Box::new(listener));
    }

    /// Fires when the submit action is triggered in the field, with the
    /// current validity.
    pub fn set_on_keyboard_done(&mut self, listener: impl FnMut(bool) + 'static) {
        self.keyboard_done = Some(Box::new(listener));
    }

    /// Sets the field label (the original input-layout hint).
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.field.label = Some(hint.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.field.error.as_deref()
    }

    /// Caller-driven error display; empty or absent text clears it.
    pub fn set_error(&mut self, error: Option<&str>) {
        self.field.error = match error {
            Some(message) if !message.is_empty() => Some(message.to_string()),
            _ => None,
        };
    }

    pub fn set_text_color(&mut self, color: ratatui::style::Color) {
        self.options.text_style = self.options.text_style.fg(color);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.field.enabled = enabled;
        self.selector.set_enabled(enabled && self.registry.len() > 1);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    pub fn options(&self) -> &PhoneInputOptions {
        &self.options
    }

    pub fn selector(&self) -> &CountrySelect {
        &self.selector
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    /// Routes a keystroke to the focused embedded widget. Returns whether
    /// the event was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        if self.selector.is_open() {
            return self.handle_selector_key(key);
        }
        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Selector => Focus::Field,
                    Focus::Field if self.selector.is_enabled() => Focus::Selector,
                    Focus::Field => Focus::Field,
                };
                true
            }
            _ => match self.focus {
                Focus::Selector => self.handle_selector_key(key),
                Focus::Field => self.handle_field_key(key),
            },
        }
    }

    fn handle_selector_key(&mut self, key: &KeyEvent) -> bool {
        if !self.selector.is_enabled() {
            return false;
        }
        if self.selector.is_open() {
            match key.code {
                KeyCode::Up => {
                    self.selector.highlight_previous();
                    true
                }
                KeyCode::Down => {
                    self.selector.highlight_next();
                    true
                }
                KeyCode::Enter => {
                    let index = self.selector.highlighted();
                    self.selector.close();
                    self.apply_selection(index);
                    true
                }
                KeyCode::Esc => {
                    self.selector.close();
                    true
                }
                _ => false,
            }
        } else {
            match key.code {
                KeyCode::Enter => {
                    self.selector.open();
                    true
                }
                _ => false,
            }
        }
    }

    fn handle_field_key(&mut self, key: &KeyEvent) -> bool {
        if !self.field.enabled {
            return false;
        }
        match key.code {
            KeyCode::Enter => {
                let validity = self.is_valid();
                if let Some(listener) = self.keyboard_done.as_mut() {
                    listener(validity);
                }
                true
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                if !ch.is_ascii_digit() && !matches!(ch, '+' | ' ' | '-' | '(' | ')') {
                    return false;
                }
                self.field.buffer.push(ch);
                self.after_text_change();
                true
            }
            KeyCode::Backspace => {
                self.field.buffer.pop();
                self.after_text_change();
                true
            }
            KeyCode::Delete => {
                self.field.buffer.clear();
                self.after_text_change();
                true
            }
            _ => false,
        }
    }

    /// The per-keystroke state machine: reformat via the active watcher,
    /// re-detect the country from the new text (subsequent keystrokes pick up
    /// the new rules; the text just typed is not reformatted again), then
    /// run the validity edge.
    fn after_text_change(&mut self) {
        self.field.buffer = self.watcher.reformat(&self.field.buffer);
        if let Some(dial_code) = self.watcher.detect_dial_code(&self.field.buffer) {
            if self.selected.as_ref().map(Country::dial_code) != Some(dial_code) {
                self.select_country_by_dial_code(dial_code);
            }
        }
        self.notify_validity();
    }

    /// Edge-triggered notification; the recorded validity updates whether or
    /// not it changed.
    fn notify_validity(&mut self) {
        let validity = self.is_valid();
        if validity != self.last_validity {
            if let Some(listener) = self.validity_listener.as_mut() {
                listener(validity);
            }
        }
        self.last_validity = validity;
    }
}
