use ratatui::style::{Color, Modifier, Style};

/// Construction attributes recognized by the control, with their defaults.
///
/// These are the terminal counterparts of the original styling attributes:
/// text and hint colors map to [`Style`]s, the text-size attribute has no
/// counterpart because a terminal cell grid carries no font size.
#[derive(Debug, Clone)]
pub struct PhoneInputOptions {
    /// Width of the country selector column, in cells.
    pub spinner_width: u16,
    /// Gap between the selector and the text field, in cells.
    pub spinner_end_margin: u16,
    /// Title of the country drop-down list.
    pub prompt: Option<String>,
    /// Country pre-selected at construction, by ISO2 code.
    pub default_iso: Option<String>,
    /// Label shown on the text field (the original input-layout hint).
    pub label: Option<String>,
    /// Style of typed text.
    pub text_style: Style,
    /// Style of the example-number placeholder.
    pub hint_style: Style,
}

impl Default for PhoneInputOptions {
    fn default() -> Self {
        Self {
            spinner_width: 12,
            spinner_end_margin: 1,
            prompt: None,
            default_iso: None,
            label: None,
            text_style: Style::default(),
            hint_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }
}

impl PhoneInputOptions {
    pub fn with_spinner_width(mut self, width: u16) -> Self {
        self.spinner_width = width;
        self
    }

    pub fn with_spinner_end_margin(mut self, margin: u16) -> Self {
        self.spinner_end_margin = margin;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_default_iso(mut self, iso2: impl Into<String>) -> Self {
        self.default_iso = Some(iso2.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_style = self.text_style.fg(color);
        self
    }

    pub fn with_hint_style(mut self, style: Style) -> Self {
        self.hint_style = style;
        self
    }

    pub fn with_hint_color(mut self, color: Color) -> Self {
        self.hint_style = self.hint_style.fg(color);
        self
    }
}
