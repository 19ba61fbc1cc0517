use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Terminal,
};

use crate::country::CountryRegistry;
use crate::ui;
use crate::widget::{DeviceServices, Focus, NoDevice, PhoneInput, PhoneInputOptions};

const HELP_TEXT: &str = "Tab switch focus • Enter open list / submit • Ctrl+Q quit";
const READY_STATUS: &str = "Enter a phone number.";

/// Terminal runner for a standalone phone input: construct, `run()`, get the
/// submitted number in E.164 format (or `None` when the user quit).
pub struct PhoneInputUI {
    registry: CountryRegistry,
    title: Option<String>,
    options: PhoneInputOptions,
    device: Box<dyn DeviceServices>,
}

impl PhoneInputUI {
    pub fn new(registry: CountryRegistry) -> Self {
        Self {
            registry,
            title: None,
            options: PhoneInputOptions::default(),
            device: Box::new(NoDevice),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: PhoneInputOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_device(mut self, device: impl DeviceServices + 'static) -> Self {
        self.device = Box::new(device);
        self
    }

    pub fn run(self) -> Result<Option<String>> {
        let PhoneInputUI {
            registry,
            title,
            options,
            device,
        } = self;

        let mut input = PhoneInput::new(registry)
            .with_options(options)
            .with_device(device);
        input.set_default();

        let mut app = App::new(input, title);
        app.run()
    }
}

struct App {
    input: PhoneInput,
    title: Option<String>,
    status_message: String,
    should_quit: bool,
    result: Option<String>,
}

impl App {
    fn new(input: PhoneInput, title: Option<String>) -> Self {
        Self {
            input,
            title,
            status_message: READY_STATUS.to_string(),
            should_quit: false,
            result: None,
        }
    }

    fn run(&mut self) -> Result<Option<String>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(self.result.take())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(frame.area());

        if let Some(title) = &self.title {
            frame.render_widget(Paragraph::new(title.clone()), rows[0]);
        }
        ui::draw(frame, rows[1], &self.input);
        let status = Paragraph::new(format!("{} — {}", self.status_message, HELP_TEXT))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(status, rows[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            self.result = None;
            return;
        }

        let submitting = key.code == KeyCode::Enter
            && self.input.focus() == Focus::Field
            && !self.input.selector().is_open();
        self.input.handle_key(&key);

        if submitting {
            if let Some(number) = self.input.number() {
                if self.input.is_valid() {
                    self.result = Some(number);
                    self.should_quit = true;
                    return;
                }
            }
            self.status_message = "That phone number is not valid.".to_string();
        } else {
            self.status_message = READY_STATUS.to_string();
        }
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}
