use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::widget::{collapsed_label, list_label, Focus, PhoneInput};

/// Renders the whole control into `area`: collapsed selector, end margin,
/// text field with label/placeholder/error, and the drop-down overlay when
/// open. Expects roughly four rows.
pub fn draw(frame: &mut Frame<'_>, area: Rect, input: &PhoneInput) {
    let options = input.options();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(options.spinner_width),
            Constraint::Length(options.spinner_end_margin),
            Constraint::Min(10),
        ])
        .split(area);

    draw_selector(frame, columns[0], input);
    draw_field(frame, columns[2], input);

    if input.selector().is_open() {
        draw_dropdown(frame, input);
    }
}

fn draw_selector(frame: &mut Frame<'_>, area: Rect, input: &PhoneInput) {
    let label = collapsed_label(input.selected_country());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(input, Focus::Selector));
    let selector = Paragraph::new(label).block(block);
    frame.render_widget(selector, area);
}

fn draw_field(frame: &mut Frame<'_>, area: Rect, input: &PhoneInput) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(input, Focus::Field));
    if let Some(label) = input.field().label() {
        block = block.title(label.to_string());
    }
    let field = Paragraph::new(field_line(input)).block(block);
    frame.render_widget(field, rows[0]);

    if let Some(error) = input.field().error() {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, rows[1]);
    }

    if input.focus() == Focus::Field && input.is_enabled() && !input.selector().is_open() {
        let cursor_x = rows[0]
            .x
            .saturating_add(1)
            .saturating_add(input.raw_text().width() as u16);
        frame.set_cursor_position((cursor_x, rows[0].y.saturating_add(1)));
    }
}

/// Line shown inside the field: typed text, or the example-number
/// placeholder while empty.
pub fn field_line(input: &PhoneInput) -> Line<'static> {
    let options = input.options();
    if input.raw_text().is_empty() {
        let placeholder = input.field().placeholder().unwrap_or_default().to_string();
        Line::from(Span::styled(placeholder, options.hint_style))
    } else {
        Line::from(Span::styled(input.raw_text().to_string(), options.text_style))
    }
}

/// Drop-down rows, one per registry entry in display order.
pub fn dropdown_items(input: &PhoneInput) -> Vec<String> {
    input
        .registry()
        .iter()
        .map(|country| list_label(Some(country)))
        .collect()
}

fn draw_dropdown(frame: &mut Frame<'_>, input: &PhoneInput) {
    let labels = dropdown_items(input);
    if labels.is_empty() {
        return;
    }
    let max_width = labels
        .iter()
        .map(|label| label.width())
        .max()
        .unwrap_or(10) as u16;
    let width_limit = frame.area().width.saturating_sub(2).max(1);
    let width = max_width.saturating_add(6).min(width_limit);
    let height = labels
        .len()
        .saturating_add(4)
        .min(frame.area().height as usize) as u16;
    let area = popup_rect(frame.area(), width, height.max(3));
    frame.render_widget(Clear, area);

    let items: Vec<ListItem<'static>> = labels.into_iter().map(ListItem::new).collect();
    let mut state = ListState::default();
    state.select(Some(input.selector().highlighted()));

    let title = input
        .options()
        .prompt
        .clone()
        .unwrap_or_else(|| "Country".to_string());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn border_style(input: &PhoneInput, target: Focus) -> Style {
    if input.focus() == target && input.is_enabled() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn popup_rect(container: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(container.width);
    let height = height.min(container.height);
    let x = container.x + (container.width.saturating_sub(width)) / 2;
    let y = container.y + (container.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{Country, CountryRegistry};

    fn test_input() -> PhoneInput {
        let registry = CountryRegistry::from_countries([
            Country::new("Indonesia", "ID", 62),
            Country::new("Malaysia", "MY", 60),
        ]);
        PhoneInput::new(registry)
    }

    #[test]
    fn empty_field_shows_placeholder_with_hint_style() {
        let mut input = test_input();
        input.set_empty_default(Some("ID"));
        let line = field_line(&input);
        let span = line.spans.first().expect("span");
        assert_eq!(span.style.fg, Some(Color::DarkGray));
        assert!(!span.content.contains('+'));
    }

    #[test]
    fn typed_text_uses_text_style() {
        let mut input = test_input();
        input.set_empty_default(Some("ID"));
        input.set_number("+6281234567890");
        let line = field_line(&input);
        let span = line.spans.first().expect("span");
        assert_eq!(span.content.as_ref(), input.raw_text());
        assert_eq!(span.style, input.options().text_style);
    }

    #[test]
    fn dropdown_lists_every_registry_entry_in_order() {
        let input = test_input();
        let items = dropdown_items(&input);
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("Indonesia (+62)"));
        assert!(items[1].contains("Malaysia (+60)"));
    }

    #[test]
    fn popup_rect_is_centered_and_clamped() {
        let container = Rect::new(0, 0, 80, 24);
        let rect = popup_rect(container, 20, 10);
        assert_eq!((rect.x, rect.y), (30, 7));
        let clamped = popup_rect(container, 200, 50);
        assert_eq!((clamped.width, clamped.height), (80, 24));
    }
}
