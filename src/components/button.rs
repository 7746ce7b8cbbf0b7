use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Buttons the wizard steps put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Next,
    Back,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Green,
    Blue,
}

impl ButtonColor {
    fn accent(self) -> Color {
        match self {
            ButtonColor::Green => Color::Green,
            ButtonColor::Blue => Color::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ButtonState {
    Normal,
    Focused,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub id: ButtonId,
    pub label: String,
    pub hotkey: Option<char>, // Alt+key
    pub color: ButtonColor,
    pub state: ButtonState,
    pub area: Option<Rect>, // Set during rendering for click detection
}

impl Button {
    pub fn new(id: ButtonId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            hotkey: None,
            color: ButtonColor::Blue,
            state: ButtonState::Normal,
            area: None,
        }
    }

    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    pub fn matches_hotkey(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if !modifiers.contains(KeyModifiers::ALT) {
            return false;
        }
        match (key, self.hotkey) {
            (KeyCode::Char(c), Some(hotkey)) => c.eq_ignore_ascii_case(&hotkey),
            _ => false,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.area = Some(area);

        let style = match self.state {
            ButtonState::Normal => Style::default().fg(Color::White),
            ButtonState::Focused => Style::default().fg(Color::Yellow),
        };
        let border_style = match self.state {
            ButtonState::Normal => Style::default().fg(self.color.accent()),
            ButtonState::Focused => style,
        };

        let paragraph = Paragraph::new(self.label_line(style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(paragraph, area);
    }

    /// Label with the first occurrence of the hotkey letter in red, or an
    /// `(Alt+X)` hint when the label doesn't contain it.
    fn label_line(&self, base: Style) -> Line<'static> {
        let Some(hotkey) = self.hotkey else {
            return Line::from(Span::styled(self.label.clone(), base));
        };

        match self
            .label
            .char_indices()
            .find(|(_, ch)| ch.eq_ignore_ascii_case(&hotkey))
        {
            Some((idx, ch)) => {
                let after = idx + ch.len_utf8();
                Line::from(vec![
                    Span::styled(self.label[..idx].to_string(), base),
                    Span::styled(ch.to_string(), base.fg(Color::Red)),
                    Span::styled(self.label[after..].to_string(), base),
                ])
            }
            None => Line::from(vec![
                Span::styled(self.label.clone(), base),
                Span::styled(
                    format!(" (Alt+{})", hotkey.to_ascii_uppercase()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        }
    }
}

/// Owns the buttons of one step and resolves key and mouse input to a
/// [`ButtonId`].
#[derive(Debug, Default)]
pub struct ButtonManager {
    buttons: Vec<Button>,
    focused: Option<usize>,
}

impl ButtonManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
        self.focused = None;
    }

    pub fn handle_hotkey(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<ButtonId> {
        self.buttons
            .iter()
            .find(|button| button.matches_hotkey(key, modifiers))
            .map(|button| button.id)
    }

    pub fn handle_mouse_click(&mut self, column: u16, row: u16) -> Option<ButtonId> {
        let idx = self
            .buttons
            .iter()
            .position(|button| button.contains(column, row))?;
        self.focused = Some(idx);
        Some(self.buttons[idx].id)
    }

    pub fn focus(&mut self, id: Option<ButtonId>) {
        self.focused = id.and_then(|id| self.buttons.iter().position(|b| b.id == id));
    }

    /// Renders buttons in insertion order into `areas`.
    pub fn render_buttons(&mut self, f: &mut Frame, areas: &[Rect]) {
        for (idx, button) in self.buttons.iter_mut().enumerate() {
            button.state = if Some(idx) == self.focused {
                ButtonState::Focused
            } else {
                ButtonState::Normal
            };
        }

        for (button, area) in self.buttons.iter_mut().zip(areas) {
            button.render(f, *area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ButtonManager {
        let mut manager = ButtonManager::new();
        manager.add_button(Button::new(ButtonId::Back, "Back").with_hotkey('b'));
        manager.add_button(
            Button::new(ButtonId::Next, "Next")
                .with_hotkey('n')
                .with_color(ButtonColor::Green),
        );
        manager
    }

    #[test]
    fn alt_hotkey_resolves_button() {
        let manager = manager();
        assert_eq!(
            manager.handle_hotkey(KeyCode::Char('N'), KeyModifiers::ALT),
            Some(ButtonId::Next)
        );
        assert_eq!(
            manager.handle_hotkey(KeyCode::Char('n'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn hotkey_letter_is_highlighted_in_label() {
        let button = Button::new(ButtonId::Confirm, "Confirm").with_hotkey('o');
        let line = button.label_line(Style::default());
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "o");

        let hinted = Button::new(ButtonId::Back, "Back").with_hotkey('x');
        let line = hinted.label_line(Style::default());
        assert_eq!(line.spans[1].content, " (Alt+X)");
    }

    #[test]
    fn click_needs_rendered_area() {
        let mut manager = manager();
        assert_eq!(manager.handle_mouse_click(1, 1), None);
        manager.buttons[1].area = Some(Rect::new(10, 5, 8, 3));
        assert_eq!(manager.handle_mouse_click(12, 6), Some(ButtonId::Next));
        assert_eq!(manager.focused, Some(1));
    }
}
