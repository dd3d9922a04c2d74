use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{contact::Field, ui::CursorPosition};

/// A bordered, labelled input box for one contact form field
#[derive(Debug, Clone)]
pub struct FieldInput<'a> {
    field: Field,
    value: &'a str,
    focused: bool,
    cursor: CursorPosition,
}

impl<'a> FieldInput<'a> {
    pub fn new(field: Field, value: &'a str) -> Self {
        Self {
            field,
            value,
            focused: false,
            cursor: CursorPosition::default(),
        }
    }

    pub fn focused(mut self, cursor: CursorPosition) -> Self {
        self.focused = true;
        self.cursor = cursor;
        self
    }

    /// Rows the box occupies, borders included
    pub fn height(field: Field) -> u16 {
        if field.is_multiline() {
            8
        } else {
            3
        }
    }

    /// Terminal cell where the cursor belongs, if this box has focus
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = Block::bordered().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let (scroll_y, scroll_x) = self.scroll(inner);
        let row = u16::try_from(self.cursor.line)
            .unwrap_or(u16::MAX)
            .saturating_sub(scroll_y)
            .min(inner.height - 1);
        let column = self
            .cursor_column()
            .saturating_sub(scroll_x)
            .min(inner.width - 1);
        Some(Position::new(inner.x + column, inner.y + row))
    }

    /// Display width of the text left of the cursor on its line
    fn cursor_column(&self) -> u16 {
        let line = self.value.split('\n').nth(self.cursor.line).unwrap_or("");
        let before = line
            .char_indices()
            .nth(self.cursor.column)
            .map_or(line, |(i, _)| &line[..i]);
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    // Keep the cursor cell inside the box
    fn scroll(&self, inner: Rect) -> (u16, u16) {
        let rows = u16::try_from(self.cursor.line)
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height.saturating_sub(1));
        let columns = self
            .cursor_column()
            .saturating_sub(inner.width.saturating_sub(1));
        (rows, columns)
    }
}

impl Widget for FieldInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = Line::from(vec![
            Span::raw(format!(" {} ", self.field.label())),
            Span::styled("* ", Style::default().fg(Color::Red)),
        ]);
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.value.is_empty() {
            let placeholder = Span::styled(
                self.field.placeholder(),
                Style::default().fg(Color::DarkGray).italic(),
            );
            Paragraph::new(placeholder).render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self.value.split('\n').map(Line::raw).collect();
        Paragraph::new(lines)
            .scroll(self.scroll(inner))
            .render(inner, buf);
    }
}
