use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::domain::contact::Recipient;

/// Header telling the visitor who the message goes to
#[derive(Debug, Clone)]
pub struct RecipientCard<'a> {
    recipient: &'a Recipient,
}

impl<'a> RecipientCard<'a> {
    pub const HEIGHT: u16 = 4;

    pub fn new(recipient: &'a Recipient) -> Self {
        Self { recipient }
    }
}

impl Widget for RecipientCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .title(Line::from(" Get in Touch ").bold())
            .border_style(Style::default().fg(Color::Cyan));
        let text = vec![
            Line::from("Send me a message"),
            Line::from(vec![
                Span::styled(
                    self.recipient.display_name.as_str(),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::raw(" <"),
                Span::styled(
                    self.recipient.address.as_str(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(">"),
            ]),
        ];
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
