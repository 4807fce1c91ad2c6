//! Terminal rendition of the counter view.

use crate::counter::{CounterHandlers, CounterProps};
use crate::ui::theme::{ACCENT, BUTTON_BG, GLOBAL_BORDER, HEADER_TEXT};
use crate::view::View;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Retained output of the last render.
///
/// `render` turns props into text; drawing a frame only copies that text
/// to the screen, so frames between state changes cost no serialization.
#[derive(Debug, Default)]
pub struct CounterView {
    props_json: String,
    count: i64,
}

impl CounterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The props as last rendered, pretty-printed as JSON.
    pub fn props_json(&self) -> &str {
        &self.props_json
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Count: ", text_style),
                Span::styled(
                    self.count.to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "[ Hello World ]",
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(BUTTON_BG)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(
            self.props_json
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), text_style))),
        );

        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Props ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl View for CounterView {
    type Props = CounterProps;
    type Handlers = CounterHandlers;

    fn render(&mut self, props: &CounterProps, _handlers: &CounterHandlers) {
        self.count = props.count;
        self.props_json = serde_json::to_string_pretty(props)
            .unwrap_or_else(|err| format!("<props not serializable: {}>", err));
    }
}
