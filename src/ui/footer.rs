use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " +/↑: Increment │ -/↓: Decrement │ R: Reset │ Enter: Hello World │ Q: Quit";

pub struct Footer<'a> {
    /// Error from the last handler call, shown instead of the key hints.
    status: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a str>) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, text_style) = match self.status {
            Some(status) => (
                format!(" {}", status),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                HINTS.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
