//! Scrollable viewer for rendered output.
//!
//! Shows a [`StyledBuffer`] in a bordered, scrollable pane with the verdict
//! on a status line underneath, using ratatui/crossterm.

mod keys;

pub use keys::{handle_key, KeyResult};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use crate::config::ViewerConfig;
use crate::surface::StyledBuffer;
use crate::theme::{current_theme, Palette, Theme};

/// Columns per tab stop when laying out text.
pub const TAB_WIDTH: usize = 8;

/// Scroll position of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    /// First visible line
    pub offset: usize,
    /// Total number of lines
    pub line_count: usize,
    /// Visible rows of text
    pub height: usize,
    /// Lines per arrow key
    pub step: usize,
}

impl ViewerState {
    pub fn new(line_count: usize, step: usize) -> Self {
        Self {
            offset: 0,
            line_count,
            height: 0,
            step: step.max(1),
        }
    }

    pub fn max_offset(&self) -> usize {
        self.line_count.saturating_sub(self.height)
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Update the visible height, keeping the offset in range.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Convert buffer lines to ratatui lines, expanding tabs and dropping
/// carriage returns.
pub fn to_lines(buffer: &StyledBuffer, palette: &Palette) -> Vec<Line<'static>> {
    buffer
        .lines()
        .into_iter()
        .map(|fragments| {
            let mut column = 0;
            let spans: Vec<Span<'static>> = fragments
                .iter()
                .map(|f| {
                    let text = expand_tabs(&f.text, &mut column);
                    Span::styled(text, palette.style(f.style))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn expand_tabs(text: &str, column: &mut usize) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' => {
                let spaces = TAB_WIDTH - (*column % TAB_WIDTH);
                out.extend(std::iter::repeat(' ').take(spaces));
                *column += spaces;
            }
            '\r' => {}
            _ => {
                out.push(ch);
                *column += 1;
            }
        }
    }
    out
}

/// Full-screen viewer over rendered text.
#[derive(Debug)]
pub struct Viewer {
    lines: Vec<Line<'static>>,
    title: String,
    status: String,
    show_status: bool,
    theme: Theme,
    state: ViewerState,
}

impl Viewer {
    pub fn new(
        buffer: &StyledBuffer,
        palette: &Palette,
        title: impl Into<String>,
        status: impl Into<String>,
        config: &ViewerConfig,
    ) -> Self {
        let lines = to_lines(buffer, palette);
        let state = ViewerState::new(lines.len(), config.scroll_step as usize);
        Self {
            lines,
            title: title.into(),
            status: status.into(),
            show_status: config.show_status,
            theme: current_theme(),
            state,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewerState {
        &mut self.state
    }

    fn layout(&self, area: Rect) -> (Rect, Option<Rect>) {
        if self.show_status {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        }
    }

    /// Draw one frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let (text_area, status_area) = self.layout(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.title),
                self.theme.accent_bold_style(),
            ));
        self.state
            .set_height(block.inner(text_area).height as usize);

        let offset = u16::try_from(self.state.offset).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(self.lines.clone())
            .block(block)
            .scroll((offset, 0));
        frame.render_widget(paragraph, text_area);

        if let Some(area) = status_area {
            let position = format!(
                "  {}/{}  q quit  \u{2191}\u{2193} scroll  PgUp/PgDn page",
                (self.state.offset + 1).min(self.lines.len().max(1)),
                self.lines.len()
            );
            let status = Line::from(vec![
                Span::styled(self.status.clone(), self.status_style()),
                Span::styled(position, self.theme.text_secondary_style()),
            ]);
            frame.render_widget(Paragraph::new(status), area);
        }
    }

    fn status_style(&self) -> ratatui::style::Style {
        if self.status.starts_with('(') {
            self.theme.error_style()
        } else {
            self.theme.success_style()
        }
    }

    /// Run the event loop until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    #[cfg(not(tarpaulin_include))]
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if handle_key(&mut self.state, key) == KeyResult::Quit {
                    return Ok(());
                }
            }
        }
    }
}
