//! Output view
//!
//! Persistent log of every svn command line and its output or error.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::keys;
use crate::svn::CommandEvent;
use crate::ui::{components, navigation, theme};

/// Oldest lines are dropped beyond this
const MAX_LINES: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Command,
    Output,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: OutputKind,
    pub text: String,
}

/// Output view state
#[derive(Debug)]
pub struct OutputView {
    lines: Vec<OutputLine>,
    pub scroll_offset: usize,
    /// Keep the newest line visible
    follow: bool,
}

impl Default for OutputView {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputView {
    pub(crate) const DEFAULT_VISIBLE_COUNT: usize = 20;

    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            scroll_offset: 0,
            follow: true,
        }
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Append a command event
    pub fn push_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::Executed { command_line } => {
                self.push(OutputKind::Command, format!("> {}", command_line));
            }
            CommandEvent::Succeeded { output } => {
                for line in output.lines() {
                    self.push(OutputKind::Output, line.to_string());
                }
            }
            CommandEvent::Failed { message } => {
                for line in message.lines() {
                    self.push(OutputKind::Failure, line.to_string());
                }
            }
        }
        if self.lines.len() > MAX_LINES {
            let excess = self.lines.len() - MAX_LINES;
            self.lines.drain(..excess);
            self.scroll_offset = self.scroll_offset.saturating_sub(excess);
        }
    }

    fn push(&mut self, kind: OutputKind, text: String) {
        self.lines.push(OutputLine { kind, text });
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_offset = 0;
        self.follow = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_COUNT);
    }

    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_count: usize) {
        let max = navigation::max_scroll(self.lines.len(), visible_count);
        // Start from where follow mode would render
        if self.follow {
            self.scroll_offset = max;
        }
        match key.code {
            code if keys::is_move_down(code) => {
                self.scroll_offset = navigation::select_next(self.scroll_offset, max);
            }
            code if keys::is_move_up(code) => {
                self.scroll_offset = navigation::select_prev(self.scroll_offset);
            }
            keys::GO_TOP => self.scroll_offset = 0,
            keys::GO_BOTTOM => self.scroll_offset = max,
            keys::HALF_PAGE_DOWN => {
                self.scroll_offset =
                    navigation::half_page(self.scroll_offset, self.lines.len(), visible_count, true);
            }
            keys::HALF_PAGE_UP => {
                self.scroll_offset = navigation::half_page(
                    self.scroll_offset,
                    self.lines.len(),
                    visible_count,
                    false,
                );
            }
            keys::CLEAR_OUTPUT => self.clear(),
            _ => {}
        }
        self.follow = self.scroll_offset >= max;
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(" svn-panel - Output ")
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )
            .centered();
        let block = components::bordered_block(title);

        if self.lines.is_empty() {
            let content =
                components::empty_state("No svn commands run yet.", None).block(block);
            frame.render_widget(content, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        let max = navigation::max_scroll(self.lines.len(), visible);
        self.scroll_offset = if self.follow {
            max
        } else {
            self.scroll_offset.min(max)
        };

        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible)
            .map(|line| {
                let color = match line.kind {
                    OutputKind::Command => theme::output_view::COMMAND,
                    OutputKind::Output => theme::output_view::OUTPUT,
                    OutputKind::Failure => theme::output_view::FAILURE,
                };
                Line::from(line.text.clone()).style(Style::default().fg(color))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
