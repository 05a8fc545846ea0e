//! Rendering for the shell
//!
//! Draws a tab header, the active tool's body and a footer with key hints
//! and the last status message. Rendering reads [`ShellState`] and never
//! mutates it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::state::{AspectField, ShellState, ToolId};
use super::themes::Theme;
use crate::core::aspect::RatioPreset;
use crate::core::contrast::ContrastOutcome;
use crate::core::Color;

const SWATCH: &str = "      ";

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, frame: &mut Frame, state: &ShellState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.size());

        self.render_tabs(frame, chunks[0], state);
        match state.active {
            ToolId::Aspect => self.render_aspect(frame, chunks[1], state),
            ToolId::Contrast => self.render_contrast(frame, chunks[1], state),
            ToolId::Typography => self.render_typography(frame, chunks[1], state),
        }
        self.render_footer(frame, chunks[2], state);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, state: &ShellState) {
        let titles: Vec<Line> = ToolId::ALL
            .iter()
            .enumerate()
            .map(|(i, tool)| Line::from(format!("F{} {}", i + 1, tool.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" designkit ", self.theme.title()))
                    .border_style(self.theme.border(false)),
            )
            .style(self.theme.text_muted())
            .highlight_style(self.theme.selected())
            .select(state.active.index());

        frame.render_widget(tabs, area);
    }

    fn panel(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(format!(" {} ", title), self.theme.title()))
            .border_style(self.theme.border(true))
    }

    fn input_line(&self, label: &str, value: &str, focused: bool, suffix: &str) -> Line<'static> {
        let marker = if focused { "> " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let style = if focused { self.theme.selected() } else { self.theme.text() };

        Line::from(vec![
            Span::styled(format!("{}{:<8}", marker, label), self.theme.text_muted()),
            Span::styled(format!("{}{}", value, cursor), style),
            Span::styled(suffix.to_string(), self.theme.text_muted()),
        ])
    }

    fn render_aspect(&self, frame: &mut Frame, area: Rect, state: &ShellState) {
        let aspect = &state.aspect;

        let mut presets = vec![Span::styled("  Ratio   ", self.theme.text_muted())];
        for (i, preset) in aspect.presets.iter().enumerate() {
            if i == aspect.preset_index {
                presets.push(Span::styled(format!("[{}]", preset.label()), self.theme.selected()));
            } else {
                presets.push(Span::styled(format!(" {} ", preset.label()), self.theme.text()));
            }
            presets.push(Span::raw(" "));
        }

        let mut lines = vec![
            Line::from(presets),
            Line::from(""),
            self.input_line("Width", &aspect.width, aspect.focus == AspectField::Width, " px"),
            self.input_line("Height", &aspect.height, aspect.focus == AspectField::Height, " px"),
            Line::from(""),
        ];

        if aspect.preset() == RatioPreset::Custom {
            lines.push(Line::from(Span::styled(
                "  Custom ratio: width and height are independent",
                self.theme.text_muted(),
            )));
        }

        let paragraph = Paragraph::new(lines).block(self.panel(ToolId::Aspect.title()));
        frame.render_widget(paragraph, area);
    }

    fn render_contrast(&self, frame: &mut Frame, area: Rect, state: &ShellState) {
        let contrast = &state.contrast;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let rows: Vec<Line> = contrast
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let selected = i == contrast.selected;
                let swatch = match Color::parse(row) {
                    Ok(color) => Span::styled(SWATCH, self.theme.swatch(color)),
                    Err(_) => Span::styled(" ?    ", self.theme.error()),
                };
                let style = if selected { self.theme.selected() } else { self.theme.text() };
                let cursor = if selected { "_" } else { "" };

                Line::from(vec![
                    Span::raw(if selected { "> " } else { "  " }),
                    swatch,
                    Span::raw(" "),
                    Span::styled(format!("{}{}", row, cursor), style),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(rows).block(self.panel("Foreground colors")),
            columns[0],
        );

        let title = if contrast.stale { "Best backgrounds (updating)" } else { "Best backgrounds" };
        let results = match &contrast.outcome {
            ContrastOutcome::NoForegroundColors => vec![Line::from(Span::styled(
                "  Enter at least one valid hex color (#RGB or #RRGGBB)",
                self.theme.text_muted(),
            ))],
            ContrastOutcome::Ranked(ranked) => ranked
                .iter()
                .enumerate()
                .map(|(i, result)| {
                    Line::from(vec![
                        Span::styled(format!("  {}. ", i + 1), self.theme.text_muted()),
                        Span::styled(SWATCH, self.theme.swatch(result.background_color)),
                        Span::styled(format!(" {}  ", result.background_color), self.theme.text_bold()),
                        Span::styled(format!("{:>8}  ", result.ratio_label()), self.theme.text()),
                        Span::styled(result.tier.as_str(), self.theme.tier(result.tier)),
                    ])
                })
                .collect(),
        };

        frame.render_widget(
            Paragraph::new(results).block(self.panel(title)).wrap(Wrap { trim: false }),
            columns[1],
        );
    }

    fn render_typography(&self, frame: &mut Frame, area: Rect, state: &ShellState) {
        let typography = &state.typography;

        let mut anchors = vec![Span::styled("  Anchor  ", self.theme.text_muted())];
        for anchor in crate::core::typography::ScaleAnchor::ALL {
            let label = anchor.as_str();
            if anchor == typography.anchor {
                anchors.push(Span::styled(format!("[{}]", label), self.theme.selected()));
            } else {
                anchors.push(Span::styled(format!(" {} ", label), self.theme.text()));
            }
            anchors.push(Span::raw(" "));
        }

        let mut lines = vec![
            self.input_line("Base", &typography.base, true, " px"),
            Line::from(anchors),
            Line::from(""),
        ];

        match &typography.scale {
            Some(scale) => {
                for (i, step) in scale.iter().enumerate() {
                    let style = if i == typography.selected { self.theme.selected() } else { self.theme.text() };
                    let marker = if i == typography.selected { "> " } else { "  " };
                    lines.push(Line::from(vec![
                        Span::raw(marker),
                        Span::styled(format!("{:<4}", step.label), self.theme.text_muted()),
                        Span::styled(step.css_value(), style),
                    ]));
                }
            }
            None => lines.push(Line::from(Span::styled(
                "  Enter a positive base size",
                self.theme.text_muted(),
            ))),
        }

        let paragraph = Paragraph::new(lines).block(self.panel(ToolId::Typography.title()));
        frame.render_widget(paragraph, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &ShellState) {
        let hints = match state.active {
            ToolId::Aspect => "←/→ ratio  ↑/↓ field  ^Y copy",
            ToolId::Contrast => "↑/↓ row  ^N add  ^D remove  ^Y copy best",
            ToolId::Typography => "←/→ anchor  ↑/↓ step  ^Y copy",
        };

        let mut spans = vec![
            Span::styled(hints, self.theme.text_muted()),
            Span::styled("  Tab switch  Esc quit", self.theme.text_muted()),
        ];
        if let Some(status) = &state.status {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(status.clone(), self.theme.text_bold()));
        }

        let footer = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).border_style(self.theme.border(false)));
        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::terminal::state::{ShellAction, TextEdit};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &ShellState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = Renderer::new(Theme::default());

        terminal.draw(|frame| renderer.render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_contrast_results_are_listed() {
        let state = ShellState::new(&Config::default(), ToolId::Contrast, vec!["#777".to_string()]);
        let screen = draw(&state);

        assert!(screen.contains("Best backgrounds"));
        assert!(screen.contains("#777"));

        // black gives the best worst case for #777, just over the AA line
        let top = screen.lines().find(|line| line.contains("1. ")).unwrap();
        assert!(top.contains("#000000"));
        assert!(top.contains("4.69:1  AA"));
        assert!(!top.contains("AAA"));
    }

    #[test]
    fn test_contrast_empty_state() {
        let mut state = ShellState::new(&Config::default(), ToolId::Contrast, vec!["nope".to_string()]);
        state.apply(ShellAction::Recompute);
        let screen = draw(&state);

        assert!(screen.contains("Enter at least one valid hex color"));
        assert!(!screen.contains("1. "));
    }

    #[test]
    fn test_pending_recompute_is_flagged() {
        let mut state = ShellState::new(&Config::default(), ToolId::Contrast, Vec::new());
        state.apply(ShellAction::Edit(TextEdit::Backspace));
        assert!(draw(&state).contains("(updating)"));
    }

    #[test]
    fn test_aspect_view() {
        let mut state = ShellState::new(&Config::default(), ToolId::Aspect, Vec::new());
        for c in "1920".chars() {
            state.apply(ShellAction::Edit(TextEdit::Insert(c)));
        }
        let screen = draw(&state);

        assert!(screen.contains("[16:9]"));
        assert!(screen.contains("1920"));
        assert!(screen.contains("1080"));
    }

    #[test]
    fn test_typography_view_and_status() {
        let mut state = ShellState::new(&Config::default(), ToolId::Typography, Vec::new());
        state.set_status("Copied 16px");
        let screen = draw(&state);

        assert!(screen.contains("[smallest]"));
        assert!(screen.contains("109.7px"));
        assert!(screen.contains("Copied 16px"));
    }
}
