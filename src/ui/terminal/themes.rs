//! Colors and styles for the shell

use ratatui::style::{Color, Modifier, Style};

use crate::core::contrast::ComplianceTier;
use crate::core::Color as Rgb;

/// Shell color scheme
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub accent: Color,
    pub border: Color,
    pub muted: Color,
    pub text: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            border: Color::DarkGray,
            muted: Color::Gray,
            text: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text_bold(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Highlight for the row or field that receives typing
    pub fn selected(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.danger)
    }

    /// Badge style for a compliance tier
    pub fn tier(&self, tier: ComplianceTier) -> Style {
        let color = match tier {
            ComplianceTier::Aaa => self.success,
            ComplianceTier::Aa => self.warning,
            ComplianceTier::Fail => self.danger,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// A cell painted in `color`, used as a color swatch
    pub fn swatch(&self, color: Rgb) -> Style {
        Style::default().bg(Color::Rgb(color.r, color.g, color.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.tier(ComplianceTier::Aaa).fg, Some(Color::Green));
        assert_eq!(theme.tier(ComplianceTier::Aa).fg, Some(Color::Yellow));
        assert_eq!(theme.tier(ComplianceTier::Fail).fg, Some(Color::Red));
    }

    #[test]
    fn test_swatch_uses_true_color() {
        let theme = Theme::default();
        let style = theme.swatch(Rgb { r: 0x11, g: 0x22, b: 0x33 });
        assert_eq!(style.bg, Some(Color::Rgb(0x11, 0x22, 0x33)));
    }
}
