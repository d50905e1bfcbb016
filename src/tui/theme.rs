//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemePreference;
use crate::scoring::Verdict;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Verdict banner colors
    pub verdict_excellent: Color,
    pub verdict_suitable: Color,
    pub verdict_marginal: Color,
    pub verdict_unsuitable: Color,

    // Suitability colors (traffic light pattern)
    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,
    pub bar_empty: Color,

    // Form colors
    pub field_label: Color,
    pub field_focused: Style,
    pub slider_filled: Color,

    // Criterion breakdown colors
    pub check_pass: Color,
    pub check_fail: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub index_color: Color,
    pub row_selected: Style,
    pub header_style: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_color: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            verdict_excellent: Color::Green,
            verdict_suitable: Color::Cyan,
            verdict_marginal: Color::Yellow,
            verdict_unsuitable: Color::Red,
            score_high: Color::Green,
            score_mid: Color::Yellow,
            score_low: Color::Red,
            bar_empty: Color::DarkGray,
            field_label: Color::Gray,
            field_focused: Style::new().fg(Color::Cyan).bold(),
            slider_filled: Color::Cyan,
            check_pass: Color::Green,
            check_fail: Color::Red,
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            row_selected: Style::new().reversed(),
            header_style: Style::new().bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            tab_active_style: Style::new().fg(Color::Cyan).bold(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_color: Color::Green,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    /// Light theme palette
    pub fn light() -> Self {
        Self {
            verdict_excellent: Color::Green,
            verdict_suitable: Color::Blue,
            verdict_marginal: Color::Magenta,
            verdict_unsuitable: Color::Red,
            score_high: Color::Green,
            score_mid: Color::Magenta,
            score_low: Color::Red,
            bar_empty: Color::Gray,
            field_label: Color::DarkGray,
            field_focused: Style::new().fg(Color::Blue).bold(),
            slider_filled: Color::Blue,
            check_pass: Color::Green,
            check_fail: Color::Red,
            row_alt_bg: Color::Indexed(254),
            index_color: Color::Gray,
            row_selected: Style::new().reversed(),
            header_style: Style::new().bold(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            tab_active_style: Style::new().fg(Color::Blue).bold(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_color: Color::Green,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    pub fn verdict_color(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Excellent => self.verdict_excellent,
            Verdict::Suitable => self.verdict_suitable,
            Verdict::Marginal => self.verdict_marginal,
            Verdict::Unsuitable => self.verdict_unsuitable,
        }
    }

    /// Returns the appropriate color for a suitability score.
    pub fn score_color(&self, suitability: f64) -> Color {
        if suitability >= 70.0 {
            self.score_high
        } else if suitability >= 50.0 {
            self.score_mid
        } else {
            self.score_low
        }
    }
}

/// Resolve the active palette from the configured preference. `Auto` probes
/// the terminal background luminance and falls back to dark when the probe
/// fails (pipes, unsupported terminals).
pub fn resolve_theme(preference: ThemePreference) -> ThemeColors {
    match preference {
        ThemePreference::Dark => ThemeColors::dark(),
        ThemePreference::Light => ThemeColors::light(),
        ThemePreference::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_tiers() {
        let theme = ThemeColors::dark();
        assert_eq!(theme.score_color(100.0), theme.score_high);
        assert_eq!(theme.score_color(70.0), theme.score_high);
        assert_eq!(theme.score_color(60.0), theme.score_mid);
        assert_eq!(theme.score_color(40.0), theme.score_low);
    }

    #[test]
    fn test_explicit_preferences_resolve() {
        // Only the explicit variants are testable off-terminal.
        let dark = resolve_theme(ThemePreference::Dark);
        assert_eq!(dark.slider_filled, ThemeColors::dark().slider_filled);
        let light = resolve_theme(ThemePreference::Light);
        assert_eq!(light.slider_filled, ThemeColors::light().slider_filled);
    }
}
