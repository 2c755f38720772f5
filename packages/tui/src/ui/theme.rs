use keyscope_core::{DifficultyBand, InsightTone, RatioBand, ThemeMode};
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::Reset,
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Gray,
                accent: Color::Blue,
                primary: Color::Blue,
                secondary: Color::Magenta,
                success: Color::Green,
                warning: Color::Yellow,
                danger: Color::Red,
                info: Color::Cyan,
            },
            ThemeMode::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                border: Color::DarkGray,
                accent: Color::LightCyan,
                primary: Color::LightBlue,
                secondary: Color::LightMagenta,
                success: Color::LightGreen,
                warning: Color::LightYellow,
                danger: Color::LightRed,
                info: Color::Cyan,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background_contrast())
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn background_contrast(&self) -> Color {
        match self.background {
            Color::Black => Color::Black,
            _ => Color::White,
        }
    }

    pub fn ratio_band(&self, band: RatioBand) -> Style {
        let color = match band {
            RatioBand::BlueOcean => self.success,
            RatioBand::Moderate => self.warning,
            RatioBand::RedOcean => self.danger,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn difficulty_band(&self, band: DifficultyBand) -> Style {
        let color = match band {
            DifficultyBand::Easy => self.success,
            DifficultyBand::Medium => self.warning,
            DifficultyBand::Hard => self.danger,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn insight(&self, tone: InsightTone) -> Style {
        match tone {
            InsightTone::Success => Style::default().fg(self.success),
            InsightTone::Info => Style::default().fg(self.info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_have_distinct_palettes() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Light),
            Palette::for_mode(ThemeMode::Dark)
        );
    }

    #[test]
    fn test_band_styles_follow_severity() {
        let palette = Palette::for_mode(ThemeMode::Dark);
        assert_eq!(palette.ratio_band(RatioBand::BlueOcean).fg, Some(palette.success));
        assert_eq!(palette.ratio_band(RatioBand::RedOcean).fg, Some(palette.danger));
        assert_eq!(palette.difficulty_band(DifficultyBand::Medium).fg, Some(palette.warning));
    }
}
