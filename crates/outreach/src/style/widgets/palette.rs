//! Color palette with light and dark theme support.
//!
//! Besides surfaces and text, the palette carries one color per badge
//! [`Tone`] so status pills read the same on every page.

use iced::Color;
use outreach_table::Tone;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_elevated: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Badge tones
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub neutral: Color,

    // States
    pub selected: Color,
    pub selected_border: Color,
    pub hover: Color,
    pub skeleton: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadows
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.31, 0.27, 0.90), // Indigo
            primary_light: Color::from_rgb(0.47, 0.44, 0.96),
            primary_dark: Color::from_rgb(0.22, 0.19, 0.74),

            surface: Color::WHITE,
            surface_elevated: Color::WHITE,
            surface_sunken: Color::from_rgb(0.97, 0.975, 0.985),
            background: Color::from_rgb(0.965, 0.97, 0.98),

            text_primary: Color::from_rgb(0.07, 0.09, 0.15),
            text_secondary: Color::from_rgb(0.29, 0.33, 0.41),
            text_muted: Color::from_rgb(0.42, 0.45, 0.50),
            text_on_primary: Color::WHITE,

            success: Color::from_rgb(0.09, 0.64, 0.29),
            warning: Color::from_rgb(0.85, 0.47, 0.02),
            danger: Color::from_rgb(0.86, 0.15, 0.15),
            info: Color::from_rgb(0.15, 0.39, 0.92),
            neutral: Color::from_rgb(0.42, 0.45, 0.50),

            selected: Color::from_rgb(0.93, 0.93, 1.0),
            selected_border: Color::from_rgb(0.65, 0.64, 0.98),
            hover: Color::from_rgb(0.976, 0.98, 0.984),
            skeleton: Color::from_rgb(0.90, 0.91, 0.92),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.92),
            border_medium: Color::from_rgb(0.82, 0.84, 0.86),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.51, 0.55, 0.97),
            primary_light: Color::from_rgb(0.65, 0.71, 0.99),
            primary_dark: Color::from_rgb(0.39, 0.40, 0.95),

            surface: Color::from_rgb(0.12, 0.13, 0.17),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.21),
            surface_sunken: Color::from_rgb(0.09, 0.10, 0.13),
            background: Color::from_rgb(0.07, 0.08, 0.11),

            text_primary: Color::from_rgb(0.95, 0.96, 0.97),
            text_secondary: Color::from_rgb(0.70, 0.73, 0.78),
            text_muted: Color::from_rgb(0.52, 0.55, 0.61),
            text_on_primary: Color::from_rgb(0.07, 0.08, 0.11),

            success: Color::from_rgb(0.29, 0.87, 0.50),
            warning: Color::from_rgb(0.98, 0.75, 0.14),
            danger: Color::from_rgb(0.97, 0.44, 0.44),
            info: Color::from_rgb(0.38, 0.65, 0.98),
            neutral: Color::from_rgb(0.61, 0.64, 0.69),

            selected: Color::from_rgb(0.17, 0.18, 0.30),
            selected_border: Color::from_rgb(0.51, 0.55, 0.97),
            hover: Color::from_rgb(0.16, 0.17, 0.22),
            skeleton: Color::from_rgb(0.20, 0.22, 0.27),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.26),
            border_medium: Color::from_rgb(0.28, 0.30, 0.35),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Badge color for a tone.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Neutral => self.neutral,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
            Tone::Info => self.info,
        }
    }
}

/// Current active palette.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn tones_are_distinct() {
        let p = Palette::light();
        assert_ne!(p.tone(Tone::Success), p.tone(Tone::Danger));
        assert_ne!(p.tone(Tone::Warning), p.tone(Tone::Info));
    }
}
