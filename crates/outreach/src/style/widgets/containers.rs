//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};
use outreach_core::store::ToastKind;
use outreach_table::Tone;

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Header bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Page background behind the cards.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Card holding a table or a form.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Table toolbar (search, filters, bulk bar).
pub fn toolbar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Column header row.
pub fn table_header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        text_color: Some(p.text_secondary),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Data row.
pub fn table_row_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 0.5,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Data row whose checkbox is ticked.
pub fn table_row_selected_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.selected)),
        border: Border {
            color: p.selected_border,
            width: 0.5,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Grey bar of a loading row.
pub fn skeleton_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.skeleton)),
        border: Border {
            radius: radius::SMALL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Empty-state panel.
pub fn empty_state_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_secondary),
        ..Default::default()
    }
}

/// Status pill colored by tone.
pub fn badge_style(tone: Tone) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let color = p.tone(tone);

        container::Style {
            background: Some(Background::Color(Color { a: 0.14, ..color })),
            text_color: Some(color),
            border: Border {
                color: Color { a: 0.35, ..color },
                width: 1.0,
                radius: radius::PILL.into(),
            },
            ..Default::default()
        }
    }
}

/// Notification card colored by severity.
pub fn toast_style(kind: ToastKind) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let accent = match kind {
            ToastKind::Success => p.success,
            ToastKind::Info => p.info,
            ToastKind::Error => p.danger,
        };

        container::Style {
            background: Some(Background::Color(p.surface_elevated)),
            text_color: Some(p.text_primary),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            shadow: shadows::medium(),
            ..Default::default()
        }
    }
}
