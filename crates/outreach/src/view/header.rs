//! Header with navigation, refresh, theme toggle and sign-out.

use iced::widget::{Row, Space, button, container, row, text};
use iced::{Alignment, Element, Font, Length};

use crate::message::{Message, View};
use crate::style::widgets::palette::{self, ThemeMode};
use crate::style::widgets::{
    header_style, nav_button_selected_style, nav_button_style, secondary_button_style,
};

/// Renders the application header.
pub fn view_header(
    current: View,
    user_name: Option<&str>,
    theme_mode: ThemeMode,
    is_loading: bool,
) -> Element<'static, Message> {
    let title = text("Outreach")
        .size(22)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let tabs = Row::with_children(View::ALL.into_iter().map(|view| -> Element<'static, Message> {
        let style = if view == current {
            nav_button_selected_style
        } else {
            nav_button_style
        };
        button(text(view.title()).size(14))
            .padding([8, 14])
            .style(style)
            .on_press(Message::NavigateTo(view))
            .into()
    }))
    .spacing(4);

    let muted = |_theme: &iced::Theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    };

    let refresh_btn = button(text("\u{21BB}").size(18).style(muted))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press_maybe((!is_loading).then_some(Message::Refresh));

    let theme_glyph = match theme_mode {
        ThemeMode::Light => "\u{263E}",
        ThemeMode::Dark => "\u{2600}",
    };
    let theme_btn = button(text(theme_glyph).size(18).style(muted))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press(Message::ToggleTheme);

    let user = text(user_name.unwrap_or("Signed in").to_string())
        .size(13)
        .style(muted);

    let sign_out = button(text("Sign out").size(13))
        .padding([6, 12])
        .style(secondary_button_style)
        .on_press(Message::SignOut);

    container(
        row![
            title,
            Space::new().width(24),
            tabs,
            Space::new().width(Length::Fill),
            refresh_btn,
            theme_btn,
            user,
            sign_out,
        ]
        .spacing(12)
        .padding([12, 20])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}
