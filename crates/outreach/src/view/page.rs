//! Title bar above each screen's table.

use iced::widget::{Row, Space, button, column, container, row, text};
use iced::{Alignment, Element, Font, Length};

use crate::message::{Message, View};
use crate::style::widgets::{page_style, palette, primary_button_style, toolbar_button_style};

/// Counts shown next to the accounts title: `(active, paused, inactive)`.
pub type WarmupCounts = (usize, usize, usize);

/// Renders a screen: title, summary line, optional error and the table.
pub fn view_page(
    view: View,
    summary: String,
    warmup: Option<WarmupCounts>,
    error: Option<&str>,
    table: Element<'static, Message>,
) -> Element<'static, Message> {
    let p = palette::current();

    let mut title_row = Row::new()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(
            column![
                text(view.title()).size(20).font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
                text(summary).size(13).color(p.text_secondary),
            ]
            .spacing(2),
        )
        .push(Space::new().width(Length::Fill));

    if let Some((active, paused, inactive)) = warmup {
        title_row = title_row.push(
            row![
                text(format!("{active} warming")).size(12).color(p.success),
                text(format!("{paused} paused")).size(12).color(p.warning),
                text(format!("{inactive} inactive")).size(12).color(p.text_muted),
            ]
            .spacing(12),
        );
    }

    match view {
        View::Accounts => {
            title_row = title_row
                .push(
                    button(text("Export CSV").size(13))
                        .padding([8, 14])
                        .style(toolbar_button_style)
                        .on_press(Message::ExportAccounts),
                )
                .push(
                    button(text("Add account").size(13))
                        .padding([8, 14])
                        .style(primary_button_style)
                        .on_press(Message::OpenAccountForm),
                );
        }
        View::Users => {
            title_row = title_row.push(
                button(text("Invite user").size(13))
                    .padding([8, 14])
                    .style(primary_button_style)
                    .on_press(Message::OpenInviteForm),
            );
        }
        View::Verification => {}
    }

    let mut content = column![title_row].spacing(16);
    if let Some(message) = error {
        content = content.push(text(message.to_string()).size(13).color(p.danger));
    }
    content = content.push(table);

    container(content.padding(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(page_style)
        .into()
}
