//! Notification stack in the bottom-right corner.

use iced::widget::{Column, button, container, row, text};
use iced::{Alignment, Element, Length};
use outreach_core::store::{Toast, ToastKind};

use crate::message::Message;
use crate::style::widgets::{ghost_button_style, toast_style};

/// Renders the visible toasts, newest at the bottom.
pub fn view_toasts(toasts: &[&Toast]) -> Element<'static, Message> {
    let cards = toasts.iter().map(|toast| -> Element<'static, Message> {
        let glyph = match toast.kind {
            ToastKind::Success => "\u{2714}",
            ToastKind::Info => "\u{2139}",
            ToastKind::Error => "\u{26A0}",
        };
        container(
            row![
                text(glyph).size(14),
                text(toast.message.clone()).size(13).width(Length::Fill),
                button(text("\u{2715}").size(12))
                    .padding([2, 6])
                    .style(ghost_button_style)
                    .on_press(Message::DismissToast(toast.id)),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .width(Length::Fixed(340.0))
        .padding([10, 14])
        .style(toast_style(toast.kind))
        .into()
    });

    container(Column::with_children(cards).spacing(8))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
}
