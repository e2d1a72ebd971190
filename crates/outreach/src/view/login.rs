//! Sign-in screen.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Alignment, Element, Font, Length};

use crate::message::{LoginMessage, Message};
use crate::model::LoginForm;
use crate::style::widgets::{card_style, form_input_style, page_style, palette, primary_button_style};

/// Renders the sign-in card centered on the page.
pub fn view_login(
    form: &LoginForm,
    signing_in: bool,
    error: Option<&str>,
) -> Element<'static, Message> {
    let p = palette::current();

    let heading = text("Sign in to Outreach").size(22).font(Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    });

    let email = text_input("you@company.com", &form.email)
        .padding(10)
        .style(form_input_style)
        .on_input(|value| Message::Login(LoginMessage::EmailChanged(value)))
        .on_submit(Message::Login(LoginMessage::Submit));

    let password = text_input("Password", &form.password)
        .secure(true)
        .padding(10)
        .style(form_input_style)
        .on_input(|value| Message::Login(LoginMessage::PasswordChanged(value)))
        .on_submit(Message::Login(LoginMessage::Submit));

    let email_hint: Element<'static, Message> = form.email_hint().map_or_else(
        || Space::new().height(0).into(),
        |hint| text(hint).size(12).color(p.danger).into(),
    );

    let error_display: Element<'static, Message> = error.map_or_else(
        || Space::new().height(0).into(),
        |message| text(message.to_string()).size(13).color(p.danger).into(),
    );

    let label = if signing_in { "Signing in..." } else { "Sign in" };
    let submit = button(
        container(text(label).size(14))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([10, 20])
    .style(primary_button_style)
    .on_press_maybe(
        (!signing_in && form.can_submit()).then_some(Message::Login(LoginMessage::Submit)),
    );

    let card = container(
        column![
            heading,
            Space::new().height(8),
            text("Email").size(12).color(p.text_secondary),
            email,
            email_hint,
            text("Password").size(12).color(p.text_secondary),
            password,
            error_display,
            Space::new().height(8),
            submit,
        ]
        .spacing(6)
        .align_x(Alignment::Start),
    )
    .width(Length::Fixed(380.0))
    .padding(28)
    .style(card_style);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(page_style)
        .into()
}
