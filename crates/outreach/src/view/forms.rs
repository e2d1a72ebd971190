//! Connect-account and invite-user forms.

use iced::widget::{
    Column, Space, button, column, container, pick_list, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};
use outreach_core::{Provider, Role, Security};

use crate::message::{AccountFormMessage, InviteFormMessage, Message};
use crate::model::{AccountFormState, InviteFormState};
use crate::style::widgets::{
    card_style, form_input_style, page_style, palette, primary_button_style,
    secondary_button_style,
};

/// Renders the connect-account form.
pub fn view_account_form(state: &AccountFormState) -> Element<'_, Message> {
    let wrap = Message::AccountForm;
    let draft = &state.draft;

    let basic = create_section(
        "Sender",
        column![
            labeled_input(
                "Sender Name",
                "Dana from Acme",
                &draft.name,
                move |s| wrap(AccountFormMessage::NameChanged(s)),
                state.error("name"),
            ),
            labeled_input(
                "Email Address",
                "dana@acme.io",
                &draft.email,
                move |s| wrap(AccountFormMessage::EmailChanged(s)),
                state.error("email"),
            ),
            labeled_pick(
                "Provider",
                &Provider::ALL[..],
                draft.provider,
                move |provider| wrap(AccountFormMessage::ProviderChanged(provider)),
            ),
            labeled_input(
                "Daily Limit",
                "50",
                &state.daily_limit,
                move |s| wrap(AccountFormMessage::DailyLimitChanged(s)),
                state.error("daily_limit"),
            ),
        ]
        .spacing(12),
    );

    let mut content = column![
        form_title("Connect Account", "Add a mailbox to send campaigns from"),
        basic,
    ]
    .spacing(16);

    if draft.provider.needs_servers() {
        content = content
            .push(create_section(
                "Incoming Mail (IMAP)",
                column![
                    server_port_row(
                        (&draft.imap.host, state.error("imap_host")),
                        (&state.imap_port, state.error("imap_port")),
                        "imap.example.com",
                        move |s| wrap(AccountFormMessage::ImapHostChanged(s)),
                        move |s| wrap(AccountFormMessage::ImapPortChanged(s)),
                    ),
                    labeled_pick(
                        "Security",
                        &Security::ALL[..],
                        draft.imap.security,
                        move |security| wrap(AccountFormMessage::ImapSecurityChanged(security)),
                    ),
                    labeled_input(
                        "Username",
                        "dana@acme.io",
                        &draft.imap.username,
                        move |s| wrap(AccountFormMessage::ImapUsernameChanged(s)),
                        state.error("imap_username"),
                    ),
                    labeled_password(
                        "Password",
                        &draft.imap.password,
                        move |s| wrap(AccountFormMessage::ImapPasswordChanged(s)),
                        state.error("imap_password"),
                    ),
                ]
                .spacing(12),
            ))
            .push(create_section(
                "Outgoing Mail (SMTP)",
                column![
                    server_port_row(
                        (&draft.smtp.host, state.error("smtp_host")),
                        (&state.smtp_port, state.error("smtp_port")),
                        "smtp.example.com",
                        move |s| wrap(AccountFormMessage::SmtpHostChanged(s)),
                        move |s| wrap(AccountFormMessage::SmtpPortChanged(s)),
                    ),
                    labeled_pick(
                        "Security",
                        &Security::ALL[..],
                        draft.smtp.security,
                        move |security| wrap(AccountFormMessage::SmtpSecurityChanged(security)),
                    ),
                    labeled_input(
                        "Username",
                        "dana@acme.io",
                        &draft.smtp.username,
                        move |s| wrap(AccountFormMessage::SmtpUsernameChanged(s)),
                        state.error("smtp_username"),
                    ),
                    labeled_password(
                        "Password",
                        &draft.smtp.password,
                        move |s| wrap(AccountFormMessage::SmtpPasswordChanged(s)),
                        state.error("smtp_password"),
                    ),
                ]
                .spacing(12),
            ));
    }

    content = content.push(save_error(state.save_error.as_deref())).push(action_buttons(
        state.is_saving,
        wrap(AccountFormMessage::Cancel),
        wrap(AccountFormMessage::Save),
    ));

    form_page(content)
}

/// Renders the invite-user form.
pub fn view_invite_form(state: &InviteFormState) -> Element<'_, Message> {
    let wrap = Message::InviteForm;
    let invite = &state.invite;

    let details = create_section(
        "Member",
        column![
            labeled_input(
                "Full Name",
                "Ana Ruiz",
                &invite.name,
                move |s| wrap(InviteFormMessage::NameChanged(s)),
                state.error("name"),
            ),
            labeled_input(
                "Email",
                "ana@acme.io",
                &invite.email,
                move |s| wrap(InviteFormMessage::EmailChanged(s)),
                state.error("email"),
            ),
            labeled_input(
                "Phone (optional)",
                "+1 555 010 2030",
                &invite.phone,
                move |s| wrap(InviteFormMessage::PhoneChanged(s)),
                state.error("phone"),
            ),
            labeled_pick("Role", &Role::ALL[..], invite.role, move |role| {
                wrap(InviteFormMessage::RoleChanged(role))
            }),
            labeled_password(
                "Initial Password",
                &invite.password,
                move |s| wrap(InviteFormMessage::PasswordChanged(s)),
                state.error("password"),
            ),
        ]
        .spacing(12),
    );

    let content = column![
        form_title("Invite User", "They can sign in with this password right away"),
        details,
        save_error(state.save_error.as_deref()),
        action_buttons(
            state.is_saving,
            wrap(InviteFormMessage::Cancel),
            wrap(InviteFormMessage::Save),
        ),
    ]
    .spacing(16);

    form_page(content)
}

fn form_page(content: Column<'_, Message>) -> Element<'_, Message> {
    container(scrollable(
        container(content.padding(32).max_width(600)).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(page_style)
    .into()
}

fn form_title<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    let p = palette::current();
    column![
        text(title).size(24).color(p.text_primary),
        text(subtitle).size(14).color(p.text_secondary),
    ]
    .spacing(4)
    .into()
}

fn create_section<'a>(
    title: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let p = palette::current();
    container(
        column![
            text(title).size(16).color(p.text_primary),
            Space::new().height(8),
            content.into(),
        ]
        .spacing(8),
    )
    .padding(20)
    .style(card_style)
    .into()
}

fn with_error<'a>(mut col: Column<'a, Message>, error: Option<&'a str>) -> Element<'a, Message> {
    if let Some(err) = error {
        col = col.push(text(err).size(11).color(palette::current().danger));
    }
    col.into()
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let p = palette::current();
    let col = column![
        text(label).size(12).color(p.text_secondary),
        text_input(placeholder, value)
            .on_input(on_input)
            .padding(10)
            .style(form_input_style),
    ]
    .spacing(4);
    with_error(col, error)
}

fn labeled_password<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let p = palette::current();
    let col = column![
        text(label).size(12).color(p.text_secondary),
        text_input("", value)
            .on_input(on_input)
            .padding(10)
            .secure(true)
            .style(form_input_style),
    ]
    .spacing(4);
    with_error(col, error)
}

fn labeled_pick<'a, T>(
    label: &'a str,
    options: &'a [T],
    selected: T,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    let p = palette::current();
    column![
        text(label).size(12).color(p.text_secondary),
        pick_list(options, Some(selected), on_select)
            .padding(10)
            .width(Length::Fill),
    ]
    .spacing(4)
    .into()
}

/// Host and port side by side, host taking three quarters.
fn server_port_row<'a>(
    (host, host_error): (&'a str, Option<&'a str>),
    (port, port_error): (&'a str, Option<&'a str>),
    host_placeholder: &'a str,
    on_host: impl Fn(String) -> Message + 'a,
    on_port: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let p = palette::current();
    let host_col = column![
        text("Server").size(12).color(p.text_secondary),
        text_input(host_placeholder, host)
            .on_input(on_host)
            .padding(10)
            .style(form_input_style),
    ]
    .spacing(4)
    .width(Length::FillPortion(3));
    let port_col = column![
        text("Port").size(12).color(p.text_secondary),
        text_input("993", port)
            .on_input(on_port)
            .padding(10)
            .style(form_input_style),
    ]
    .spacing(4)
    .width(Length::FillPortion(1));

    row![with_error(host_col, host_error), with_error(port_col, port_error)]
        .spacing(12)
        .into()
}

fn save_error(error: Option<&str>) -> Element<'_, Message> {
    error.map_or_else(
        || Space::new().height(0).into(),
        |message| {
            container(text(message).size(14).color(palette::current().danger))
                .padding(10)
                .into()
        },
    )
}

fn action_buttons(is_saving: bool, cancel: Message, save: Message) -> Element<'static, Message> {
    row![
        button(text("Cancel").size(14))
            .on_press(cancel)
            .padding([10, 20])
            .style(secondary_button_style),
        Space::new().width(Length::Fill),
        button(text(if is_saving { "Saving..." } else { "Save" }).size(14))
            .on_press_maybe((!is_saving).then_some(save))
            .padding([10, 20])
            .style(primary_button_style),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
