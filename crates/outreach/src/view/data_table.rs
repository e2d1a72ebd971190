//! Renders a [`TableLayout`] with iced widgets.
//!
//! Every interactive element maps to a [`TableEvent`] tagged with the
//! owning [`TableId`]; the table itself decides what the event means.

use iced::alignment::Horizontal;
use iced::widget::{
    Column, Row, Space, button, column, container, pick_list, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Font, Length};
use outreach_table::{
    Align, Body, BulkBar, CellContent, EmptyState, Facet, HeaderRow, PageItem, PaginationBar,
    RenderedRow, TableEvent, TableLayout, Toolbar, Tone,
};

use crate::message::Message;
use crate::model::TableId;
use crate::style::widgets::{
    badge_style, card_style, danger_button_style, empty_state_style, ghost_button_style, palette,
    page_button_selected_style, primary_button_style, row_button_style, scrollable_style,
    search_input_style, skeleton_style, table_header_style, table_row_selected_style,
    table_row_style, toolbar_button_style, toolbar_style,
};

const CHECKBOX_WIDTH: f32 = 36.0;
const ACTIONS_WIDTH: f32 = 180.0;

fn on(id: TableId, event: TableEvent) -> Message {
    Message::Table(id, event)
}

const fn cell_width(width: Option<f32>) -> Length {
    match width {
        Some(w) => Length::Fixed(w),
        None => Length::FillPortion(1),
    }
}

const fn horizontal(align: Align) -> Horizontal {
    match align {
        Align::Left => Horizontal::Left,
        Align::Center => Horizontal::Center,
        Align::Right => Horizontal::Right,
    }
}

fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Semibold,
        ..Default::default()
    }
}

/// Renders the whole table card.
pub fn view_table(id: TableId, layout: TableLayout) -> Element<'static, Message> {
    let TableLayout {
        toolbar,
        filter_panel,
        header,
        body,
        pagination,
    } = layout;

    let mut content = Column::new().push(view_toolbar(id, toolbar));
    if !filter_panel.is_empty() {
        content = content.push(view_filter_panel(id, filter_panel));
    }
    content = content
        .push(view_header_row(id, &header))
        .push(view_body(id, body));
    if let Some(bar) = pagination {
        content = content.push(view_pagination(id, bar));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(card_style)
        .into()
}

fn view_toolbar(id: TableId, toolbar: Toolbar) -> Element<'static, Message> {
    let mut bar = Row::new().spacing(12).align_y(Alignment::Center);

    if let Some(search) = toolbar.search {
        bar = bar.push(
            text_input(&search.placeholder, &search.query)
                .width(Length::Fixed(280.0))
                .padding([8, 12])
                .style(search_input_style)
                .on_input(move |query| on(id, TableEvent::SearchChanged(query))),
        );
    }

    if let Some(active) = toolbar.filter_toggle {
        let label = if active == 0 {
            "Filters".to_string()
        } else {
            format!("Filters ({active})")
        };
        bar = bar.push(
            button(text(label).size(13))
                .padding([8, 12])
                .style(toolbar_button_style)
                .on_press(on(id, TableEvent::FilterPanelToggled)),
        );
        if active > 0 {
            bar = bar.push(
                button(text("Clear").size(13))
                    .padding([8, 10])
                    .style(ghost_button_style)
                    .on_press(on(id, TableEvent::FiltersCleared)),
            );
        }
    }

    bar = bar.push(Space::new().width(Length::Fill));

    if let Some(bulk) = toolbar.bulk {
        bar = bar.push(view_bulk_bar(id, bulk));
    }

    container(bar.padding([12, 16]))
        .width(Length::Fill)
        .style(toolbar_style)
        .into()
}

fn view_bulk_bar(id: TableId, bulk: BulkBar) -> Element<'static, Message> {
    let mut bar = Row::new()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text(format!("{} selected", bulk.selected_count)).size(13));

    for action in bulk.actions {
        bar = bar.push(
            button(text(action.label).size(13))
                .padding([6, 12])
                .style(toolbar_button_style)
                .on_press(on(id, TableEvent::BulkActionClicked(action.id))),
        );
    }
    if bulk.delete {
        bar = bar.push(
            button(text("Delete selected").size(13))
                .padding([6, 12])
                .style(danger_button_style)
                .on_press(on(id, TableEvent::BulkDeleteClicked)),
        );
    }
    bar.into()
}

fn view_filter_panel(id: TableId, facets: Vec<Facet>) -> Element<'static, Message> {
    let groups = facets.into_iter().map(|facet| -> Element<'static, Message> {
        let key = facet.key.clone();
        let chips = facet.options.into_iter().map(|option| {
            view_filter_chip(id, key.clone(), option.value, option.checked)
        });
        column![
            row![
                text(facet.label).size(12).font(bold()),
                button(text("Clear").size(11))
                    .padding([2, 6])
                    .style(ghost_button_style)
                    .on_press(on(id, TableEvent::FilterCleared(facet.key))),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
            Row::with_children(chips).spacing(6).wrap(),
        ]
        .spacing(6)
        .into()
    });

    container(Row::with_children(groups).spacing(32).padding([12, 16]))
        .width(Length::Fill)
        .style(toolbar_style)
        .into()
}

fn view_filter_chip(
    id: TableId,
    key: String,
    value: String,
    checked: bool,
) -> Element<'static, Message> {
    let glyph = if checked { "\u{2611}" } else { "\u{2610}" };
    let style = if checked {
        primary_button_style
    } else {
        toolbar_button_style
    };
    button(text(format!("{glyph} {value}")).size(12))
        .padding([4, 10])
        .style(style)
        .on_press(on(id, TableEvent::FilterToggled { key, value }))
        .into()
}

fn view_header_row(id: TableId, header: &HeaderRow) -> Element<'static, Message> {
    let mut cells = Row::new().spacing(8).align_y(Alignment::Center);

    if let Some(state) = header.checkbox {
        cells = cells.push(
            button(text(state.glyph()).size(16))
                .width(Length::Fixed(CHECKBOX_WIDTH))
                .padding([2, 6])
                .style(ghost_button_style)
                .on_press(on(id, TableEvent::AllToggled)),
        );
    }

    for cell in &header.cells {
        let label = match cell.sorted {
            Some(direction) => format!("{} {}", cell.label, direction.indicator()),
            None => cell.label.clone(),
        };
        let label = text(label).size(12).font(bold());
        let content: Element<'static, Message> = if cell.sortable {
            button(label)
                .padding([4, 0])
                .style(ghost_button_style)
                .on_press(on(id, TableEvent::SortClicked(cell.key.clone())))
                .into()
        } else {
            label.into()
        };
        cells = cells.push(
            container(content)
                .width(cell_width(cell.width))
                .align_x(horizontal(cell.align)),
        );
    }

    if header.actions {
        cells = cells.push(
            container(text("Actions").size(12).font(bold()))
                .width(Length::Fixed(ACTIONS_WIDTH))
                .align_x(Horizontal::Right),
        );
    }

    container(cells.padding([10, 16]))
        .width(Length::Fill)
        .style(table_header_style)
        .into()
}

fn view_body(id: TableId, body: Body) -> Element<'static, Message> {
    match body {
        Body::Loading {
            rows,
            columns,
            checkbox,
            actions,
        } => view_skeleton(rows, columns, checkbox, actions),
        Body::Empty(empty) => view_empty(empty),
        Body::Rows(rows) => scrollable(Column::with_children(
            rows.into_iter().map(|r| view_row(id, r)),
        ))
        .height(Length::Fill)
        .style(scrollable_style)
        .into(),
    }
}

fn view_skeleton(
    rows: usize,
    columns: usize,
    checkbox: bool,
    actions: bool,
) -> Element<'static, Message> {
    let bar = |width: Length| -> Element<'static, Message> {
        container(Space::new().height(12))
            .width(width)
            .style(skeleton_style)
            .into()
    };
    let skeleton_row = || -> Element<'static, Message> {
        let mut cells = Row::new().spacing(8).align_y(Alignment::Center);
        if checkbox {
            cells = cells.push(bar(Length::Fixed(16.0)));
            cells = cells.push(Space::new().width(CHECKBOX_WIDTH - 16.0));
        }
        for _ in 0..columns {
            cells = cells.push(bar(Length::FillPortion(1)));
        }
        if actions {
            cells = cells.push(bar(Length::Fixed(ACTIONS_WIDTH)));
        }
        container(cells.padding([14, 16]))
            .width(Length::Fill)
            .style(table_row_style)
            .into()
    };

    Column::with_children((0..rows).map(|_| skeleton_row()))
        .height(Length::Fill)
        .into()
}

fn view_empty(empty: EmptyState) -> Element<'static, Message> {
    container(
        column![
            text(empty.icon).size(40),
            text(empty.title).size(16).font(bold()),
            text(empty.message).size(13).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            }),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(empty_state_style)
    .into()
}

fn view_cell(content: CellContent) -> Element<'static, Message> {
    match content {
        CellContent::Text(value) => text(value).size(13).into(),
        CellContent::Badge { label, tone } => container(text(label).size(11).font(bold()))
            .padding([2, 8])
            .style(badge_style(tone))
            .into(),
        CellContent::Placeholder => text(outreach_table::PLACEHOLDER)
            .size(13)
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            })
            .into(),
    }
}

fn view_row(id: TableId, rendered: RenderedRow) -> Element<'static, Message> {
    let RenderedRow {
        id: row_id,
        selected,
        cells,
        clickable,
        edit,
        delete,
        actions,
        ..
    } = rendered;

    let mut line = Row::new().spacing(8).align_y(Alignment::Center);

    if let Some(checked) = selected {
        let glyph = if checked { "\u{2611}" } else { "\u{2610}" };
        line = line.push(
            button(text(glyph).size(16))
                .width(Length::Fixed(CHECKBOX_WIDTH))
                .padding([2, 6])
                .style(ghost_button_style)
                .on_press(on(id, TableEvent::RowToggled(row_id.clone()))),
        );
    }

    for (align, width, content) in cells {
        line = line.push(
            container(view_cell(content))
                .width(cell_width(width))
                .align_x(horizontal(align)),
        );
    }

    let has_actions = edit || delete || !actions.is_empty();
    if has_actions {
        let mut buttons = Row::new().spacing(4);
        for action in actions {
            let color_tone = action.tone;
            buttons = buttons.push(
                button(text(action.label).size(12).style(move |_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(if color_tone == Tone::Neutral {
                            p.text_secondary
                        } else {
                            p.tone(color_tone)
                        }),
                    }
                }))
                .padding([4, 8])
                .style(ghost_button_style)
                .on_press(on(
                    id,
                    TableEvent::RowActionClicked {
                        action: action.id,
                        id: row_id.clone(),
                    },
                )),
            );
        }
        if edit {
            buttons = buttons.push(
                button(text("Edit").size(12))
                    .padding([4, 8])
                    .style(ghost_button_style)
                    .on_press(on(id, TableEvent::EditClicked(row_id.clone()))),
            );
        }
        if delete {
            buttons = buttons.push(
                button(text("Delete").size(12))
                    .padding([4, 8])
                    .style(danger_button_style)
                    .on_press(on(id, TableEvent::DeleteClicked(row_id.clone()))),
            );
        }
        line = line.push(
            container(buttons)
                .width(Length::Fixed(ACTIONS_WIDTH))
                .align_x(Horizontal::Right),
        );
    }

    let line = line.padding([10, 16]);
    let body: Element<'static, Message> = if clickable {
        button(line)
            .width(Length::Fill)
            .padding(0)
            .style(row_button_style)
            .on_press(on(id, TableEvent::RowClicked(row_id)))
            .into()
    } else {
        line.into()
    };

    let style = if selected == Some(true) {
        table_row_selected_style
    } else {
        table_row_style
    };
    container(body).width(Length::Fill).style(style).into()
}

fn view_pagination(id: TableId, bar: PaginationBar) -> Element<'static, Message> {
    let summary = text(bar.summary()).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let mut pages = Row::new().spacing(4).align_y(Alignment::Center).push(
        button(text("\u{2039} Previous").size(12))
            .padding([6, 10])
            .style(toolbar_button_style)
            .on_press_maybe(bar.can_previous.then(|| on(id, TableEvent::PreviousPage))),
    );
    for item in bar.items {
        pages = pages.push(match item {
            PageItem::Page(n) => {
                let style = if n == bar.current_page {
                    page_button_selected_style
                } else {
                    toolbar_button_style
                };
                Element::from(
                    button(text(n.to_string()).size(12))
                        .padding([6, 10])
                        .style(style)
                        .on_press(on(id, TableEvent::PageSelected(n))),
                )
            }
            PageItem::Ellipsis => Element::from(text("\u{2026}").size(12)),
        });
    }
    pages = pages.push(
        button(text("Next \u{203A}").size(12))
            .padding([6, 10])
            .style(toolbar_button_style)
            .on_press_maybe(bar.can_next.then(|| on(id, TableEvent::NextPage))),
    );

    let page_size = row![
        text("Rows per page").size(12),
        pick_list(bar.page_size_options, Some(bar.page_size), move |size| {
            on(id, TableEvent::PageSizeSelected(size))
        })
        .text_size(12)
        .padding([4, 8]),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(
        row![summary, Space::new().width(Length::Fill), page_size, pages]
            .spacing(16)
            .padding([10, 16])
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(toolbar_style)
    .into()
}
