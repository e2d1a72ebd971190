//! Widget styles shared by every page.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use containers::{
    badge_style, card_style, empty_state_style, header_style, page_style, skeleton_style,
    table_header_style, table_row_selected_style, table_row_style, toast_style, toolbar_style,
};

pub use buttons::{
    danger_button_style, ghost_button_style, nav_button_selected_style, nav_button_style,
    page_button_selected_style, primary_button_style, row_button_style, secondary_button_style,
    toolbar_button_style,
};

pub use inputs::{form_input_style, scrollable_style, search_input_style};
