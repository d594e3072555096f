//! Presentational components: view glue only. No component owns auth
//! state; they read the session from context and call the controller.

pub mod category_sidebar;
pub mod comment_section;
pub mod error_message;
pub mod footer;
pub mod header;
pub mod layout;
pub mod news_card;
pub mod news_list;
pub mod pagination;
pub mod reaction_buttons;
pub mod sorting_filter;
