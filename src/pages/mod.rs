//! Routed pages.

pub mod breaking_news;
pub mod category;
pub mod home;
pub mod login;
pub mod news_detail;
pub mod register;
