//! Small pure helpers shared by pages and components.

pub mod category;
pub mod date;
pub mod text;
