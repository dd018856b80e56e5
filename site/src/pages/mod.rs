//! Page sections, top to bottom.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;
