#![allow(non_snake_case)]
//! Personal portfolio of Kalu Ifechukwu.
//!
//! The page is composed from [`content::Site`] by [`app::app`]. In the
//! browser (`wasm32`) it is mounted by `web::start`; natively the
//! `folio-export` binary writes the fully revealed page as static HTML.

pub mod app;
pub mod content;
pub mod form;
pub mod pages;
pub mod task;
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::{app, app_with};
pub use content::{ContentError, Portfolio, Site};
pub use form::{ContactForm, ContactMessage, FieldError, SubmitOutcome};
