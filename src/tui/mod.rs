//! Terminal front-end: a form to describe the table and a results view.

pub mod app;
pub mod controller;
mod ui;
