//! Session state: active selection, view routing and generation admission.

mod controller;
mod view;

pub use controller::SessionController;
pub use view::View;

#[cfg(test)]
mod controller_test;
