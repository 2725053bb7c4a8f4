//! Client side of the contact form: the draft being edited, the visible
//! submission status and the call to `/api/contact`.

mod api;
mod controller;
mod field;

pub use api::*;
pub use controller::*;
pub use field::*;
