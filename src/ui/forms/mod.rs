//! Form rendering module
//!
//! - `field_renderer`: text and selection field rendering
//! - `invoice_form`: the dealer / vehicle / customer form

mod field_renderer;
mod invoice_form;

pub use invoice_form::draw_invoice_form;

#[cfg(test)]
pub use invoice_form::{GENERATING_LABEL, SUBMIT_LABEL};
