//! Form domain layer
//!
//! Type-safe field values and the invoice form built from them.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, InvoiceForm, CUSTOMER_NAME_FIELD, DEALER_FIELD, VEHICLE_FIELD};

#[cfg(test)]
pub use form_state::SUBMIT_ROW;
