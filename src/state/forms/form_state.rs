//! Form state management and the invoice form

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the dealer selection
pub const DEALER_FIELD: usize = 0;
/// Index of the vehicle selection
pub const VEHICLE_FIELD: usize = 1;
/// Index of the customer name input
pub const CUSTOMER_NAME_FIELD: usize = 2;
/// Index of the submit button row
pub const SUBMIT_ROW: usize = 3;

/// The dealer / vehicle / customer form
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    pub dealer: FormField,
    pub vehicle: FormField,
    pub customer_name: FormField,
    pub active_field_index: usize,
}

impl InvoiceForm {
    pub fn new() -> Self {
        Self {
            dealer: FormField::selection("Dealer", "Select Dealer"),
            vehicle: FormField::selection("Vehicle", "Select Vehicle"),
            customer_name: FormField::text("Customer Name", "Customer Name"),
            active_field_index: DEALER_FIELD,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Returns true if no required field is empty
    pub fn is_complete(&self) -> bool {
        !self.dealer.is_empty() && !self.vehicle.is_empty() && !self.customer_name.is_empty()
    }

    /// Cycle the active selection field. `counts` is (dealer options, vehicle options).
    pub fn cycle_active_selection(&mut self, counts: (usize, usize), forward: bool) {
        match self.active_field_index {
            DEALER_FIELD => self.dealer.cycle(counts.0, forward),
            VEHICLE_FIELD => self.vehicle.cycle(counts.1, forward),
            _ => {}
        }
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for InvoiceForm {
    fn field_count(&self) -> usize {
        4 // dealer, vehicle, customer name, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            DEALER_FIELD => Some(&mut self.dealer),
            VEHICLE_FIELD => Some(&mut self.vehicle),
            CUSTOMER_NAME_FIELD => Some(&mut self.customer_name),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            DEALER_FIELD => Some(&self.dealer),
            VEHICLE_FIELD => Some(&self.vehicle),
            CUSTOMER_NAME_FIELD => Some(&self.customer_name),
            // Index 3 is the submit row, no FormField for it
            _ => None,
        }
    }
}
