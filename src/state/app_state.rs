//! Application state definitions

use super::forms::InvoiceForm;
use crate::format::format_inr;
use serde::{Deserialize, Serialize};

/// Message shown when either lookup list fails to load
pub const LOAD_ERROR_MESSAGE: &str = "Could not load dealer/vehicle data.";

/// Message shown when a submit is attempted with an empty field
pub const VALIDATION_ERROR_MESSAGE: &str = "Please fill all fields before generating.";

/// Message shown when invoice generation or saving fails
pub const GENERATION_ERROR_MESSAGE: &str = "An error occurred while generating the invoice.";

/// Dealer information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Dealer {
    pub fn display_label(&self) -> String {
        self.name.clone()
    }

    /// Address and phone joined for display, if the backend sent any
    pub fn contact_details(&self) -> Option<String> {
        let parts: Vec<&str> = [self.address.as_deref(), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" · "))
    }
}

/// Vehicle information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u64,
    pub make: String,
    pub model: String,
    pub price: f64,
}

impl Vehicle {
    /// Label used in the vehicle selection, e.g. `Maruti Swift Dzire - ₹7,50,000`
    pub fn display_label(&self) -> String {
        format!("{} {} - ₹{}", self.make, self.model, format_inr(self.price))
    }
}

/// Body of the invoice generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub dealer_id: u64,
    pub vehicle_id: u64,
    pub customer_name: String,
}

/// Progress of the reference data fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub dealers: Vec<Dealer>,
    pub vehicles: Vec<Vehicle>,
    pub load_status: LoadStatus,
    pub form: InvoiceForm,
    /// Flat user-visible error message, if any
    pub error: Option<String>,
    /// True while a generation request is outstanding
    pub generating: bool,
    /// Informational status bar message (e.g. where the invoice was saved)
    pub status_message: Option<String>,
}

impl AppState {
    /// Replace the reference data lists
    pub fn set_reference_data(&mut self, dealers: Vec<Dealer>, vehicles: Vec<Vehicle>) {
        self.dealers = dealers;
        self.vehicles = vehicles;
        self.load_status = LoadStatus::Loaded;
    }

    /// Record a failed reference data fetch. Both lists are left empty.
    pub fn set_load_failed(&mut self) {
        self.dealers.clear();
        self.vehicles.clear();
        self.load_status = LoadStatus::Failed;
        self.error = Some(LOAD_ERROR_MESSAGE.to_string());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_status, LoadStatus::Loading)
    }

    /// Labels for the dealer selection, in backend order
    pub fn dealer_options(&self) -> Vec<String> {
        self.dealers.iter().map(Dealer::display_label).collect()
    }

    /// Labels for the vehicle selection, in backend order
    pub fn vehicle_options(&self) -> Vec<String> {
        self.vehicles.iter().map(Vehicle::display_label).collect()
    }

    /// Id of the selected dealer, if any
    pub fn selected_dealer_id(&self) -> Option<u64> {
        self.form
            .dealer
            .selected()
            .and_then(|idx| self.dealers.get(idx))
            .map(|d| d.id)
    }

    /// Id of the selected vehicle, if any
    pub fn selected_vehicle_id(&self) -> Option<u64> {
        self.form
            .vehicle
            .selected()
            .and_then(|idx| self.vehicles.get(idx))
            .map(|v| v.id)
    }

    pub fn selected_dealer(&self) -> Option<&Dealer> {
        self.form.dealer.selected().and_then(|idx| self.dealers.get(idx))
    }

    /// Build the generation request from the current selection.
    ///
    /// Returns `None` if any of the three required fields is empty.
    pub fn build_request(&self) -> Option<InvoiceRequest> {
        if !self.form.is_complete() {
            return None;
        }
        Some(InvoiceRequest {
            dealer_id: self.selected_dealer_id()?,
            vehicle_id: self.selected_vehicle_id()?,
            customer_name: self.form.customer_name.as_text().to_string(),
        })
    }

    /// Move the active selection field to its next option
    pub fn select_next_option(&mut self) {
        let counts = (self.dealers.len(), self.vehicles.len());
        self.form.cycle_active_selection(counts, true);
    }

    /// Move the active selection field to its previous option
    pub fn select_prev_option(&mut self) {
        let counts = (self.dealers.len(), self.vehicles.len());
        self.form.cycle_active_selection(counts, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{sample_dealers, sample_vehicles};
    use crate::state::Form;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dealer_deserializes_backend_shape() {
        let json = r#"{"id":1,"name":"Maruti Suzuki Arena","address":"Connaught Place, New Delhi","phone":"011-23456789"}"#;
        let dealer: Dealer = serde_json::from_str(json).unwrap();
        assert_eq!(dealer, sample_dealers()[0]);
    }

    #[test]
    fn test_dealer_deserializes_minimal_shape() {
        let dealer: Dealer = serde_json::from_str(r#"{"id":7,"name":"Solo"}"#).unwrap();
        assert_eq!(dealer.id, 7);
        assert!(dealer.address.is_none());
        assert!(dealer.phone.is_none());
    }

    #[test]
    fn test_vehicle_ignores_unknown_fields() {
        let json = r#"{"id":103,"make":"Tata","model":"Nexon EV","price":1500000.0,"dealerId":3}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.id, 103);
        assert_eq!(vehicle.price, 1500000.0);
    }

    #[test]
    fn test_vehicle_accepts_integer_price() {
        let json = r#"{"id":104,"make":"Maruti","model":"Baleno","price":850000}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.display_label(), "Maruti Baleno - ₹8,50,000");
    }

    #[test]
    fn test_vehicle_display_label() {
        assert_eq!(
            sample_vehicles()[0].display_label(),
            "Maruti Swift Dzire - ₹7,50,000"
        );
    }

    #[test]
    fn test_dealer_contact_details() {
        let dealers = sample_dealers();
        assert_eq!(
            dealers[0].contact_details().as_deref(),
            Some("Connaught Place, New Delhi · 011-23456789")
        );
        assert_eq!(dealers[1].contact_details(), None);
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AppState::default();
        assert!(state.is_loading());
        assert!(state.dealers.is_empty());
        assert!(!state.generating);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_options_preserve_backend_order() {
        let mut state = AppState::default();
        state.set_reference_data(sample_dealers(), sample_vehicles());
        assert_eq!(
            state.dealer_options(),
            vec!["Maruti Suzuki Arena", "Hyundai Motors India"]
        );
        assert_eq!(
            state.vehicle_options(),
            vec![
                "Maruti Swift Dzire - ₹7,50,000",
                "Hyundai Creta - ₹12,00,000"
            ]
        );
        assert_eq!(state.load_status, LoadStatus::Loaded);
    }

    #[test]
    fn test_load_failure_clears_lists_and_sets_message() {
        let mut state = AppState::default();
        state.set_reference_data(sample_dealers(), sample_vehicles());
        state.set_load_failed();
        assert!(state.dealers.is_empty());
        assert!(state.vehicles.is_empty());
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_selected_ids_follow_option_index() {
        let mut state = AppState::default();
        state.set_reference_data(sample_dealers(), sample_vehicles());
        assert_eq!(state.selected_dealer_id(), None);

        // dealer field is active by default
        state.select_next_option();
        state.select_next_option();
        assert_eq!(state.selected_dealer_id(), Some(2));
        assert_eq!(
            state.selected_dealer().map(|d| d.name.as_str()),
            Some("Hyundai Motors India")
        );

        state.form.next_field();
        state.select_prev_option();
        assert_eq!(state.selected_vehicle_id(), Some(102));
    }

    #[test]
    fn test_selection_on_empty_lists_stays_unset() {
        let mut state = AppState::default();
        state.set_load_failed();
        state.select_next_option();
        assert_eq!(state.selected_dealer_id(), None);
    }

    #[test]
    fn test_build_request_requires_every_field() {
        let mut state = AppState::default();
        state.set_reference_data(sample_dealers(), sample_vehicles());
        assert!(state.build_request().is_none());

        state.form.dealer.select(Some(0));
        state.form.vehicle.select(Some(1));
        assert!(state.build_request().is_none());

        state.form.customer_name.set_text("Asha Verma".to_string());
        assert_eq!(
            state.build_request(),
            Some(InvoiceRequest {
                dealer_id: 1,
                vehicle_id: 102,
                customer_name: "Asha Verma".to_string(),
            })
        );
    }

    #[test]
    fn test_invoice_request_serializes_camel_case() {
        let request = InvoiceRequest {
            dealer_id: 3,
            vehicle_id: 103,
            customer_name: "Ravi".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"dealerId": 3, "vehicleId": 103, "customerName": "Ravi"})
        );
    }
}
