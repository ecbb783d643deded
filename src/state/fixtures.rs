//! Shared test data matching the backend's seeded lists

use super::{Dealer, Vehicle};

pub fn sample_dealers() -> Vec<Dealer> {
    vec![
        Dealer {
            id: 1,
            name: "Maruti Suzuki Arena".to_string(),
            address: Some("Connaught Place, New Delhi".to_string()),
            phone: Some("011-23456789".to_string()),
        },
        Dealer {
            id: 2,
            name: "Hyundai Motors India".to_string(),
            address: None,
            phone: None,
        },
    ]
}

pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 101,
            make: "Maruti".to_string(),
            model: "Swift Dzire".to_string(),
            price: 750000.0,
        },
        Vehicle {
            id: 102,
            make: "Hyundai".to_string(),
            model: "Creta".to_string(),
            price: 1200000.0,
        },
    ]
}
