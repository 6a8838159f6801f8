//! Customer contact and shipping details.

use serde::{Deserialize, Serialize};

/// Contact and shipping information collected by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Full name.
    pub full_name: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// Country.
    pub country: String,
}

impl CustomerDetails {
    /// Check if every field needed to ship an order is present.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty()
            && !self.mobile.is_empty()
            && !self.email.is_empty()
            && !self.address.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.pincode.is_empty()
            && !self.country.is_empty()
    }

    /// Render the shipping address as a single line.
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {} - {}, {}",
            self.address, self.city, self.state, self.pincode, self.country
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CustomerDetails {
        CustomerDetails {
            full_name: "Asha Rao".to_string(),
            mobile: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn test_is_complete() {
        assert!(sample().is_complete());

        let mut missing = sample();
        missing.pincode.clear();
        assert!(!missing.is_complete());
    }

    #[test]
    fn test_shipping_address_format() {
        assert_eq!(
            sample().shipping_address(),
            "12 MG Road, Bengaluru, Karnataka - 560001, India"
        );
    }
}
