//! Sample data record shapes.
//!
//! Every identity here is a placeholder. Records are immutable and live in a
//! [`SampleCatalog`](crate::catalog::SampleCatalog).

/// A charitable organization that receives donations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRecord {
    pub legal_name: &'static str,
    /// `NN-NNNNNNN`. Some are fictional placeholders.
    pub ein: &'static str,
    /// Used in generated file names.
    pub short_code: &'static str,
    pub mailing_address: &'static str,
    pub tax_status_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorRecord {
    pub full_name: &'static str,
    pub street_address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: &'static str,
}

impl DonorRecord {
    /// `City, ST 12345`
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRecord {
    pub display_name: &'static str,
    pub short_code: &'static str,
    pub routing_number: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerageRecord {
    pub display_name: &'static str,
    pub short_code: &'static str,
    pub dtc_number: &'static str,
}

/// A publicly traded security that can be gifted in kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityRecord {
    pub name: &'static str,
    pub ticker: &'static str,
    pub cusip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRecord {
    pub year: u16,
    pub make: &'static str,
    pub model: &'static str,
    pub vin: &'static str,
}

impl VehicleRecord {
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppraiserRecord {
    pub name: &'static str,
    pub license_id: &'static str,
    pub address: &'static str,
}

/// Donated property other than cash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonCashItemRecord {
    pub description: &'static str,
    pub condition: &'static str,
    pub valuation_method_label: &'static str,
}
