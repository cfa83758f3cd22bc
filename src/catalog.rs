//! Built-in sample data tables.
//!
//! The catalog is plain configuration data handed to every renderer call.
//! Nothing reads it through global state.

use crate::models::{
    AppraiserRecord, BankRecord, BrokerageRecord, DonorRecord, NonCashItemRecord,
    OrganizationRecord, SecurityRecord, VehicleRecord,
};

/// All sample tables used by the renderers.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    pub organizations: Vec<OrganizationRecord>,
    pub donors: Vec<DonorRecord>,
    pub banks: Vec<BankRecord>,
    pub brokerages: Vec<BrokerageRecord>,
    pub securities: Vec<SecurityRecord>,
    pub vehicles: Vec<VehicleRecord>,
    pub appraisers: Vec<AppraiserRecord>,
    /// Everyday goods valued by the donor (Form 8283 Section A).
    pub goods: Vec<NonCashItemRecord>,
    /// High-value property that requires a qualified appraisal.
    pub appraised_property: Vec<NonCashItemRecord>,
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SampleCatalog {
    pub fn builtin() -> Self {
        Self {
            organizations: ORGANIZATIONS.to_vec(),
            donors: DONORS.to_vec(),
            banks: BANKS.to_vec(),
            brokerages: BROKERAGES.to_vec(),
            securities: SECURITIES.to_vec(),
            vehicles: VEHICLES.to_vec(),
            appraisers: APPRAISERS.to_vec(),
            goods: GOODS.to_vec(),
            appraised_property: APPRAISED_PROPERTY.to_vec(),
        }
    }
}

const ORGANIZATIONS: [OrganizationRecord; 8] = [
    OrganizationRecord {
        legal_name: "Goodwill Industries",
        ein: "53-0196517",
        short_code: "goodwill",
        mailing_address: "15810 Indianola Drive, Rockville, MD 20855",
        tax_status_label: "501(c)(3) Public Charity",
    },
    OrganizationRecord {
        legal_name: "The Salvation Army",
        ein: "13-5562351",
        short_code: "salvation-army",
        mailing_address: "615 Slaters Lane, Alexandria, VA 22314",
        tax_status_label: "501(c)(3) Public Charity",
    },
    OrganizationRecord {
        legal_name: "American Red Cross",
        ein: "53-0196605",
        short_code: "redcross",
        mailing_address: "431 18th Street NW, Washington, DC 20006",
        tax_status_label: "501(c)(3) Public Charity",
    },
    OrganizationRecord {
        legal_name: "Habitat for Humanity",
        ein: "91-1914868",
        short_code: "habitat",
        mailing_address: "322 W Lamar Street, Americus, GA 31709",
        tax_status_label: "501(c)(3) Public Charity",
    },
    OrganizationRecord {
        legal_name: "United Way Worldwide",
        ein: "13-1635294",
        short_code: "unitedway",
        mailing_address: "701 N Fairfax Street, Alexandria, VA 22314",
        tax_status_label: "501(c)(3) Public Charity",
    },
    OrganizationRecord {
        legal_name: "Community Food Bank",
        ein: "12-3456789",
        short_code: "foodbank",
        mailing_address: "123 Charity Lane, Nonprofit City, ST 00000",
        tax_status_label: "501(c)(3) Public Charity",
    },
    OrganizationRecord {
        legal_name: "First Community Church",
        ein: "23-4567890",
        short_code: "church",
        mailing_address: "45 Chapel Road, Nonprofit City, ST 00000",
        tax_status_label: "Church (IRC 170(b)(1)(A)(i))",
    },
    OrganizationRecord {
        legal_name: "State University Foundation",
        ein: "34-5678901",
        short_code: "university",
        mailing_address: "1 University Plaza, College Town, ST 00001",
        tax_status_label: "501(c)(3) Educational Foundation",
    },
];

const DONORS: [DonorRecord; 6] = [
    DonorRecord {
        full_name: "Test Donor",
        street_address: "123 Test Street",
        city: "Test City",
        state: "ST",
        zip: "12345",
    },
    DonorRecord {
        full_name: "Jordan Sample",
        street_address: "48 Placeholder Avenue",
        city: "Exampleville",
        state: "ST",
        zip: "23456",
    },
    DonorRecord {
        full_name: "Alex Fixture",
        street_address: "900 Mock Boulevard Apt 3",
        city: "Demo Springs",
        state: "ST",
        zip: "34567",
    },
    DonorRecord {
        full_name: "Riley Specimen",
        street_address: "7 Synthetic Court",
        city: "Testburg",
        state: "ST",
        zip: "45678",
    },
    DonorRecord {
        full_name: "Morgan Dummy",
        street_address: "2211 Stand-In Road",
        city: "Sample Harbor",
        state: "ST",
        zip: "56789",
    },
    DonorRecord {
        full_name: "Casey Prototype",
        street_address: "15 Trial Lane",
        city: "Mockford",
        state: "ST",
        zip: "67890",
    },
];

const BANKS: [BankRecord; 5] = [
    BankRecord {
        display_name: "Chase Bank",
        short_code: "chase",
        routing_number: "000100001",
    },
    BankRecord {
        display_name: "Bank of America",
        short_code: "bofa",
        routing_number: "000100002",
    },
    BankRecord {
        display_name: "Wells Fargo",
        short_code: "wellsfargo",
        routing_number: "000100003",
    },
    BankRecord {
        display_name: "Citibank",
        short_code: "citi",
        routing_number: "000100004",
    },
    BankRecord {
        display_name: "Local Credit Union",
        short_code: "creditunion",
        routing_number: "000100005",
    },
];

const BROKERAGES: [BrokerageRecord; 3] = [
    BrokerageRecord {
        display_name: "Fidelity Investments",
        short_code: "fidelity",
        dtc_number: "0226",
    },
    BrokerageRecord {
        display_name: "Charles Schwab",
        short_code: "schwab",
        dtc_number: "0164",
    },
    BrokerageRecord {
        display_name: "Vanguard Brokerage",
        short_code: "vanguard",
        dtc_number: "0062",
    },
];

const SECURITIES: [SecurityRecord; 5] = [
    SecurityRecord {
        name: "Apple Inc. Common Stock",
        ticker: "AAPL",
        cusip: "037833100",
    },
    SecurityRecord {
        name: "Microsoft Corp. Common Stock",
        ticker: "MSFT",
        cusip: "594918104",
    },
    SecurityRecord {
        name: "Johnson & Johnson Common Stock",
        ticker: "JNJ",
        cusip: "478160104",
    },
    SecurityRecord {
        name: "Vanguard Total Stock Market ETF",
        ticker: "VTI",
        cusip: "922908769",
    },
    SecurityRecord {
        name: "Procter & Gamble Co. Common Stock",
        ticker: "PG",
        cusip: "742718109",
    },
];

const VEHICLES: [VehicleRecord; 5] = [
    VehicleRecord {
        year: 2012,
        make: "Honda",
        model: "Accord",
        vin: "1HGCP2F31CA000001",
    },
    VehicleRecord {
        year: 2009,
        make: "Toyota",
        model: "Camry",
        vin: "4T1BE46K09U000002",
    },
    VehicleRecord {
        year: 2015,
        make: "Ford",
        model: "F-150",
        vin: "1FTEW1EF5FK000003",
    },
    VehicleRecord {
        year: 2011,
        make: "Subaru",
        model: "Outback",
        vin: "4S4BRBCC1B3000004",
    },
    VehicleRecord {
        year: 2017,
        make: "Chevrolet",
        model: "Malibu",
        vin: "1G1ZE5ST8HF000005",
    },
];

const APPRAISERS: [AppraiserRecord; 3] = [
    AppraiserRecord {
        name: "Dana Whitfield, ASA",
        license_id: "APR-204718",
        address: "88 Gallery Row, Exampleville, ST 23456",
    },
    AppraiserRecord {
        name: "Sam Okafor, ISA AM",
        license_id: "APR-339052",
        address: "410 Estate Street, Demo Springs, ST 34567",
    },
    AppraiserRecord {
        name: "Lee Marchetti, AAA",
        license_id: "APR-118630",
        address: "2 Heritage Square, Testburg, ST 45678",
    },
];

const GOODS: [NonCashItemRecord; 8] = [
    NonCashItemRecord {
        description: "Men's and women's clothing (4 bags)",
        condition: "Good",
        valuation_method_label: "Thrift shop value",
    },
    NonCashItemRecord {
        description: "Sofa and matching loveseat",
        condition: "Good",
        valuation_method_label: "Comparable sales",
    },
    NonCashItemRecord {
        description: "Laptop computer with charger",
        condition: "Fair",
        valuation_method_label: "Comparable sales",
    },
    NonCashItemRecord {
        description: "Children's toys and books (2 boxes)",
        condition: "Good",
        valuation_method_label: "Thrift shop value",
    },
    NonCashItemRecord {
        description: "Kitchen dining table with six chairs",
        condition: "Very good",
        valuation_method_label: "Comparable sales",
    },
    NonCashItemRecord {
        description: "Household appliances: washer and dryer",
        condition: "Good",
        valuation_method_label: "Replacement cost less depreciation",
    },
    NonCashItemRecord {
        description: "Sporting goods: bicycles (2)",
        condition: "Fair",
        valuation_method_label: "Thrift shop value",
    },
    NonCashItemRecord {
        description: "Office desk and bookshelves",
        condition: "Good",
        valuation_method_label: "Comparable sales",
    },
];

const APPRAISED_PROPERTY: [NonCashItemRecord; 5] = [
    NonCashItemRecord {
        description: "Oil painting, 19th century landscape",
        condition: "Excellent",
        valuation_method_label: "Market data approach",
    },
    NonCashItemRecord {
        description: "Antique mahogany dining set",
        condition: "Very good",
        valuation_method_label: "Comparable sales",
    },
    NonCashItemRecord {
        description: "Estate jewelry collection (12 pieces)",
        condition: "Excellent",
        valuation_method_label: "Market data approach",
    },
    NonCashItemRecord {
        description: "Grand piano, 1978 concert model",
        condition: "Good",
        valuation_method_label: "Replacement cost approach",
    },
    NonCashItemRecord {
        description: "Rare book collection (40 volumes)",
        condition: "Very good",
        valuation_method_label: "Comparable sales",
    },
];
