//! IRS Form 1098-C, Contributions of Motor Vehicles, Boats, and Airplanes.

use rand::RngCore;
use serde_json::json;

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY};
use super::{irs_form_header, RenderRequest, RenderedDocument, Renderer};
use crate::models::{DocumentType, Money};
use crate::sampling::{cycle, days_after, pick, random_amount, random_date, random_int};
use crate::utils::format::{iso_date, slash_date};

const WIDTH: u32 = 850;
const HEIGHT: u32 = 700;
const SPLIT: i32 = 420;

/// One labelled cell of the form grid. Returns the y below the cell.
fn cell(canvas: &mut DocumentCanvas<'_>, x0: i32, x1: i32, y: i32, label: &str, value: &str) -> i32 {
    canvas.bordered_box(x0, y, x1, y + 44, BLACK, 1);
    canvas.text(x0 + 6, y + 4, label, TextStyle::regular(9.0).color(GRAY));
    canvas.text(x0 + 10, y + 20, value, TextStyle::regular(13.0));
    y + 44
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Form1098CRenderer;

impl Renderer for Form1098CRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::Form1098C
    }

    fn file_prefix(&self) -> &'static str {
        "form_1098c"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let catalog = request.catalog;
        let org = cycle(&catalog.organizations, request.slot);
        let donor = pick(rng, &catalog.donors);
        let vehicle = pick(rng, &catalog.vehicles);
        let contributed = random_date(rng, request.dates);
        let sold = days_after(rng, contributed, 7, 45);
        let odometer = random_int(rng, 40_000, 210_000);
        let proceeds = random_amount(rng, Money::from_dollars(500), Money::from_dollars(25000));

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let right = width - 20;
        let mut y = irs_form_header(
            &mut canvas,
            "Form 1098-C",
            "(Rev. April 2024)",
            "Contributions of Motor Vehicles, Boats, and Airplanes",
            "Copy B - For Donor",
        );

        let left_top = y;
        y = cell(&mut canvas, 20, SPLIT, y, "DONEE'S name", org.legal_name);
        y = cell(&mut canvas, 20, SPLIT, y, "Street address, city, state, and ZIP code", org.mailing_address);
        y = cell(&mut canvas, 20, SPLIT, y, "DONEE'S TIN", org.ein);
        y = cell(&mut canvas, 20, SPLIT, y, "DONOR'S name", donor.full_name);
        y = cell(&mut canvas, 20, SPLIT, y, "Street address (including apt. no.)", donor.street_address);
        let left_bottom = cell(&mut canvas, 20, SPLIT, y, "City or town, state, and ZIP code", &donor.city_line());

        let mut ry = left_top;
        ry = cell(&mut canvas, SPLIT, right, ry, "1 Date of contribution", &slash_date(contributed));
        ry = cell(&mut canvas, SPLIT, right, ry, "2a Odometer mileage", &odometer.to_string());
        let third = (right - SPLIT) / 3;
        cell(&mut canvas, SPLIT, SPLIT + third, ry, "2b Year", &vehicle.year.to_string());
        cell(&mut canvas, SPLIT + third, SPLIT + 2 * third, ry, "2c Make", vehicle.make);
        ry = cell(&mut canvas, SPLIT + 2 * third, right, ry, "2d Model", vehicle.model);
        ry = cell(&mut canvas, SPLIT, right, ry, "3 Vehicle or other identification number", vehicle.vin);
        ry = cell(&mut canvas, SPLIT, right, ry, "4b Date of sale", &slash_date(sold));
        cell(&mut canvas, SPLIT, right, ry, "4c Gross proceeds from sale", &proceeds.to_string());

        let mut y = left_bottom + 20;
        canvas.checkbox(30, y, true);
        canvas.text(
            50,
            y,
            "4a Donee certifies that vehicle was sold in arm's length transaction to unrelated party",
            TextStyle::regular(11.0),
        );
        y += 26;
        canvas.checkbox(30, y, false);
        canvas.text(
            50,
            y,
            "5a Donee certifies that vehicle will not be transferred for money before completion of material improvements",
            TextStyle::regular(10.0),
        );
        y += 26;
        canvas.checkbox(30, y, false);
        canvas.text(50, y, "6a Did you provide goods or services in exchange for the vehicle?", TextStyle::regular(11.0));

        canvas.text(
            30,
            canvas.height() - 30,
            "Form 1098-C (Rev. 4-2024)    Department of the Treasury - Internal Revenue Service",
            TextStyle::regular(9.0).color(GRAY),
        );

        let fields = json!({
            "organization_name": org.legal_name,
            "ein": org.ein,
            "donor_name": donor.full_name,
            "amount": proceeds,
            "date": iso_date(contributed),
            "sale_date": iso_date(sold),
            "vin": vehicle.vin,
            "vehicle_year": vehicle.year,
            "vehicle_make": vehicle.make,
            "vehicle_model": vehicle.model,
            "odometer_mileage": odometer,
        });
        RenderedDocument::new(DocumentType::Form1098C, org.short_code, canvas, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{assert_fields_drawn, render_many};

    #[test]
    fn test_1098c_fields_are_drawn() {
        for doc in render_many(&Form1098CRenderer, 8) {
            assert_fields_drawn(&doc);
            assert_eq!(doc.image.dimensions(), (WIDTH, HEIGHT));
        }
    }

    #[test]
    fn test_1098c_vin_matches_catalog_vehicle() {
        let catalog = crate::catalog::SampleCatalog::builtin();
        for doc in render_many(&Form1098CRenderer, 5) {
            let vin = doc.expected_fields["vin"].as_str().unwrap();
            let vehicle = catalog.vehicles.iter().find(|v| v.vin == vin).unwrap();
            assert_eq!(doc.expected_fields["vehicle_make"], vehicle.make);
        }
    }
}
