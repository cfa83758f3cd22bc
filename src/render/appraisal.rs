//! Qualified appraisal report for property over $5,000.

use rand::RngCore;
use serde_json::json;

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY};
use super::{labeled, RenderRequest, RenderedDocument, Renderer};
use crate::models::{DocumentType, Money};
use crate::sampling::{cycle, days_before, pick, random_amount, random_date};
use crate::utils::format::{iso_date, long_date, slash_date};

const WIDTH: u32 = 700;
const HEIGHT: u32 = 900;

const CERTIFICATION: &str = "I certify that this appraisal was prepared in conformity with the \
Uniform Standards of Professional Appraisal Practice. I hold myself out to the public as an \
appraiser, I am qualified to value this type of property, and my fee is not based on a \
percentage of the appraised value. I understand that a substantial or gross valuation \
misstatement may subject me to civil penalties.";

#[derive(Debug, Default, Clone, Copy)]
pub struct QualifiedAppraisalRenderer;

impl Renderer for QualifiedAppraisalRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::QualifiedAppraisal
    }

    fn file_prefix(&self) -> &'static str {
        "appraisal"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let catalog = request.catalog;
        let org = cycle(&catalog.organizations, request.slot);
        let donor = pick(rng, &catalog.donors);
        let appraiser = pick(rng, &catalog.appraisers);
        let property = pick(rng, &catalog.appraised_property);
        let contributed = random_date(rng, request.dates);
        let appraised_on = days_before(rng, contributed, 5, 55);
        let value = random_amount(rng, Money::from_dollars(5001), Money::from_dollars(50000));

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let center = width / 2;

        let mut y = 35;
        canvas.text_centered(center, y, appraiser.name, TextStyle::bold(20.0));
        y += 30;
        canvas.text_centered(center, y, appraiser.address, TextStyle::regular(11.0).color(GRAY));
        y += 18;
        canvas.text_centered(
            center,
            y,
            &format!("License No. {}", appraiser.license_id),
            TextStyle::regular(11.0).color(GRAY),
        );
        y += 20;
        canvas.line(40, y, width - 40, y, BLACK);
        y += 25;

        canvas.text_centered(center, y, "QUALIFIED APPRAISAL REPORT", TextStyle::bold(18.0));
        y += 30;
        canvas.text_centered(
            center,
            y,
            &format!("Report date: {}", long_date(appraised_on)),
            TextStyle::regular(12.0),
        );
        y += 35;

        canvas.bordered_box(40, y, width - 40, y + 95, GRAY, 1);
        canvas.text(50, y + 8, "Prepared for:", TextStyle::bold(13.0));
        canvas.text(70, y + 30, donor.full_name, TextStyle::regular(12.0));
        canvas.text(70, y + 48, donor.street_address, TextStyle::regular(12.0));
        canvas.text(70, y + 66, &donor.city_line(), TextStyle::regular(12.0));
        y += 115;

        labeled(&mut canvas, 40, y, "Intended donee", org.legal_name, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Donee EIN", org.ein, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Date of contribution", &slash_date(contributed), 12.0);
        y += 30;
        labeled(&mut canvas, 40, y, "Description of property", property.description, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Physical condition", property.condition, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Valuation method", property.valuation_method_label, 12.0);
        y += 35;

        canvas.bordered_box(40, y, width - 40, y + 65, BLACK, 2);
        canvas.text_centered(center, y + 10, "APPRAISED FAIR MARKET VALUE", TextStyle::regular(12.0));
        canvas.text_centered(center, y + 32, &value.to_string(), TextStyle::bold(22.0));
        y += 90;

        y = canvas.paragraph(40, y, CERTIFICATION, TextStyle::regular(11.0).color(GRAY), 620, 17);
        y += 50;

        canvas.signature_line(40, y, 260, "Qualified appraiser", TextStyle::regular(10.0).color(GRAY));
        canvas.signature_line(400, y, 160, "Date signed", TextStyle::regular(10.0).color(GRAY));

        canvas.text_centered(
            center,
            canvas.height() - 40,
            "Prepared for federal income tax purposes under IRC Section 170",
            TextStyle::regular(10.0).color(GRAY),
        );

        let fields = json!({
            "organization_name": org.legal_name,
            "ein": org.ein,
            "donor_name": donor.full_name,
            "amount": value,
            "date": iso_date(contributed),
            "appraisal_date": iso_date(appraised_on),
            "appraiser_name": appraiser.name,
            "appraiser_license": appraiser.license_id,
            "property_description": property.description,
            "valuation_method": property.valuation_method_label,
        });
        RenderedDocument::new(DocumentType::QualifiedAppraisal, org.short_code, canvas, fields)
    }
}
