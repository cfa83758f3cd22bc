//! IRS Form 8283, Noncash Charitable Contributions (Sections A and B).

use rand::RngCore;
use serde_json::{json, Value};

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY, PANEL};
use super::{irs_form_header, labeled, RenderRequest, RenderedDocument, Renderer};
use crate::models::{DocumentType, Money};
use crate::sampling::{cycle, days_before, pick, pick_distinct, random_amount, random_date, random_int};
use crate::utils::format::{iso_date, slash_date};

const WIDTH: u32 = 850;
const HEIGHT: u32 = 1100;
const REVISION: &str = "(Rev. December 2023)";
const SUBTITLE: &str = "Attach to your tax return if total noncash deductions exceed $500";

const HOW_ACQUIRED: [&str; 3] = ["Purchase", "Gift", "Inheritance"];

const APPRAISER_DECLARATION: &str = "I declare that I am not the donor, the donee, a party to the \
transaction in which the donor acquired the property, or related to any of the foregoing persons. \
I am qualified to make appraisals of the type of property being valued and the appraisal was \
conducted in accordance with generally accepted appraisal standards.";

const DONEE_ACKNOWLEDGMENT: &str = "This charitable organization acknowledges that it is a \
qualified organization under section 170(c) and that it received the donated property as \
described in Section B, Part I, above on the following date:";

fn donor_block(canvas: &mut DocumentCanvas<'_>, y: i32, donor_name: &str, ssn_tail: i64) -> i32 {
    let width = canvas.width();
    canvas.bordered_box(20, y, width - 20, y + 50, BLACK, 1);
    canvas.line(560, y, 560, y + 50, BLACK);
    canvas.text(30, y + 6, "Name(s) shown on your income tax return", TextStyle::regular(9.0).color(GRAY));
    canvas.text(30, y + 24, donor_name, TextStyle::regular(13.0));
    canvas.text(570, y + 6, "Identifying number", TextStyle::regular(9.0).color(GRAY));
    canvas.text(570, y + 24, &format!("XXX-XX-{:04}", ssn_tail), TextStyle::regular(13.0));
    y + 65
}

fn section_banner(canvas: &mut DocumentCanvas<'_>, y: i32, text: &str) -> i32 {
    let width = canvas.width();
    canvas.filled_box(20, y, width - 20, y + 26, PANEL);
    canvas.text(30, y + 6, text, TextStyle::bold(12.0));
    y + 36
}

/// Section A: items of $5,000 or less, valued by the donor.
#[derive(Debug, Default, Clone, Copy)]
pub struct Form8283SectionARenderer;

impl Renderer for Form8283SectionARenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::Form8283SectionA
    }

    fn file_prefix(&self) -> &'static str {
        "form_8283a"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let catalog = request.catalog;
        let org = cycle(&catalog.organizations, request.slot);
        let donor = pick(rng, &catalog.donors);
        let ssn_tail = random_int(rng, 1, 9999);
        let contributed = random_date(rng, request.dates);
        let count = random_int(rng, 1, 3) as usize;
        let items: Vec<_> = pick_distinct(rng, &catalog.goods, count)
            .into_iter()
            .map(|item| {
                let value = random_amount(rng, Money::from_dollars(100), Money::from_dollars(1600));
                (item, value)
            })
            .collect();
        let total: Money = items.iter().map(|(_, value)| *value).sum();

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let mut y = irs_form_header(&mut canvas, "Form 8283", REVISION, "Noncash Charitable Contributions", SUBTITLE);
        y = donor_block(&mut canvas, y, donor.full_name, ssn_tail);
        y = section_banner(
            &mut canvas,
            y,
            "Section A. Donated Property of $5,000 or Less and Publicly Traded Securities",
        );
        canvas.text(30, y, "Part I   Information on Donated Property", TextStyle::bold(12.0));
        y += 26;

        labeled(&mut canvas, 40, y, "Name of donee organization", org.legal_name, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Donee address", org.mailing_address, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Donee EIN", org.ein, 12.0);
        y += 34;

        for (i, (item, value)) in items.iter().enumerate() {
            canvas.bordered_box(30, y, width - 30, y + 118, GRAY, 1);
            canvas.text(40, y + 8, &format!("Line {}", char::from(b'A' + i as u8)), TextStyle::bold(12.0));
            labeled(&mut canvas, 60, y + 28, "(b) Description of donated property", item.description, 11.0);
            labeled(&mut canvas, 60, y + 46, "Condition", item.condition, 11.0);
            labeled(&mut canvas, 60, y + 64, "(c) Date of contribution", &slash_date(contributed), 11.0);
            labeled(
                &mut canvas,
                60,
                y + 82,
                "(h) Fair market value",
                &value.to_string(),
                11.0,
            );
            labeled(&mut canvas, 60, y + 100, "(i) Method used to determine FMV", item.valuation_method_label, 11.0);
            y += 130;
        }

        canvas.bordered_box(30, y, width - 30, y + 40, BLACK, 2);
        canvas.text(40, y + 12, &format!("Total fair market value: {}", total), TextStyle::bold(14.0));
        y += 80;

        canvas.signature_line(40, y, 300, "Signature of donor", TextStyle::regular(10.0).color(GRAY));
        canvas.signature_line(420, y, 160, "Date", TextStyle::regular(10.0).color(GRAY));

        canvas.text(30, canvas.height() - 30, "Form 8283 (Rev. 12-2023)", TextStyle::regular(9.0).color(GRAY));

        let item_fields: Vec<Value> = items
            .iter()
            .map(|(item, value)| {
                json!({
                    "description": item.description,
                    "condition": item.condition,
                    "fair_market_value": value,
                    "valuation_method": item.valuation_method_label,
                })
            })
            .collect();
        let fields = json!({
            "organization_name": org.legal_name,
            "ein": org.ein,
            "donor_name": donor.full_name,
            "amount": total,
            "date": iso_date(contributed),
            "items": item_fields,
        });
        RenderedDocument::new(DocumentType::Form8283SectionA, org.short_code, canvas, fields)
    }
}

/// Section B: a single appraised item over $5,000.
#[derive(Debug, Default, Clone, Copy)]
pub struct Form8283SectionBRenderer;

impl Renderer for Form8283SectionBRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::Form8283SectionB
    }

    fn file_prefix(&self) -> &'static str {
        "form_8283b"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let catalog = request.catalog;
        let org = cycle(&catalog.organizations, request.slot);
        let donor = pick(rng, &catalog.donors);
        let ssn_tail = random_int(rng, 1, 9999);
        let property = pick(rng, &catalog.appraised_property);
        let appraiser = pick(rng, &catalog.appraisers);
        let received = random_date(rng, request.dates);
        let appraised_on = days_before(rng, received, 5, 55);
        let acquired_year = random_int(rng, 1985, 2020);
        let how_acquired = pick(rng, &HOW_ACQUIRED);
        let value = random_amount(rng, Money::from_dollars(5001), Money::from_dollars(50000));

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let mut y = irs_form_header(&mut canvas, "Form 8283", REVISION, "Noncash Charitable Contributions", SUBTITLE);
        y = donor_block(&mut canvas, y, donor.full_name, ssn_tail);
        y = section_banner(
            &mut canvas,
            y,
            "Section B. Donated Property Over $5,000 (Except Publicly Traded Securities)",
        );

        canvas.text(30, y, "Part I   Information on Donated Property", TextStyle::bold(12.0));
        y += 26;
        labeled(&mut canvas, 40, y, "(a) Description of donated property", property.description, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "(b) Physical condition", property.condition, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "(c) Appraised fair market value", &value.to_string(), 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "(d) Year acquired by donor", &acquired_year.to_string(), 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "(e) How acquired by donor", how_acquired, 12.0);
        y += 36;

        y = section_banner(&mut canvas, y, "Part III   Declaration of Appraiser");
        y = canvas.paragraph(40, y, APPRAISER_DECLARATION, TextStyle::regular(11.0), 760, 17);
        y += 12;
        labeled(&mut canvas, 40, y, "Appraiser name", appraiser.name, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Identifying number", appraiser.license_id, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Business address", appraiser.address, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Date of appraisal", &slash_date(appraised_on), 12.0);
        y += 50;
        canvas.signature_line(40, y, 300, "Appraiser signature", TextStyle::regular(10.0).color(GRAY));
        y += 40;

        y = section_banner(&mut canvas, y, "Part IV   Donee Acknowledgment");
        y = canvas.paragraph(40, y, DONEE_ACKNOWLEDGMENT, TextStyle::regular(11.0), 760, 17);
        canvas.text(40, y + 2, &slash_date(received), TextStyle::bold(12.0));
        y += 30;
        labeled(&mut canvas, 40, y, "Name of charitable organization", org.legal_name, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Employer identification number", org.ein, 12.0);
        y += 20;
        labeled(&mut canvas, 40, y, "Address", org.mailing_address, 12.0);
        y += 50;
        canvas.signature_line(40, y, 300, "Authorized signature", TextStyle::regular(10.0).color(GRAY));

        canvas.text(30, canvas.height() - 30, "Form 8283 (Rev. 12-2023)", TextStyle::regular(9.0).color(GRAY));

        let fields = json!({
            "organization_name": org.legal_name,
            "ein": org.ein,
            "donor_name": donor.full_name,
            "amount": value,
            "date": iso_date(received),
            "property_description": property.description,
            "appraiser_name": appraiser.name,
            "appraiser_license": appraiser.license_id,
            "appraisal_date": iso_date(appraised_on),
        });
        RenderedDocument::new(DocumentType::Form8283SectionB, org.short_code, canvas, fields)
    }
}
