//! Donation receipt.

use rand::RngCore;
use serde_json::json;

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY};
use super::{RenderRequest, RenderedDocument, Renderer};
use crate::models::{DocumentType, Money};
use crate::sampling::{cycle, pick, random_amount, random_date, random_int};
use crate::utils::format::{iso_date, long_date};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 800;

const TAX_STATEMENT: &str = "No goods or services were provided in exchange for this donation. \
This receipt may be used for tax purposes.";

#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptRenderer;

impl Renderer for ReceiptRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::Receipt
    }

    fn file_prefix(&self) -> &'static str {
        "receipt"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let org = cycle(&request.catalog.organizations, request.slot);
        let donor = pick(rng, &request.catalog.donors);
        let date = random_date(rng, request.dates);
        let amount = random_amount(rng, Money::from_dollars(25), Money::from_dollars(5000));
        let receipt_number = format!("RCP-{}-{}", date.format("%Y"), random_int(rng, 10000, 99999));

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let center = width / 2;

        canvas.bordered_box(20, 20, width - 20, 100, BLACK, 2);
        canvas.text_centered(center, 35, org.legal_name, TextStyle::bold(24.0));
        canvas.text_centered(center, 70, &format!("EIN: {}", org.ein), TextStyle::regular(12.0).color(GRAY));

        let mut y = 130;
        canvas.text_centered(center, y, "DONATION RECEIPT", TextStyle::bold(18.0));
        y += 50;

        canvas.text(40, y, &format!("Receipt Number: {}", receipt_number), TextStyle::regular(14.0));
        y += 30;
        canvas.text(40, y, &format!("Date: {}", long_date(date)), TextStyle::regular(14.0));
        y += 50;

        canvas.text(40, y, "Received From:", TextStyle::bold(18.0));
        y += 30;
        canvas.text(60, y, donor.full_name, TextStyle::regular(14.0));
        y += 25;
        canvas.text(60, y, donor.street_address, TextStyle::regular(14.0));
        y += 25;
        canvas.text(60, y, &donor.city_line(), TextStyle::regular(14.0));
        y += 50;

        canvas.bordered_box(40, y, width - 40, y + 60, BLACK, 1);
        canvas.text_centered(center, y + 8, "DONATION AMOUNT", TextStyle::regular(12.0));
        canvas.text_centered(center, y + 28, &amount.to_string(), TextStyle::bold(24.0));
        y += 90;

        y = canvas.paragraph(40, y, TAX_STATEMENT, TextStyle::regular(12.0).color(GRAY), 520, 20);
        y += 30;

        canvas.signature_line(40, y + 40, 210, "Authorized Signature", TextStyle::regular(12.0).color(GRAY));

        canvas.text_centered(
            center,
            canvas.height() - 40,
            "Thank you for your generous donation!",
            TextStyle::regular(14.0),
        );

        let fields = json!({
            "organization_name": org.legal_name,
            "ein": org.ein,
            "amount": amount,
            "date": iso_date(date),
            "donor_name": donor.full_name,
            "receipt_number": receipt_number,
        });
        RenderedDocument::new(DocumentType::Receipt, org.short_code, canvas, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{assert_fields_drawn, render_many};

    #[test]
    fn test_receipt_fields_are_drawn() {
        for doc in render_many(&ReceiptRenderer, 10) {
            assert_fields_drawn(&doc);
            assert_eq!(doc.image.dimensions(), (WIDTH, HEIGHT));
        }
    }

    #[test]
    fn test_receipt_shows_formatted_amount_and_ein() {
        let doc = &render_many(&ReceiptRenderer, 1)[0];
        let amount = doc.expected_fields["amount"].as_f64().unwrap();
        let text = doc.text_content();
        assert!(text.contains(&Money::from_f64(amount).to_string()));
        assert!(text.contains("EIN: 53-0196517"));
        assert!(text.contains("Goodwill Industries"));
    }

    #[test]
    fn test_receipt_cycles_organizations() {
        let docs = render_many(&ReceiptRenderer, 9);
        assert_eq!(docs[0].issuer_code, "goodwill");
        assert_eq!(docs[1].issuer_code, "salvation-army");
        assert_eq!(docs[8].issuer_code, "goodwill");
    }

    #[test]
    fn test_receipt_number_format() {
        let doc = &render_many(&ReceiptRenderer, 1)[0];
        let number = doc.expected_fields["receipt_number"].as_str().unwrap();
        assert!(number.starts_with("RCP-202"));
        assert_eq!(number.len(), "RCP-2025-12345".len());
    }
}
