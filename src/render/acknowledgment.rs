//! Acknowledgment letters for cash and in-kind gifts.

use rand::RngCore;
use serde_json::json;

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY};
use super::{RenderRequest, RenderedDocument, Renderer};
use crate::models::{AssetType, DocumentType, ExpectedFields, ManifestKind, Money};
use crate::sampling::{cycle, days_before, pick, random_amount, random_date};
use crate::utils::format::{iso_date, long_date};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 850;
const TEXT_WIDTH: u32 = 520;

const CASH_TAX_STATEMENT: &str = "This letter serves as your official receipt for tax purposes. \
No goods or services were provided in exchange for your contribution. \
Please retain this letter for your tax records.";

const IN_KIND_TAX_STATEMENT: &str = "No goods or services were provided in exchange for your \
contribution. The value shown was estimated by the donor; our organization does not assign a \
value to donated property. Please retain this letter for your tax records.";

/// Field present only on in-kind letters.
const ITEM_DESCRIPTION: &str = "item_description";

/// What the letter acknowledges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contribution {
    /// Cash or check.
    Cash,
    /// Donated goods described by the donor.
    InKind,
}

impl Contribution {
    /// The letter a donation of `asset_type` calls for.
    pub fn for_asset(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Cash => Self::Cash,
            AssetType::Goods | AssetType::Vehicle | AssetType::Securities => Self::InKind,
        }
    }

    /// Recover the variant of an already rendered letter.
    pub fn of_fields(fields: &ExpectedFields) -> Self {
        if fields.contains_key(ITEM_DESCRIPTION) {
            Self::InKind
        } else {
            Self::Cash
        }
    }

    /// Manifest this variant is generated into.
    pub fn source_manifest(&self) -> ManifestKind {
        match self {
            Self::Cash => ManifestKind::Primary,
            Self::InKind => ManifestKind::IrsForms,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AcknowledgmentLetterRenderer {
    contribution: Contribution,
}

impl AcknowledgmentLetterRenderer {
    pub fn new(contribution: Contribution) -> Self {
        Self { contribution }
    }
}

impl Default for AcknowledgmentLetterRenderer {
    fn default() -> Self {
        Self::new(Contribution::Cash)
    }
}

impl Renderer for AcknowledgmentLetterRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::AcknowledgmentLetter
    }

    fn file_prefix(&self) -> &'static str {
        match self.contribution {
            Contribution::Cash => "acknowledgment",
            Contribution::InKind => "acknowledgment_inkind",
        }
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let org = cycle(&request.catalog.organizations, request.slot);
        let donor = pick(rng, &request.catalog.donors);
        let letter_date = random_date(rng, request.dates);
        let donation_date = days_before(rng, letter_date, 1, 14);
        let item = pick(rng, &request.catalog.goods);
        let amount = match self.contribution {
            Contribution::Cash => random_amount(rng, Money::from_dollars(25), Money::from_dollars(5000)),
            Contribution::InKind => random_amount(rng, Money::from_dollars(50), Money::from_dollars(2500)),
        };

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let center = width / 2;
        let body = TextStyle::regular(12.0);

        let mut y = 40;
        canvas.text_centered(center, y, org.legal_name, TextStyle::bold(20.0));
        y += 30;
        canvas.text_centered(center, y, org.mailing_address, TextStyle::regular(10.0).color(GRAY));
        y += 20;
        canvas.text_centered(center, y, &format!("Tax ID: {}", org.ein), TextStyle::regular(10.0).color(GRAY));
        y += 10;
        canvas.line(40, y + 10, width - 40, y + 10, GRAY);
        y += 40;

        canvas.text(40, y, &long_date(letter_date), body);
        y += 40;

        canvas.text(40, y, donor.full_name, body);
        y += 20;
        canvas.text(40, y, donor.street_address, body);
        y += 20;
        canvas.text(40, y, &donor.city_line(), body);
        y += 40;

        canvas.text(40, y, &format!("Dear {},", donor.full_name), body);
        y += 35;

        let thanks = match self.contribution {
            Contribution::Cash => format!(
                "Thank you for your generous donation of {} received on {}. \
                 Your support helps us continue our mission to serve the community.",
                amount,
                long_date(donation_date)
            ),
            Contribution::InKind => format!(
                "Thank you for your generous donation of {} received on {}. \
                 Your gift helps us continue our mission to serve the community.",
                item.description.to_lowercase(),
                long_date(donation_date)
            ),
        };
        y = canvas.paragraph(40, y, &thanks, body, TEXT_WIDTH, 20);
        y += 25;

        let statement = match self.contribution {
            Contribution::Cash => CASH_TAX_STATEMENT,
            Contribution::InKind => IN_KIND_TAX_STATEMENT,
        };
        y = canvas.paragraph(40, y, statement, body, TEXT_WIDTH, 20);
        y += 30;

        let box_height = match self.contribution {
            Contribution::Cash => 80,
            Contribution::InKind => 100,
        };
        canvas.bordered_box(40, y, width - 40, y + box_height, GRAY, 1);
        canvas.text(50, y + 10, "Donation Details:", TextStyle::bold(16.0));
        match self.contribution {
            Contribution::Cash => {
                canvas.text(50, y + 35, &format!("Amount: {}", amount), body);
                canvas.text(300, y + 35, "Type: Cash/Check", body);
            }
            Contribution::InKind => {
                canvas.text(50, y + 35, &format!("Description: {}", item.description), body);
                canvas.text(50, y + 75, &format!("Donor-Estimated Value: {}", amount), body);
                canvas.text(380, y + 75, "Type: Non-cash", body);
            }
        }
        canvas.text(
            50,
            y + 55,
            &format!("Date Received: {}", iso_date(donation_date)),
            body,
        );
        y += box_height + 30;

        canvas.text(40, y, "With gratitude,", body);
        y += 50;
        canvas.line(40, y, 200, y, BLACK);
        y += 5;
        canvas.text(40, y, "Executive Director", TextStyle::regular(10.0));
        y += 15;
        canvas.text(40, y, org.legal_name, TextStyle::regular(10.0));

        let mut fields = json!({
            "organization_name": org.legal_name,
            "ein": org.ein,
            "amount": amount,
            "date": iso_date(donation_date),
            "donor_name": donor.full_name,
        });
        if self.contribution == Contribution::InKind {
            fields[ITEM_DESCRIPTION] = json!(item.description);
        }
        RenderedDocument::new(DocumentType::AcknowledgmentLetter, org.short_code, canvas, fields)
    }
}
