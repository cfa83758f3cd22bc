//! Brokerage confirmation of a gift of publicly traded shares.

use rand::RngCore;
use serde_json::json;

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY, NAVY, PANEL, SILVER, WHITE};
use super::{labeled, RenderRequest, RenderedDocument, Renderer};
use crate::models::{DocumentType, Money};
use crate::sampling::{cycle, masked_account, pick, random_amount, random_date, random_int};
use crate::utils::format::{iso_date, long_date};

const WIDTH: u32 = 700;
const HEIGHT: u32 = 800;

const DISCLOSURE: &str = "Shares were delivered by DTC transfer to the charitable organization \
named above. The value shown is the mean of the high and low quoted prices on the transfer date \
and is provided for informational purposes. Retain this confirmation with your tax records.";

#[derive(Debug, Default, Clone, Copy)]
pub struct StockConfirmationRenderer;

impl Renderer for StockConfirmationRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::StockConfirmation
    }

    fn file_prefix(&self) -> &'static str {
        "stock_confirmation"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let catalog = request.catalog;
        let brokerage = cycle(&catalog.brokerages, request.slot);
        let org = pick(rng, &catalog.organizations);
        let donor = pick(rng, &catalog.donors);
        let security = pick(rng, &catalog.securities);
        let account = masked_account(rng);
        let transferred = random_date(rng, request.dates);
        let confirmation = format!("TC-{}", random_int(rng, 1_000_000, 9_999_999));
        let shares = random_int(rng, 10, 500) as u32;
        let price = random_amount(rng, Money::from_dollars(20), Money::from_dollars(400));
        let total = price.times(shares);

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let small = TextStyle::regular(10.0);
        let normal = TextStyle::regular(12.0);

        canvas.filled_box(0, 0, width, 80, NAVY);
        canvas.text(30, 20, brokerage.display_name, TextStyle::bold(22.0).color(WHITE));
        canvas.text(30, 55, "Securities Transfer Confirmation", small.color(SILVER));
        canvas.text_right(
            width - 30,
            55,
            &format!("DTC Participant #{}", brokerage.dtc_number),
            small.color(SILVER),
        );

        let mut y = 105;
        canvas.text(30, y, "CHARITABLE GIFT OF SECURITIES", TextStyle::bold(16.0));
        canvas.text_right(width - 30, y + 2, &format!("Confirmation No. {}", confirmation), normal);
        y += 40;

        labeled(&mut canvas, 30, y, "Account holder", donor.full_name, 12.0);
        labeled(&mut canvas, 420, y, "Account", &account, 12.0);
        y += 22;
        canvas.text(30, y, donor.street_address, small.color(GRAY));
        y += 16;
        canvas.text(30, y, &donor.city_line(), small.color(GRAY));
        y += 34;

        canvas.bordered_box(30, y, width - 30, y + 70, GRAY, 1);
        canvas.text(40, y + 8, "Delivered to:", TextStyle::bold(12.0));
        canvas.text(60, y + 28, org.legal_name, normal);
        canvas.text(60, y + 46, &format!("EIN: {}", org.ein), normal);
        y += 90;

        labeled(&mut canvas, 30, y, "Transfer date", &long_date(transferred), 12.0);
        y += 34;

        canvas.filled_box(30, y, width - 30, y + 24, PANEL);
        canvas.text(40, y + 5, "Security", TextStyle::bold(11.0));
        canvas.text(330, y + 5, "Symbol", TextStyle::bold(11.0));
        canvas.text(420, y + 5, "CUSIP", TextStyle::bold(11.0));
        canvas.text(540, y + 5, "Quantity", TextStyle::bold(11.0));
        y += 30;
        canvas.text(40, y, security.name, TextStyle::regular(11.0));
        canvas.text(330, y, security.ticker, TextStyle::regular(11.0));
        canvas.text(420, y, security.cusip, TextStyle::regular(11.0));
        canvas.text(540, y, &format!("{} shares", shares), TextStyle::regular(11.0));
        y += 24;
        canvas.line(30, y, width - 30, y, GRAY);
        y += 16;

        labeled(&mut canvas, 330, y, "Price per share", &price.to_string(), 12.0);
        y += 22;
        canvas.text(330, y, &format!("Total value: {}", total), TextStyle::bold(14.0));
        y += 50;

        y = canvas.paragraph(30, y, DISCLOSURE, small.color(GRAY), 640, 16);
        y += 30;
        canvas.line(30, y, width - 30, y, BLACK);
        canvas.text(30, y + 8, "Member SIPC. Not FDIC insured.", small.color(GRAY));

        let fields = json!({
            "brokerage_name": brokerage.display_name,
            "account_number": account,
            "confirmation_number": confirmation,
            "organization_name": org.legal_name,
            "ein": org.ein,
            "donor_name": donor.full_name,
            "security_name": security.name,
            "ticker": security.ticker,
            "shares": shares,
            "price_per_share": price,
            "amount": total,
            "date": iso_date(transferred),
        });
        RenderedDocument::new(DocumentType::StockConfirmation, brokerage.short_code, canvas, fields)
    }
}
