//! Checking account statement excerpt with charitable debits.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde_json::{json, Value};

use super::canvas::{DocumentCanvas, TextStyle, BLACK, GRAY, NAVY, PANEL, RED, SILVER, WHITE};
use super::{RenderRequest, RenderedDocument, Renderer};
use crate::models::{DocumentType, Money, OrganizationRecord};
use crate::sampling::{
    cycle, days_after, masked_account, pick, pick_distinct, random_amount, random_date, random_int,
};
use crate::utils::format::{iso_date, slash_date};

const WIDTH: u32 = 700;
const HEIGHT: u32 = 600;
const STATEMENT_DAYS: u64 = 30;

const MERCHANTS: [&str; 4] = ["GROCERY STORE", "GAS STATION", "RESTAURANT", "ONLINE PURCHASE"];

struct Transaction<'a> {
    date: NaiveDate,
    description: String,
    amount: Money,
    balance: Money,
    charity: Option<&'a OrganizationRecord>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BankStatementRenderer;

impl Renderer for BankStatementRenderer {
    fn document_type(&self) -> DocumentType {
        DocumentType::BankStatement
    }

    fn file_prefix(&self) -> &'static str {
        "bank_statement"
    }

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument {
        let catalog = request.catalog;
        let bank = cycle(&catalog.banks, request.slot);
        let account = masked_account(rng);
        let start = random_date(rng, request.dates);
        let end = start.checked_add_days(Days::new(STATEMENT_DAYS)).unwrap_or(start);

        // Merchant debits and charitable debits, interleaved.
        let regular = random_int(rng, 3, 5) as usize;
        let charity_count = random_int(rng, 2, 3) as usize;
        let mut slots: Vec<Option<&OrganizationRecord>> = vec![None; regular];
        slots.extend(
            pick_distinct(rng, &catalog.organizations, charity_count)
                .into_iter()
                .map(Some),
        );
        slots.shuffle(rng);

        let mut balance = random_amount(rng, Money::from_dollars(5000), Money::from_dollars(15000));
        let mut date = start;
        let mut transactions = Vec::with_capacity(slots.len());
        for charity in slots {
            let (description, amount) = match charity {
                Some(org) => (
                    format!("DONATION {}", org.legal_name.to_uppercase()),
                    -random_amount(rng, Money::from_dollars(50), Money::from_dollars(500)),
                ),
                None => (
                    pick(rng, &MERCHANTS).to_string(),
                    -random_amount(rng, Money::from_dollars(20), Money::from_dollars(200)),
                ),
            };
            balance = balance + amount;
            transactions.push(Transaction {
                date,
                description,
                amount,
                balance,
                charity,
            });
            date = days_after(rng, date, 1, 5).min(end);
        }

        let mut canvas = DocumentCanvas::new(WIDTH, HEIGHT, request.typeface);
        let width = canvas.width();
        let height = canvas.height();
        let normal = TextStyle::regular(11.0);
        let small = TextStyle::regular(10.0);
        let header = TextStyle::bold(14.0);

        canvas.filled_box(0, 0, width, 80, NAVY);
        canvas.text(30, 20, bank.display_name, TextStyle::bold(22.0).color(WHITE));
        canvas.text(30, 55, "Account Statement", small.color(SILVER));
        canvas.text_right(
            width - 30,
            55,
            &format!("Routing: {}", bank.routing_number),
            small.color(SILVER),
        );

        let mut y = 100;
        canvas.text(30, y, &format!("Account: {}", account), normal);
        canvas.text(400, y, "Statement Period:", normal);
        y += 20;
        canvas.text(30, y, "Primary Checking", small.color(GRAY));
        canvas.text(400, y, &format!("{} - {}", slash_date(start), slash_date(end)), small);
        y += 40;

        canvas.filled_box(20, y, width - 20, y + 25, PANEL);
        canvas.text(30, y + 5, "Date", header);
        canvas.text(120, y + 5, "Description", header);
        canvas.text(450, y + 5, "Amount", header);
        canvas.text(560, y + 5, "Balance", header);
        y += 30;

        let mut charitable = Vec::new();
        for txn in &transactions {
            if y > height - 80 {
                break;
            }
            canvas.text(30, y, &slash_date(txn.date), normal);
            canvas.text(120, y, &txn.description, normal);
            let color = if txn.amount.is_negative() { RED } else { BLACK };
            canvas.text(450, y, &txn.amount.to_string(), normal.color(color));
            canvas.text(560, y, &txn.balance.to_string(), normal);
            y += 22;

            if let Some(org) = txn.charity {
                charitable.push(json!({
                    "organization": org.legal_name,
                    "amount": txn.amount.abs(),
                    "date": iso_date(txn.date),
                }));
            }
        }

        canvas.line(20, height - 50, width - 20, height - 50, GRAY);
        canvas.text(30, height - 40, "Page 1 of 1", small.color(GRAY));

        let fields = json!({
            "bank_name": bank.display_name,
            "routing_number": bank.routing_number,
            "account_number": account,
            "statement_period_start": iso_date(start),
            "statement_period_end": iso_date(end),
            "charitable_transactions": Value::Array(charitable),
        });
        RenderedDocument::new(DocumentType::BankStatement, bank.short_code, canvas, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{assert_fields_drawn, render_many};

    #[test]
    fn test_statement_fields_are_drawn() {
        for doc in render_many(&BankStatementRenderer, 10) {
            assert_fields_drawn(&doc);
        }
    }

    #[test]
    fn test_statement_has_charitable_debits() {
        for doc in render_many(&BankStatementRenderer, 10) {
            let txns = doc.expected_fields["charitable_transactions"].as_array().unwrap();
            assert!((2..=3).contains(&txns.len()));
            for txn in txns {
                assert!(txn["amount"].as_f64().unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_statement_period_is_thirty_days() {
        let doc = &render_many(&BankStatementRenderer, 1)[0];
        let start = doc.expected_fields["statement_period_start"].as_str().unwrap();
        let end = doc.expected_fields["statement_period_end"].as_str().unwrap();
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap();
        assert_eq!((end - start).num_days(), 30);
    }

    #[test]
    fn test_statement_uses_bank_short_code() {
        let docs = render_many(&BankStatementRenderer, 6);
        assert_eq!(docs[0].issuer_code, "chase");
        assert_eq!(docs[5].issuer_code, "chase");
    }
}
