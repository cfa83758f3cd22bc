//! Document renderers.
//!
//! Each renderer lays out one document type on a [`DocumentCanvas`] and
//! returns the raster together with the field values it drew. Renderers are
//! pure functions of the request and the random source.

mod acknowledgment;
mod appraisal;
mod bank_statement;
pub mod canvas;
mod form_1098c;
mod form_8283;
mod receipt;
mod stock_confirmation;
pub mod typeface;

use image::RgbImage;
use rand::RngCore;
use serde_json::Value;

use crate::catalog::SampleCatalog;
use crate::models::{DocumentType, ExpectedFields};
use crate::sampling::DateRange;

pub use acknowledgment::{AcknowledgmentLetterRenderer, Contribution};
pub use appraisal::QualifiedAppraisalRenderer;
pub use bank_statement::BankStatementRenderer;
pub use canvas::{DocumentCanvas, TextStyle};
pub use form_1098c::Form1098CRenderer;
pub use form_8283::{Form8283SectionARenderer, Form8283SectionBRenderer};
pub use receipt::ReceiptRenderer;
pub use stock_confirmation::StockConfirmationRenderer;
pub use typeface::{Typeface, Weight};

use canvas::{BLACK, GRAY};

/// Inputs shared by every render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub catalog: &'a SampleCatalog,
    pub typeface: &'a Typeface,
    pub dates: &'a DateRange,
    /// Position within the category run; selects the issuer cyclically.
    pub slot: usize,
}

/// A rendered document before degradation.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub document_type: DocumentType,
    /// Short code of the issuing organization, bank or brokerage.
    pub issuer_code: String,
    pub image: RgbImage,
    pub expected_fields: ExpectedFields,
    /// Every string drawn onto the image, in drawing order.
    pub drawn_text: Vec<String>,
}

impl RenderedDocument {
    pub(crate) fn new(
        document_type: DocumentType,
        issuer_code: &str,
        canvas: DocumentCanvas<'_>,
        fields: Value,
    ) -> Self {
        let (image, drawn_text) = canvas.finish();
        let expected_fields = match fields {
            Value::Object(map) => map,
            _ => ExpectedFields::new(),
        };
        Self {
            document_type,
            issuer_code: issuer_code.to_string(),
            image,
            expected_fields,
            drawn_text,
        }
    }

    /// All drawn strings joined by spaces, for containment checks.
    pub fn text_content(&self) -> String {
        self.drawn_text.join(" ")
    }
}

/// One document layout.
pub trait Renderer {
    fn document_type(&self) -> DocumentType;

    /// Leading part of generated file names (`receipt`, `form_8283a`, ...).
    fn file_prefix(&self) -> &'static str;

    fn render(&self, request: &RenderRequest<'_>, rng: &mut dyn RngCore) -> RenderedDocument;
}

/// Header block shared by the IRS form layouts: form number box on the left,
/// title centered, agency line, then a heavy rule. Returns the y below it.
pub(crate) fn irs_form_header(
    canvas: &mut DocumentCanvas<'_>,
    form_number: &str,
    revision: &str,
    title: &str,
    subtitle: &str,
) -> i32 {
    let width = canvas.width();
    canvas.bordered_box(20, 20, width - 20, 110, BLACK, 2);
    canvas.line(200, 20, 200, 110, BLACK);
    canvas.text(30, 32, form_number, TextStyle::bold(22.0));
    canvas.text(30, 62, revision, TextStyle::regular(10.0).color(GRAY));
    canvas.text(30, 80, "Department of the Treasury", TextStyle::regular(9.0).color(GRAY));
    canvas.text(30, 92, "Internal Revenue Service", TextStyle::regular(9.0).color(GRAY));
    let center = 200 + (width - 220) / 2;
    canvas.text_centered(center, 40, title, TextStyle::bold(18.0));
    canvas.text_centered(center, 70, subtitle, TextStyle::regular(11.0));
    130
}

/// `Label: value` on one line.
pub(crate) fn labeled(canvas: &mut DocumentCanvas<'_>, x: i32, y: i32, label: &str, value: &str, size: f32) {
    canvas.text(x, y, &format!("{}: {}", label, value), TextStyle::regular(size));
}
