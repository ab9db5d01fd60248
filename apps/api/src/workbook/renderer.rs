//! Document renderer — deterministic transform from a flat form record into
//! a sectioned, self-contained HTML report.
//!
//! The output doubles as the email body and the standalone attachment, so
//! everything is inline: one `<style>` block, no external resources. Values
//! are trusted as-is (the form portal is an internal tool behind auth), so
//! no HTML escaping is applied beyond newline conversion.

use chrono::{DateTime, Utc};

use crate::workbook::fields::{FieldValue, FormData};
use crate::workbook::sections::{workbook_sections, SectionSpec};

/// Inline stylesheet for the document shell. Kept print-friendly: the
/// recipient is expected to print the attachment to PDF.
const STYLES: &str = "\
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; color: #1a1a1a; }\n\
    .header { background: linear-gradient(135deg, #003366 0%, #1a4d80 100%); color: white; padding: 25px; border-radius: 12px; margin-bottom: 20px; }\n\
    .confidential { background: #cc0000; padding: 4px 12px; font-size: 10px; font-weight: bold; letter-spacing: 1px; display: inline-block; border-radius: 3px; margin-bottom: 10px; }\n\
    .header h1 { font-size: 20px; margin: 0; }\n\
    .header p { font-size: 12px; opacity: 0.9; margin-top: 5px; }\n\
    .section { background: #f8f9fa; border-radius: 10px; padding: 20px; margin-bottom: 20px; border-left: 4px solid #003366; }\n\
    .section h2 { color: #003366; font-size: 16px; margin: 0 0 15px 0; padding-bottom: 10px; border-bottom: 2px solid #e0e0e0; }\n\
    .field { margin-bottom: 12px; }\n\
    .field-label { font-weight: 600; color: #003366; font-size: 13px; }\n\
    .field-value { background: white; padding: 10px; border-radius: 6px; margin-top: 4px; font-size: 14px; border: 1px solid #e0e0e0; }\n\
    .checkbox-item { display: inline-block; margin-right: 15px; font-size: 13px; }\n\
    .footer { text-align: center; font-size: 11px; color: #666; margin-top: 30px; padding-top: 20px; border-top: 1px solid #e0e0e0; }\n\
    @media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }";

/// Renders a workbook submission into the fixed five-section HTML document.
///
/// Built once at startup; section definitions are fixed for the lifetime of
/// the process. Rendering reads nothing but the form and the clock.
#[derive(Debug)]
pub struct WorkbookRenderer {
    sections: Vec<SectionSpec>,
    case_caption: String,
}

impl WorkbookRenderer {
    pub fn new(party_name: &str, case_caption: &str) -> Self {
        Self {
            sections: workbook_sections(party_name),
            case_caption: case_caption.to_string(),
        }
    }

    /// Renders with the current wall-clock time in the header line.
    pub fn render(&self, form: &FormData) -> String {
        self.render_at(form, Utc::now())
    }

    /// Renders with an injected render time. Pure: identical inputs produce
    /// byte-identical output.
    pub fn render_at(&self, form: &FormData, now: DateTime<Utc>) -> String {
        let mut html = String::with_capacity(8 * 1024);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <style>\n");
        html.push_str(STYLES);
        html.push_str("\n  </style>\n</head>\n<body>\n");

        html.push_str("  <div class=\"header\">\n");
        html.push_str(
            "    <span class=\"confidential\">PRIVILEGED & CONFIDENTIAL — ATTORNEY WORK PRODUCT</span>\n",
        );
        html.push_str("    <h1>Attorney Workbook — Pre-Meeting Preparation</h1>\n");
        html.push_str(&format!("    <p>{}</p>\n", self.header_line(now)));
        html.push_str("  </div>\n");

        for section in &self.sections {
            render_section(&mut html, section, form);
        }

        html.push_str("  <div class=\"footer\">\n");
        html.push_str("    <p><strong>⚠️ ATTORNEY WORK PRODUCT — DO NOT DISTRIBUTE</strong></p>\n");
        html.push_str(
            "    <p>This document was generated from the secure Attorney Workbook portal.</p>\n",
        );
        html.push_str(
            "    <p>Print this page to PDF for your records (Cmd/Ctrl + P → Save as PDF)</p>\n",
        );
        html.push_str("  </div>\n</body>\n</html>\n");

        html
    }

    fn header_line(&self, now: DateTime<Utc>) -> String {
        let generated = now.format("%-m/%-d/%Y, %-I:%M:%S %p UTC");
        if self.case_caption.is_empty() {
            format!("Generated: {generated}")
        } else {
            format!("{} | Generated: {generated}", self.case_caption)
        }
    }
}

/// Renders one section block: heading, then the checklist bucket (boolean
/// values, inline), then the text bucket (string values, label/value pairs).
/// The heading renders even when every field is absent.
fn render_section(html: &mut String, section: &SectionSpec, form: &FormData) {
    html.push_str(&format!(
        "  <div class=\"section\"><h2>{}</h2>\n",
        section.title
    ));

    // Partition by runtime value type; order within each bucket follows the
    // section's field list, not the submission.
    let mut checklist: Vec<(&str, bool)> = Vec::new();
    let mut text: Vec<(&str, &FieldValue)> = Vec::new();
    for field in &section.fields {
        match form.get(field) {
            Some(FieldValue::Bool(b)) => checklist.push((field, *b)),
            Some(value) => text.push((field, value)),
            None => {} // absent text fields are skipped, not placeholdered
        }
    }

    if !checklist.is_empty() {
        html.push_str(
            "    <div class=\"field\"><div class=\"field-label\">Checklist Items</div><div class=\"field-value\">",
        );
        for (field, checked) in checklist {
            html.push_str(&format!(
                "<span class=\"checkbox-item\">{} {}</span>",
                if checked { "✓" } else { "☐" },
                format_field_name(field)
            ));
        }
        html.push_str("</div></div>\n");
    }

    for (field, value) in text {
        html.push_str(&format!(
            "    <div class=\"field\">\n      <div class=\"field-label\">{}</div>\n      <div class=\"field-value\">{}</div>\n    </div>\n",
            format_field_name(field),
            format_value(value)
        ));
    }

    html.push_str("  </div>\n");
}

/// "meeting_date" → "Meeting Date", "demand_302s" → "Demand 302s", and the
/// one domain relabel: "resp_3" → "Response #3".
fn format_field_name(name: &str) -> String {
    let label = name
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    match label.strip_prefix("Resp ") {
        Some(n) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => {
            format!("Response #{n}")
        }
        _ => label,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Empty strings become an explicit placeholder so a touched-but-blank field
/// is distinguishable from one the form never sent. Newlines become `<br>`.
/// Booleans normally render through the checklist block; the Yes/No form
/// here covers any that reach the text path.
fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(true) => "✓ Yes".to_string(),
        FieldValue::Bool(false) => "✗ No".to_string(),
        FieldValue::Text(s) if s.is_empty() => {
            "<em style='color:#999'>Not provided</em>".to_string()
        }
        FieldValue::Text(s) => s.replace('\n', "<br>"),
    }
}
