use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::analysis::{AnalysisReport, RiskFinding};

const TITLE: &str = "KYC AI: Fraud &amp; AML Risk Detection";

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
pre{white-space:pre-wrap;background:#f6f6f6;padding:.8rem}\
.msg{padding:.6rem .8rem;margin:.4rem 0;border-radius:4px}\
.info{background:#e8f0fe}.success{background:#e6f4ea}\
.warning{background:#fef7e0}.error{background:#fce8e6}";

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{TITLE}</h1>\n{body}</body>\n</html>\n"
    )
}

fn message(out: &mut String, class: &str, text: &str) {
    let _ = writeln!(out, "<div class=\"msg {}\">{}</div>", class, encode_text(text));
}

/// Upload form posting to `/analyze`
pub fn render_upload_page(max_upload_bytes: usize) -> String {
    let max_mb = max_upload_bytes / (1024 * 1024);
    page(&format!(
        "<h2>Upload a KYC document (Passport, ID, License, etc.)</h2>\n\
         <form action=\"/analyze\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\" accept=\".jpg,.jpeg,.png,.pdf\" required>\n\
         <button type=\"submit\">Analyze</button>\n\
         <p><small>Image or PDF, up to {max_mb} MB.</small></p>\n\
         </form>\n"
    ))
}

pub fn render_report_page(report: &AnalysisReport) -> String {
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<p>Document: <code>{}</code> ({})</p>",
        encode_text(&report.file_name),
        report.mime_type
    );

    message(&mut body, "info", "Extracting KYC details...");
    for error in &report.errors {
        message(&mut body, "error", &error.message);
    }

    if report.is_halted() {
        for warning in &report.warnings {
            message(&mut body, "warning", warning);
        }
        body.push_str(&upload_again());
        return page(&body);
    }

    message(&mut body, "success", "KYC extraction successful!");

    body.push_str("<h2>Extracted KYC Details</h2>\n");
    if report.fields.is_empty() {
        let text = report.structured_text.as_deref().unwrap_or(&report.extracted_text);
        let _ = writeln!(body, "<pre>{}</pre>", encode_text(text));
    } else {
        body.push_str("<table>\n<tr><th>Field</th><th>Value</th></tr>\n");
        for row in &report.fields {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>",
                encode_text(&row.field),
                encode_text(&row.value)
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Risk Assessment</h2>\n");
    for finding in [&report.fraud, &report.aml].into_iter().flatten() {
        let _ = writeln!(
            body,
            "<p><strong>{} Risk Level:</strong> <span class=\"risk\" data-category=\"{}\">{}%</span></p>",
            finding.category.label(),
            encode_double_quoted_attribute(finding.category.label()),
            finding.score
        );
    }

    for finding in [&report.fraud, &report.aml].into_iter().flatten() {
        narrative(&mut body, finding);
    }

    for warning in &report.warnings {
        message(&mut body, "warning", warning);
    }

    body.push_str(&upload_again());
    page(&body)
}

fn narrative(out: &mut String, finding: &RiskFinding) {
    let _ = writeln!(
        out,
        "<h2>{} Analysis</h2>\n<pre>{}</pre>",
        finding.category.label(),
        encode_text(&finding.narrative)
    );
}

fn upload_again() -> String {
    "<p><a href=\"/\">Analyze another document</a></p>\n".to_string()
}

pub fn render_error_page(message_text: &str) -> String {
    let mut body = String::new();
    message(&mut body, "error", message_text);
    body.push_str(&upload_again());
    page(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        KycField, PipelineOutcome, RiskCategory, Stage, StageError, EMPTY_EXTRACTION_WARNING,
    };

    fn report(outcome: PipelineOutcome) -> AnalysisReport {
        AnalysisReport {
            request_id: uuid::Uuid::new_v4(),
            file_name: "sample<1>.png".to_string(),
            mime_type: "image/png",
            document_digest: "00".repeat(32),
            outcome,
            extracted_text: "Name: Jane Doe".to_string(),
            structured_text: Some("Name: Jane Doe".to_string()),
            fields: vec![KycField {
                field: "Name".to_string(),
                value: "Jane <b>Doe</b>".to_string(),
            }],
            fraud: Some(RiskFinding::from_narrative(
                RiskCategory::Fraud,
                "**Fraud Risk:** 10%\n**Analysis:** Looks consistent.".to_string(),
            )),
            aml: Some(RiskFinding::from_narrative(
                RiskCategory::Aml,
                "**AML Risk:** 5%\n**Analysis:** No matches.".to_string(),
            )),
            warnings: Vec::new(),
            errors: Vec::new(),
            analyzed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_upload_page_has_form() {
        let html = render_upload_page(20 * 1024 * 1024);
        assert!(html.contains("action=\"/analyze\""));
        assert!(html.contains("accept=\".jpg,.jpeg,.png,.pdf\""));
        assert!(html.contains("up to 20 MB"));
    }

    #[test]
    fn test_report_page_shows_risk_levels() {
        let html = render_report_page(&report(PipelineOutcome::Completed));
        assert!(html.contains("<strong>Fraud Risk Level:</strong> <span class=\"risk\" data-category=\"Fraud\">10%</span>"));
        assert!(html.contains("<strong>AML Risk Level:</strong> <span class=\"risk\" data-category=\"AML\">5%</span>"));
        assert!(html.contains("<h2>Fraud Analysis</h2>"));
        assert!(html.contains("Looks consistent."));
    }

    #[test]
    fn test_provider_text_is_escaped() {
        let html = render_report_page(&report(PipelineOutcome::Completed));
        assert!(html.contains("Jane &lt;b&gt;Doe&lt;/b&gt;"));
        assert!(html.contains("sample&lt;1&gt;.png"));
        assert!(!html.contains("<b>Doe</b>"));
    }

    #[test]
    fn test_halted_report_shows_warning_only() {
        let mut halted = report(PipelineOutcome::Halted);
        halted.fraud = None;
        halted.aml = None;
        halted.fields.clear();
        halted.warnings.push(EMPTY_EXTRACTION_WARNING.to_string());
        halted.errors.push(StageError::new(Stage::Extraction, "API error: 503"));

        let html = render_report_page(&halted);
        assert!(html.contains(EMPTY_EXTRACTION_WARNING));
        assert!(html.contains("Error during document text extraction"));
        assert!(!html.contains("Risk Assessment"));
    }

    #[test]
    fn test_unknown_score_rendered() {
        let mut unknown = report(PipelineOutcome::Completed);
        unknown.aml = Some(RiskFinding::from_narrative(
            RiskCategory::Aml,
            crate::analysis::FALLBACK_TEXT.to_string(),
        ));

        let html = render_report_page(&unknown);
        assert!(html.contains(">Unknown%</span>"));
    }
}
