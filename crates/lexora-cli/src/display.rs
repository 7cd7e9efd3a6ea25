//! Card rendering for API results.
//!
//! Each result prints as a titled card: short fields as aligned rows, long
//! text as an indented block.

use chrono::{DateTime, Utc};
use lexora_client::Reachability;
use lexora_core::{
    ClauseCompareRequest, CompareResponse, ExplainResponse, HealthReport, LegalQaResponse,
    NdaResponse,
};

const LABEL_WIDTH: usize = 18;

// ── Public API ──

pub fn print_nda(result: &NdaResponse) {
    print_title("Non-Disclosure Agreement");
    print_row("rag enhanced", yes_no(result.rag_enhanced));
    print_row("document", result.download_filename());
    println!();
    print_block(&result.nda_draft);
}

pub fn print_explanation(result: &ExplainResponse) {
    print_title("Clause Explanation");
    print_row("legal domain", &result.legal_domain);
    print_row("rag enhanced", yes_no(result.rag_enhanced));
    println!();
    print_block(&result.explanation);
}

pub fn print_comparison(form: &ClauseCompareRequest, result: &CompareResponse) {
    print_title(&format!(
        "{}: {} vs {}",
        form.clause_type, form.country_1, form.country_2
    ));
    print_row("rag enhanced", yes_no(result.rag_enhanced));
    println!();

    println!("{}", form.country_1);
    print_block(&result.country_1_analysis);
    println!("{}", form.country_2);
    print_block(&result.country_2_analysis);
    println!("Key Differences");
    print_block(&result.key_differences);
}

pub fn print_answer(result: &LegalQaResponse) {
    print_title("Legal Answer");
    print_row("confidence", &result.confidence);
    print_row("sources used", yes_no(result.sources_used));
    println!();
    print_block(&result.answer);
}

pub fn print_health(
    reachability: Reachability,
    last_checked: Option<DateTime<Utc>>,
    report: Option<&HealthReport>,
) {
    print_title("Lexora API");
    print_row("reachability", reachability.as_str());
    if let Some(ts) = last_checked {
        print_row("last checked", &ts.to_rfc3339());
    }

    let Some(report) = report else {
        println!();
        return;
    };
    print_row("status", &report.status);
    if let Some(ts) = &report.timestamp {
        print_row("server time", ts);
    }
    print_row("rag enabled", yes_no(report.rag_enabled));
    if !report.services.is_empty() {
        print_row("services", &report.services.join(", "));
    }
    println!();
}

/// Inline error line, shown in place of a result.
pub fn print_error(message: &str) {
    eprintln!("error: {message}");
}

// ── Helpers ──

fn print_title(title: &str) {
    println!("=== {title} ===");
}

fn print_row(label: &str, value: &str) {
    println!("  {label:<LABEL_WIDTH$} {value}");
}

fn print_block(text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            println!();
        } else {
            println!("    {line}");
        }
    }
    println!();
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
