mod display;
mod download;
mod pages;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lexora_client::ApiClient;
use lexora_core::{
    ClauseCompareRequest, ClauseExplainRequest, ClientConfig, LegalQaRequest, NdaGenerateRequest,
};

use pages::{ComparePage, ExplainPage, NdaPage, QaPage, Submission};

#[derive(Parser, Debug)]
#[command(name = "lexora", version, about = "Lexora legal assistant")]
struct Cli {
    /// API base URL; overrides LEXORA_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Where downloaded documents are saved. Defaults to the user's download directory.
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the Lexora API is reachable.
    Health,
    /// Draft a non-disclosure agreement.
    Nda {
        #[arg(long, default_value = "")]
        party_1: String,
        #[arg(long, default_value = "")]
        party_2: String,
        #[arg(long, default_value = "")]
        jurisdiction: String,
        #[arg(long, default_value = "")]
        purpose: String,
        /// Also download the generated .docx.
        #[arg(long)]
        docx: bool,
        /// Also export the draft as PDF.
        #[arg(long)]
        pdf: bool,
    },
    /// Explain a contract clause in plain language.
    Explain {
        clause: String,
        #[arg(long)]
        pdf: bool,
    },
    /// Compare how a clause type is treated in two countries.
    Compare {
        #[arg(long, default_value = "")]
        clause_type: String,
        #[arg(long, default_value = "")]
        country_1: String,
        #[arg(long, default_value = "")]
        country_2: String,
        #[arg(long)]
        pdf: bool,
    },
    /// Ask a free-text legal question.
    Ask {
        question: String,
        #[arg(long)]
        pdf: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => ClientConfig::with_base_url(url),
        None => ClientConfig::from_env(),
    };
    let api = ApiClient::new(config);
    tracing::debug!(
        base_url = api.base_url(),
        "lexora v{}",
        env!("CARGO_PKG_VERSION")
    );

    let out_dir = cli.out_dir.as_deref();
    let ok = match cli.command {
        Command::Health => health(&api).await,
        Command::Nda {
            party_1,
            party_2,
            jurisdiction,
            purpose,
            docx,
            pdf,
        } => {
            let form = NdaGenerateRequest {
                party_1,
                party_2,
                jurisdiction,
                purpose,
            };
            nda(&api, form, docx, pdf, out_dir).await
        }
        Command::Explain { clause, pdf } => {
            explain(&api, ClauseExplainRequest { clause }, pdf, out_dir).await
        }
        Command::Compare {
            clause_type,
            country_1,
            country_2,
            pdf,
        } => {
            let form = ClauseCompareRequest {
                clause_type,
                country_1,
                country_2,
            };
            compare(&api, form, pdf, out_dir).await
        }
        Command::Ask { question, pdf } => {
            ask(&api, LegalQaRequest { question }, pdf, out_dir).await
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print any failure inline. Returns true when the action went through or was skipped.
fn settled(outcome: Submission, error: Option<&str>) -> bool {
    match outcome {
        Submission::Completed | Submission::Skipped => true,
        Submission::Blocked(e) => {
            display::print_error(&e.to_string());
            false
        }
        Submission::Failed => {
            display::print_error(error.unwrap_or("request failed"));
            false
        }
    }
}

async fn health(api: &ApiClient) -> bool {
    let online = api.check_health().await;
    let report = if online {
        match api.health_report().await {
            Ok(report) => Some(report),
            Err(e) => {
                display::print_error(&e.to_string());
                None
            }
        }
    } else {
        None
    };
    display::print_health(api.reachability(), api.last_checked(), report.as_ref());
    online
}

async fn nda(
    api: &ApiClient,
    form: NdaGenerateRequest,
    docx: bool,
    pdf: bool,
    out_dir: Option<&Path>,
) -> bool {
    let mut page = NdaPage::new(form);
    let outcome = page.submit(api).await;
    if !settled(outcome, page.error()) {
        return false;
    }
    if let Some(result) = page.result() {
        display::print_nda(result);
    }

    let mut ok = true;
    if docx {
        let outcome = page.download_document(api, out_dir).await;
        ok &= settled(outcome, page.error());
    }
    if pdf {
        let outcome = page.export_pdf(api, out_dir).await;
        ok &= settled(outcome, page.error());
    }
    ok
}

async fn explain(
    api: &ApiClient,
    form: ClauseExplainRequest,
    pdf: bool,
    out_dir: Option<&Path>,
) -> bool {
    let mut page = ExplainPage::new(form);
    let outcome = page.submit(api).await;
    if !settled(outcome, page.error()) {
        return false;
    }
    if let Some(result) = page.result() {
        display::print_explanation(result);
    }
    if pdf {
        let outcome = page.export_pdf(api, out_dir).await;
        return settled(outcome, page.error());
    }
    true
}

async fn compare(
    api: &ApiClient,
    form: ClauseCompareRequest,
    pdf: bool,
    out_dir: Option<&Path>,
) -> bool {
    let mut page = ComparePage::new(form);
    let outcome = page.submit(api).await;
    if !settled(outcome, page.error()) {
        return false;
    }
    if let Some(result) = page.result() {
        display::print_comparison(&page.form, result);
    }
    if pdf {
        let outcome = page.export_pdf(api, out_dir).await;
        return settled(outcome, page.error());
    }
    true
}

async fn ask(api: &ApiClient, form: LegalQaRequest, pdf: bool, out_dir: Option<&Path>) -> bool {
    let mut page = QaPage::new(form);
    let outcome = page.submit(api).await;
    if !settled(outcome, page.error()) {
        return false;
    }
    if let Some(result) = page.result() {
        display::print_answer(result);
    }
    if pdf {
        let outcome = page.export_pdf(api, out_dir).await;
        return settled(outcome, page.error());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexora_core::ValidationError;

    #[test]
    fn nda_flags_parse_in_kebab_case() {
        let cli = Cli::try_parse_from([
            "lexora",
            "--api-url",
            "http://127.0.0.1:9000/api",
            "nda",
            "--party-1",
            "Acme",
            "--party-2",
            "Globex",
            "--jurisdiction",
            "United States",
            "--purpose",
            "partnership",
            "--pdf",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000/api"));
        match cli.command {
            Command::Nda {
                party_1, pdf, docx, ..
            } => {
                assert_eq!(party_1, "Acme");
                assert!(pdf);
                assert!(!docx);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn missing_nda_fields_reach_validation_as_empty() {
        let cli = Cli::try_parse_from(["lexora", "nda", "--party-1", "Acme"]).unwrap();
        match cli.command {
            Command::Nda { party_2, .. } => assert!(party_2.is_empty()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn out_dir_is_global() {
        let args = ["lexora", "ask", "What is a tort?", "--out-dir", "/tmp/x"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.out_dir.as_deref(), Some(Path::new("/tmp/x")));
    }

    #[test]
    fn blocked_and_failed_outcomes_are_not_settled() {
        assert!(settled(Submission::Completed, None));
        assert!(settled(Submission::Skipped, None));
        let failed = Some("server returned 500: boom");
        assert!(!settled(Submission::Failed, failed));
        let blocked = Submission::Blocked(ValidationError::MissingField("clause"));
        assert!(!settled(blocked, None));
    }
}
