//! Offline stand-ins for the generative endpoints.
//!
//! Used when the health probe reports the API unreachable. Output depends only
//! on the request, so the same form always yields the same placeholder.
//! Placeholders are never marked RAG-enhanced.

use lexora_core::{
    ClauseCompareRequest, ClauseExplainRequest, CompareResponse, ExplainResponse,
    NdaGenerateRequest, NdaResponse,
};

const MOCK_NDA_DOWNLOAD_URL: &str = "/mock/nda.docx";

/// Legal area an offline explanation is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDomain {
    Liability,
    Confidentiality,
    IntellectualProperty,
    General,
}

// Checked in order; first hit wins.
const DOMAIN_KEYWORDS: &[(LegalDomain, &[&str])] = &[
    (LegalDomain::Liability, &["liability", "damages"]),
    (
        LegalDomain::Confidentiality,
        &["confidential", "non-disclosure"],
    ),
    (
        LegalDomain::IntellectualProperty,
        &["intellectual property", "copyright"],
    ),
];

impl LegalDomain {
    /// Classify clause text by case-insensitive keyword match.
    pub fn classify(clause: &str) -> Self {
        let lower = clause.to_lowercase();
        DOMAIN_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(domain, _)| *domain)
            .unwrap_or(Self::General)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Liability => "Contract Law - Liability",
            Self::Confidentiality => "Contract Law - Confidentiality",
            Self::IntellectualProperty => "Intellectual Property Law",
            Self::General => "Contract Law",
        }
    }

    fn explanation(&self) -> &'static str {
        match self {
            Self::Liability => {
                "This is a limitation of liability clause that restricts the types and amounts of \
                 damages that can be claimed in case of a breach or dispute. It typically excludes \
                 indirect, consequential, or punitive damages and may cap the total liability amount."
            }
            Self::Confidentiality => {
                "This confidentiality clause establishes obligations to protect sensitive \
                 information shared between parties. It defines what constitutes confidential \
                 information and sets forth the duties of the receiving party to maintain secrecy."
            }
            Self::IntellectualProperty => {
                "This intellectual property clause addresses the ownership, use, and protection of \
                 intellectual property rights. It typically specifies who owns what IP and how it \
                 can be used by each party."
            }
            Self::General => {
                "This legal clause contains standard contractual language that establishes rights, \
                 obligations, or limitations between the parties. The specific interpretation \
                 depends on the context and governing jurisdiction."
            }
        }
    }
}

/// Template NDA filled from the form.
pub fn mock_nda(req: &NdaGenerateRequest) -> NdaResponse {
    let nda_draft = format!(
        "NON-DISCLOSURE AGREEMENT

This Non-Disclosure Agreement (\"Agreement\") is entered into on [DATE] between {party_1} (\"Disclosing Party\") and {party_2} (\"Receiving Party\").

WHEREAS, the parties wish to explore potential business opportunities related to {purpose};

NOW, THEREFORE, the parties agree as follows:

1. CONFIDENTIAL INFORMATION
For purposes of this Agreement, \"Confidential Information\" means any and all non-public, proprietary information disclosed by the Disclosing Party.

2. OBLIGATIONS
The Receiving Party agrees to:
- Hold all Confidential Information in strict confidence
- Not disclose Confidential Information to third parties
- Use Confidential Information solely for the stated purpose

3. TERM
This Agreement shall remain in effect for a period of three (3) years.

4. GOVERNING LAW
This Agreement shall be governed by the laws of {jurisdiction}.",
        party_1 = req.party_1,
        party_2 = req.party_2,
        purpose = req.purpose,
        jurisdiction = req.jurisdiction,
    );

    NdaResponse {
        success: true,
        nda_draft,
        download_url: MOCK_NDA_DOWNLOAD_URL.to_string(),
        rag_enhanced: false,
    }
}

/// Keyword-matched explanation of a clause.
pub fn mock_explanation(req: &ClauseExplainRequest) -> ExplainResponse {
    let domain = LegalDomain::classify(&req.clause);
    ExplainResponse {
        success: true,
        explanation: domain.explanation().to_string(),
        legal_domain: domain.label().to_string(),
        rag_enhanced: false,
    }
}

/// Generic two-jurisdiction comparison naming the clause type and both countries.
pub fn mock_comparison(req: &ClauseCompareRequest) -> CompareResponse {
    let ClauseCompareRequest {
        clause_type,
        country_1,
        country_2,
    } = req;

    CompareResponse {
        success: true,
        country_1_analysis: format!(
            "In {country_1}, {clause_type} clauses are generally interpreted with emphasis on \
             contractual freedom and enforceability. Courts typically uphold such clauses unless \
             they are found to be unconscionable or against public policy."
        ),
        country_2_analysis: format!(
            "In {country_2}, {clause_type} clauses are subject to different legal standards and \
             may have additional regulatory requirements. The enforcement approach may vary based \
             on local legal traditions and statutory frameworks."
        ),
        key_differences: format!(
            "Key differences between {country_1} and {country_2}:
- Legal framework and statutory requirements
- Judicial interpretation standards
- Enforcement mechanisms
- Consumer protection considerations"
        ),
        rag_enhanced: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explain(clause: &str) -> ExplainResponse {
        mock_explanation(&ClauseExplainRequest {
            clause: clause.into(),
        })
    }

    #[test]
    fn liability_clause_classified() {
        let resp = explain("The total liability of either party shall not exceed the fees paid.");
        assert_eq!(resp.legal_domain, "Contract Law - Liability");
        assert!(resp.explanation.contains("limitation of liability"));
        assert!(resp.success);
    }

    #[test]
    fn damages_counts_as_liability() {
        assert_eq!(
            LegalDomain::classify("No consequential DAMAGES shall be recoverable."),
            LegalDomain::Liability
        );
    }

    #[test]
    fn confidential_clause_classified() {
        let resp = explain("Recipient shall keep all Confidential Information secret.");
        assert_eq!(resp.legal_domain, "Contract Law - Confidentiality");
    }

    #[test]
    fn liability_beats_confidentiality() {
        assert_eq!(
            LegalDomain::classify("Liability for breach of confidential obligations"),
            LegalDomain::Liability
        );
    }

    #[test]
    fn copyright_clause_is_intellectual_property() {
        assert_eq!(
            LegalDomain::classify("All copyright in deliverables vests in the Client."),
            LegalDomain::IntellectualProperty
        );
    }

    #[test]
    fn other_clauses_are_general() {
        let resp = explain("This Agreement may be executed in counterparts.");
        assert_eq!(resp.legal_domain, "Contract Law");
        assert_eq!(LegalDomain::classify(""), LegalDomain::General);
    }

    #[test]
    fn mock_nda_contains_form_values() {
        let req = NdaGenerateRequest {
            party_1: "Acme".into(),
            party_2: "Globex".into(),
            jurisdiction: "United States".into(),
            purpose: "partnership".into(),
        };
        let resp = mock_nda(&req);
        assert!(resp.success);
        assert!(!resp.rag_enhanced);
        assert!(resp.nda_draft.starts_with("NON-DISCLOSURE AGREEMENT"));
        let draft = &resp.nda_draft;
        assert!(draft.contains("Acme (\"Disclosing Party\") and Globex"));
        assert!(draft.contains("laws of United States."));
        assert!(draft.contains("related to partnership;"));
        assert_eq!(resp.download_filename(), "nda.docx");
    }

    #[test]
    fn mock_nda_is_deterministic() {
        let req = NdaGenerateRequest {
            party_1: "A".into(),
            party_2: "B".into(),
            jurisdiction: "J".into(),
            purpose: "P".into(),
        };
        assert_eq!(mock_nda(&req), mock_nda(&req));
    }

    #[test]
    fn mock_comparison_names_both_countries() {
        let req = ClauseCompareRequest {
            clause_type: "termination".into(),
            country_1: "India".into(),
            country_2: "Germany".into(),
        };
        let resp = mock_comparison(&req);
        let (first, second) = (&resp.country_1_analysis, &resp.country_2_analysis);
        assert!(first.starts_with("In India, termination clauses"));
        assert!(second.starts_with("In Germany, termination clauses"));
        let heading = "Key differences between India and Germany:";
        assert!(resp.key_differences.starts_with(heading));
        assert_eq!(resp.key_differences.lines().count(), 5);
    }
}
