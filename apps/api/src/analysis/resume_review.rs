//! Resume review. Grounds the judge's completeness score in the rule-based findings
//! and blends the two into the final completeness score.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::prompts::RESUME_REVIEW_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{judge_json, Judge};
use crate::scoring::blend::RESUME_COMPLETENESS_WEIGHTS;
use crate::scoring::resume_rules::{self, ResumeFindings, RuleReport};

pub const MAX_SUGGESTIONS: usize = 8;
const MAX_SECTION_SCORE: i64 = 5;
pub(crate) const NO_RATIONALE: &str = "No rationale provided";

/// Per-section quality, 0-5 each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub summary: u8,
    pub education: u8,
    pub experience: u8,
    pub other: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub completeness_score: u32, // 0-100
    pub completeness_rationale: String,
    pub section_scores: SectionScores,
    pub suggestions: Vec<String>, // ≤ 8
    pub rule_based_findings: ResumeFindings,
}

/// What the judge is asked to return. Only the headline score is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompletenessJudgment {
    completeness_score: f64,
    #[serde(default)]
    completeness_rationale: Option<String>,
    #[serde(default)]
    section_scores: Option<RawSectionScores>,
    #[serde(default)]
    suggestions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSectionScores {
    #[serde(default)]
    summary: Option<f64>,
    #[serde(default)]
    education: Option<f64>,
    #[serde(default)]
    experience: Option<f64>,
    #[serde(default)]
    other: Option<f64>,
}

/// Runs the rule-based analyzer, asks the judge, and blends both scores.
pub async fn review_resume(
    judge: &dyn Judge,
    resume_text: &str,
) -> Result<ResumeAnalysis, AppError> {
    let report = resume_rules::analyze(resume_text);
    let prompt = build_review_prompt(resume_text, &report.findings, Utc::now().year());

    let judgment: CompletenessJudgment = judge_json(judge, &prompt).await?;

    let analysis = assemble(report, judgment);
    info!(
        completeness_score = analysis.completeness_score,
        words = analysis.rule_based_findings.word_count,
        "Resume review complete"
    );
    Ok(analysis)
}

fn build_review_prompt(resume_text: &str, findings: &ResumeFindings, current_year: i32) -> String {
    let year = current_year.to_string();
    let findings_summary = findings.to_prompt_summary();
    render(
        RESUME_REVIEW_PROMPT_TEMPLATE,
        &[
            ("current_year", year.as_str()),
            ("findings_summary", findings_summary.as_str()),
            ("resume_text", resume_text),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

fn assemble(report: RuleReport, judgment: CompletenessJudgment) -> ResumeAnalysis {
    let external_score = judgment.completeness_score as i64;
    let completeness_score =
        RESUME_COMPLETENESS_WEIGHTS.blend(i64::from(report.rule_score), external_score);

    let raw = judgment.section_scores.unwrap_or_default();

    ResumeAnalysis {
        completeness_score,
        completeness_rationale: judgment
            .completeness_rationale
            .unwrap_or_else(|| NO_RATIONALE.to_string()),
        section_scores: SectionScores {
            summary: clamp_section(raw.summary),
            education: clamp_section(raw.education),
            experience: clamp_section(raw.experience),
            other: clamp_section(raw.other),
        },
        suggestions: judgment
            .suggestions
            .unwrap_or_default()
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .collect(),
        rule_based_findings: report.findings,
    }
}

fn clamp_section(score: Option<f64>) -> u8 {
    (score.unwrap_or(0.0) as i64).clamp(0, MAX_SECTION_SCORE) as u8
}
