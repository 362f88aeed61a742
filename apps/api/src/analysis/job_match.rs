//! Job match: keyword coverage from the deterministic matcher, semantic fit from the
//! judge, blended into one alignment score.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::prompts::{JOB_DESCRIPTION_PROMPT_TEMPLATE, JOB_MATCH_PROMPT_TEMPLATE};
use crate::analysis::resume_review::NO_RATIONALE;
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{judge_json, null_as_default, Judge, LlmError};
use crate::scoring::blend::JOB_ALIGNMENT_WEIGHTS;
use crate::scoring::job_keywords;
use crate::scoring::keyword_match::{match_keywords, KeywordMatchResult};

pub const MAX_GAPS: usize = 8;
pub const MAX_STRENGTHS: usize = 6;
pub const MAX_RECOMMENDATIONS: usize = 8;

/// How critical a gap is. Parsed case-insensitively; anything unrecognised is `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    High,
    #[default]
    Medium,
    Low,
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Severity::High,
            "low" => Severity::Low,
            _ => Severity::Medium,
        }
    }
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,
}

/// The candidate's self-reported proficiency for one gap, addressed by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapResponse {
    pub gap_index: usize,
    #[serde(default)]
    pub proficiency_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchAnalysis {
    pub alignment_score: u32, // 0-100
    pub alignment_rationale: String,
    pub gaps: Vec<Gap>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub keyword_analysis: KeywordMatchResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlignmentJudgment {
    alignment_score: f64,
    #[serde(default)]
    alignment_rationale: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    gaps: Vec<Gap>,
    #[serde(default, deserialize_with = "null_as_default")]
    strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    recommendations: Vec<String>,
}

/// Extracts job keywords, matches them against the resume, asks the judge for a
/// semantic read, and blends keyword coverage with the judge's score.
pub async fn match_job(
    judge: &dyn Judge,
    resume_text: &str,
    job_description: &str,
) -> Result<JobMatchAnalysis, AppError> {
    let keywords = job_keywords::extract(job_description);
    if keywords.is_empty() {
        debug!("No known keywords found in job description");
    }
    let keyword_analysis = match_keywords(resume_text, &keywords);

    let keyword_summary = keyword_analysis.to_prompt_summary();
    let prompt = render(
        JOB_MATCH_PROMPT_TEMPLATE,
        &[
            ("keyword_summary", keyword_summary.as_str()),
            ("resume_text", resume_text),
            ("job_description", job_description),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    let judgment: AlignmentJudgment = judge_json(judge, &prompt).await?;

    let analysis = assemble(keyword_analysis, judgment);
    info!(
        keywords = keywords.len(),
        keyword_match_rate = analysis.keyword_analysis.overall_match_rate,
        alignment_score = analysis.alignment_score,
        gaps = analysis.gaps.len(),
        "Job match complete"
    );
    Ok(analysis)
}

fn assemble(keyword_analysis: KeywordMatchResult, judgment: AlignmentJudgment) -> JobMatchAnalysis {
    let alignment_score = JOB_ALIGNMENT_WEIGHTS.blend(
        i64::from(keyword_analysis.overall_match_rate),
        judgment.alignment_score as i64,
    );

    JobMatchAnalysis {
        alignment_score,
        alignment_rationale: judgment
            .alignment_rationale
            .unwrap_or_else(|| NO_RATIONALE.to_string()),
        gaps: truncated(judgment.gaps, MAX_GAPS),
        strengths: truncated(judgment.strengths, MAX_STRENGTHS),
        recommendations: truncated(judgment.recommendations, MAX_RECOMMENDATIONS),
        keyword_analysis,
    }
}

fn truncated<T>(mut items: Vec<T>, max: usize) -> Vec<T> {
    items.truncate(max);
    items
}

/// Asks the judge for a plain-text job description for a role and location.
pub async fn generate_job_description(
    judge: &dyn Judge,
    role: &str,
    location: &str,
) -> Result<String, AppError> {
    let prompt = render(
        JOB_DESCRIPTION_PROMPT_TEMPLATE,
        &[("role", role), ("location", location)],
    );

    let text = judge.complete(&prompt).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    info!(role, location, chars = text.len(), "Generated job description");
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{unavailable, FakeJudge};

    const RESUME: &str = "Backend engineer. Built services in Rust and Docker. \
                          Strong communication. 6 years experience. Bachelor of Science.";
    const JOB: &str = "We need Python, Rust and Docker. 5+ years of experience. \
                       Bachelor's degree required. Leadership and communication.";

    #[test]
    fn test_severity_parses_leniently() {
        let gaps: Vec<Gap> = serde_json::from_str(
            r#"[{"category": "a", "severity": "HIGH"},
                {"category": "b", "severity": " Low "},
                {"category": "c", "severity": "critical"},
                {"category": "d"}]"#,
        )
        .unwrap();
        let severities: Vec<Severity> = gaps.iter().map(|g| g.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::High, Severity::Low, Severity::Medium, Severity::Medium]
        );
        assert_eq!(gaps[3].description, "");
    }

    #[tokio::test]
    async fn test_null_gap_fields_take_defaults() {
        let judge = FakeJudge::replying(&[r#"{
            "alignmentScore": 80,
            "gaps": [
                {"category": "Go", "description": "none", "severity": null},
                {"category": null, "description": null, "severity": "high"}
            ],
            "strengths": null
        }"#]);

        let analysis = match_job(&judge, RESUME, JOB).await.unwrap();

        assert_eq!(
            analysis.gaps,
            vec![
                Gap {
                    category: "Go".to_string(),
                    description: "none".to_string(),
                    severity: Severity::Medium,
                },
                Gap {
                    category: String::new(),
                    description: String::new(),
                    severity: Severity::High,
                },
            ]
        );
        assert!(analysis.strengths.is_empty());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let value = serde_json::to_value(Severity::High).unwrap();
        assert_eq!(value, "high");
        assert_eq!(Severity::Low.as_str(), "low");
    }

    #[tokio::test]
    async fn test_match_job_blends_keyword_rate_with_judge() {
        let judge = FakeJudge::replying(&[r#"{
            "alignmentScore": 80,
            "alignmentRationale": "Good systems background",
            "gaps": [{"category": "Python", "description": "No Python", "severity": "high"}],
            "strengths": ["Rust"],
            "recommendations": ["Learn Python"]
        }"#]);

        let analysis = match_job(&judge, RESUME, JOB).await.unwrap();

        assert!(analysis
            .keyword_analysis
            .tech_skills
            .missing
            .contains(&"python".to_string()));
        let rate = i64::from(analysis.keyword_analysis.overall_match_rate);
        assert_eq!(
            analysis.alignment_score,
            JOB_ALIGNMENT_WEIGHTS.blend(rate, 80)
        );
        assert_eq!(analysis.gaps[0].severity, Severity::High);
        assert_eq!(analysis.alignment_rationale, "Good systems background");
    }

    #[tokio::test]
    async fn test_lists_are_truncated() {
        let gaps: Vec<_> = (0..12)
            .map(|i| serde_json::json!({"category": format!("g{i}"), "description": "d", "severity": "low"}))
            .collect();
        let items: Vec<String> = (0..12).map(|i| format!("item {i}")).collect();
        let body = serde_json::json!({
            "alignmentScore": 60,
            "gaps": gaps,
            "strengths": items,
            "recommendations": items,
        })
        .to_string();
        let judge = FakeJudge::replying(&[body.as_str()]);

        let analysis = match_job(&judge, RESUME, JOB).await.unwrap();
        assert_eq!(analysis.gaps.len(), MAX_GAPS);
        assert_eq!(analysis.strengths.len(), MAX_STRENGTHS);
        assert_eq!(analysis.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(analysis.alignment_rationale, NO_RATIONALE);
    }

    #[tokio::test]
    async fn test_empty_job_description_has_zero_keyword_rate() {
        let judge = FakeJudge::replying(&[r#"{"alignmentScore": 50}"#]);
        let analysis = match_job(&judge, RESUME, "").await.unwrap();

        assert_eq!(analysis.keyword_analysis.total_keywords, 0);
        // 0.3 * 0 + 0.7 * 50
        assert_eq!(analysis.alignment_score, 35);
    }

    #[tokio::test]
    async fn test_prompt_carries_keyword_summary() {
        let judge = FakeJudge::replying(&[r#"{"alignmentScore": 70}"#]);
        match_job(&judge, RESUME, JOB).await.unwrap();

        let prompt = judge.prompt(0);
        assert!(prompt.contains("KEYWORD ANALYSIS"));
        assert!(prompt.contains("Overall Keyword Match Rate"));
        assert!(prompt.contains("Bachelor's degree required"));
    }

    #[tokio::test]
    async fn test_missing_alignment_score_is_unparsable() {
        let judge = FakeJudge::replying(&[r#"{"gaps": []}"#]);
        let err = match_job(&judge, RESUME, JOB).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalUnparsable(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_unavailable() {
        let judge = FakeJudge::failing(unavailable());
        let err = match_job(&judge, RESUME, JOB).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalUnavailable(_)));
    }

    #[test]
    fn test_analysis_serializes_contract_keys() {
        let analysis = assemble(
            KeywordMatchResult::default(),
            AlignmentJudgment {
                alignment_score: 140.0,
                alignment_rationale: None,
                gaps: vec![Gap::default()],
                strengths: Vec::new(),
                recommendations: Vec::new(),
            },
        );
        assert_eq!(analysis.alignment_score, 70);

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["alignmentScore"], 70);
        assert_eq!(value["gaps"][0]["severity"], "medium");
        assert!(value["keywordAnalysis"]["overall_match_rate"].is_number());
    }

    #[tokio::test]
    async fn test_generate_job_description_trims_text() {
        let judge = FakeJudge::replying(&["\n  Senior Rust Engineer at Acme...  \n"]);
        let jd = generate_job_description(&judge, "Rust Engineer", "Berlin")
            .await
            .unwrap();
        assert_eq!(jd, "Senior Rust Engineer at Acme...");

        let prompt = judge.prompt(0);
        assert!(prompt.contains("Rust Engineer position in Berlin"));
    }

    #[tokio::test]
    async fn test_generate_job_description_blank_is_unparsable() {
        let judge = FakeJudge::replying(&["   "]);
        let err = generate_job_description(&judge, "Rust Engineer", "Berlin")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalUnparsable(_)));
    }
}
