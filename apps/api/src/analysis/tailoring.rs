//! Tailored resume: an ATS-oriented rewrite of the resume for one job.
//!
//! The judge returns a structured document. When that document cannot be parsed the raw
//! text is still returned, since it is content for the candidate rather than a score.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::job_match::{Gap, GapResponse};
use crate::analysis::prompts::TAILOR_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{excerpt, render, JSON_ONLY_INSTRUCTION, NO_INVENTED_METRICS};
use crate::llm_client::{parse_judgment, Judge, LlmError};

const JOB_EXCERPT_CHARS: usize = 2000;
const CONFIRMED_LEVELS: &[&str] = &["basic", "moderate", "advanced"];
const NONE_CONFIRMED: &str = "None confirmed";
const DEFAULT_CHANGES: &str = "Resume optimized for ATS.";
const FALLBACK_CHANGES: &str = "Resume optimized for ATS and tailored to job requirements.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredResume {
    pub changes_summary: String,
    pub resume_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_json: Option<Value>,
}

pub async fn tailor_resume(
    judge: &dyn Judge,
    resume_text: &str,
    job_description: &str,
    strengths: &[String],
    gaps: &[Gap],
    gap_responses: &[GapResponse],
) -> Result<TailoredResume, AppError> {
    let job_excerpt = excerpt(job_description, JOB_EXCERPT_CHARS);
    let strengths = strengths
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    let confirmed = confirmed_skills(gaps, gap_responses);

    let prompt = render(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_excerpt", job_excerpt.as_str()),
            ("strengths", strengths.as_str()),
            ("confirmed_skills", confirmed.as_str()),
            ("no_invented_metrics", NO_INVENTED_METRICS),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    // Transport failures and blank output propagate; only non-JSON text falls back.
    let raw = judge.complete(&prompt).await?;
    if raw.trim().is_empty() {
        return Err(LlmError::EmptyContent.into());
    }
    let tailored = match parse_judgment::<Value>(&raw) {
        Ok(document) => from_document(document)?,
        Err(e) if e.is_unparsable() => {
            warn!("Tailored resume was not valid JSON, returning raw text: {e}");
            TailoredResume {
                changes_summary: FALLBACK_CHANGES.to_string(),
                resume_content: raw,
                resume_json: None,
            }
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        structured = tailored.resume_json.is_some(),
        chars = tailored.resume_content.len(),
        "Tailored resume generated"
    );
    Ok(tailored)
}

fn from_document(document: Value) -> Result<TailoredResume, AppError> {
    let changes: Vec<&str> = document
        .get("changes_summary")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let changes_summary = if changes.is_empty() {
        DEFAULT_CHANGES.to_string()
    } else {
        changes
            .iter()
            .map(|c| format!("• {c}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let resume_content = serde_json::to_string(&document).map_err(anyhow::Error::from)?;

    Ok(TailoredResume {
        changes_summary,
        resume_content,
        resume_json: Some(document),
    })
}

/// Gaps the candidate reports at least basic proficiency in, one line each.
fn confirmed_skills(gaps: &[Gap], gap_responses: &[GapResponse]) -> String {
    let lines: Vec<String> = gap_responses
        .iter()
        .filter_map(|response| {
            let level = response.proficiency_level.as_deref()?;
            if !CONFIRMED_LEVELS.contains(&level) {
                return None;
            }
            let gap = gaps.get(response.gap_index)?;
            Some(format!("- {}: {level} proficiency", gap.category))
        })
        .collect();

    if lines.is_empty() {
        NONE_CONFIRMED.to_string()
    } else {
        lines.join("\n")
    }
}
