//! Final verdict: combines the alignment score, the gaps and the candidate's
//! self-reported proficiency into an apply / don't-apply recommendation.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::job_match::{Gap, GapResponse};
use crate::analysis::prompts::VERDICT_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{excerpt, render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{judge_json, Judge};

/// Resume and job text are cut to this many chars in the verdict prompt.
pub const VERDICT_EXCERPT_CHARS: usize = 2000;
const NO_VERDICT: &str = "Unable to generate verdict.";
const PROFICIENCY_NOT_PROVIDED: &str = "not provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "VerdictJudgment")]
pub struct FinalVerdict {
    pub verdict: String,
    pub should_apply: bool,
}

/// Judge output. Missing or null fields fall back to the placeholder and `true`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerdictJudgment {
    #[serde(default)]
    verdict: Option<String>,
    #[serde(default)]
    should_apply: Option<bool>,
}

impl From<VerdictJudgment> for FinalVerdict {
    fn from(judgment: VerdictJudgment) -> Self {
        FinalVerdict {
            verdict: judgment.verdict.unwrap_or_else(|| NO_VERDICT.to_string()),
            should_apply: judgment.should_apply.unwrap_or(true),
        }
    }
}

pub async fn final_verdict(
    judge: &dyn Judge,
    resume_text: &str,
    job_description: &str,
    alignment_score: u32,
    gaps: &[Gap],
    gap_responses: &[GapResponse],
) -> Result<FinalVerdict, AppError> {
    let score = alignment_score.to_string();
    let gap_details = gap_details(gaps, gap_responses);
    let resume_excerpt = excerpt(resume_text, VERDICT_EXCERPT_CHARS);
    let job_excerpt = excerpt(job_description, VERDICT_EXCERPT_CHARS);

    let prompt = render(
        VERDICT_PROMPT_TEMPLATE,
        &[
            ("alignment_score", score.as_str()),
            ("gap_details", gap_details.as_str()),
            ("resume_excerpt", resume_excerpt.as_str()),
            ("job_excerpt", job_excerpt.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    let verdict: FinalVerdict = judge_json(judge, &prompt).await?;
    info!(
        alignment_score,
        should_apply = verdict.should_apply,
        "Final verdict generated"
    );
    Ok(verdict)
}

/// One line per gap with the first matching response's proficiency.
fn gap_details(gaps: &[Gap], gap_responses: &[GapResponse]) -> String {
    gaps.iter()
        .enumerate()
        .map(|(index, gap)| {
            let proficiency = gap_responses
                .iter()
                .find(|r| r.gap_index == index)
                .and_then(|r| r.proficiency_level.as_deref())
                .unwrap_or(PROFICIENCY_NOT_PROVIDED);
            format!(
                "{} - {} (Severity: {}, Proficiency: {})",
                gap.category,
                gap.description,
                gap.severity.as_str(),
                proficiency
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
