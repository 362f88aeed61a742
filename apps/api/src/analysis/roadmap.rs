use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::prompts::ROADMAP_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::{render, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{judge_json, null_as_default, Judge};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPhase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub phase: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
}

/// A phased plan from the current resume towards a target role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerRoadmap {
    #[serde(deserialize_with = "null_as_default")]
    pub current_gaps: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills_to_acquire: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub action_plan: Vec<ActionPhase>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub milestones: Vec<String>,
}

pub async fn career_roadmap(
    judge: &dyn Judge,
    resume_text: &str,
    dream_role: &str,
    dream_location: &str,
    timeframe: &str,
) -> Result<CareerRoadmap, AppError> {
    let prompt = render(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("dream_role", dream_role),
            ("dream_location", dream_location),
            ("timeframe", timeframe),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    let roadmap: CareerRoadmap = judge_json(judge, &prompt).await?;
    info!(
        dream_role,
        phases = roadmap.action_plan.len(),
        "Career roadmap generated"
    );
    Ok(roadmap)
}
