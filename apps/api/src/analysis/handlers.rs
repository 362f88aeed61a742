//! Axum route handlers for the scoring and analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::job_match::{
    generate_job_description, match_job, Gap, GapResponse, JobMatchAnalysis,
};
use crate::analysis::resume_review::{review_resume, ResumeAnalysis};
use crate::analysis::roadmap::{career_roadmap, CareerRoadmap};
use crate::analysis::tailoring::{tailor_resume, TailoredResume};
use crate::analysis::verdict::{final_verdict, FinalVerdict};
use crate::errors::AppError;
use crate::scoring::job_keywords::{self, JobKeywordSet};
use crate::scoring::keyword_match::{match_keywords, KeywordMatchResult};
use crate::scoring::resume_rules::{self, RuleReport};
use crate::state::AppState;

/// Shorter resumes are rejected before any analysis runs.
pub const MIN_RESUME_CHARS: usize = 50;
const DEFAULT_TIMEFRAME: &str = "1 year";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordScoringRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordScoringResponse {
    pub keywords: JobKeywordSet,
    pub keyword_analysis: KeywordMatchResult,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub job_location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    pub job_description: String,
    pub analysis: JobMatchAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct VerdictRequest {
    pub resume_text: String,
    pub job_description: String,
    pub alignment_score: u32,
    #[serde(default)]
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub gap_responses: Vec<GapResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub gap_responses: Vec<GapResponse>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub resume_text: String,
    pub dream_role: String,
    pub dream_location: String,
    #[serde(default)]
    pub timeframe: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scoring/resume
///
/// Rule-based score and findings only. No judge call.
pub async fn handle_score_resume(
    Json(request): Json<ResumeTextRequest>,
) -> Result<Json<RuleReport>, AppError> {
    validate_resume(&request.resume_text)?;
    Ok(Json(resume_rules::analyze(&request.resume_text)))
}

/// POST /api/v1/scoring/keywords
pub async fn handle_score_keywords(
    Json(request): Json<KeywordScoringRequest>,
) -> Result<Json<KeywordScoringResponse>, AppError> {
    validate_resume(&request.resume_text)?;
    require_non_empty("job_description", &request.job_description)?;

    let keywords = job_keywords::extract(&request.job_description);
    let keyword_analysis = match_keywords(&request.resume_text, &keywords);

    Ok(Json(KeywordScoringResponse {
        keywords,
        keyword_analysis,
    }))
}

/// POST /api/v1/resumes/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeTextRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    validate_resume(&request.resume_text)?;
    let analysis = review_resume(state.judge.as_ref(), &request.resume_text).await?;
    Ok(Json(analysis))
}

/// POST /api/v1/job-match
///
/// Uses the given job description, or generates one when only role and location are set.
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(request): Json<JobMatchRequest>,
) -> Result<Json<JobMatchResponse>, AppError> {
    validate_resume(&request.resume_text)?;

    let given = non_blank(request.job_description.as_deref());
    let job_description = match (given, non_blank(request.job_role.as_deref())) {
        (Some(description), _) => description.to_string(),
        (None, Some(role)) => {
            let location = non_blank(request.job_location.as_deref()).ok_or_else(|| {
                AppError::Validation(
                    "job_location is required when generating a job description".to_string(),
                )
            })?;
            generate_job_description(state.judge.as_ref(), role, location).await?
        }
        (None, None) => {
            return Err(AppError::Validation(
                "Provide job_description, or job_role and job_location".to_string(),
            ))
        }
    };

    let analysis = match_job(state.judge.as_ref(), &request.resume_text, &job_description).await?;

    Ok(Json(JobMatchResponse {
        job_description,
        analysis,
    }))
}

/// POST /api/v1/job-match/verdict
pub async fn handle_final_verdict(
    State(state): State<AppState>,
    Json(request): Json<VerdictRequest>,
) -> Result<Json<FinalVerdict>, AppError> {
    validate_resume(&request.resume_text)?;
    require_non_empty("job_description", &request.job_description)?;

    let verdict = final_verdict(
        state.judge.as_ref(),
        &request.resume_text,
        &request.job_description,
        request.alignment_score.min(100),
        &request.gaps,
        &request.gap_responses,
    )
    .await?;

    Ok(Json(verdict))
}

/// POST /api/v1/job-match/tailored-resume
pub async fn handle_tailored_resume(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailoredResume>, AppError> {
    validate_resume(&request.resume_text)?;
    require_non_empty("job_description", &request.job_description)?;

    let tailored = tailor_resume(
        state.judge.as_ref(),
        &request.resume_text,
        &request.job_description,
        &request.strengths,
        &request.gaps,
        &request.gap_responses,
    )
    .await?;

    Ok(Json(tailored))
}

/// POST /api/v1/career-roadmap
pub async fn handle_career_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<CareerRoadmap>, AppError> {
    validate_resume(&request.resume_text)?;
    require_non_empty("dream_role", &request.dream_role)?;
    require_non_empty("dream_location", &request.dream_location)?;

    let timeframe = non_blank(request.timeframe.as_deref()).unwrap_or(DEFAULT_TIMEFRAME);

    let roadmap = career_roadmap(
        state.judge.as_ref(),
        &request.resume_text,
        request.dream_role.trim(),
        request.dream_location.trim(),
        timeframe,
    )
    .await?;

    Ok(Json(roadmap))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_resume(resume_text: &str) -> Result<(), AppError> {
    if resume_text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(format!(
            "resume_text must contain at least {MIN_RESUME_CHARS} characters"
        )));
    }
    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
