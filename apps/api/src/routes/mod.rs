pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Deterministic scoring, no judge involved
        .route(
            "/api/v1/scoring/resume",
            post(handlers::handle_score_resume),
        )
        .route(
            "/api/v1/scoring/keywords",
            post(handlers::handle_score_keywords),
        )
        // Judge-backed analysis
        .route(
            "/api/v1/resumes/analyze",
            post(handlers::handle_analyze_resume),
        )
        .route("/api/v1/job-match", post(handlers::handle_job_match))
        .route(
            "/api/v1/job-match/verdict",
            post(handlers::handle_final_verdict),
        )
        .route(
            "/api/v1/job-match/tailored-resume",
            post(handlers::handle_tailored_resume),
        )
        .route(
            "/api/v1/career-roadmap",
            post(handlers::handle_career_roadmap),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, DEFAULT_GEMINI_MODEL};
    use crate::llm_client::testing::{unavailable, FakeJudge};

    const RESUME: &str = "Jane Doe | jane@example.com | Phone: 555-123-4567\n\
                          Experience\n\
                          - Led a team of 6 engineers building Rust services\n\
                          - Reduced latency by 40%\n\
                          Education\n\
                          BSc Computer Science";

    fn app(judge: FakeJudge) -> (Router, Arc<FakeJudge>) {
        let judge = Arc::new(judge);
        let state = AppState {
            judge: judge.clone(),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
                judge_timeout_secs: 5,
                port: 0,
                rust_log: "info".to_string(),
            },
        };
        (build_router(state), judge)
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = app(FakeJudge::replying(&[]));
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resumatch-api");
    }

    #[tokio::test]
    async fn test_score_resume_is_deterministic_and_skips_judge() {
        let (router, judge) = app(FakeJudge::replying(&[]));
        let (status, body) =
            post_json(router, "/api/v1/scoring/resume", json!({"resume_text": RESUME})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["findings"]["has_email"], true);
        assert_eq!(body["findings"]["has_experience"], true);
        assert!(body["rule_score"].as_u64().unwrap() <= 100);
        assert_eq!(judge.call_count(), 0);
    }

    #[tokio::test]
    async fn test_short_resume_is_rejected() {
        let (router, judge) = app(FakeJudge::replying(&[]));
        let (status, body) = post_json(
            router,
            "/api/v1/resumes/analyze",
            json!({"resume_text": "too short"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(judge.call_count(), 0);
    }

    #[tokio::test]
    async fn test_score_keywords() {
        let (router, _) = app(FakeJudge::replying(&[]));
        let (status, body) = post_json(
            router,
            "/api/v1/scoring/keywords",
            json!({"resume_text": RESUME, "job_description": "Rust and Python. 5+ years of experience."}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyword_analysis"]["tech_skills"]["matched"], json!(["rust"]));
        assert_eq!(body["keyword_analysis"]["tech_skills"]["missing"], json!(["python"]));
        assert_eq!(body["keywords"]["requirements"], json!(["5+ years experience"]));
    }

    #[tokio::test]
    async fn test_analyze_resume() {
        let (router, _) = app(FakeJudge::replying(&[
            r#"{"completenessScore": 75, "suggestions": ["Add a summary"]}"#,
        ]));
        let (status, body) =
            post_json(router, "/api/v1/resumes/analyze", json!({"resume_text": RESUME})).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["completenessScore"].is_number());
        assert_eq!(body["suggestions"], json!(["Add a summary"]));
        assert_eq!(body["ruleBasedFindings"]["has_email"], true);
    }

    #[tokio::test]
    async fn test_unparsable_judge_is_bad_gateway() {
        let (router, _) = app(FakeJudge::replying(&["no json here"]));
        let (status, body) =
            post_json(router, "/api/v1/resumes/analyze", json!({"resume_text": RESUME})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "EXTERNAL_UNPARSABLE");
    }

    #[tokio::test]
    async fn test_unavailable_judge_is_service_unavailable() {
        let (router, _) = app(FakeJudge::failing(unavailable()));
        let (status, body) =
            post_json(router, "/api/v1/resumes/analyze", json!({"resume_text": RESUME})).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "EXTERNAL_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_job_match_with_description() {
        let (router, judge) = app(FakeJudge::replying(&[r#"{"alignmentScore": 60}"#]));
        let (status, body) = post_json(
            router,
            "/api/v1/job-match",
            json!({"resume_text": RESUME, "job_description": "Rust engineer, leadership"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobDescription"], "Rust engineer, leadership");
        assert!(body["analysis"]["alignmentScore"].is_number());
        assert!(body["analysis"]["keywordAnalysis"]["overall_match_rate"].is_number());
        assert_eq!(judge.call_count(), 1);
    }

    #[tokio::test]
    async fn test_job_match_generates_description_from_role() {
        let (router, judge) = app(FakeJudge::replying(&[
            "Site Reliability Engineer in Lisbon. Kubernetes, Go, 3+ years of experience.",
            r#"{"alignmentScore": 40}"#,
        ]));
        let (status, body) = post_json(
            router,
            "/api/v1/job-match",
            json!({"resume_text": RESUME, "job_role": "SRE", "job_location": "Lisbon"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["jobDescription"]
            .as_str()
            .unwrap()
            .starts_with("Site Reliability Engineer"));
        assert_eq!(judge.call_count(), 2);
        assert!(judge.prompt(1).contains("Kubernetes, Go"));
    }

    #[tokio::test]
    async fn test_job_match_without_description_or_role_is_rejected() {
        let (router, judge) = app(FakeJudge::replying(&[]));
        let (status, _) = post_json(
            router,
            "/api/v1/job-match",
            json!({"resume_text": RESUME, "job_description": "  "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(judge.call_count(), 0);
    }

    #[tokio::test]
    async fn test_verdict() {
        let (router, _) = app(FakeJudge::replying(&[
            r#"{"verdict": "Apply.", "shouldApply": true}"#,
        ]));
        let (status, body) = post_json(
            router,
            "/api/v1/job-match/verdict",
            json!({
                "resume_text": RESUME,
                "job_description": "Rust engineer",
                "alignment_score": 66,
                "gaps": [{"category": "Go", "description": "none", "severity": "low"}],
                "gap_responses": [{"gapIndex": 0, "proficiencyLevel": "basic"}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"verdict": "Apply.", "shouldApply": true}));
    }

    #[tokio::test]
    async fn test_tailored_resume_fallback() {
        let (router, _) = app(FakeJudge::replying(&["JANE DOE\nRust Engineer"]));
        let (status, body) = post_json(
            router,
            "/api/v1/job-match/tailored-resume",
            json!({"resume_text": RESUME, "job_description": "Rust engineer"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resumeContent"], "JANE DOE\nRust Engineer");
        assert!(body.get("resumeJson").is_none());
    }

    #[tokio::test]
    async fn test_career_roadmap_defaults_timeframe() {
        let (router, judge) = app(FakeJudge::replying(&[r#"{"currentGaps": ["Cloud"]}"#]));
        let (status, body) = post_json(
            router,
            "/api/v1/career-roadmap",
            json!({"resume_text": RESUME, "dream_role": "Staff Engineer", "dream_location": "Remote"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentGaps"], json!(["Cloud"]));
        assert!(judge.prompt(0).contains("Timeframe: 1 year"));
    }
}
