//! Job keyword extraction. Scans a raw job description for controlled-vocabulary skills
//! and experience/degree requirements.
//!
//! `tools` is part of the keyword set but no tool vocabulary is scanned, so it is always
//! empty. Consumers must not rely on it being populated.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Technical vocabulary matched as contiguous lower-case substrings.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "scala",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "machine learning",
    "deep learning",
    "nlp",
    "computer vision",
    "ai",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "git",
    "ci/cd",
    "jenkins",
    "github actions",
    "gitlab",
    "rest api",
    "graphql",
    "microservices",
    "agile",
    "scrum",
    "data analysis",
    "data science",
    "data engineering",
    "etl",
    "linux",
    "unix",
    "bash",
    "shell scripting",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem-solving",
    "analytical",
    "collaboration",
    "project management",
    "time management",
    "critical thinking",
    "attention to detail",
    "creativity",
    "adaptability",
    "mentoring",
];

/// Years-of-experience phrasings. Capture group 1 is the year count.
pub const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
    r"(\d+)\+?\s*years?\s+(?:in|with)",
    r"minimum\s+(\d+)\s+years?",
    r"at\s+least\s+(\d+)\s+years?",
];

pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "ph.d",
    "doctorate",
    "mba",
    "bs",
    "ms",
    "b.s.",
    "m.s.",
];

static EXPERIENCE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    EXPERIENCE_PATTERNS
        .iter()
        .map(|p| {
            Regex::new(p).unwrap_or_else(|e| panic!("invalid built-in pattern {p:?}: {e}"))
        })
        .collect()
});

/// De-duplicated keywords extracted from one job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobKeywordSet {
    pub tech_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub requirements: BTreeSet<String>,
    pub tools: BTreeSet<String>,
}

impl JobKeywordSet {
    pub fn len(&self) -> usize {
        self.tech_skills.len() + self.soft_skills.len() + self.requirements.len() + self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extracts categorized keywords from a job description. Pure and total.
pub fn extract(job_description: &str) -> JobKeywordSet {
    let text_lower = job_description.to_lowercase();

    JobKeywordSet {
        tech_skills: vocabulary_hits(&text_lower, TECH_SKILLS),
        soft_skills: vocabulary_hits(&text_lower, SOFT_SKILLS),
        requirements: extract_requirements(&text_lower),
        tools: BTreeSet::new(),
    }
}

fn vocabulary_hits(text_lower: &str, vocabulary: &[&str]) -> BTreeSet<String> {
    vocabulary
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Every match of every experience phrasing becomes `"<N>+ years experience"`;
/// every degree keyword present becomes `"<keyword> degree"`.
fn extract_requirements(text_lower: &str) -> BTreeSet<String> {
    let experience = EXPERIENCE_RES.iter().flat_map(|re| {
        re.captures_iter(text_lower)
            .filter_map(|caps| caps.get(1))
            .map(|years| format!("{}+ years experience", years.as_str()))
    });

    let degrees = DEGREE_KEYWORDS
        .iter()
        .filter(|degree| text_lower.contains(*degree))
        .map(|degree| format!("{degree} degree"));

    experience.chain(degrees).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_years_and_bachelor() {
        let keywords = extract("Python, 5+ years of experience, Bachelor's degree required");
        assert!(keywords.tech_skills.contains("python"));
        assert!(keywords.requirements.contains("5+ years experience"));
        assert!(keywords.requirements.contains("bachelor degree"));
    }

    #[test]
    fn test_tools_is_always_empty() {
        let keywords = extract("Tools: Jira, Confluence, Figma, Docker, Terraform");
        assert!(keywords.tools.is_empty());
        assert!(keywords.tech_skills.contains("docker"));
    }

    #[test]
    fn test_empty_description_yields_empty_set() {
        let keywords = extract("");
        assert!(keywords.is_empty());
        assert_eq!(keywords, JobKeywordSet::default());
    }

    #[test]
    fn test_multi_word_terms_match_contiguously() {
        let keywords = extract("Experience with Machine Learning and REST API design");
        assert!(keywords.tech_skills.contains("machine learning"));
        assert!(keywords.tech_skills.contains("rest api"));

        let scattered = extract("learning about machine shops");
        assert!(!scattered.tech_skills.contains("machine learning"));
    }

    #[test]
    fn test_substring_matching_is_lenient() {
        // "javascript" also contains "java"; "mongodb" contains "go"
        let keywords = extract("JavaScript and MongoDB");
        assert!(keywords.tech_skills.contains("javascript"));
        assert!(keywords.tech_skills.contains("java"));
        assert!(keywords.tech_skills.contains("go"));
    }

    #[test]
    fn test_soft_skills_extracted() {
        let keywords = extract("Strong communication, mentoring and problem-solving skills.");
        assert_eq!(
            keywords.soft_skills,
            set(&["communication", "mentoring", "problem-solving"])
        );
    }

    #[test]
    fn test_repeated_terms_are_deduplicated() {
        let keywords = extract("Rust rust RUST. 3 years of experience. 3 years of experience.");
        assert_eq!(keywords.tech_skills.iter().filter(|t| *t == "rust").count(), 1);
        assert_eq!(
            keywords
                .requirements
                .iter()
                .filter(|r| *r == "3+ years experience")
                .count(),
            1
        );
    }

    #[test]
    fn test_different_phrasings_of_same_years_collapse() {
        // "minimum 4 years" and "4 years of experience" format to identical strings
        let keywords = extract("Minimum 4 years with Go. 4 years of experience in backend.");
        let years: Vec<_> = keywords
            .requirements
            .iter()
            .filter(|r| r.ends_with("years experience"))
            .collect();
        assert_eq!(years, vec!["4+ years experience"]);
    }

    #[test]
    fn test_distinct_year_counts_are_kept() {
        let keywords = extract("At least 2 years in Python and 7+ years of experience overall");
        assert!(keywords.requirements.contains("2+ years experience"));
        assert!(keywords.requirements.contains("7+ years experience"));
    }

    #[test]
    fn test_degree_keywords_format_requirement() {
        let keywords = extract("PhD or MBA preferred");
        assert!(keywords.requirements.contains("phd degree"));
        assert!(keywords.requirements.contains("mba degree"));
    }

    #[test]
    fn test_keyword_set_serializes_as_arrays() {
        let keywords = extract("python");
        let value = serde_json::to_value(&keywords).unwrap();
        assert_eq!(value["tech_skills"], serde_json::json!(["python"]));
        assert_eq!(value["tools"], serde_json::json!([]));
    }
}
