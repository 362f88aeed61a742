use serde::{Deserialize, Serialize};

/// Weights for combining a deterministic signal with the external judge's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub deterministic: f64,
    pub external: f64,
}

/// Resume completeness: rule score 0.4, judge 0.6.
pub const RESUME_COMPLETENESS_WEIGHTS: BlendWeights = BlendWeights {
    deterministic: 0.4,
    external: 0.6,
};

/// Job alignment: keyword match rate 0.3, judge 0.7.
pub const JOB_ALIGNMENT_WEIGHTS: BlendWeights = BlendWeights {
    deterministic: 0.3,
    external: 0.7,
};

impl BlendWeights {
    pub fn blend(&self, deterministic_score: i64, external_score: i64) -> u32 {
        blend(
            deterministic_score,
            external_score,
            self.deterministic,
            self.external,
        )
    }
}

/// floor(det×w_det + ext×w_ext) with both inputs and the result clamped to 0-100.
pub fn blend(
    deterministic_score: i64,
    external_score: i64,
    weight_deterministic: f64,
    weight_external: f64,
) -> u32 {
    let deterministic = deterministic_score.clamp(0, 100) as f64;
    let external = external_score.clamp(0, 100) as f64;
    let combined = (deterministic * weight_deterministic + external * weight_external).floor();
    // NaN weights fall through to 0
    combined.clamp(0.0, 100.0) as u32
}
