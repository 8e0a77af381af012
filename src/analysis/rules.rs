//! Scoring Rules & Weights
//!
//! The packet-scoring rule expressed as data. No classify logic here,
//! only constants and the configurable rule table.

use serde::{Deserialize, Serialize};

// ============================================================================
// WEIGHTS (How much each rule contributes to totalFactors)
// ============================================================================

/// Weight of the anomaly score rule (highest)
pub const ANOMALY_WEIGHT: u32 = 30;

/// Weight of the response time rule
pub const RESPONSE_TIME_WEIGHT: u32 = 15;

/// Weight of the data transfer rate rule
pub const TRANSFER_RATE_WEIGHT: u32 = 10;

/// Weight of the error code rule
pub const ERROR_CODE_WEIGHT: u32 = 15;

/// Weight of the protocol rule
pub const PROTOCOL_WEIGHT: u32 = 10;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Error code treated as "ok"; anything else scores the full weight
pub const OK_ERROR_CODE: i64 = 200;

/// Confidence must exceed this (strictly) for a suspicious verdict
pub const SUSPICIOUS_CONFIDENCE_MIN: u8 = 60;

// ============================================================================
// RULE TABLE
// ============================================================================

/// One band of a numeric rule: values strictly above `over` score `score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    pub over: f64,
    pub score: u32,
}

/// A banded numeric rule. Bands are ordered highest threshold first;
/// the first matching band wins, values at or below every threshold score 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandRule {
    /// Maximum contribution, always added to totalFactors
    pub weight: u32,
    pub bands: Vec<Band>,
}

impl BandRule {
    /// Score a value against the bands. Comparisons are strict, so a value
    /// exactly at a threshold falls into the lower band.
    pub fn score(&self, value: f64) -> u32 {
        self.bands
            .iter()
            .find(|band| value > band.over)
            .map(|band| band.score)
            .unwrap_or(0)
    }
}

/// The full scoring rule table (configurable).
///
/// `Default` reproduces the fixed production weights; callers that need a
/// different calibration pass their own table to `classify_with_rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRules {
    pub anomaly_score: BandRule,
    pub response_time: BandRule,
    pub data_transfer_rate: BandRule,

    /// Contribution when the error code is not [`Self::ok_error_code`]
    pub error_code_weight: u32,
    pub ok_error_code: i64,

    /// Protocol rule: both variants score, UDP higher than TCP
    pub protocol_weight: u32,
    pub udp_score: u32,
    pub tcp_score: u32,

    /// Strict lower bound on confidence for a suspicious verdict
    pub suspicious_confidence_min: u8,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            anomaly_score: BandRule {
                weight: ANOMALY_WEIGHT,
                bands: vec![
                    Band { over: 0.7, score: 30 },
                    Band { over: 0.5, score: 15 },
                ],
            },
            response_time: BandRule {
                weight: RESPONSE_TIME_WEIGHT,
                bands: vec![
                    Band { over: 1000.0, score: 15 },
                    Band { over: 500.0, score: 7 },
                ],
            },
            data_transfer_rate: BandRule {
                weight: TRANSFER_RATE_WEIGHT,
                bands: vec![
                    Band { over: 100.0, score: 10 },
                    Band { over: 50.0, score: 5 },
                ],
            },
            error_code_weight: ERROR_CODE_WEIGHT,
            ok_error_code: OK_ERROR_CODE,
            protocol_weight: PROTOCOL_WEIGHT,
            udp_score: 10,
            tcp_score: 5,
            suspicious_confidence_min: SUSPICIOUS_CONFIDENCE_MIN,
        }
    }
}

impl ScoringRules {
    /// Sum of every rule's maximum weight; the denominator of the
    /// confidence calculation.
    pub fn total_factors(&self) -> u32 {
        self.anomaly_score.weight
            + self.response_time.weight
            + self.data_transfer_rate.weight
            + self.error_code_weight
            + self.protocol_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_total_factors_is_constant_80() {
        assert_eq!(ScoringRules::default().total_factors(), 80);
    }

    #[test]
    fn band_thresholds_are_strict() {
        let rules = ScoringRules::default();

        // Exactly at a threshold falls into the lower band
        assert_eq!(rules.anomaly_score.score(0.7), 15);
        assert_eq!(rules.anomaly_score.score(0.5), 0);
        assert_eq!(rules.response_time.score(1000.0), 7);
        assert_eq!(rules.response_time.score(500.0), 0);
        assert_eq!(rules.data_transfer_rate.score(100.0), 5);
        assert_eq!(rules.data_transfer_rate.score(50.0), 0);

        // Strictly above scores the band
        assert_eq!(rules.anomaly_score.score(0.71), 30);
        assert_eq!(rules.response_time.score(1001.0), 15);
        assert_eq!(rules.data_transfer_rate.score(50.5), 5);
    }

    #[test]
    fn band_scores_never_exceed_weight() {
        let rules = ScoringRules::default();
        for rule in [
            &rules.anomaly_score,
            &rules.response_time,
            &rules.data_transfer_rate,
        ] {
            for band in &rule.bands {
                assert!(band.score <= rule.weight);
            }
        }
        assert!(rules.udp_score <= rules.protocol_weight);
        assert!(rules.tcp_score <= rules.protocol_weight);
    }
}
