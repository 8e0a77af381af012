//! Packet Classifier
//!
//! Only classify logic lives here - no types, no rule constants.
//! Input: Observation. Output: Verdict.
//!
//! The same function backs the analyze endpoint and the client adapter's
//! local fallback, so the two sites cannot drift apart.

use chrono::{DateTime, Utc};

use super::rules::ScoringRules;
use super::types::{EventDescription, Observation, Protocol, Status, ThreatLevel, Verdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify an observation with the default production rules.
///
/// CORE LOGIC - deterministic; two calls with the same observation agree on
/// (status, confidence) and differ only in timestamp.
pub fn classify(observation: &Observation) -> Verdict {
    classify_with_rules(observation, &ScoringRules::default())
}

/// Classification with a caller-supplied rule table.
pub fn classify_with_rules(observation: &Observation, rules: &ScoringRules) -> Verdict {
    classify_at(observation, rules, Utc::now())
}

/// Classification with an injected clock, for deterministic timestamps.
pub fn classify_at(
    observation: &Observation,
    rules: &ScoringRules,
    now: DateTime<Utc>,
) -> Verdict {
    // Override rule: a declared suspicious event or zero-day threat level
    // short-circuits the scoring entirely.
    if observation.event_description == EventDescription::SuspiciousActivity
        || observation.threat_level == ThreatLevel::ZeroDayAttack
    {
        return Verdict {
            status: Status::Suspicious,
            confidence: 100,
            timestamp: now,
        };
    }

    let mut suspicious_score: u32 = 0;

    suspicious_score += rules.anomaly_score.score(observation.anomaly_score);
    suspicious_score += rules.response_time.score(observation.response_time);
    suspicious_score += rules.data_transfer_rate.score(observation.data_transfer_rate);

    if observation.error_code != rules.ok_error_code {
        suspicious_score += rules.error_code_weight;
    }

    // UDP is slightly more suspicious than TCP; both contribute
    suspicious_score += match observation.protocol {
        Protocol::Udp => rules.udp_score,
        Protocol::Tcp => rules.tcp_score,
    };

    // number_of_packets is collected but carries no weight

    let total_factors = rules.total_factors();
    let confidence =
        ((suspicious_score as f64 / total_factors as f64) * 100.0).round() as u8;

    let status = if confidence > rules.suspicious_confidence_min {
        Status::Suspicious
    } else {
        Status::Normal
    };

    Verdict {
        status,
        confidence,
        timestamp: now,
    }
}

// ============================================================================
// TESTS
// ============================================================================
