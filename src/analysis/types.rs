//! Analysis types
//!
//! Core types for packet analysis. No logic here, only data structures
//! and their wire representation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

// ============================================================================
// CLOSED ENUMS
// ============================================================================

/// Declared threat level of the observed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatLevel {
    #[serde(rename = "Benign")]
    Benign,
    #[serde(rename = "Zero-Day Attack")]
    ZeroDayAttack,
}

/// Transport protocol of the observed packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
}

/// What kind of event the packet was part of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDescription {
    #[serde(rename = "Connection Attempt")]
    ConnectionAttempt,
    #[serde(rename = "Suspicious Activity")]
    SuspiciousActivity,
}

/// Final verdict status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Suspicious,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Suspicious => "suspicious",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// OBSERVATION (input)
// ============================================================================

/// One user-supplied record describing a single packet event.
///
/// Field names follow the wire format of the analyze endpoint (camelCase).
/// Range constraints are checked at the HTTP boundary via `Validate`; the
/// classifier itself accepts any well-typed observation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Anomaly score in [0, 1]
    #[validate(range(min = 0.0, max = 1.0))]
    pub anomaly_score: f64,

    /// Response time in milliseconds
    #[validate(range(min = 0.0))]
    pub response_time: f64,

    /// Data transfer rate in MB/s
    #[validate(range(min = 0.0))]
    pub data_transfer_rate: f64,

    /// HTTP-style error code; 200 is the "ok" sentinel
    pub error_code: i64,

    /// Packet count of the event. Collected but not scored.
    #[validate(range(min = 1))]
    pub number_of_packets: i64,

    pub threat_level: ThreatLevel,

    pub protocol: Protocol,

    pub event_description: EventDescription,
}

// ============================================================================
// VERDICT (output)
// ============================================================================

/// The classifier's output for one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: Status,

    /// Confidence percentage in [0, 100]
    pub confidence: u8,

    /// Wall clock at evaluation, millisecond precision with `Z` suffix
    #[serde(serialize_with = "serialize_timestamp_millis")]
    pub timestamp: DateTime<Utc>,
}

fn serialize_timestamp_millis<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_deserializes_wire_format() {
        let json = r#"{
            "anomalyScore": 0.8, "responseTime": 1200,
            "dataTransferRate": 150, "errorCode": 500,
            "numberOfPackets": 10, "threatLevel": "Benign",
            "protocol": "UDP", "eventDescription": "Connection Attempt"
        }"#;

        let obs: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.anomaly_score, 0.8);
        assert_eq!(obs.error_code, 500);
        assert_eq!(obs.threat_level, ThreatLevel::Benign);
        assert_eq!(obs.protocol, Protocol::Udp);
        assert_eq!(obs.event_description, EventDescription::ConnectionAttempt);
    }

    #[test]
    fn enum_wire_strings_round_trip() {
        assert_eq!(
            serde_json::to_string(&ThreatLevel::ZeroDayAttack).unwrap(),
            r#""Zero-Day Attack""#
        );
        assert_eq!(
            serde_json::to_string(&EventDescription::SuspiciousActivity).unwrap(),
            r#""Suspicious Activity""#
        );
        assert_eq!(serde_json::to_string(&Protocol::Tcp).unwrap(), r#""TCP""#);
        assert_eq!(serde_json::to_string(&Status::Normal).unwrap(), r#""normal""#);
    }

    #[test]
    fn verdict_timestamp_has_millis_and_z() {
        let verdict = Verdict {
            status: Status::Suspicious,
            confidence: 88,
            timestamp: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(value["timestamp"], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["status"], "suspicious");
        assert_eq!(value["confidence"], 88);
    }

    #[test]
    fn out_of_range_observation_fails_validation() {
        let json = r#"{
            "anomalyScore": 1.5, "responseTime": 100,
            "dataTransferRate": 10, "errorCode": 200,
            "numberOfPackets": 1, "threatLevel": "Benign",
            "protocol": "TCP", "eventDescription": "Connection Attempt"
        }"#;

        let obs: Observation = serde_json::from_str(json).unwrap();
        assert!(obs.validate().is_err());
    }
}
