//! Packet analysis handler

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analysis::{classify, Observation, Verdict};
use crate::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub packet: Observation,
}

/// Analyze one packet observation
///
/// The body rejection is folded into the JSON error envelope so callers
/// always get `{ "error": ... }` regardless of what went wrong.
pub async fn analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<Verdict>> {
    let Json(request) = payload
        .map_err(|rejection| AppError::InvalidObservation(rejection.body_text()))?;

    request
        .packet
        .validate()
        .map_err(|e| AppError::InvalidObservation(e.to_string()))?;

    tracing::debug!("Analyzing packet: {:?}", request.packet);

    let verdict = classify(&request.packet);

    tracing::info!(
        "Analysis result: status={} confidence={}",
        verdict.status,
        verdict.confidence
    );

    Ok(Json(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Status;

    fn request_json() -> &'static str {
        r#"{ "packet": { "anomalyScore": 0.8, "responseTime": 1200,
                         "dataTransferRate": 150, "errorCode": 500,
                         "numberOfPackets": 10, "threatLevel": "Benign",
                         "protocol": "UDP", "eventDescription": "Connection Attempt" } }"#
    }

    #[tokio::test]
    async fn analyze_returns_verdict_for_documented_request() {
        let request: AnalyzeRequest = serde_json::from_str(request_json()).unwrap();
        let Json(verdict) = analyze(Ok(Json(request))).await.unwrap();

        // 30+15+10+15+10 = 80 of 80
        assert_eq!(verdict.status, Status::Suspicious);
        assert_eq!(verdict.confidence, 100);
    }

    #[tokio::test]
    async fn analyze_rejects_out_of_range_fields() {
        let mut request: AnalyzeRequest = serde_json::from_str(request_json()).unwrap();
        request.packet.anomaly_score = 2.0;

        let err = analyze(Ok(Json(request))).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidObservation(_)));
    }
}
