//! Analysis Client
//!
//! HTTP adapter over the analyze endpoint. On ANY remote failure - transport
//! error, non-2xx status, unparseable body - the same scoring rule is
//! evaluated locally, so `analyze` always produces a verdict.

use std::time::Duration;

use serde_json::json;

use crate::analysis::{classify_with_rules, Observation, ScoringRules, Verdict};

/// Remote endpoint configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Analysis API client with local fallback
pub struct AnalysisClient {
    config: ClientConfig,
    rules: ScoringRules,
    http_client: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            rules: ScoringRules::default(),
            http_client,
        }
    }

    /// Analyze an observation, preferring the remote endpoint.
    ///
    /// Never fails: any remote problem downgrades to local evaluation of the
    /// identical rule, so remote and fallback verdicts agree on
    /// (status, confidence) for the same observation.
    pub async fn analyze(&self, packet: &Observation) -> Verdict {
        match self.analyze_remote(packet).await {
            Ok(verdict) => verdict,
            Err(err) => {
                tracing::debug!("Using fallback analysis due to: {:#}", err);
                classify_with_rules(packet, &self.rules)
            }
        }
    }

    async fn analyze_remote(&self, packet: &Observation) -> anyhow::Result<Verdict> {
        let url = format!(
            "{}/analyze-packet",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .http_client
            .post(url)
            .json(&json!({ "packet": packet }))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{classify, EventDescription, Protocol, Status, ThreatLevel};

    fn observation() -> Observation {
        Observation {
            anomaly_score: 0.71,
            response_time: 1001.0,
            data_transfer_rate: 51.0,
            error_code: 404,
            number_of_packets: 1,
            threat_level: ThreatLevel::Benign,
            protocol: Protocol::Tcp,
            event_description: EventDescription::ConnectionAttempt,
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_to_local_rule() {
        // Port 9 (discard) is closed in the test environment; the request
        // fails fast with connection refused.
        let client = AnalysisClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
        });

        let obs = observation();
        let remote = client.analyze(&obs).await;
        let local = classify(&obs);

        assert_eq!(remote.status, local.status);
        assert_eq!(remote.confidence, local.confidence);
        assert_eq!(remote.status, Status::Suspicious);
        assert_eq!(remote.confidence, 88);
    }

    #[tokio::test]
    async fn fallback_honors_override_rule() {
        let client = AnalysisClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
        });

        let obs = Observation {
            threat_level: ThreatLevel::ZeroDayAttack,
            ..observation()
        };

        let verdict = client.analyze(&obs).await;
        assert_eq!(verdict.status, Status::Suspicious);
        assert_eq!(verdict.confidence, 100);
    }
}
