//! Packet Analysis Module
//!
//! Classifies a described packet observation as normal or suspicious with a
//! fixed weighted-scoring rule. This is the CORE STEP - both the analyze
//! endpoint and the client adapter's fallback call into it.
//!
//! ## Structure
//! - `types`: Core types (Observation, Verdict, the closed enums)
//! - `rules`: Weights, thresholds, and the configurable rule table
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use packetwatch::analysis::{classify, Observation};
//!
//! let verdict = classify(&observation);
//! match verdict.status {
//!     Status::Normal => println!("Nothing to see"),
//!     Status::Suspicious => println!("Flag it"),
//! }
//! ```

pub mod classifier;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use types::{EventDescription, Observation, Protocol, Status, ThreatLevel, Verdict};

pub use rules::{Band, BandRule, ScoringRules};

pub use classifier::{classify, classify_at, classify_with_rules};
