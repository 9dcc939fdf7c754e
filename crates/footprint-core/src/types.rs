//! Scan contract types shared with the external scoring engine.
//!
//! Field names here are the wire names of the engine's JSON schema and must
//! not be renamed.

use crate::error::FootprintError;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Kind of identifier submitted for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// Email address
    Email,
    /// Username / handle
    Username,
}

impl IdentifierType {
    /// Guess the identifier type from its shape: anything containing `@` is an email.
    #[must_use]
    pub fn infer(identifier: &str) -> Self {
        if identifier.contains('@') {
            Self::Email
        } else {
            Self::Username
        }
    }

    /// Wire name of the identifier type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "username" => Ok(Self::Username),
            other => Err(FootprintError::Validation(format!(
                "invalid identifier type: expected 'email' or 'username', got '{other}'"
            ))),
        }
    }
}

/// Request body for `POST /api/scan`.
///
/// The identifier is personal data: its buffer is wiped when the request is
/// dropped and it never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ScanRequest {
    /// Email address or username to scan
    pub identifier: String,
    /// What kind of identifier this is
    #[zeroize(skip)]
    pub identifier_type: IdentifierType,
}

impl ScanRequest {
    /// Build a request, rejecting an empty identifier.
    ///
    /// # Errors
    /// Returns `FootprintError::Validation` if the identifier is empty or blank.
    pub fn new(
        identifier: impl Into<String>,
        identifier_type: IdentifierType,
    ) -> Result<Self, FootprintError> {
        let request = Self {
            identifier: identifier.into(),
            identifier_type,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the request invariants that must hold before dispatch.
    ///
    /// Only emptiness is enforced; email syntax is a hint, see
    /// [`ScanRequest::is_plausible_email`].
    pub fn validate(&self) -> Result<(), FootprintError> {
        if self.identifier.trim().is_empty() {
            return Err(FootprintError::Validation(
                "identifier must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the identifier looks like an email address.
    ///
    /// Always `true` for username requests. The engine is the authority on
    /// what it accepts; this only drives client-side warnings.
    #[must_use]
    pub fn is_plausible_email(&self) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

        match self.identifier_type {
            IdentifierType::Username => true,
            IdentifierType::Email => {
                let regex = EMAIL_REGEX.get_or_init(|| {
                    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex")
                });
                regex.is_match(self.identifier.trim())
            }
        }
    }
}

impl fmt::Debug for ScanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanRequest")
            .field("identifier", &"<redacted>")
            .field("identifier_type", &self.identifier_type)
            .finish()
    }
}

/// A grouping of platforms sharing a type of data exposure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureCategory {
    /// Category name (e.g. "Social Media")
    pub name: String,
    /// Platforms where the identifier was found
    pub platforms: Vec<String>,
    /// Free-form risk label, usually low/medium/high
    pub risk_level: String,
    /// Human-readable explanation of the exposure
    pub explanation: String,
}

/// A historical data breach associated with the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachInfo {
    /// Breach name
    pub name: String,
    /// Breach date as reported by the engine, if known
    #[serde(default)]
    pub breach_date: Option<String>,
    /// Data fields exposed in the breach
    pub data_exposed: Vec<String>,
    /// What the user should do about it
    pub action_required: String,
}

/// A single remediation step from the cleanup plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupAction {
    /// Display priority (engine-ordered, never re-sorted)
    pub priority: i64,
    /// What to do
    pub action: String,
    /// Platforms the action applies to
    pub platforms: Vec<String>,
    /// Rough time estimate, free-form (e.g. "10-15 minutes")
    pub estimated_time: String,
}

/// Response body of a successful `POST /api/scan`.
///
/// Treated as an immutable value: a session replaces it wholesale and
/// nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Engine-computed exposure score
    pub exposure_score: f64,
    /// Overall risk label
    pub risk_level: String,
    /// Exposure breakdown, in engine order
    pub categories: Vec<ExposureCategory>,
    /// Known breaches, in engine order
    pub breaches: Vec<BreachInfo>,
    /// Remediation plan, in engine order
    pub cleanup_plan: Vec<CleanupAction>,
    /// When the engine ran the scan (ISO-8601 expected, not validated)
    pub scan_timestamp: String,
}

impl ScanResponse {
    /// Best-effort parse of `scan_timestamp`.
    ///
    /// Accepts RFC 3339 and offset-less ISO-8601 (read as UTC). Returns
    /// `None` for anything else; the raw string is left untouched.
    #[must_use]
    pub fn scanned_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.scan_timestamp.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn sample_response_json() -> serde_json::Value {
        serde_json::json!({
            "exposure_score": 42.5,
            "risk_level": "medium",
            "categories": [
                {
                    "name": "Social Media",
                    "platforms": ["X", "Reddit"],
                    "risk_level": "high",
                    "explanation": "Public profiles found"
                },
                {
                    "name": "Forums",
                    "platforms": [],
                    "risk_level": "low",
                    "explanation": "Old posts"
                }
            ],
            "breaches": [
                {
                    "name": "ExampleLeak",
                    "breach_date": "2019-05-01",
                    "data_exposed": ["email", "password"],
                    "action_required": "Change your password"
                },
                {
                    "name": "UndatedLeak",
                    "data_exposed": ["email"],
                    "action_required": "Watch for phishing"
                }
            ],
            "cleanup_plan": [
                {
                    "priority": 2,
                    "action": "Update privacy settings",
                    "platforms": ["X"],
                    "estimated_time": "20-30 minutes"
                },
                {
                    "priority": 1,
                    "action": "Delete unused accounts",
                    "platforms": ["Old forums"],
                    "estimated_time": "15 minutes"
                }
            ],
            "scan_timestamp": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_scan_request_valid() {
        let request =
            ScanRequest::new("name@example.com", IdentifierType::Email).expect("valid request");
        assert_eq!(request.identifier, "name@example.com");
        assert_eq!(request.identifier_type, IdentifierType::Email);
    }

    #[test]
    fn test_scan_request_rejects_empty() {
        for identifier in ["", "   ", "\t\n"] {
            let result = ScanRequest::new(identifier, IdentifierType::Username);
            assert!(
                matches!(result, Err(FootprintError::Validation(_))),
                "should reject {identifier:?}"
            );
        }
    }

    #[test]
    fn test_scan_request_wire_format() {
        let request = ScanRequest::new("jdoe", IdentifierType::Username).expect("valid request");
        let json = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(
            json,
            serde_json::json!({ "identifier": "jdoe", "identifier_type": "username" })
        );

        let parsed: ScanRequest = serde_json::from_str(
            r#"{"identifier":"a@b.com","identifier_type":"email"}"#,
        )
        .expect("deserialize request");
        assert_eq!(parsed.identifier_type, IdentifierType::Email);
    }

    #[test]
    fn test_scan_request_debug_redacts_identifier() {
        let request =
            ScanRequest::new("secret@example.com", IdentifierType::Email).expect("valid request");
        let debug = format!("{request:?}");
        assert!(!debug.contains("secret@example.com"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_plausible_email() {
        let plausible = ["a@b.com", "first.last+tag@sub.example.org"];
        for identifier in plausible {
            let request = ScanRequest::new(identifier, IdentifierType::Email).expect("request");
            assert!(request.is_plausible_email(), "should accept {identifier}");
        }

        let implausible = ["jdoe", "a@b", "a b@c.com", "@example.com"];
        for identifier in implausible {
            let request = ScanRequest::new(identifier, IdentifierType::Email).expect("request");
            assert!(!request.is_plausible_email(), "should flag {identifier}");
        }

        // Usernames are never flagged
        let request = ScanRequest::new("jdoe", IdentifierType::Username).expect("request");
        assert!(request.is_plausible_email());
    }

    #[test]
    fn test_identifier_type_infer_and_parse() {
        assert_eq!(IdentifierType::infer("a@b.com"), IdentifierType::Email);
        assert_eq!(IdentifierType::infer("jdoe"), IdentifierType::Username);

        assert_eq!("Email".parse::<IdentifierType>().ok(), Some(IdentifierType::Email));
        assert_eq!(
            " username ".parse::<IdentifierType>().ok(),
            Some(IdentifierType::Username)
        );
        assert!("phone".parse::<IdentifierType>().is_err());
        assert_eq!(IdentifierType::Username.to_string(), "username");
    }

    #[test]
    fn test_scan_response_preserves_fields_and_order() {
        let original = sample_response_json();
        let response: ScanResponse =
            serde_json::from_value(original.clone()).expect("deserialize response");

        assert_eq!(response.categories[0].platforms, vec!["X", "Reddit"]);
        assert_eq!(response.breaches[0].breach_date.as_deref(), Some("2019-05-01"));
        assert_eq!(response.breaches[1].breach_date, None);
        let priorities: Vec<i64> = response.cleanup_plan.iter().map(|a| a.priority).collect();
        assert_eq!(priorities, vec![2, 1]);

        // Re-encoding keeps every field; the absent date comes back as null
        let mut expected = original;
        expected["breaches"][1]["breach_date"] = serde_json::Value::Null;
        let reencoded = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(reencoded, expected);
    }

    #[test]
    fn test_scan_response_missing_field_is_error() {
        let mut json = sample_response_json();
        json.as_object_mut()
            .expect("object")
            .remove("cleanup_plan");
        assert!(serde_json::from_value::<ScanResponse>(json).is_err());
    }

    #[test]
    fn test_scanned_at_parsing() {
        let mut response: ScanResponse =
            serde_json::from_value(sample_response_json()).expect("deserialize response");

        let parsed = response.scanned_at().expect("rfc3339 timestamp");
        assert_eq!(parsed.year(), 2024);

        // Naive ISO-8601 as produced by Python's datetime.isoformat()
        response.scan_timestamp = "2024-03-05T14:30:15.123456".to_string();
        let parsed = response.scanned_at().expect("naive timestamp");
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.minute(), 30);

        response.scan_timestamp = "yesterday".to_string();
        assert!(response.scanned_at().is_none());
        assert_eq!(response.scan_timestamp, "yesterday");
    }
}
