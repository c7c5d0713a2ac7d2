//! Records decoded from API responses
//!
//! Field names follow the JSON the service returns. A single [`Domain`]
//! shape serves both the search and the status endpoints; which optional
//! fields are populated depends on the endpoint that produced the record.

use serde::{Deserialize, Deserializer, Serialize};

/// A domain name and what the service knows about it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Domain {
    #[serde(rename = "domain")]
    pub name: String,
    #[serde(default)]
    pub zone: String,

    // Status endpoint
    /// Space-separated status tokens, e.g. `"undelegated inactive"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    // Search endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "registerURL", default, skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,
}

/// Response of the zones endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZonesResult {
    #[serde(default)]
    pub zones: Vec<String>,
}

/// Response of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// The query as echoed back by the service.
    #[serde(default)]
    pub query: String,
    #[serde(rename = "results", default)]
    pub domains: Vec<Domain>,
}

/// Response of the status endpoint, in the order the service returned it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResult {
    #[serde(rename = "status", default)]
    pub domains: Vec<Domain>,
}

/// Body of a non-200 response.
///
/// Older responses carry only `message`; newer ones add a `status` code,
/// sometimes as a string and sometimes as a number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub message: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_record_decodes_status_fields() {
        let domain: Domain = serde_json::from_value(json!({
            "domain": "example.com",
            "zone": "com",
            "status": "active",
            "summary": "active"
        }))
        .unwrap();

        assert_eq!(domain.name, "example.com");
        assert_eq!(domain.zone, "com");
        assert_eq!(domain.status.as_deref(), Some("active"));
        assert_eq!(domain.summary.as_deref(), Some("active"));
        assert!(domain.host.is_none());
        assert!(domain.register_url.is_none());
    }

    #[test]
    fn search_record_decodes_register_url() {
        let domain: Domain = serde_json::from_value(json!({
            "domain": "acme.coffee",
            "host": "",
            "subdomain": "acme.",
            "zone": "coffee",
            "path": "",
            "registerURL": "https://api.domainr.com/v2/register?domain=acme.coffee"
        }))
        .unwrap();

        assert_eq!(domain.subdomain.as_deref(), Some("acme."));
        assert_eq!(domain.host.as_deref(), Some(""));
        assert_eq!(
            domain.register_url.as_deref(),
            Some("https://api.domainr.com/v2/register?domain=acme.coffee")
        );
        assert!(domain.status.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let result: StatusResult = serde_json::from_value(json!({
            "status": [{"domain": "a.io", "zone": "io", "status": "inactive", "extra": 1}],
            "errors": []
        }))
        .unwrap();

        assert_eq!(result.domains.len(), 1);
    }

    #[test]
    fn envelope_accepts_message_only() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"message":"unauthorized: invalid API client ID"}"#).unwrap();

        assert_eq!(envelope.status, None);
        assert_eq!(envelope.message, "unauthorized: invalid API client ID");
    }

    #[test]
    fn envelope_normalizes_status_code() {
        let text: ErrorEnvelope =
            serde_json::from_str(r#"{"status":"400","message":"bad"}"#).unwrap();
        let number: ErrorEnvelope =
            serde_json::from_str(r#"{"status":400,"message":"bad"}"#).unwrap();
        let null: ErrorEnvelope =
            serde_json::from_str(r#"{"status":null,"message":"bad"}"#).unwrap();

        assert_eq!(text.status.as_deref(), Some("400"));
        assert_eq!(number.status.as_deref(), Some("400"));
        assert_eq!(null.status, None);
    }

    #[test]
    fn envelope_requires_message() {
        assert!(serde_json::from_str::<ErrorEnvelope>(r#"{"status":"500"}"#).is_err());
    }
}
