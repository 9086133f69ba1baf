//! Wire types of the Lambda GPU cloud API
//!
//! Success bodies are wrapped in a `{"data": ...}` envelope; any non-success
//! status carries an `{"error": {...}}` envelope instead.

use serde::{Deserialize, Serialize};

/// Success envelope wrapping every 200 response body
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error envelope returned on any non-success status
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: RemoteErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct RemoteErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Request body for `POST instance-operations/launch`
#[derive(Debug, Serialize)]
pub struct LaunchRequest {
    pub region_name: String,
    pub instance_type_name: String,
    pub ssh_key_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_system_names: Vec<String>,
    // The service expects this key capitalized.
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    pub name: Option<String>,
}

/// Payload of the launch response envelope
#[derive(Debug, Deserialize)]
pub struct LaunchData {
    pub instance_ids: Vec<String>,
}

/// Request body for `POST instance-operations/terminate`
#[derive(Debug, Serialize)]
pub struct TerminateRequest {
    pub instance_ids: Vec<String>,
}

/// Payload of the terminate response envelope
#[derive(Debug, Deserialize)]
pub struct TerminateData {
    #[serde(default)]
    pub terminated_instances: Vec<InstanceBody>,
}

/// Instance record as returned by `GET instances/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceBody {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ssh_key_names: Vec<String>,
    #[serde(default)]
    pub file_system_names: Vec<String>,
    pub region: RegionBody,
    pub instance_type: InstanceTypeBody,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub jupyter_token: Option<String>,
    #[serde(default)]
    pub jupyter_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceTypeBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents_per_hour: Option<i64>,
    #[serde(default)]
    pub specs: Option<serde_json::Value>,
}

/// Request body for `POST ssh-keys`
#[derive(Debug, Serialize)]
pub struct SshKeyCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// SSH key record as returned by create and list
#[derive(Debug, Clone, Deserialize)]
pub struct SshKeyBody {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public_key: Option<String>,
    /// Only populated when the service generated the key pair.
    #[serde(default)]
    pub private_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_request_wire_format() {
        let req = LaunchRequest {
            region_name: "us-west-1".to_string(),
            instance_type_name: "gpu_1x_a10".to_string(),
            ssh_key_names: vec!["laptop".to_string()],
            file_system_names: Vec::new(),
            quantity: 1,
            name: None,
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["Quantity"], 1);
        assert_eq!(json["region_name"], "us-west-1");
        // empty file system list is omitted, unset name is an explicit null
        assert!(json.get("file_system_names").is_none());
        assert!(json["name"].is_null());
    }

    #[test]
    fn test_error_envelope_decode() {
        let body = r#"{"error":{"code":"global/invalid-api-key","message":"API key is invalid","suggestion":"Check your key"}}"#;
        let env: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(env.error.code, "global/invalid-api-key");
        assert_eq!(env.error.suggestion.as_deref(), Some("Check your key"));
    }

    #[test]
    fn test_instance_envelope_decode() {
        let body = r#"{"data":{"id":"i-123","name":"train-01","ip":"10.0.0.5","status":"active","ssh_key_names":["laptop"],"file_system_names":[],"region":{"name":"us-west-1","description":"California"},"instance_type":{"name":"gpu_1x_a10","description":"1x A10","price_cents_per_hour":60,"specs":{"vcpus":30}},"hostname":"i-123.cloud","jupyter_token":"tok","jupyter_url":"https://jupyter"}}"#;
        let env: Envelope<InstanceBody> = serde_json::from_str(body).unwrap();
        assert_eq!(env.data.region.name, "us-west-1");
        assert_eq!(env.data.instance_type.name, "gpu_1x_a10");
        assert_eq!(env.data.ip.as_deref(), Some("10.0.0.5"));
    }
}
