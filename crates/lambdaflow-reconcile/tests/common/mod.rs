use lambdaflow_api::ApiConfig;
use lambdaflow_reconcile::Reconciler;
use wiremock::MockServer;

/// Reconciler wired against a mock provisioning service.
pub fn reconciler_for(server: &MockServer) -> Reconciler {
    Reconciler::new(ApiConfig::new("test-key").with_base_url(server.uri()))
}

/// Instance body the way `GET instances/{id}` returns it.
#[allow(dead_code)]
pub fn instance_json(id: &str, region: &str, instance_type: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id": id,
            "name": "train-01",
            "ip": "10.0.0.5",
            "status": "active",
            "ssh_key_names": ["laptop"],
            "file_system_names": [],
            "region": { "name": region, "description": "" },
            "instance_type": {
                "name": instance_type,
                "description": "",
                "price_cents_per_hour": 60,
                "specs": { "vcpus": 30, "memory_gib": 200 }
            },
            "hostname": format!("{id}.cloud.lambdalabs.com"),
            "jupyter_token": "tok",
            "jupyter_url": "https://jupyter.example"
        }
    })
}

/// Error envelope the way the service reports failures.
#[allow(dead_code)]
pub fn error_json(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "suggestion": null
        }
    })
}
