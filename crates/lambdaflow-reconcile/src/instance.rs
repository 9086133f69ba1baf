//! Instance resource controller

use crate::classify::{classify, decode, is_not_found};
use crate::controller::{DeleteOutcome, ReadOutcome, ResourceController, ResourceHandle};
use crate::error::{Error, Result};
use crate::value::Value;
use async_trait::async_trait;
use lambdaflow_api::ApiClient;
use lambdaflow_api::types::{
    Envelope, InstanceBody, LaunchData, LaunchRequest, TerminateData, TerminateRequest,
};
use serde::{Deserialize, Serialize};

/// Caller-declared target configuration for an instance.
///
/// `region_name`, `instance_type_name` and `ssh_key_names` define the
/// instance's identity and are immutable once it exists; changing them
/// means recreating the instance under a new handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredInstance {
    pub region_name: String,
    pub instance_type_name: String,
    /// Exactly one key name must be present at create time.
    pub ssh_key_names: Vec<String>,
    #[serde(default)]
    pub file_system_names: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl DesiredInstance {
    /// Names the identity fields that diverge from what the service last
    /// reported. A non-empty result means the remote object no longer
    /// matches this record and must be recreated to converge.
    pub fn drift_from(&self, observed: &ObservedInstance) -> Vec<&'static str> {
        let mut drifted = Vec::new();
        if self.region_name != observed.region_name {
            drifted.push("region_name");
        }
        if self.instance_type_name != observed.instance_type_name {
            drifted.push("instance_type_name");
        }
        if self.ssh_key_names != observed.ssh_key_names {
            drifted.push("ssh_key_names");
        }
        drifted
    }
}

/// Last-known truth about an instance, populated only from remote
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedInstance {
    pub id: ResourceHandle,
    pub region_name: String,
    pub instance_type_name: String,
    pub ssh_key_names: Vec<String>,
    pub file_system_names: Vec<String>,
    pub name: Option<String>,
    pub ip: Value<String>,
    pub status: Value<String>,
    pub hostname: Value<String>,
}

impl ObservedInstance {
    fn from_remote(body: InstanceBody) -> Self {
        Self {
            id: ResourceHandle::new(body.id),
            region_name: body.region.name,
            instance_type_name: body.instance_type.name,
            ssh_key_names: body.ssh_key_names,
            file_system_names: body.file_system_names,
            name: body.name,
            ip: Value::from_remote(body.ip),
            status: Value::from_remote(body.status),
            hostname: Value::from_remote(body.hostname),
        }
    }
}

/// Controller for the instance resource kind
pub struct InstanceController {
    client: ApiClient,
}

impl InstanceController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceController for InstanceController {
    type Desired = DesiredInstance;
    type Observed = ObservedInstance;

    async fn create(&self, desired: &DesiredInstance) -> Result<ObservedInstance> {
        // The service currently requires exactly one key per launch; catch
        // it here so no network call is wasted on a doomed request.
        if desired.ssh_key_names.len() != 1 {
            return Err(Error::Validation(format!(
                "exactly one SSH key name must be specified, got {}",
                desired.ssh_key_names.len()
            )));
        }

        let request = LaunchRequest {
            region_name: desired.region_name.clone(),
            instance_type_name: desired.instance_type_name.clone(),
            ssh_key_names: desired.ssh_key_names.clone(),
            file_system_names: desired.file_system_names.clone(),
            quantity: 1,
            name: desired.name.clone(),
        };

        let res = self
            .client
            .post("instance-operations/launch", &request)
            .await?;
        if !res.status.is_success() {
            return Err(classify(res.status, &res.body));
        }

        let launched: Envelope<LaunchData> = decode(&res.body)?;
        let mut ids = launched.data.instance_ids;
        if ids.len() != 1 {
            return Err(Error::Cardinality {
                expected: 1,
                got: ids.len(),
            });
        }
        let id = ResourceHandle::new(ids.remove(0));

        tracing::info!(instance = %id, region = %desired.region_name, "launched instance");

        // The launch response carries only the id; address and status are
        // assigned later, so they start out pending rather than absent.
        Ok(ObservedInstance {
            id,
            region_name: desired.region_name.clone(),
            instance_type_name: desired.instance_type_name.clone(),
            ssh_key_names: desired.ssh_key_names.clone(),
            file_system_names: desired.file_system_names.clone(),
            name: desired.name.clone(),
            ip: Value::Pending,
            status: Value::Pending,
            hostname: Value::Pending,
        })
    }

    async fn read(&self, handle: &ResourceHandle) -> Result<ReadOutcome<ObservedInstance>> {
        let res = self.client.get(&format!("instances/{handle}")).await?;

        if is_not_found(res.status) {
            tracing::debug!(instance = %handle, "instance no longer exists remotely");
            return Ok(ReadOutcome::Absent);
        }
        if !res.status.is_success() {
            return Err(classify(res.status, &res.body));
        }

        let body: Envelope<InstanceBody> = decode(&res.body)?;
        Ok(ReadOutcome::Found(ObservedInstance::from_remote(body.data)))
    }

    async fn update(
        &self,
        desired: &DesiredInstance,
        prior: &ObservedInstance,
    ) -> Result<ObservedInstance> {
        // No remote mutation: identity fields cannot change, and the
        // service exposes no endpoint for the rest. Only the display name
        // is carried over from the desired record.
        let mut next = prior.clone();
        next.name = desired.name.clone();
        Ok(next)
    }

    async fn delete(&self, handle: &ResourceHandle) -> Result<DeleteOutcome> {
        let request = TerminateRequest {
            instance_ids: vec![handle.as_str().to_string()],
        };

        let res = self
            .client
            .post("instance-operations/terminate", &request)
            .await?;

        if is_not_found(res.status) {
            tracing::debug!(instance = %handle, "instance already terminated");
            return Ok(DeleteOutcome::AlreadyGone);
        }
        if !res.status.is_success() {
            return Err(classify(res.status, &res.body));
        }

        let _terminated: Envelope<TerminateData> = decode(&res.body)?;
        tracing::info!(instance = %handle, "terminated instance");
        Ok(DeleteOutcome::Deleted)
    }
}
