//! Reconciler façade
//!
//! Thin entry point for the orchestrating host: one typed pass-through
//! method per lifecycle event, no logic beyond parameter adaptation. The
//! host owns the dependency graph, scheduling and per-handle serialization.

use crate::controller::{DeleteOutcome, ReadOutcome, ResourceController, ResourceHandle};
use crate::error::Result;
use crate::instance::{DesiredInstance, InstanceController, ObservedInstance};
use crate::ssh_key::{DesiredSshKey, ObservedSshKey, SshKeyController};
use lambdaflow_api::{ApiClient, ApiConfig};

pub struct Reconciler {
    instances: InstanceController,
    ssh_keys: SshKeyController,
}

impl Reconciler {
    /// Build both controllers over one shared client. The credential is
    /// injected here, once; nothing mutates it afterwards.
    pub fn new(config: ApiConfig) -> Self {
        let client = ApiClient::new(config);
        Self {
            instances: InstanceController::new(client.clone()),
            ssh_keys: SshKeyController::new(client),
        }
    }

    /// Convenience constructor resolving the credential from the
    /// environment.
    pub fn from_env() -> lambdaflow_api::Result<Self> {
        Ok(Self::new(ApiConfig::resolve(None)?))
    }

    pub fn instances(&self) -> &InstanceController {
        &self.instances
    }

    pub fn ssh_keys(&self) -> &SshKeyController {
        &self.ssh_keys
    }

    // Instance lifecycle

    pub async fn create_instance(&self, desired: &DesiredInstance) -> Result<ObservedInstance> {
        self.instances.create(desired).await
    }

    pub async fn read_instance(
        &self,
        handle: &ResourceHandle,
    ) -> Result<ReadOutcome<ObservedInstance>> {
        self.instances.read(handle).await
    }

    pub async fn update_instance(
        &self,
        desired: &DesiredInstance,
        prior: &ObservedInstance,
    ) -> Result<ObservedInstance> {
        self.instances.update(desired, prior).await
    }

    pub async fn delete_instance(&self, handle: &ResourceHandle) -> Result<DeleteOutcome> {
        self.instances.delete(handle).await
    }

    pub fn import_instance(&self, external_id: &str) -> ResourceHandle {
        self.instances.import(external_id)
    }

    // SSH key lifecycle

    pub async fn create_ssh_key(&self, desired: &DesiredSshKey) -> Result<ObservedSshKey> {
        self.ssh_keys.create(desired).await
    }

    pub async fn read_ssh_key(
        &self,
        handle: &ResourceHandle,
    ) -> Result<ReadOutcome<ObservedSshKey>> {
        self.ssh_keys.read(handle).await
    }

    pub async fn update_ssh_key(
        &self,
        desired: &DesiredSshKey,
        prior: &ObservedSshKey,
    ) -> Result<ObservedSshKey> {
        self.ssh_keys.update(desired, prior).await
    }

    pub async fn delete_ssh_key(&self, handle: &ResourceHandle) -> Result<DeleteOutcome> {
        self.ssh_keys.delete(handle).await
    }

    pub fn import_ssh_key(&self, external_id: &str) -> ResourceHandle {
        self.ssh_keys.import(external_id)
    }
}
