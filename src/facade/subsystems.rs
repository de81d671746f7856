use tracing::info;

use super::Step;
use crate::error::DeploymentError;

fn failed(step: Step, reason: impl Into<String>) -> DeploymentError {
    DeploymentError::step_failed(step.name(), reason)
}

pub(super) struct VersionControlSystem;

impl VersionControlSystem {
    pub(super) fn pull_latest(&self, branch: &str) -> Result<(), DeploymentError> {
        if branch.trim().is_empty() {
            return Err(failed(Step::Checkout, "branch name is empty"));
        }
        if branch.chars().any(char::is_whitespace) {
            return Err(failed(
                Step::Checkout,
                format!("'{branch}' is not a valid branch name"),
            ));
        }
        info!(branch, "pulled latest code");
        Ok(())
    }
}

pub(super) struct BuildSystem;

impl BuildSystem {
    /// Returns the artifact name, e.g. `app-feature-new-ui.jar`.
    pub(super) fn compile(&self, branch: &str) -> Result<String, DeploymentError> {
        let artifact = format!("app-{}.jar", branch.replace('/', "-"));
        info!(%artifact, "build complete");
        Ok(artifact)
    }
}

pub(super) struct TestingFramework;

impl TestingFramework {
    pub(super) fn run_unit_tests(&self, artifact: &str) -> Result<(), DeploymentError> {
        info!(artifact, "unit tests passed");
        Ok(())
    }

    pub(super) fn run_integration_tests(&self, artifact: &str) -> Result<(), DeploymentError> {
        info!(artifact, "integration tests passed");
        Ok(())
    }
}

pub(super) struct DeploymentTarget {
    known_servers: Vec<String>,
}

impl DeploymentTarget {
    pub(super) fn new(known_servers: Vec<String>) -> Self {
        Self { known_servers }
    }

    pub(super) fn transfer(&self, artifact: &str, server: &str) -> Result<(), DeploymentError> {
        if !self.known_servers.iter().any(|known| known == server) {
            return Err(failed(
                Step::Transfer,
                format!("unknown server '{server}'"),
            ));
        }
        info!(artifact, server, "artifact transferred");
        Ok(())
    }

    pub(super) fn activate(&self, artifact: &str, server: &str) -> Result<(), DeploymentError> {
        info!(artifact, server, "application started");
        Ok(())
    }
}
