//! Facade over the deployment toolchain.
//!
//! Callers get one operation, [`DeploymentFacade::deploy_application`]. The
//! version control, build, test and server subsystems stay private to this
//! module and always run in the same order. The first failing step aborts the
//! deployment.

mod subsystems;

use std::fmt;

use tracing::info;

use crate::config::DeploymentConfig;
use crate::error::DeploymentError;
use subsystems::{BuildSystem, DeploymentTarget, TestingFramework, VersionControlSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Checkout,
    Build,
    UnitTests,
    IntegrationTests,
    Transfer,
    Activate,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Checkout => "checkout",
            Step::Build => "build",
            Step::UnitTests => "unit tests",
            Step::IntegrationTests => "integration tests",
            Step::Transfer => "transfer",
            Step::Activate => "activate",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReport {
    pub branch: String,
    pub server: String,
    pub artifact: String,
    /// Completed steps, in execution order.
    pub steps: Vec<Step>,
}

impl fmt::Display for DeploymentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<&str> = self.steps.iter().map(|step| step.name()).collect();
        write!(
            f,
            "{} deployed from '{}' to {} ({})",
            self.artifact,
            self.branch,
            self.server,
            steps.join(" -> ")
        )
    }
}

pub struct DeploymentFacade {
    vcs: VersionControlSystem,
    build: BuildSystem,
    testing: TestingFramework,
    target: DeploymentTarget,
    run_integration_tests: bool,
}

impl DeploymentFacade {
    pub fn new(config: &DeploymentConfig) -> Self {
        Self {
            vcs: VersionControlSystem,
            build: BuildSystem,
            testing: TestingFramework,
            target: DeploymentTarget::new(config.known_servers.clone()),
            run_integration_tests: config.run_integration_tests,
        }
    }

    pub fn deploy_application(
        &self,
        branch: &str,
        server: &str,
    ) -> Result<DeploymentReport, DeploymentError> {
        info!(branch, server, "deployment started");
        let mut steps = Vec::with_capacity(6);

        self.vcs.pull_latest(branch)?;
        steps.push(Step::Checkout);

        let artifact = self.build.compile(branch)?;
        steps.push(Step::Build);

        self.testing.run_unit_tests(&artifact)?;
        steps.push(Step::UnitTests);

        if self.run_integration_tests {
            self.testing.run_integration_tests(&artifact)?;
            steps.push(Step::IntegrationTests);
        } else {
            info!("integration tests skipped");
        }

        self.target.transfer(&artifact, server)?;
        steps.push(Step::Transfer);

        self.target.activate(&artifact, server)?;
        steps.push(Step::Activate);

        info!(%artifact, server, "deployment finished");
        Ok(DeploymentReport {
            branch: branch.to_string(),
            server: server.to_string(),
            artifact,
            steps,
        })
    }
}

impl Default for DeploymentFacade {
    fn default() -> Self {
        Self::new(&DeploymentConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deployment_runs_every_step_in_order() {
        let report = DeploymentFacade::default()
            .deploy_application("main", "prod.server")
            .unwrap();

        assert_eq!(
            report.steps,
            [
                Step::Checkout,
                Step::Build,
                Step::UnitTests,
                Step::IntegrationTests,
                Step::Transfer,
                Step::Activate,
            ]
        );
        assert_eq!(report.artifact, "app-main.jar");
    }

    #[test]
    fn test_feature_branch_artifact_name() {
        let report = DeploymentFacade::default()
            .deploy_application("feature/new-ui", "staging.server")
            .unwrap();
        assert_eq!(report.artifact, "app-feature-new-ui.jar");
        assert_eq!(report.server, "staging.server");
    }

    #[test]
    fn test_integration_tests_can_be_skipped() {
        let config = DeploymentConfig {
            run_integration_tests: false,
            ..DeploymentConfig::default()
        };
        let report = DeploymentFacade::new(&config)
            .deploy_application("main", "prod.server")
            .unwrap();

        assert_eq!(report.steps.len(), 5);
        assert!(!report.steps.contains(&Step::IntegrationTests));
    }

    #[test]
    fn test_blank_branch_fails_at_checkout() {
        let err = DeploymentFacade::default()
            .deploy_application("  ", "prod.server")
            .unwrap_err();
        assert_eq!(err.step(), Step::Checkout.name());
    }

    #[test]
    fn test_unknown_server_fails_at_transfer() {
        let err = DeploymentFacade::default()
            .deploy_application("main", "mystery.server")
            .unwrap_err();
        assert_eq!(err.step(), Step::Transfer.name());
        assert!(err.to_string().contains("mystery.server"));
    }

    #[test]
    fn test_report_display() {
        let report = DeploymentFacade::default()
            .deploy_application("main", "prod.server")
            .unwrap();
        assert_eq!(
            report.to_string(),
            "app-main.jar deployed from 'main' to prod.server \
             (checkout -> build -> unit tests -> integration tests -> transfer -> activate)"
        );
    }
}
