use std::path::PathBuf;

use thiserror::Error;

use crate::singleton::Strategy;

/// Prototype registry lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no prototype registered for '{key}'")]
    NotFound { key: String },
}

#[derive(Error, Debug)]
pub enum SingletonError {
    /// The guarded constructor ran after the canonical instance already exists.
    #[error("{strategy} singleton is already initialized; refusing a second construction")]
    AlreadyInitialized { strategy: Strategy },

    #[error("singleton serialization failed: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("singleton I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("refusing to send an empty {channel} message")]
    EmptyMessage { channel: &'static str },

    #[error("{channel} message is {len} characters, the limit is {max}")]
    MessageTooLong {
        channel: &'static str,
        len: usize,
        max: usize,
    },

    #[error("no recipient given for the {channel} message")]
    MissingRecipient { channel: &'static str },

    #[error("unsupported OTP medium '{medium}'")]
    UnsupportedMedium { medium: String },
}

/// A facade step failed; the steps after it were not run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeploymentError {
    #[error("deployment aborted at step '{step}': {reason}")]
    StepFailed {
        step: &'static str,
        reason: String,
    },
}

impl DeploymentError {
    pub fn step_failed(step: &'static str, reason: impl Into<String>) -> Self {
        Self::StepFailed {
            step,
            reason: reason.into(),
        }
    }

    pub fn step(&self) -> &'static str {
        match self {
            Self::StepFailed { step, .. } => step,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("amount must be positive")]
    InvalidAmount,

    #[error("unknown account '{account}'")]
    UnknownAccount { account: String },

    #[error("insufficient funds in '{account}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: u64,
        requested: u64,
    },

    #[error("depositing {amount} into '{account}' would overflow its balance of {balance}")]
    BalanceOverflow {
        account: String,
        balance: u64,
        amount: u64,
    },

    #[error("unknown loan type '{loan_type}'")]
    UnknownLoanType { loan_type: String },

    #[error(transparent)]
    Otp(#[from] NotificationError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
