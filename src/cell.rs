use serde::{Deserialize, Serialize};

/// Raised when the gateway APIs exposed by two cell instances disagree on version.
///
/// Only the two instance names are rendered in the message; the API context and
/// version are carried for callers that report them separately.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error(
    "Version mismatch between gateway APIs exposed in instances {current_target_instance} and {new_target_instance}"
)]
pub struct GatewayApiVersionMismatch {
    /// Instance currently receiving the traffic.
    pub current_target_instance: String,
    /// Instance the traffic is being moved to.
    pub new_target_instance: String,
    /// Context of the gateway API on the current target.
    pub current_target_api_context: String,
    /// Version of the gateway API on the current target.
    pub current_target_api_version: String,
}

impl GatewayApiVersionMismatch {
    pub fn new(
        current_target_instance: impl Into<String>,
        new_target_instance: impl Into<String>,
        current_target_api_context: impl Into<String>,
        current_target_api_version: impl Into<String>,
    ) -> Self {
        Self {
            current_target_instance: current_target_instance.into(),
            new_target_instance: new_target_instance.into(),
            current_target_api_context: current_target_api_context.into(),
            current_target_api_version: current_target_api_version.into(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CellErrorKind {
    InstanceNotFound,
    GatewayApiVersionMismatch,
}

/// Structured errors for conditions raised by cell instance operations.
///
/// Code that owns the failing call should return these rather than free text,
/// so [`crate::classify`] can decide without matching on the message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("cell instance {instance} not found")]
    InstanceNotFound { instance: String },

    #[error(transparent)]
    GatewayApiVersionMismatch(#[from] GatewayApiVersionMismatch),
}

impl CellError {
    pub fn instance_not_found(instance: impl Into<String>) -> Self {
        Self::InstanceNotFound {
            instance: instance.into(),
        }
    }

    pub fn kind(&self) -> CellErrorKind {
        match self {
            Self::InstanceNotFound { .. } => CellErrorKind::InstanceNotFound,
            Self::GatewayApiVersionMismatch(_) => CellErrorKind::GatewayApiVersionMismatch,
        }
    }
}
