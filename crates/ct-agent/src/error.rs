use ct_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("agent {agent} violates state invariant: {reason}")]
    InvariantViolation {
        agent:  AgentId,
        reason: &'static str,
    },

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
