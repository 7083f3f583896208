use ct_agent::AgentError;
use ct_core::{CoreError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation rejected configuration: {0}")]
    Config(#[from] CoreError),

    #[error("population error: {0}")]
    Agent(#[from] AgentError),

    #[error("state invariant broken at tick {tick}: {source}")]
    Invariant {
        tick:   Tick,
        source: AgentError,
    },

    #[error("advance needs at least one tick")]
    ZeroTicks,
}

pub type SimResult<T> = Result<T, SimError>;
