//! Population storage: `AgentStore` and the per-status tally.

use ct_core::AgentId;

use crate::{Agent, AgentError, AgentResult, HealthStatus};

/// Owns every agent of one run.
///
/// The agent count is fixed at construction.  The simulation driver holds the
/// only `AgentStore` and lends out `&[Agent]` for read-only passes (spatial
/// index, transmission) and `&mut` only for its own sequential update pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// Wrap a population.  `agents[i].id` must equal `AgentId(i)`.
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        debug_assert!(agents.iter().enumerate().all(|(i, a)| a.id.index() == i));
        Self { agents }
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> AgentResult<&Agent> {
        self.agents.get(agent.index()).ok_or(AgentError::AgentNotFound(agent))
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> AgentResult<&mut Agent> {
        self.agents.get_mut(agent.index()).ok_or(AgentError::AgentNotFound(agent))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Per-status counts plus the quarantined overlay.
    pub fn tally(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for agent in &self.agents {
            match agent.health {
                HealthStatus::Healthy   => counts.healthy += 1,
                HealthStatus::Exposed   => counts.exposed += 1,
                HealthStatus::Infected  => counts.infected += 1,
                HealthStatus::Recovered => counts.recovered += 1,
                HealthStatus::Dead      => counts.dead += 1,
            }
            if agent.is_quarantined() {
                counts.quarantined += 1;
            }
        }
        counts
    }

    /// Run [`check_agent`][crate::check_agent] on every agent.
    pub fn validate(&self) -> AgentResult<()> {
        self.agents.iter().try_for_each(crate::check_agent)
    }
}

/// Aggregate compartment counts.
///
/// `quarantined` is an overlay across statuses and is not part of the sum.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub healthy:     u32,
    pub exposed:     u32,
    pub infected:    u32,
    pub recovered:   u32,
    pub dead:        u32,
    pub quarantined: u32,
}

impl StatusCounts {
    /// Sum of the five health compartments.  Always equals the population.
    #[inline]
    pub fn total(&self) -> u32 {
        self.healthy + self.exposed + self.infected + self.recovered + self.dead
    }

    pub fn get(&self, status: HealthStatus) -> u32 {
        match status {
            HealthStatus::Healthy   => self.healthy,
            HealthStatus::Exposed   => self.exposed,
            HealthStatus::Infected  => self.infected,
            HealthStatus::Recovered => self.recovered,
            HealthStatus::Dead      => self.dead,
        }
    }
}

impl<'a> IntoIterator for &'a AgentStore {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;
    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
