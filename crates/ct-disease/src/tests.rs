//! Unit tests for ct-disease.

use ct_agent::{Agent, HealthStatus, MovementMode, QuarantineStatus};
use ct_core::{AgentId, Point, SimConfig, SimRng, Tick};
use ct_spatial::{RegionBounds, RegionId};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn region() -> RegionId {
    RegionId::NORMAL[0]
}

/// A Healthy, Settled agent `(dx, dy)` away from `(100, 100)`, inside region 0.
fn agent(id: u32, dx: f64, dy: f64) -> Agent {
    debug_assert!(RegionBounds::of(region()).contains(Point::new(100.0, 100.0)));
    Agent::new(AgentId(id), region(), Point::new(100.0 + dx, 100.0 + dy), Point::ORIGIN)
}

fn infected(id: u32, dx: f64, dy: f64) -> Agent {
    let mut a = agent(id, dx, dy);
    a.set_health(HealthStatus::Infected);
    a
}

fn config(probability: f64) -> SimConfig {
    SimConfig { infection_probability: probability, infection_radius: 10.0, ..SimConfig::default() }
}

/// Run up to `passes` transmission passes; return every exposure seen.
fn run_passes(agents: &[Agent], cfg: &SimConfig, passes: usize) -> Vec<crate::Exposure> {
    let mut engine = crate::TransmissionEngine::new();
    let mut rng = SimRng::new(11);
    (0..passes).flat_map(|_| engine.find_exposures(agents, cfg, &mut rng)).collect()
}

// ── Progression ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod progression {
    use super::*;
    use crate::{step_health, step_incubation};
    use ct_agent::Outcome;

    #[test]
    fn healthy_agent_only_ages() {
        let mut a = agent(0, 0.0, 0.0);
        let mut rng = SimRng::new(1);
        for t in 1..=10 {
            assert_eq!(step_health(&mut a, &SimConfig::default(), &mut rng), None);
            assert_eq!(a.time_in_status, t);
        }
        assert_eq!(a.health, HealthStatus::Healthy);
    }

    #[test]
    fn exposed_agent_is_left_to_incubation() {
        let mut a = agent(0, 0.0, 0.0);
        a.set_health(HealthStatus::Exposed);
        let mut rng = SimRng::new(1);
        assert_eq!(step_health(&mut a, &SimConfig::default(), &mut rng), None);
        assert_eq!(a.time_in_status, 0);
    }

    #[test]
    fn outcome_is_drawn_once() {
        let mut a = infected(0, 0.0, 0.0);
        let mut rng = SimRng::new(1);
        let cfg = SimConfig { death_rate: 1.0, ..SimConfig::default() };
        step_health(&mut a, &cfg, &mut rng);
        assert_eq!(a.outcome, Some(Outcome::Dies));

        // A later config change does not touch the episode's draw.
        let cfg = SimConfig { death_rate: 0.0, ..SimConfig::default() };
        step_health(&mut a, &cfg, &mut rng);
        assert_eq!(a.outcome, Some(Outcome::Dies));
    }

    #[test]
    fn doomed_agent_dies_after_half_the_recovery_time() {
        let mut a = infected(0, 0.0, 0.0);
        let cfg = SimConfig { death_rate: 1.0, recovery_ticks: 100, ..SimConfig::default() };
        let mut rng = SimRng::new(1);
        for _ in 0..50 {
            assert_eq!(step_health(&mut a, &cfg, &mut rng), None);
        }
        assert_eq!(step_health(&mut a, &cfg, &mut rng), Some(HealthStatus::Dead));
        assert_eq!(a.health, HealthStatus::Dead);
        assert_eq!(a.time_in_status, 0);
        assert_eq!(a.infection_count, None);
    }

    #[test]
    fn surviving_agent_recovers_after_the_full_recovery_time() {
        let mut a = infected(0, 0.0, 0.0);
        let cfg = SimConfig { death_rate: 0.0, recovery_ticks: 100, ..SimConfig::default() };
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            assert_eq!(step_health(&mut a, &cfg, &mut rng), None);
        }
        assert_eq!(step_health(&mut a, &cfg, &mut rng), Some(HealthStatus::Recovered));
        assert_eq!(a.infection_count, None);
    }

    #[test]
    fn incubation_promotes_after_the_configured_period() {
        let mut a = agent(0, 0.0, 0.0);
        a.set_health(HealthStatus::Exposed);
        let cfg = SimConfig { incubation_ticks: 10, ..SimConfig::default() };
        for t in 1..=10 {
            assert!(!step_incubation(&mut a, &cfg));
            assert_eq!(a.time_in_status, t);
        }
        assert!(step_incubation(&mut a, &cfg));
        assert_eq!(a.health, HealthStatus::Infected);
        assert_eq!(a.time_in_status, 0);
        assert_eq!(a.outcome, None);
        assert_eq!(a.quarantine_eligible, None);
        assert_eq!(a.infection_count, Some(0));
    }

    #[test]
    fn incubation_ignores_other_statuses() {
        let mut a = infected(0, 0.0, 0.0);
        assert!(!step_incubation(&mut a, &SimConfig::default()));
        assert_eq!(a.time_in_status, 0);
    }
}

// ── Transmission ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod transmission {
    use super::*;
    use crate::{Exposure, TransmissionEngine, apply_exposures};

    #[test]
    fn close_healthy_neighbor_is_eventually_exposed() {
        let agents = vec![infected(0, 0.0, 0.0), agent(1, 3.0, 4.0)];
        let found = run_passes(&agents, &config(1.0), 300);
        assert!(!found.is_empty());
        assert!(found.iter().all(|e| *e == Exposure { source: AgentId(0), target: AgentId(1) }));
    }

    #[test]
    fn zero_probability_never_transmits() {
        let agents = vec![infected(0, 0.0, 0.0), agent(1, 1.0, 0.0), agent(2, 0.0, 1.0)];
        assert!(run_passes(&agents, &config(0.0), 500).is_empty());
    }

    #[test]
    fn radius_is_exclusive() {
        // Exactly on the radius: squared distance equals squared radius.
        let agents = vec![infected(0, 0.0, 0.0), agent(1, 10.0, 0.0), agent(2, 6.0, 8.0)];
        assert!(run_passes(&agents, &config(1.0), 500).is_empty());
    }

    #[test]
    fn center_visitors_and_passers_by_do_not_mix() {
        let mut source = infected(0, 0.0, 0.0);
        source.movement = MovementMode::VisitingCenter { ticks_remaining: 50 };
        let agents = vec![source, agent(1, 2.0, 0.0)];
        assert!(run_passes(&agents, &config(1.0), 500).is_empty());
    }

    #[test]
    fn two_center_visitors_can_transmit() {
        let mut source = infected(0, 0.0, 0.0);
        source.movement = MovementMode::VisitingCenter { ticks_remaining: 50 };
        let mut target = agent(1, 2.0, 0.0);
        target.movement = MovementMode::VisitingCenter { ticks_remaining: 50 };
        assert!(!run_passes(&[source, target], &config(1.0), 300).is_empty());
    }

    #[test]
    fn only_healthy_agents_are_targets() {
        let mut exposed = agent(1, 1.0, 0.0);
        exposed.set_health(HealthStatus::Exposed);
        let mut recovered = agent(2, 0.0, 1.0);
        recovered.set_health(HealthStatus::Recovered);
        let mut dead = agent(3, 1.0, 1.0);
        dead.set_health(HealthStatus::Dead);
        let agents = vec![infected(0, 0.0, 0.0), exposed, recovered, dead, infected(4, -1.0, 0.0)];
        assert!(run_passes(&agents, &config(1.0), 500).is_empty());
    }

    #[test]
    fn region_assignment_separates_agents() {
        // Same coordinates, but the target is assigned to another region
        // (e.g. it just started travelling).
        let mut target = agent(1, 1.0, 0.0);
        target.current_region = RegionId::NORMAL[1];
        let agents = vec![infected(0, 0.0, 0.0), target];
        assert!(run_passes(&agents, &config(1.0), 500).is_empty());
    }

    #[test]
    fn quarantined_sources_do_not_transmit() {
        let mut source = infected(0, 0.0, 0.0);
        source.quarantine = QuarantineStatus::Quarantined;
        source.current_region = RegionId::QUARANTINE;
        let mut target = agent(1, 1.0, 0.0);
        target.current_region = RegionId::QUARANTINE;
        assert!(run_passes(&[source, target], &config(1.0), 500).is_empty());
    }

    #[test]
    fn pending_detection_sources_still_transmit() {
        let mut source = infected(0, 0.0, 0.0);
        source.quarantine = QuarantineStatus::PendingDetection;
        assert!(!run_passes(&[source, agent(1, 1.0, 0.0)], &config(1.0), 300).is_empty());
    }

    #[test]
    fn a_target_is_exposed_at_most_once_per_pass() {
        let agents: Vec<Agent> = (0..6)
            .map(|i| infected(i, i as f64 * 0.5, 0.0))
            .chain(std::iter::once(agent(6, 1.0, 1.0)))
            .collect();
        let mut engine = TransmissionEngine::new();
        let mut rng = SimRng::new(3);
        for _ in 0..300 {
            let found = engine.find_exposures(&agents, &config(1.0), &mut rng);
            assert!(found.len() <= 1);
        }
        assert!(engine.stats().exposures > 0);
        assert!(engine.stats().contacts >= engine.stats().exposures);
    }

    #[test]
    fn applying_exposures_updates_both_sides() {
        let mut agents = vec![infected(0, 0.0, 0.0), agent(1, 1.0, 0.0), agent(2, 0.0, 1.0)];
        agents[1].time_in_status = 17;
        let exposures = [
            Exposure { source: AgentId(0), target: AgentId(1) },
            Exposure { source: AgentId(0), target: AgentId(2) },
        ];
        let events = apply_exposures(&mut agents, &exposures, Tick(9));

        assert_eq!(agents[1].health, HealthStatus::Exposed);
        assert_eq!(agents[1].time_in_status, 0);
        assert_eq!(agents[2].health, HealthStatus::Exposed);
        assert_eq!(agents[0].infection_count, Some(2));
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.source == AgentId(0) && e.tick == Tick(9)));
    }

    #[test]
    fn reset_zeroes_stats() {
        let agents = vec![infected(0, 0.0, 0.0), agent(1, 1.0, 0.0)];
        let mut engine = TransmissionEngine::new();
        let mut rng = SimRng::new(1);
        for _ in 0..50 {
            engine.find_exposures(&agents, &config(1.0), &mut rng);
        }
        engine.reset();
        assert_eq!(engine.stats(), crate::TransmissionStats::default());
    }
}

// ── Reproduction estimate ─────────────────────────────────────────────────────

#[cfg(test)]
mod reproduction {
    use super::*;
    use crate::{InfectionEvent, REPRODUCTION_WINDOW_TICKS, ReproductionEstimator};

    fn event(source: u32, target: u32, tick: u64) -> InfectionEvent {
        InfectionEvent { source: AgentId(source), target: AgentId(target), tick: Tick(tick) }
    }

    fn sources_with_counts(counts: &[Option<u32>]) -> Vec<Agent> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let mut a = infected(i as u32, 0.0, 0.0);
                a.infection_count = c;
                a
            })
            .collect()
    }

    #[test]
    fn empty_window_estimates_zero() {
        let mut est = ReproductionEstimator::new();
        assert_eq!(est.update(Tick::ZERO, &[]), 0.0);
        assert_eq!(est.max(), 0.0);
    }

    #[test]
    fn estimate_averages_total_counts_over_distinct_sources() {
        let agents = sources_with_counts(&[Some(3), Some(1)]);
        let mut est = ReproductionEstimator::new();
        est.record([event(0, 5, 10), event(0, 6, 11), event(1, 7, 12)]);
        // Source 0 has 3 in total even though only 2 events are in the window.
        assert!((est.update(Tick(20), &agents) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn old_events_leave_the_window() {
        let agents = sources_with_counts(&[Some(4)]);
        let mut est = ReproductionEstimator::new();
        est.record([event(0, 1, 0)]);
        assert!((est.update(Tick(REPRODUCTION_WINDOW_TICKS), &agents) - 4.0).abs() < 1e-12);
        assert_eq!(est.update(Tick(REPRODUCTION_WINDOW_TICKS + 1), &agents), 0.0);
        assert_eq!(est.window_len(), 0);
        assert!((est.max() - 4.0).abs() < 1e-12, "maximum survives the window");
    }

    #[test]
    fn finished_episodes_count_as_zero() {
        let agents = sources_with_counts(&[None, Some(2)]);
        let mut est = ReproductionEstimator::new();
        est.record([event(0, 2, 1), event(1, 3, 1)]);
        assert!((est.update(Tick(2), &agents) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reset_clears_everything() {
        let agents = sources_with_counts(&[Some(1)]);
        let mut est = ReproductionEstimator::new();
        est.record([event(0, 1, 0)]);
        est.update(Tick(1), &agents);
        est.reset();
        assert_eq!(est.current(), 0.0);
        assert_eq!(est.max(), 0.0);
        assert_eq!(est.events().count(), 0);
    }
}
