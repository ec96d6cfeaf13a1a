/*!
 * schedsim - Command Line Front End
 *
 * Usage: schedsim <workload.json> [policy|all] [quantum]
 *
 * Loads a workload, runs the requested policy and prints the timeline with
 * its statistics as JSON.
 */

use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;
use tracing::info;

use cpu_sched_sim::{
    init_tracing_with, load_workload, Policy, SimConfig, Simulator, Timeline, TimelineStats,
};

const USAGE: &str = "usage: schedsim <workload.json> [policy|all] [quantum]";

#[derive(Serialize)]
struct Report {
    policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantum: Option<i64>,
    timeline: Timeline,
    stats: TimelineStats,
}

fn main() -> Result<()> {
    let config = SimConfig::from_env()?;
    init_tracing_with(config.trace_json);

    let mut args = std::env::args().skip(1);
    let workload_path = args.next().ok_or_else(|| miette!(USAGE))?;
    let policies = parse_policies(&args.next().unwrap_or_else(|| "all".to_string()))?;
    let requested = args
        .next()
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| miette!("quantum '{raw}' is not an integer\n{USAGE}"))
        })
        .transpose()?;
    let quantum = resolve_quantum(&policies, requested, config.quantum);

    let processes = load_workload(&workload_path)?;
    info!(path = %workload_path, processes = processes.len(), "workload loaded");

    let simulator = Simulator::builder()
        .with_config(SimConfig { quantum, ..config })
        .with_process_set(processes)
        .build()?;

    let mut reports = Vec::with_capacity(policies.len());
    for policy in policies {
        let timeline = simulator.schedule(policy)?;
        let stats = simulator.stats(&timeline);
        reports.push(Report {
            policy,
            quantum: policy.uses_quantum().then_some(quantum),
            timeline,
            stats,
        });
    }

    let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn parse_policies(arg: &str) -> Result<Vec<Policy>> {
    if arg.eq_ignore_ascii_case("all") {
        return Ok(Policy::ALL.to_vec());
    }
    Ok(vec![Policy::from_str(arg).map_err(|e| miette!("{e}"))?])
}

/// Quantum for this run; a command-line value only counts when a selected
/// policy consumes it
fn resolve_quantum(policies: &[Policy], requested: Option<i64>, configured: i64) -> i64 {
    match requested {
        Some(quantum) if policies.iter().any(|p| p.uses_quantum()) => quantum,
        _ => configured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_ignored_without_round_robin() {
        let policies = parse_policies("fcfs").unwrap();
        assert_eq!(resolve_quantum(&policies, Some(0), 4), 4);
        assert_eq!(resolve_quantum(&policies, None, 3), 3);
    }

    #[test]
    fn test_quantum_applied_to_round_robin() {
        let policies = parse_policies("all").unwrap();
        assert_eq!(resolve_quantum(&policies, Some(2), 4), 2);
        assert_eq!(resolve_quantum(&[Policy::RoundRobin], Some(0), 4), 0);
    }

    #[test]
    fn test_fcfs_with_zero_quantum_builds() {
        let policies = parse_policies("fcfs").unwrap();
        let quantum = resolve_quantum(&policies, Some(0), SimConfig::default().quantum);
        let simulator = Simulator::builder().with_quantum(quantum).build();
        assert!(simulator.is_ok());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(parse_policies("lottery").is_err());
    }
}
