/*!
 * Structured Tracing
 * Subscriber setup and per-run spans using the tracing crate
 */

use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use std::time::Instant;

use crate::core::limits::ENV_TRACE_JSON;
use crate::core::types::SchedulerResult;
use crate::scheduler::{Policy, Timeline};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHEDSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Records emitted through the `log` facade are forwarded. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);
    init_tracing_with(use_json);
}

/// Initialize tracing with an explicit output format
pub fn init_tracing_with(use_json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Span covering one simulation run with structured result fields
pub struct RunSpan {
    span: tracing::Span,
    start: Instant,
    run_id: u64,
    policy: Policy,
}

impl RunSpan {
    pub fn new(run_id: u64, policy: Policy, processes: usize) -> Self {
        let span = span!(
            Level::DEBUG,
            "simulation_run",
            run_id = run_id,
            policy = policy.as_str(),
            processes = processes,
            intervals = tracing::field::Empty,
            makespan = tracing::field::Empty,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        {
            let _entered = span.enter();
            debug!(run_id, policy = policy.as_str(), "run started");
        }

        Self {
            span,
            start: Instant::now(),
            run_id,
            policy,
        }
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the outcome of the run
    pub fn record_outcome(&self, outcome: &SchedulerResult<Timeline>) {
        match outcome {
            Ok(timeline) => {
                self.span.record("intervals", timeline.len());
                self.span.record("makespan", timeline.makespan());
                self.span.record("result", "success");
            }
            Err(err) => {
                self.span.record("error", tracing::field::display(err));
                self.span.record("result", "error");
                let _entered = self.span.enter();
                warn!(run_id = self.run_id, policy = self.policy.as_str(), error = %err, "run rejected");
            }
        }
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);
        let _entered = self.span.enter();
        debug!(
            run_id = self.run_id,
            policy = self.policy.as_str(),
            duration_us = duration.as_micros() as u64,
            "run completed"
        );
    }
}
