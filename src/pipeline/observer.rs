//! Pipeline observer: stage hooks for logging and profiling.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! sizes for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_COUNT: &str = "count";
pub const STAGE_RANK: &str = "rank";

/// Measures the wall time of one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Summary of a finished stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    items_in: Option<usize>,
    items_out: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage consumed, when meaningful
    pub fn items_in(&self) -> Option<usize> {
        self.items_in
    }

    /// Number of items the stage produced, when meaningful
    pub fn items_out(&self) -> Option<usize> {
        self.items_out
    }
}

/// Builder for reports that carry item counts.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items_in(mut self, n: usize) -> Self {
        self.report.items_in = Some(n);
        self
    }

    pub fn items_out(mut self, n: usize) -> Self {
        self.report.items_out = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired around each pipeline stage.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every stage in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }

    /// Sum of all stage times
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_counts() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items_in(10)
            .items_out(4)
            .build();

        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.items_in(), Some(10));
        assert_eq!(report.items_out(), Some(4));
    }

    #[test]
    fn test_plain_report_has_no_counts() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.items_in().is_none());
        assert!(report.items_out().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_start(STAGE_COUNT);
        obs.on_stage_end(STAGE_COUNT, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_RANK, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_COUNT, STAGE_RANK]);
        assert_eq!(obs.total(), Duration::from_millis(3));
        assert!(obs.report(STAGE_TOKENIZE).is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
