use ::metrics::{Counter, Histogram, Key, KeyName, Label, Level, Metadata, Recorder, Unit};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};
use std::{sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time::MissedTickBehavior};

/// Latency buckets (seconds) applied to every `*_request_duration_seconds` histogram.
const DURATION_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Process-wide metric store owned by a service's `main`.
///
/// Wraps a Prometheus recorder that is never installed as the global
/// `metrics` recorder, so every counter and histogram has to be reached
/// through an explicit handle to this registry. Series are created the
/// first time a (name, labels) pair is asked for and live until the
/// process exits.
pub struct MetricsRegistry {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("_request_duration_seconds".to_string()),
                DURATION_BUCKETS,
            )?
            .build_recorder();
        let handle = recorder.handle();

        Ok(Self { recorder, handle })
    }

    pub fn describe_counter(&self, name: &str, help: &'static str) {
        self.recorder.describe_counter(KeyName::from(name.to_owned()), None, help.into());
    }

    pub fn describe_histogram(&self, name: &str, unit: Unit, help: &'static str) {
        self.recorder.describe_histogram(KeyName::from(name.to_owned()), Some(unit), help.into());
    }

    /// Handle to the counter series identified by `name` and `labels`.
    pub fn counter(&self, name: &str, labels: &[(&'static str, String)]) -> Counter {
        self.recorder.register_counter(&series_key(name, labels), &metadata())
    }

    /// Handle to the histogram series identified by `name` and `labels`.
    pub fn histogram(&self, name: &str, labels: &[(&'static str, String)]) -> Histogram {
        self.recorder.register_histogram(&series_key(name, labels), &metadata())
    }

    /// Render every registered series in the Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Fold pending histogram samples into their distributions.
    pub fn run_upkeep(&self) {
        self.handle.run_upkeep();
    }
}

/// Run [`MetricsRegistry::run_upkeep`] every `period` so histogram samples
/// stay bounded between scrapes.
pub fn spawn_upkeep(registry: Arc<MetricsRegistry>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            registry.run_upkeep();
        }
    })
}

fn series_key(name: &str, labels: &[(&'static str, String)]) -> Key {
    let labels: Vec<Label> = labels
        .iter()
        .map(|(key, value)| Label::new(*key, value.clone()))
        .collect();

    Key::from_parts(name.to_owned(), labels)
}

fn metadata() -> Metadata<'static> {
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()))
}
