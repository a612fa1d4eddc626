use ecoscore::config::AuthConfig;
use ecoscore::RateGovernor;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) governor: Arc<RateGovernor>,
    pub(crate) api_keys: Arc<HashSet<String>>,
}

impl AppState {
    pub(crate) fn new(
        metrics: PrometheusHandle,
        governor: RateGovernor,
        auth: &AuthConfig,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            governor: Arc::new(governor),
            api_keys: Arc::new(auth.api_keys.iter().cloned().collect()),
        }
    }
}

/// Parse a `name=share` command-line pair.
pub(crate) fn parse_material(raw: &str) -> Result<(String, f64), String> {
    let (name, share) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=share, found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("material name missing in '{raw}'"));
    }
    let share = share
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse share in '{raw}' ({err})"))?;
    Ok((name.to_string(), share))
}
