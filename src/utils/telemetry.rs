// file: src/utils/telemetry.rs
// description: Health reporting and operation timing for corpus checks
// reference: Production observability best practices

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✓",
            HealthStatus::Degraded => "⚠",
            HealthStatus::Unhealthy => "✗",
        }
    }
}

/// Result of checking one part of the corpus (an index, a shard directory...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub component: String,
    pub status: HealthStatus,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthCheck {
    pub fn healthy(component: &str, message: impl Into<String>, elapsed: Duration) -> Self {
        Self::with_status(component, HealthStatus::Healthy, message.into(), elapsed)
    }

    pub fn degraded(component: &str, message: impl Into<String>, elapsed: Duration) -> Self {
        Self::with_status(component, HealthStatus::Degraded, message.into(), elapsed)
    }

    pub fn unhealthy(component: &str, message: impl Into<String>, elapsed: Duration) -> Self {
        Self::with_status(component, HealthStatus::Unhealthy, message.into(), elapsed)
    }

    fn with_status(
        component: &str,
        status: HealthStatus,
        message: String,
        elapsed: Duration,
    ) -> Self {
        Self {
            component: component.to_string(),
            status,
            message: if message.is_empty() { None } else { Some(message) },
            response_time_ms: elapsed.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub checks: Vec<HealthCheck>,
    pub timestamp: u64,
    pub version: String,
}

impl HealthReport {
    pub fn new(checks: Vec<HealthCheck>, version: String) -> Self {
        let overall_status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if checks.iter().any(|c| c.status == HealthStatus::Degraded) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_secs();

        Self {
            overall_status,
            checks,
            timestamp,
            version,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.overall_status == HealthStatus::Healthy
    }

    pub fn format(&self) -> String {
        let mut output = format!(
            "{} Corpus health: {:?}\n\
             Version: {}\n\
             Checked: {}\n\n",
            self.overall_status.icon(),
            self.overall_status,
            self.version,
            chrono::DateTime::from_timestamp(self.timestamp as i64, 0)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        for check in &self.checks {
            output.push_str(&format!(
                "{} {} ({:?}) - {}ms",
                check.status.icon(),
                check.component,
                check.status,
                check.response_time_ms
            ));

            if let Some(ref msg) = check.message {
                output.push_str(&format!("\n  {}", msg));
            }

            output.push('\n');
        }

        output
    }
}

pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} in {:.3}ms",
            self.operation,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} - {} records in {:.3}ms",
            self.operation,
            count,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }

    pub fn warn_if_slow(&self, threshold: Duration) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow operation [{}]: took {:.3}ms (threshold: {}ms)",
                self.operation,
                elapsed.as_secs_f64() * 1000.0,
                threshold.as_millis()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_creation() {
        let check = HealthCheck::healthy("index:country", "249 entries", Duration::from_millis(5));
        assert_eq!(check.component, "index:country");
        assert_eq!(check.status, HealthStatus::Healthy);
        assert_eq!(check.message.as_deref(), Some("249 entries"));
        assert_eq!(check.response_time_ms, 5);
    }

    #[test]
    fn test_empty_message_is_none() {
        let check = HealthCheck::healthy("root", "", Duration::ZERO);
        assert!(check.message.is_none());
    }

    #[test]
    fn test_health_report_overall_status() {
        let checks = vec![
            HealthCheck::healthy("countries", "249 records", Duration::from_millis(10)),
            HealthCheck::degraded("translations", "missing", Duration::from_millis(1)),
        ];

        let report = HealthReport::new(checks, "0.1.0".to_string());
        assert_eq!(report.overall_status, HealthStatus::Degraded);
        assert!(!report.is_healthy());
        assert!(report.format().contains("translations"));
    }

    #[test]
    fn test_unhealthy_wins() {
        let checks = vec![
            HealthCheck::degraded("a", "x", Duration::ZERO),
            HealthCheck::unhealthy("b", "y", Duration::ZERO),
        ];
        let report = HealthReport::new(checks, "0.1.0".to_string());
        assert_eq!(report.overall_status, HealthStatus::Unhealthy);
    }

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }
}
