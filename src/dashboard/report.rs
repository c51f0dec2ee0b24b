use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::recommender::{Recommendation, RecommendationEngine};
use crate::health::{classify_all, format::format_bytes, Metric, StatusCard, StatusLevel};
use crate::metrics::MetricsSnapshot;

/// One line of the environment table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything a renderer needs for one dashboard view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Worst status across the cards
    pub overall: StatusLevel,
    pub health_score: u8,
    pub cards: Vec<StatusCard>,
    pub environment: Vec<EnvironmentRow>,
    pub recommendations: Vec<Recommendation>,
    pub snapshot: MetricsSnapshot,
}

impl DashboardReport {
    /// Classify a snapshot and assemble the report.
    pub fn build(snapshot: MetricsSnapshot) -> Self {
        let cards = classify_all(&snapshot);
        let recommendations = RecommendationEngine::generate(&snapshot, &cards);

        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            overall: Self::overall_status(&cards),
            health_score: Self::calculate_health_score(&cards),
            environment: Self::environment(&snapshot),
            cards,
            recommendations,
            snapshot,
        }
    }

    /// Worst status by severity; neutral when nothing was measured.
    pub fn overall_status(cards: &[StatusCard]) -> StatusLevel {
        cards
            .iter()
            .map(|c| c.status)
            .max_by_key(|s| s.severity())
            .unwrap_or(StatusLevel::Neutral)
    }

    /// Health score (0-100): 20 points off per critical card, 10 per warning.
    pub fn calculate_health_score(cards: &[StatusCard]) -> u8 {
        let mut score = 100u8;

        for card in cards {
            match card.status {
                StatusLevel::Critical => score = score.saturating_sub(20),
                StatusLevel::Warning => score = score.saturating_sub(10),
                StatusLevel::Good | StatusLevel::Neutral => {}
            }
        }

        score
    }

    pub fn card(&self, metric: Metric) -> Option<&StatusCard> {
        self.cards.iter().find(|c| c.metric == Some(metric))
    }

    fn environment(snapshot: &MetricsSnapshot) -> Vec<EnvironmentRow> {
        let version = |v: &str| {
            if v.is_empty() {
                "Unknown".to_string()
            } else {
                v.to_string()
            }
        };

        let memory_limit = if snapshot.memory_limit_bytes() == 0 {
            "Unknown".to_string()
        } else {
            format_bytes(snapshot.memory_limit_bytes())
        };

        vec![
            EnvironmentRow {
                label: "PHP Version",
                value: version(snapshot.php_version()),
            },
            EnvironmentRow {
                label: "MySQL Version",
                value: version(snapshot.mysql_version()),
            },
            EnvironmentRow {
                label: "WordPress Version",
                value: version(snapshot.wp_version()),
            },
            EnvironmentRow {
                label: "Memory Limit",
                value: memory_limit,
            },
            EnvironmentRow {
                label: "Object Cache",
                value: if snapshot.object_cache_active() {
                    "Active".to_string()
                } else {
                    "Not active".to_string()
                },
            },
            EnvironmentRow {
                label: "Query Log",
                value: if snapshot.query_log_enabled() {
                    "Enabled".to_string()
                } else {
                    "Disabled".to_string()
                },
            },
        ]
    }
}
