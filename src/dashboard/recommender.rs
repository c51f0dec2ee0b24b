use std::fmt;

use serde::Serialize;

use crate::health::format::{format_bytes, plural};
use crate::health::{Metric, StatusCard, StatusLevel};
use crate::metrics::MetricsSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub metric: Metric,
    pub issue: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Recommendations for the given cards, highest priority first.
    pub fn generate(snapshot: &MetricsSnapshot, cards: &[StatusCard]) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = cards
            .iter()
            .filter(|card| card.status.needs_attention())
            .filter_map(|card| Self::card_to_recommendation(card, snapshot))
            .collect();

        recommendations.extend(Self::proactive_recommendations(snapshot, cards));

        // Stable: equal priorities keep card order
        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
        recommendations
    }

    fn card_to_recommendation(card: &StatusCard, snapshot: &MetricsSnapshot) -> Option<Recommendation> {
        let critical = card.status == StatusLevel::Critical;

        match card.metric? {
            Metric::QueryCount => Some(Recommendation {
                priority: if critical { Priority::High } else { Priority::Medium },
                metric: Metric::QueryCount,
                issue: format!("{} database queries on this page", snapshot.query_count()),
                action: "Cache repeated lookups with transients and audit plugins that query on every page load".to_string(),
            }),
            Metric::MemoryUsage => Some(Self::recommend_memory(snapshot, critical)),
            Metric::SlowQueries => Some(Self::recommend_slow_queries(snapshot, critical)),
            Metric::AutoloadSize => Some(Recommendation {
                priority: if critical { Priority::High } else { Priority::Medium },
                metric: Metric::AutoloadSize,
                issue: format!(
                    "{} of autoloaded options loaded on every request",
                    format_bytes(snapshot.autoload_size_bytes())
                ),
                action: "Disable autoload for large options not needed on every request and delete options left by removed plugins".to_string(),
            }),
            Metric::ObjectCache => None,
        }
    }

    fn recommend_memory(snapshot: &MetricsSnapshot, critical: bool) -> Recommendation {
        Recommendation {
            priority: if critical { Priority::Critical } else { Priority::Medium },
            metric: Metric::MemoryUsage,
            issue: format!(
                "Peak memory at {:.1}% of the {} limit",
                snapshot.memory_percent(),
                format_bytes(snapshot.memory_limit_bytes())
            ),
            action: "Raise WP_MEMORY_LIMIT or deactivate memory-heavy plugins".to_string(),
        }
    }

    fn recommend_slow_queries(snapshot: &MetricsSnapshot, critical: bool) -> Recommendation {
        let slowest_ms = snapshot
            .slow_queries()
            .first()
            .map(|q| q.duration_ms())
            .unwrap_or(0.0);

        let count = snapshot.slow_query_count();
        Recommendation {
            priority: if critical { Priority::High } else { Priority::Medium },
            metric: Metric::SlowQueries,
            issue: format!(
                "{} slow {}, slowest took {:.0}ms",
                count,
                plural(count, "query", "queries"),
                slowest_ms
            ),
            action: "Add indexes for the slowest queries or cache their results".to_string(),
        }
    }

    fn proactive_recommendations(snapshot: &MetricsSnapshot, cards: &[StatusCard]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let queries_need_attention = cards
            .iter()
            .any(|c| c.metric == Some(Metric::QueryCount) && c.status.needs_attention());

        if !snapshot.object_cache_active() && queries_need_attention {
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                metric: Metric::ObjectCache,
                issue: "No persistent object cache while query count is elevated".to_string(),
                action: "Install a persistent object cache backend such as Redis or Memcached".to_string(),
            });
        }

        if !snapshot.query_log_enabled() {
            recommendations.push(Recommendation {
                priority: Priority::Low,
                metric: Metric::SlowQueries,
                issue: "Slow queries are not being tracked".to_string(),
                action: "Define SAVEQUERIES temporarily to record query timings".to_string(),
            });
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::classify_all;
    use crate::metrics::SlowQueryRecord;

    fn generate(snapshot: &MetricsSnapshot) -> Vec<Recommendation> {
        RecommendationEngine::generate(snapshot, &classify_all(snapshot))
    }

    #[test]
    fn test_healthy_site_has_no_recommendations() {
        let snapshot = MetricsSnapshot::default()
            .with_query_count(20)
            .with_memory(32, 256)
            .with_query_log(true)
            .with_object_cache(true)
            .with_autoload_size(100 * 1024);

        assert!(generate(&snapshot).is_empty());
    }

    #[test]
    fn test_sorted_by_priority() {
        let snapshot = MetricsSnapshot::default()
            .with_query_count(150)
            .with_memory(90, 100)
            .with_autoload_size(900 * 1024);

        let recs = generate(&snapshot);
        let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();

        assert_eq!(
            priorities,
            vec![
                Priority::Critical, // memory
                Priority::High,     // autoload
                Priority::Medium,   // query count
                Priority::Medium,   // object cache
                Priority::Low,      // query log
            ]
        );
        assert_eq!(recs[0].metric, Metric::MemoryUsage);
        assert_eq!(recs[2].metric, Metric::QueryCount);
        assert_eq!(recs[3].metric, Metric::ObjectCache);
    }

    #[test]
    fn test_slow_query_issue_mentions_slowest() {
        let snapshot = MetricsSnapshot::default()
            .with_query_log(true)
            .with_object_cache(true)
            .with_slow_queries(vec![
                SlowQueryRecord::new("SELECT a", 1.25, "x"),
                SlowQueryRecord::new("SELECT b", 0.2, "y"),
            ]);

        let recs = generate(&snapshot);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].issue, "2 slow queries, slowest took 1250ms");
    }

    #[test]
    fn test_single_slow_query_issue() {
        let snapshot = MetricsSnapshot::default()
            .with_query_log(true)
            .with_object_cache(true)
            .with_slow_queries(vec![SlowQueryRecord::new("SELECT a", 0.25, "x")]);

        let recs = generate(&snapshot);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].issue, "1 slow query, slowest took 250ms");
    }

    #[test]
    fn test_no_object_cache_hint_when_queries_fine() {
        let snapshot = MetricsSnapshot::default()
            .with_query_count(40)
            .with_query_log(true);

        assert!(generate(&snapshot).is_empty());
    }
}
