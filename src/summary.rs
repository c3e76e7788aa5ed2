//! Fixed backing data for the overview dashboard and the agent detail view:
//! headline metric cards, the monitored-agent list, the success breakdown,
//! windowed performance series, and the recent evaluation records. Pure
//! accessors over static tables, no derivation.

use serde::Serialize;

// ==========================================================================
// Overview dashboard
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
}

/// One card in the dashboard's headline metric strip. `change` keeps its
/// display formatting ("+12%", "-4") since card deltas mix units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub direction: ChangeDirection,
}

pub const HEADLINE_METRICS: [HeadlineMetric; 4] = [
    HeadlineMetric {
        title: "Total Agents",
        value: "24",
        change: "+3",
        direction: ChangeDirection::Positive,
    },
    HeadlineMetric {
        title: "Evaluations Today",
        value: "156",
        change: "+12%",
        direction: ChangeDirection::Positive,
    },
    HeadlineMetric {
        title: "Avg. Score",
        value: "87%",
        change: "+2.4%",
        direction: ChangeDirection::Positive,
    },
    HeadlineMetric {
        title: "Issues Detected",
        value: "8",
        change: "-4",
        direction: ChangeDirection::Positive,
    },
];

/// The dashboard's headline card strip, in render order.
pub fn headline_metrics() -> &'static [HeadlineMetric] {
    &HEADLINE_METRICS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Warning,
}

/// Per-agent card on the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentSnapshot {
    pub name: &'static str,
    pub process: &'static str,
    pub score: u32,
    pub trend: ScoreTrend,
    pub evaluations: u32,
    pub last_eval: &'static str,
    pub status: AgentStatus,
}

pub const AGENTS: [AgentSnapshot; 4] = [
    AgentSnapshot {
        name: "Document Classifier",
        process: "Invoice Processing",
        score: 94,
        trend: ScoreTrend::Up,
        evaluations: 45,
        last_eval: "2 min ago",
        status: AgentStatus::Active,
    },
    AgentSnapshot {
        name: "Data Extractor",
        process: "Employee Onboarding",
        score: 78,
        trend: ScoreTrend::Down,
        evaluations: 32,
        last_eval: "15 min ago",
        status: AgentStatus::Warning,
    },
    AgentSnapshot {
        name: "Approval Bot",
        process: "Purchase Requests",
        score: 92,
        trend: ScoreTrend::Up,
        evaluations: 28,
        last_eval: "1 hour ago",
        status: AgentStatus::Active,
    },
    AgentSnapshot {
        name: "Email Parser",
        process: "Support Tickets",
        score: 85,
        trend: ScoreTrend::Stable,
        evaluations: 51,
        last_eval: "30 min ago",
        status: AgentStatus::Active,
    },
];

pub fn agent_snapshots() -> &'static [AgentSnapshot] {
    &AGENTS
}

// ==========================================================================
// Outcome breakdown
// ==========================================================================

/// Aggregate evaluation outcomes behind the donut chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessBreakdown {
    pub passed: u32,
    pub failed: u32,
    pub pending: u32,
}

pub const BREAKDOWN: SuccessBreakdown =
    SuccessBreakdown { passed: 1176, failed: 72, pending: 12 };

impl SuccessBreakdown {
    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.pending
    }

    /// Share of the total for one slice, in percent rounded to one decimal.
    pub fn share_pct(&self, slice: u32) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        let raw = slice as f64 / self.total() as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FailureReason {
    pub reason: &'static str,
    pub count: u32,
    pub percentage: f64,
}

pub const FAILURE_REASONS: [FailureReason; 4] = [
    FailureReason { reason: "Timeout", count: 28, percentage: 38.9 },
    FailureReason { reason: "Incorrect Classification", count: 22, percentage: 30.6 },
    FailureReason { reason: "Missing Data", count: 14, percentage: 19.4 },
    FailureReason { reason: "API Error", count: 8, percentage: 11.1 },
];

// ==========================================================================
// Windowed performance series
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeRange {
    H24,
    D7,
    D30,
    D90,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [TimeRange::H24, TimeRange::D7, TimeRange::D30, TimeRange::D90];

    pub fn id(&self) -> &'static str {
        match self {
            TimeRange::H24 => "24h",
            TimeRange::D7 => "7d",
            TimeRange::D30 => "30d",
            TimeRange::D90 => "90d",
        }
    }

    pub fn from_id(id: &str) -> Option<TimeRange> {
        Self::ALL.into_iter().find(|range| range.id() == id)
    }
}

/// One point of the performance-over-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerfBucket {
    pub label: &'static str,
    pub score: u32,
    pub passed: u32,
    pub failed: u32,
}

const PERF_24H: [PerfBucket; 7] = [
    PerfBucket { label: "00:00", score: 92, passed: 12, failed: 1 },
    PerfBucket { label: "04:00", score: 94, passed: 15, failed: 0 },
    PerfBucket { label: "08:00", score: 91, passed: 22, failed: 2 },
    PerfBucket { label: "12:00", score: 95, passed: 28, failed: 1 },
    PerfBucket { label: "16:00", score: 93, passed: 25, failed: 2 },
    PerfBucket { label: "20:00", score: 94, passed: 18, failed: 1 },
    PerfBucket { label: "Now", score: 94, passed: 10, failed: 0 },
];

const PERF_7D: [PerfBucket; 7] = [
    PerfBucket { label: "Mon", score: 88, passed: 145, failed: 12 },
    PerfBucket { label: "Tue", score: 91, passed: 168, failed: 10 },
    PerfBucket { label: "Wed", score: 93, passed: 182, failed: 8 },
    PerfBucket { label: "Thu", score: 90, passed: 175, failed: 14 },
    PerfBucket { label: "Fri", score: 94, passed: 192, failed: 7 },
    PerfBucket { label: "Sat", score: 92, passed: 85, failed: 5 },
    PerfBucket { label: "Sun", score: 94, passed: 78, failed: 3 },
];

const PERF_30D: [PerfBucket; 4] = [
    PerfBucket { label: "Week 1", score: 85, passed: 620, failed: 52 },
    PerfBucket { label: "Week 2", score: 88, passed: 695, failed: 45 },
    PerfBucket { label: "Week 3", score: 91, passed: 745, failed: 38 },
    PerfBucket { label: "Week 4", score: 94, passed: 812, failed: 32 },
];

const PERF_90D: [PerfBucket; 3] = [
    PerfBucket { label: "Month 1", score: 78, passed: 2100, failed: 280 },
    PerfBucket { label: "Month 2", score: 85, passed: 2450, failed: 195 },
    PerfBucket { label: "Month 3", score: 94, passed: 2890, failed: 125 },
];

pub fn performance_series(range: TimeRange) -> &'static [PerfBucket] {
    match range {
        TimeRange::H24 => &PERF_24H,
        TimeRange::D7 => &PERF_7D,
        TimeRange::D30 => &PERF_30D,
        TimeRange::D90 => &PERF_90D,
    }
}

// ==========================================================================
// Evaluation history
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Passed,
    Failed,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub accuracy: u32,
    pub relevance: u32,
    pub completeness: u32,
}

/// One row of the evaluation history table, with its drill-down detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationRecord {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub input: &'static str,
    pub expected_output: &'static str,
    pub actual_output: &'static str,
    pub score: u32,
    pub status: RecordStatus,
    pub duration: &'static str,
    pub details: ScoreBreakdown,
}

const EVALUATION_HISTORY: [EvaluationRecord; 5] = [
    EvaluationRecord {
        id: "EVAL-1001",
        timestamp: "2024-01-15 14:32:18",
        input: "Invoice #INV-2024-001 from Acme Corp",
        expected_output: "Category: Supplier Invoice",
        actual_output: "Category: Supplier Invoice",
        score: 98,
        status: RecordStatus::Passed,
        duration: "0.8s",
        details: ScoreBreakdown { accuracy: 98, relevance: 100, completeness: 96 },
    },
    EvaluationRecord {
        id: "EVAL-1002",
        timestamp: "2024-01-15 14:28:45",
        input: "Purchase Order #PO-7842 for office supplies",
        expected_output: "Category: Purchase Order",
        actual_output: "Category: Purchase Order",
        score: 100,
        status: RecordStatus::Passed,
        duration: "1.1s",
        details: ScoreBreakdown { accuracy: 100, relevance: 100, completeness: 100 },
    },
    EvaluationRecord {
        id: "EVAL-1003",
        timestamp: "2024-01-15 14:22:10",
        input: "Employee expense report - Q4 travel",
        expected_output: "Category: Expense Report",
        actual_output: "Category: Invoice",
        score: 45,
        status: RecordStatus::Failed,
        duration: "2.3s",
        details: ScoreBreakdown { accuracy: 40, relevance: 55, completeness: 40 },
    },
    EvaluationRecord {
        id: "EVAL-1004",
        timestamp: "2024-01-15 14:18:33",
        input: "Contract renewal agreement - ABC Ltd",
        expected_output: "Category: Legal Document",
        actual_output: "Category: Legal Document",
        score: 95,
        status: RecordStatus::Passed,
        duration: "1.5s",
        details: ScoreBreakdown { accuracy: 95, relevance: 98, completeness: 92 },
    },
    EvaluationRecord {
        id: "EVAL-1005",
        timestamp: "2024-01-15 14:15:02",
        input: "Tax document processing request",
        expected_output: "Category: Tax Document",
        actual_output: "Processing...",
        score: 0,
        status: RecordStatus::Pending,
        duration: "-",
        details: ScoreBreakdown { accuracy: 0, relevance: 0, completeness: 0 },
    },
];

/// Recent evaluation records, newest first.
pub fn evaluation_history() -> &'static [EvaluationRecord] {
    &EVALUATION_HISTORY
}

pub fn records_by_status(status: RecordStatus) -> Vec<&'static EvaluationRecord> {
    EVALUATION_HISTORY.iter().filter(|r| r.status == status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total_and_shares() {
        assert_eq!(BREAKDOWN.total(), 1260);
        assert_eq!(BREAKDOWN.share_pct(BREAKDOWN.passed), 93.3);
        assert_eq!(BREAKDOWN.share_pct(BREAKDOWN.failed), 5.7);
        assert_eq!(BREAKDOWN.share_pct(BREAKDOWN.pending), 1.0);
    }

    #[test]
    fn test_failure_reason_counts_cover_most_failures() {
        let counted: u32 = FAILURE_REASONS.iter().map(|r| r.count).sum();
        assert_eq!(counted, 72, "reason counts match the failed slice");
        let pct: f64 = FAILURE_REASONS.iter().map(|r| r.percentage).sum();
        assert!((pct - 100.0).abs() < 0.1, "reason shares sum to ~100, got {}", pct);
    }

    #[test]
    fn test_time_range_round_trip_ids() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_id(range.id()), Some(range));
        }
        assert_eq!(TimeRange::from_id("1y"), None);
    }

    #[test]
    fn test_performance_series_lengths() {
        assert_eq!(performance_series(TimeRange::H24).len(), 7);
        assert_eq!(performance_series(TimeRange::D7).len(), 7);
        assert_eq!(performance_series(TimeRange::D30).len(), 4);
        assert_eq!(performance_series(TimeRange::D90).len(), 3);
    }

    #[test]
    fn test_performance_scores_within_chart_domain() {
        for range in TimeRange::ALL {
            for bucket in performance_series(range) {
                assert!(
                    (60..=100).contains(&bucket.score),
                    "{} bucket {} outside chart domain",
                    range.id(),
                    bucket.label
                );
            }
        }
    }

    #[test]
    fn test_history_records_and_filtering() {
        let history = evaluation_history();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].id, "EVAL-1001");

        assert_eq!(records_by_status(RecordStatus::Passed).len(), 3);
        assert_eq!(records_by_status(RecordStatus::Failed).len(), 1);
        let pending = records_by_status(RecordStatus::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].duration, "-");
    }

    #[test]
    fn test_headline_and_agent_tables() {
        assert_eq!(HEADLINE_METRICS.len(), 4);
        assert_eq!(HEADLINE_METRICS[2].value, "87%");
        assert_eq!(AGENTS.len(), 4);
        assert!(AGENTS.iter().any(|a| a.status == AgentStatus::Warning));
    }
}
