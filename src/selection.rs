//! Comparison selection model.
//!
//! Holds one insertion-ordered selection per comparison mode and derives the
//! shapes the comparison page renders: the metrics table, bar and radar chart
//! series, and the per-period time series. All projections are pure functions
//! of the current selection plus the static catalog; ids missing from the
//! backing dataset are silently excluded.

use serde::Serialize;

use crate::catalog::{self, EntityMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMode {
    Taxonomies,
    UseCases,
}

/// Row labels of the metrics comparison table, in render order.
pub const TABLE_METRICS: [&str; 6] = [
    "Overall Score",
    "IDP Accuracy",
    "Agent Accuracy",
    "Assistant Score",
    "SLA Improvement",
    "Evaluations",
];

/// Axis categories of the radar projection, in render order.
pub const RADAR_METRICS: [&str; 5] = ["IDP", "Agent", "Assistant", "SLA", "Overall"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub entity_id: String,
    pub value: String,
    /// Populated on the overall-score row only.
    pub trend: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub metric: &'static str,
    pub cells: Vec<TableCell>,
}

/// Header-plus-rows table shape. An empty selection keeps every metric row
/// but carries zero columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// One keyed numeric field of a chart point. Keys are entity names for radar
/// and time-series points, metric names for bar points; name collisions
/// within one dataset are not guarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesField {
    pub key: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub fields: Vec<SeriesField>,
}

/// Selection state for the comparison page. Both mode's selections persist
/// independently; switching the mode only changes which one the projections
/// read.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    mode: ComparisonMode,
    taxonomies: Vec<String>,
    use_cases: Vec<String>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    /// Fresh model with the page's default preselection: two taxonomies and
    /// two use cases.
    pub fn new() -> Self {
        Self {
            mode: ComparisonMode::Taxonomies,
            taxonomies: vec!["finance".to_string(), "hr".to_string()],
            use_cases: vec!["invoice-processing".to_string(), "candidate-screening".to_string()],
        }
    }

    /// Model with nothing selected, for callers that build selections up from
    /// scratch.
    pub fn empty() -> Self {
        Self { mode: ComparisonMode::Taxonomies, taxonomies: Vec::new(), use_cases: Vec::new() }
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Switches the active selection; mutates neither list.
    pub fn set_mode(&mut self, mode: ComparisonMode) {
        self.mode = mode;
    }

    /// Flips membership of `id` in `mode`'s selection. Insertion appends (the
    /// display order for columns and legend coloring); removal compacts.
    /// Toggling twice in succession restores the prior selection exactly.
    pub fn toggle(&mut self, mode: ComparisonMode, id: &str) {
        let list = self.list_mut(mode);
        if let Some(pos) = list.iter().position(|existing| existing == id) {
            list.remove(pos);
        } else {
            list.push(id.to_string());
        }
    }

    pub fn selected(&self, mode: ComparisonMode) -> &[String] {
        match mode {
            ComparisonMode::Taxonomies => &self.taxonomies,
            ComparisonMode::UseCases => &self.use_cases,
        }
    }

    fn list_mut(&mut self, mode: ComparisonMode) -> &mut Vec<String> {
        match mode {
            ComparisonMode::Taxonomies => &mut self.taxonomies,
            ComparisonMode::UseCases => &mut self.use_cases,
        }
    }

    /// Active selection resolved against the backing dataset, in selection
    /// order. Unknown ids drop out here, which keeps every projection a
    /// no-op filter for stale selections.
    fn active_entities(&self) -> Vec<&'static EntityMetrics> {
        let (ids, dataset): (&[String], &[EntityMetrics]) = match self.mode {
            ComparisonMode::Taxonomies => (&self.taxonomies, &catalog::TAXONOMY_METRICS),
            ComparisonMode::UseCases => (&self.use_cases, &catalog::USE_CASE_METRICS),
        };
        ids.iter().filter_map(|id| dataset.iter().find(|e| e.id == id.as_str())).collect()
    }

    /// Metrics table: one row per [`TABLE_METRICS`] label, one column per
    /// selected entity.
    pub fn project_table(&self) -> ComparisonTable {
        let entities = self.active_entities();
        let columns = entities.iter().map(|e| e.name.to_string()).collect();

        let rows = vec![
            metric_row("Overall Score", &entities, |e| TableCell {
                entity_id: e.id.to_string(),
                value: format!("{}%", e.score),
                trend: Some(e.trend),
            }),
            metric_row("IDP Accuracy", &entities, |e| pct_cell(e.id, e.idp_accuracy)),
            metric_row("Agent Accuracy", &entities, |e| pct_cell(e.id, e.agent_accuracy)),
            metric_row("Assistant Score", &entities, |e| pct_cell(e.id, e.assistant_score)),
            metric_row("SLA Improvement", &entities, |e| pct_cell(e.id, e.sla_improvement)),
            metric_row("Evaluations", &entities, |e| TableCell {
                entity_id: e.id.to_string(),
                value: format_count(e.evaluations),
                trend: None,
            }),
        ];

        ComparisonTable { columns, rows }
    }

    /// Bar-chart series: one point per selected entity, with the four score
    /// breakdown fields.
    pub fn project_bar_series(&self) -> Vec<SeriesPoint> {
        self.active_entities()
            .into_iter()
            .map(|e| SeriesPoint {
                label: e.name.to_string(),
                fields: vec![
                    field("Overall Score", e.score),
                    field("IDP Accuracy", e.idp_accuracy),
                    field("Agent Accuracy", e.agent_accuracy),
                    field("Assistant Score", e.assistant_score),
                ],
            })
            .collect()
    }

    /// Radar-chart series: one point per [`RADAR_METRICS`] category, with one
    /// field per selected entity keyed by entity name.
    pub fn project_radar_series(&self) -> Vec<SeriesPoint> {
        let entities = self.active_entities();
        RADAR_METRICS
            .iter()
            .map(|&metric| SeriesPoint {
                label: metric.to_string(),
                fields: entities
                    .iter()
                    .map(|e| {
                        let value = match metric {
                            "IDP" => e.idp_accuracy,
                            "Agent" => e.agent_accuracy,
                            "Assistant" => e.assistant_score,
                            "SLA" => e.sla_improvement,
                            _ => e.score,
                        };
                        field(e.name, value)
                    })
                    .collect(),
            })
            .collect()
    }

    /// Time series: one point per history period, carrying the period score
    /// for every selected entity that has tracked history.
    pub fn project_time_series(&self) -> Vec<SeriesPoint> {
        let tracked: Vec<_> = self
            .active_entities()
            .into_iter()
            .filter(|e| !catalog::score_history(e.id).is_empty())
            .collect();

        catalog::HISTORY_PERIODS
            .iter()
            .enumerate()
            .map(|(period_idx, period)| SeriesPoint {
                label: period.to_string(),
                fields: tracked
                    .iter()
                    .map(|e| field(e.name, catalog::score_history(e.id)[period_idx]))
                    .collect(),
            })
            .collect()
    }
}

fn metric_row(
    metric: &'static str,
    entities: &[&'static EntityMetrics],
    cell: impl Fn(&EntityMetrics) -> TableCell,
) -> TableRow {
    TableRow { metric, cells: entities.iter().map(|e| cell(e)).collect() }
}

fn pct_cell(entity_id: &str, value: u32) -> TableCell {
    TableCell { entity_id: entity_id.to_string(), value: format!("{}%", value), trend: None }
}

fn field(key: &str, value: u32) -> SeriesField {
    SeriesField { key: key.to_string(), value }
}

/// Grouped-thousands rendering for evaluation counts ("1,240").
fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Selection mechanics
    // ==========================================================================

    #[test]
    fn test_defaults_preselect_two_per_mode() {
        let model = SelectionModel::new();
        assert_eq!(model.selected(ComparisonMode::Taxonomies), ["finance", "hr"]);
        assert_eq!(
            model.selected(ComparisonMode::UseCases),
            ["invoice-processing", "candidate-screening"]
        );
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut model = SelectionModel::new();
        let before = model.selected(ComparisonMode::Taxonomies).to_vec();

        model.toggle(ComparisonMode::Taxonomies, "legal");
        assert_eq!(model.selected(ComparisonMode::Taxonomies), ["finance", "hr", "legal"]);
        model.toggle(ComparisonMode::Taxonomies, "legal");
        assert_eq!(model.selected(ComparisonMode::Taxonomies), before.as_slice());

        // Removing an existing member and re-adding appends at the end.
        model.toggle(ComparisonMode::Taxonomies, "finance");
        model.toggle(ComparisonMode::Taxonomies, "finance");
        assert_eq!(model.selected(ComparisonMode::Taxonomies), ["hr", "finance"]);
    }

    #[test]
    fn test_mode_switch_keeps_both_selections() {
        let mut model = SelectionModel::new();
        model.toggle(ComparisonMode::Taxonomies, "it");
        model.set_mode(ComparisonMode::UseCases);
        model.toggle(ComparisonMode::UseCases, "ticket-resolution");
        model.set_mode(ComparisonMode::Taxonomies);

        assert_eq!(model.selected(ComparisonMode::Taxonomies), ["finance", "hr", "it"]);
        assert_eq!(
            model.selected(ComparisonMode::UseCases),
            ["invoice-processing", "candidate-screening", "ticket-resolution"]
        );
    }

    #[test]
    fn test_no_selection_size_bound() {
        let mut model = SelectionModel::empty();
        for entity in &catalog::TAXONOMY_METRICS {
            model.toggle(ComparisonMode::Taxonomies, entity.id);
        }
        assert_eq!(model.selected(ComparisonMode::Taxonomies).len(), 5);
        assert_eq!(model.project_table().columns.len(), 5);
    }

    // ==========================================================================
    // Table projection
    // ==========================================================================

    #[test]
    fn test_table_rows_and_columns() {
        let model = SelectionModel::new();
        let table = model.project_table();

        assert_eq!(table.columns, ["Finance", "Human Resources"]);
        let labels: Vec<_> = table.rows.iter().map(|r| r.metric).collect();
        assert_eq!(labels, TABLE_METRICS);

        let overall = &table.rows[0];
        assert_eq!(overall.cells[0].value, "92%");
        assert_eq!(overall.cells[0].trend, Some(3.2));
        let evaluations = &table.rows[5];
        assert_eq!(evaluations.cells[0].value, "1,240");
        assert_eq!(evaluations.cells[0].trend, None);
    }

    #[test]
    fn test_empty_selection_yields_header_only_table() {
        let model = SelectionModel::empty();
        let table = model.project_table();
        assert!(table.columns.is_empty());
        assert_eq!(table.rows.len(), TABLE_METRICS.len());
        assert!(table.rows.iter().all(|r| r.cells.is_empty()));
    }

    #[test]
    fn test_unknown_id_excluded_from_projections() {
        let mut model = SelectionModel::new();
        model.toggle(ComparisonMode::Taxonomies, "deleted-taxonomy");
        assert_eq!(model.selected(ComparisonMode::Taxonomies).len(), 3);

        let table = model.project_table();
        assert_eq!(table.columns, ["Finance", "Human Resources"]);
        assert_eq!(model.project_bar_series().len(), 2);
        assert!(model
            .project_radar_series()
            .iter()
            .all(|point| point.fields.len() == 2));
    }

    #[test]
    fn test_columns_follow_selection_order() {
        let mut model = SelectionModel::empty();
        model.toggle(ComparisonMode::Taxonomies, "legal");
        model.toggle(ComparisonMode::Taxonomies, "finance");
        assert_eq!(model.project_table().columns, ["Legal", "Finance"]);
    }

    // ==========================================================================
    // Chart projections
    // ==========================================================================

    #[test]
    fn test_bar_series_shape() {
        let model = SelectionModel::new();
        let series = model.project_bar_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Finance");
        let keys: Vec<_> = series[0].fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["Overall Score", "IDP Accuracy", "Agent Accuracy", "Assistant Score"]);
        assert_eq!(series[0].fields[0].value, 92);
    }

    #[test]
    fn test_radar_series_keys_are_entity_names() {
        let model = SelectionModel::new();
        let series = model.project_radar_series();
        assert_eq!(series.len(), RADAR_METRICS.len());

        let idp = &series[0];
        assert_eq!(idp.label, "IDP");
        assert_eq!(idp.fields[0].key, "Finance");
        assert_eq!(idp.fields[0].value, 94);
        assert_eq!(idp.fields[1].key, "Human Resources");
        assert_eq!(idp.fields[1].value, 89);

        let overall = series.last().unwrap();
        assert_eq!(overall.label, "Overall");
        assert_eq!(overall.fields[0].value, 92);
    }

    #[test]
    fn test_time_series_tracks_selected_entities() {
        let mut model = SelectionModel::new();
        model.set_mode(ComparisonMode::UseCases);
        let series = model.project_time_series();

        assert_eq!(series.len(), catalog::HISTORY_PERIODS.len());
        assert_eq!(series[0].label, "Mar");
        assert_eq!(series[0].fields[0].key, "Invoice Processing");
        assert_eq!(series[0].fields[0].value, 89);
        assert_eq!(series.last().unwrap().fields[0].value, 94);
    }

    #[test]
    fn test_time_series_skips_entities_without_history() {
        let mut model = SelectionModel::empty();
        model.toggle(ComparisonMode::Taxonomies, "finance");
        model.toggle(ComparisonMode::Taxonomies, "ghost");
        let series = model.project_time_series();
        assert!(series.iter().all(|point| point.fields.len() == 1));
    }
}
