use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over a single solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Branch points visited by the backtracking search.
    pub nodes_visited: u64,
    /// Candidate words rejected, either by the consistency check, by
    /// propagation, or because the branch below them was exhausted.
    pub backtracks: u64,
    /// Calls to `revise` made by AC-3.
    pub revise_calls: u64,
    /// Words pruned from domains by `revise`.
    pub words_pruned: u64,
    /// Total time spent inside `revise`, in microseconds.
    pub revise_time_micros: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Revise Calls"),
        Cell::new(&stats.revise_calls.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Words Pruned"),
        Cell::new(&stats.words_pruned.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Revise Time (ms)"),
        Cell::new(&format!("{:.2}", stats.revise_time_micros as f64 / 1000.0)),
    ]));
    table.to_string()
}
