use prettytable::{Cell, Row, Table};

use crate::solver::batch::{BatchSummary, RunRecord};

pub fn render_runs_table(records: &[RunRecord]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Run"),
        Cell::new("Status"),
        Cell::new("Moves"),
        Cell::new("Best Conflicts"),
        Cell::new("Time (ms)"),
    ]));

    for (run, record) in records.iter().enumerate() {
        let status = if record.report.is_solved() {
            "solved"
        } else {
            "exhausted"
        };
        table.add_row(Row::new(vec![
            Cell::new(&run.to_string()),
            Cell::new(status),
            Cell::new(&record.report.moves.to_string()),
            Cell::new(&record.report.best_conflicts.to_string()),
            Cell::new(&format!("{:.2}", record.elapsed.as_secs_f64() * 1000.0)),
        ]));
    }

    table.to_string()
}

pub fn render_summary_table(summary: &BatchSummary) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Solutions"),
        Cell::new("Total Moves"),
        Cell::new("Avg Moves"),
        Cell::new("Best Conflicts"),
        Cell::new("Avg Best Conflicts"),
        Cell::new("Avg Time (s)"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&format!("{}/{}", summary.solved, summary.runs)),
        Cell::new(&summary.total_moves.to_string()),
        Cell::new(&format!("{:.2}", summary.average_moves)),
        Cell::new(&summary.best_conflicts.to_string()),
        Cell::new(&format!("{:.2}", summary.average_best_conflicts)),
        Cell::new(&format!("{:.6}", summary.average_execution_secs)),
    ]));

    table.to_string()
}
