use crate::model::ReportRecord;
use crate::report::{COLUMN_WIDTH, blank_cell, format_count, format_f64_2};

const VERTICAL_SEPARATOR: &str = " | ";
pub const LABEL_WIDTH: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Nodes,
    Ranks,
    GlobalEfficiency,
    ParallelEfficiency,
    LoadBalance,
    CommunicationEfficiency,
    ComputationalScaling,
}

pub const EFFICIENCY_ROWS: [Row; 5] = [
    Row::GlobalEfficiency,
    Row::ParallelEfficiency,
    Row::LoadBalance,
    Row::CommunicationEfficiency,
    Row::ComputationalScaling,
];

impl Row {
    /// Indentation nests PE under GE, and LB/CE under PE.
    pub fn label(self) -> &'static str {
        match self {
            Row::Nodes => "Number of nodes                ",
            Row::Ranks => "Total number of MPI ranks      ",
            Row::GlobalEfficiency => "Global Efficiency              ",
            Row::ParallelEfficiency => "   MPI Parallel Efficiency     ",
            Row::LoadBalance => "       MPI Load Balance        ",
            Row::CommunicationEfficiency => "       Communication Efficiency",
            Row::ComputationalScaling => "   Computational Scaling       ",
        }
    }

    pub fn cell(self, record: &ReportRecord) -> String {
        let scaling = record.scaling;
        match self {
            Row::Nodes => format_count(record.raw.nodes),
            Row::Ranks => format_count(record.raw.ranks),
            Row::GlobalEfficiency => scaling
                .map(|s| format_f64_2(s.global_efficiency))
                .unwrap_or_else(blank_cell),
            Row::ParallelEfficiency => format_f64_2(record.efficiencies.parallel),
            Row::LoadBalance => format_f64_2(record.efficiencies.load_balance),
            Row::CommunicationEfficiency => format_f64_2(record.efficiencies.communication),
            Row::ComputationalScaling => scaling
                .map(|s| format_f64_2(s.computational_scaling))
                .unwrap_or_else(blank_cell),
        }
    }
}

pub fn render_table(records: &[ReportRecord]) -> String {
    let rule_len = LABEL_WIDTH
        + (COLUMN_WIDTH + VERTICAL_SEPARATOR.len()) * records.len()
        + VERTICAL_SEPARATOR.len();
    let rule = "-".repeat(rule_len);

    let mut out = String::new();
    push_line(&mut out, &rule);
    push_row(&mut out, Row::Nodes, records);
    push_line(&mut out, &rule);
    push_row(&mut out, Row::Ranks, records);
    push_line(&mut out, &rule);
    for row in EFFICIENCY_ROWS {
        push_row(&mut out, row, records);
    }
    push_line(&mut out, &rule);
    out
}

fn push_row(out: &mut String, row: Row, records: &[ReportRecord]) {
    out.push_str(row.label());
    out.push_str(VERTICAL_SEPARATOR);
    for record in records {
        out.push_str(&row.cell(record));
        out.push_str(VERTICAL_SEPARATOR);
    }
    out.push('\n');
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
