pub mod table;

pub const COLUMN_WIDTH: usize = 7;

pub fn format_count(v: u32) -> String {
    format!("{:>width$}", v, width = COLUMN_WIDTH)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:>width$.2}", v, width = COLUMN_WIDTH)
}

pub fn blank_cell() -> String {
    " ".repeat(COLUMN_WIDTH)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
