use regex::Regex;

/// Finds the first `<label>: <token>` occurrence in a report, line by line.
///
/// The label is matched literally. Only the whitespace-free run following the
/// colon is returned; the rest of the line is ignored.
#[derive(Debug, Clone)]
pub struct LabelScanner {
    pattern: Regex,
}

impl LabelScanner {
    pub fn new(label: &str) -> Self {
        let pattern = Regex::new(&format!(r"{}:\s*(\S+)", regex::escape(label)))
            .expect("escaped label always forms a valid pattern");
        Self { pattern }
    }

    pub fn scan<'a>(&self, contents: &'a str) -> Option<&'a str> {
        contents.lines().find_map(|line| {
            self.pattern
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
    }
}

pub fn extract_value<'a>(contents: &'a str, label: &str) -> Option<&'a str> {
    LabelScanner::new(label).scan(contents)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/extract.rs"]
mod tests;
