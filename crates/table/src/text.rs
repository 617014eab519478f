//! Text rendering of tables.

use crate::table::Table;
use alloc::string::String;
use core::fmt;

impl Table {
    /// Renders the table as text: a header line with the bindings joined by
    /// `sep`, then one line per row. Missing cells render as `<NULL>`.
    pub fn to_text(&self, sep: &str) -> String {
        let mut out = self.bindings().join(sep);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.to_text_line(self.bindings(), sep));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text("\t"))
    }
}
