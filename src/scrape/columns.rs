// src/scrape/columns.rs
//
// Column Mapping: ordered column specs plus one value sequence per column.
// Values only ever arrive a whole page at a time, so the sequences can never
// drift apart in length.

use super::ScrapeError;
use crate::store::DataSet;

/// How a column's value is read from its table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellSource {
    /// The cell's `title` attribute (text truncated on screen).
    Title,
    /// Inner markup of the cell's styled child element.
    Nested,
    /// The cell's own inner content.
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    /// 1-based `td` index within a row.
    pub cell: usize,
    pub source: CellSource,
}

/// One page of values, column-major, in mapping order.
pub type PageColumns = Vec<Vec<String>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMapping {
    specs: Vec<ColumnSpec>,
    values: Vec<Vec<String>>,
}

impl ColumnMapping {
    pub fn new(specs: Vec<ColumnSpec>) -> Self {
        let values = vec![Vec::new(); specs.len()];
        Self { specs, values }
    }

    pub fn specs(&self) -> &[ColumnSpec] { &self.specs }

    pub fn names(&self) -> Vec<String> {
        self.specs.iter().map(|s| s.name.clone()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Values of one column, for inspection.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let i = self.specs.iter().position(|s| s.name == name)?;
        Some(&self.values[i])
    }

    /// Append one page. The page must have one sequence per column, all the
    /// same length; otherwise nothing is appended.
    pub fn push_page(&mut self, page: u32, columns: PageColumns) -> Result<usize, ScrapeError> {
        if columns.len() != self.specs.len() {
            return Err(ScrapeError::RaggedPage {
                page,
                column: s!("<column count>"),
                got: columns.len(),
                expected: self.specs.len(),
            });
        }
        let expected = columns.first().map_or(0, Vec::len);
        if let Some((spec, col)) = self.specs.iter().zip(&columns).find(|(_, c)| c.len() != expected) {
            return Err(ScrapeError::RaggedPage {
                page,
                column: spec.name.clone(),
                got: col.len(),
                expected,
            });
        }

        for (dst, src) in self.values.iter_mut().zip(columns) {
            dst.extend(src);
        }
        Ok(expected)
    }

    /// Row-major dataset, headers in discovery order.
    pub fn into_dataset(self) -> DataSet {
        let n = self.row_count();
        let headers = self.specs.into_iter().map(|s| s.name).collect();
        let mut rows: Vec<Vec<String>> = (0..n).map(|_| Vec::with_capacity(self.values.len())).collect();
        for col in self.values {
            for (row, v) in rows.iter_mut().zip(col) {
                row.push(v);
            }
        }
        DataSet::new(headers, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> ColumnMapping {
        ColumnMapping::new(vec![
            ColumnSpec { name: s!("Team"), cell: 2, source: CellSource::Title },
            ColumnSpec { name: s!("Name"), cell: 3, source: CellSource::Title },
            ColumnSpec { name: s!("Goals"), cell: 4, source: CellSource::Content },
        ])
    }

    fn col(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn pages_append_in_order() {
        let mut m = mapping();
        m.push_page(1, vec![col(&["A", "B"]), col(&["a", "b"]), col(&["1", "2"])]).unwrap();
        m.push_page(2, vec![col(&["C"]), col(&["c"]), col(&["3"])]).unwrap();
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.get("Goals").unwrap(), col(&["1", "2", "3"]).as_slice());

        let ds = m.into_dataset();
        assert_eq!(ds.headers, Some(col(&["Team", "Name", "Goals"])));
        assert_eq!(ds.rows[2], col(&["C", "c", "3"]));
    }

    #[test]
    fn ragged_page_is_rejected_whole() {
        let mut m = mapping();
        m.push_page(1, vec![col(&["A"]), col(&["a"]), col(&["1"])]).unwrap();
        let before = m.clone();

        let err = m.push_page(2, vec![col(&["B", "C"]), col(&["b", "c"]), col(&["2"])]).unwrap_err();
        assert!(matches!(err, ScrapeError::RaggedPage { page: 2, got: 1, expected: 2, .. }));
        assert_eq!(m, before);

        assert!(m.push_page(3, vec![col(&["B"]), col(&["b"])]).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn empty_page_is_fine() {
        let mut m = mapping();
        assert_eq!(m.push_page(1, vec![vec![], vec![], vec![]]).unwrap(), 0);
        assert!(m.into_dataset().rows.is_empty());
    }
}
