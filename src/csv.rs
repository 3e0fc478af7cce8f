// src/csv.rs
//
// Delimited text in and out, on top of the `csv` crate. Rows are written
// flexibly so a short row never aborts an export.

use std::error::Error;
use std::io::{Read, Write};
use std::path::Path;

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::config::options::ExportFormat;
use crate::store::DataSet;

/* ---------------- Writing ---------------- */

pub fn write_rows<W: Write>(
    w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delimiter: u8,
) -> Result<(), ::csv::Error> {
    let mut out = WriterBuilder::new().delimiter(delimiter).flexible(true).from_writer(w);
    if let Some(h) = headers {
        out.write_record(h)?;
    }
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Full export text (Copy/Export).
pub fn to_export_string(ds: &DataSet, include_headers: bool, format: ExportFormat) -> String {
    let headers = ds.headers.as_deref().filter(|_| include_headers);
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_rows(&mut buf, headers, &ds.rows, format.delimiter()) {
        loge!("CSV: export string failed: {e}");
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Reading ---------------- */

pub fn parse_rows<R: Read>(r: R, delimiter: u8) -> Result<Vec<Vec<String>>, ::csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(r);
    rdr.records()
        .map(|rec| rec.map(|r| r.iter().map(str::to_owned).collect()))
        .collect()
}

pub fn read_dataset(path: &Path, delimiter: u8, has_headers: bool) -> Result<DataSet, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    let mut rows = parse_rows(file, delimiter)?;
    let headers = if has_headers && !rows.is_empty() { Some(rows.remove(0)) } else { None };
    Ok(DataSet { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_that_need_it() {
        let ds = DataSet::new(
            vec![s!("Team"), s!("Name")],
            vec![vec![s!("Brighton, Hove"), s!("\"Kaoru\" Mitoma")]],
        );
        let text = to_export_string(&ds, true, ExportFormat::Csv);
        assert_eq!(text, "Team,Name\n\"Brighton, Hove\",\"\"\"Kaoru\"\" Mitoma\"\n");
    }

    #[test]
    fn headers_can_be_left_out() {
        let ds = DataSet::new(vec![s!("A"), s!("B")], vec![vec![s!("1"), s!("2")]]);
        assert_eq!(to_export_string(&ds, false, ExportFormat::Tsv), "1\t2\n");
    }

    #[test]
    fn parse_tolerates_crlf_and_short_rows() {
        let rows = parse_rows("a,b\r\n1\r\n".as_bytes(), b',').unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1"]]);
    }
}
