// src/file.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::consts::{STAMP_FORMAT, STATS_STEM};
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename_part;
use crate::csv::write_rows;
use crate::store::DataSet;

/// `"<league> - player_stats - <MM-DD_HHMM>.<ext>"`
pub fn stats_file_name(league: &str, now: &NaiveDateTime, ext: &str) -> String {
    format!(
        "{} - {STATS_STEM} - {}.{ext}",
        sanitize_filename_part(league),
        now.format(STAMP_FORMAT)
    )
}

/// Write the dataset once, honouring the header policy and delimiter.
pub fn write_dataset(path: &Path, ds: &DataSet, export: &ExportOptions) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let headers = ds.headers.as_deref().filter(|_| export.include_headers);
    let file = fs::File::create(path)?; // truncate/overwrite
    write_rows(file, headers, &ds.rows, export.format.delimiter())?;
    logf!("File: wrote {} rows to {}", ds.row_count(), path.display());
    Ok(())
}

/// Timestamped export into `export.out_dir`. Returns the path written.
pub fn save_player_stats(
    ds: &DataSet,
    league: &str,
    export: &ExportOptions,
    now: &NaiveDateTime,
) -> Result<PathBuf, Box<dyn Error>> {
    let dir = normalize_dir_path(&export.out_dir.to_string_lossy());
    ensure_directory(&dir)?;
    let path = dir.join(stats_file_name(league, now, export.format.ext()));
    write_dataset(&path, ds, export)?;
    Ok(path)
}

/// GUI path box: empty → default name in cwd, a directory (or trailing
/// separator) → default name inside it, anything else is taken as the file.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn Error>> {
    let user_o = user_o.trim();
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = normalize_dir_path(user_o);
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, mo, d).unwrap().and_hms_opt(h, mi, 7).unwrap()
    }

    #[test]
    fn file_name_is_zero_padded() {
        assert_eq!(
            stats_file_name("Premier League", &at(3, 7, 9, 5), "csv"),
            "Premier League - player_stats - 03-07_0905.csv"
        );
        assert_eq!(
            stats_file_name("UCL", &at(11, 23, 18, 42), "tsv"),
            "UCL - player_stats - 11-23_1842.tsv"
        );
    }

    #[test]
    fn directory_hints() {
        assert!(looks_like_dir_hint("out/"));
        assert!(looks_like_dir_hint("out\\"));
        assert!(!looks_like_dir_hint("out/stats.csv"));
    }

    #[test]
    fn resolve_out_path_inside_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let d = dir.path().to_string_lossy().into_owned();
        let p = resolve_out_path(&d, "x.csv").unwrap();
        assert_eq!(p, dir.path().join("x.csv"));
        assert_eq!(resolve_out_path("", "x.csv").unwrap(), PathBuf::from("x.csv"));
    }

    #[test]
    fn ensure_directory_refuses_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("f");
        fs::write(&f, "x").unwrap();
        assert!(ensure_directory(&f).is_err());
        ensure_directory(&dir.path().join("a/b")).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }
}
