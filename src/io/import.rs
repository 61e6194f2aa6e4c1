use crate::coords::LatLng;
use crate::marker::MarkerId;
use crate::view::MapView;
use crate::{Error, Result};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

static DEFAULT_NAME: &str = "No Name";

#[derive(Clone, Debug, PartialEq)]
pub struct ImportedRow {
    pub name: String,
    pub position: LatLng,
}

/// Dispatches on the file extension: `.csv` as delimited text with a
/// header row, `.xlsx` as a binary spreadsheet (first sheet only).
pub fn import_bytes(file_name: &str, bytes: &[u8]) -> Result<Vec<ImportedRow>> {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".csv") {
        import_csv(bytes)
    } else if lower.ends_with(".xlsx") {
        import_xlsx(bytes)
    } else {
        Err(Error::InvalidInput(format!(
            "Unsupported file type: {file_name}"
        )))
    }
}

pub fn import_file(path: impl AsRef<Path>) -> Result<Vec<ImportedRow>> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .unwrap_or_default()
        .to_owned();
    let bytes = std::fs::read(path)?;
    import_bytes(&file_name, &bytes)
}

/// Replaces the non-self markers with one marker per imported row.
pub fn apply_import(view: &mut MapView, rows: &[ImportedRow]) -> Vec<MarkerId> {
    view.markers.clear_non_self();
    let ids = rows
        .iter()
        .map(|it| view.markers.add(it.position, it.name.clone()))
        .collect();
    info!(markers = rows.len(), "Imported coordinates");
    ids
}

fn import_csv(bytes: &[u8]) -> Result<Vec<ImportedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let Some(columns) = Columns::find(headers.iter()) else {
        warn!("No latitude/longitude columns in header row");
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = columns
            .name
            .and_then(|it| record.get(it))
            .unwrap_or_default();
        let lat = record.get(columns.lat).and_then(parse_f64);
        let lon = record.get(columns.lon).and_then(parse_f64);
        if let Some(row) = imported_row(name, lat, lon) {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn import_xlsx(bytes: &[u8]) -> Result<Vec<ImportedRow>> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range?;

    let mut sheet_rows = range.rows();
    let Some(header) = sheet_rows.next() else {
        return Ok(Vec::new());
    };
    let Some(columns) = Columns::find(header.iter().map(cell_string)) else {
        warn!("No latitude/longitude columns in header row");
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let name = columns
            .name
            .and_then(|it| sheet_row.get(it))
            .map(cell_string)
            .unwrap_or_default();
        let lat = sheet_row.get(columns.lat).and_then(cell_f64);
        let lon = sheet_row.get(columns.lon).and_then(cell_f64);
        if let Some(row) = imported_row(&name, lat, lon) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Header columns by position. Matching is case-insensitive; `nome`
/// counts as the label column so exported files re-import cleanly.
struct Columns {
    name: Option<usize>,
    lat: usize,
    lon: usize,
}

impl Columns {
    fn find<S: AsRef<str>>(header: impl Iterator<Item = S>) -> Option<Columns> {
        let mut name = None;
        let mut lat = None;
        let mut lon = None;
        for (i, cell) in header.enumerate() {
            let cell = cell.as_ref().trim();
            if cell.eq_ignore_ascii_case("latitude") {
                lat.get_or_insert(i);
            } else if cell.eq_ignore_ascii_case("longitude") {
                lon.get_or_insert(i);
            } else if cell.eq_ignore_ascii_case("name") || cell.eq_ignore_ascii_case("nome") {
                name.get_or_insert(i);
            }
        }
        Some(Columns {
            name,
            lat: lat?,
            lon: lon?,
        })
    }
}

/// A row survives only if both coordinates parse; everything else is
/// dropped with a debug log, never reported.
fn imported_row(name: &str, lat: Option<f64>, lon: Option<f64>) -> Option<ImportedRow> {
    let (Some(lat), Some(lon)) = (lat, lon) else {
        debug!(name, "Skipping row with non-numeric coordinates");
        return None;
    };
    let name = name.trim();
    let name = if name.is_empty() { DEFAULT_NAME } else { name };
    Some(ImportedRow {
        name: name.to_owned(),
        position: LatLng::new(lat, lon),
    })
}

fn parse_f64(str: &str) -> Option<f64> {
    str.trim().parse().ok()
}

fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(float) => Some(*float),
        Data::Int(int) => Some(*int as f64),
        Data::String(str) => parse_f64(str),
        _ => None,
    }
}

fn cell_string(cell: &Data) -> String {
    match cell {
        Data::String(str) => str.trim().to_owned(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::mock_view;

    #[test]
    fn csv_rows_with_bad_coordinates_are_skipped() {
        let csv = "name,latitude,longitude\n\
                   New York,40.7128,-74.0060\n\
                   Broken,abc,-74.0\n\
                   Los Angeles,34.0522,-118.2437\n\
                   Short,1.0\n";
        let rows = import_bytes("cities.csv", csv.as_bytes()).unwrap();
        assert_eq!(2, rows.len());
        assert_eq!("New York", rows[0].name);
        assert_eq!(LatLng::new(34.0522, -118.2437), rows[1].position);
    }

    #[test]
    fn csv_missing_name_defaults() {
        let csv = "latitude,longitude,name\n1.0,2.0,\n3.0,4.0,Somewhere\n";
        let rows = import_bytes("points.csv", csv.as_bytes()).unwrap();
        assert_eq!("No Name", rows[0].name);
        assert_eq!("Somewhere", rows[1].name);
    }

    #[test]
    fn csv_without_coordinate_columns_imports_nothing() {
        let csv = "foo,bar\n1,2\n";
        let rows = import_bytes("odd.csv", csv.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn header_matching_is_case_insensitive() {
        let csv = "Nome,Latitude,Longitude\nNew York,40.7128,-74.0060\n";
        let rows = import_bytes("export.csv", csv.as_bytes()).unwrap();
        assert_eq!(1, rows.len());
        assert_eq!("New York", rows[0].name);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let res = import_bytes("notes.txt", b"latitude,longitude\n1,2\n");
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn apply_import_replaces_non_self_markers() {
        let mut view = mock_view();
        view.markers.ensure_self(LatLng::new(0.0, 0.0), "You are here");
        view.markers.add(LatLng::new(9.0, 9.0), "stale");
        let rows = vec![
            ImportedRow {
                name: "a".into(),
                position: LatLng::new(1.0, 1.0),
            },
            ImportedRow {
                name: "b".into(),
                position: LatLng::new(2.0, 2.0),
            },
        ];
        let ids = apply_import(&mut view, &rows);
        assert_eq!(2, ids.len());
        assert_eq!(3, view.markers.len());
        assert!(view.markers.self_marker().is_some());
        assert_eq!("a", view.markers.get(ids[0]).unwrap().label);
    }
}
