use crate::dashboard::NamedCoordinate;
use crate::Result;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

static SHEET_NAME: &str = "Coordenadas";
static HEADER: [&str; 3] = ["Nome", "Latitude", "Longitude"];

pub static EXPORT_FILE_NAME: &str = "coordenadas.xlsx";

/// Serializes the coordinate list to a single-sheet spreadsheet with a
/// fixed header row, returned as the file's bytes.
pub fn export_xlsx(coordinates: &[NamedCoordinate]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    for (row, coordinate) in coordinates.iter().enumerate() {
        let row = row as u32 + 1;
        worksheet.write_string(row, 0, &coordinate.name)?;
        worksheet.write_number(row, 1, coordinate.lat)?;
        worksheet.write_number(row, 2, coordinate.lon)?;
    }

    let bytes = workbook.save_to_buffer()?;

    info!(rows = coordinates.len(), "Exported coordinate list");

    Ok(bytes)
}

pub fn export_file(coordinates: &[NamedCoordinate], path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, export_xlsx(coordinates)?)?;
    Ok(())
}
