use crate::model::{CatalogEntry, StorageError};
use csv::Writer;
use std::fs::File;
use std::io::Write;

pub const REPORT_HEADER: [&str; 8] = [
    "Name",
    "Published_Date",
    "Price",
    "Reviews",
    "Hours_on_Record",
    "App_Id",
    "Genre",
    "Developer",
];

/// Row-at-a-time CSV sink; the header is written on creation.
pub struct CsvReport<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl CsvReport<File> {
    pub fn create(path: &str) -> Result<Self, StorageError> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvReport<W> {
    pub fn from_writer(inner: W) -> Result<Self, StorageError> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(REPORT_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_entry(&mut self, entry: &CatalogEntry) -> Result<(), StorageError> {
        self.writer.write_record(entry.to_record())?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, StorageError> {
        self.writer
            .into_inner()
            .map_err(|e| StorageError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(genres: &str) -> CatalogEntry {
        CatalogEntry {
            name: "Alpha".into(),
            published_date: "12 Mar, 2019".into(),
            price: None,
            review_fraction: Some(0.92),
            hours_on_record: "5".into(),
            app_id: "10".into(),
            genres: genres.into(),
            developer: "Acme".into(),
        }
    }

    #[test]
    fn header_only_when_empty() {
        let report = CsvReport::from_writer(Vec::new()).unwrap();
        let out = String::from_utf8(report.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "Name,Published_Date,Price,Reviews,Hours_on_Record,App_Id,Genre,Developer\n"
        );
    }

    #[test]
    fn rows_are_quoted_when_needed() {
        let mut report = CsvReport::from_writer(Vec::new()).unwrap();
        report.write_entry(&entry("Action")).unwrap();
        report.write_entry(&entry("Action,Indie")).unwrap();
        assert_eq!(report.rows(), 2);

        let out = String::from_utf8(report.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], r#"Alpha,"12 Mar, 2019",N/A,0.92,5,10,Action,Acme"#);
        assert_eq!(
            lines[2],
            r#"Alpha,"12 Mar, 2019",N/A,0.92,5,10,"Action,Indie",Acme"#
        );
    }
}
