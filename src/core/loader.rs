//! People ingestion from CSV text.
//!
//! The first record must be the `SSN,LAST,FIRST,YEAR` header (any case,
//! spaces around fields allowed, extra trailing columns ignored). A wrong
//! header aborts the load. Every other bad line is reported to the load
//! listener with its 1-based line number and skipped.
//!
//! Fields are split on commas only: a `"` is an ordinary character, so a
//! stray quote can never swallow the lines after it.

use crate::core::planner::VaccinationPlanner;
use crate::domain::ports::LoadErrorSink;
use crate::utils::error::{PlannerError, Result};
use csv::{Position, ReaderBuilder, StringRecord, Trim};
use std::io::Read;

const HEADER: [&str; 4] = ["SSN", "LAST", "FIRST", "YEAR"];

impl VaccinationPlanner {
    /// Registers the sink notified about rejected lines, replacing any
    /// previous one.
    pub fn set_load_listener<S>(&mut self, listener: S)
    where
        S: LoadErrorSink + 'static,
    {
        self.load_listener = Some(Box::new(listener));
    }

    fn report_load_error(&mut self, line: usize, raw: &str) {
        tracing::warn!("⚠️ Rejected line {}: {}", line, raw);
        if let Some(listener) = self.load_listener.as_mut() {
            listener.on_error(line, raw);
        }
    }

    /// Loads people from CSV and returns how many were added.
    pub fn load_people<R: Read>(&mut self, mut reader: R) -> Result<usize> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.load_people_str(&content)
    }

    pub fn load_people_str(&mut self, content: &str) -> Result<usize> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(content.as_bytes());
        let mut records = csv_reader.records();

        let header = match records.next().transpose()? {
            Some(header) => header,
            None => {
                self.report_load_error(1, "");
                return Err(PlannerError::HeaderError {
                    header: String::new(),
                });
            }
        };
        if !header_matches(&header) {
            let raw = raw_line(content, header.position());
            self.report_load_error(1, raw);
            return Err(PlannerError::HeaderError {
                header: raw.to_string(),
            });
        }

        let mut added = 0;
        for record in records {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let raw = raw_line(content, record.position());

            match self.add_record(&record) {
                Ok(()) => added += 1,
                Err(e) => {
                    tracing::debug!("Line {}: {}", line, e);
                    self.report_load_error(line, raw);
                }
            }
        }

        tracing::info!("👥 Loaded {} people ({} registered)", added, self.count_people());
        Ok(added)
    }

    fn add_record(&mut self, record: &StringRecord) -> Result<()> {
        if record.len() < HEADER.len() {
            return Err(PlannerError::record(
                record.get(0).unwrap_or_default(),
                format!("expected {} fields, found {}", HEADER.len(), record.len()),
            ));
        }
        let (ssn, last, first, year) = (&record[0], &record[1], &record[2], &record[3]);
        let birth_year = year
            .parse::<i32>()
            .map_err(|_| PlannerError::record(ssn, format!("invalid birth year '{}'", year)))?;
        self.add_person(first, last, ssn, birth_year)
    }
}

fn header_matches(header: &StringRecord) -> bool {
    header.len() >= HEADER.len()
        && HEADER
            .iter()
            .zip(header.iter())
            .all(|(expected, found)| found.eq_ignore_ascii_case(expected))
}

/// The untouched source line a record starts on.
fn raw_line<'a>(content: &'a str, position: Option<&Position>) -> &'a str {
    position
        .and_then(|pos| content.get(pos.byte() as usize..))
        .and_then(|rest| rest.lines().next())
        .unwrap_or("")
}
