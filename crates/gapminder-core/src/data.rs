// File: crates/gapminder-core/src/data.rs
// Summary: CSV loading into an immutable working dataset (rows with "NA" fertility/life expectancy dropped).

use std::fs;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, info};

use crate::error::{DashboardError, Result};

/// Sentinel for a missing value in the source CSV.
pub const MISSING: &str = "NA";

const COL_COUNTRY: &str = "country";
const COL_YEAR: &str = "year";
const COL_FERTILITY: &str = "fertility";
const COL_LIFE: &str = "life_expectancy";
const COL_POPULATION: &str = "population";

/// One row of the working dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub country: String,
    pub year: i32,
    pub fertility: f64,
    pub life_expectancy: f64,
    /// `None` when the source cell was "NA" or blank.
    pub population: Option<u64>,
}

/// Counts gathered while reading the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Read-only snapshot of the filtered observations.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<Observation>,
    summary: LoadSummary,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DashboardError::Load { path: path.to_path_buf(), source })?;
        let ds = Self::from_reader(bytes.as_slice())?;
        info!(
            path = %path.display(),
            rows = ds.len(),
            dropped = ds.summary.rows_dropped,
            "dataset loaded"
        );
        Ok(ds)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        let idx = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
        };
        let i_country = idx(COL_COUNTRY)?;
        let i_year = idx(COL_YEAR)?;
        let i_fert = idx(COL_FERTILITY)?;
        let i_life = idx(COL_LIFE)?;
        let i_pop = idx(COL_POPULATION)?;

        let mut rows = Vec::new();
        let mut summary = LoadSummary::default();

        for rec in rdr.records() {
            let rec = rec?;
            summary.rows_read += 1;
            // header is line 1
            let line = rec.position().map(|p| p.line()).unwrap_or(summary.rows_read as u64 + 1);
            let cell = |i: usize| rec.get(i).unwrap_or("");

            let fert = cell(i_fert);
            let life = cell(i_life);
            if fert == MISSING || life == MISSING {
                summary.rows_dropped += 1;
                debug!(line, country = cell(i_country), "dropping row with missing fertility/life expectancy");
                continue;
            }

            let population = match cell(i_pop) {
                "" | MISSING => None,
                s => Some(parse_cell::<u64>(s, line, COL_POPULATION).or_else(|e| {
                    // Some exports write population as a float ("1.2e6").
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite() && *v >= 0.0)
                        .map(|v| v.round() as u64)
                        .ok_or(e)
                })?),
            };

            rows.push(Observation {
                country: cell(i_country).to_string(),
                year: parse_cell(cell(i_year), line, COL_YEAR)?,
                fertility: parse_finite(fert, line, COL_FERTILITY)?,
                life_expectancy: parse_finite(life, line, COL_LIFE)?,
                population,
            });
        }

        Ok(Self { rows, summary })
    }

    /// Build directly from observations (callers have already filtered).
    pub fn from_observations(rows: Vec<Observation>) -> Self {
        let summary = LoadSummary { rows_read: rows.len(), rows_dropped: 0 };
        Self { rows, summary }
    }

    pub fn observations(&self) -> &[Observation] { &self.rows }
    pub fn get(&self, index: usize) -> Option<&Observation> { self.rows.get(index) }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn summary(&self) -> LoadSummary { self.summary }

    /// Distinct years in first-seen order.
    pub fn distinct_years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).unique().collect()
    }

    /// Distinct countries in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.country.as_str()).unique().collect()
    }

    pub fn country_rows<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a Observation> + 'a {
        self.rows.iter().filter(move |r| r.country == country)
    }
}

fn parse_cell<T: std::str::FromStr>(s: &str, line: u64, column: &'static str) -> Result<T> {
    s.parse::<T>().map_err(|_| DashboardError::MalformedRow { line, column, value: s.to_string() })
}

/// Like `parse_cell`, but "NaN" and "inf" count as malformed.
fn parse_finite(s: &str, line: u64, column: &'static str) -> Result<f64> {
    let v: f64 = parse_cell(s, line, column)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DashboardError::MalformedRow { line, column, value: s.to_string() })
    }
}
