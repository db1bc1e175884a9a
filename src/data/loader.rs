use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use csv::{ByteRecord, StringRecord};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{categorize, Dataset, RiaRecord};

/// Source columns the normalizer knows about (after header trimming).
pub const KNOWN_COLUMNS: [&str; 9] = [
    "CRD",
    "Primary Business Name",
    "City",
    "State",
    "Total",
    "Total Number of Accounts",
    "Accts-Individuals",
    "Accts-Corps",
    "Accts-Pensions",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load-time failures. Cell-level problems never surface here; they are
/// coerced during normalization.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot parse {} as a table: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_csv(path: &Path, err: csv::Error) -> Self {
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            _ => LoadError::Parse {
                path: path.to_path_buf(),
                reason,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

static CACHE: OnceLock<RwLock<HashMap<PathBuf, Arc<Dataset>>>> = OnceLock::new();

/// Load a dataset, reusing the result of any earlier successful load of the
/// same path for the rest of the process. Failures are not cached.
pub fn load_cached(path: &Path) -> Result<Arc<Dataset>, LoadError> {
    let cache = CACHE.get_or_init(Default::default);

    if let Some(ds) = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(path)
    {
        log::debug!("Dataset cache hit for {}", path.display());
        return Ok(Arc::clone(ds));
    }

    let dataset = Arc::new(load_file(path)?);
    let mut guard = cache.write().unwrap_or_else(PoisonError::into_inner);
    // A concurrent loader may have won the race; keep the first entry.
    let entry = guard.entry(path.to_path_buf()).or_insert(dataset);
    Ok(Arc::clone(entry))
}

/// Read and normalize a delimited table with a header row.
///
/// Header names are trimmed, `Total` is parsed as currency, the count columns
/// as integers, and every record gets its [`AumRange`](super::model::AumRange).
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let dataset = read_table(file, path)?;
    log::info!(
        "Loaded {} advisor records from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

fn read_table<R: io::Read>(input: R, path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let raw_headers = reader
        .byte_headers()
        .map_err(|e| LoadError::from_csv(path, e))?
        .clone();
    let headers: StringRecord = raw_headers
        .iter()
        .map(|h| decode_field(h).trim().to_string())
        .collect();

    if headers.iter().all(str::is_empty) {
        return Err(LoadError::Parse {
            path: path.to_path_buf(),
            reason: "missing header row".to_string(),
        });
    }
    for column in KNOWN_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            log::warn!("{}: column '{column}' not found", path.display());
        }
    }

    let mut records = Vec::new();
    let mut raw = ByteRecord::new();
    while reader
        .read_byte_record(&mut raw)
        .map_err(|e| LoadError::from_csv(path, e))?
    {
        let fields: StringRecord = raw.iter().map(decode_field).collect();
        let row: RawRow = fields
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::from_csv(path, e))?;
        records.push(row.normalize());
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "CRD", default)]
    crd: String,
    #[serde(rename = "Primary Business Name", default)]
    business_name: String,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "State", default)]
    state: Option<String>,
    #[serde(rename = "Total", default, deserialize_with = "currency")]
    total: f64,
    #[serde(rename = "Total Number of Accounts", default, deserialize_with = "count")]
    total_accounts: i64,
    #[serde(rename = "Accts-Individuals", default, deserialize_with = "optional_count")]
    individuals: Option<i64>,
    #[serde(rename = "Accts-Corps", default, deserialize_with = "optional_count")]
    corporations: Option<i64>,
    #[serde(rename = "Accts-Pensions", default, deserialize_with = "optional_count")]
    pensions: Option<i64>,
}

impl RawRow {
    fn normalize(self) -> RiaRecord {
        RiaRecord {
            crd: self.crd,
            business_name: self.business_name,
            city: self.city,
            state: self.state.filter(|s| !is_missing(s)),
            total_aum: self.total,
            total_accounts: self.total_accounts,
            individuals: self.individuals,
            corporations: self.corporations,
            pensions: self.pensions,
            aum_range: categorize(self.total),
        }
    }
}

fn currency<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let cell: Option<String> = Option::deserialize(d)?;
    Ok(cell.as_deref().map(parse_currency).unwrap_or(0.0))
}

fn count<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let cell: Option<String> = Option::deserialize(d)?;
    Ok(cell.as_deref().and_then(parse_count).unwrap_or(0))
}

fn optional_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let cell: Option<String> = Option::deserialize(d)?;
    Ok(cell
        .as_deref()
        .filter(|s| !is_missing(s))
        .map(|s| parse_count(&s.replace(',', "")).unwrap_or(0)))
}

/// Cell texts that mean "no value" in spreadsheet and pandas exports.
const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a cell (after trimming) is one of the missing-value tokens.
fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell.trim())
}

/// `"$1,250,000.50"` → `1250000.5`. Anything unparseable or non-finite is 0.
pub fn parse_currency(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// 2^63: the first float magnitude an `i64` cannot hold.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Integer cell; decimal literals are truncated toward zero. Floats outside
/// the `i64` range are unparseable rather than clamped.
fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    s.parse::<f64>()
        .ok()
        .map(f64::trunc)
        .filter(|v| v.abs() < I64_LIMIT)
        .map(|v| v as i64)
}

/// UTF-8 when valid, otherwise ISO-8859-1.
fn decode_field(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}
