// 🗄️ Record Store - Append-only history of calculations
// CSV file by default, SQLite as an alternative backend

use crate::bmi::{BmiRecord, UnitMode, WeightStatus};
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Column order of the backing file
pub const HEADER: [&str; 5] = ["Weight", "Height", "Measurement_Type", "BMI", "Weight_Status"];

/// Ordered, append-only sequence of records
pub trait RecordStore {
    /// Make sure the backing storage exists. Safe to call on every startup.
    fn initialize(&self) -> Result<()>;

    /// Add one record after all existing ones
    fn append(&self, record: &BmiRecord) -> Result<()>;

    /// Every record ever appended, in entry order
    fn read_all(&self) -> Result<Vec<BmiRecord>>;
}

// ============================================================================
// CSV BACKEND
// ============================================================================

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CsvStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_header(&self) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Failed to create data file: {:?}", self.path))?;
        wtr.write_record(HEADER)?;
        wtr.flush()?;
        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn initialize(&self) -> Result<()> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() > 0 => Ok(()),
            Ok(_) => {
                tracing::info!(path = ?self.path, "data file is empty, writing header");
                self.write_header()
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = ?self.path, "creating data file");
                self.write_header()
            }
            Err(e) => Err(e).with_context(|| format!("Failed to stat data file: {:?}", self.path)),
        }
    }

    fn append(&self, record: &BmiRecord) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open data file for append: {:?}", self.path))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(record).context("Failed to serialize record")?;
        wtr.flush().context("Failed to write record")?;

        Ok(())
    }

    fn read_all(&self) -> Result<Vec<BmiRecord>> {
        let mut rdr = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open data file: {:?}", self.path))?;

        let headers = rdr.headers().context("Failed to read header row")?;
        if headers.iter().ne(HEADER.iter().copied()) {
            bail!(
                "Unexpected columns in {:?}: expected {}, found {}",
                self.path,
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            );
        }

        let mut records = Vec::new();
        for (i, result) in rdr.deserialize().enumerate() {
            let record: BmiRecord =
                result.with_context(|| format!("Failed to deserialize row {}", i + 1))?;
            records.push(record);
        }

        Ok(records)
    }
}

// ============================================================================
// SQLITE BACKEND
// ============================================================================

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("Failed to open database: {:?}", path.as_ref()))?;
        Ok(SqliteStore { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        SqliteStore { conn }
    }
}

impl RecordStore for SqliteStore {
    fn initialize(&self) -> Result<()> {
        // Row id fixes entry order
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS bmi_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                weight REAL NOT NULL,
                height REAL NOT NULL,
                measurement_type TEXT NOT NULL,
                bmi REAL NOT NULL,
                weight_status TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn append(&self, record: &BmiRecord) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO bmi_records (weight, height, measurement_type, bmi, weight_status)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.weight,
                    record.height,
                    record.unit.token(),
                    record.bmi,
                    record.status.label(),
                ],
            )
            .context("Failed to insert record")?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<BmiRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT weight, height, measurement_type, bmi, weight_status
             FROM bmi_records
             ORDER BY id ASC",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, f64>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(weight, height, token, bmi, status)| {
                let unit = UnitMode::from_token(&token)
                    .with_context(|| format!("Stored measurement type {:?} is invalid", token))?;
                let status = parse_status(&status)?;
                Ok(BmiRecord {
                    weight,
                    height,
                    unit,
                    bmi,
                    status,
                })
            })
            .collect()
    }
}

fn parse_status(label: &str) -> Result<WeightStatus> {
    [
        WeightStatus::Underweight,
        WeightStatus::HealthyWeight,
        WeightStatus::Overweight,
        WeightStatus::Obesity,
    ]
    .into_iter()
    .find(|s| s.label() == label)
    .with_context(|| format!("Stored weight status {:?} is invalid", label))
}
