use sciscape_core::{
    DataPoint, InitialConditions, LabError, LabResult, MAX_RECORDED_SAMPLES, SimulationConfig,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// A named experiment: the inputs needed to rerun it plus a trimmed sample
/// of what was measured. Live trail and mid-run state are not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub id: Uuid,
    pub name: String,
    /// Seconds since the Unix epoch
    pub created_at: u64,
    pub config: SimulationConfig,
    pub initial: InitialConditions,
    pub samples: Vec<DataPoint>,
}

impl ExperimentRecord {
    /// Capture a record, keeping only the most recent samples
    pub fn capture<'a>(
        name: impl Into<String>,
        config: &SimulationConfig,
        initial: &InitialConditions,
        samples: impl IntoIterator<Item = &'a DataPoint>,
    ) -> Self {
        let mut samples: Vec<DataPoint> = samples.into_iter().copied().collect();
        let excess = samples.len().saturating_sub(MAX_RECORDED_SAMPLES);
        samples.drain(..excess);
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at,
            config: config.clone(),
            initial: initial.clone(),
            samples,
        }
    }

    /// Inputs to rebuild an equivalent starting point
    pub fn restore(&self) -> (SimulationConfig, InitialConditions) {
        (self.config.clone(), self.initial.clone())
    }
}

/// Save a record to disk as bincode
pub fn save_record(record: &ExperimentRecord, path: &Path) -> LabResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = bincode::serialize(record).map_err(|e| LabError::Serialization(e.to_string()))?;
    fs::write(path, data)?;
    Ok(())
}

/// Load a record from disk
pub fn load_record(path: &Path) -> LabResult<ExperimentRecord> {
    let data = fs::read(path)?;
    bincode::deserialize(&data).map_err(|e| LabError::Serialization(e.to_string()))
}

/// Directory-backed key-value store of experiments, one `<id>.bin` per record
pub struct ExperimentStore {
    dir: PathBuf,
}

impl ExperimentStore {
    pub fn open(dir: impl Into<PathBuf>) -> LabResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.bin"))
    }

    /// Write (or overwrite) a record under its id. Returns the file path.
    pub fn save(&self, record: &ExperimentRecord) -> LabResult<PathBuf> {
        let path = self.path_for(record.id);
        save_record(record, &path)?;
        Ok(path)
    }

    pub fn load(&self, id: Uuid) -> LabResult<ExperimentRecord> {
        load_record(&self.path_for(id)).map_err(|e| not_found_as(e, id))
    }

    pub fn remove(&self, id: Uuid) -> LabResult<()> {
        fs::remove_file(self.path_for(id)).map_err(|e| not_found_as(e.into(), id))
    }

    /// All readable records, oldest first. Unreadable files are skipped.
    pub fn list(&self) -> LabResult<Vec<ExperimentRecord>> {
        let mut records: Vec<ExperimentRecord> = fs::read_dir(&self.dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "bin"))
            .filter_map(|p| load_record(&p).ok())
            .collect();
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(records)
    }

    pub fn latest(&self) -> LabResult<Option<ExperimentRecord>> {
        Ok(self.list()?.pop())
    }

    /// Default name for the next save, "Experiment N"
    pub fn next_name(&self) -> LabResult<String> {
        Ok(format!("Experiment {}", self.list()?.len() + 1))
    }
}

/// A missing file surfaces as `NotFound` for the record id
fn not_found_as(err: LabError, id: Uuid) -> LabError {
    match err {
        LabError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            LabError::NotFound(id.to_string())
        }
        other => other,
    }
}
