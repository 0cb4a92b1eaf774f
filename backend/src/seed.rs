//! Startup seeding of the course store from a JSON file.
//!
//! The file holds an array of `{"name": ..., "category": ...}` objects. Each
//! entry is validated like an API payload and stored in file order, so the
//! first entry receives the lowest identifier.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{CourseDraft, CourseValidationError};

/// Course entry as it appears in a seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCourse {
    /// Course name; validated like an API payload.
    pub name: Option<String>,
    /// Course category; validated like an API payload.
    pub category: Option<String>,
}

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be opened or read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not a JSON array of course entries.
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    /// An entry failed course validation.
    #[error("seed entry {index} is invalid: {source}")]
    InvalidCourse {
        /// Zero-based position of the entry in the file.
        index: usize,
        /// Validation failure for the entry.
        #[source]
        source: CourseValidationError,
    },
    /// The store rejected a seed course.
    #[error("failed to store seed course: {0}")]
    Store(#[from] CourseRepositoryError),
}

fn read_seed_file(path: &Path) -> Result<Vec<u8>, SeedError> {
    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(io::Error::new(io::ErrorKind::InvalidInput, "not a file")))?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read(file_name).map_err(read_error)
}

/// Parse seed courses, rejecting the whole file if any entry is invalid.
pub fn parse_seed_courses(bytes: &[u8]) -> Result<Vec<CourseDraft>, SeedError> {
    let entries: Vec<SeedCourse> = serde_json::from_slice(bytes)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            CourseDraft::try_from_parts(entry.name, entry.category)
                .map_err(|source| SeedError::InvalidCourse { index, source })
        })
        .collect()
}

/// Load `path` and store every course it lists.
///
/// Returns the number of courses stored.
pub async fn seed_courses_from_file(
    repository: &dyn CourseRepository,
    path: &Path,
) -> Result<usize, SeedError> {
    let drafts = parse_seed_courses(&read_seed_file(path)?)?;
    for draft in &drafts {
        repository.create(draft).await?;
    }
    info!(path = %path.display(), count = drafts.len(), "seeded course store");
    Ok(drafts.len())
}
