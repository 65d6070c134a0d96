use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::db::models::{Ticket, Users};
use crate::error::AppError;

/// Flat-file persistence: one JSON object of users, one JSON array of tickets.
///
/// Every save rewrites the whole file. Callers serialize access through the
/// mutex held in `AppState`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    users_path: PathBuf,
    tickets_path: PathBuf,
}

impl JsonStore {
    pub fn new(users_path: impl Into<PathBuf>, tickets_path: impl Into<PathBuf>) -> Self {
        Self {
            users_path: users_path.into(),
            tickets_path: tickets_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.users_file.clone(), config.tickets_file.clone())
    }

    /// Create missing files as an empty object / empty array
    pub fn init(&self) -> Result<(), AppError> {
        if !self.users_path.exists() {
            write_json(&self.users_path, &Users::new())?;
            tracing::info!("Created users file at {}", self.users_path.display());
        }
        if !self.tickets_path.exists() {
            write_json(&self.tickets_path, &Vec::<Ticket>::new())?;
            tracing::info!("Created tickets file at {}", self.tickets_path.display());
        }
        Ok(())
    }

    pub fn load_users(&self) -> Result<Users, AppError> {
        read_json(&self.users_path)
    }

    pub fn save_users(&self, users: &Users) -> Result<(), AppError> {
        write_json(&self.users_path, users)
    }

    pub fn load_tickets(&self) -> Result<Vec<Ticket>, AppError> {
        read_json(&self.tickets_path)
    }

    pub fn save_tickets(&self, tickets: &[Ticket]) -> Result<(), AppError> {
        write_json(&self.tickets_path, tickets)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
