use crate::domain::Listing;
use crate::errors::ServerError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Handle on the JSON file holding the whole listing collection.
/// Cheap to clone (path only); every mutation is load → modify → save.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection. A missing file is an empty collection;
    /// anything else that fails to read or validate is a store error.
    pub fn load(&self) -> Result<Vec<Listing>, ServerError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| ServerError::StoreError(format!("read {:?} failed: {e}", self.path)))?;

        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .map_err(|e| ServerError::StoreError(format!("parse {:?} failed: {e}", self.path)))?;

        for listing in &listings {
            listing.validate()?;
        }

        Ok(listings)
    }

    /// Overwrite the file with the full collection, pretty-printed.
    pub fn save(&self, listings: &[Listing]) -> Result<(), ServerError> {
        let file = File::create(&self.path)
            .map_err(|e| ServerError::StoreError(format!("create {:?} failed: {e}", self.path)))?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, listings)
            .map_err(|e| ServerError::StoreError(format!("write {:?} failed: {e}", self.path)))?;

        Ok(())
    }
}
