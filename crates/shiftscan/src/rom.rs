//! ROM image loading and validation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Expected size of a cartridge dump (1MiB). Anything else is a corrupt
/// or foreign file and aborts before pattern processing.
pub const ROM_SIZE: usize = 0x10_0000;

/// An in-memory ROM image of exactly [`ROM_SIZE`] bytes.
#[derive(Debug, Clone)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(&path)?;
        debug!("Read {} bytes from {:?}", data.len(), path.as_ref());
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if data.len() != ROM_SIZE {
            return Err(Error::RomSize {
                expected: ROM_SIZE,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}
