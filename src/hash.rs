//! Streamed content digests for tracked files.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read size per chunk; keeps memory bounded for arbitrarily large outputs.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the SHA-256 digest of a file's full byte content as lowercase hex.
///
/// The file handle is scoped to this call and released on every exit path,
/// including read errors.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let read = file
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Digest of an in-memory byte slice; used by tests to cross-check file
/// digests against expected content.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
