// src/render/output.rs

use crate::error::MapperResult;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Temporäre Datei neben dem Ziel; wird beim Drop entfernt, solange sie nicht
/// umbenannt wurde.
struct PendingFile {
    path: PathBuf,
    committed: bool,
}

impl PendingFile {
    fn beside(target: &Path) -> Self {
        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        // Eindeutig pro Lauf, damit parallele Läufe auf dasselbe Ziel sich nicht stören
        let path = target.with_file_name(format!(
            ".{}.{}-{:08x}.partial",
            file_name,
            std::process::id(),
            rand::random::<u32>()
        ));
        Self {
            path,
            committed: false,
        }
    }

    fn commit(mut self, target: &Path) -> MapperResult<()> {
        fs::rename(&self.path, target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.committed && self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!("Could not remove partial file '{}': {}", self.path.display(), e);
            }
        }
    }
}

/// Schreibt `bytes` vollständig nach `target` oder gar nicht.
pub fn persist_atomically(target: &Path, bytes: &[u8]) -> MapperResult<()> {
    let pending = PendingFile::beside(target);
    {
        let mut file = File::create(&pending.path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    pending.commit(target)?;
    debug!("Wrote {} bytes to '{}'", bytes.len(), target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("voronoi_mapper_output_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_complete_file() {
        let dir = scratch_dir("complete");
        let target = dir.join("map.svg");
        persist_atomically(&target, b"<svg/>").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"<svg/>");
        assert_eq!(entries(&dir), vec!["map.svg".to_string()]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_pending_names_differ_per_write() {
        let target = Path::new("/tmp/out/map.png");
        let first = PendingFile::beside(target);
        let second = PendingFile::beside(target);
        assert_ne!(first.path, second.path);
        assert_eq!(first.path.parent(), target.parent());
        let name = first.path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".map.png."));
        assert!(name.ends_with(".partial"));
    }

    #[test]
    fn test_sequential_writes_to_same_target_leave_one_file() {
        let dir = scratch_dir("repeat");
        let target = dir.join("map.svg");
        persist_atomically(&target, b"first").unwrap();
        persist_atomically(&target, b"second").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");
        assert_eq!(entries(&dir), vec!["map.svg".to_string()]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_directory_leaves_nothing() {
        let dir = scratch_dir("missing");
        let target = dir.join("does_not_exist").join("map.png");
        assert!(persist_atomically(&target, b"data").is_err());
        assert!(!target.exists());
        fs::remove_dir_all(dir).unwrap();
    }
}
