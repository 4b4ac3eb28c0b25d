// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::{CoreError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const ITINERARY_EXTENSIONS: &[&str] = &["txt", "md"];

/// Recursively finds itinerary text files under `dir`, sorted by path.
/// Hidden files and directories are skipped.
pub fn discover_itineraries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CoreError::DirectoryNotFound(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir).follow_links(true);
    // The root itself may be hidden (e.g. a temp dir); only filter below it.
    let it = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    let mut found = Vec::new();
    for entry in it {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("[Discovery] Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_itinerary(entry.path()) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    log::debug!("[Discovery] Found {} itineraries in {:?}", found.len(), dir);
    Ok(found)
}

fn is_itinerary(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ITINERARY_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discovers_sorted_text_files() -> std::io::Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("south"))?;
        fs::create_dir_all(dir.path().join(".drafts"))?;
        fs::write(dir.path().join("north.txt"), "Day 1: (Baga)")?;
        fs::write(dir.path().join("south").join("plan.MD"), "Day 1: (Agonda)")?;
        fs::write(dir.path().join("notes.json"), "{}")?;
        fs::write(dir.path().join(".hidden.txt"), "x")?;
        fs::write(dir.path().join(".drafts").join("old.txt"), "x")?;

        let found = discover_itineraries(dir.path()).unwrap();
        let rel: Vec<PathBuf> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![PathBuf::from("north.txt"), PathBuf::from("south/plan.MD")]
        );
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        let result = discover_itineraries(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(CoreError::DirectoryNotFound(_))));
    }
}
