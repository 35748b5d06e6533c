//! Persisted level progress
//!
//! A single plain-text file holds the one-based index of the level the
//! player is on. Reading is forgiving: a missing or malformed file means
//! level 1 with a warning, never a crash. Writing happens only after a
//! level is won, so a failed write leaves the previous progress intact.

use std::io;
use std::path::Path;

use log::warn;

/// The level index used when no progress file exists yet
pub const FIRST_LEVEL: usize = 1;

/// Read the persisted level index, defaulting to level 1
pub fn read_level_index(path: &Path) -> usize {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("no readable progress file at {}: {err}; starting at level {FIRST_LEVEL}", path.display());
            return FIRST_LEVEL;
        }
    };

    match contents.trim().parse::<usize>() {
        Ok(index) if index >= FIRST_LEVEL => index,
        _ => {
            warn!(
                "malformed progress file at {} ({contents:?}); starting at level {FIRST_LEVEL}",
                path.display()
            );
            FIRST_LEVEL
        }
    }
}

/// Persist the level index
pub fn write_level_index(path: &Path, index: usize) -> io::Result<()> {
    std::fs::write(path, format!("{index}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("brickfall-progress-{name}-{}", std::process::id()))
    }

    #[test]
    fn missing_file_defaults_to_first_level() {
        assert_eq!(read_level_index(Path::new("/nonexistent/progress.txt")), 1);
    }

    #[test]
    fn round_trip_preserves_the_index() {
        let path = temp_path("roundtrip");
        write_level_index(&path, 7).expect("writable temp dir");
        assert_eq!(read_level_index(&path), 7);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn garbage_and_zero_fall_back_to_first_level() {
        let path = temp_path("garbage");
        std::fs::write(&path, "not a number").expect("writable temp dir");
        assert_eq!(read_level_index(&path), 1);

        std::fs::write(&path, "0").expect("writable temp dir");
        assert_eq!(read_level_index(&path), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let path = temp_path("whitespace");
        std::fs::write(&path, "  3\n").expect("writable temp dir");
        assert_eq!(read_level_index(&path), 3);
        let _ = std::fs::remove_file(&path);
    }
}
