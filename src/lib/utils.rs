use crate::audio;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Library root: `DLALBUM_MUSIC_DIR`, then `XDG_MUSIC_DIR`, then `~/Music`.
pub fn get_default_music_dir() -> PathBuf {
    let dir = std::env::var("DLALBUM_MUSIC_DIR")
        .or_else(|_| std::env::var("XDG_MUSIC_DIR"))
        .unwrap_or_else(|_| "~/Music".to_string());
    expand_dir(&dir)
}

/// Expand a leading `~` in a user supplied directory
pub fn expand_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).into_owned())
}

fn contains_audio_files(path: &Path) -> bool {
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file() && audio::is_audio_file(e.path()))
}

/// Every `Artist/Album` directory under `music_dir` that holds audio files, sorted.
pub fn get_all_album_paths(music_dir: &Path) -> Result<Vec<PathBuf>> {
    if !music_dir.exists() {
        return Ok(Vec::new());
    }

    let mut album_paths = Vec::new();

    for entry in WalkDir::new(music_dir).min_depth(2).max_depth(2) {
        let entry =
            entry.with_context(|| format!("Failed to scan '{}'", music_dir.display()))?;
        if entry.file_type().is_dir() && contains_audio_files(entry.path()) {
            album_paths.push(entry.into_path());
        }
    }

    album_paths.sort();
    Ok(album_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_get_all_album_paths() -> Result<()> {
        let tmp_dir = tempdir()?;
        let music_root = tmp_dir.path().join("Music");

        let album1_1_dir = music_root.join("Artist1").join("Album1_1");
        fs::create_dir_all(&album1_1_dir)?;
        fs::File::create(album1_1_dir.join("track1.mp3"))?.write_all(b"test")?;
        let album1_2_dir = music_root.join("Artist1").join("Album1_2");
        fs::create_dir_all(&album1_2_dir)?;
        fs::File::create(album1_2_dir.join("track2.opus"))?.write_all(b"test")?;
        let album2_1_dir = music_root.join("Artist2").join("Album2_1");
        fs::create_dir_all(&album2_1_dir)?;
        fs::File::create(album2_1_dir.join("track3.m4a"))?.write_all(b"test")?;

        // Folders without audio are not albums
        let scans_dir = music_root.join("Artist1").join("Scans");
        fs::create_dir_all(&scans_dir)?;
        fs::File::create(scans_dir.join("booklet.jpg"))?.write_all(b"test")?;

        // Loose files at the artist level are ignored
        fs::File::create(music_root.join("Artist2").join("single.mp3"))?.write_all(b"test")?;

        let album_paths = get_all_album_paths(&music_root)?;

        assert_eq!(album_paths, vec![album1_1_dir, album1_2_dir, album2_1_dir]);

        Ok(())
    }

    #[test]
    fn test_get_all_album_paths_missing_root() -> Result<()> {
        let tmp_dir = tempdir()?;
        let album_paths = get_all_album_paths(&tmp_dir.path().join("Music"))?;

        assert!(album_paths.is_empty());

        Ok(())
    }

    #[test]
    fn test_expand_dir_leaves_absolute_paths() {
        assert_eq!(expand_dir("/srv/music"), PathBuf::from("/srv/music"));
    }
}
