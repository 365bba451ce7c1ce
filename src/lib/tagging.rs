use crate::metadata::TrackMetadata;
use anyhow::{Context, Result};
use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::{ItemKey, Tag};
use std::path::Path;
use tracing::debug;

/// Read title, album and artist from a music file's tags.
/// Uses the primary tag, falling back to whichever tag the file has first.
pub fn read_track_metadata(file_path: &Path) -> Result<TrackMetadata> {
    let tagged_file = lofty::read_from_path(file_path)
        .with_context(|| format!("Failed to read tags from '{}'", file_path.display()))?;

    let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) else {
        debug!("No tags found in {}", file_path.display());
        return Ok(TrackMetadata::default());
    };

    let text = |key: &ItemKey| tag.get_string(key).map(str::to_string);

    Ok(TrackMetadata {
        title: text(&ItemKey::TrackTitle),
        album: text(&ItemKey::AlbumTitle),
        artist: text(&ItemKey::TrackArtist).or_else(|| text(&ItemKey::AlbumArtist)),
    })
}

/// Write every set field of `metadata` into the file's primary tag,
/// creating the tag if the file has none.
pub fn write_track_metadata(file_path: &Path, metadata: &TrackMetadata) -> Result<()> {
    let mut tagged_file = lofty::read_from_path(file_path)
        .with_context(|| format!("Failed to read tags from '{}'", file_path.display()))?;

    if tagged_file.primary_tag().is_none() {
        let tag_type = tagged_file.primary_tag_type();
        tagged_file.insert_tag(Tag::new(tag_type));
    }

    let tag = tagged_file
        .primary_tag_mut()
        .ok_or_else(|| anyhow::anyhow!("File '{}' has no writable tag", file_path.display()))?;

    let fields = [
        (ItemKey::TrackTitle, &metadata.title),
        (ItemKey::AlbumTitle, &metadata.album),
        (ItemKey::TrackArtist, &metadata.artist),
    ];
    for (key, value) in fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            tag.insert_text(key, value.to_string());
        }
    }

    tagged_file
        .save_to_path(file_path, WriteOptions::default())
        .with_context(|| format!("Failed to save tags to '{}'", file_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_track_metadata_rejects_unknown_format() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("liner notes.txt");
        fs::write(&file_path, b"recorded live, mixed at home")?;

        let err = read_track_metadata(&file_path).unwrap_err();
        assert!(err.to_string().contains("liner notes.txt"));

        Ok(())
    }

    #[test]
    fn test_write_track_metadata_missing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("missing.flac");

        let result = write_track_metadata(&file_path, &TrackMetadata::default());
        assert!(result.is_err());
        assert!(!file_path.exists());

        Ok(())
    }
}
