use anyhow::{Context, Result};
use dlalbum::metadata::{fill_missing_metadata, TrackMetadata};
use dlalbum::{pathinfo, title};
use std::path::Path;

/// Metadata for a track inferred from its path alone, as if it had no tags.
pub fn infer_from_path(path: &Path) -> TrackMetadata {
    let mut metadata = TrackMetadata::default();
    fill_missing_metadata(&mut metadata, path);
    metadata.title = Some(title::sanitize_title(
        &pathinfo::title_from_path(path),
        metadata.album_or_empty(),
        metadata.artist_or_empty(),
    ));
    metadata
}

pub fn print_path_metadata(path: &Path, json: bool) -> Result<()> {
    let metadata = infer_from_path(path);

    if json {
        let out = serde_json::to_string_pretty(&metadata)
            .context("Failed to serialize inferred metadata")?;
        println!("{}", out);
    } else {
        println!("Title:  {}", metadata.title.as_deref().unwrap_or_default());
        println!("Album:  {}", metadata.album_or_empty());
        println!("Artist: {}", metadata.artist_or_empty());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_path() {
        let metadata = infer_from_path(Path::new(
            "Downloads/Queen/A Night at the Opera/Queen - Bohemian Rhapsody (Official Video).opus",
        ));

        assert_eq!(metadata.artist.as_deref(), Some("Queen"));
        assert_eq!(metadata.album.as_deref(), Some("A Night at the Opera"));
        assert_eq!(metadata.title.as_deref(), Some("Bohemian Rhapsody"));
    }

    #[test]
    fn test_infer_from_bare_file_name() {
        let metadata = infer_from_path(Path::new("Song (Audio).mp3"));

        assert_eq!(metadata.artist.as_deref(), Some(""));
        assert_eq!(metadata.album.as_deref(), Some(""));
        assert_eq!(metadata.title.as_deref(), Some("Song"));
    }
}
