//! Metadata inferred from where a track sits in an `Artist/Album/Track` tree.
//!
//! Everything here is purely syntactic: no file is opened and the path does
//! not need to exist. Shallow paths yield empty strings instead of errors.

use std::path::Path;

fn segment_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name without its extension, e.g. the downloaded video title.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Name of the directory holding the track.
pub fn album_from_path(path: &Path) -> String {
    segment_name(path.parent())
}

/// Name of the directory holding the album directory.
pub fn artist_from_path(path: &Path) -> String {
    segment_name(path.parent().and_then(Path::parent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_artist_album_title_from_library_path() {
        let path = PathBuf::from("/home/user/Music/SomeArtist/SomeAlbum/01 Track.mp3");

        assert_eq!(artist_from_path(&path), "SomeArtist");
        assert_eq!(album_from_path(&path), "SomeAlbum");
        assert_eq!(title_from_path(&path), "01 Track");
    }

    #[test]
    fn test_relative_path() {
        let path = Path::new("Artist/Album/Song (Official Video).opus");

        assert_eq!(artist_from_path(path), "Artist");
        assert_eq!(album_from_path(path), "Album");
        assert_eq!(title_from_path(path), "Song (Official Video)");
    }

    #[test]
    fn test_title_keeps_inner_dots() {
        let path = Path::new("A/B/Mr. Blue Sky.m4a");
        assert_eq!(title_from_path(path), "Mr. Blue Sky");
    }

    #[test]
    fn test_shallow_paths_degrade_to_empty() {
        assert_eq!(album_from_path(Path::new("track.mp3")), "");
        assert_eq!(artist_from_path(Path::new("track.mp3")), "");

        assert_eq!(album_from_path(Path::new("Album/track.mp3")), "Album");
        assert_eq!(artist_from_path(Path::new("Album/track.mp3")), "");

        assert_eq!(album_from_path(Path::new("/track.mp3")), "");
        assert_eq!(artist_from_path(Path::new("/track.mp3")), "");
    }

    #[test]
    fn test_root_level_album() {
        let path = Path::new("/Album/track.mp3");
        assert_eq!(album_from_path(path), "Album");
        assert_eq!(artist_from_path(path), "");
    }
}
