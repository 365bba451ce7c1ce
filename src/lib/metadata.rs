use crate::pathinfo;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// The fields of a track the import step cares about.
/// `None` and `Some("")` both mean the field is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

impl TrackMetadata {
    pub fn has_title(&self) -> bool {
        is_set(&self.title)
    }

    pub fn has_album(&self) -> bool {
        is_set(&self.album)
    }

    pub fn has_artist(&self) -> bool {
        is_set(&self.artist)
    }

    /// Album and artist are both known
    pub fn is_complete(&self) -> bool {
        self.has_album() && self.has_artist()
    }

    /// Album name, or `""` when unset
    pub fn album_or_empty(&self) -> &str {
        self.album.as_deref().unwrap_or_default()
    }

    /// Artist name, or `""` when unset
    pub fn artist_or_empty(&self) -> &str {
        self.artist.as_deref().unwrap_or_default()
    }
}

/// Fill an unset album or artist from the track's directory names.
/// Fields that already hold a value are left alone.
pub fn fill_missing_metadata(track: &mut TrackMetadata, path: &Path) {
    if !track.has_album() {
        let album = pathinfo::album_from_path(path);
        debug!("Album for {} inferred from path: '{}'", path.display(), album);
        track.album = Some(album);
    }
    if !track.has_artist() {
        let artist = pathinfo::artist_from_path(path);
        debug!("Artist for {} inferred from path: '{}'", path.display(), artist);
        track.artist = Some(artist);
    }
}
