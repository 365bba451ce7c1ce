//! Audio formats an audio extractor typically leaves in an album folder,
//! grouped by the tag family lofty uses to read and write them.

use std::path::Path;

/// ID3-based audio formats
pub const ID3_EXTENSIONS: &[&str] = &["mp3", "aac"];

/// MP4-based audio formats
pub const MP4_EXTENSIONS: &[&str] = &["m4a", "m4b", "mp4"];

/// Vorbis comment based formats (FLAC, Ogg, Opus)
pub const VORBIS_EXTENSIONS: &[&str] = &["flac", "ogg", "oga", "opus", "spx"];

/// APE tagged formats
pub const APE_EXTENSIONS: &[&str] = &["ape", "mpc", "wv"];

/// RIFF/IFF formats
pub const RIFF_EXTENSIONS: &[&str] = &["wav", "aiff", "aif"];

fn all_audio_extensions() -> impl Iterator<Item = &'static str> {
    ID3_EXTENSIONS
        .iter()
        .chain(MP4_EXTENSIONS)
        .chain(VORBIS_EXTENSIONS)
        .chain(APE_EXTENSIONS)
        .chain(RIFF_EXTENSIONS)
        .copied()
}

/// Check if a file path has a supported audio extension
pub fn is_audio_file<P: AsRef<Path>>(path: P) -> bool {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    all_audio_extensions().any(|supported| supported == ext)
}
