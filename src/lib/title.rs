//! # Title cleanup for downloaded tracks
//!
//! Downloaded files are named after the video they came from, so their
//! titles carry tags like `(Official Audio)`, `[HD]` or the artist's name.
//! [`sanitize_title`] strips that junk in three passes:
//!
//! 1. the album and artist names, matched as literal text,
//! 2. the bracketed phrases of [`JUNK_PATTERNS`], in table order,
//! 3. separators (`-`, `_`, `|`) left dangling at either end.
//!
//! Every pattern removes at most its first match, and later patterns see the
//! text as earlier ones left it.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Keywords that mark a bracketed span as junk, in the order they are tried.
const JUNK_KEYWORDS: &[&str] = &[
    r"Explicit|Clean|Parental\sAdvisory",
    r"HQ|HD|CDQ",
    r"Audio",
    r"Album",
    r"Song",
    r"Video",
    r"Lyric",
    r"Visualizer",
    r"iTunes",
    r"Official",
    r"Original",
    r"Version",
    r"Prod(?:uced)?\sBy",
];

/// Case-insensitive pattern for one `()`, `[]` or `{}` span containing `keyword`.
/// The span ends at the nearest closing bracket of the same style.
fn bracketed(keyword: &str) -> String {
    format!(
        r"(?i)\([^)]*?(?:{k})[^)]*?\)|\[[^\]]*?(?:{k})[^\]]*?\]|\{{[^}}]*?(?:{k})[^}}]*?\}}",
        k = keyword
    )
}

/// Generic promotional junk found in video titles.
pub static JUNK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    JUNK_KEYWORDS
        .iter()
        .map(|keyword| Regex::new(&bracketed(keyword)).expect("junk pattern compiles"))
        .collect()
});

static LEADING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-_|]\s*(?P<title>.+)$").expect("separator pattern compiles"));
static TRAILING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<title>.+)\s*[-_|]\s*$").expect("separator pattern compiles"));

/// Patterns for the album and artist names. The album only counts as junk
/// inside parentheses, so title tracks keep their name; the artist may
/// appear bare. Names are matched literally; empty names are skipped.
pub fn name_junk_patterns(album: &str, artist: &str) -> Vec<Regex> {
    [
        (album, format!(r"(?i)\({}\)", regex::escape(album))),
        (artist, format!(r"(?i)\(?{}\)?", regex::escape(artist))),
    ]
    .into_iter()
    .filter(|(name, _)| !name.trim().is_empty())
    .filter_map(|(name, pattern)| match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            trace!("Skipping name pattern for '{}': {}", name, e);
            None
        }
    })
    .collect()
}

/// Remove the first match of each pattern, in order, then strip separators.
pub fn remove_junk(title: &str, pattern_lists: &[&[Regex]]) -> String {
    let mut new_title = title.to_string();

    for pattern in pattern_lists.iter().flat_map(|list| list.iter()) {
        if let Some(range) = pattern.find(&new_title).map(|m| m.range()) {
            trace!("Removing junk '{}' from '{}'", &new_title[range.clone()], new_title);
            new_title.replace_range(range, "");
        }
    }

    strip_separators(&new_title)
}

/// Drop `-`, `_` and `|` (and surrounding whitespace) from both ends.
pub fn strip_separators(text: &str) -> String {
    let mut stripped = text.to_string();

    loop {
        let before = stripped.clone();
        for pattern in [&*LEADING_SEPARATOR, &*TRAILING_SEPARATOR] {
            if let Some(title) = pattern.captures(&stripped).and_then(|c| c.name("title")) {
                stripped = title.as_str().to_string();
            }
        }
        if stripped == before {
            break;
        }
    }

    stripped.trim().to_string()
}

/// Clean a raw (video) title using the known album and artist names.
/// Pass `""` for a name that is not known.
pub fn sanitize_title(raw_title: &str, album: &str, artist: &str) -> String {
    let name_junk = name_junk_patterns(album, artist);
    remove_junk(raw_title, &[name_junk.as_slice(), JUNK_PATTERNS.as_slice()])
}
