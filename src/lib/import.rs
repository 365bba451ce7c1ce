use crate::metadata::{fill_missing_metadata, TrackMetadata};
use crate::{audio, pathinfo, tagging, title};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One track of an import, with the metadata gathered for it so far
#[derive(Debug, Clone)]
pub struct ImportItem {
    pub path: PathBuf,
    pub metadata: TrackMetadata,
}

impl ImportItem {
    /// Start from the tags already present in the file.
    /// Unreadable files start out with no metadata.
    pub fn from_path(path: PathBuf) -> Self {
        let metadata = match tagging::read_track_metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Could not read existing tags, starting empty: {:#}", e);
                TrackMetadata::default()
            }
        };
        Self { path, metadata }
    }
}

/// What an import did to a single track
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub path: PathBuf,
    pub before: TrackMetadata,
    pub after: TrackMetadata,
}

impl ItemReport {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// A batch of tracks imported together, usually one album directory
#[derive(Debug, Default)]
pub struct ImportTask {
    pub items: Vec<ImportItem>,
}

impl ImportTask {
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self {
            items: paths.into_iter().map(ImportItem::from_path).collect(),
        }
    }

    /// Every audio file directly inside `album_dir`, in path order.
    pub fn from_album_dir(album_dir: &Path) -> Result<Self> {
        if !album_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Album directory '{}' does not exist or is not a directory",
                album_dir.display()
            ));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(album_dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("Failed to list '{}'", album_dir.display()))?;
            if entry.file_type().is_file() && audio::is_audio_file(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        debug!("Found {} tracks in {}", paths.len(), album_dir.display());
        Ok(Self::from_paths(paths))
    }

    /// Fill unset albums and artists from the directory names.
    pub fn fill_from_dirnames(&mut self) {
        self.items
            .par_iter_mut()
            .filter(|item| !item.metadata.is_complete())
            .for_each(|item| fill_missing_metadata(&mut item.metadata, &item.path));
    }

    /// Give untitled tracks their file name, minus junk.
    pub fn clean_titles(&mut self) {
        self.items
            .par_iter_mut()
            .filter(|item| !item.metadata.has_title())
            .for_each(|item| {
                let raw_title = pathinfo::title_from_path(&item.path);
                let clean = title::sanitize_title(
                    &raw_title,
                    item.metadata.album_or_empty(),
                    item.metadata.artist_or_empty(),
                );
                debug!("Title for {}: '{}' -> '{}'", item.path.display(), raw_title, clean);
                item.metadata.title = Some(clean);
            });
    }

    /// Run both steps and report the before/after state of every track.
    pub fn apply(&mut self) -> Vec<ItemReport> {
        let before: Vec<TrackMetadata> = self.items.iter().map(|i| i.metadata.clone()).collect();

        self.fill_from_dirnames();
        self.clean_titles();

        self.items
            .iter()
            .zip(before)
            .map(|(item, before)| ItemReport {
                path: item.path.clone(),
                before,
                after: item.metadata.clone(),
            })
            .collect()
    }
}
