use anyhow::{Context, Result};
use dlalbum::import::{ImportTask, ItemReport};
use dlalbum::{tagging, utils};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Counts for one or more tagged album directories
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TagSummary {
    pub tracks: usize,
    pub changed: usize,
    pub written: usize,
    pub failed: usize,
    pub failed_albums: usize,
}

impl TagSummary {
    fn merge(&mut self, other: TagSummary) {
        self.tracks += other.tracks;
        self.changed += other.changed;
        self.written += other.written;
        self.failed += other.failed;
        self.failed_albums += other.failed_albums;
    }
}

/// Counts plus the per-track reports behind them
#[derive(Debug, Default)]
pub struct TagOutcome {
    pub summary: TagSummary,
    pub reports: Vec<ItemReport>,
}

/// All reports as a single JSON array
pub fn reports_to_json(reports: &[ItemReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize report")
}

fn log_report(report: &ItemReport) {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    info!(
        "{}: title '{}' -> '{}', album '{}' -> '{}', artist '{}' -> '{}'",
        report.path.display(),
        field(&report.before.title),
        field(&report.after.title),
        field(&report.before.album),
        field(&report.after.album),
        field(&report.before.artist),
        field(&report.after.artist),
    );
}

/// Infer missing metadata for every track in `album_dir`, writing the
/// result back to the files unless `dry_run` is set.
pub fn tag_album_dir(album_dir: &Path, dry_run: bool) -> Result<TagOutcome> {
    let mut task = ImportTask::from_album_dir(album_dir)?;
    let reports = task.apply();

    let mut summary = TagSummary {
        tracks: reports.len(),
        ..Default::default()
    };

    for report in reports.iter().filter(|r| r.changed()) {
        summary.changed += 1;
        log_report(report);
        if dry_run {
            continue;
        }
        match tagging::write_track_metadata(&report.path, &report.after) {
            Ok(()) => summary.written += 1,
            Err(e) => {
                warn!("{:#}", e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "{}: {} tracks, {} changed, {} written{}",
        album_dir.display(),
        summary.tracks,
        summary.changed,
        summary.written,
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(TagOutcome { summary, reports })
}

/// Tag each album in turn. An album that cannot be read is logged and
/// counted, and the rest still run.
pub fn tag_albums(album_paths: &[PathBuf], dry_run: bool) -> TagOutcome {
    let mut total = TagOutcome::default();

    for album_path in album_paths {
        match tag_album_dir(album_path, dry_run) {
            Ok(outcome) => {
                total.summary.merge(outcome.summary);
                total.reports.extend(outcome.reports);
            }
            Err(e) => {
                warn!("Skipping album {}: {:#}", album_path.display(), e);
                total.summary.failed_albums += 1;
            }
        }
    }

    total
}

/// Run [`tag_album_dir`] over every album in the library.
pub fn tag_library(music_dir: &Path, dry_run: bool) -> Result<TagOutcome> {
    let album_paths = utils::get_all_album_paths(music_dir)?;
    if album_paths.is_empty() {
        info!("No album directories found under {}", music_dir.display());
    }

    let outcome = tag_albums(&album_paths, dry_run);
    let total = &outcome.summary;

    info!(
        "Tagged {} albums: {} tracks, {} changed, {} written, {} failed, {} albums skipped",
        album_paths.len(),
        total.tracks,
        total.changed,
        total.written,
        total.failed,
        total.failed_albums
    );

    Ok(outcome)
}
