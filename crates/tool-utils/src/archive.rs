//! Zip packing and unpacking that keeps file timestamps intact.

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use filetime::FileTime;
use zip::{CompressionMethod, ZipArchive, ZipWriter, write::SimpleFileOptions};

use crate::paths::ensure_dir_exists;

fn zip_datetime(mtime: std::time::SystemTime) -> Option<zip::DateTime> {
    let local: DateTime<Local> = mtime.into();
    zip::DateTime::from_date_and_time(
        local.year().try_into().ok()?,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .ok()
}

/// Pack `files` (paths relative to `root`) into a zip at `archive`.
pub fn create_zip(root: &Path, files: &[PathBuf], archive: &Path) -> Result<()> {
    let out = File::create(archive)
        .with_context(|| format!("could not create {}", archive.display()))?;
    let mut writer = ZipWriter::new(out);

    for relative in files {
        if relative.is_absolute() {
            bail!("{} must be relative to {}", relative.display(), root.display());
        }
        let source = root.join(relative);
        let mut options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        if let Ok(metadata) = fs::metadata(&source)
            && let Ok(mtime) = metadata.modified()
            && let Some(dt) = zip_datetime(mtime)
        {
            options = options.last_modified_time(dt);
        }
        let name = relative.to_string_lossy().into_owned();
        writer.start_file(name, options)?;
        let mut input = File::open(&source)
            .with_context(|| format!("could not read {}", source.display()))?;
        io::copy(&mut input, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Unpack a zip under `dest`, restoring each entry's recorded mtime.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)
        .with_context(|| format!("could not open {}", archive.display()))?;
    let mut zip = ZipArchive::new(file)?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            bail!("archive entry {:?} escapes the destination", entry.name());
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            ensure_dir_exists(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            ensure_dir_exists(parent)?;
        }
        let mut out = File::create(&target)
            .with_context(|| format!("could not create {}", target.display()))?;
        io::copy(&mut entry, &mut out)?;
        drop(out);

        if let Some(dt) = entry.last_modified()
            && let Some(local) = Local
                .with_ymd_and_hms(
                    dt.year().into(),
                    dt.month().into(),
                    dt.day().into(),
                    dt.hour().into(),
                    dt.minute().into(),
                    dt.second().into(),
                )
                .single()
        {
            filetime::set_file_mtime(&target, FileTime::from_unix_time(local.timestamp(), 0))?;
        }
    }
    Ok(())
}
