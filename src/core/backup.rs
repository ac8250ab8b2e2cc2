use crate::config::Config;
use crate::db::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the state file to `dest_file`, optionally compressed
    /// (zip on Windows, tar.gz elsewhere). Returns the final path.
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::Other(format!(
                "Backup file path must be absolute: {dest_file}"
            )));
        }

        if !src.exists() {
            return Err(AppError::NotInitialized);
        }

        ensure_writable(dest, force)?;
        let archive = compress.then(|| archive_path(dest));
        if let Some(archive) = &archive {
            ensure_writable(archive, force)?;
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = match archive {
            Some(archive) => {
                compress_backup(dest, &archive)?;

                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    info(format!("Removed uncompressed backup: {}", dest.display()));
                }

                archive
            }
            None => dest.to_path_buf(),
        };

        audit::record_or_warn(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn file_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))
}

/// Archive written by `--compress`: `<dest>.zip` on Windows, `<dest>.tar.gz` elsewhere.
pub fn archive_path(dest: &Path) -> PathBuf {
    let ext = if cfg!(target_os = "windows") {
        "zip"
    } else {
        "tar.gz"
    };
    PathBuf::from(format!("{}.{ext}", dest.display()))
}

/// Compress a backup using .zip
#[cfg(target_os = "windows")]
fn compress_backup(path: &Path, zip_path: &Path) -> AppResult<()> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(file_name(path)?, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(())
}

/// Compress a backup using .tar.gz
#[cfg(not(target_os = "windows"))]
fn compress_backup(path: &Path, tgz_path: &Path) -> AppResult<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let file = fs::File::create(tgz_path)?;

    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);
    archive.append_path_with_name(path, file_name(path)?)?;
    archive.into_inner()?.finish()?;

    info(format!("Compressed: {}", tgz_path.display()));

    Ok(())
}
