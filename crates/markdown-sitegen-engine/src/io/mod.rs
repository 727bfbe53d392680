use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ContentPage;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Output directory {output_dir} must not be inside static directory {static_dir}")]
    OutputInsideStatic {
        static_dir: PathBuf,
        output_dir: PathBuf,
    },
}

/// Read a file to a string
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Every markdown file in the content directory as a [`ContentPage`], sorted by path.
pub fn scan_content_pages(content_root: &Path) -> Result<Vec<ContentPage>, IoError> {
    Ok(scan_markdown_files(content_root)?
        .iter()
        .filter_map(|path| ContentPage::from_path(path, content_root))
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == ContentPage::SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Replace `dst` with a byte-for-byte mirror of `src`.
///
/// Anything already under `dst` is removed first, so files deleted from
/// `src` do not linger in the output. `dst` may not be `src` or lie below it.
pub fn copy_static(src: &Path, dst: &Path) -> Result<(), IoError> {
    if !src.is_dir() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }

    if std::path::absolute(dst)?.starts_with(std::path::absolute(src)?) {
        return Err(IoError::OutputInsideStatic {
            static_dir: src.to_path_buf(),
            output_dir: dst.to_path_buf(),
        });
    }

    if dst.exists() {
        fs::remove_dir_all(dst)?;
        log::info!("Deleted existing directory: {}", dst.display());
    }

    fs::create_dir_all(dst)?;
    log::info!("Created directory: {}", dst.display());

    copy_directory_recursive(src, dst)
}

fn copy_directory_recursive(src: &Path, dst: &Path) -> Result<(), IoError> {
    let mut entries = fs::read_dir(src)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir(&dst_path)?;
            log::debug!("Created directory: {}", dst_path.display());
            copy_directory_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            log::debug!(
                "Copied file: {} -> {}",
                src_path.display(),
                dst_path.display()
            );
        }
    }

    Ok(())
}
