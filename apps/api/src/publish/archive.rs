//! In-memory ZIP packaging for deploy uploads.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::publish::PublishError;

/// Builds a deflate-compressed ZIP holding exactly one file.
pub fn zip_single_file(name: &str, contents: &[u8]) -> Result<Vec<u8>, PublishError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(name, options)?;
    writer.write_all(contents)?;

    Ok(writer.finish()?.into_inner())
}
