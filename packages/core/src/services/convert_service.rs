//! Flat-file to tree-file conversion
//!
//! The single entry point is [`convert_file`]: read a JSON array of flat
//! node records, rebuild the hierarchy, and write the pretty-printed nested
//! tree. The transformation between read and write is strictly sequential
//! and in-memory; only the boundary I/O is asynchronous.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::models::{FlatNode, TreeNode};
use crate::operations::build_tree;
use crate::services::ConvertError;

/// Convert a flat node file into a nested tree file.
///
/// Reads a JSON array of flat records from `source`, rebuilds the ordered
/// parent/child hierarchy, and writes the 2-space pretty-printed tree to
/// `destination` with a `.json` suffix appended. The write uses a
/// temp-file-then-rename pattern and is awaited to completion, so a
/// successful return means the output file is fully in place and readers of
/// the destination path never observe partial output.
///
/// Returns the assembled root-level nodes.
///
/// # Errors
///
/// See [`ConvertError`]: unreadable source, malformed JSON, per-record
/// schema violations, data integrity faults during reconstruction, and
/// output write failures. No partial output is written on any of them.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use nodenest_core::services::convert_file;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let roots = convert_file(Path::new("nodes.json"), Path::new("tree")).await?;
/// println!("wrote {} root nodes to tree.json", roots.len());
/// # Ok(())
/// # }
/// ```
pub async fn convert_file(
    source: &Path,
    destination: &Path,
) -> Result<Vec<TreeNode>, ConvertError> {
    let text = fs::read_to_string(source)
        .await
        .map_err(|e| ConvertError::source_read(source, e))?;

    let nodes = parse_nodes(source, &text)?;
    tracing::debug!(
        "parsed {} flat node records from '{}'",
        nodes.len(),
        source.display()
    );

    let tree = build_tree(nodes)?;

    // Serialize before touching the filesystem so a serialization fault
    // leaves no partial file behind
    let serialized = serde_json::to_string_pretty(&tree).map_err(ConvertError::Serialization)?;

    let out = output_path(destination);
    write_atomic(&out, serialized).await?;
    tracing::info!("wrote {} root nodes to '{}'", tree.len(), out.display());

    Ok(tree)
}

/// Destination path with the `.json` suffix appended.
///
/// The suffix is appended rather than substituted, matching the conversion
/// contract: `tree` becomes `tree.json`, `tree.out` becomes `tree.out.json`.
pub(crate) fn output_path(destination: &Path) -> PathBuf {
    let mut path = OsString::from(destination.as_os_str());
    path.push(".json");
    PathBuf::from(path)
}

/// Parse the source text into flat node records.
///
/// The document must be a JSON array. Records are then validated one at a
/// time so a schema violation (missing field, wrong type) reports the
/// offending array index instead of failing opaquely on the whole document.
fn parse_nodes(path: &Path, text: &str) -> Result<Vec<FlatNode>, ConvertError> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|e| ConvertError::malformed_json(path, e))?;

    let mut nodes = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let node: FlatNode = serde_json::from_value(value)
            .map_err(|e| ConvertError::invalid_record(index, e.to_string()))?;
        nodes.push(node);
    }
    Ok(nodes)
}

/// Write to a temp file next to the target, then rename into place.
///
/// The rename keeps partial output invisible even if the process dies
/// mid-write.
async fn write_atomic(path: &Path, contents: String) -> Result<(), ConvertError> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents)
        .await
        .map_err(|e| ConvertError::output_write(&tmp, e))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| ConvertError::output_write(path, e))?;

    Ok(())
}
