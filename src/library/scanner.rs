//! Listing of saved drawings.

use std::path::Path;

use walkdir::WalkDir;

/// Names of the drawings directly inside `root`, i.e. files ending in
/// `.{extension}` with that suffix removed. Sorted; subdirectories are not
/// searched.
pub fn scan_drawings(root: &Path, extension: &str) -> Vec<String> {
    if !root.is_dir() {
        return Vec::new();
    }

    let suffix = format!(".{}", extension);
    let mut names: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let file_name = e.file_name().to_str()?;
            let name = file_name.strip_suffix(&suffix)?;
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect();

    names.sort();
    names
}
