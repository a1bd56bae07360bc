use std::path::Path;

use crate::constants::OUTPUT_FILE_SUFFIX;

/// Returns the base name of the names file: its file name cut at the first '.'.
///
/// # Notes
/// - Directories in `names_path` are ignored
/// - `list.v2.txt` gives `list`, a dotfile such as `.names` gives an empty base
pub fn input_base_name(names_path: &Path) -> String {
    let file_name = names_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((base, _)) => base.to_string(),
        None => file_name,
    }
}

/// Returns the results file name for a surname and names file.
///
/// # Example
/// ```
/// use name_abbrevs::config::paths::output_file_name;
/// use std::path::Path;
///
/// assert_eq!(output_file_name("smith", Path::new("list.txt")), "smith_list_abbrevs.txt");
/// ```
pub fn output_file_name(surname: &str, names_path: &Path) -> String {
    format!(
        "{surname}_{}{OUTPUT_FILE_SUFFIX}",
        input_base_name(names_path)
    )
}
