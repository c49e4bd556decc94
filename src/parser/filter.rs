use std::path::Path;

/// Return true if the path is a regular file with a `.json` extension (any case)
pub fn is_json_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
