/// Conventional file name marking an app entry point
pub const ENTRY_FILE_NAME: &str = "entry.js";

/// Joins the app name and entry name into a logical entry name (`app__entry`)
pub const ENTRY_NAME_SEPARATOR: &str = "__";

/// Environment variable holding extra module search paths
pub const NODE_PATH_VAR: &str = "NODE_PATH";

/// Separator between entries of a path list variable such as `NODE_PATH`
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_list_separator_matches_platform() {
        let joined = std::env::join_paths(["a", "b"]).unwrap();
        assert_eq!(joined.to_string_lossy(), format!("a{}b", PATH_LIST_SEPARATOR));
    }
}
