//! Domain constants shared across layers.

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Connector between a class-like and one of its members.
pub const MEMBER_CONNECTOR: &str = "::";

/// Name given to a project when none was supplied.
pub const DEFAULT_PROJECT_NAME: &str = "Untitled project";

/// File extensions recognised as PHP source.
pub const PHP_FILE_EXTENSIONS: &[&str] = &["php", "php3", "phtml", "inc"];

/// Check whether a path carries a PHP source extension.
pub fn is_php_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PHP_FILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
