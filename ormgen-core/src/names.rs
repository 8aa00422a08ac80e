//! Bare class names and generated file paths.
//!
//! Both functions are pure string transforms. They never fail and never
//! touch the filesystem: rejecting empty or reserved results is left to the
//! caller.

/// Component delimiter of dot-notation class names (`Model.Base.User`).
pub const DOT: char = '.';

/// Component delimiter of namespaced class names (`Model\Base\User`).
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Directory separator used in generated file paths.
pub const PATH_SEPARATOR: char = '/';

/// Get the bare class name from a qualified name.
///
/// A dot anywhere in the name wins over the namespace separator, so
/// `a\b.c` yields `c`. A name ending in a delimiter yields an empty string.
///
/// ```
/// use ormgen_core::bare_class_name;
///
/// assert_eq!(bare_class_name(Some("Model.Base.UserPeer")), Some("UserPeer"));
/// assert_eq!(bare_class_name(Some("Model\\Base\\User")), Some("User"));
/// assert_eq!(bare_class_name(Some("User")), Some("User"));
/// assert_eq!(bare_class_name(None), None);
/// ```
pub fn bare_class_name(qualified: Option<&str>) -> Option<&str> {
    let name = qualified?;
    let bare = name
        .rsplit_once(DOT)
        .or_else(|| name.rsplit_once(NAMESPACE_SEPARATOR))
        .map_or(name, |(_, tail)| tail);
    Some(bare)
}

/// Build the output path for a generated file.
///
/// Without a class name the prefix is already the full stem of the file
/// (e.g. a package-level file) and only the extension is appended.
///
/// ```
/// use ormgen_core::build_file_path;
///
/// assert_eq!(build_file_path("generated/model", Some("User"), ".php"), "generated/model/User.php");
/// assert_eq!(build_file_path("", Some("User"), ".php"), "User.php");
/// assert_eq!(build_file_path("generated/map", None, ".php"), "generated/map.php");
/// ```
pub fn build_file_path(prefix: &str, classname: Option<&str>, extension: &str) -> String {
    let Some(classname) = classname else {
        return format!("{}{}", prefix, extension);
    };

    let mut path = String::with_capacity(prefix.len() + classname.len() + extension.len() + 1);
    path.push_str(prefix);
    if !prefix.is_empty() {
        path.push(PATH_SEPARATOR);
    }
    path.push_str(classname);
    path.push_str(extension);
    path
}
