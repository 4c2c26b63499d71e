//! File-extension rules shared by engine selection, reference resolution,
//! and layout lookup.
//!
//! Three different notions of "extension" are in play:
//!
//! | Function                 | `page.html.tera` | Used for                     |
//! |--------------------------|------------------|------------------------------|
//! | [`dialect_extension`]    | `tera`           | picking the template engine  |
//! | [`inherited_extension`]  | `.html.tera`     | extensionless references     |
//! | [`format_extension`]     | `html`           | content type of the output   |

use std::path::Path;

/// Simple trailing extension, lowercased. Engine selection only ever looks at
/// this token.
pub fn dialect_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Whether a reference name already spells out an extension.
///
/// An extension token is two to four ASCII letters or digits after the last
/// dot of the final segment (`header.tera`, `nav.j2`).
pub fn has_explicit_extension(name: &str) -> bool {
    let segment = name.rsplit('/').next().unwrap_or(name);
    match segment.rsplit_once('.') {
        Some((_, token)) => is_extension_token(token),
        None => false,
    }
}

/// Extension an extensionless reference inherits from the file currently
/// rendering: the compound form when present (`.html.tera`), otherwise the
/// simple one (`.tera`), otherwise nothing.
pub fn inherited_extension(path: &Path) -> String {
    let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return String::new();
    };

    let parts: Vec<&str> = file_name.split('.').collect();
    if let [stem @ .., format, dialect] = parts.as_slice() {
        if !stem.is_empty() && is_extension_token(format) && is_extension_token(dialect) {
            return format!(".{format}.{dialect}");
        }
    }

    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Output-format token in front of the dialect extension (`css` for
/// `site.css.tera`), lowercased.
pub fn format_extension(path: &Path) -> Option<String> {
    let stem = Path::new(path.file_stem()?);
    let format = stem.extension()?.to_string_lossy().to_ascii_lowercase();
    is_extension_token(&format).then_some(format)
}

fn is_extension_token(token: &str) -> bool {
    (2..=4).contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_is_lowercased_trailing_token() {
        assert_eq!(
            dialect_extension(Path::new("/a/page.html.TERA")).as_deref(),
            Some("tera")
        );
        assert_eq!(dialect_extension(Path::new("/a/README")), None);
    }

    #[test]
    fn explicit_extension_detection() {
        assert!(has_explicit_extension("header.tera"));
        assert!(has_explicit_extension("shared/nav.j2"));
        assert!(has_explicit_extension("/shared/nav.html"));
        assert!(!has_explicit_extension("header"));
        assert!(!has_explicit_extension("v1.0/header"));
        assert!(!has_explicit_extension("notes.markdown"));
    }

    #[test]
    fn inherited_prefers_compound_extension() {
        assert_eq!(inherited_extension(Path::new("/a/page.html.tera")), ".html.tera");
        assert_eq!(inherited_extension(Path::new("/a/page.tera")), ".tera");
        assert_eq!(inherited_extension(Path::new("/a/_nav.j2")), ".j2");
        assert_eq!(inherited_extension(Path::new("/a/Makefile")), "");
    }

    #[test]
    fn two_token_name_is_not_compound() {
        // "html" here is the stem, not a format extension.
        assert_eq!(inherited_extension(Path::new("/a/html.tera")), ".tera");
    }

    #[test]
    fn format_extension_reads_token_before_dialect() {
        assert_eq!(
            format_extension(Path::new("/a/site.css.tera")).as_deref(),
            Some("css")
        );
        assert_eq!(format_extension(Path::new("/a/page.tera")), None);
    }
}
