//! Parsing and rendering of import statements.
//!
//! Quick code forms accept imports as free-form pasted text, one statement
//! or bare path per line. Parsing normalizes that text into plain paths.

/// Parse free-form import text into an ordered list of import paths.
///
/// Strips the `import` keyword and trailing semicolons, trims whitespace,
/// drops blank lines and removes exact duplicates while preserving
/// first-seen order.
pub fn parse_imports(raw: &str) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    for line in raw.lines() {
        let mut path = line.trim();
        if let Some(rest) = path.strip_prefix("import ") {
            path = rest.trim_start();
        }
        let path = path.trim_end_matches(';').trim_end();
        if path.is_empty() {
            continue;
        }
        if !paths.iter().any(|p| p == path) {
            paths.push(path.to_string());
        }
    }
    paths
}

/// Render import paths back into statement form, one per line.
/// Returns `None` when there is nothing to render.
pub fn generate_imports_code(imports: &[String]) -> Option<String> {
    if imports.is_empty() {
        return None;
    }
    Some(
        imports
            .iter()
            .map(|path| format!("import {}", path))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Trim leading and trailing blank lines from pasted code.
/// Interior formatting is preserved verbatim; no re-indentation happens.
pub fn normalize_code(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let first = match lines.iter().position(|l| !l.trim().is_empty()) {
        Some(i) => i,
        None => return String::new(),
    };
    let last = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(first);
    lines[first..=last].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_statements_and_bare_paths() {
        let raw = "import androidx.compose.material3.Button\nandroidx.compose.ui.Modifier\n";
        assert_eq!(
            parse_imports(raw),
            vec![
                "androidx.compose.material3.Button".to_string(),
                "androidx.compose.ui.Modifier".to_string(),
            ]
        );
    }

    #[test]
    fn dedups_preserving_first_seen_order() {
        let raw = "import a.b.C\nimport a.b.C\nimport x.Y";
        assert_eq!(parse_imports(raw), vec!["a.b.C".to_string(), "x.Y".to_string()]);
    }

    #[test]
    fn strips_semicolons_and_blank_lines() {
        let raw = "\nimport a.b.C;\n\n   \nd.e.F;\n";
        assert_eq!(parse_imports(raw), vec!["a.b.C".to_string(), "d.e.F".to_string()]);
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse_imports("").is_empty());
        assert!(parse_imports("\n  \n").is_empty());
    }

    #[test]
    fn renders_statements_one_per_line() {
        let imports = vec!["a.b.C".to_string(), "x.Y".to_string()];
        assert_eq!(
            generate_imports_code(&imports),
            Some("import a.b.C\nimport x.Y".to_string())
        );
        assert_eq!(generate_imports_code(&[]), None);
    }

    #[test]
    fn normalize_trims_surrounding_blank_lines_only() {
        let raw = "\n\n    Button(\n        onClick = {}\n    )\n\n";
        assert_eq!(normalize_code(raw), "    Button(\n        onClick = {}\n    )");
    }

    #[test]
    fn normalize_of_blank_text_is_empty() {
        assert_eq!(normalize_code("\n   \n"), "");
    }
}
