//! Project and target name sanitization
//!
//! Names end up as directory names, CMake identifiers and workspace file
//! names, so anything outside a conservative character set is rewritten.

/// Windows device names that are invalid as file names on any drive.
const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Directory names the generator itself creates; a project named after one
/// of these would collide with the emitted layout.
const RESERVED_SCAFFOLD_NAMES: &[&str] = &[
    "src", "include", "test", "libs", "build", "out", "project", "config", "utils", ".vscode",
    ".git",
];

/// Sanitize a project name. See [`sanitize`] for the rules.
pub fn sanitize_project_name(name: &str) -> String {
    sanitize(name, false)
}

/// Sanitize a target name. Targets additionally allow `+` (for names like
/// `math+sim`) and skip the scaffold-directory reservation list.
pub fn sanitize_target_name(name: &str) -> String {
    sanitize(name, true)
}

/// Rewrite `name` into a safe identifier:
///
/// - characters outside `[A-Za-z0-9._-]` (plus `+` for targets) become `-`
/// - runs of `-` collapse to one, leading/trailing `-` are trimmed
/// - for targets, runs of `+` collapse the same way
/// - a leading digit gets a `_` prefix
/// - the result is truncated to 255 characters
/// - reserved names (case-insensitive) and the empty string get a `_` prefix,
///   so the result is never empty
///
/// The function is idempotent: sanitizing an already sanitized name returns
/// it unchanged.
fn sanitize(name: &str, is_target: bool) -> String {
    let replaced: String = name
        .chars()
        .map(|ch| {
            let keep = ch.is_ascii_alphanumeric()
                || matches!(ch, '.' | '_' | '-')
                || (is_target && ch == '+');
            if keep {
                ch
            } else {
                '-'
            }
        })
        .collect();

    let collapsed = collapse_runs(&replaced, '-');
    let mut out = collapsed.trim_matches('-').to_string();

    if is_target {
        out = collapse_runs(&out, '+').trim_matches('+').to_string();
    }

    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    // Everything left is ASCII, so byte truncation is character truncation.
    out.truncate(255);

    // Truncation can expose a trailing separator that was mid-name before.
    while out.ends_with('-') || (is_target && out.ends_with('+')) {
        out.pop();
    }

    if is_reserved(&out, is_target) {
        out.insert(0, '_');
    }

    out
}

fn collapse_runs(input: &str, run_char: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch == run_char {
            if !in_run {
                out.push(ch);
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

fn is_reserved(name: &str, is_target: bool) -> bool {
    if name.is_empty() {
        return true;
    }
    if RESERVED_DEVICE_NAMES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(name))
    {
        return true;
    }
    !is_target
        && RESERVED_SCAFFOLD_NAMES
            .iter()
            .any(|r| r.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_disallowed_characters() {
        assert_eq!(sanitize_project_name("My Proj!"), "My-Proj");
        assert_eq!(sanitize_project_name("a/b\\c"), "a-b-c");
        assert_eq!(sanitize_project_name("héllo"), "h-llo");
    }

    #[test]
    fn test_collapses_and_trims_dashes() {
        assert_eq!(sanitize_project_name("--a---b--"), "a-b");
        assert_eq!(sanitize_project_name("a   b"), "a-b");
    }

    #[test]
    fn test_leading_digit_gets_underscore() {
        assert_eq!(sanitize_project_name("123bad"), "_123bad");
        assert_eq!(sanitize_project_name("1"), "_1");
    }

    #[test]
    fn test_reserved_names_case_insensitive() {
        assert_eq!(sanitize_project_name("src"), "_src");
        assert_eq!(sanitize_project_name("SRC"), "_SRC");
        assert_eq!(sanitize_project_name("Con"), "_Con");
        assert_eq!(sanitize_project_name("com5"), "_com5");
        assert_eq!(sanitize_project_name(".vscode"), "_.vscode");
    }

    #[test]
    fn test_scaffold_names_allowed_for_targets() {
        assert_eq!(sanitize_target_name("src"), "src");
        assert_eq!(sanitize_target_name("NUL"), "_NUL");
    }

    #[test]
    fn test_target_plus_handling() {
        assert_eq!(sanitize_target_name("math+sim"), "math+sim");
        assert_eq!(sanitize_target_name("my-lib++"), "my-lib");
        assert_eq!(sanitize_target_name("c+++x"), "c+x");
        assert_eq!(sanitize_target_name("+lib+"), "lib");
        // Project names treat '+' as any other disallowed character.
        assert_eq!(sanitize_project_name("my-lib++"), "my-lib");
    }

    #[test]
    fn test_only_disallowed_characters_never_empty() {
        assert_eq!(sanitize_project_name("!!!"), "_");
        assert_eq!(sanitize_project_name(""), "_");
        assert_eq!(sanitize_target_name("   "), "_");
    }

    #[test]
    fn test_truncates_to_255() {
        let long = "a".repeat(400);
        assert_eq!(sanitize_project_name(&long).len(), 255);
    }

    #[test]
    fn test_truncation_never_leaves_a_trailing_separator() {
        // The 255th character lands on the '-' that replaced the '!'.
        let input = format!("{}!b", "a".repeat(254));
        let once = sanitize_project_name(&input);
        assert_eq!(once, "a".repeat(254));
        assert_eq!(sanitize_project_name(&once), once);

        let input = format!("{}+b", "a".repeat(254));
        let once = sanitize_target_name(&input);
        assert_eq!(once, "a".repeat(254));
        assert_eq!(sanitize_target_name(&once), once);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "My Proj!",
            "123bad",
            "src",
            "",
            "!!!",
            "a   b--c",
            "CON",
            "normal-name_1.2",
        ];
        for input in inputs {
            let once = sanitize_project_name(input);
            assert_eq!(sanitize_project_name(&once), once, "input: {input:?}");
            let once = sanitize_target_name(input);
            assert_eq!(sanitize_target_name(&once), once, "target input: {input:?}");
        }
    }
}
