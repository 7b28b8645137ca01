//! Project configuration: the resolved record driving generation
//!
//! A [`ProjectConfig`] is built exactly once, from validated answers, and is
//! never mutated afterwards. Everything the emitter produces is a pure
//! function of this value.

pub mod prompt;
pub mod resolver;
pub mod sanitize;

use serde::{Deserialize, Serialize};

/// What kind of CMake target the project registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetType {
    Executable,
    DynamicLibrary,
    StaticLibrary,
}

impl TargetType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetType::Executable => "Executable",
            TargetType::DynamicLibrary => "Dynamic Library",
            TargetType::StaticLibrary => "Static Library",
        }
    }
}

/// C language standard. C89 is folded into C90: they name the same standard
/// and CMake only accepts `90`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CStd {
    C90,
    C99,
    C11,
    C17,
    C23,
}

impl CStd {
    /// Parse a user-facing spelling: `"C89"`, `"c90"`, `"99"`, ...
    pub fn parse(input: &str) -> Option<Self> {
        let digits = input.trim().trim_start_matches(['c', 'C']);
        match digits {
            "89" | "90" => Some(CStd::C90),
            "99" => Some(CStd::C99),
            "11" => Some(CStd::C11),
            "17" => Some(CStd::C17),
            "23" => Some(CStd::C23),
            _ => None,
        }
    }

    /// The value CMake expects in `CMAKE_C_STANDARD`.
    pub fn year(&self) -> &'static str {
        match self {
            CStd::C90 => "90",
            CStd::C99 => "99",
            CStd::C11 => "11",
            CStd::C17 => "17",
            CStd::C23 => "23",
        }
    }
}

/// C++ language standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CppStd {
    Cpp98,
    Cpp11,
    Cpp14,
    Cpp17,
    Cpp20,
    Cpp23,
    Cpp26,
}

impl CppStd {
    /// Parse a user-facing spelling: `"C++17"`, `"cpp20"`, `"14"`, ...
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("c++")
            .or_else(|| lowered.strip_prefix("cpp"))
            .or_else(|| lowered.strip_prefix('c'))
            .unwrap_or(&lowered);
        match digits {
            "98" => Some(CppStd::Cpp98),
            "11" => Some(CppStd::Cpp11),
            "14" => Some(CppStd::Cpp14),
            "17" => Some(CppStd::Cpp17),
            "20" => Some(CppStd::Cpp20),
            "23" => Some(CppStd::Cpp23),
            "26" => Some(CppStd::Cpp26),
            _ => None,
        }
    }

    /// The value CMake expects in `CMAKE_CXX_STANDARD`.
    pub fn year(&self) -> &'static str {
        match self {
            CppStd::Cpp98 => "98",
            CppStd::Cpp11 => "11",
            CppStd::Cpp14 => "14",
            CppStd::Cpp17 => "17",
            CppStd::Cpp20 => "20",
            CppStd::Cpp23 => "23",
            CppStd::Cpp26 => "26",
        }
    }
}

/// The fully resolved, immutable set of decisions driving generation.
///
/// Invariants (enforced by [`resolver::resolve`]):
/// - `proj_name` and `target_name` are sanitized and non-empty
/// - at least one of `use_c` / `use_cpp` is true
/// - `c_std` is `Some` iff `use_c`; `cpp_std` is `Some` iff `use_cpp`
/// - `list_h_files` is true whenever `use_c` is
/// - `include_dir_inside_src` implies `gen_include_dir`
/// - `gen_workspace_file` implies `gen_vscode_files`
/// - `add_dirs_to_workspace` implies `gen_workspace_file`
/// - `commit_git` implies `init_git`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Sanitized project name; also the name of the root directory.
    pub proj_name: String,
    /// Sanitized CMake target name.
    pub target_name: String,
    pub target_type: TargetType,
    pub use_c: bool,
    pub c_std: Option<CStd>,
    pub use_cpp: bool,
    pub cpp_std: Option<CppStd>,
    /// Whether the CMake script globs `.h` headers. Forced on when C is in
    /// the project; a user choice for C++-only projects.
    pub list_h_files: bool,
    pub gen_include_dir: bool,
    /// Place `include/` under `src/` instead of beside it. Only meaningful
    /// when `gen_include_dir` is set.
    pub include_dir_inside_src: bool,
    pub include_tests: bool,
    /// Group `libs/`, `src/` (and `include/`, `test/`) under a directory
    /// named after the project.
    pub has_proj_name_dir: bool,
    pub gen_vscode_files: bool,
    pub gen_workspace_file: bool,
    /// Add the source (and include) directories as extra workspace folders.
    pub add_dirs_to_workspace: bool,
    /// Group `config/` and `utils/` (and the workspace file) under
    /// `project/`.
    pub has_proj_dir: bool,
    /// Nest `out/` under `build/` instead of beside it.
    pub out_in_build_dir: bool,
    pub gen_readme: bool,
    pub init_git: bool,
    pub commit_git: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_std_parse_normalizes_c89() {
        assert_eq!(CStd::parse("C89"), Some(CStd::C90));
        assert_eq!(CStd::parse("89"), Some(CStd::C90));
        assert_eq!(CStd::parse("C90"), Some(CStd::C90));
        assert_eq!(CStd::parse("c17"), Some(CStd::C17));
        assert_eq!(CStd::parse("C80"), None);
    }

    #[test]
    fn test_cpp_std_parse_spellings() {
        assert_eq!(CppStd::parse("C++17"), Some(CppStd::Cpp17));
        assert_eq!(CppStd::parse("cpp20"), Some(CppStd::Cpp20));
        assert_eq!(CppStd::parse("98"), Some(CppStd::Cpp98));
        assert_eq!(CppStd::parse("C++12"), None);
    }

    #[test]
    fn test_target_type_kebab_case_serde() {
        let t: TargetType = serde_yaml::from_str("dynamic-library").unwrap();
        assert_eq!(t, TargetType::DynamicLibrary);
        let t: TargetType = serde_yaml::from_str("executable").unwrap();
        assert_eq!(t, TargetType::Executable);
    }
}
