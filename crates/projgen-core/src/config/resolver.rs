//! Answer collection and resolution
//!
//! Two ways in, one way out: answers come either from the interactive
//! question flow ([`collect`]) or from a YAML answers file
//! ([`RawAnswers`] deserialization), and both go through [`resolve`] to
//! apply the derivation rules and produce the one immutable
//! [`ProjectConfig`].

use crate::config::prompt::{message, Prompter};
use crate::config::sanitize::{sanitize_project_name, sanitize_target_name};
use crate::config::{CStd, CppStd, ProjectConfig, TargetType};
use crate::error::FatalError;
use anyhow::{Context, Result};
use serde::Deserialize;

const C_STANDARDS: [&str; 6] = ["C89", "C90", "C99", "C11", "C17", "C23"];
const CPP_STANDARDS: [&str; 7] = ["C++98", "C++11", "C++14", "C++17", "C++20", "C++23", "C++26"];

/// Raw, possibly partial answers.
///
/// `Option` fields correspond to questions that are skipped entirely when
/// their guard is false; plain booleans default to "no". An answers file
/// may set fields whose guards are off (say `commit_git` without
/// `init_git`); [`resolve`] forces those back to a consistent state rather
/// than rejecting the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAnswers {
    pub project_name: Option<String>,

    /// Defaults to the project name.
    pub target_name: Option<String>,

    pub target_type: Option<TargetType>,

    #[serde(default)]
    pub use_c: bool,

    /// Spelled standard, e.g. `"C89"` or `"17"`. Required when `use_c`.
    pub c_std: Option<String>,

    /// Only asked when C is included; forced on otherwise.
    pub use_cpp: Option<bool>,

    /// Spelled standard, e.g. `"C++20"`. Required when C++ ends up enabled.
    pub cpp_std: Option<String>,

    /// Only asked for C++-only projects.
    pub list_h_files: Option<bool>,

    #[serde(default)]
    pub include_dir: bool,

    #[serde(default)]
    pub include_dir_inside_src: bool,

    #[serde(default)]
    pub tests: bool,

    #[serde(default)]
    pub project_name_dir: bool,

    #[serde(default)]
    pub vscode_files: bool,

    #[serde(default)]
    pub workspace_file: bool,

    #[serde(default)]
    pub workspace_src_dirs: bool,

    #[serde(default)]
    pub project_dir: bool,

    #[serde(default)]
    pub out_in_build_dir: bool,

    #[serde(default)]
    pub readme: bool,

    #[serde(default)]
    pub init_git: bool,

    #[serde(default)]
    pub commit_git: bool,
}

/// Run the interactive question flow.
///
/// Questions whose guard is false are never asked. The returned answers
/// still go through [`resolve`] like any other source.
pub fn collect(prompter: &mut impl Prompter) -> Result<RawAnswers, FatalError> {
    let proj_name = sanitize_project_name(&prompter.read_text("Project name")?);

    let target_name = if prompter.read_bool("Target name matches project name")? {
        None
    } else {
        Some(prompter.read_text("Target name")?)
    };

    let target_type = match prompter.read_choice(
        "Target type",
        &["Executable", "Dynamic Library", "Static Library"],
    )? {
        0 => TargetType::Executable,
        1 => TargetType::DynamicLibrary,
        _ => TargetType::StaticLibrary,
    };

    let use_c = prompter.read_bool("Include C")?;

    let mut c_std = None;
    let mut use_cpp = None;
    if use_c {
        let idx = prompter.read_choice("C Standard", &C_STANDARDS)?;
        c_std = Some(C_STANDARDS[idx].to_string());
        use_cpp = Some(prompter.read_bool("Include C++")?);
    } else {
        message("Setting the language to C++");
    }

    let cpp_enabled = use_cpp.unwrap_or(!use_c);
    let mut cpp_std = None;
    if cpp_enabled {
        let idx = prompter.read_choice("C++ Standard", &CPP_STANDARDS)?;
        cpp_std = Some(CPP_STANDARDS[idx].to_string());
    }

    let mut list_h_files = None;
    if cpp_enabled && !use_c {
        list_h_files = Some(prompter.read_bool("Allow listing of .h header files")?);
    }

    let include_dir = prompter.read_bool("Add separate include directory")?;
    let mut include_dir_inside_src = false;
    if include_dir {
        include_dir_inside_src = prompter.read_bool("Place include directory inside src")?;
        if !include_dir_inside_src {
            message("Placing the include directory at the same level as src");
        }
    }

    let tests = prompter.read_bool("Include testing")?;

    let mention_include = include_dir && !include_dir_inside_src;
    let (joiner, tail) = match (mention_include, tests) {
        (true, true) => ("", ", 'include', and 'test'"),
        (true, false) => ("", ", and 'include'"),
        (false, true) => ("", ", and 'test'"),
        (false, false) => (" and", ""),
    };
    let project_name_dir = prompter.read_bool(&format!(
        "Group 'libs',{joiner} 'src'{tail} directories under a '{proj_name}' directory"
    ))?;

    let vscode_files = prompter.read_bool("Generate Visual Studio Code files")?;
    let mut workspace_file = false;
    let mut workspace_src_dirs = false;
    if vscode_files {
        workspace_file = prompter.read_bool("Generate workspace file")?;
        if workspace_file {
            let (dirs_phrase, under_phrase) = if include_dir {
                ("and 'include' directories", "these directories")
            } else {
                ("directory", "the source directory")
            };
            workspace_src_dirs = prompter.read_bool(&format!(
                "Add 'src' {dirs_phrase} to workspace (Warning: This could clutter the File \
                 Explorer and CMake Tools windows, you could also accidentally generate build \
                 files under {under_phrase} through CMake Tools)"
            ))?;
        }
    }

    let ws_mention = if workspace_file {
        " along with the workspace file "
    } else {
        " "
    };
    let project_dir = prompter.read_bool(&format!(
        "Group 'config' and 'utils' directories{ws_mention}under a 'project' directory"
    ))?;

    let out_in_build_dir =
        prompter.read_bool("Place the output directory ('out') inside the 'build' directory")?;
    let readme = prompter.read_bool("Add README.md")?;
    let init_git = prompter.read_bool("Initialize git")?;
    let mut commit_git = false;
    if init_git {
        commit_git = prompter.read_bool("Make initial commit")?;
    }

    Ok(RawAnswers {
        project_name: Some(proj_name),
        target_name,
        target_type: Some(target_type),
        use_c,
        c_std,
        use_cpp,
        cpp_std,
        list_h_files,
        include_dir,
        include_dir_inside_src,
        tests,
        project_name_dir,
        vscode_files,
        workspace_file,
        workspace_src_dirs,
        project_dir,
        out_in_build_dir,
        readme,
        init_git,
        commit_git,
    })
}

/// Apply the derivation rules and produce the resolved configuration.
///
/// Dependent flags are forced into consistency: a workspace file requires
/// the VS Code files, an initial commit requires an initialized repository,
/// `.h` listing is always on when C is in the project, and a project
/// without C is a C++ project.
pub fn resolve(answers: &RawAnswers) -> Result<ProjectConfig> {
    let raw_name = answers
        .project_name
        .as_deref()
        .context("a project name is required")?;
    let proj_name = sanitize_project_name(raw_name);

    let target_name = match answers.target_name.as_deref() {
        Some(raw) => sanitize_target_name(raw),
        None => proj_name.clone(),
    };

    let target_type = answers.target_type.context("a target type is required")?;

    let use_c = answers.use_c;
    let use_cpp = if use_c {
        answers.use_cpp.unwrap_or(false)
    } else {
        true
    };

    let c_std = if use_c {
        let spelled = answers
            .c_std
            .as_deref()
            .context("a C standard is required when C is included")?;
        Some(CStd::parse(spelled).with_context(|| format!("unrecognized C standard: {spelled}"))?)
    } else {
        None
    };

    let cpp_std = if use_cpp {
        let spelled = answers
            .cpp_std
            .as_deref()
            .context("a C++ standard is required when C++ is included")?;
        Some(
            CppStd::parse(spelled)
                .with_context(|| format!("unrecognized C++ standard: {spelled}"))?,
        )
    } else {
        None
    };

    let gen_include_dir = answers.include_dir;
    let gen_vscode_files = answers.vscode_files;
    let gen_workspace_file = gen_vscode_files && answers.workspace_file;
    let init_git = answers.init_git;

    Ok(ProjectConfig {
        proj_name,
        target_name,
        target_type,
        use_c,
        c_std,
        use_cpp,
        cpp_std,
        list_h_files: use_c || answers.list_h_files.unwrap_or(false),
        gen_include_dir,
        include_dir_inside_src: gen_include_dir && answers.include_dir_inside_src,
        include_tests: answers.tests,
        has_proj_name_dir: answers.project_name_dir,
        gen_vscode_files,
        gen_workspace_file,
        add_dirs_to_workspace: gen_workspace_file && answers.workspace_src_dirs,
        has_proj_dir: answers.project_dir,
        out_in_build_dir: answers.out_in_build_dir,
        gen_readme: answers.readme,
        init_git,
        commit_git: init_git && answers.commit_git,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::prompt::LinePrompter;
    use std::io::Cursor;

    fn scripted(script: &str) -> LinePrompter<Cursor<Vec<u8>>> {
        LinePrompter::new(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn test_collect_cpp_only_flow() {
        // name, target matches, type, C?, C++ std, .h listing, include dir,
        // tests, grouping, vscode, project dir, out-in-build, readme, git
        let script = "My Proj!\ny\n1\nn\n4\nn\nn\nn\nn\nn\nn\nn\nn\nn\n";
        let answers = collect(&mut scripted(script)).unwrap();
        let conf = resolve(&answers).unwrap();

        assert_eq!(conf.proj_name, "My-Proj");
        assert_eq!(conf.target_name, "My-Proj");
        assert_eq!(conf.target_type, TargetType::Executable);
        assert!(!conf.use_c);
        assert!(conf.use_cpp);
        assert_eq!(conf.c_std, None);
        assert_eq!(conf.cpp_std, Some(CppStd::Cpp17));
        assert!(!conf.list_h_files);
        assert!(!conf.gen_include_dir);
        assert!(!conf.include_tests);
        assert!(!conf.gen_vscode_files);
        assert!(!conf.has_proj_name_dir);
        assert!(!conf.has_proj_dir);
        assert!(!conf.out_in_build_dir);
        assert!(!conf.gen_readme);
        assert!(!conf.init_git);
    }

    #[test]
    fn test_collect_c_and_cpp_flow_asks_both_standards() {
        // name, target matches: n, target name, type, C?, C std (C89),
        // C++?, C++ std, include dir, inside src, tests, grouping, vscode,
        // workspace, ws dirs, project dir, out-in-build, readme, git, commit
        let script = "engine\nn\nengine+core\n3\ny\n1\ny\n5\ny\ny\ny\ny\ny\ny\nn\ny\ny\ny\ny\ny\n";
        let answers = collect(&mut scripted(script)).unwrap();
        let conf = resolve(&answers).unwrap();

        assert_eq!(conf.target_name, "engine+core");
        assert_eq!(conf.target_type, TargetType::StaticLibrary);
        assert!(conf.use_c && conf.use_cpp);
        // C89 normalizes to C90.
        assert_eq!(conf.c_std, Some(CStd::C90));
        assert_eq!(conf.cpp_std, Some(CppStd::Cpp20));
        // Forced on whenever C is present; never asked.
        assert!(conf.list_h_files);
        assert!(conf.include_dir_inside_src);
        assert!(conf.include_tests);
        assert!(conf.gen_workspace_file);
        assert!(!conf.add_dirs_to_workspace);
        assert!(conf.has_proj_dir);
        assert!(conf.commit_git);
    }

    #[test]
    fn test_resolve_no_c_forces_cpp() {
        let answers = RawAnswers {
            project_name: Some("demo".into()),
            target_type: Some(TargetType::Executable),
            use_c: false,
            cpp_std: Some("C++17".into()),
            ..Default::default()
        };
        let conf = resolve(&answers).unwrap();
        assert!(conf.use_cpp);
        assert_eq!(conf.c_std, None);
    }

    #[test]
    fn test_resolve_forces_dependent_flags_off() {
        let answers = RawAnswers {
            project_name: Some("demo".into()),
            target_type: Some(TargetType::Executable),
            cpp_std: Some("C++17".into()),
            workspace_file: true,     // but no vscode_files
            workspace_src_dirs: true, // and so no workspace either
            commit_git: true,         // but no init_git
            include_dir_inside_src: true, // but no include_dir
            ..Default::default()
        };
        let conf = resolve(&answers).unwrap();
        assert!(!conf.gen_workspace_file);
        assert!(!conf.add_dirs_to_workspace);
        assert!(!conf.commit_git);
        assert!(!conf.include_dir_inside_src);
    }

    #[test]
    fn test_resolve_scenario_d_c89_normalizes() {
        let answers = RawAnswers {
            project_name: Some("legacy".into()),
            target_type: Some(TargetType::Executable),
            use_c: true,
            c_std: Some("C89".into()),
            ..Default::default()
        };
        let conf = resolve(&answers).unwrap();
        assert_eq!(conf.c_std, Some(CStd::C90));
        assert_eq!(conf.c_std.unwrap().year(), "90");
        // C alone is fine; C++ stays off.
        assert!(!conf.use_cpp);
        assert_eq!(conf.cpp_std, None);
    }

    #[test]
    fn test_resolve_requires_name_and_target_type() {
        assert!(resolve(&RawAnswers::default()).is_err());

        let missing_type = RawAnswers {
            project_name: Some("demo".into()),
            cpp_std: Some("C++17".into()),
            ..Default::default()
        };
        assert!(resolve(&missing_type).is_err());
    }

    #[test]
    fn test_resolve_sanitizes_names() {
        let answers = RawAnswers {
            project_name: Some("123 bad name".into()),
            target_name: Some("src".into()),
            target_type: Some(TargetType::DynamicLibrary),
            cpp_std: Some("C++23".into()),
            ..Default::default()
        };
        let conf = resolve(&answers).unwrap();
        assert_eq!(conf.proj_name, "_123-bad-name");
        // "src" is only reserved for project names, not targets.
        assert_eq!(conf.target_name, "src");
    }

    #[test]
    fn test_raw_answers_from_yaml() {
        let yaml = "\
project_name: sandbox
target_type: static-library
use_c: true
c_std: \"17\"
tests: true
init_git: true
commit_git: true
";
        let answers: RawAnswers = serde_yaml::from_str(yaml).unwrap();
        let conf = resolve(&answers).unwrap();
        assert_eq!(conf.target_type, TargetType::StaticLibrary);
        assert_eq!(conf.c_std, Some(CStd::C17));
        assert!(conf.include_tests);
        assert!(conf.commit_git);
    }

    #[test]
    fn test_raw_answers_rejects_unknown_fields() {
        let yaml = "project_name: x\nnot_a_field: true\n";
        assert!(serde_yaml::from_str::<RawAnswers>(yaml).is_err());
    }
}
