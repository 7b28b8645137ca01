//! End-to-end emission: plan a project, write it out, inspect the disk.

use projgen_core::config::resolver::{resolve, RawAnswers};
use projgen_core::config::{ProjectConfig, TargetType};
use projgen_core::emit;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn conf_with(f: impl FnOnce(&mut RawAnswers)) -> ProjectConfig {
    let mut answers = RawAnswers {
        project_name: Some("demo".into()),
        target_type: Some(TargetType::Executable),
        cpp_std: Some("C++17".into()),
        ..Default::default()
    };
    f(&mut answers);
    resolve(&answers).unwrap()
}

/// Every path under `root`, relative, sorted, directories with a trailing
/// slash.
fn rel_paths(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let mut rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            if entry.file_type().is_dir() {
                rel.push('/');
            }
            rel
        })
        .collect();
    paths.sort();
    paths
}

#[test]
fn test_flat_cpp_executable_writes_exactly_the_planned_files() {
    let dir = tempfile::tempdir().unwrap();
    let conf = conf_with(|_| {});
    let root = emit::plan(&conf).unwrap().materialize(dir.path()).unwrap();

    let mut expected: Vec<String> = [
        "CMakeLists.txt",
        "build/",
        "config/",
        "config/compiler_features.txt",
        "config/compiler_flags.yaml",
        "config/definitions.txt",
        "config/linker_flags.txt",
        "docs/",
        "docs/building.md",
        "docs/configuration.md",
        "docs/libraries.md",
        "docs/readme.md",
        "libs/",
        "out/",
        "out/bin/",
        "out/bin/Debug/",
        "out/bin/Release/",
        "out/lib/",
        "out/lib/Debug/",
        "out/lib/Release/",
        "src/",
        "src/main.cpp",
        "utils/",
        "utils/fetch_flags.py",
        "utils/functions.cmake",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    expected.sort();

    assert_eq!(rel_paths(&root), expected);
}

#[test]
fn test_everything_on_layout() {
    let dir = tempfile::tempdir().unwrap();
    let conf = conf_with(|a| {
        a.use_c = true;
        a.c_std = Some("C99".into());
        a.use_cpp = Some(true);
        a.include_dir = true;
        a.tests = true;
        a.project_name_dir = true;
        a.vscode_files = true;
        a.workspace_file = true;
        a.workspace_src_dirs = true;
        a.project_dir = true;
        a.out_in_build_dir = true;
        a.readme = true;
        a.init_git = true;
        a.commit_git = true;
    });
    let plan = emit::plan(&conf).unwrap();
    let root = plan.materialize(dir.path()).unwrap();

    assert!(root.join(".vscode/launch.json").is_file());
    assert!(root.join(".vscode/settings.json").is_file());
    assert!(root.join(".vscode/tasks.json").is_file());
    assert!(root.join("build/out/bin/Debug").is_dir());
    assert!(root.join("build/out/test/Release").is_dir());
    assert!(!root.join("out").exists());
    assert!(root.join("project/config/compiler_flags.yaml").is_file());
    assert!(root.join("project/utils/functions.cmake").is_file());
    assert!(root.join("project/demo.code-workspace").is_file());
    assert!(root.join("demo/libs").is_dir());
    assert!(root.join("demo/src/main.cpp").is_file());
    assert!(root.join("demo/include").is_dir());
    assert!(root.join("demo/test").is_dir());
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("README.md").is_file());

    // `.git/` is in the preview but not created by the materializer.
    assert!(plan.preview().contains("├── .git/\n"));
    assert!(!root.join(".git").exists());

    // Out dir nests under build, and the debugger config follows it.
    let launch = fs::read_to_string(root.join(".vscode/launch.json")).unwrap();
    assert!(launch.contains("\"cwd\": \"${workspaceFolder}/build/out/bin\""));
    assert!(!launch.contains("{{"));

    // Helper functions point at the grouped settings dirs and nested out.
    let functions = fs::read_to_string(root.join("project/utils/functions.cmake")).unwrap();
    assert!(functions.contains("${CMAKE_SOURCE_DIR}/project/utils/fetch_flags.py"));
    assert!(functions.contains("${CMAKE_SOURCE_DIR}/build/out/bin"));

    // The gitignore keeps bundled libraries under the grouped source dir.
    let gitignore = fs::read_to_string(root.join(".gitignore")).unwrap();
    assert!(gitignore.contains("!demo/libs/*/lib/*.a"));
    assert!(gitignore.contains("!demo/libs/*/lib/*.dylib"));

    // Workspace folders are live (not commented) and sit one level up.
    let workspace = fs::read_to_string(root.join("project/demo.code-workspace")).unwrap();
    assert!(workspace.contains("\"path\": \"./..\""));
    assert!(workspace.contains("\"path\": \"./../demo/src\""));
    assert!(workspace.contains("\"path\": \"./../demo/include\""));
    assert!(!workspace.contains("//"));

    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# demo"
    );

    // CMakeLists agrees with where the files actually are.
    let cmake = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains("include(\"${CMAKE_SOURCE_DIR}/project/utils/functions.cmake\")"));
    assert!(cmake.contains("set(SOURCE_ROOT \"${CMAKE_SOURCE_DIR}/demo\")"));
    assert!(cmake.contains("LANGUAGES C CXX)"));
    assert!(cmake.contains("set(CMAKE_C_STANDARD 99)"));
    assert!(cmake.contains("add_test(NAME \"tests\" COMMAND \"tests\")"));
}

#[test]
fn test_out_test_dirs_only_with_testing() {
    let dir = tempfile::tempdir().unwrap();
    let with_tests = conf_with(|a| a.tests = true);
    let root = emit::plan(&with_tests)
        .unwrap()
        .materialize(dir.path())
        .unwrap();
    assert!(root.join("out/test/Debug").is_dir());
    assert!(root.join("out/test/Release").is_dir());
    assert!(root.join("test").is_dir());
}

#[test]
fn test_c_only_project_seeds_main_c_and_enables_c_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let conf = conf_with(|a| {
        a.use_c = true;
        a.c_std = Some("C11".into());
        a.use_cpp = Some(false);
    });
    let root = emit::plan(&conf).unwrap().materialize(dir.path()).unwrap();

    assert!(root.join("src/main.c").is_file());
    assert!(!root.join("src/main.cpp").exists());

    let flags = fs::read_to_string(root.join("config/compiler_flags.yaml")).unwrap();
    let strict = flags
        .split("- flag: \"-Wstrict-prototypes\"")
        .nth(1)
        .unwrap();
    assert!(strict[..strict.find("- flag").unwrap()].contains("enabled: true"));
}

#[test]
fn test_preview_matches_materialized_tree() {
    let dir = tempfile::tempdir().unwrap();
    let conf = conf_with(|a| {
        a.include_dir = true;
        a.include_dir_inside_src = true;
        a.vscode_files = true;
    });
    let plan = emit::plan(&conf).unwrap();
    let preview = plan.preview();
    let root = plan.materialize(dir.path()).unwrap();

    // Every file on disk shows up in the preview drawing by name.
    for path in rel_paths(&root) {
        let name = path.trim_end_matches('/').rsplit('/').next().unwrap();
        assert!(
            preview.contains(name),
            "{name} is on disk but missing from the preview"
        );
    }
    assert!(preview.starts_with("demo/\n"));
    assert!(preview.contains("├── include/\n"));
    assert!(preview.contains("└── main.cpp\n"));
}
