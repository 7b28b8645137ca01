//! Project emission
//!
//! [`plan`] turns a resolved [`ProjectConfig`] into an [`EmissionPlan`]
//! holding the complete file tree with every file's final contents. The
//! preview shown before confirmation and the files written afterwards both
//! come from that one tree.

pub mod cmake;
pub mod git;
pub mod paths;
pub mod tree;

use crate::config::ProjectConfig;
use crate::error::FatalError;
use crate::templates::{payloads, render, Slots};
use anyhow::Result;
use paths::ProjectPaths;
use std::fs;
use std::path::{Path, PathBuf};
use tree::{Entry, Node};

/// The fully planned project, ready to preview or write out.
#[derive(Debug, Clone)]
pub struct EmissionPlan {
    root: Node,
}

/// Plan the whole project tree for `conf`. Pure; nothing touches the
/// filesystem until [`EmissionPlan::materialize`].
pub fn plan(conf: &ProjectConfig) -> Result<EmissionPlan> {
    let paths = ProjectPaths::of(conf);
    let mut root = Node::dir(&conf.proj_name);

    if conf.init_git {
        root.push(Node::external_dir(".git"));
    }

    if conf.gen_vscode_files {
        root.push(
            Node::dir(".vscode")
                .with(Node::file("launch.json", launch_json(&paths)?))
                .with(Node::file("settings.json", payloads::SETTINGS_JSON))
                .with(Node::file("tasks.json", payloads::TASKS_JSON)),
        );
    }

    let mut build = Node::dir("build");
    if conf.out_in_build_dir {
        build.push(out_dir(conf));
        root.push(build);
    } else {
        root.push(build);
        root.push(out_dir(conf));
    }

    let config_dir = Node::dir("config")
        .with(Node::file("compiler_features.txt", ""))
        .with(Node::file("compiler_flags.yaml", flag_catalog(conf)?))
        .with(Node::file("definitions.txt", ""))
        .with(Node::file("linker_flags.txt", ""));
    let utils_dir = Node::dir("utils")
        .with(Node::file("fetch_flags.py", payloads::FETCH_FLAGS_PY))
        .with(Node::file("functions.cmake", functions_cmake(&paths)?));

    if conf.has_proj_dir {
        let mut project = Node::dir("project").with(config_dir).with(utils_dir);
        if conf.gen_workspace_file {
            project.push(Node::file(
                paths::workspace_file_name(conf),
                workspace_content(conf)?,
            ));
        }
        root.push(project);
    } else {
        root.push(config_dir);
        root.push(utils_dir);
    }

    if conf.has_proj_name_dir {
        let mut group = Node::dir(&conf.proj_name);
        for child in source_entries(conf) {
            group.push(child);
        }
        root.push(group);
    } else {
        for child in source_entries(conf) {
            root.push(child);
        }
    }

    root.push(
        Node::dir("docs")
            .with(Node::file("readme.md", payloads::DOC_README))
            .with(Node::file("building.md", payloads::DOC_BUILDING))
            .with(Node::file("configuration.md", payloads::DOC_CONFIGURATION))
            .with(Node::file("libraries.md", payloads::DOC_LIBRARIES)),
    );

    if conf.init_git {
        root.push(Node::file(".gitignore", gitignore_content(conf)?));
    }

    root.push(Node::file(
        "CMakeLists.txt",
        cmake::cmake_lists(conf, &paths)?,
    ));

    if conf.gen_readme {
        root.push(Node::file("README.md", format!("# {}", conf.proj_name)));
    }

    if conf.gen_workspace_file && !conf.has_proj_dir {
        root.push(Node::file(
            paths::workspace_file_name(conf),
            workspace_content(conf)?,
        ));
    }

    Ok(EmissionPlan { root })
}

impl EmissionPlan {
    /// The tree drawing shown before confirmation.
    pub fn preview(&self) -> String {
        tree::render_tree(&self.root)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Write the project under `base`; returns the project root directory.
    pub fn materialize(&self, base: &Path) -> Result<PathBuf, FatalError> {
        let root_path = base.join(&self.root.name);
        create_dir(&root_path)?;
        write_children(&self.root, &root_path)?;
        Ok(root_path)
    }
}

fn write_children(node: &Node, dir: &Path) -> Result<(), FatalError> {
    for child in &node.children {
        let path = dir.join(&child.name);
        match &child.entry {
            Entry::Dir => {
                create_dir(&path)?;
                write_children(child, &path)?;
            }
            Entry::ExternalDir => {}
            Entry::File(content) => {
                fs::write(&path, content).map_err(|source| FatalError::Write { path, source })?;
            }
        }
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), FatalError> {
    fs::create_dir(path).map_err(|source| FatalError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `out/bin`, `out/lib` and optionally `out/test`, each split by build type.
fn out_dir(conf: &ProjectConfig) -> Node {
    let by_build_type =
        |name: &str| Node::dir(name).with(Node::dir("Debug")).with(Node::dir("Release"));

    let mut out = Node::dir("out").with(by_build_type("bin")).with(by_build_type("lib"));
    if conf.include_tests {
        out.push(by_build_type("test"));
    }
    out
}

/// `libs/`, `src/` with the seed main file, and the optional `include/` and
/// `test/` directories. The caller decides whether they sit at the project
/// root or under a directory named after the project.
fn source_entries(conf: &ProjectConfig) -> Vec<Node> {
    let mut src = Node::dir("src");
    if conf.gen_include_dir && conf.include_dir_inside_src {
        src.push(Node::dir("include"));
    }
    if conf.use_cpp {
        src.push(Node::file("main.cpp", payloads::MAIN_CPP));
    } else {
        src.push(Node::file("main.c", payloads::MAIN_C));
    }

    let mut entries = vec![Node::dir("libs"), src];
    if conf.gen_include_dir && !conf.include_dir_inside_src {
        entries.push(Node::dir("include"));
    }
    if conf.include_tests {
        entries.push(Node::dir("test"));
    }
    entries
}

fn launch_json(paths: &ProjectPaths) -> Result<String> {
    render(
        payloads::LAUNCH_JSON,
        &Slots::new().set("BIN_DIR", paths.launch_bin_dir()),
    )
}

fn functions_cmake(paths: &ProjectPaths) -> Result<String> {
    render(
        payloads::FUNCTIONS_CMAKE,
        &Slots::new()
            .set("SETTINGS_PREFIX", paths.settings_group)
            .set("OUT_PREFIX", paths.out_prefix),
    )
}

/// The C-only diagnostics follow the C toggle: any project with C in it
/// gets them, mixed C/C++ included.
fn flag_catalog(conf: &ProjectConfig) -> Result<String> {
    let c_only = if conf.use_c { "true" } else { "false" };
    render(
        payloads::COMPILER_FLAGS_YAML,
        &Slots::new().set("C_ONLY", c_only),
    )
}

fn gitignore_content(conf: &ProjectConfig) -> Result<String> {
    let libs_prefix = if conf.has_proj_name_dir {
        format!("{}/", conf.proj_name)
    } else {
        String::new()
    };
    render(
        payloads::GITIGNORE,
        &Slots::new().set("LIBS_PREFIX", libs_prefix),
    )
}

fn workspace_content(conf: &ProjectConfig) -> Result<String> {
    // The workspace file sits inside project/ when that grouping is on, so
    // the project folder is one level up from it.
    let proj_path = if conf.has_proj_dir { "./.." } else { "." };
    let source_group = if conf.has_proj_name_dir {
        format!("{}/", conf.proj_name)
    } else {
        String::new()
    };
    let comment = if conf.add_dirs_to_workspace { "" } else { "// " };

    let include_block = if conf.gen_include_dir {
        let include_rel = if conf.include_dir_inside_src {
            "src/include"
        } else {
            "include"
        };
        render(
            payloads::WORKSPACE_INCLUDE_BLOCK,
            &Slots::new()
                .set("COMMENT", comment)
                .set("INCLUDE_PATH", format!("{proj_path}/{source_group}{include_rel}")),
        )?
    } else {
        String::new()
    };

    render(
        payloads::WORKSPACE_FILE,
        &Slots::new()
            .set("PROJ_NAME", conf.proj_name.clone())
            .set("PROJ_PATH", proj_path)
            .set("INCLUDE_BLOCK", include_block)
            .set("COMMENT", comment)
            .set("SRC_PATH", format!("{proj_path}/{source_group}src")),
    )
}
