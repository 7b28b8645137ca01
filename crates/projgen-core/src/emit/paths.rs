//! Layout decisions derived from the configuration
//!
//! Three toggles move directories around: the source group, the settings
//! group and the output directory. Everything that formats a path goes
//! through here so the CMake script, the workspace file and the emitted
//! tree all agree on where things are.

use crate::config::ProjectConfig;

/// Path prefixes shared by every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// `"<proj_name>/"` when `libs/`, `src/` and friends are grouped under
    /// a directory named after the project, empty otherwise.
    pub source_group: String,
    /// `"project/"` when `config/` and `utils/` are grouped, empty
    /// otherwise.
    pub settings_group: &'static str,
    /// `"build/"` when `out/` nests under `build/`, empty otherwise.
    pub out_prefix: &'static str,
    /// Where headers live relative to the source group: `src/include`,
    /// `include`, or plain `src` when there is no include directory.
    pub include_rel: &'static str,
}

impl ProjectPaths {
    pub fn of(conf: &ProjectConfig) -> Self {
        let source_group = if conf.has_proj_name_dir {
            format!("{}/", conf.proj_name)
        } else {
            String::new()
        };

        let include_rel = if conf.gen_include_dir {
            if conf.include_dir_inside_src {
                "src/include"
            } else {
                "include"
            }
        } else {
            "src"
        };

        Self {
            source_group,
            settings_group: if conf.has_proj_dir { "project/" } else { "" },
            out_prefix: if conf.out_in_build_dir { "build/" } else { "" },
            include_rel,
        }
    }

    /// The directory a debugged binary runs in, as VS Code spells it.
    pub fn launch_bin_dir(&self) -> String {
        format!("${{workspaceFolder}}/{}out/bin", self.out_prefix)
    }
}

/// `<proj_name>.code-workspace`.
pub fn workspace_file_name(conf: &ProjectConfig) -> String {
    format!("{}.code-workspace", conf.proj_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolver::{resolve, RawAnswers};

    fn conf_with(f: impl FnOnce(&mut RawAnswers)) -> ProjectConfig {
        let mut answers = RawAnswers {
            project_name: Some("demo".into()),
            target_type: Some(crate::config::TargetType::Executable),
            cpp_std: Some("C++17".into()),
            ..Default::default()
        };
        f(&mut answers);
        resolve(&answers).unwrap()
    }

    #[test]
    fn test_flat_layout_has_empty_prefixes() {
        let paths = ProjectPaths::of(&conf_with(|_| {}));
        assert_eq!(paths.source_group, "");
        assert_eq!(paths.settings_group, "");
        assert_eq!(paths.out_prefix, "");
        assert_eq!(paths.include_rel, "src");
    }

    #[test]
    fn test_grouped_layout_prefixes() {
        let paths = ProjectPaths::of(&conf_with(|a| {
            a.project_name_dir = true;
            a.project_dir = true;
            a.out_in_build_dir = true;
            a.include_dir = true;
        }));
        assert_eq!(paths.source_group, "demo/");
        assert_eq!(paths.settings_group, "project/");
        assert_eq!(paths.out_prefix, "build/");
        assert_eq!(paths.include_rel, "include");
        assert_eq!(paths.launch_bin_dir(), "${workspaceFolder}/build/out/bin");
    }

    #[test]
    fn test_include_inside_src() {
        let paths = ProjectPaths::of(&conf_with(|a| {
            a.include_dir = true;
            a.include_dir_inside_src = true;
        }));
        assert_eq!(paths.include_rel, "src/include");
    }

    #[test]
    fn test_workspace_file_name() {
        assert_eq!(
            workspace_file_name(&conf_with(|_| {})),
            "demo.code-workspace"
        );
    }
}
