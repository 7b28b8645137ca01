//! CMakeLists.txt assembly
//!
//! Builds the config-dependent fragments (languages, standards, globs,
//! target registration) and renders them into the skeleton payload.

use crate::config::{ProjectConfig, TargetType};
use crate::emit::paths::ProjectPaths;
use crate::templates::{payloads, render, Slots};
use anyhow::Result;

const CMAKE_ROOT: &str = "${CMAKE_SOURCE_DIR}/";
const COMMON_PARAMS: &str = "\"${HEADERS}\" \"${INCLUDE_DIRS}\" \"${LINK_LIBS}\" \"${DY_LIBS}\" \
                             \"${DEFS}\" \"${FLAGS}\" \"${FEATURES}\" \"${LINKER_FLAGS}\"";

pub fn cmake_lists(conf: &ProjectConfig, paths: &ProjectPaths) -> Result<String> {
    let (source_root_set, source_root) = if conf.has_proj_name_dir {
        (
            format!("\nset(SOURCE_ROOT \"{CMAKE_ROOT}{}\")\n", conf.proj_name),
            "${SOURCE_ROOT}/".to_string(),
        )
    } else {
        (String::new(), CMAKE_ROOT.to_string())
    };

    let lib_dirs = format!("{source_root}libs/*/");
    let lib_files = format!("{lib_dirs}lib/*");
    let link_libs_glob = format!("\"{lib_files}.a\" \"{lib_files}.lib\"");
    let dy_libs_glob = format!("\"{lib_files}.so\" \"{lib_files}.dll\" \"{lib_files}.dylib\"");
    let include_dirs_glob = format!("\"{lib_dirs}include\"");

    let settings_root = format!("{CMAKE_ROOT}{}", paths.settings_group);
    let functions_path = format!("{settings_root}utils/functions.cmake");
    let config_path = format!("{settings_root}config/");

    let add_include_dir = if conf.gen_include_dir {
        format!(
            "\nlist(APPEND INCLUDE_DIRS \"{source_root}{}\")\n",
            paths.include_rel
        )
    } else {
        String::new()
    };

    let mut languages = String::new();
    let mut standards = String::new();
    let mut header_globs = String::new();
    let mut source_globs = String::new();
    let mut test_glob = String::from("\nfile(GLOB_RECURSE TESTS");

    if !conf.use_c && conf.list_h_files {
        header_globs.push_str(&format!(" \"{source_root}{}/*.h\"", paths.include_rel));
    }

    if let Some(c_std) = conf.c_std {
        languages.push_str(" C");
        standards.push_str(&format!(
            "set(CMAKE_C_STANDARD {})\nset(CMAKE_C_STANDARD_REQUIRED ON)\n",
            c_std.year()
        ));
        header_globs.push_str(&format!(" \"{source_root}{}/*.h\"", paths.include_rel));
        source_globs.push_str(&format!(" \"{source_root}src/*.c\""));
        test_glob.push_str(&format!(" \"{source_root}test/*.c\""));
    }

    if let Some(cpp_std) = conf.cpp_std {
        languages.push_str(" CXX");
        standards.push_str(&format!(
            "set(CMAKE_CXX_STANDARD {})\nset(CMAKE_CXX_STANDARD_REQUIRED ON)\n",
            cpp_std.year()
        ));
        header_globs.push_str(&format!(" \"{source_root}{}/*.hpp\"", paths.include_rel));
        source_globs.push_str(&format!(" \"{source_root}src/*.cpp\""));
        test_glob.push_str(&format!(" \"{source_root}test/*.cpp\""));
    }

    let test_glob = if conf.include_tests {
        test_glob + ")"
    } else {
        String::new()
    };

    let add_target = match conf.target_type {
        TargetType::Executable => {
            format!("add_exec_target(\"${{TARGET}}\" \"${{SOURCE}}\" {COMMON_PARAMS} FALSE)")
        }
        TargetType::DynamicLibrary => {
            format!("add_lib_target(\"${{TARGET}}\" \"${{SOURCE}}\" {COMMON_PARAMS} TRUE)")
        }
        TargetType::StaticLibrary => {
            format!("add_lib_target(\"${{TARGET}}\" \"${{SOURCE}}\" {COMMON_PARAMS} FALSE)")
        }
    };

    let add_test = if conf.include_tests {
        format!(
            "\nadd_exec_target(\"tests\" \"${{TESTS}}\" {COMMON_PARAMS} TRUE)\n\n\
             enable_testing()\n\
             add_test(NAME \"tests\" COMMAND \"tests\")"
        )
    } else {
        String::new()
    };

    let slots = Slots::new()
        .set("FUNCTIONS_PATH", functions_path)
        .set("PROJ_NAME", conf.proj_name.clone())
        .set("LANGS", languages)
        .set("STANDARDS", standards)
        .set("TARGET_NAME", conf.target_name.clone())
        .set("CONFIG_PATH", config_path)
        .set("SOURCE_ROOT_SET", source_root_set)
        .set("LINK_LIBS_GLOB", link_libs_glob)
        .set("DY_LIBS_GLOB", dy_libs_glob)
        .set("INCLUDE_DIRS_GLOB", include_dirs_glob)
        .set("HEADER_GLOBS", header_globs)
        .set("SOURCE_GLOBS", source_globs)
        .set("TEST_GLOB", test_glob)
        .set("ADD_INCLUDE_DIR", add_include_dir)
        .set("ADD_TARGET", add_target)
        .set("ADD_TEST", add_test);

    render(payloads::CMAKE_LISTS, &slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolver::{resolve, RawAnswers};

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

    fn lists(conf: &ProjectConfig) -> String {
        cmake_lists(conf, &ProjectPaths::of(conf)).unwrap()
    }

    #[test]
    fn test_cpp_only_executable() {
        let out = lists(&conf_with(|_| {}));
        assert!(out.contains("project(demo VERSION 0.1.0 LANGUAGES CXX)"));
        assert!(out.contains("set(CMAKE_CXX_STANDARD 17)"));
        assert!(!out.contains("CMAKE_C_STANDARD "));
        assert!(out.contains("set(TARGET \"demo\")"));
        assert!(out.contains(
            "file(GLOB_RECURSE SOURCE \"${CMAKE_SOURCE_DIR}/src/*.cpp\")"
        ));
        // No include dir and no .h listing: only .hpp headers are globbed.
        assert!(out.contains("file(GLOB_RECURSE HEADERS \"${CMAKE_SOURCE_DIR}/src/*.hpp\")"));
        assert!(!out.contains("*.h\""));
        assert!(out.contains("add_exec_target(\"${TARGET}\" \"${SOURCE}\""));
        assert!(out.trim_end().ends_with("FALSE)"));
        assert!(!out.contains("enable_testing()"));
        assert!(!out.contains("SOURCE_ROOT"));
        // No unfilled markers survive.
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_c_and_cpp_with_tests_and_grouping() {
        let conf = conf_with(|a| {
            a.use_c = true;
            a.c_std = Some("C89".into());
            a.use_cpp = Some(true);
            a.tests = true;
            a.project_name_dir = true;
            a.project_dir = true;
            a.include_dir = true;
        });
        let out = lists(&conf);

        assert!(out.contains("LANGUAGES C CXX)"));
        // C89 normalizes to 90.
        assert!(out.contains("set(CMAKE_C_STANDARD 90)"));
        assert!(out.contains("set(CMAKE_CXX_STANDARD 17)"));
        assert!(out.contains("set(SOURCE_ROOT \"${CMAKE_SOURCE_DIR}/demo\")"));
        assert!(out.contains("\"${SOURCE_ROOT}/libs/*/lib/*.a\""));
        assert!(out.contains(
            "include(\"${CMAKE_SOURCE_DIR}/project/utils/functions.cmake\")"
        ));
        assert!(out.contains("read_file(\"${CMAKE_SOURCE_DIR}/project/config/definitions.txt\""));
        assert!(out.contains(
            "file(GLOB_RECURSE TESTS \"${SOURCE_ROOT}/test/*.c\" \"${SOURCE_ROOT}/test/*.cpp\")"
        ));
        assert!(out.contains("list(APPEND INCLUDE_DIRS \"${SOURCE_ROOT}/include\")"));
        assert!(out.contains("\"${SOURCE_ROOT}/include/*.h\" \"${SOURCE_ROOT}/include/*.hpp\""));
        assert!(out.contains("add_exec_target(\"tests\" \"${TESTS}\""));
        assert!(out.contains("add_test(NAME \"tests\" COMMAND \"tests\")"));
    }

    #[test]
    fn test_library_targets() {
        let dy = conf_with(|a| a.target_type = Some(TargetType::DynamicLibrary));
        assert!(lists(&dy).contains("add_lib_target(\"${TARGET}\" \"${SOURCE}\""));
        assert!(lists(&dy).trim_end().ends_with("TRUE)"));

        let st = conf_with(|a| a.target_type = Some(TargetType::StaticLibrary));
        assert!(lists(&st).contains("add_lib_target(\"${TARGET}\" \"${SOURCE}\""));
        assert!(lists(&st).trim_end().ends_with("FALSE)"));
    }

    #[test]
    fn test_cpp_only_h_listing_globs_h_from_include() {
        let conf = conf_with(|a| {
            a.list_h_files = Some(true);
            a.include_dir = true;
            a.include_dir_inside_src = true;
        });
        let out = lists(&conf);
        assert!(out.contains(
            "file(GLOB_RECURSE HEADERS \"${CMAKE_SOURCE_DIR}/src/include/*.h\" \
             \"${CMAKE_SOURCE_DIR}/src/include/*.hpp\")"
        ));
    }
}
