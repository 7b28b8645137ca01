//! Static template payloads
//!
//! Every generated text file starts from one of these payloads; slots
//! (`{{NAME}}`) are filled by the emitter. Payloads with no markers are
//! written out as-is.

/// Seed source file for C++ projects.
pub const MAIN_CPP: &str = r#"#include <iostream>

int main() {
    std::cout << "Hello, world!" << std::endl;
    return 0;
}"#;

/// Seed source file for C projects.
pub const MAIN_C: &str = r#"#include <stdio.h>

int main() {
    printf("Hello, world!\n");
    return 0;
}"#;

/// `.vscode/settings.json` - CMake Tools defaults.
pub const SETTINGS_JSON: &str = r#"{
    "cmake.sourceDirectory": ["${workspaceFolder}"],
    "cmake.buildDirectory": "${workspaceFolder}/build",
    "cmake.preferredGenerators": [
            "Ninja",
            "Unix Makefiles",
            "Visual Studio 17 2022"
        ],
    "cmake.debugConfig": {
        "args": [],
    }
}"#;

/// `.vscode/tasks.json` - empty task list.
pub const TASKS_JSON: &str = r#"{
    "version": "2.0.0",
    "tasks": []
}"#;

/// `.vscode/launch.json` - debug configurations for gdb, lldb and MSVC.
///
/// Slots: `BIN_DIR` (working directory of the launched binary, depends on
/// where `out/` lives).
pub const LAUNCH_JSON: &str = r#"{
    "version": "0.2.0",
    "configurations": [
        {
            "name": "gdb-debug",
            "type": "cppdbg",
            "request": "launch",
            "program": "${command:cmake.launchTargetPath}",
            "args": [],
            "stopAtEntry": false,
            "cwd": "{{BIN_DIR}}",
            "environment": [
                {
                    "name": "PROJECT_PATH",
                    "value": "${env:PROJECT_PATH}:${command:cmake.getLaunchTargetDirectory}"
                }
            ],
            "externalConsole": true,
            "MIMode": "gdb",
            "setupCommands": [
                {
                    "description": "Enable pretty-printing for gdb",
                    "text": "-enable-pretty-printing",
                    "ignoreFailures": true
                }
            ]
        },
        {
            "name": "lldb-debug",
            "type": "cppdbg",
            "request": "launch",
            "program": "${command:cmake.launchTargetPath}",
            "args": [],
            "stopAtEntry": false,
            "cwd": "{{BIN_DIR}}",
            "environment": [
                {
                    "name": "PROJECT_PATH",
                    "value": "${env:PROJECT_PATH}:${command:cmake.getLaunchTargetDirectory}"
                }
            ],
            "externalConsole": true,
            "MIMode": "lldb"
        },
        {
            "name": "msvc-debug",
            "type": "cppvsdbg",
            "request": "launch",
            "program": "${command:cmake.launchTargetPath}",
            "args": [],
            "stopAtEntry": false,
            "cwd": "{{BIN_DIR}}",
            "environment": [
                {
                    "name": "PROJECT_PATH",
                    "value": "${env:PROJECT_PATH}:${command:cmake.getLaunchTargetDirectory}"
                }
            ],
            "externalConsole": true
        },
        {
            "name": "ctest-launch",
            "type": "cppvsdbg",
            "request": "launch",
            "program": "${command:cmake.launchTargetPath}",
            "args": [],
            "stopAtEntry": false,
            "cwd": "{{BIN_DIR}}",
            "environment": [
                {
                    "name": "PROJECT_PATH",
                    "value": "${env:PROJECT_PATH}:${command:cmake.getLaunchTargetDirectory}"
                }
            ],
            "externalConsole": true
        },
        {
            "name": "ctest-debug",
            "type": "cppdbg",
            "request": "launch",
            "cwd": "{{BIN_DIR}}",
            "program": "${cmake.testProgram}",
            "args": [ "${cmake.testArgs}"],
        },
        {
            "name": "ctest-msvc-debug",
            "type": "cppvsdbg",
            "request": "launch",
            "cwd": "{{BIN_DIR}}",
            "program": "${cmake.testProgram}",
            "args": [ "${cmake.testArgs}"],
        }
    ]
}"#;

/// `utils/fetch_flags.py` - parses the flag catalog for CMake.
pub const FETCH_FLAGS_PY: &str = r#"# This file was generated by cmake-projgen.
# Parses config/compiler_flags.yaml and prints the enabled flags for the
# requested compiler and build type as a CMake list.

import re
import sys

if len(sys.argv) != 3:
    print("Usage: script.py <compiler> <build_type>", file = sys.stderr)
    sys.exit(1)

target_compiler = sys.argv[1].lower()
target_build_type = sys.argv[2].lower()

file_content = ""
try:
    with open("../config/compiler_flags.yaml", 'r') as file:
        file_content = file.read()
except FileNotFoundError:
    print("The file compiler_flags.yaml not found!")
except IOError as e:
    print(f"An I/O error occurred while accessing compiler_flags.yaml:\n {e}")
except Exception as e:
    print(f"An unexpected error occurred:\n {e}")

flags = []
current_compiler = None
current_build_type = None
current_flag = None

# Regex patterns to identify sections and flag details
compiler_pattern = re.compile(r'^\s*(gcc|clang|msvc):', re.IGNORECASE)
build_type_pattern = re.compile(r'^\s*(debug|release|minsizerel|relwithdebinfo):', re.IGNORECASE)
flag_pattern = re.compile(r'^\s*- flag: "(.*)"')
enabled_pattern = re.compile(r'^\s*enabled: (true|false)')

lines = file_content.splitlines()

for line in lines:
    # Skip comments or empty lines
    if not line.strip() or line.strip().startswith('#'):
        continue

    # Detect the compiler section (gcc, clang, msvc)
    compiler_match = compiler_pattern.match(line)
    if compiler_match:
        # Break out if all the requested data has been processed
        if current_compiler == target_compiler:
            break

        current_compiler = compiler_match.group(1).lower()
        continue

    if current_compiler != target_compiler:
        continue

    # Detect the build type (debug, release)
    build_type_match = build_type_pattern.match(line)
    if build_type_match:
        # Break out if all the requested data has been processed
        if current_build_type == target_build_type:
            break

        current_build_type = build_type_match.group(1).lower()
        continue

    if current_build_type != target_build_type:
        continue

    # Parse flags and enabled status
    if not current_flag:
        flag_match = flag_pattern.match(line)
        if flag_match:
            current_flag = flag_match.group(1)

        continue

    enabled_match = enabled_pattern.match(line)
    if enabled_match:
        if enabled_match.group(1).lower() == "true":
            flags.append(current_flag)

        current_flag = None

cmake_flags = ";".join(flags).strip()
print(cmake_flags)"#;

/// `utils/functions.cmake` - helper functions the build script relies on.
///
/// Slots: `SETTINGS_PREFIX` (`project/` or empty), `OUT_PREFIX` (`build/`
/// or empty).
pub const FUNCTIONS_CMAKE: &str = r#"# This file was generated by cmake-projgen.
# Helper CMake functions: compiler detection, definition lists, flag
# fetching, library installation and target registration.

function(get_compiler_definition OUT_DEFINITION)
    if (CMAKE_CXX_COMPILER_ID)
        set(COMPILER_ID "${CMAKE_CXX_COMPILER_ID}")
    elseif (CMAKE_C_COMPILER_ID)
        set(COMPILER_ID "${CMAKE_C_COMPILER_ID}")
    else()
        message(FATAL_ERROR "No C or C++ compiler found.")
    endif()

    if ("${COMPILER_ID}" STREQUAL "GNU")
        set(${OUT_DEFINITION} "GCC_COMPILER" PARENT_SCOPE)
    elseif ("${COMPILER_ID}" STREQUAL "Clang")
        if ("${CMAKE_CXX_COMPILER_FRONTEND_VARIANT}" STREQUAL "MSVC")
            set(${OUT_DEFINITION} "CLANG_CL_COMPILER" PARENT_SCOPE)
        else()
            set(${OUT_DEFINITION} "CLANG_COMPILER" PARENT_SCOPE)
        endif()
    elseif ("${COMPILER_ID}" STREQUAL "MSVC")
        set(${OUT_DEFINITION} "MSVC_COMPILER" PARENT_SCOPE)
    else()
        set(${OUT_DEFINITION} "UNKNOWN_COMPILER" PARENT_SCOPE)
    endif()
endfunction()

function (get_compiler_variant COMPILER_DEFINITON OUT_VARIANT)
    if ("${COMPILER_DEFINITON}" STREQUAL "MSVC_COMPILER" OR "${COMPILER_DEFINITON}" STREQUAL "CLANG_CL_COMPILER")
        set(${OUT_VARIANT} "MSVC" PARENT_SCOPE)
    elseif ("${COMPILER_DEFINITON}" STREQUAL "GCC_COMPILER")
        set(${OUT_VARIANT} "GCC" PARENT_SCOPE)
    elseif ("${COMPILER_DEFINITON}" STREQUAL "CLANG_COMPILER")
        set(${OUT_VARIANT} "CLANG" PARENT_SCOPE)
    else()
        set(${OUT_VARIANT} "UNKNOWN" PARENT_SCOPE)
    endif()
endfunction()

function (append_architectural_definitions OUT_DEFINITIONS)
    if (CMAKE_SIZEOF_VOID_P EQUAL 8)
        list(APPEND ${OUT_DEFINITIONS} "WORD_SIZE_64")
    else()
        list(APPEND ${OUT_DEFINITIONS} "WORD_SIZE_32")
    endif()

    set(${OUT_DEFINITIONS} "${${OUT_DEFINITIONS}}" PARENT_SCOPE)
endfunction()

function (append_os_definitions OUT_DEFINITIONS)
    if ("${CMAKE_SYSTEM_NAME}" STREQUAL "Windows")
        list(APPEND ${OUT_DEFINITIONS} "WINDOWS")
    elseif ("${CMAKE_SYSTEM_NAME}" STREQUAL "Linux")
        list(APPEND ${OUT_DEFINITIONS} "LINUX")
        list(APPEND ${OUT_DEFINITIONS} "UNIX")
    elseif ("${CMAKE_SYSTEM_NAME}" STREQUAL "Darwin")
        list(APPEND ${OUT_DEFINITIONS} "MACOS")
        list(APPEND ${OUT_DEFINITIONS} "UNIX")
    else()
        list(APPEND ${OUT_DEFINITIONS} "OTHER_OS")
    endif()

    set(${OUT_DEFINITIONS} "${${OUT_DEFINITIONS}}" PARENT_SCOPE)
endfunction()

function (append_build_definitions OUT_DEFINITIONS)
    if ("${CMAKE_BUILD_TYPE}" STREQUAL "Debug")
        list(APPEND ${OUT_DEFINITIONS} "DEBUG")
    elseif ("${CMAKE_BUILD_TYPE}" STREQUAL "Release")
        list(APPEND ${OUT_DEFINITIONS} "RELEASE")
    elseif ("${CMAKE_BUILD_TYPE}" STREQUAL "MinSizeRel")
        list(APPEND ${OUT_DEFINITIONS} "MINSIZEREL")
    elseif ("${CMAKE_BUILD_TYPE}" STREQUAL "RelWithDebInfo")
        list(APPEND ${OUT_DEFINITIONS} "RELWITHDEBINFO")
    endif()

    set(${OUT_DEFINITIONS} "${${OUT_DEFINITIONS}}" PARENT_SCOPE)
endfunction()

function(read_file FILE_PATH OUT_CONTENTS)
    file(READ "${FILE_PATH}" FILE_CONTENT)
    string(REPLACE "\n" ";" CONTENTS "${FILE_CONTENT}")
    list(REMOVE_ITEM CONTENTS "")
    set(${OUT_CONTENTS} "${CONTENTS}" PARENT_SCOPE)
endfunction()

function (get_compiler_flags COMPILER_VARIANT OUT_FLAGS)
    find_package (Python COMPONENTS Interpreter Development)

    if (NOT PYTHON_FOUND)
        message(FATAL_ERROR "Python not found.")
    endif()

    execute_process(
        COMMAND "${Python_EXECUTABLE}" "${CMAKE_SOURCE_DIR}/{{SETTINGS_PREFIX}}utils/fetch_flags.py" ${COMPILER_VARIANT} ${CMAKE_BUILD_TYPE}
        OUTPUT_VARIABLE TEMP
        ERROR_VARIABLE ERROR_MSG
        RESULT_VARIABLE RESULT
        WORKING_DIRECTORY "${CMAKE_SOURCE_DIR}/{{SETTINGS_PREFIX}}utils"
    )

    if (NOT RESULT EQUAL 0)
        message(FATAL_ERROR "Error in fetch_flags.py:\n${ERROR_MSG}")
    endif()

    string(STRIP "${TEMP}" TEMP_CLEAN)
    set(${OUT_FLAGS} ${TEMP_CLEAN} PARENT_SCOPE)
endfunction()

function(install_dy_libs TARGET_NAME OUT_DIR DY_LIBS)
    foreach(DY_LIB ${DY_LIBS})
        add_custom_command(TARGET "${TARGET_NAME}" POST_BUILD
            COMMAND ${CMAKE_COMMAND} -E copy_if_different "${DY_LIB}" "${OUT_DIR}")
    endforeach()
endfunction()

function(add_exec_target TARGET_NAME SOURCE HEADERS INCLUDE_DIRS LINK_LIBS DY_LIBS DEFS FLAGS FEATURES LINKER_FLAGS IS_TEST)
    if (NOT SOURCE)
        return()
    endif()

    if (IS_TEST)
        set(OUT_DIR "${CMAKE_SOURCE_DIR}/{{OUT_PREFIX}}out/test")
    else()
        set(OUT_DIR "${CMAKE_SOURCE_DIR}/{{OUT_PREFIX}}out/bin")
    endif()

    if ("${CMAKE_BUILD_TYPE}" STREQUAL "Debug")
        set(OUT_DIR "${OUT_DIR}/Debug")
    else()
        set(OUT_DIR "${OUT_DIR}/Release")
    endif()

    add_executable("${TARGET_NAME}" ${SOURCE} ${HEADERS})
    target_include_directories("${TARGET_NAME}" PRIVATE ${INCLUDE_DIRS})
    target_link_libraries("${TARGET_NAME}" PRIVATE ${LINK_LIBS})
    target_compile_definitions("${TARGET_NAME}" PRIVATE ${DEFS})
    target_compile_options("${TARGET_NAME}" PRIVATE ${FLAGS})
    target_compile_features("${TARGET_NAME}" PRIVATE ${FEATURES})
    target_link_options("${TARGET_NAME}" PRIVATE ${LINKER_FLAGS})
    set_target_properties("${TARGET_NAME}" PROPERTIES RUNTIME_OUTPUT_DIRECTORY "${OUT_DIR}")
    install_dy_libs("${TARGET_NAME}" "${OUT_DIR}" "${DY_LIBS}")
endfunction()

function(add_lib_target TARGET_NAME SOURCE HEADERS INCLUDE_DIRS LINK_LIBS DY_LIBS DEFS FLAGS FEATURES LINKER_FLAGS IS_SHARED)
    if (NOT SOURCE)
        return()
    endif()

    if ("${CMAKE_BUILD_TYPE}" STREQUAL "Debug")
        set(OUT_DIR "${CMAKE_SOURCE_DIR}/{{OUT_PREFIX}}out/lib/Debug")
    else()
        set(OUT_DIR "${CMAKE_SOURCE_DIR}/{{OUT_PREFIX}}out/lib/Release")
    endif()

    if (IS_SHARED)
        add_library("${TARGET_NAME}" SHARED ${SOURCE} ${HEADERS})
    else()
        add_library("${TARGET_NAME}" STATIC ${SOURCE} ${HEADERS})
    endif()

    target_include_directories("${TARGET_NAME}" PUBLIC ${INCLUDE_DIRS})
    target_link_libraries("${TARGET_NAME}" PUBLIC ${LINK_LIBS})
    target_compile_definitions("${TARGET_NAME}" PUBLIC ${DEFS})
    target_compile_options("${TARGET_NAME}" PUBLIC ${FLAGS})
    target_compile_features("${TARGET_NAME}" PUBLIC ${FEATURES})
    target_link_options("${TARGET_NAME}" PUBLIC ${LINKER_FLAGS})

    set_target_properties("${TARGET_NAME}" PROPERTIES
        RUNTIME_OUTPUT_DIRECTORY "${OUT_DIR}"
        LIBRARY_OUTPUT_DIRECTORY "${OUT_DIR}"
        ARCHIVE_OUTPUT_DIRECTORY "${OUT_DIR}")

    install_dy_libs("${TARGET_NAME}" "${OUT_DIR}" "${DY_LIBS}")
endfunction()"#;

/// `CMakeLists.txt` skeleton; the emitter assembles the config-dependent
/// fragments and fills the slots.
pub const CMAKE_LISTS: &str = r#"# This file was generated by cmake-projgen.
# Configures the build system for the project, defining targets, dependencies and settings

cmake_minimum_required(VERSION 3.15...3.30)
include("{{FUNCTIONS_PATH}}")

project({{PROJ_NAME}} VERSION 0.1.0 LANGUAGES{{LANGS}})
{{STANDARDS}}
set(TARGET "{{TARGET_NAME}}")

# Make a list of useful preprocessor definitions to add to the build
set(DEFS "")
get_compiler_definition(COMPILER_DEFINITION)
get_compiler_variant(${COMPILER_DEFINITION} COMPILER_VARIANT)
list(APPEND DEFS "${COMPILER_DEFINITION}")
append_architectural_definitions(DEFS)
append_os_definitions(DEFS)
append_build_definitions(DEFS)

# Also add the user defined definitions to the list
read_file("{{CONFIG_PATH}}definitions.txt" USER_DEFS)
list(APPEND DEFS "${USER_DEFS}")

# Get the compiler flags for the target compiler
get_compiler_flags(${COMPILER_VARIANT} FLAGS)

# Get the compiler features
read_file("{{CONFIG_PATH}}compiler_features.txt" FEATURES)

# Get the link options
read_file("{{CONFIG_PATH}}linker_flags.txt" LINKER_FLAGS)
{{SOURCE_ROOT_SET}}
file(GLOB LINK_LIBS {{LINK_LIBS_GLOB}})
file(GLOB DY_LIBS {{DY_LIBS_GLOB}})
file(GLOB INCLUDE_DIRS {{INCLUDE_DIRS_GLOB}})
file(GLOB_RECURSE HEADERS{{HEADER_GLOBS}})
file(GLOB_RECURSE SOURCE{{SOURCE_GLOBS}}){{TEST_GLOB}}
{{ADD_INCLUDE_DIR}}
{{ADD_TARGET}}{{ADD_TEST}}"#;

/// `.gitignore` with config-dependent exceptions for bundled libraries.
///
/// Slots: `LIBS_PREFIX` (`<proj_name>/` when the source tree is grouped,
/// empty otherwise).
pub const GITIGNORE: &str = r#"# This file was generated by cmake-projgen.
# Tells git which extensions and files to ignore when pushing to remote repository

# Ignore build artifacts
/build/
build/
*.ninja
*.ninja_deps
*.ninja_log
CMakeFiles
CMakeCache.txt
cmake_install.cmake
Makefile
CMakeScripts
CMakeLists.txt.user
Testing
install_manifest.txt
compile_commands.json
CTestTestfile.cmake
_deps
CMakeUserPresets.json

# Ignore generated docs files
docs/readme.md
docs/building.md
docs/configuration.md
docs/libraries.md

# Ignore binary and object files
*.o
*.obj
*.a
*.so
*.dll
*.dylib
*.lib
*.exe
*.out
*.app
*.pdb
*.idb
*.d
*.gcno
*.gcda
*.gcov

# Do not ignore dependencies
!{{LIBS_PREFIX}}libs/*/lib/*.a
!{{LIBS_PREFIX}}libs/*/lib/*.so
!{{LIBS_PREFIX}}libs/*/lib/*.lib
!{{LIBS_PREFIX}}libs/*/lib/*.dll
!{{LIBS_PREFIX}}libs/*/lib/*.dylib

# Ignore IDE-specific files and directories
.vscode/
*.code-workspace

# Ignore temporary files and directories
*.tmp
*.swp
*.swo
*.sublime-workspace
*.sublime-project
*.DS_Store
*.gdb_history
*.clangd/
*.vscode/
*.vscode-test/
*.gtest/

# Ignore generated files from IDEs or build systems
*.log

# Ignore files generated by various tools
*.dSYM/
*.pyo
*.pyc
*.pyd
*.class

# Ignore Python virtual environments (if applicable)
venv/
ENV/
env/"#;

/// VS Code workspace descriptor.
///
/// Slots: `PROJ_NAME`, `PROJ_PATH`, `INCLUDE_BLOCK` (pre-rendered from
/// [`WORKSPACE_INCLUDE_BLOCK`] or empty), `COMMENT` (`// ` when the extra
/// folders are kept commented out), `SRC_PATH`.
pub const WORKSPACE_FILE: &str = r#"{
    "folders": [
        {
            "name": "{{PROJ_NAME}}",
            "path": "{{PROJ_PATH}}"
        },{{INCLUDE_BLOCK}}
        {{COMMENT}}{
        {{COMMENT}}    "name": "src",
        {{COMMENT}}    "path": "{{SRC_PATH}}"
        {{COMMENT}}}
    ]
}"#;

/// Optional `include` folder entry for [`WORKSPACE_FILE`]. Rendered first,
/// then spliced in as the `INCLUDE_BLOCK` value.
pub const WORKSPACE_INCLUDE_BLOCK: &str = r#"
        {{COMMENT}}{
        {{COMMENT}}    "name": "include",
        {{COMMENT}}    "path": "{{INCLUDE_PATH}}"
        {{COMMENT}}},"#;

/// `config/compiler_flags.yaml` - the flag catalog.
///
/// Slots: `C_ONLY` (`true`/`false`, toggles the C-only diagnostics).
pub const COMPILER_FLAGS_YAML: &str = r#"# This file was generated by cmake-projgen.
# Compiler flags for the GCC, Clang, and MSVC compilers across various build types.

# Basic rules for GCC and CLANG flags
# Enabling warnings: Use -W followed by the warning name (e.g., -Wall).
# Disabling warnings: Use -Wno- followed by the warning name (e.g., -Wno-unused-variable).
# Treat warnings as errors: Use -Werror= followed by the warning name with no spaces in between (e.g., -Werror=return-type)

# Basic rules for MSVC flags
# Enabling warnings: Use /wL followed by the warning number where L is the warning level the warning is enabled at (e.g. /w14061)
# Disable warnings: Use /wd followed by the warning number (e.g. /wd4100)
# Treat warnings as errors: Use /we followed by the warning number (e.g. /we4715)

gcc:
  debug:
    - flag: "-O0"
      description: "Disable optimizations"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Optimize-Options.html#index-O0"
      enabled: true

    - flag: "-g3"
      description: "Generate debug information"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Debugging-Options.html#index-g"
      enabled: true

    - flag: "-save-temps=obj"
      description: "Save intermediate files to the specified directory (Requires linker flags as well)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Developer-Options.html#index-save-temps"
      enabled: false

    - flag: "-fverbose-asm"
      description: "Generate verbose assembly code (Requires linker flags as well)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Code-Gen-Options.html#index-fverbose-asm"
      enabled: false

    - flag: "-fsanitize=undefined"
      description: "Enable undefined behavior sanitizer (Requires linker flags as well)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Instrumentation-Options.html#index-fsanitize_003dundefined"
      enabled: false

    - flag: "-fsanitize=address"
      description: "Enable address sanitizer (Requires linker flags as well)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Instrumentation-Options.html#index-fsanitize_003daddress"
      enabled: false

    - flag: "-Wall"
      description: "Enable most warning messages"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wall"
      enabled: true

    - flag: "-Wextra"
      description: "Enable extra warning messages"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wextra"
      enabled: true

    - flag: "-Wconversion"
      description: "Warn about implicit type conversions"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wconversion"
      enabled: true

    - flag: "-Wdouble-promotion"
      description: "Warn if a value is promoted to double"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wdouble-promotion"
      enabled: true

    - flag: "-Wno-unused-parameter"
      description: "Disable warnings about unused parameters"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wno-unused-parameter"
      enabled: true

    - flag: "-Wno-unused-function"
      description: "Disable warnings about unused functions"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wno-unused-function"
      enabled: true

    - flag: "-Wno-unused-result"
      description: "Disable warnings about unused results"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wno-unused-result"
      enabled: true

    - flag: "-Wno-sign-conversion"
      description: "Disable warnings about sign conversion"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wno-sign-conversion"
      enabled: true

    - flag: "-Wfloat-equal"
      description: "Warn about comparisons between floating point values"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wfloat-equal"
      enabled: true

    - flag: "-Wundef"
      description: "Warn if an undefined identifier is evaluated"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wundef"
      enabled: true

    - flag: "-Wshadow"
      description: "Warn when a local variable shadows another variable"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wshadow"
      enabled: true

    - flag: "-Wpointer-arith"
      description: "Warn about pointer arithmetic"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wpointer-arith"
      enabled: true

    - flag: "-Wcast-align"
      description: "Warn when a pointer cast decreases alignment"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wcast-align"
      enabled: true

    - flag: "-Wstrict-prototypes"
      description: "Warn if a function is not declared with a prototype (C only)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wstrict-prototypes"
      enabled: {{C_ONLY}}

    - flag: "-Wmissing-prototypes"
      description: "Warn if a function is not declared with a prototype (C only)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wmissing-prototypes"
      enabled: {{C_ONLY}}

    - flag: "-Wstrict-overflow=4"
      description: "Warn about optimizations that assume overflow does not occur"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wstrict-overflow"
      enabled: true

    - flag: "-Wwrite-strings"
      description: "Warn when a string literal is assigned to a `char*`"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wwrite-strings"
      enabled: true

    - flag: "-Wcast-qual"
      description: "Warn when a pointer is cast to a different type that may change the type qualifiers"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wcast-qual"
      enabled: true

    - flag: "-Wswitch-default"
      description: "Warn if a `switch` statement does not have a `default` case"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wswitch-default"
      enabled: true

    - flag: "-Wswitch-enum"
      description: "Warn if a `switch` statement does not handle all enumeration values"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wswitch-enum"
      enabled: true

    - flag: "-Werror=return-type"
      description: "Treat missing return statements as errors"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wreturn-type"
      enabled: true

    - flag: "-Werror=implicit-function-declaration"
      description: "Treat implicit function declarations as errors (C only)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wimplicit-function-declaration"
      enabled: {{C_ONLY}}

    - flag: "-Werror=incompatible-pointer-types"
      description: "Treat incompatible pointer types as errors (C only)"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wincompatible-pointer-types"
      enabled: {{C_ONLY}}

    - flag: "-Wformat=2"
      description: "Warn about format string issues"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wformat"
      enabled: true

    - flag: "-Wuninitialized"
      description: "Warn about uninitialized variables"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wuninitialized"
      enabled: true

    - flag: "-Wunreachable-code"
      description: "Warn about code that is unreachable"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc-4.4.7/gcc/Warning-Options.html#index-Wunreachable_002dcode-437"
      enabled: true
  release:
    - flag: "-O3"
      description: "Optimize for maximum performance"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Optimize-Options.html#index-O3"
      enabled: true

    - flag: "-Ofast"
      description: "Enable -O3 and more optimizations that are not valid for all standard-compliant programs"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Optimize-Options.html#index-Ofast"
      enabled: false
  minsizerel:
    - flag: "-Os"
      description: "Optimize for size"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Optimize-Options.html#index-Os"
      enabled: true

    - flag: "-Oz"
      description: "Aggresively optimize for size"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Optimize-Options.html#index-Oz"
      enabled: false
  relwithdebinfo:
    - flag: "-O2"
      description: "Optimize for speed"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Optimize-Options.html#index-O2"
      enabled: true

    - flag: "-g3"
      description: "Generate debug information"
      documentation: "https://gcc.gnu.org/onlinedocs/gcc/Debugging-Options.html#index-g"
      enabled: true
clang:
  debug:
    - flag: "-O0"
      description: "Disable optimization"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#optimization-level"
      enabled: true

    - flag: "-g3"
      description: "Generate debug information"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#debug-level"
      enabled: true

    - flag: "-save-temps=obj"
      description: "Save intermediate files to the output directory (Requires linker flags as well)"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#cmdoption-clang-save-temps"
      enabled: false

    - flag: "-fsanitize=undefined"
      description: "Enable undefined behavior sanitizer (Requires linker flags as well)"
      documentation: "https://releases.llvm.org/12.0.0/tools/clang/docs/UndefinedBehaviorSanitizer.html#undefinedbehaviorsanitizer"
      enabled: false

    - flag: "-fsanitize=address"
      description: "Enable address sanitizer (Requires linker flags as well)"
      documentation: "https://releases.llvm.org/12.0.0/tools/clang/docs/AddressSanitizer.html"
      enabled: false

    - flag: "-Wall"
      description: "Enable most warning messages"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wall"
      enabled: true

    - flag: "-Wextra"
      description: "Enable extra warning messages"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wextra"
      enabled: true

    - flag: "-Wconversion"
      description: "Warn about implicit type conversions"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wconversion"
      enabled: true

    - flag: "-Wdouble-promotion"
      description: "Warn if a value is promoted to double"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wdouble-promotion"
      enabled: true

    - flag: "-Wno-unused-parameter"
      description: "Disable warnings about unused parameters"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wunused-parameter"
      enabled: true

    - flag: "-Wno-unused-function"
      description: "Disable warnings about unused functions"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wunused-function"
      enabled: true

    - flag: "-Wno-unused-result"
      description: "Disable warnings about unused results"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wunused-result"
      enabled: true

    - flag: "-Wno-sign-conversion"
      description: "Disable warnings about sign conversion"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wsign-conversion"
      enabled: true

    - flag: "-Wfloat-equal"
      description: "Warn about comparisons between floating point values"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wfloat-equal"
      enabled: true

    - flag: "-Wundef"
      description: "Warn if an undefined identifier is evaluated"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wundef"
      enabled: true

    - flag: "-Wshadow"
      description: "Warn when a local variable shadows another local variable"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wshadow"
      enabled: true

    - flag: "-Wpointer-arith"
      description: "Warn about pointer arithmetic"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wpointer-arith"
      enabled: true

    - flag: "-Wcast-align"
      description: "Warn when a pointer cast decreases alignment"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wcast-align"
      enabled: true

    - flag: "-Wstrict-prototypes"
      description: "Warn if a function is not declared with a prototype (C only)"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wstrict-prototypes"
      enabled: {{C_ONLY}}

    - flag: "-Wmissing-prototypes"
      description: "Warn if a function is not declared with a prototype (C only)"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wmissing-prototypes"
      enabled: {{C_ONLY}}

    - flag: "-Wwrite-strings"
      description: "Warn when a string literal is assigned to a `char*`"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wwrite-strings"
      enabled: true

    - flag: "-Wcast-qual"
      description: "Warn when a pointer is cast to a different type that may change the type qualifiers"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wcast-qual"
      enabled: true

    - flag: "-Wswitch-default"
      description: "Warn if a `switch` statement does not have a `default` case"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wswitch-default"
      enabled: true

    - flag: "-Wswitch-enum"
      description: "Warn if a `switch` statement does not handle all enumeration values"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wswitch-enum"
      enabled: true

    - flag: "-Werror=return-type"
      description: "Treat missing return statements as errors"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wreturn-type"
      enabled: true

    - flag: "-Werror=implicit-function-declaration"
      description: "Treat implicit function declarations as errors (C only)"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wimplicit-function-declaration"
      enabled: {{C_ONLY}}

    - flag: "-Werror=incompatible-pointer-types"
      description: "Treat incompatible pointer types as errors (C only)"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wincompatible-pointer-types"
      enabled: {{C_ONLY}}

    - flag: "-Wformat=2"
      description: "Warn about format string issues"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wformat"
      enabled: true

    - flag: "-Wuninitialized"
      description: "Warn about uninitialized variables"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wuninitialized"
      enabled: true

    - flag: "-Wunreachable-code-aggressive"
      description: "Warn about aggressive unreachable code detection"
      documentation: "https://clang.llvm.org/docs/DiagnosticsReference.html#wunreachable-code"
      enabled: true
  release:
    - flag: "-O3"
      description: "Optimize for maximum performance"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#optimization-level"
      enabled: true

    - flag: "-ffast-math"
      description: "Enable math optimizations such as faster floating point operations that are not valid for all standard-compliant programs"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#optimization-level"
      enabled: false
  minsizerel:
    - flag: "-Os"
      description: "Optimize for size"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#optimization-level"
      enabled: true

    - flag: "-Oz"
      description: "Aggresively optimize for size"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#optimization-level"
      enabled: false
  relwithdebinfo:
    - flag: "-O2"
      description: "Optimize for speed"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#optimization-level"
      enabled: true

    - flag: "-g3"
      description: "Generate debug information"
      documentation: "https://clang.llvm.org/docs/ClangCommandLineReference.html#debug-level"
      enabled: true
msvc:
  debug:
    - flag: "/Od"
      description: "Disable optimization"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/od-disable-debug?view=msvc-170"
      enabled: true

    - flag: "/Zi"
      description: "Generate complete debug information"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/z7-zi-zi-debug-information-format?view=msvc-170"
      enabled: true

    - flag: "/FAs /Fa ./out/dump/"
      description: "Generate source and assembly code listings in the specified directory"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/fa-fa-listing-file?view=msvc-170"
      enabled: true

    - flag: "/RTC1"
      description: "Enable run-time error checks"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/rtc-run-time-error-checks?view=msvc-170"
      enabled: true

    - flag: "/fsanitize=address"
      description: "Enable address sanitizer"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/fsanitize?view=msvc-170"
      enabled: true

    - flag: "/W4"
      description: "Set warning level to 4, enable most warning messages"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/compiler-option-warning-level?view=msvc-170"
      enabled: true

    - flag: "/w14244"
      description: "Warn about implicit type conversions (Already included at level 2)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-levels-3-and-4-c4244?view=msvc-170"
      enabled: true

    - flag: "/wd4100"
      description: "Disable warnings about unused parameters"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4100?view=msvc-170"
      enabled: true

    - flag: "/wd4505"
      description: "Disable warnings about unused functions"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4505?view=msvc-170"
      enabled: true

    - flag: "/wd4365"
      description: "Disable warnings about sign conversion (Off by default)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4365?view=msvc-170"
      enabled: true

    - flag: "/w14668"
      description: "Warn if an undefined identifier is evaluated"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4668?view=msvc-170"
      enabled: true

    - flag: "/w14459"
      description: "Warn when a local variable shadows another variable (Already included at level 4)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4459?view=msvc-170"
      enabled: true

    - flag: "/w14061"
      description: "Warn if a `switch` statement does not handle all enumeration values (Off by default)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4061?view=msvc-170"
      enabled: true

    - flag: "/w14062"
      description: "Warn if a `switch` statement does not have a `default` case (Off by default)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4062?view=msvc-170"
      enabled: true

    - flag: "/we4715"
      description: "Treat missing return statements as errors"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-1-c4715?view=msvc-170"
      enabled: true

    - flag: "/we4013"
      description: "Treat implicit function declarations as errors"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-3-c4013?view=msvc-170"
      enabled: true

    - flag: "/we4133"
      description: "Treat incompatible pointer types as errors"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-3-c4133?view=msvc-170"
      enabled: true

    - flag: "/w14101"
      description: "Warn about uninitialized variables when they're not used (Already included at level 3)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-3-c4101?view=msvc-170"
      enabled: true

    - flag: "/w14700"
      description: "Warn about uninitialized variables when they're used (Already included at level 1)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-1-and-level-4-c4700?view=msvc-170"
      enabled: true

    - flag: "/wd4189"
      description: "Disable warnings about initialized but unreferenced variables"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4189?view=msvc-170"
      enabled: true

    - flag: "/w14702"
      description: "Warn about code that is unreachable (Already included at level 4)"
      documentation: "https://learn.microsoft.com/en-us/cpp/error-messages/compiler-warnings/compiler-warning-level-4-c4702?view=msvc-170"
      enabled: true
  release:
    - flag: "/O2"
      description: "Optimize for maximum speed"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/o1-o2-minimize-size-maximize-speed?view=msvc-170"
      enabled: true

    - flag: "/fp:fast"
      description: "Optimize floating point math for speed and space but the compiler may omit rounding and special values (NaN, infinity) may not behave strictly."
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/fp-specify-floating-point-behavior?view=msvc-170#fast"
      enabled: false
  minsizerel:
    - flag: "/O1"
      description: "Optimize for size"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/o1-optimize-for-size?view=msvc-170"
      enabled: true
  relwithdebinfo:
    - flag: "/O1"
      description: "Optimize for size"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/o1-optimize-for-size?view=msvc-170"
      enabled: true

    - flag: "/Zi"
      description: "Generate complete debug information"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/z7-zi-zi-debug-information-format?view=msvc-170"
      enabled: true

    - flag: "/FAs /Fa ./out/dump/"
      description: "Generate source and assembly code listings in the specified directory"
      documentation: "https://learn.microsoft.com/en-us/cpp/build/reference/fa-fa-listing-file?view=msvc-170"
      enabled: true"#;

/// `docs/readme.md` - documentation landing page.
pub const DOC_README: &str = r#"<h1 style="text-align: center;">Generated CMake C/C++ Project</h1>

This project was generated by **cmake-projgen**: a small interactive tool
that emits simple, highly customizable CMake C/C++ projects with a single
target. It is meant to remove the setup step for small projects, and can
serve as a starting point for larger ones with more complex needs such as
multiple targets, toolchain and preset files, cross-compiling or
multi-step builds.

### **Table Of Contents**
1. [**`Building The Project`**](building.md)
2. [**`Configuration`**](configuration.md)
3. [**`Linking Libraries`**](libraries.md)

<br>[`<-- Prev Page`](libraries.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](building.md)
"#;

/// `docs/building.md`.
pub const DOC_BUILDING: &str = r#"[`<-- Prev Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](configuration.md)
<h2 style="text-align: center;">Building The Project</h2>

### **Prerequisites**
Building requires at least **CMake 3.15**, **Python3** and one of the
**GCC**, **Clang** or **MSVC** compilers installed and on the **PATH**.

### **Supported Platforms**
The generated structure is self-contained and free of platform-specific
code, so it should work across Windows, Linux and macOS.

### **1 - Building With CMake Tools**
With Visual Studio Code, install the CMake Tools extension and use its UI
to configure, build and run the project.

### **2 - Building From The Terminal**
Configure CMake with the generator, compiler and build type of your
choice, then build with `cmake --build` or your build system's own build
command. The terminal route gives more control: toolchain files, preset
files and custom flags are all available, which helps with cross-compiling
or fine-tuned build configurations.

[`<-- Prev Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](configuration.md)
"#;

/// `docs/configuration.md`.
pub const DOC_CONFIGURATION: &str = r#"[`<-- Prev Page`](building.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](libraries.md)
<h2 style="text-align: center;">Configuration</h2>

The config directory holds four files: **compiler_features.txt**,
**compiler_flags.yaml**, **definitions.txt** and **linker_flags.txt**.
They control compiler flags, preprocessor definitions, linker options and
compiler features. For changes to propagate into your build, remember to
**reconfigure CMake and rebuild**.

### **Configuring Compiler Flags**
**compiler_flags.yaml** collects commonly used flags for **GCC**,
**Clang** and **MSVC**, organized by compiler and build type:
```yaml
gcc:
  debug:
    - LIST OF FLAG ENTRIES
  release:
    - LIST OF FLAG ENTRIES
  minsizerel:
    - LIST OF FLAG ENTRIES
  relwithdebinfo:
    - LIST OF FLAG ENTRIES
clang:
  debug:
.
.
.
```
where each flag entry looks like:
```yaml
- flag: "-Wall" # The flag itself
  description: "Enable most warning messages" # Description for the flag
  documentation: "https://gcc.gnu.org/onlinedocs/gcc/Warning-Options.html#index-Wall" # Link to the documentation page of the flag, if any
  enabled: true # Whether the flag is enabled or not (true or false)
```

Toggle flags with the **enabled** field and add your own under the
matching compiler and build type; **description** and **documentation**
may be omitted. The file is parsed by `utils/fetch_flags.py`, which is
invoked from within CMake.

### **Adding Preprocessor Definitions**
Add entries to **definitions.txt**, one per line:
```json
GAME_MODE="DEVELOPMENT"
NR_PLAYERS=1
ENABLE_OPTIMIZATIONS
```

Beyond your own definitions, the CMake script defines directives
describing the build environment:

* ***Operating System :*** **`WINDOWS`**, **`LINUX`**, **`MACOS`**,
  **`UNIX`**, **`OTHER_OS`**
* ***Compiler :*** **`GCC_COMPILER`**, **`CLANG_COMPILER`**,
  **`CLANG_CL_COMPILER`**, **`MSVC_COMPILER`**, **`UNKNOWN_COMPILER`**
* ***Build Type :*** **`DEBUG`**, **`RELEASE`**, **`MINSIZEREL`**,
  **`RELWITHDEBINFO`**
* ***Word Size :*** **`WORD_SIZE_32`**, **`WORD_SIZE_64`**

### **Configuring Linker Flags**
Add entries to **linker_flags.txt**, one per line:
```
-pthread
-nostdlib
-static-libasan
```

### **Configuring Compiler Features**
Add entries to **compiler_features.txt**, one per line:
```
cxx_constexpr
cxx_static_assert
cxx_variadic_templates
```

[`<-- Prev Page`](building.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](libraries.md)
"#;

/// `docs/libraries.md`.
pub const DOC_LIBRARIES: &str = r#"[`<-- Prev Page`](configuration.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](readme.md)
<h2 style="text-align: center;">Linking Libraries</h2>

### **Linking Through The *`libs/`* Directory**
Copy a library folder into *`libs/`* with this layout:
```yaml
libs/
├── example_lib/
│   ├── include/
│   └── lib/
└── example_header_only_lib/
    └── include/
```
The CMake script then includes every header under *`include/`*, links the
static and import libraries under *`lib/`*, and copies dynamic libraries
into the target output directory after a build.

***`Warning :`*** a library shipping both static and dynamic files will
have **all of them** linked; delete the unwanted files to avoid
conflicts.

### **Linking Through CMake Modules and Configs**
System-provided libraries such as *`OpenGL`* cannot go through *`libs/`*.
Write or reuse *`Find<Library>.cmake`* modules and wire them into the
CMake script by hand; that part cannot be automated for every library.

[`<-- Prev Page`](configuration.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Main Page`](readme.md)&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;
[`Next Page -->`](readme.md)
"#;
