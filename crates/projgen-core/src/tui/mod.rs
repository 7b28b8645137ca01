//! Interactive flow: banner, questions, preview, confirmation, emission.

use crate::config::prompt::{message, LinePrompter, Prompter};
use crate::config::resolver::{self, RawAnswers};
use crate::config::{CStd, ProjectConfig};
use crate::emit::{self, git};
use crate::error::FatalError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

const BANNER: &str = r#"
   ________  ___      __            ____             _ ______
  / ____/  |/  /___ _/ /_____     / __ \_________  (_) ____/__  ____
 / /   / /|_/ / __ `/ //_/ _ \   / /_/ / ___/ __ \/ / / __/ _ \/ __ \
/ /___/ /  / / /_/ / ,< /  __/  / ____/ /  / /_/ / / /_/ /  __/ / / /
\____/_/  /_/\__,_/_/|_|\___/  /_/   /_/   \____/ /\____/\___/_/ /_/
                                                /___/

        Generates a C/C++ project with a pre-configured CMake
                      setup for a single target
"#;

/// Drive one generation session against stdin.
///
/// `answers` short-circuits the question flow; `assume_yes` skips the two
/// confirmations. Declines and end-of-input surface as [`FatalError`] so
/// the binary can map them to their exit codes.
pub fn run(base_dir: &Path, answers: Option<RawAnswers>, assume_yes: bool) -> Result<()> {
    println!("{}", BANNER.cyan());

    let mut prompter = LinePrompter::stdin();

    if !assume_yes
        && !prompter.read_bool(&format!("Generate a project under {}", base_dir.display()))?
    {
        return Err(FatalError::GenerationDeclined.into());
    }

    let answers = match answers {
        Some(answers) => answers,
        None => resolver::collect(&mut prompter)?,
    };
    let conf = resolver::resolve(&answers)?;
    let plan = emit::plan(&conf)?;

    print_summary(&conf);
    println!("\n{}", plan.preview());

    if !assume_yes && !prompter.read_bool("Confirm project")? {
        return Err(FatalError::ConfirmationDeclined.into());
    }

    let root = plan.materialize(base_dir)?;

    if conf.init_git {
        git::setup(&root, conf.commit_git)?;
    }

    println!();
    message(&format!(
        "Generated '{}' under {}",
        conf.proj_name,
        base_dir.display()
    ));
    Ok(())
}

fn print_summary(conf: &ProjectConfig) {
    println!("\nProject Preview:\n");

    println!("  -- Project Name       :    {}", conf.proj_name);
    println!(
        "  -- VS Code Project    :    {}",
        yes_no(conf.gen_vscode_files)
    );
    println!("  -- Target Name        :    {}", conf.target_name);
    println!(
        "  -- Target Type        :    {}",
        conf.target_type.display_name()
    );

    let mut plural = ' ';
    let langs = match (conf.c_std, conf.cpp_std) {
        (Some(c), Some(cpp)) => {
            plural = 's';
            format!("{} & C++{}", c_label(c), cpp.year())
        }
        (Some(c), None) => c_label(c),
        (None, Some(cpp)) => format!("C++{}", cpp.year()),
        (None, None) => String::new(),
    };
    println!("  -- Language{plural}          :    {langs}");

    if !conf.use_c {
        println!("  ---- List .h files    :    {}", yes_no(conf.list_h_files));
    }

    println!(
        "  -- Testing            :    {}",
        if conf.include_tests {
            "Enabled"
        } else {
            "Disabled"
        }
    );

    let git = if !conf.init_git {
        "Not Initialize"
    } else if !conf.commit_git {
        "Initialize"
    } else {
        "Initialize & Commit"
    };
    println!("  -- git                :    {git}");
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// C89 and C90 are the same standard; show both spellings.
fn c_label(std: CStd) -> String {
    match std {
        CStd::C90 => "C89/C90".to_string(),
        other => format!("C{}", other.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_label_merges_c89_and_c90() {
        assert_eq!(c_label(CStd::C90), "C89/C90");
        assert_eq!(c_label(CStd::C23), "C23");
    }
}
