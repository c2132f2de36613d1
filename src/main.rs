use clap::Parser;

use cssmv::config::Config;
use cssmv::pipeline;

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "cssmv")]
#[command(version = VERSION)]
#[command(about = "Rename CSS class selectors across files from a fetched change list")]
#[command(long_about = "Rename CSS class selectors across files from a fetched change list.

Configuration is read from the environment: CHANGES_URL points at a
plain-text resource of newline-delimited old/new class-name pairs, and
FILES_INPUT is a comma-separated list of file paths, directories, or
glob patterns to scan. The flags below override the environment for
local runs.

Exit code 0 means the run completed with zero changes; exit code 1
means changes were made (changes-summary.json is written) or the run
aborted on an error.")]
struct Cli {
    /// Override the CHANGES_URL environment variable
    #[arg(long)]
    changes_url: Option<String>,

    /// Override the FILES_INPUT environment variable
    #[arg(long)]
    files: Option<String>,
}

// 0 = clean run with no changes; 1 = changes made or aborted on
// error. Callers distinguish the two via changes-summary.json.
fn exit_code_for(result: &cssmv::Result<cssmv::Summary>) -> u8 {
    match result {
        Ok(summary) if summary.has_changes() => 1,
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result =
        Config::resolve(cli.changes_url, cli.files).and_then(|config| pipeline::run(&config));

    let exit_code = exit_code_for(&result);

    if output::print_result(&result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssmv::{Error, FileDiffRecord, Summary};

    fn record() -> FileDiffRecord {
        FileDiffRecord {
            file: "theme.css".to_string(),
            line: 1,
            old_class: "old_one".to_string(),
            new_class: "new-one".to_string(),
        }
    }

    #[test]
    fn changed_run_exits_one() {
        let summary = Summary::new(vec![record()], vec!["theme.css".to_string()]);
        assert_eq!(exit_code_for(&Ok(summary)), 1);
    }

    #[test]
    fn clean_run_exits_zero() {
        let summary = Summary::new(Vec::new(), Vec::new());
        assert_eq!(exit_code_for(&Ok(summary)), 0);
    }

    #[test]
    fn aborted_run_exits_one() {
        let err = Error::config_missing_key("CHANGES_URL");
        assert_eq!(exit_code_for(&Err(err)), 1);
    }
}
