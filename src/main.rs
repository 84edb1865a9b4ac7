use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use table_select::config::PromptConfig;
use table_select::logging::init_tracing;
use table_select::ui::surface::TerminalSurface;
use table_select::ui::theme::Glyphs;
use table_select::{run, PromptController, PromptError};

#[derive(Parser)]
#[command(name = "table-select")]
#[command(about = "Pick rows from a table in the terminal")]
#[command(version)]
struct Cli {
    /// Prompt description (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows visible at once, overrides the config
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Use ASCII glyphs instead of unicode
    #[arg(long)]
    ascii: bool,

    /// Pretty-print the JSON answer
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<PromptError>()
                .map(PromptError::exit_code)
                .unwrap_or(1);
            if !matches!(err.downcast_ref::<PromptError>(), Some(PromptError::Interrupted)) {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::from(code as u8)
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let path = cli.config.unwrap_or_else(PromptConfig::config_path);
    let config = PromptConfig::load_from(&path)
        .with_context(|| format!("Failed to load prompt from {}", path.display()))?;

    let mut options = config.table_options();
    if let Some(page_size) = cli.page_size {
        options = options.page_size(page_size);
    }
    let theme = if cli.ascii {
        config.theme().with_glyphs(Glyphs::ASCII)
    } else {
        config.theme()
    };

    let mut prompt = PromptController::new(
        config.columns(),
        config.rows(),
        options,
        TerminalSurface::new(io::stderr()),
    )?
    .with_theme(theme)
    .with_validator(config.selection_rules().into_validator::<String>());

    let answer = run(&mut prompt)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&answer)?
    } else {
        serde_json::to_string(&answer)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "table-select",
            "--config",
            "demo.toml",
            "--page-size",
            "3",
            "--ascii",
            "--pretty",
        ]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("demo.toml")));
        assert_eq!(cli.page_size, Some(3));
        assert!(cli.ascii);
        assert!(cli.pretty);
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["table-select"]);
        assert!(cli.config.is_none());
        assert!(cli.page_size.is_none());
        assert!(!cli.ascii);
        assert!(!cli.pretty);
    }
}
