//! oxline demo entrypoint: an echoing shell on the line editor.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::{Config, load_from};
use core_events::{COMPLETION_REQUESTS, ESCAPES_DISCARDED, LINES_COMMITTED, UNITS_DECODED};
use core_input::Utf8Input;
use core_shell::{SessionEnd, Shell, ShellError};
use core_state::PromptSource;
use core_terminal::{CrosstermGeometry, CrosstermRawMode, RawOutput};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::Ordering;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "oxline.log";

/// Words offered by the demo completer.
const BUILTINS: &[&str] = &[
    "cd", "clear", "echo", "env", "exit", "export", "help", "history", "ls", "pwd",
];

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxline", version, about = "Interactive line editor demo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `oxline.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Static prompt text; replaces the default dynamic prompt.
    #[arg(long = "prompt")]
    pub prompt: Option<String>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn run(&mut self, args: &Args) -> Result<Config> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let config = load_from(args.config.clone())?;
        info!(
            target: "runtime",
            config_override = args.config.is_some(),
            prompt_override = args.prompt.is_some(),
            completion = config.completion_enabled(),
            fallback_columns = config.fallback_columns(),
            "bootstrap_complete"
        );
        Ok(config)
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global subscriber already installed; dropping the guard shuts the writer down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Green program name, then the working directory, then the configured suffix.
fn dynamic_prompt(suffix: String) -> PromptSource {
    PromptSource::dynamic(move || {
        let cwd = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "?".to_string());
        format!("\x1b[38;5;2moxline\x1b[0m {cwd}{suffix}")
    })
}

fn complete_builtin(prefix: &str) -> Vec<String> {
    BUILTINS
        .iter()
        .filter(|word| word.starts_with(prefix))
        .map(|word| word.to_string())
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let config = startup.run(&args)?;

    let prompt = match args.prompt {
        Some(text) => PromptSource::from(text),
        None => dynamic_prompt(config.prompt_text().to_string()),
    };
    let mut shell = Shell::new(prompt).with_history(config.history_store());
    if config.completion_enabled() {
        shell = shell.with_completion(complete_builtin);
    }

    let mut raw_mode = CrosstermRawMode::new();
    let mut input = Utf8Input::new(io::stdin());
    let mut out = RawOutput::new(io::stdout());
    let geometry = CrosstermGeometry::new(config.fallback_columns());

    let result = shell.run_session(&mut raw_mode, &mut input, &mut out, &geometry, |line| {
        // raw mode is active: no output post-processing
        print!("your input: {line}\r\n");
        let _ = io::stdout().flush();
    });

    match result {
        Ok(SessionEnd::EndOfInput) | Err(ShellError::InputClosed) => {
            println!();
            info!(
                target: "runtime",
                history = shell.history().len(),
                units_decoded = UNITS_DECODED.load(Ordering::Relaxed),
                escapes_discarded = ESCAPES_DISCARDED.load(Ordering::Relaxed),
                lines_committed = LINES_COMMITTED.load(Ordering::Relaxed),
                completion_requests = COMPLETION_REQUESTS.load(Ordering::Relaxed),
                "shutdown"
            );
            Ok(())
        }
        Err(err) => Err(err).context("line editor session failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_completion_filters_by_prefix() {
        assert_eq!(complete_builtin("ex"), vec!["exit", "export"]);
        assert_eq!(complete_builtin("pw"), vec!["pwd"]);
        assert!(complete_builtin("zz").is_empty());
    }

    #[test]
    fn args_parse_overrides() {
        let args = Args::parse_from(["oxline", "--prompt", "$ ", "--config", "x.toml"]);
        assert_eq!(args.prompt.as_deref(), Some("$ "));
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn dynamic_prompt_carries_suffix() {
        let mut prompt = dynamic_prompt("> ".to_string());
        let text = prompt.resolve();
        assert!(text.starts_with("\x1b[38;5;2moxline\x1b[0m "));
        assert!(text.ends_with("> "));
    }
}
