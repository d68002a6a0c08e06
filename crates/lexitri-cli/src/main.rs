use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use lexitri_core::config::Config;
use lexitri_core::dictionary::{DictionaryBuilder, DictionarySummary};
use lexitri_core::harvest::harvest;
use lexitri_core::{LexitriError, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let base_dir = resolve_base_dir(cli.dir.clone());

    let result = match cli.command {
        Some(Commands::Build { input, output }) => handle_build(
            &base_dir,
            input.as_deref(),
            output.as_deref(),
            cli.verbose,
            cli.quiet,
        ),
        Some(Commands::Harvest {
            audio_dir,
            sounds_dir,
            output,
            stride,
        }) => handle_harvest(&base_dir, audio_dir, sounds_dir, output, stride),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        // the build is the default operation and needs no arguments
        None => handle_build(&base_dir, None, None, cli.verbose, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn resolve_base_dir(cli_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = cli_dir {
        return dir;
    }

    if let Ok(dir) = std::env::var("LEXITRI_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(".")
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "lexitri", &mut io::stdout());
}

/// Resolve build paths
/// Priority: CLI options > config file > defaults
fn resolve_build_paths(
    base_dir: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
) -> (PathBuf, PathBuf) {
    let config = Config::load(base_dir).unwrap_or_default();

    let input = input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join(&config.build.input));
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join(&config.build.output));

    (input, output)
}

fn handle_build(
    base_dir: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let (input, output) = resolve_build_paths(base_dir, input, output);

    if verbose {
        println!("{} {}", "Input:".dimmed(), input.display());
        println!("{} {}", "Output:".dimmed(), output.display());
    }

    let builder = DictionaryBuilder::new()?;
    let entries = builder.load_entries(&input)?;
    println!(
        "Loaded {} entries from {}",
        entries.len().to_string().bold(),
        input.display()
    );

    let dictionary = builder.build(&entries);
    let summary = dictionary.summary();

    println!();
    println!("{}", "Categorization complete:".cyan().bold());
    for tier in &summary.tiers {
        println!("  {}: {} words", tier.tier.name().yellow(), tier.count);
    }
    println!("  Total: {}", summary.total);

    dictionary.save(&output)?;
    println!();
    println!("{} {}", "Saved:".green(), output.display());

    if !quiet {
        print_examples(&summary);
    }

    Ok(())
}

fn print_examples(summary: &DictionarySummary) {
    println!();
    println!("{}", "Examples from each tier:".cyan().bold());

    for tier in &summary.tiers {
        if tier.examples.is_empty() {
            continue;
        }

        println!();
        println!("{}", tier.tier.name().to_uppercase().bold());
        for (asset_id, text) in &tier.examples {
            println!("  {}: \"{}\"", asset_id.dimmed(), text);
        }
        if tier.count > tier.examples.len() {
            println!(
                "  {}",
                format!("... and {} more", tier.count - tier.examples.len()).dimmed()
            );
        }
    }
}

fn handle_harvest(
    base_dir: &Path,
    audio_dir: Option<PathBuf>,
    sounds_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    stride: Option<usize>,
) -> Result<()> {
    let config = Config::load(base_dir).unwrap_or_default();

    // CLI options override config
    let mut options = config.to_harvest_options(base_dir);
    if let Some(dir) = audio_dir {
        options.audio_dir = dir;
    }
    if let Some(dir) = sounds_dir {
        options.sounds_dir = dir;
    }
    if let Some(path) = output {
        options.output = path;
    }
    if let Some(stride) = stride {
        options.stride = stride;
    }

    let report = harvest(&options)?;

    println!(
        "Scanned {} recordings in {}",
        report.scanned.to_string().bold(),
        options.audio_dir.display()
    );
    println!(
        "Sampled {} ({} skipped without a title)",
        report.sampled.to_string().bold(),
        report.skipped_untitled
    );
    println!(
        "Copied {} recordings to {}",
        report.entries.len().to_string().bold(),
        options.sounds_dir.display()
    );
    println!();
    println!("{} {}", "Saved:".green(), options.output.display());

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(LexitriError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
