//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{join_words, Cli, Commands, ConfigCommands, OutputFormat};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::{render_html, render_json, render_stages_text, render_text};
use crate::cli::session::run_session;
use crate::config::{global_config_path, Settings};
use crate::domain::normalize_species_name;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show {
            name,
            format,
            output: target,
        }) => {
            let container = build_container(cli)?;
            cmd_show(&container, &join_words(name), *format, target.as_deref())
        }
        Some(Commands::Stages { name }) => {
            let container = build_container(cli)?;
            cmd_stages(&container, &join_words(name))
        }
        Some(Commands::Tree { name }) => {
            let container = build_container(cli)?;
            cmd_tree(&container, &join_words(name))
        }
        Some(Commands::Normalize { text }) => cmd_normalize(&join_words(text)),
        Some(Commands::Interactive) => {
            let container = build_container(cli)?;
            cmd_interactive(&container)
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(cli),
            ConfigCommands::Init { force } => cmd_config_init(cli, *force),
            ConfigCommands::Path => cmd_config_path(cli),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

/// Settings from config file and environment, with CLI flags on top.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        settings = settings.with_api_base_url(url.as_str());
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = load_settings(cli)?;
    Ok(ServiceContainer::new(settings)?)
}

#[instrument(skip(container))]
fn cmd_show(
    container: &ServiceContainer,
    name: &str,
    format: OutputFormat,
    target: Option<&Path>,
) -> CliResult<()> {
    let gallery = container.evolution.submit_query(name)?;

    let rendered = match format {
        OutputFormat::Text => render_text(&gallery),
        OutputFormat::Json => render_json(&gallery)?,
        OutputFormat::Html => render_html(&gallery)?,
    };

    match target {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("Wrote {}", path.display()));
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_stages(container: &ServiceContainer, name: &str) -> CliResult<()> {
    let lookup = container.evolution.lookup_stages(name)?;
    output::info(&render_stages_text(&lookup.stages));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, name: &str) -> CliResult<()> {
    let lookup = container.evolution.lookup_stages(name)?;
    output::info(&lookup.chain.to_tree_string());
    debug!(
        "depth={}, species={}, final evolutions={:?}",
        lookup.chain.depth(),
        lookup.chain.node_count(),
        lookup.chain.leaves()
    );
    Ok(())
}

fn cmd_normalize(text: &str) -> CliResult<()> {
    let id = normalize_species_name(text).map_err(crate::application::ApplicationError::from)?;
    output::info(&id);
    Ok(())
}

fn cmd_interactive(container: &ServiceContainer) -> CliResult<()> {
    output::header("Enter a species name (:q to quit)");
    let prompt = || output::prompt(">");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = run_session(
        &container.evolution,
        stdin.lock(),
        &mut stdout,
        Some(&prompt as &dyn Fn()),
    )
    .map_err(|e| InfraError::io("interactive session", e))?;
    // leave the prompt line
    println!();
    debug!("session finished: {:?}", summary);
    Ok(())
}

fn cmd_config_show(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn config_target(cli: &Cli) -> CliResult<std::path::PathBuf> {
    cli.config
        .clone()
        .or_else(global_config_path)
        .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))
}

fn cmd_config_init(cli: &Cli, force: bool) -> CliResult<()> {
    let path = config_target(cli)?;
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(&path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

fn cmd_config_path(cli: &Cli) -> CliResult<()> {
    let path = config_target(cli)?;
    let state = if path.exists() { "exists" } else { "not found" };
    output::info(&format!("{} ({})", path.display(), state));
    Ok(())
}
