use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info, warn};

use goto_window_core::catalog::{self, CatalogOptions};
use goto_window_core::config::{GotoWindowConfig, loading};
use goto_window_core::focus::{LaunchRequest, ProcessLauncher, RecordingLauncher, SystemLauncher};
use goto_window_core::host::{Host, HostAction, HostSnapshot, SnapshotHost};
use goto_window_core::selector::{current_index, list_items};
use goto_window_core::{PlatformContext, SelectionOutcome, on_select};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("select", sub_matches)) => handle_select_command(sub_matches),
        Some(("config", sub_matches)) => handle_config_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// An explicit `--config` file must load; the default location falls back to
/// defaults with a warning on stderr and a `cli.config.load_failed` event.
fn load_config(matches: &ArgMatches) -> Result<GotoWindowConfig, Box<dyn std::error::Error>> {
    if let Some(path) = matches.get_one::<String>("config") {
        return Ok(loading::load_from_path(Path::new(path))?);
    }

    match GotoWindowConfig::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.goto-window/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            Ok(GotoWindowConfig::default())
        }
    }
}

/// Read the host snapshot from a file, or stdin for `-`.
fn load_host(matches: &ArgMatches) -> Result<SnapshotHost, Box<dyn std::error::Error>> {
    let state = matches
        .get_one::<String>("state")
        .ok_or("--state is required")?;

    let snapshot = if state == "-" {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        HostSnapshot::from_json(&json)?
    } else {
        HostSnapshot::from_file(Path::new(state))?
    };

    Ok(SnapshotHost::new(snapshot))
}

#[derive(Serialize)]
struct ListedWindow<'a> {
    index: usize,
    label: &'a str,
    detail: &'a str,
    window_id: u64,
    current: bool,
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config(matches)?;
    let host = load_host(matches)?;

    let catalog = catalog::enumerate(&host, &CatalogOptions::from_config(&config.host));
    let items = list_items(&catalog);
    let current = current_index(&catalog, host.active_window());

    if json_output {
        let listed: Vec<ListedWindow<'_>> = items
            .iter()
            .zip(catalog.entries())
            .enumerate()
            .map(|(index, (item, entry))| ListedWindow {
                index,
                label: &item.label,
                detail: &item.detail,
                window_id: entry.window_ref.id.0,
                current: current == Some(index),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else if items.is_empty() {
        println!("No windows to list.");
    } else {
        let width = items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
        for (index, item) in items.iter().enumerate() {
            let marker = if current == Some(index) { '*' } else { ' ' };
            println!(
                "{} {:>2}  {:<width$}  {}",
                marker,
                index,
                item.label,
                item.detail,
                width = width
            );
        }
    }

    info!(event = "cli.list_completed", count = items.len());

    Ok(())
}

#[derive(Serialize)]
struct SelectResponse {
    #[serde(flatten)]
    outcome: SelectionOutcome,
    actions: Vec<HostAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    launched: Option<Vec<LaunchRequest>>,
}

fn handle_select_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let choice = matches.get_one::<usize>("index").copied();
    let dry_run = matches.get_flag("dry-run");

    info!(
        event = "cli.select_started",
        index = ?choice,
        dry_run = dry_run
    );

    let config = load_config(matches)?;
    let host = load_host(matches)?;
    let context = PlatformContext::detect(&host);

    let recorder = dry_run.then(|| Rc::new(RecordingLauncher::new()));
    let launcher: Rc<dyn ProcessLauncher> = match &recorder {
        Some(recorder) => recorder.clone(),
        None => Rc::new(SystemLauncher),
    };

    let outcome = on_select(&host, choice, &context, &config, launcher);
    let actions = host.actions();

    for action in &actions {
        if let HostAction::ErrorMessage { message } = action {
            eprintln!("Error: {}", message);
        }
    }

    let response = SelectResponse {
        outcome,
        actions,
        launched: recorder.map(|r| r.launched()),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    info!(event = "cli.select_completed", outcome = ?outcome);

    Ok(())
}

fn handle_config_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
