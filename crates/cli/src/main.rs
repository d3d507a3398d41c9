use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};

use emubox_cli::cli_args::{Action, Args};
use emubox_cli::menu::{self, SelectionResult};
use emubox_core::config;
use emubox_core::error::{Error, Result};
use emubox_core::launcher::{self, LaunchOptions};
use emubox_core::store::{validate_entry_name, ConfigStore};

fn create_configs(store: &ConfigStore, names: &[String]) -> Result<()> {
    for name in names {
        if let Err(e) = validate_entry_name(name) {
            eprintln!("emubox: {e} Ignored.");
            continue;
        }

        match store.create(name) {
            Ok(path) => println!("emubox: done: created \"{}\".", file_name_of(&path)),
            Err(e @ Error::EntryAlreadyExists(_)) => eprintln!("emubox: {e}"),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn delete_configs(store: &ConfigStore, names: &[String]) -> Result<()> {
    for name in names {
        if validate_entry_name(name).is_err() {
            debug!("Skipping invalid config name `{name}`");
            continue;
        }

        let path = store.delete(name)?;
        println!("emubox: deleted config: {}", file_name_of(&path));
    }

    Ok(())
}

fn purge_configs(store: &ConfigStore) -> Result<()> {
    let deleted = store.purge()?;

    if deleted.is_empty() {
        eprintln!("emubox: no config files are present to purge.");
    }

    for path in deleted {
        println!("emubox: deleted: {}", path.display());
    }

    Ok(())
}

/// Run the selection menu and launch 86Box with the chosen config
fn select_and_launch(
    store: &ConfigStore,
    launcher_path: &str,
    options: &LaunchOptions,
) -> Result<()> {
    let launcher_path = Path::new(launcher_path);
    launcher::ensure_launcher_exists(launcher_path)?;

    let name = match menu::select_entry(store)? {
        SelectionResult::Chosen(name) => name,
        SelectionResult::Cancelled => {
            info!("Selection cancelled");
            return Ok(());
        }
    };

    let config_path = store.entry_path(&name)?;
    println!("emubox: using config: {name}");

    launcher::launch(launcher_path, &config_path, options)?;
    Ok(())
}

fn file_name_of(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().to_string(),
    )
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let store = ConfigStore::new(config::get_store_path(&args.store_path)?);
    debug!("Config directory: `{}`", store.root().display());

    match args.action() {
        Action::Init => {
            store.init()?;
            println!("emubox: done: emubox directory has been created.");
            Ok(())
        }
        Action::New(names) => create_configs(&store, &names),
        Action::Delete(names) => delete_configs(&store, &names),
        Action::Purge => purge_configs(&store),
        action @ (Action::Select | Action::Settings) => {
            if action == Action::Settings && (args.fullscreen || args.language.is_some()) {
                warn!("Language and fullscreen options are ignored with --settings");
            }

            let launcher_path = config::get_launcher_path(&args.launcher_path)?;
            select_and_launch(&store, &launcher_path, &args.launch_options())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_informational() => {
            eprintln!("emubox: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("emubox: {e}");
            ExitCode::FAILURE
        }
    }
}
