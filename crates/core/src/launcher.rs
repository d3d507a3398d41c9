//! Launching 86Box against a chosen config.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};

use crate::error::{Error, Result};

/// Options passed through to 86Box when a config is launched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Language tag given to 86Box with `-G`
    pub language: Option<String>,
    /// Start in fullscreen (`-F`)
    pub fullscreen: bool,
    /// Open the settings window instead of running the machine (`-S`)
    pub settings: bool,
}

/// Checks that the 86Box binary is present.
///
/// # Errors
///
/// Returns [`Error::LauncherNotFound`] if nothing exists at `launcher`.
pub fn ensure_launcher_exists(launcher: &Path) -> Result<()> {
    if launcher.exists() {
        Ok(())
    } else {
        Err(Error::LauncherNotFound {
            path: launcher.display().to_string(),
        })
    }
}

/// Builds the 86Box invocation for a config.
///
/// In settings mode the language and fullscreen options are not used.
pub fn build_launch_command(launcher: &Path, config: &Path, options: &LaunchOptions) -> Command {
    let mut command = Command::new(launcher);
    command.arg("-C").arg(config);

    if options.settings {
        if options.language.is_some() || options.fullscreen {
            warn!("Language and fullscreen options are ignored when opening settings");
        }
        command.arg("-S");
        return command;
    }

    if let Some(language) = &options.language {
        command.arg("-G").arg(language);
    }

    if options.fullscreen {
        command.arg("-F");
    }

    command
}

/// Starts 86Box detached from the current terminal.
///
/// Standard streams are redirected to the null device and the child is not
/// waited on.
///
/// # Errors
///
/// Returns [`Error::Launch`] if the process cannot be spawned.
pub fn launch(launcher: &Path, config: &Path, options: &LaunchOptions) -> Result<Child> {
    let mut command = build_launch_command(launcher, config, options);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group, so terminal signals aimed at us do not reach 86Box
        command.process_group(0);
    }

    debug!("Spawning {command:?}");

    let child = command
        .spawn()
        .map_err(|e| Error::launch_error(launcher.display().to_string(), e))?;

    info!("Launched 86Box with pid {}", child.id());
    Ok(child)
}
