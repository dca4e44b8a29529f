use std::{env, env::VarError};

/// There's no real CLI for the server. Any argument prints the help text and the current configuration. Returns
/// true if it did so, in which case the caller should exit.
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // Be explicit about which envars to print, so that the FCM access token is never shown
    const DISPLAY_ENVS: [&str; 11] = [
        "RUST_LOG",
        "SPN_HOST",
        "SPN_PORT",
        "SPN_DATABASE_URL",
        "SPN_EVENT_BUFFER_SIZE",
        "SPN_CLEANUP_INTERVAL_HOURS",
        "SPN_NOTIFICATION_RETENTION_DAYS",
        "SPN_FCM_PROJECT_ID",
        "SPN_FCM_API_URL",
        "SPN_FCM_DRY_RUN",
        "SPN_FCM_ANDROID_CHANNEL",
    ];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    })
}
