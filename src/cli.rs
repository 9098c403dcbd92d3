use clap::{Arg, ArgAction, Command};
use log::debug;
use std::time::Instant;

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    let start_time = Instant::now();
    let cmd = Command::new("mattactl")
        .version("0.1.0")
        .author("Mattactl Developers")
        .about("Settings and status panel for the Mattacloud 3D printer cloud connector.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("test-connection")
                .about("Tests the authorization token against the Mattacloud service")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Authorization token to test (default: configured token)")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Service URL to test against (default: configured base URL)")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("ws-reconnect")
                .about("Asks the plugin to re-establish its websocket to the mattacloud"),
        )
        .subcommand(
            Command::new("toggle").about("Toggles the Mattacloud integration on or off"),
        )
        .subcommand(
            Command::new("config-print").about("Toggles the scheduled configuration print"),
        )
        .subcommand(
            Command::new("status")
                .about("Prints the derived panel status lines without touching the network"),
        )
        .subcommand(
            Command::new("diag").about("Runs the panel diagnostic suite against the plugin API"),
        );
    debug!("✅ CLI interface built in {:?}", start_time.elapsed());
    cmd
}
