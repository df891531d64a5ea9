use clap::{Arg, ArgAction, Command};
use log::error;
use std::process;

// Use modules from the library
use check_postqueue::commands;
use check_postqueue::core::config::DEFAULT_POSTQUEUE_PATH;
use check_postqueue::core::monitor::CheckStatus;

fn build_cli() -> Command {
    Command::new("check-postqueue")
        .about("Monitoring check for the Postfix outbound mail queue")
        .disable_version_flag(true)
        .arg(
            Arg::new("warning")
                .short('w')
                .long("warning")
                .value_name("N")
                .help("Number of messages in queue to generate warning")
                .value_parser(clap::value_parser!(i64))
                .default_value("100"),
        )
        .arg(
            Arg::new("critical")
                .short('c')
                .long("critical")
                .value_name("N")
                .help("Number of messages in queue to generate critical alert ( w < c )")
                .value_parser(clap::value_parser!(i64))
                .default_value("200"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("PATH")
                .help("Path to postqueue command")
                .default_value(DEFAULT_POSTQUEUE_PATH),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Path to TOML format config file"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Debug mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .help("Generate config file template")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    check_postqueue::init_logging(matches.get_flag("debug"));

    if matches.get_flag("version") {
        commands::version();
        return;
    }

    if matches.get_flag("generate-config") {
        commands::generate_config();
        return;
    }

    match commands::check(&matches) {
        Ok(result) => {
            println!("{}", result.summary());
            process::exit(result.status.exit_code());
        }
        Err(err) => {
            error!("{}", err);
            process::exit(CheckStatus::Unknown.exit_code());
        }
    }
}
