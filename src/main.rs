use anyhow::Result;
use clap::{Arg, Command};

use vhc::commands;
use vhc::core::runtime_check::CheckMode;

fn build_cli() -> Command {
    Command::new("vhc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monitoring plugin for VMware vSphere host runtime health")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("check")
                .about("Evaluate the runtime health of one managed host")
                .arg(
                    Arg::new("server")
                        .short('s')
                        .long("server")
                        .value_name("HOST")
                        .help("vCenter endpoint to connect to")
                        .required(true)
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .value_name("PORT")
                        .help("HTTPS port of the endpoint")
                        .value_parser(clap::value_parser!(u16))
                        .default_value("443")
                )
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .value_name("USER")
                        .help("API username")
                        .required(true)
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .value_name("PASSWORD")
                        .help("API password (falls back to the VHC_PASSWORD environment variable)")
                )
                .arg(
                    Arg::new("insecure")
                        .short('k')
                        .long("insecure")
                        .help("Skip TLS certificate verification")
                        .action(clap::ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .value_name("SECONDS")
                        .help("HTTP timeout for API requests")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("30")
                )
                .arg(
                    Arg::new("vihost")
                        .long("vihost")
                        .value_name("NAME")
                        .help("Name of the host to evaluate")
                        .required(true)
                )
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .value_name("MODE")
                        .help("Which runtime aspect to check")
                        .value_parser(CheckMode::NAMES)
                        .required(true)
                )
                .arg(
                    Arg::new("maintenance-state")
                        .long("maintenance-state")
                        .value_name("SEVERITY")
                        .help("Exit with this status if the host is in maintenance mode")
                        .value_parser(["OK", "WARNING", "CRITICAL", "UNKNOWN"])
                        .default_value("UNKNOWN")
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("version")
                .about("Shows version information")
        )
}

fn main() -> Result<()> {
    vhc::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if matches.get_flag("version") {
        println!("vhc version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("check", sub_matches)) => {
            let code = commands::check::execute(sub_matches)?;
            std::process::exit(code);
        }
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        Some(("version", _)) => {
            commands::version::execute()?;
        }
        _ => {
            println!("Welcome to vhc!");
            println!("Use 'vhc --help' for more information.");
        }
    }

    Ok(())
}
