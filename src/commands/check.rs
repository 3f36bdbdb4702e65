use anyhow::Result;
use clap::ArgMatches;
use log::debug;

use crate::client::{fetch_host_runtime, SessionOptions, VsphereSession};
use crate::core::runtime_check::{
    evaluate, render_perfdata, CheckMode, EvaluationResult, Severity,
};

/// Prefix on every plugin output line, contractual for downstream parsers.
const SHORTNAME: &str = "VSPHERE-RUNTIME";

/// Environment fallback for `--password`.
pub const PASSWORD_ENV: &str = "VHC_PASSWORD";

/// Run the host runtime check and return the process exit code.
///
/// Connection and fetch failures never propagate as errors: a monitoring
/// supervisor expects a status line and an exit code on every path, so they
/// degrade to UNKNOWN here.
pub fn execute(matches: &ArgMatches) -> Result<i32> {
    let host_name = matches.get_one::<String>("vihost").unwrap();
    let mode = CheckMode::from_name(matches.get_one::<String>("mode").unwrap())
        .ok_or_else(|| anyhow::anyhow!("invalid mode"))?;
    let maintenance_default =
        Severity::from_name(matches.get_one::<String>("maintenance-state").unwrap())
            .ok_or_else(|| anyhow::anyhow!("invalid maintenance state"))?;

    let options = match session_options(matches) {
        Ok(options) => options,
        Err(message) => return Ok(emit_unknown(&message)),
    };

    let session = match VsphereSession::connect(&options) {
        Ok(session) => session,
        Err(err) => {
            return Ok(emit_unknown(&format!(
                "cannot connect to {}: {}",
                options.host, err
            )))
        }
    };

    let snapshot = match fetch_host_runtime(&session, host_name) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            session.logout();
            return Ok(emit_unknown(&format!(
                "cannot fetch runtime data for {}: {}",
                host_name, err
            )));
        }
    };
    session.logout();

    let result = evaluate(snapshot.as_ref(), host_name, mode, maintenance_default);
    debug!(
        "evaluation finished: {} (early_exit: {})",
        result.severity, result.early_exit
    );

    println!("{}", render_plugin_output(&result));
    Ok(result.severity.exit_code())
}

fn session_options(matches: &ArgMatches) -> std::result::Result<SessionOptions, String> {
    let password = match matches.get_one::<String>("password") {
        Some(password) => password.clone(),
        None => std::env::var(PASSWORD_ENV)
            .map_err(|_| format!("no password given and {} is not set", PASSWORD_ENV))?,
    };

    Ok(SessionOptions {
        host: matches.get_one::<String>("server").unwrap().clone(),
        port: *matches.get_one::<u16>("port").unwrap(),
        username: matches.get_one::<String>("username").unwrap().clone(),
        password,
        insecure: matches.get_flag("insecure"),
        timeout_secs: *matches.get_one::<u64>("timeout").unwrap(),
    })
}

fn emit_unknown(message: &str) -> i32 {
    println!("{} {} - {}", SHORTNAME, Severity::Unknown, message);
    Severity::Unknown.exit_code()
}

fn render_plugin_output(result: &EvaluationResult) -> String {
    let mut line = format!("{} {} - {}", SHORTNAME, result.severity, result.message);
    if let Some(perfdata) = render_perfdata(&result.perfdata) {
        line.push_str(" | ");
        line.push_str(&perfdata);
    }
    line
}
