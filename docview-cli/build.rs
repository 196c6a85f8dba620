use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command definition from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("docview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render markdown documents into structural output")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input markdown file")
                .required_unless_present_any(["list-targets", "generate-css"])
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output target (detected from --output extension, defaults to html)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docview.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-targets")
                .long("list-targets")
                .help("List available targets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-css")
                .long("generate-css")
                .help("Output the baseline CSS used for HTML export")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    generate_to(Bash, &mut cmd, "docview", &outdir)?;
    generate_to(Zsh, &mut cmd, "docview", &outdir)?;
    generate_to(Fish, &mut cmd, "docview", &outdir)?;

    Ok(())
}
