// Command-line interface for docview
//
// This binary renders markdown files into structural output.
//
// The pipeline is: read the input file, parse it with the markdown adapter,
// render the node tree into a render tree, then emit that tree through the
// selected target. All rendering capability lives in the docview-render
// crate; this binary only wires files, configuration, and target selection
// together.
//
// Target selection:
//
// The target can be given explicitly with --to, detected from the --output
// file extension, or defaults to html.
// Usage:
//  docview <input> [--to <target>] [--output <file>]   - Render a markdown file
//  docview --list-targets                              - List available targets
//  docview --generate-css                              - Print the baseline CSS
//
// Extra Parameters:
//
// Target-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the target.
// Example:
//  docview notes.md --to treeviz --extra-indices false

use clap::{Arg, ArgAction, Command, ValueHint};
use docview_config::{DocviewConfig, Loader};
use docview_render::markdown::parse_markdown;
use docview_render::targets::html::{HtmlTarget, BASELINE_CSS};
use docview_render::targets::json::JsonTarget;
use docview_render::targets::treeviz::TreevizTarget;
use docview_render::{RenderIndex, Renderer, TargetRegistry};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("docview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render markdown documents into structural output")
        .long_about(
            "docview parses a markdown file, renders it into a structural tree\n\
            with stable positional indices, and emits the tree through an\n\
            output target.\n\n\
            Targets:\n  \
            - html:    semantic HTML5 document with embedded CSS\n  \
            - treeviz: visual tree of the render output\n  \
            - json:    render tree as pretty-printed JSON\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass target-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            docview notes.md                          # HTML to stdout\n  \
            docview notes.md --to treeviz             # Inspect the render tree\n  \
            docview notes.md -o out.html              # Target detected from extension\n  \
            docview notes.md --to html --extra-include-keys false",
        )
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

/// Registry with the html target configured from the loaded configuration.
fn build_registry(config: &DocviewConfig) -> TargetRegistry {
    let mut registry = TargetRegistry::new();
    registry.register(HtmlTarget::new((&config.html).into()));
    registry.register(TreevizTarget);
    registry.register(JsonTarget);
    registry
}

fn main() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    if matches.get_flag("generate-css") {
        print!("{BASELINE_CSS}");
        return;
    }

    if matches.get_flag("list-targets") {
        let registry = TargetRegistry::with_defaults();
        println!("Available targets:");
        for name in registry.list_targets() {
            if let Ok(target) = registry.get(&name) {
                println!("  {name:<10} {}", target.description());
            }
        }
        return;
    }

    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("Error: an input file is required. Use --help for usage information.");
        std::process::exit(1);
    };

    let loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        }
    };

    let renderer = Renderer::new(config.render.unknown_nodes.into());
    let tree = renderer.render(&parse_markdown(&source), &RenderIndex::root());

    let registry = build_registry(&config);
    let output_path = matches.get_one::<String>("output");
    let target_name = match matches.get_one::<String>("to") {
        Some(name) => name.clone(),
        None => output_path
            .and_then(|path| registry.detect_target_from_filename(path))
            .unwrap_or_else(|| "html".to_string()),
    };

    // Configuration supplies the treeviz default; an explicit --extra wins.
    if target_name == "treeviz" && !extra_params.contains_key("indices") {
        extra_params.insert("indices".to_string(), config.treeviz.show_indices.to_string());
    }

    let output = match registry.emit_with_options(&tree, &target_name, &extra_params) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            }
        }
        None => println!("{output}"),
    }
}
