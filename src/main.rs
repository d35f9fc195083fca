//! dumpgrammar - Print the BNF grammar embedded in source comments

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};

use dumpgrammar::process::{dump_grammar, read_source};
use dumpgrammar::{parse_args, CliArgs, Config, Result};

fn main() -> Result<()> {
    let args = parse_args();
    let config = build_config(&args)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let summary = if args.use_stdin() {
        dump_grammar(io::stdin().lock(), &mut output, &config, "stdin")?
    } else {
        // Load fully before writing so a read error leaves stdout empty
        let contents = read_source(&config.source)?;
        dump_grammar(
            contents.as_slice(),
            &mut output,
            &config,
            &config.source.to_string_lossy(),
        )?
    };
    output.flush()?;

    if args.debug {
        eprintln!(
            "[DEBUG] Wrote {} grammar rules aligned at column {}",
            summary.rule_count(),
            summary.column
        );
        for line_number in &summary.line_numbers {
            eprintln!("[DEBUG]   - rule from line {line_number}");
        }
    }

    Ok(())
}

/// Build configuration from config files and CLI args
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        if args.debug {
            let discovered = Config::discover_config_files(&cwd);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered in current directory");
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&cwd)
    };

    // Override with CLI arguments
    if let Some(input) = &args.input {
        config.source.clone_from(input);
    }
    if let Some(prefix_width) = args.prefix_width {
        config.prefix_width = prefix_width;
    }

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   source: {}", config.source.display());
        eprintln!("[DEBUG]   prefix_width: {}", config.prefix_width);
    }

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}
