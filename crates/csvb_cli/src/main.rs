// csvb CLI entry point
use anyhow::{bail, Context, Result};
use clap::Parser;
use csvb_convert::{convert_text, ConvertOptions};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Convert C# source to Visual Basic.
///
/// Accepts a whole file, a single statement, or a bare expression; the
/// input form is detected automatically.
#[derive(Debug, Parser)]
#[command(name = "csvb", version)]
struct Cli {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rename an identifier during conversion (repeatable).
    #[arg(long = "rename", value_name = "OLD=NEW")]
    renames: Vec<String>,

    /// Enable the reserved string-literal conversion policy.
    #[arg(long)]
    convert_strings: bool,

    /// Dump the parsed C# tree as JSON instead of converting.
    #[arg(long)]
    emit_ast: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let output = if cli.emit_ast {
        let unit = csvb_parser::parse_compilation_unit(&source)
            .context("input did not parse as a C# compilation unit")?;
        serde_json::to_string_pretty(&unit).context("failed to serialize syntax tree")?
    } else {
        let options = build_options(&cli)?;
        convert_text(&source, &options).context("conversion failed")?
    };

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn build_options(cli: &Cli) -> Result<ConvertOptions> {
    let mut options = ConvertOptions::new();
    options.convert_strings = cli.convert_strings;
    for rename in &cli.renames {
        let Some((old, new)) = rename.split_once('=') else {
            bail!("--rename expects OLD=NEW, got `{rename}`");
        };
        if old.is_empty() || new.is_empty() {
            bail!("--rename expects OLD=NEW, got `{rename}`");
        }
        options
            .identifier_map
            .insert(old.to_string(), new.to_string());
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_renames(renames: &[&str]) -> Cli {
        Cli {
            input: None,
            output: None,
            renames: renames.iter().map(|s| s.to_string()).collect(),
            convert_strings: false,
            emit_ast: false,
        }
    }

    #[test]
    fn rename_arguments_populate_the_map() {
        let options = build_options(&cli_with_renames(&["oldName=newName"])).unwrap();
        assert_eq!(options.rename("oldName"), "newName");
    }

    #[test]
    fn malformed_rename_is_rejected() {
        assert!(build_options(&cli_with_renames(&["oldName"])).is_err());
        assert!(build_options(&cli_with_renames(&["=x"])).is_err());
    }
}
