//! simplestyle - inspect simple CSS style strings

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplestyle::{Error, Style, parse_declarations};

#[derive(Parser)]
#[command(name = "simplestyle")]
#[command(version, about = "Parse simple CSS style strings", long_about = None)]
#[command(after_help = "EXAMPLES:
    simplestyle declarations \"font-family: 'Times'; font-size: 12pt\"
    simplestyle style --css \"font-weight:bold;font-size:  9pt\"
    echo \"font-style: italic\" | simplestyle style --json -")]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the declarations of a style string
    Declarations {
        /// Style string, or '-' to read stdin
        #[arg(value_name = "CSS")]
        css: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interpret a style string as a text style
    Style {
        /// Style string, or '-' to read stdin
        #[arg(value_name = "CSS")]
        css: String,

        /// Print the normalized CSS
        #[arg(long = "css", conflicts_with = "json")]
        css_out: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Declarations { css, json } => {
            let css = read_input(css)?;
            let declarations = parse_declarations(&css)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&declarations)?);
            } else {
                for declaration in &declarations {
                    println!("{declaration}");
                }
            }
        }
        Command::Style { css, css_out, json } => {
            let css = read_input(css)?;
            let style: Style = css.parse()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&style)?);
            } else if css_out {
                println!("{}", style.to_css());
            } else {
                println!("{style}");
            }
        }
    }
    Ok(())
}

fn read_input(arg: String) -> Result<String, Error> {
    if arg != "-" {
        return Ok(arg);
    }
    log::debug!("Reading style string from stdin");
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
