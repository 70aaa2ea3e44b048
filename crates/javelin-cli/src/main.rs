use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use javelin_parse::{parse_str, Channel, Lexer, TokKind};
use serde::Serialize;

/// Maximum source file size in bytes (1MB)
const MAX_SOURCE_SIZE: usize = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "javelin")]
#[command(about = "Javelin: translate a Java subset into Python source")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a Java source file to Python
    Translate {
        /// Path to the .java source file
        file: String,

        /// Write the generated Python here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse a source file and dump the AST
    Parse {
        /// Path to the .java source file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Tokenize a source file and list the tokens
    Lex {
        /// Path to the .java source file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate { file, output } => cmd_translate(&file, output.as_deref()),
        Commands::Parse { file, format } => cmd_parse(&file, format),
        Commands::Lex { file, format } => cmd_lex(&file, format),
    }
}

fn load_source(path: &str) -> Result<String> {
    let src = std::fs::read_to_string(path)?;

    if src.len() > MAX_SOURCE_SIZE {
        eprintln!(
            "Error: source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
        std::process::exit(1);
    }

    Ok(src)
}

fn cmd_translate(file: &str, output: Option<&str>) -> Result<()> {
    let src = load_source(file)?;
    let python = javelin_cli::translate_source(file, &src)?;

    match output {
        Some(path) => {
            std::fs::write(path, python)?;
            eprintln!("Wrote {}", path);
        }
        None => print!("{}", python),
    }
    Ok(())
}

fn cmd_parse(file: &str, format: Format) -> Result<()> {
    let src = load_source(file)?;
    let unit = parse_str(file, &src)?;

    match format {
        Format::Pretty => println!("{:#?}", unit),
        Format::Json => println!("{}", serde_json::to_string_pretty(&unit)?),
    }
    Ok(())
}

#[derive(Serialize)]
struct TokRecord {
    kind: String,
    text: String,
    hidden: bool,
    line: u32,
    column: u32,
    start: u32,
    end: u32,
}

fn cmd_lex(file: &str, format: Format) -> Result<()> {
    let src = load_source(file)?;
    let mut lexer = Lexer::new(&src);

    let mut records = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokKind::Eof;
        records.push(TokRecord {
            kind: format!("{:?}", tok.kind),
            text: tok.text,
            hidden: tok.channel == Channel::Hidden,
            line: tok.line,
            column: tok.column,
            start: tok.span.start,
            end: tok.span.end,
        });
        if done {
            break;
        }
    }

    match format {
        Format::Pretty => {
            for r in &records {
                let marker = if r.hidden { "  (hidden)" } else { "" };
                println!("{:>4}:{:<4} {} {:?}{}", r.line, r.column, r.kind, r.text, marker);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}
