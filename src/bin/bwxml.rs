//! bwxml CLI - packed section -> XML/JSON conversion.

use std::io::{Read, Write};
use std::path::Path;
use std::process;

use clap::{Args, Parser, Subcommand};

use bwxml::{decode_section_with_options, probe, DecodeOptions, Error, SectionFormat};

#[derive(Parser)]
#[command(name = "bwxml", about = "BigWorld packed section -> XML/JSON conversion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a packed section to XML (or JSON)
    Decode(DecodeArgs),
    /// Classify a file by its magic header
    Probe(ProbeArgs),
}

#[derive(Args)]
struct DecodeArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Pretty-printed XML output (2-space indent)
    #[arg(long)]
    pretty: bool,

    /// JSON output instead of XML
    #[arg(long)]
    json: bool,

    /// Legacy-compatible reads: truncated 2-/4-byte reads yield -1
    /// instead of failing
    #[arg(long)]
    permissive: bool,

    /// Root element name (default: input file stem, or "section" for
    /// stdin)
    #[arg(long)]
    root: Option<String>,
}

#[derive(Args)]
struct ProbeArgs {
    /// Input file (- for stdin)
    #[arg(short, long)]
    input: String,
}

#[derive(Args)]
struct CommonArgs {
    /// Input file (- for stdin)
    #[arg(short, long)]
    input: String,

    /// Output file (- or omitted for stdout)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Decode(args) => run_decode(args),
        Command::Probe(args) => run_probe(args),
    };
    if let Err(e) = result {
        eprintln!("bwxml: {e}");
        process::exit(1);
    }
}

fn read_input(input: &str) -> Result<Vec<u8>, Error> {
    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(input)?)
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), Error> {
    match output {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            Ok(())
        }
        Some(path) => Ok(std::fs::write(path, content)?),
    }
}

/// Wurzelname: --root, sonst Datei-Stem, sonst "section".
fn root_name(args: &DecodeArgs) -> String {
    if let Some(root) = &args.root {
        return root.clone();
    }
    if args.common.input != "-" {
        if let Some(stem) = Path::new(&args.common.input).file_stem() {
            return stem.to_string_lossy().into_owned();
        }
    }
    "section".to_owned()
}

fn run_decode(args: DecodeArgs) -> Result<(), Error> {
    let data = read_input(&args.common.input)?;
    let options = if args.permissive {
        DecodeOptions::permissive()
    } else {
        DecodeOptions::new()
    };

    let root = decode_section_with_options(&data, &root_name(&args), options)?;

    let rendered = if args.json {
        let value = bwxml::json::node_to_json(&root);
        let mut s = if args.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
        .map_err(|e| Error::Io(e.to_string()))?;
        s.push('\n');
        s
    } else if args.pretty {
        bwxml::xml_serializer::to_pretty_xml(&root)?
    } else {
        let mut s = bwxml::xml_serializer::to_xml(&root)?;
        s.push('\n');
        s
    };

    write_output(args.common.output.as_deref(), &rendered)
}

fn run_probe(args: ProbeArgs) -> Result<(), Error> {
    let data = read_input(&args.input)?;
    match probe(&data) {
        Some(SectionFormat::Packed) => {
            println!("packed");
            Ok(())
        }
        Some(SectionFormat::Primitives) => {
            println!("primitives");
            Ok(())
        }
        None => {
            let magic = data
                .get(..4)
                .map(|b| u32::from_le_bytes(b.try_into().unwrap()))
                .unwrap_or(0);
            Err(Error::UnrecognizedHeader(magic))
        }
    }
}
