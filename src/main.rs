use clap::{Parser, Subcommand};
use docfill::{DocumentKind, DocumentRecord, GeneratorConfig, PDFError, Session, Validate};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Fill in an invoice, CV, or contract and get a one-page PDF")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available document templates
    Templates,
    /// Validate a JSON record and generate its PDF
    Generate {
        /// JSON record with a "kind" of invoice, cv, or contract
        record: PathBuf,

        /// Write the PDF here instead of using the conventional file name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for the conventionally named file
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// JSON generator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// TrueType / OpenType font for regular text
        #[arg(long, requires = "font_bold")]
        font_regular: Option<PathBuf>,

        /// TrueType / OpenType font for bold text
        #[arg(long, requires = "font_regular")]
        font_bold: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PDFError::Validation(errors)) => {
            log::error!("the record is not valid");
            for error in errors.errors.iter() {
                eprintln!("  {error}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), PDFError> {
    match command {
        Command::Templates => {
            for kind in DocumentKind::ALL {
                println!("{:<10}{:<12}{}", kind.id(), kind.name(), kind.description());
            }
            Ok(())
        }
        Command::Generate {
            record,
            output,
            out_dir,
            config,
            font_regular,
            font_bold,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::load(path)?,
                None => GeneratorConfig::default(),
            };
            if font_regular.is_some() {
                config.fonts.regular = font_regular;
                config.fonts.bold = font_bold;
            }

            log::info!("reading {}", record.display());
            let record: DocumentRecord = serde_json::from_str(&fs::read_to_string(&record)?)?;
            record.validate()?;

            let document = Session::new(config).submit(&record)?;
            let path = output.unwrap_or_else(|| out_dir.join(&document.file_name));
            fs::write(&path, &document.bytes)?;
            log::info!("wrote {} {} to {}", record.kind(), document.file_name, path.display());
            Ok(())
        }
    }
}
