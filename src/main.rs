// src/main.rs
use std::env;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use vitae::{suggested_filename, ExportFormat, PipelineError, Resume, ResumeExporter, Theme};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the resume data file (JSON)
    data: PathBuf,

    /// Output path; defaults to a name derived from the applicant
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Theme overrides as JSON
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Also write the laid-out pages as JSON next to the output
    #[arg(long, default_value_t = false)]
    dump_layout: bool,
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let data = fs::read_to_string(&args.data)?;
    let resume: Resume = serde_json::from_str(&data)?;

    let exporter = match &args.theme {
        Some(path) => {
            let theme: Theme = serde_json::from_str(&fs::read_to_string(path)?)?;
            ResumeExporter::with_theme(theme)
        }
        None => ResumeExporter::new(),
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_filename(&resume, ExportFormat::Pdf)));

    if args.dump_layout {
        let laid_out = exporter.lay_out(&resume);
        let dump_path = output.with_extension("layout.json");
        fs::write(&dump_path, serde_json::to_vec_pretty(&laid_out)?)?;
        log::info!("wrote layout dump to {}", dump_path.display());
    }

    exporter.generate_pdf_file(&resume, &output)?;
    println!("Generated {}", output.display());
    Ok(())
}
