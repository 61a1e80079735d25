mod content;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use resume_pdf::composer::ResumeComposer;
use resume_pdf::output;

/// Renders the resume PDF and writes it to the invoking user's Desktop.
///
/// Fonts must be present under the `resume_pdf` crate's `assets/fonts`
/// directory or provided via the `RESUME_PDF_FONTS_DIR` environment variable.
#[derive(Parser)]
#[command(author, version, about = "Renders the resume PDF to the Desktop")]
struct Cli {
    /// Write the PDF into this directory instead of resolving the Desktop.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let resume = content::default_resume();
    let pdf = ResumeComposer::new().compose(&resume)?;

    let destination = match cli.output_dir {
        Some(dir) => dir,
        None => output::desktop_dir()?,
    };

    let path = output::save_document(&destination, output::DEFAULT_FILENAME, &pdf.bytes)?;
    println!("Saved resume to {} ({} bytes)", path.display(), pdf.bytes.len());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
