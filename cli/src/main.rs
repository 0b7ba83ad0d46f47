use clap::Parser;
use collabpath::colors::ColorScheme;
use collabpath::display::display_run_summary;
use collabpath::*;
use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing();

    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(&args, colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, colors: ColorScheme) -> Result<(), Box<dyn Error>> {
    let options = RunOptions {
        format: if args.json { OutputFormat::Json } else { OutputFormat::Text },
        verbose: args.verbose,
    };
    let mut app = CollabPathApp::load(&args.dataset, options, colors)?;

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| open_error(path, e))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if args.print_graph {
        app.graph().print_graph(&mut output)?;
    }

    let summary = match &args.commands {
        Some(path) => {
            let commands = File::open(path).map_err(|e| open_error(path, e))?;
            app.run(BufReader::new(commands), &mut output)?
        }
        None => app.run(io::stdin().lock(), &mut output)?,
    };
    output.flush()?;

    if args.verbose {
        display_run_summary(&summary, &colors);
    }

    Ok(())
}

fn open_error(path: &Path, error: io::Error) -> String {
    format!("could not open file {}: {}", path.display(), error)
}
