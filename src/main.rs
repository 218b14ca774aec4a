use clap::{Parser, Subcommand};
use silkie::site::{self, BuildOptions, FailurePolicy};
use silkie::{config, output};
use std::path::PathBuf;

/// Flags for the build command. Each overrides the config file.
#[derive(clap::Args)]
struct BuildArgs {
    /// Path to the input file or folder
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// URL path to a stylesheet
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// Language of the HTML document [en-CA by default]
    #[arg(short, long)]
    lang: Option<String>,

    /// Read option defaults from the specified JSON or TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory [dist by default]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Empty the output directory before building
    #[arg(long)]
    clean: bool,

    /// In directory mode, skip documents that fail and report them at the end
    #[arg(long)]
    keep_going: bool,
}

#[derive(Parser)]
#[command(name = "silkie")]
#[command(about = "Static site generator with the smoothness of silk")]
#[command(long_about = "\
Static site generator with the smoothness of silk

Every .txt or .md file becomes one standalone HTML page.

Plain text (.txt):
  A first line followed by two blank lines becomes the page title.
  Paragraphs are separated by one blank line.

Markdown (.md):
  Rendered as CommonMark with tables, strikethrough, task lists, footnotes.

Front matter (both formats):
  ---
  title: Page title          (default: file name)
  slug: path/in/site         (default: file name) → dist/path/in/site.html
  description: Meta and Open Graph description
  ---

Run 'silkie gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate pages from a file or a directory of files
    Build(BuildArgs),
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            let options = resolve_build_options(&args)?;

            if args.clean {
                site::clean_output(&options.output_root, &options.input)?;
            }

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_build_event(&event);
                }
            });
            let result = site::build(&options, Some(tx));
            printer
                .join()
                .map_err(|_| "output printer thread panicked")?;

            let report = result?;
            output::print_summary(&report, &options.output_root);
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Layer command-line flags over the config file (if any).
fn resolve_build_options(args: &BuildArgs) -> Result<BuildOptions, Box<dyn std::error::Error>> {
    let site_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::SiteConfig::default(),
    };

    let input = match &args.input {
        Some(input) => input.clone(),
        None => site_config.require_input()?,
    };
    let output_root = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&site_config.output));

    Ok(BuildOptions {
        input,
        output_root,
        stylesheet_url: args.stylesheet.clone().or(site_config.stylesheet),
        lang: args.lang.clone().or(Some(site_config.lang)),
        policy: if args.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        },
    })
}
