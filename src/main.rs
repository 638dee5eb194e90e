use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use boccraft::build::build_site;
use boccraft::config::Config;

#[derive(Parser)]
#[command(name = "boccraft", about = "A static blog generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the static site.
    Build {
        /// The directory containing the posts.
        #[arg(short, long, default_value = "posts")]
        posts_dir: PathBuf,

        /// The output directory for the static site.
        #[arg(short, long, default_value = "public")]
        output_dir: PathBuf,

        /// The site title shown on the home page.
        #[arg(long, default_value = "Blog")]
        title: String,

        /// Worker threads for loading and generation. Defaults to the number
        /// of CPUs.
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Cli { command } = Cli::parse();
    match command {
        Command::Build {
            posts_dir,
            output_dir,
            title,
            threads,
        } => {
            if let Err(err) = build_site(Config::new(posts_dir, output_dir, title, threads)) {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
