//! Build configuration, assembled by the CLI and handed to
//! [`crate::build::build_site`].

use std::path::PathBuf;

pub struct Config {
    /// The directory whose immediate subdirectories are posts.
    pub posts_directory: PathBuf,

    /// The site root on disk.
    pub output_directory: PathBuf,

    /// The site title shown on the home page.
    pub title: String,

    /// Worker thread count for loading and generation.
    pub threads: usize,
}

impl Config {
    pub fn new(
        posts_directory: PathBuf,
        output_directory: PathBuf,
        title: String,
        threads: Option<usize>,
    ) -> Config {
        Config {
            posts_directory,
            output_directory,
            title,
            threads: match threads {
                None => num_cpus::get(),
                Some(threads) => threads,
            },
        }
    }
}
