//! Exports the [`build_site`] function which stitches together the
//! high-level steps of building the output site: loading posts
//! ([`crate::load`]) and rendering post and index pages ([`crate::write`]).

use crate::config::Config;
use crate::load::{Error as LoadError, Loader};
use crate::write::{Error as WriteError, Generator};
use log::info;
use std::fmt;

/// Builds the site from a [`Config`] object. [`Loader::load_posts`] and
/// [`Generator::generate`] do the heavy lifting; this function wires them
/// together and reports progress.
pub fn build_site(config: Config) -> Result<()> {
    info!("loading posts from `{}`", config.posts_directory.display());
    let loader = Loader {
        posts_directory: config.posts_directory,
        threads: config.threads,
    };
    let posts = loader.load_posts()?;
    info!("loaded {} posts", posts.len());

    info!("generating site in `{}`", config.output_directory.display());
    let generator = Generator {
        output_directory: config.output_directory,
        posts,
        title: config.title,
        threads: config.threads,
    };
    generator.generate()?;
    info!("site generation complete");

    Ok(())
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site: either the load or the generation
/// step failed. Both are fatal; there is no partial-success mode.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors loading posts.
    Load(LoadError),

    /// Returned for errors writing the site to disk.
    Write(WriteError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Load(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Write(err) => Some(err),
        }
    }
}

impl From<LoadError> for Error {
    /// Converts [`LoadError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: LoadError) -> Error {
        Error::Load(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}
