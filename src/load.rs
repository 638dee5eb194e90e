//! Parses [`Post`] objects from a posts directory. Each immediate
//! subdirectory is one post and must contain a `meta.yaml` metadata file and
//! a `content.md` Markdown file; anything else in the posts directory
//! (regular files, hidden entries) is skipped without error. A single
//! malformed post fails the whole load.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::date;
use crate::post::{Post, Update};

const METADATA_FILE: &str = "meta.yaml";
const CONTENT_FILE: &str = "content.md";

/// Loads [`Post`] objects from source directories.
pub struct Loader {
    /// The directory whose immediate subdirectories are posts.
    pub posts_directory: PathBuf,

    /// Worker thread count. Anything below 2 selects the sequential path;
    /// either path returns the same collection.
    pub threads: usize,
}

impl Loader {
    /// Reads every post directory and returns the collection sorted by slug.
    /// Date ordering is the generator's responsibility, not the loader's.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let entries = self.post_directories()?;
        let mut posts = if self.threads < 2 {
            entries
                .iter()
                .map(|(slug, dir)| Self::load_post(slug, dir))
                .collect::<Result<Vec<Post>>>()?
        } else {
            Self::load_posts_parallel(entries, self.threads)?
        };
        posts.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(posts)
    }

    /// Enumerates the post directories as `(slug, path)` pairs. Non-directory
    /// entries and hidden entries produce no post and no error.
    fn post_directories(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut dirs = Vec::new();
        for result in fs::read_dir(&self.posts_directory)? {
            let entry = result?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let slug = entry.file_name().to_string_lossy().to_string();
            if slug.starts_with('.') {
                continue;
            }
            dirs.push((slug, entry.path()));
        }
        Ok(dirs)
    }

    fn load_posts_parallel(
        entries: Vec<(String, PathBuf)>,
        threads: usize,
    ) -> Result<Vec<Post>> {
        use crossbeam_channel::unbounded;
        use std::thread;

        let (tx, rx) = unbounded::<(String, PathBuf)>();
        let mut workers = Vec::with_capacity(threads);

        for _ in 0..workers.capacity() {
            let rx = rx.clone();
            workers.push(thread::spawn(move || -> Result<Vec<Post>> {
                let mut posts = Vec::new();
                for (slug, dir) in rx {
                    posts.push(Self::load_post(&slug, &dir)?);
                }
                Ok(posts)
            }));
        }
        drop(rx);

        for entry in entries {
            // A send fails only once every worker has bailed out; the join
            // below surfaces the cause.
            if tx.send(entry).is_err() {
                break;
            }
        }
        drop(tx);

        let mut posts = Vec::new();
        for worker in workers {
            posts.extend(worker.join().unwrap()?);
        }
        Ok(posts)
    }

    /// Loads a single post, annotating any failure with the post directory.
    fn load_post(slug: &str, dir: &Path) -> Result<Post> {
        match Self::read_post(slug, dir) {
            Ok(post) => Ok(post),
            Err(err) => Err(Error::Post {
                dir: dir.to_owned(),
                err: Box::new(err),
            }),
        }
    }

    fn read_post(slug: &str, dir: &Path) -> Result<Post> {
        let metadata_path = dir.join(METADATA_FILE);
        if !metadata_path.is_file() {
            return Err(Error::MissingMetadata);
        }
        let content_path = dir.join(CONTENT_FILE);
        if !content_path.is_file() {
            return Err(Error::MissingContent);
        }

        let metadata: Metadata = serde_yaml::from_str(&fs::read_to_string(&metadata_path)?)?;
        let content = fs::read_to_string(&content_path)?;

        let updates = metadata
            .updates
            .into_iter()
            .map(|u| {
                Ok(Update {
                    date: date::parse(&u.date)?,
                    description: u.description,
                })
            })
            .collect::<Result<Vec<Update>>>()?;

        Ok(Post {
            title: metadata.title,
            date: date::parse(&metadata.date)?,
            tags: metadata.tags,
            categories: metadata.categories,
            slug: slug.to_owned(),
            content,
            updates,
        })
    }
}

/// The wire format of `meta.yaml`. The four top-level fields are required;
/// `updates` defaults to empty. Tag and category order is preserved as read.
#[derive(Deserialize)]
struct Metadata {
    title: String,
    date: String,
    tags: Vec<String>,
    categories: Vec<String>,
    #[serde(default)]
    updates: Vec<UpdateEntry>,
}

#[derive(Deserialize)]
struct UpdateEntry {
    date: String,
    description: String,
}

/// Represents the result of a post-loading operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading a [`Post`].
#[derive(Debug)]
pub enum Error {
    /// Returned when a post directory has no `meta.yaml`.
    MissingMetadata,

    /// Returned when a post directory has no `content.md`.
    MissingContent,

    /// Returned when the metadata fails to parse, including when a required
    /// field is absent.
    Metadata(serde_yaml::Error),

    /// Returned when a post or update date matches neither accepted format.
    Date(date::Error),

    /// Returned for other I/O errors.
    Io(std::io::Error),

    /// An error annotated with the post directory it came from.
    Post { dir: PathBuf, err: Box<Error> },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingMetadata => write!(f, "missing {}", METADATA_FILE),
            Error::MissingContent => write!(f, "missing {}", CONTENT_FILE),
            Error::Metadata(err) => write!(f, "invalid metadata: {}", err),
            Error::Date(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
            Error::Post { dir, err } => {
                write!(f, "loading post `{}`: {}", dir.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingMetadata => None,
            Error::MissingContent => None,
            Error::Metadata(err) => Some(err),
            Error::Date(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Post { dir: _, err } => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator for metadata deserialization.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Metadata(err)
    }
}

impl From<date::Error> for Error {
    /// Converts a [`date::Error`] into an [`Error`]. It allows us to use the
    /// `?` operator for date parsing.
    fn from(err: date::Error) -> Error {
        Error::Date(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts a [`std::io::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for fallible I/O functions.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
