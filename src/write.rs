//! Responsible for turning a loaded [`Post`] collection into the output
//! site: one page per post, the home page, category and tag pages with their
//! indices, and the full posts index. Page emission is a fan-out of
//! independent work units over a worker pool followed by a join that
//! propagates the first failure; a sequential run produces byte-identical
//! output. Cross-page links are relative: post, category, and tag pages sit
//! two directories below the site root, section indices one.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::date;
use crate::markdown;
use crate::page;
use crate::post::Post;

/// Number of posts shown in full on the home page.
const HOME_PAGE_POSTS: usize = 3;

const POSTS_DIR: &str = "posts";
const CATEGORIES_DIR: &str = "categories";
const TAGS_DIR: &str = "tags";

/// Emits the whole site from a post collection. Construct with struct
/// literal syntax and consume with [`Generator::generate`].
pub struct Generator {
    /// The site root on disk. Created if absent.
    pub output_directory: PathBuf,

    /// The loaded posts, in any order. Listings sort by date descending;
    /// ties keep the input order.
    pub posts: Vec<Post>,

    /// The site title, used on the home page.
    pub title: String,

    /// Worker thread count. Anything below 2 selects the sequential path.
    pub threads: usize,
}

/// One independent unit of page emission. Units share nothing mutable; each
/// writes only its own output files.
enum Job {
    /// One post page, by index into the post collection.
    Post(usize),
    Home,
    Categories,
    Tags,
    PostsIndex,
}

impl Generator {
    /// Creates the output directory tree and emits every page. Any failed
    /// write fails the whole operation with the offending path.
    pub fn generate(self) -> Result<()> {
        ensure_dir(&self.output_directory)?;
        for section in [POSTS_DIR, CATEGORIES_DIR, TAGS_DIR] {
            ensure_dir(&self.output_directory.join(section))?;
        }

        let jobs = self.jobs();
        if self.threads < 2 {
            for job in jobs {
                self.run_job(&job)?;
            }
            return Ok(());
        }

        use crossbeam_channel::unbounded;
        use std::thread;

        let generator = Arc::new(self);
        let (tx, rx) = unbounded::<Job>();
        let mut workers = Vec::with_capacity(generator.threads);

        for _ in 0..workers.capacity() {
            let rx = rx.clone();
            let generator = Arc::clone(&generator);
            workers.push(thread::spawn(move || -> Result<()> {
                for job in rx {
                    generator.run_job(&job)?;
                }
                Ok(())
            }));
        }
        drop(rx);

        for job in jobs {
            // A send fails only once every worker has bailed out; the join
            // below surfaces the cause.
            if tx.send(job).is_err() {
                break;
            }
        }
        drop(tx);

        for worker in workers {
            worker.join().unwrap()?;
        }
        Ok(())
    }

    fn jobs(&self) -> Vec<Job> {
        let mut jobs = vec![Job::Home, Job::Categories, Job::Tags, Job::PostsIndex];
        jobs.extend((0..self.posts.len()).map(Job::Post));
        jobs
    }

    fn run_job(&self, job: &Job) -> Result<()> {
        match job {
            Job::Post(i) => self.write_post(&self.posts[*i]),
            Job::Home => self.write_home(),
            Job::Categories => self.write_categories(),
            Job::Tags => self.write_tags(),
            Job::PostsIndex => self.write_posts_index(),
        }
    }

    fn write_post(&self, post: &Post) -> Result<()> {
        let dir = self.output_directory.join(POSTS_DIR).join(&post.slug);
        ensure_dir(&dir)?;
        write_page(&dir.join("index.html"), &self.post_page(post))
    }

    fn write_home(&self) -> Result<()> {
        write_page(&self.output_directory.join("index.html"), &self.home_page())
    }

    fn write_posts_index(&self) -> Result<()> {
        write_page(
            &self.output_directory.join(POSTS_DIR).join("index.html"),
            &self.posts_index(),
        )
    }

    fn write_categories(&self) -> Result<()> {
        self.write_term_pages(
            CATEGORIES_DIR,
            "Categories",
            "Category",
            |post| post.categories.as_slice(),
            |name| format!("Posts in {}", name),
        )
    }

    fn write_tags(&self) -> Result<()> {
        self.write_term_pages(
            TAGS_DIR,
            "Tags",
            "Tag",
            |post| post.tags.as_slice(),
            |name| format!("Posts tagged with {}", name),
        )
    }

    /// Emits the per-name pages and the index for one grouping section
    /// (categories or tags). The name → posts mapping is computed here and
    /// discarded with the call.
    fn write_term_pages<'a>(
        &'a self,
        section: &str,
        index_label: &str,
        title_kind: &str,
        select: impl Fn(&'a Post) -> &'a [String],
        heading: impl Fn(&str) -> String,
    ) -> Result<()> {
        let mut groups: BTreeMap<&str, Vec<&Post>> = BTreeMap::new();
        for post in &self.posts {
            for name in select(post) {
                groups.entry(name).or_default().push(post);
            }
        }

        let section_dir = self.output_directory.join(section);
        for (name, posts) in &groups {
            let dir = section_dir.join(name);
            ensure_dir(&dir)?;
            let title = format!("{}: {}", title_kind, name);
            write_page(
                &dir.join("index.html"),
                &self.term_page(index_label, &title, &heading(name), posts),
            )?;
        }

        write_page(
            &section_dir.join("index.html"),
            &self.term_index(index_label, &groups),
        )
    }

    /// The page for one post: full content, metadata block, and the updates
    /// section when the post has updates.
    fn post_page(&self, post: &Post) -> String {
        let root = page::root(2);
        let nav = page::nav(&[(root.as_str(), "Home")]);

        let mut main = String::from("<article>\n<header>\n");
        main.push_str(&format!("<h1>{}</h1>\n", page::escape(&post.title)));
        main.push_str("<div class=\"meta\">\n");
        main.push_str(&format!(
            "<div class=\"meta-item\">\n<span class=\"meta-label\">Published:</span>\n{}\n</div>\n",
            page::datetime(&post.date)
        ));
        main.push_str(&format!(
            "<div class=\"meta-item\">\n<span class=\"meta-label\">Categories:</span>\n{}\n</div>\n",
            page::term_list(&root, CATEGORIES_DIR, "category", &post.categories)
        ));
        main.push_str(&format!(
            "<div class=\"meta-item\">\n<span class=\"meta-label\">Tags:</span>\n{}\n</div>\n",
            page::term_list(&root, TAGS_DIR, "tag", &post.tags)
        ));
        main.push_str("</div>\n</header>\n");
        main.push_str(&format!(
            "<div class=\"content\">\n{}\n</div>\n",
            markdown::to_html(&post.content)
        ));
        main.push_str(&updates_section(post));
        main.push_str("</article>");

        let description = format!("Article about {}", post.title);
        page::document(&post.title, Some(&description), &nav, &main)
    }

    /// The home page: the most recent posts in full, links to the section
    /// indices and the full listing.
    fn home_page(&self) -> String {
        let nav = page::nav(&[("categories/", "Categories"), ("tags/", "Tags")]);

        let mut main = String::from("<h1>Recent Posts</h1>\n");
        let recent = by_date_desc(&self.posts);
        if recent.is_empty() {
            main.push_str("<p>No posts found.</p>\n");
        } else {
            for post in recent.iter().take(HOME_PAGE_POSTS) {
                main.push_str(&self.post_preview(post));
            }
        }
        main.push_str("<p><a href=\"posts/\">View all posts</a></p>");

        page::document(&self.title, None, &nav, &main)
    }

    /// One full-content home page entry.
    fn post_preview(&self, post: &Post) -> String {
        let root = page::root(0);
        format!(
            "<article class=\"post\">\n<h2><a href=\"posts/{slug}/\">{title}</a></h2>\n\
             <div class=\"meta\">\n{date}{badge}\n{categories}\n{tags}\n</div>\n\
             <div class=\"content\">\n{content}\n</div>\n</article>\n",
            slug = page::href(&post.slug),
            title = page::escape(&post.title),
            date = page::datetime(&post.date),
            badge = update_badge(post),
            categories = page::term_list(&root, CATEGORIES_DIR, "category", &post.categories),
            tags = page::term_list(&root, TAGS_DIR, "tag", &post.tags),
            content = markdown::to_html(&post.content),
        )
    }

    /// The full posts listing at `posts/index.html`.
    fn posts_index(&self) -> String {
        let root = page::root(1);
        let nav = page::nav(&[(root.as_str(), "Home")]);

        let mut main = String::from("<h1>All Posts</h1>\n<ul class=\"post-list\">\n");
        for post in by_date_desc(&self.posts) {
            main.push_str(&format!(
                "<li class=\"post-item\">\n<h2><a href=\"{slug}/\">{title}</a></h2>\n\
                 <div class=\"post-meta\">\n{date}{badge}\n{categories}\n{tags}\n</div>\n</li>\n",
                slug = page::href(&post.slug),
                title = page::escape(&post.title),
                date = page::datetime(&post.date),
                badge = update_badge(post),
                categories = page::term_list(&root, CATEGORIES_DIR, "category", &post.categories),
                tags = page::term_list(&root, TAGS_DIR, "tag", &post.tags),
            ));
        }
        main.push_str("</ul>");

        page::document("All Posts", None, &nav, &main)
    }

    /// The page for one category or tag: every post referencing the name,
    /// date descending.
    fn term_page(&self, index_label: &str, title: &str, heading: &str, posts: &[&Post]) -> String {
        let root = page::root(2);
        let nav = page::nav(&[(root.as_str(), "Home"), ("../", index_label)]);

        let mut main = format!("<h1>{}</h1>\n<ul>\n", page::escape(heading));
        for post in by_date_desc(posts.iter().copied()) {
            main.push_str(&format!(
                "<li><a href=\"{root}posts/{slug}/\">{title}</a> - {date}</li>\n",
                root = root,
                slug = page::href(&post.slug),
                title = page::escape(&post.title),
                date = page::datetime(&post.date),
            ));
        }
        main.push_str("</ul>");

        page::document(title, None, &nav, &main)
    }

    /// The index of all category or tag names, sorted lexicographically.
    fn term_index(&self, title: &str, groups: &BTreeMap<&str, Vec<&Post>>) -> String {
        let nav = page::nav(&[("../", "Home")]);

        let mut main = format!("<h1>{}</h1>\n<ul>\n", title);
        for name in groups.keys() {
            main.push_str(&format!(
                "<li><a href=\"{}/\">{}</a></li>\n",
                page::href(name),
                page::escape(name)
            ));
        }
        main.push_str("</ul>");

        page::document(title, None, &nav, &main)
    }
}

/// The updates section of a post page, or nothing when the post has none.
/// Updates render date descending regardless of storage order.
fn updates_section(post: &Post) -> String {
    if post.updates.is_empty() {
        return String::new();
    }
    let mut section = String::from("<section class=\"updates\">\n<h2>Updates</h2>\n");
    for update in post.sorted_updates() {
        section.push_str(&format!(
            "<div class=\"update-item\">\n\
             <time class=\"update-date\" datetime=\"{}\">{}</time>\n\
             <div class=\"update-description\">{}</div>\n</div>\n",
            date::machine(&update.date),
            date::human(&update.date),
            page::escape(&update.description),
        ));
    }
    section.push_str("</section>\n");
    section
}

/// The `Updated` badge shown next to listing entries for posts with updates.
fn update_badge(post: &Post) -> String {
    match post.latest_update() {
        Some(update) => format!(
            r#" <span class="update-badge" title="Last updated {}">Updated</span>"#,
            date::human(&update.date)
        ),
        None => String::new(),
    }
}

/// Sorts posts by date descending. The sort is stable, so ties keep the
/// input order and the result is deterministic for a fixed input.
fn by_date_desc<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Vec<&'a Post> {
    let mut posts: Vec<&Post> = posts.into_iter().collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| Error::CreateDir {
        path: path.to_owned(),
        err,
    })
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| Error::WritePage {
        path: path.to_owned(),
        err,
    })
}

/// The result of a fallible page-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems creating an output directory.
    CreateDir { path: PathBuf, err: io::Error },

    /// Returned for I/O problems writing an output page.
    WritePage { path: PathBuf, err: io::Error },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CreateDir { path, err } => {
                write!(f, "creating directory `{}`: {}", path.display(), err)
            }
            Error::WritePage { path, err } => {
                write!(f, "writing page `{}`: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CreateDir { path: _, err } => Some(err),
            Error::WritePage { path: _, err } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date;
    use crate::post::Update;
    use std::path::Path;

    fn post(slug: &str, title: &str, date_str: &str, tags: &[&str], categories: &[&str], content: &str) -> Post {
        Post {
            title: title.to_owned(),
            date: date::parse(date_str).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            slug: slug.to_owned(),
            content: content.to_owned(),
            updates: Vec::new(),
        }
    }

    fn generator(dir: &Path, posts: Vec<Post>) -> Generator {
        Generator {
            output_directory: dir.to_owned(),
            posts,
            title: String::from("Blog"),
            threads: 1,
        }
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn test_generate_site_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post(
            "test-post",
            "Test Post",
            "2024-02-10",
            &["test1", "test2"],
            &["cat1", "cat2"],
            "Test content",
        )];
        generator(tmp.path(), posts).generate().unwrap();

        for rel in [
            "index.html",
            "posts/index.html",
            "posts/test-post/index.html",
            "categories/index.html",
            "categories/cat1/index.html",
            "categories/cat2/index.html",
            "tags/index.html",
            "tags/test1/index.html",
            "tags/test2/index.html",
        ] {
            assert!(tmp.path().join(rel).is_file(), "missing {}", rel);
        }
    }

    #[test]
    fn test_generate_empty_site() {
        let tmp = tempfile::tempdir().unwrap();
        generator(tmp.path(), Vec::new()).generate().unwrap();

        for rel in [
            "index.html",
            "posts/index.html",
            "categories/index.html",
            "tags/index.html",
        ] {
            assert!(tmp.path().join(rel).is_file(), "missing {}", rel);
        }
        let home = read(tmp.path(), "index.html");
        assert!(home.contains("No posts found."));
    }

    #[test]
    fn test_markdown_rendered_on_post_page() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post(
            "test-post",
            "Test Post",
            "2024-02-10",
            &["test"],
            &["cat"],
            "# Heading\n\nThis is a **bold** text.",
        )];
        generator(tmp.path(), posts).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("This is a <strong>bold</strong> text."));
    }

    #[test]
    fn test_script_stripped_from_post_page() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post(
            "test-post",
            "Test Post",
            "2024-02-10",
            &["test"],
            &["cat"],
            "Normal text <script>alert('xss')</script> More text",
        )];
        generator(tmp.path(), posts).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(!html.contains("<script>"));
        assert!(html.contains("Normal text"));
        assert!(html.contains("More text"));
    }

    #[test]
    fn test_post_page_structure() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post(
            "test-post",
            "Test Post",
            "2024-02-10",
            &["test1", "test2"],
            &["cat1"],
            "Test content",
        )];
        generator(tmp.path(), posts).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(html.contains("<title>Test Post</title>"));
        assert!(html.contains("<h1>Test Post</h1>"));
        assert!(html.contains(r#"<meta name="description" content="Article about Test Post">"#));
        assert!(html.contains("<article>"));
        assert!(html.contains("<header>"));
        assert!(html.contains("<main>"));
        assert!(html.contains("<footer>"));
        assert!(html.contains(r#"<nav role="navigation" aria-label="Main navigation">"#));
        assert!(html.contains(r#"role="list""#));
        assert!(html.contains(r#"role="listitem""#));
        // Post pages sit two directories deep.
        assert!(html.contains(r#"href="../../tags/test1/""#));
        assert!(html.contains(r#"href="../../tags/test2/""#));
        assert!(html.contains(r#"href="../../categories/cat1/""#));
        assert!(html.contains(r#"<a href="../../">Home</a>"#));
    }

    #[test]
    fn test_date_formatting() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post("test-post", "Test Post", "2024-02-10", &[], &[], "x")];
        generator(tmp.path(), posts).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(html.contains(r#"datetime="2024-02-10T00:00:00Z""#));
        assert!(html.contains("February 10, 2024"));
    }

    #[test]
    fn test_updates_render_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        let mut p = post("test-post", "Test Post", "2024-02-10", &["test"], &["cat"], "Original content");
        p.updates = vec![
            Update {
                date: date::parse("2024-02-11").unwrap(),
                description: String::from("Added new section"),
            },
            Update {
                date: date::parse("2024-02-12").unwrap(),
                description: String::from("Fixed typos"),
            },
        ];
        generator(tmp.path(), vec![p]).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(html.contains(r#"<section class="updates">"#));
        assert!(html.contains("<h2>Updates</h2>"));
        let fixed = html.find("Fixed typos").unwrap();
        let added = html.find("Added new section").unwrap();
        assert!(fixed < added, "newest update must come first");
        assert!(html.contains("February 11, 2024"));
        assert!(html.contains("February 12, 2024"));

        // Listings carry the badge with the most recent update date.
        let home = read(tmp.path(), "index.html");
        assert!(home.contains(r#"<span class="update-badge""#));
        assert!(home.contains("Last updated February 12, 2024"));
    }

    #[test]
    fn test_no_updates_no_section() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post("test-post", "Test Post", "2024-02-10", &[], &[], "x")];
        generator(tmp.path(), posts).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(!html.contains(r#"<section class="updates">"#));
        assert!(!read(tmp.path(), "index.html").contains("update-badge"));
    }

    #[test]
    fn test_listings_sorted_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![
            post("old-post", "Old Post", "2024-02-08", &["shared"], &["all"], "x"),
            post("new-post", "New Post", "2024-02-10", &["shared"], &["all"], "x"),
            post("middle-post", "Middle Post", "2024-02-09", &["shared"], &["all"], "x"),
        ];
        generator(tmp.path(), posts).generate().unwrap();

        for rel in [
            "index.html",
            "posts/index.html",
            "tags/shared/index.html",
            "categories/all/index.html",
        ] {
            let html = read(tmp.path(), rel);
            let new = html.find("New Post").unwrap();
            let middle = html.find("Middle Post").unwrap();
            let old = html.find("Old Post").unwrap();
            assert!(new < middle && middle < old, "wrong order in {}", rel);
        }
    }

    #[test]
    fn test_home_shows_three_most_recent() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![
            post("post-1", "First Post", "2024-02-01", &[], &[], "x"),
            post("post-2", "Second Post", "2024-02-02", &[], &[], "x"),
            post("post-3", "Third Post", "2024-02-03", &[], &[], "x"),
            post("post-4", "Fourth Post", "2024-02-04", &[], &[], "x"),
        ];
        generator(tmp.path(), posts).generate().unwrap();

        let home = read(tmp.path(), "index.html");
        assert!(home.contains("Fourth Post"));
        assert!(home.contains("Third Post"));
        assert!(home.contains("Second Post"));
        assert!(!home.contains("First Post"));
        assert!(home.contains(r#"<a href="posts/">View all posts</a>"#));
        assert!(home.contains(r#"<a href="categories/">Categories</a>"#));
        assert!(home.contains(r#"<a href="tags/">Tags</a>"#));

        let all = read(tmp.path(), "posts/index.html");
        for title in ["First Post", "Second Post", "Third Post", "Fourth Post"] {
            assert!(all.contains(title));
        }
    }

    #[test]
    fn test_term_pages_and_indices() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![
            post("post-1", "First Post", "2024-02-01", &["zeta", "alpha"], &["prose"], "x"),
            post("post-2", "Second Post", "2024-02-02", &["alpha"], &["code"], "x"),
        ];
        generator(tmp.path(), posts).generate().unwrap();

        // Every referenced name has a page and an index entry.
        for rel in [
            "tags/zeta/index.html",
            "tags/alpha/index.html",
            "categories/prose/index.html",
            "categories/code/index.html",
        ] {
            assert!(tmp.path().join(rel).is_file(), "missing {}", rel);
        }

        let tag_index = read(tmp.path(), "tags/index.html");
        assert!(tag_index.contains(r#"<a href="alpha/">alpha</a>"#));
        assert!(tag_index.contains(r#"<a href="zeta/">zeta</a>"#));
        // Lexicographic order.
        assert!(tag_index.find("alpha").unwrap() < tag_index.find("zeta").unwrap());

        let tag_page = read(tmp.path(), "tags/alpha/index.html");
        assert!(tag_page.contains("Posts tagged with alpha"));
        assert!(tag_page.contains(r#"href="../../posts/post-1/""#));
        assert!(tag_page.contains(r#"href="../../posts/post-2/""#));
        assert!(tag_page.contains(r#"<a href="../">Tags</a>"#));

        let category_page = read(tmp.path(), "categories/prose/index.html");
        assert!(category_page.contains("Posts in prose"));
        assert!(category_page.contains(r#"<a href="../">Categories</a>"#));
    }

    #[test]
    fn test_user_text_escaped() {
        let tmp = tempfile::tempdir().unwrap();
        let posts = vec![post(
            "test-post",
            "Tags & <Things>",
            "2024-02-10",
            &["c&c"],
            &[],
            "x",
        )];
        generator(tmp.path(), posts).generate().unwrap();

        let html = read(tmp.path(), "posts/test-post/index.html");
        assert!(html.contains("Tags &amp; &lt;Things&gt;"));
        assert!(!html.contains("<Things>"));
        assert!(html.contains(">c&amp;c</a>"));
    }

    #[test]
    fn test_parallel_output_matches_sequential() {
        let posts: Vec<Post> = (0..8)
            .map(|i| {
                post(
                    &format!("post-{}", i),
                    &format!("Post {}", i),
                    &format!("2024-02-{:02}", i + 1),
                    &["shared"],
                    &["all"],
                    "Some **content** here.",
                )
            })
            .collect();

        let sequential = tempfile::tempdir().unwrap();
        let parallel = tempfile::tempdir().unwrap();
        generator(sequential.path(), posts.clone()).generate().unwrap();
        Generator {
            output_directory: parallel.path().to_owned(),
            posts,
            title: String::from("Blog"),
            threads: 4,
        }
        .generate()
        .unwrap();

        for rel in [
            "index.html",
            "posts/index.html",
            "posts/post-3/index.html",
            "tags/index.html",
            "tags/shared/index.html",
            "categories/all/index.html",
        ] {
            assert_eq!(
                read(sequential.path(), rel),
                read(parallel.path(), rel),
                "output differs for {}",
                rel
            );
        }
    }

    #[test]
    fn test_unwritable_output_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("output");
        fs::write(&blocker, "in the way").unwrap();

        let err = generator(&blocker, Vec::new()).generate().unwrap_err();
        assert!(err.to_string().contains("output"));
    }
}
