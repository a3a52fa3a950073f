//! # Derived Aggregates
//!
//! Pure functions over the current author and post lists. Nothing here is cached:
//! callers recompute from fresh snapshots whenever the lists change.

use crate::model::{Author, AuthorId, Post};

/// Number of posts written by `author`.
pub fn post_count(posts: &[Post], author: AuthorId) -> usize {
    posts.iter().filter(|p| p.user_id == author).count()
}

pub fn total_posts(posts: &[Post]) -> usize {
    posts.len()
}

pub fn total_authors(authors: &[Author]) -> usize {
    authors.len()
}

/// Posts per author rounded to two decimals; `0.0` when there are no authors.
pub fn average_posts_per_author(authors: &[Author], posts: &[Post]) -> f64 {
    if authors.is_empty() {
        return 0.0;
    }
    let average = posts.len() as f64 / authors.len() as f64;
    (average * 100.0).round() / 100.0
}

/// One `(author name, post count)` bar per author, in author order.
pub fn chart_series(authors: &[Author], posts: &[Post]) -> Vec<(String, usize)> {
    authors
        .iter()
        .map(|a| (a.name.clone(), post_count(posts, a.id)))
        .collect()
}

/// An author listed together with how many posts they wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRow {
    pub author: Author,
    pub post_count: usize,
}

/// Rows of the authors table.
pub fn author_rows(authors: &[Author], posts: &[Post]) -> Vec<AuthorRow> {
    authors
        .iter()
        .map(|a| AuthorRow {
            author: a.clone(),
            post_count: post_count(posts, a.id),
        })
        .collect()
}

/// Display name for a post's author. Unknown ids render as `User {id}`.
pub fn author_label(authors: &[Author], author: AuthorId) -> String {
    authors
        .iter()
        .find(|a| a.id == author)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| format!("User {author}"))
}

/// The statistics page in one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_authors: usize,
    pub total_posts: usize,
    pub average_posts_per_author: f64,
    pub chart: Vec<(String, usize)>,
}

impl Summary {
    pub fn compute(authors: &[Author], posts: &[Post]) -> Self {
        Self {
            total_authors: total_authors(authors),
            total_posts: total_posts(posts),
            average_posts_per_author: average_posts_per_author(authors, posts),
            chart: chart_series(authors, posts),
        }
    }

    /// The average as shown on the page, always with two decimals.
    pub fn average_label(&self) -> String {
        format!("{:.2}", self.average_posts_per_author)
    }
}
