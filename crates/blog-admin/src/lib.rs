//! # Blog Admin
//!
//! Client-side administration of a blog's authors and posts against the JSONPlaceholder
//! REST API (`/users`, `/posts`), built on [`collection_framework`].
//!
//! The API answers every write but stores nothing, so each view keeps its own list:
//! loaded once, then changed locally after every successful call.
//!
//! ## Module Tour
//!
//! - **[`model`]**: record shapes ([`Author`](model::Author), [`Post`](model::Post)) and their form payloads.
//! - **[`author_collection`] / [`post_collection`]**: the entity implementations, form rules and errors.
//! - **[`clients`]**: typed wrappers ([`AuthorClient`](clients::AuthorClient), [`PostClient`](clients::PostClient)).
//! - **[`stats`]**: post counts, totals, averages and chart data.
//! - **[`lifecycle`]**: the four pages as views that own their collections.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p blog-admin -- --page 2 --author 3
//! ```

pub mod author_collection;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod post_collection;
pub mod stats;
