//! [`CollectionEntity`] implementation for [`Post`].
//!
//! The author reference is taken as is; posts may point at authors that are not loaded.

use super::PostError;
use crate::model::{NewPost, Post, PostId, PostUpdate};
use collection_framework::{CollectionEntity, RemoteResource};

const MIN_TITLE_LEN: usize = 3;
const MIN_BODY_LEN: usize = 10;

fn validate_fields(title: &str, body: &str) -> Result<(), PostError> {
    if title.trim().is_empty() {
        return Err(PostError::Validation("Title is required".into()));
    }
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(PostError::Validation(
            "Title must be at least 3 characters".into(),
        ));
    }
    if body.trim().is_empty() {
        return Err(PostError::Validation("Content is required".into()));
    }
    if body.chars().count() < MIN_BODY_LEN {
        return Err(PostError::Validation(
            "Content must be at least 10 characters".into(),
        ));
    }
    Ok(())
}

impl CollectionEntity for Post {
    type Id = PostId;
    type Create = NewPost;
    type Update = PostUpdate;
    type Error = PostError;

    fn id(&self) -> PostId {
        self.id
    }

    fn from_create_params(id: PostId, params: NewPost) -> Result<Self, PostError> {
        Ok(Self {
            id,
            title: params.title,
            body: params.body,
            user_id: params.user_id,
        })
    }

    fn on_update(&mut self, update: PostUpdate) -> Result<(), PostError> {
        self.title = update.title;
        self.body = update.body;
        self.user_id = update.user_id;
        Ok(())
    }

    fn validate_create(params: &NewPost) -> Result<(), PostError> {
        validate_fields(&params.title, &params.body)
    }

    fn validate_update(update: &PostUpdate) -> Result<(), PostError> {
        validate_fields(&update.title, &update.body)
    }
}

impl RemoteResource for Post {
    const PATH: &'static str = "posts";
}
