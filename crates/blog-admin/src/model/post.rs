use super::AuthorId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A blog post.
///
/// `user_id` refers to an [`Author`](super::Author) but is never checked against the
/// loaded authors; posts of unknown authors are kept and labelled `User {id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub user_id: AuthorId,
}

/// Payload for creating a new post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: AuthorId,
}

/// The submitted edit form of a post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub title: String,
    pub body: String,
    pub user_id: AuthorId,
}

impl PostUpdate {
    /// The edit form pre-filled with the post's current values.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            user_id: post.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_camel_case_user_id() {
        let post: Post = serde_json::from_value(json!({
            "userId": 1,
            "id": 1,
            "title": "sunt aut facere",
            "body": "quia et suscipit"
        }))
        .unwrap();
        assert_eq!(post.user_id, AuthorId(1));

        let body = serde_json::to_value(NewPost {
            title: "Hello".into(),
            body: "First words here".into(),
            user_id: AuthorId(4),
        })
        .unwrap();
        assert_eq!(body, json!({ "title": "Hello", "body": "First words here", "userId": 4 }));
    }
}
