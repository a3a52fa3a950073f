use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an author (the API's `users` resource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AuthorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A blog author as listed by the API.
///
/// # Collection Framework
/// This struct implements [`CollectionEntity`](collection_framework::CollectionEntity)
/// and [`RemoteResource`](collection_framework::RemoteResource) (path `users`), so it can
/// be held by a [`CollectionActor`](collection_framework::CollectionActor).
///
/// The API returns more (address, phone, company); those fields are dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

fn is_absent(website: &Option<String>) -> bool {
    website.as_deref().map_or(true, str::is_empty)
}

/// Payload for creating a new author.
#[derive(Debug, Clone, Serialize)]
pub struct NewAuthor {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub website: Option<String>,
}

/// The submitted edit form of an author.
///
/// Every editable field is sent; a missing website removes the author's website.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorUpdate {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub website: Option<String>,
}

impl AuthorUpdate {
    /// The edit form pre-filled with the author's current values.
    pub fn from_author(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            username: author.username.clone(),
            email: author.email.clone(),
            website: author.website.clone(),
        }
    }
}

/// An author whose website is known, as shown on the single-author page.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDetails {
    pub id: AuthorId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub website: String,
}

impl AuthorDetails {
    /// Link target for the website; bare host names get an `http://` prefix.
    pub fn website_url(&self) -> String {
        if self.website.starts_with("http://") || self.website.starts_with("https://") {
            self.website.clone()
        } else {
            format!("http://{}", self.website)
        }
    }
}

/// Returned when an author without a website is shown in detail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Author {0} has no website")]
pub struct MissingWebsite(pub AuthorId);

impl TryFrom<Author> for AuthorDetails {
    type Error = MissingWebsite;

    fn try_from(author: Author) -> Result<Self, Self::Error> {
        let website = author.website.ok_or(MissingWebsite(author.id))?;
        Ok(Self {
            id: author.id,
            name: author.name,
            username: author.username,
            email: author.email,
            website,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_api_user_and_ignores_extra_fields() {
        let author: Author = serde_json::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        }))
        .unwrap();
        assert_eq!(author.id, AuthorId(1));
        assert_eq!(author.website.as_deref(), Some("hildegard.org"));
    }

    #[test]
    fn website_is_optional_on_the_wire() {
        let author: Author = serde_json::from_value(json!({
            "id": 2, "name": "Ervin", "username": "Antonette", "email": "e@x.io"
        }))
        .unwrap();
        assert_eq!(author.website, None);

        let body = serde_json::to_value(NewAuthor {
            name: "Ervin".into(),
            username: "Antonette".into(),
            email: "e@x.io".into(),
            website: None,
        })
        .unwrap();
        assert!(body.get("website").is_none());
    }

    #[test]
    fn empty_website_is_not_sent() {
        let body = serde_json::to_value(NewAuthor {
            name: "Ervin".into(),
            username: "Antonette".into(),
            email: "e@x.io".into(),
            website: Some(String::new()),
        })
        .unwrap();
        assert!(body.get("website").is_none());

        let body = serde_json::to_value(AuthorUpdate {
            name: "Ervin".into(),
            username: "Antonette".into(),
            email: "e@x.io".into(),
            website: Some(String::new()),
        })
        .unwrap();
        assert!(body.get("website").is_none());
    }

    #[test]
    fn details_require_a_website() {
        let mut author = Author {
            id: AuthorId(3),
            name: "Clementine".into(),
            username: "Samantha".into(),
            email: "c@x.io".into(),
            website: None,
        };
        assert_eq!(
            AuthorDetails::try_from(author.clone()),
            Err(MissingWebsite(AuthorId(3)))
        );

        author.website = Some("ramiro.info".into());
        let details = AuthorDetails::try_from(author).unwrap();
        assert_eq!(details.website_url(), "http://ramiro.info");
    }
}
