//! [`CollectionEntity`] implementation for [`Author`].
//!
//! Forms are checked here before anything is sent:
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | name | required | `Name is required` |
//! | username | required, at least 3 characters | `Username must be at least 3 characters` |
//! | email | required, `local@domain.tld` | `Please enter a valid email address` |
//! | website | optional, host with a TLD | `Please enter a valid website URL` |

use super::AuthorError;
use crate::model::{Author, AuthorId, AuthorUpdate, NewAuthor};
use collection_framework::{CollectionEntity, RemoteResource};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$").unwrap()
});

const MIN_USERNAME_LEN: usize = 3;

/// An empty website input counts as "no website".
fn present(website: Option<String>) -> Option<String> {
    website.filter(|w| !w.is_empty())
}

fn validate_fields(
    name: &str,
    username: &str,
    email: &str,
    website: Option<&str>,
) -> Result<(), AuthorError> {
    if name.trim().is_empty() {
        return Err(AuthorError::Validation("Name is required".into()));
    }
    if username.trim().is_empty() {
        return Err(AuthorError::Validation("Username is required".into()));
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(AuthorError::Validation(
            "Username must be at least 3 characters".into(),
        ));
    }
    if email.trim().is_empty() {
        return Err(AuthorError::Validation("Email is required".into()));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(AuthorError::Validation(
            "Please enter a valid email address".into(),
        ));
    }
    if let Some(website) = website.filter(|w| !w.is_empty()) {
        if !WEBSITE_RE.is_match(website) {
            return Err(AuthorError::Validation(
                "Please enter a valid website URL".into(),
            ));
        }
    }
    Ok(())
}

impl CollectionEntity for Author {
    type Id = AuthorId;
    type Create = NewAuthor;
    type Update = AuthorUpdate;
    type Error = AuthorError;

    fn id(&self) -> AuthorId {
        self.id
    }

    fn from_create_params(id: AuthorId, params: NewAuthor) -> Result<Self, AuthorError> {
        Ok(Self {
            id,
            name: params.name,
            username: params.username,
            email: params.email,
            website: present(params.website),
        })
    }

    /// Overwrites every editable field; `id` stays.
    fn on_update(&mut self, update: AuthorUpdate) -> Result<(), AuthorError> {
        self.name = update.name;
        self.username = update.username;
        self.email = update.email;
        self.website = present(update.website);
        Ok(())
    }

    fn validate_create(params: &NewAuthor) -> Result<(), AuthorError> {
        validate_fields(
            &params.name,
            &params.username,
            &params.email,
            params.website.as_deref(),
        )
    }

    fn validate_update(update: &AuthorUpdate) -> Result<(), AuthorError> {
        validate_fields(
            &update.name,
            &update.username,
            &update.email,
            update.website.as_deref(),
        )
    }
}

impl RemoteResource for Author {
    const PATH: &'static str = "users";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewAuthor {
        NewAuthor {
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            website: Some("hildegard.org".into()),
        }
    }

    fn rejected(params: NewAuthor) -> String {
        match Author::validate_create(&params) {
            Err(AuthorError::Validation(msg)) => msg,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert!(Author::validate_create(&form()).is_ok());
        assert!(Author::validate_create(&NewAuthor {
            website: None,
            ..form()
        })
        .is_ok());
        assert!(Author::validate_create(&NewAuthor {
            website: Some("https://www.example.com/about".into()),
            ..form()
        })
        .is_ok());
    }

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            rejected(NewAuthor {
                name: " ".into(),
                ..form()
            }),
            "Name is required"
        );
        assert_eq!(
            rejected(NewAuthor {
                username: "ab".into(),
                ..form()
            }),
            "Username must be at least 3 characters"
        );
        assert_eq!(
            rejected(NewAuthor {
                email: "not an email".into(),
                ..form()
            }),
            "Please enter a valid email address"
        );
        assert_eq!(
            rejected(NewAuthor {
                website: Some("nowhere".into()),
                ..form()
            }),
            "Please enter a valid website URL"
        );
    }

    #[test]
    fn edit_overwrites_fields_and_can_clear_website() {
        let mut author = Author::from_create_params(AuthorId(1), form()).unwrap();
        author
            .on_update(AuthorUpdate {
                name: "Leanne".into(),
                username: "Bret".into(),
                email: "leanne@april.biz".into(),
                website: Some(String::new()),
            })
            .unwrap();
        assert_eq!(author.id, AuthorId(1));
        assert_eq!(author.name, "Leanne");
        assert_eq!(author.email, "leanne@april.biz");
        assert_eq!(author.website, None);
    }

    #[test]
    fn whitespace_website_is_validated_not_dropped() {
        assert_eq!(
            rejected(NewAuthor {
                website: Some("   ".into()),
                ..form()
            }),
            "Please enter a valid website URL"
        );
        assert!(Author::validate_create(&NewAuthor {
            website: Some(String::new()),
            ..form()
        })
        .is_ok());
    }

    #[test]
    fn website_rule_is_ascii_only() {
        for website in ["bücher.de", "example.com/café", "example.com/١٢٣"] {
            assert_eq!(
                rejected(NewAuthor {
                    website: Some(website.into()),
                    ..form()
                }),
                "Please enter a valid website URL",
                "{website}"
            );
        }
        assert!(Author::validate_create(&NewAuthor {
            website: Some("example.com/about_us-2".into()),
            ..form()
        })
        .is_ok());
    }
}
