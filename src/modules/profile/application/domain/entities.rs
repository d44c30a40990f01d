use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{optional_text, validate_phone, validate_url, FieldError};

const NAME_MAX_LENGTH: usize = 255;
const URL_MAX_LENGTH: usize = 255;
const CAPTION_MAX_LENGTH: usize = 2_000;
const ADDRESS_MAX_LENGTH: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Personal details attached one-to-one to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Profile {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: Uuid,
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    /// Stored reference to the uploaded avatar image
    #[schema(example = "avatars/ada.png")]
    pub avatar: Option<String>,
    pub caption: Option<String>,
    #[schema(example = "09123456789")]
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub full_address: Option<String>,
    pub facebook_url: Option<String>,
    #[schema(example = "https://github.com/ada")]
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub is_public: bool,
}

impl Profile {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            first_name: None,
            last_name: None,
            avatar: None,
            caption: None,
            phone: None,
            gender: None,
            full_address: None,
            facebook_url: None,
            github_url: None,
            linkedin_url: None,
            twitter_url: None,
            website_url: None,
            is_public: false,
        }
    }

    /// "first last", or the username when neither name is set.
    pub fn full_name(&self, username: &str) -> String {
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();

        if joined.is_empty() {
            username.to_string()
        } else {
            joined.to_string()
        }
    }

    pub fn title(username: &str) -> String {
        format!("{}'s Profile", username)
    }
}

/// Raw profile form. Blank strings clear the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub caption: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub full_address: Option<String>,
    pub facebook_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub is_public: bool,
}

fn optional_url(field: &'static str, raw: Option<&str>) -> Result<Option<String>, FieldError> {
    optional_text(field, raw, URL_MAX_LENGTH)?
        .map(|url| validate_url(field, &url))
        .transpose()
}

impl ProfileChanges {
    /// Validates every field and produces the full replacement profile.
    pub fn into_profile(self, user_id: Uuid) -> Result<Profile, FieldError> {
        let phone = optional_text("phone", self.phone.as_deref(), 11)
            .map_err(|_| FieldError::new("phone", "Please enter a valid phone number."))?
            .map(|phone| validate_phone("phone", &phone))
            .transpose()?;

        Ok(Profile {
            user_id,
            first_name: optional_text("first_name", self.first_name.as_deref(), NAME_MAX_LENGTH)?,
            last_name: optional_text("last_name", self.last_name.as_deref(), NAME_MAX_LENGTH)?,
            avatar: optional_text("avatar", self.avatar.as_deref(), URL_MAX_LENGTH)?,
            caption: optional_text("caption", self.caption.as_deref(), CAPTION_MAX_LENGTH)?,
            phone,
            gender: self.gender,
            full_address: optional_text(
                "full_address",
                self.full_address.as_deref(),
                ADDRESS_MAX_LENGTH,
            )?,
            facebook_url: optional_url("facebook_url", self.facebook_url.as_deref())?,
            github_url: optional_url("github_url", self.github_url.as_deref())?,
            linkedin_url: optional_url("linkedin_url", self.linkedin_url.as_deref())?,
            twitter_url: optional_url("twitter_url", self.twitter_url.as_deref())?,
            website_url: optional_url("website_url", self.website_url.as_deref())?,
            is_public: self.is_public,
        })
    }
}

/// A profile together with the account names it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileView {
    #[schema(example = "ada's Profile")]
    pub title: String,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    pub profile: Profile,
}

impl ProfileView {
    pub fn new(username: &str, profile: Profile) -> Self {
        Self {
            title: Profile::title(username),
            username: username.to_string(),
            full_name: profile.full_name(username),
            profile,
        }
    }
}
