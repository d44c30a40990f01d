use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::profile::application::domain::{Gender, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum GenderCode {
    #[sea_orm(string_value = "M")]
    Male,
    #[sea_orm(string_value = "F")]
    Female,
}

impl From<GenderCode> for Gender {
    fn from(code: GenderCode) -> Self {
        match code {
            GenderCode::Male => Gender::Male,
            GenderCode::Female => Gender::Female,
        }
    }
}

impl From<Gender> for GenderCode {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderCode::Male,
            Gender::Female => GenderCode::Female,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<GenderCode>,
    #[sea_orm(column_type = "Text", nullable)]
    pub full_address: Option<String>,
    pub facebook_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Profile {
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            avatar: model.avatar,
            caption: model.caption,
            phone: model.phone,
            gender: model.gender.map(Gender::from),
            full_address: model.full_address,
            facebook_url: model.facebook_url,
            github_url: model.github_url,
            linkedin_url: model.linkedin_url,
            twitter_url: model.twitter_url,
            website_url: model.website_url,
            is_public: model.is_public,
        }
    }
}
