use super::user;
use sea_orm::entity::prelude::*;

/// A household energy profile attached to a platform user.
///
/// `energy_goal` and `energy_usage` are plain watt-hour integers; both are
/// nullable because a profile can exist before any meter data arrives.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "residential_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The user this profile belongs to.
    pub user_id: i32,
    pub energy_goal: Option<i32>,
    pub energy_usage: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A profile belongs to exactly one user.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
