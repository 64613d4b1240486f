use sea_orm::entity::prelude::*;

/// A platform user. Residential profiles hang off this record, and
/// authorization scopes every request to the user's tenant.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Organization the user belongs to.
    pub tenant_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user can have multiple residential profiles.
    #[sea_orm(has_many = "super::residential_user::Entity")]
    ResidentialUser,
}

impl Related<super::residential_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResidentialUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
