//! This file serves as the root for all SeaORM entity modules.
//! The data models for the home energy administration application live
//! here: platform users and the residential profiles attached to them.

pub mod residential_user;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::residential_user::Entity as ResidentialUser;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create users in two different tenants
        let user1 = user::ActiveModel {
            email: Set("alice@example.com".to_string()),
            tenant_id: Set("acme".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let user2 = user::ActiveModel {
            email: Set("bob@example.com".to_string()),
            tenant_id: Set("globex".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create residential profiles
        let now = Utc::now();
        let profile1 = residential_user::ActiveModel {
            user_id: Set(user1.id),
            energy_goal: Set(Some(1200)),
            energy_usage: Set(Some(450)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let profile2 = residential_user::ActiveModel {
            user_id: Set(user2.id),
            energy_goal: Set(None),
            energy_usage: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Verify users
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.email == "alice@example.com"));
        assert!(users.iter().any(|u| u.email == "bob@example.com"));

        // Verify profiles
        let profiles = ResidentialUser::find().all(&db).await?;
        assert_eq!(profiles.len(), 2);
        assert!(profiles.iter().any(|p| p.energy_goal == Some(1200)));
        assert!(profiles.iter().any(|p| p.energy_goal.is_none()));

        // Follow the belongs_to relation from profile to user
        let owner = ResidentialUser::find_by_id(profile1.id)
            .find_also_related(User)
            .one(&db)
            .await?
            .expect("profile should exist");
        assert_eq!(owner.1.expect("owner should exist").id, user1.id);

        // Filter profiles by owner
        let bobs_profiles = ResidentialUser::find()
            .filter(residential_user::Column::UserId.eq(user2.id))
            .all(&db)
            .await?;
        assert_eq!(bobs_profiles.len(), 1);
        assert_eq!(bobs_profiles[0].id, profile2.id);

        // Inserting a profile for a missing user violates the foreign key
        let orphan = residential_user::ActiveModel {
            user_id: Set(9999),
            energy_goal: Set(Some(1)),
            energy_usage: Set(Some(1)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(orphan.is_err());

        // Deleting a user cascades to its profiles
        user::Entity::delete_by_id(user1.id).exec(&db).await?;
        let remaining = ResidentialUser::find().all(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, profile2.id);

        Ok(())
    }
}
