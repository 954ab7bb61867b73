//! Admin command - Staff account provisioning.
//!
//! There is no public registration endpoint; admin accounts for the
//! dashboard are created here.

use crate::cli::args::{AdminAction, AdminArgs};
use crate::config::{Config, ROLE_ADMIN};
use crate::domain::Password;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{UserRepository, UserStore};
use crate::infra::Database;

/// Execute the admin command
pub async fn execute(args: AdminArgs, config: Config) -> AppResult<()> {
    match args.action {
        AdminAction::Create {
            email,
            name,
            password,
        } => create_admin(&config, email, name, password).await,
    }
}

/// Create an admin account
async fn create_admin(
    config: &Config,
    email: String,
    name: String,
    password: String,
) -> AppResult<()> {
    let db = Database::connect_without_migrations(config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let users = UserStore::new(db.get_connection());

    if users.find_by_email(&email).await?.is_some() {
        return Err(AppError::conflict("Account"));
    }

    let password_hash = Password::new(&password)?.into_string();
    let user = users
        .create(email, password_hash, name, ROLE_ADMIN.to_string())
        .await?;

    println!("Created admin account {} ({})", user.email, user.id);

    Ok(())
}
