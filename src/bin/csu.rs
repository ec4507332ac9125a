use modulehub::config::{EnvConfig, CONFIG};
use modulehub::db::postgres_service::PostgresService;
use modulehub::types::account::DBAccountCreate;
use modulehub::utils::token::encrypt;

/// Create superuser: seeds one active staff + superuser account so a fresh
/// deployment has someone who can delegate ownership and delete accounts.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);

    let email = std::env::var("CSU_EMAIL").unwrap_or_else(|_| "admin@localhost.com".to_string());
    let password = std::env::var("CSU_PASSWORD").unwrap_or_else(|_| "Basketball123".to_string());

    let db = PostgresService::new(&config.db_url).await?;

    let password_hash =
        encrypt(&password).map_err(|e| format!("password hashing failed: {e}"))?;

    let account_id = db
        .create_account(DBAccountCreate {
            email: email.clone(),
            password_hash,
            first_name: Some("admin".to_string()),
            last_name: Some("adminov".to_string()),
            phone: None,
            city: None,
            is_active: true,
            is_staff: true,
            is_superuser: true,
            activation_hash: None,
        })
        .await?;

    println!("Superuser {} created with id {}", email, account_id);
    Ok(())
}
