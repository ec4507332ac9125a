use actix_web::{web, App};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use modulehub::{
    db::postgres_service::PostgresService,
    notify::{Notice, Notifier},
    types::{
        account::DBAccountCreate,
        module::DBModuleCreate,
        token::{construct_token, TokenType},
    },
    utils::token::{encrypt, new_token},
    validation::{TitleValidator, DEFAULT_BANNED_TERMS},
};
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "ChooseBestPassword";

/// App assembly plus direct-to-db factories. The notifier is backed by a
/// bare channel, so whatever a handler enqueues shows up on the receiver
/// and nothing is ever delivered.
pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub notifier: Notifier,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> (Self, UnboundedReceiver<Notice>) {
        let (notifier, notices) = Notifier::channel();
        (TestClient { db, notifier }, notices)
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(TitleValidator::new(DEFAULT_BANNED_TERMS)))
            .app_data(web::Data::new(self.notifier.clone()))
            .configure(modulehub::routes::configure_routes)
    }

    /// Active account with a working bearer token.
    pub async fn create_test_account(&self, email: &str, staff: bool, superuser: bool) -> (Uuid, String) {
        let password_hash = encrypt(TEST_PASSWORD).expect("Failed to hash password");

        let account_id = self.db.create_account(DBAccountCreate {
            email: email.to_string(),
            password_hash,
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            phone: None,
            city: None,
            is_active: true,
            is_staff: staff,
            is_superuser: superuser,
            activation_hash: None,
        }).await.expect("Failed to create account");

        let secret = new_token(TokenType::User);
        let auth_hash = encrypt(&secret).expect("Failed to hash token");
        self.db.set_auth_hash(&account_id, auth_hash)
            .await
            .expect("Failed to store auth hash");

        (account_id, construct_token(&account_id, &secret))
    }

    #[allow(dead_code)]
    pub async fn create_test_module(&self, owner_id: Uuid, title: &str) -> Uuid {
        self.db.create_module(DBModuleCreate {
            title: title.to_string(),
            description: "тестовое описание".to_string(),
            owner_id,
        }).await.expect("Failed to create module").id
    }
}
