use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use modulehub::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use modulehub::types::module::RModuleCreate;

    pub fn sample_module() -> RModuleCreate {
        RModuleCreate {
            title: Some("математика".to_string()),
            description: Some("работа с числами".to_string()),
            owner: None,
        }
    }

    #[allow(dead_code)]
    pub fn sample_module_with_title(title: &str) -> RModuleCreate {
        RModuleCreate {
            title: Some(title.to_string()),
            description: Some("тестовое описание".to_string()),
            owner: None,
        }
    }
}
