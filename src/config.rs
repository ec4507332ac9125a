use std::env;
use std::sync::OnceLock;

use crate::validation::DEFAULT_BANNED_TERMS;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub public_url: String,
    pub banned_terms: Vec<String>,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");
        let resend_key: String = Self::get_env("RESEND_KEY");

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url,
            public_url: Self::get_env_or("PUBLIC_URL", "http://127.0.0.1:8080"),
            // comma separated, empty entries dropped
            banned_terms: Self::get_env_or("BANNED_TITLE_TERMS", &DEFAULT_BANNED_TERMS.join(","))
                .split(',')
                .map(|term| term.trim().to_string())
                .filter(|term| !term.is_empty())
                .collect(),
            mail: MailConfig {
                api_key: resend_key,
                endpoint: Self::get_env_or("RESEND_ENDPOINT", "https://api.resend.com/emails"),
                from: Self::get_env_or("MAIL_FROM", "noreply@modulehub.dev"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
