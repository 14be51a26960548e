use std::env;

use secrecy::SecretString;

use crate::cart::CheckoutChannel;

const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug)]
pub struct AiConfig {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug)]
pub struct AdminConfig {
    pub username: String,
    pub password: SecretString,
    pub session_secret: SecretString,
    pub session_max_age_secs: i64,
    pub cookie_secure: bool,
}

#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin: AdminConfig,
    pub checkout: CheckoutChannel,
    pub ai: AiConfig,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = var_or("APP_HOST", "127.0.0.1");
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET is not set"))?;
        let admin = AdminConfig {
            username: var_or("ADMIN_USERNAME", "admin"),
            password: SecretString::from(var_or("ADMIN_PASSWORD", "password")),
            session_secret: SecretString::from(session_secret),
            session_max_age_secs: env::var("SESSION_MAX_AGE_SECS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(60 * 60 * 24 * 7),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        };

        let checkout = CheckoutChannel {
            store_name: var_or("STORE_NAME", "Lapzen"),
            link_base: var_or("WHATSAPP_LINK_BASE", "https://wa.me/"),
            phone_number: var_or("WHATSAPP_NUMBER", "+923090009022"),
        };

        let ai = AiConfig {
            api_key: env::var("AI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            model: var_or("AI_MODEL", "gemini-2.0-flash"),
            base_url: var_or("AI_BASE_URL", DEFAULT_AI_BASE_URL),
        };

        Ok(Self {
            database_url,
            host,
            port,
            admin,
            checkout,
            ai,
        })
    }
}
