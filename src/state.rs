use std::sync::Arc;

use chrono::Duration;
use sea_orm::DatabaseConnection;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{AuthPolicy, StaticCredentials},
    cart::CheckoutChannel,
    catalog::{LaptopRepository, PostgresCatalog},
    config::AppConfig,
    summary::{SpecSummarizer, summarizer_from_config},
};

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub max_age_secs: i64,
    pub secure: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_age_secs: 60 * 60 * 24 * 7,
            secure: false,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn LaptopRepository>,
    pub auth: Arc<dyn AuthPolicy>,
    pub summarizer: Arc<dyn SpecSummarizer>,
    pub checkout: CheckoutChannel,
    pub session: SessionSettings,
}

impl AppState {
    pub fn from_config(config: &AppConfig, orm: DatabaseConnection) -> anyhow::Result<Self> {
        let auth = StaticCredentials::new(
            config.admin.username.clone(),
            &config.admin.password,
            SecretString::from(config.admin.session_secret.expose_secret().to_string()),
            Duration::seconds(config.admin.session_max_age_secs),
        )?;

        Ok(Self {
            catalog: Arc::new(PostgresCatalog::new(orm)),
            auth: Arc::new(auth),
            summarizer: summarizer_from_config(&config.ai)?,
            checkout: config.checkout.clone(),
            session: SessionSettings {
                max_age_secs: config.admin.session_max_age_secs,
                secure: config.admin.cookie_secure,
            },
        })
    }
}
