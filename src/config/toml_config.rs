use crate::core::catalog::{CatalogEntry, ServiceCatalog};
use crate::core::estimator::BookingEstimator;
use crate::core::notification::{
    channel_by_name, NotificationDispatcher, EMAIL_CHANNEL, WHATSAPP_CHANNEL,
};
use crate::core::pricing::PricingRules;
use crate::core::session::{LocalDate, Session, DEFAULT_PHONE};
use crate::domain::model::Service;
use crate::utils::error::{Result, SkillBridgeError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings. Every section is optional and defaults to the
/// built-in catalog, pricing rules and channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub pricing: PricingRules,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub services: Vec<CatalogEntry>,
    pub fallback: Service,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let catalog = ServiceCatalog::default();
        Self {
            services: catalog.entries().to_vec(),
            fallback: catalog.fallback().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub phone: String,
    pub channels: Vec<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE.to_string(),
            channels: vec![EMAIL_CHANNEL.to_string(), WHATSAPP_CHANNEL.to_string()],
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SkillBridgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SkillBridgeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PHONE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkillBridgeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        // 驗證服務目錄
        for (index, entry) in self.catalog.services.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("catalog.services[{}].id", index),
                &entry.id,
            )?;
            validation::validate_non_empty_string(
                &format!("catalog.services[{}].name", index),
                &entry.name,
            )?;
            validation::validate_non_negative(
                &format!("catalog.services[{}].base_rate", index),
                entry.base_rate,
            )?;
        }
        let ids: Vec<&str> = self.catalog.services.iter().map(|e| e.id.as_str()).collect();
        validation::validate_unique("catalog.services", &ids)?;

        let fallback = &self.catalog.fallback;
        validation::validate_non_empty_string("catalog.fallback.name", &fallback.name)?;
        validation::validate_non_negative("catalog.fallback.base_rate", fallback.base_rate)?;

        // 驗證計價規則
        let pricing = &self.pricing;
        validation::validate_range("pricing.rush_multiplier", pricing.rush_multiplier, 1.0, 10.0)?;
        validation::validate_range("pricing.premium_threshold", pricing.premium_threshold, 1, 10)?;

        // 驗證通知設定
        validation::validate_non_empty_string("notifications.phone", &self.notifications.phone)?;
        validation::validate_allowed_values(
            "notifications.channels",
            &self.notifications.channels,
            &[EMAIL_CHANNEL, WHATSAPP_CHANNEL],
        )?;

        Ok(())
    }

    pub fn catalog(&self) -> ServiceCatalog {
        ServiceCatalog::new(self.catalog.services.clone(), self.catalog.fallback.clone())
    }

    pub fn estimator(&self) -> BookingEstimator {
        BookingEstimator::new(self.catalog(), self.pricing)
    }

    /// Subscribes the configured channels in the order they are listed.
    pub fn dispatcher(&self) -> Result<NotificationDispatcher> {
        let mut dispatcher = NotificationDispatcher::new();
        for name in &self.notifications.channels {
            let channel =
                channel_by_name(name).ok_or_else(|| SkillBridgeError::InvalidConfigValueError {
                    field: "notifications.channels".to_string(),
                    value: name.clone(),
                    reason: "Unknown notification channel".to_string(),
                })?;
            dispatcher.subscribe(channel);
        }
        Ok(dispatcher)
    }

    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(
            self.estimator(),
            self.dispatcher()?,
            self.notifications.phone.clone(),
            LocalDate,
        ))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
