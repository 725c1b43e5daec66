//! Server configuration loading and resolution.

use gform_quick_submit::{ClientConfig, FormItem};

/// Listen address override.
pub const ADDR_ENV: &str = "GFORM_QUICK_SUBMIT_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Entry IDs of the demo contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntryIds {
    pub company: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for ContactEntryIds {
    fn default() -> Self {
        Self {
            company: "1037971436".to_string(),
            name: "64248411".to_string(),
            email: "1959211618".to_string(),
            message: "272465746".to_string(),
        }
    }
}

impl ContactEntryIds {
    /// Map contact fields onto form items in form order.
    pub fn items(
        &self,
        company: Option<String>,
        name: String,
        email: String,
        message: String,
    ) -> Vec<FormItem> {
        vec![
            FormItem {
                key: self.company.clone(),
                value: company,
            },
            FormItem::new(self.name.clone(), name),
            FormItem::new(self.email.clone(), email),
            FormItem::new(self.message.clone(), message),
        ]
    }
}

/// Everything the web service needs at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub client: ClientConfig,
    pub contact_ids: ContactEntryIds,
}

impl ServerConfig {
    /// Resolve settings: CLI flag > env var > built-in default.
    pub fn resolve(addr: Option<String>, form_url: Option<String>) -> Self {
        let mut client = ClientConfig::from_env();
        if let Some(url) = form_url.filter(|u| !u.trim().is_empty()) {
            client = client.with_default_form_url(url);
        }

        Self {
            addr: resolve_addr(addr.as_deref()),
            client,
            contact_ids: ContactEntryIds::default(),
        }
    }
}

/// Resolve the listen address.
pub fn resolve_addr(explicit: Option<&str>) -> String {
    if let Some(addr) = explicit {
        return addr.to_string();
    }

    if let Ok(env_addr) = std::env::var(ADDR_ENV) {
        if !env_addr.trim().is_empty() {
            return env_addr;
        }
    }

    DEFAULT_ADDR.to_string()
}
