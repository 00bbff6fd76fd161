use crate::{AttributeSchema, ResourceResult, USER_SCHEMA, UserResource};

use std::sync::Arc;

use a0_config::ManagementConfig;
use a0_management::{ManagementClient, UserApi};
use log::info;

/// Resource types this provider can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    User,
}

impl ResourceType {
    pub const fn name(&self) -> &'static str {
        match self {
            ResourceType::User => "auth0_user",
        }
    }

    /// Resource type registered under `name`, e.g. "auth0_user"
    pub fn from_name(name: &str) -> Option<Self> {
        [ResourceType::User].into_iter().find(|rt| rt.name() == name)
    }

    pub fn schema(&self) -> &'static [AttributeSchema] {
        match self {
            ResourceType::User => USER_SCHEMA,
        }
    }
}

/// Management API client plus the resource types registered against it
pub struct Provider {
    api: Arc<dyn UserApi>,
    registered: Vec<ResourceType>,
}

impl Provider {
    /// Build the HTTP client from configuration and assemble the provider.
    pub async fn from_config(config: &ManagementConfig) -> ResourceResult<Self> {
        let client = ManagementClient::from_config(config).await?;
        info!("Management client ready for {}", config.base_url());
        Ok(Self::assemble(Arc::new(client)))
    }

    /// Register every resource type against `api`.
    pub fn assemble(api: Arc<dyn UserApi>) -> Self {
        let mut provider = Self {
            api,
            registered: Vec::new(),
        };
        provider.register(ResourceType::User);
        provider
    }

    fn register(&mut self, resource_type: ResourceType) {
        if !self.registered.contains(&resource_type) {
            self.registered.push(resource_type);
        }
    }

    pub fn resource_types(&self) -> Vec<&'static str> {
        self.registered.iter().map(ResourceType::name).collect()
    }

    pub fn users(&self) -> UserResource<'_> {
        UserResource::new(self.api.as_ref())
    }
}
