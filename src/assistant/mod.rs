//! What the voice assistant host sees: published state rendered as
//! instructions and action schemas, plus the callable actions themselves.

use std::sync::Arc;

use serde_json::Value;

use crate::{domoticz::client::DomoticzClient, published::Published};

use self::{
    actions::ActionExecutor,
    context::{available_action_schemas, render_instructions},
    schemas::ActionSchema,
};

pub mod actions;
pub mod context;
pub mod schemas;

/// Host-facing facade. Every accessor reads the published state at call time.
#[derive(Clone)]
pub struct Extension {
    published: Arc<Published>,
    executor: ActionExecutor,
}

impl Extension {
    pub fn new(client: DomoticzClient, published: Arc<Published>) -> Self {
        Extension {
            published,
            executor: ActionExecutor::new(client),
        }
    }

    pub fn version(&self) -> Option<String> {
        self.published.version()
    }

    pub fn errors(&self) -> Vec<String> {
        self.published.errors()
    }

    pub fn instructions(&self) -> serde_json::Result<String> {
        render_instructions(self.published.snapshot().as_deref())
    }

    pub fn action_schemas(&self) -> Vec<ActionSchema> {
        available_action_schemas(self.published.snapshot().as_deref())
    }

    pub async fn call(&self, name: &str, arguments: Value) -> String {
        self.executor.invoke(name, arguments).await
    }
}
