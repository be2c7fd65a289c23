#![allow(dead_code)]

use recipe_service::config::{GeminiSettings, RecipeConfig};
use recipe_service::services::providers::TextProvider;
use recipe_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

/// Configuration for a test server on a random port.
pub fn test_config(gemini: GeminiSettings) -> RecipeConfig {
    RecipeConfig {
        common: CoreConfig { port: 0 },
        gemini,
    }
}

impl TestApp {
    /// Spawn the application with an injected provider.
    pub async fn spawn(text_provider: Arc<dyn TextProvider>) -> Self {
        let config = test_config(GeminiSettings::default());
        let app = Application::build_with_provider(config, text_provider)
            .await
            .expect("Failed to build test application");

        Self::run(app)
    }

    /// Spawn the application with the real Gemini provider built from `gemini`.
    pub async fn spawn_with_gemini(gemini: GeminiSettings) -> Self {
        let app = Application::build(test_config(gemini))
            .await
            .expect("Failed to build test application");

        Self::run(app)
    }

    fn run(app: Application) -> Self {
        let port = app.port();

        // The listener is already bound, so requests queue until the server polls it.
        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
            client: reqwest::Client::new(),
        }
    }

    /// POST a raw JSON body to the recipe endpoint.
    pub async fn post_recipe(&self, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/generar-receta", self.address))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request")
    }
}
