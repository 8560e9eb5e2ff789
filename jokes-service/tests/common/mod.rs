use jokes_service::config::{JokesConfig, StreamSettings};
use jokes_service::models::JokeCatalog;
use jokes_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Once;

static METRICS_INIT: Once = Once::new();

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn with the default catalog and a short interval so tests stay fast.
    pub async fn spawn() -> Self {
        Self::spawn_with(StreamSettings {
            interval_ms: 25,
            messages: JokeCatalog::default_jokes(),
        })
        .await
    }

    pub async fn spawn_with(stream: StreamSettings) -> Self {
        // The Prometheus recorder is process-global; install it once per
        // test binary.
        METRICS_INIT.call_once(service_core::observability::init_metrics);

        // Use random port for testing (port 0)
        let config = JokesConfig {
            common: CoreConfig { port: 0 },
            stream,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
