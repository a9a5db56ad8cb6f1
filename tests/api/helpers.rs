use mailweave::configuration::{ApplicationConfigs, Configuration, StorageConfigs};
use mailweave::startup::Application;
use mailweave::telemetry::{get_subscriber, init_subscriber};
use serde_json::Value;
use std::sync::OnceLock;

static TRACING: OnceLock<()> = OnceLock::new();

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    // Held for its Drop: the store directory disappears with the test
    #[allow(dead_code)]
    templates_dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber =
                get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            init_subscriber(subscriber);
        } else {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            init_subscriber(subscriber);
        }
    });

    let templates_dir = tempfile::tempdir().expect("Failed to create a template directory");

    let config = Configuration {
        application: ApplicationConfigs {
            host: "127.0.0.1".to_string(),
            // A random OS-assigned port per test app
            port: 0,
        },
        storage: StorageConfigs {
            templates_dir: templates_dir.path().to_path_buf(),
        },
    };

    let application = Application::build(config)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
        templates_dir,
    }
}

impl TestApp {
    pub async fn preview_newsletter(&self, payload: &Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/v1/newsletter/preview", &self.address))
            .json(payload)
            .send()
            .await
            .expect("Failed to execute request: preview_newsletter")
    }

    pub async fn generate_newsletter(&self, payload: &Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/v1/newsletter/generate", &self.address))
            .json(payload)
            .send()
            .await
            .expect("Failed to execute request: generate_newsletter")
    }

    pub async fn upsert_template(&self, name: &str, payload: &Value) -> reqwest::Response {
        self.api_client
            .put(format!("{}/v1/templates/{}", &self.address, name))
            .json(payload)
            .send()
            .await
            .expect("Failed to execute request: upsert_template")
    }

    pub async fn list_templates(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/v1/templates", &self.address))
            .send()
            .await
            .expect("Failed to execute request: list_templates")
    }

    pub async fn get_template(&self, name: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/v1/templates/{}", &self.address, name))
            .send()
            .await
            .expect("Failed to execute request: get_template")
    }

    pub async fn delete_template(&self, name: &str) -> reqwest::Response {
        self.api_client
            .delete(format!("{}/v1/templates/{}", &self.address, name))
            .send()
            .await
            .expect("Failed to execute request: delete_template")
    }
}
