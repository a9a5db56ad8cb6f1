use crate::configuration::Configuration;
use crate::repository::TemplateStore;
use crate::routes::{
    delete_template, generate_newsletter, get_template, health_check, list_templates,
    preview_newsletter, upsert_template,
};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let template_store = TemplateStore::new(config.storage.templates_dir)
            .context("Failed to open the template store directory")?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, template_store).context("Failed to run Actix web server")?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        // run returns a Server type, which implements Future trait
        self.server.await.context("Server stopped with an error")
    }
}

fn run(tcp_listener: TcpListener, template_store: TemplateStore) -> Result<Server, anyhow::Error> {
    let template_store = web::Data::new(template_store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            // register the template store as part of the application state
            .app_data(template_store.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(
            web::scope("/v1")
                .service(
                    web::scope("/newsletter")
                        .route("/preview", web::post().to(preview_newsletter))
                        .route("/generate", web::post().to(generate_newsletter)),
                )
                .service(
                    web::scope("/templates")
                        .route("", web::get().to(list_templates))
                        .route("/{name}", web::put().to(upsert_template))
                        .route("/{name}", web::get().to(get_template))
                        .route("/{name}", web::delete().to(delete_template)),
                ),
        );
}
