use memento_api::Application;
use memento_infra::MementoContext;

// Launch the application as a background task and return its base address
pub async fn spawn_app() -> String {
    let mut ctx = MementoContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    address
}
