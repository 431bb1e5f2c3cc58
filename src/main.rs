use actix_web::{web, App, HttpServer, middleware};
use urdu_roman::api::{configure_routes, static_file_handler, AppState};
use urdu_roman::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    let dotenv = dotenvy::dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {}", e);
    }

    let app_config = match config::AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let bind = (app_config.host.clone(), app_config.port);
    println!("🔌 Translation API: {}", app_config.api_base);
    println!("📊 Frontend available at http://{}:{}", bind.0, bind.1);

    let state = AppState::new(app_config);

    // One health check at startup; translation stays disabled until it
    // reports a healthy backend.
    let session = state.session.clone();
    actix_rt::spawn(async move {
        session.check_health().await;
    });

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .route("/{_:.*}", web::get().to(static_file_handler))
    })
    .bind(bind)?
    .run()
    .await
}
