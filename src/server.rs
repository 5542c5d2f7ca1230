use crate::{
    clients::UpstreamClients,
    config::{Config, ServerConfig},
    logger,
    models::SuggestionQuery,
    suggestions::SuggestionService,
};
use actix_cors::Cors;
use actix_web::{
    get, http::header, middleware, web, App, HttpRequest, HttpResponse, HttpServer, Responder,
};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[get("/health")]
async fn health() -> impl Responder {
    web::Json(serde_json::json!({ "status": "ok" }))
}

async fn suggestions(req: HttpRequest, service: web::Data<SuggestionService>) -> HttpResponse {
    // Repeated `title` parameters resolve to the first one
    let query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|pairs| SuggestionQuery::from_pairs(pairs.into_inner()))
        .unwrap_or_default();

    let title = match query.title {
        Some(title) if !title.is_empty() => title,
        _ => {
            return HttpResponse::BadRequest()
                .content_type(TEXT_PLAIN)
                .body("The 'title' parameter is required")
        }
    };

    let _timer = logger::timer("suggestions");
    match service.suggest(&title).await {
        Ok(set) => HttpResponse::Ok().json(set.into_vec()),
        Err(e) => {
            log::error!("Suggestion request for '{}' failed: {}", title, e);
            HttpResponse::build(e.status_code())
                .content_type(TEXT_PLAIN)
                .body(format!("Gemini API error: {}", e))
        }
    }
}

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::resource("/api/suggestions")
            .route(web::get().to(suggestions))
            .route(web::post().to(suggestions)),
    );
}

/// Single allow-listed origin; GET, POST and OPTIONS with `Content-Type` only.
pub fn cors(config: &ServerConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let clients = UpstreamClients::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let service = web::Data::new(SuggestionService::new(clients));
    let server_config = config.server.clone();

    log::info!(
        "🌐 Suggestion server listening on {}:{}",
        server_config.host,
        server_config.port
    );

    let bind_address = server_config.bind_address();
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(cors(&server_config))
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
