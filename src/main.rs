use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use department_service::config::Config;
use department_service::db::{self, DepartmentRepository, InMemoryDepartmentRepository, PgDepartmentRepository};
use department_service::services::department::DepartmentService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let repository: Arc<dyn DepartmentRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url, &config)
                .await
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            Arc::new(PgDepartmentRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, departments are kept in memory");
            Arc::new(InMemoryDepartmentRepository::new())
        }
    };
    let service = web::Data::new(DepartmentService::new(repository));

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(department_service::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
