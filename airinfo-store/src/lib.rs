pub mod app_config;
pub mod database;
pub mod airport_repo;
pub mod metar_client;
pub mod seed;

pub use airport_repo::PostgresAirportRepository;
pub use database::DbClient;
pub use metar_client::HttpMetarClient;
