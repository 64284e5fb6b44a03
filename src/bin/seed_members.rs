//! Loads the sample teams and members into the configured database.

use std::env;

use dotenvy::dotenv;
use env_logger::Env;

use member_search::db::establish_connection_pool;
use member_search::repository::DieselRepository;
use member_search::services::seed::seed_sample_data;

const DEFAULT_MEMBER_COUNT: i32 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "app.db".to_string());
    let member_count = match env::var("SEED_MEMBER_COUNT") {
        Ok(value) => value.parse::<i32>()?,
        Err(_) => DEFAULT_MEMBER_COUNT,
    };

    let pool = establish_connection_pool(&database_url)?;
    let repo = DieselRepository::new(pool);

    let inserted = seed_sample_data(&repo, member_count)?;
    log::info!("Seed finished, {inserted} member(s) inserted into {database_url}");

    Ok(())
}
