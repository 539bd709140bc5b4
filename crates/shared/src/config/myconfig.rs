use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub gemini_api_key: String,
    pub run_migrations: bool,
    pub run_seed: bool,
    pub port: u16,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .context("Missing environment variable: GEMINI_API_KEY")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = parse_bool_env("RUN_MIGRATIONS")?;
        let run_seed = parse_bool_env("RUN_SEED")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = std::env::var("DB_MAX_CONN")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONN must be a valid u32 integer")?;

        Ok(Self {
            database_url,
            jwt_secret,
            gemini_api_key,
            run_migrations,
            run_seed,
            port,
            db_max_conn,
        })
    }
}

fn parse_bool_env(name: &str) -> Result<bool> {
    let value = std::env::var(name).unwrap_or_else(|_| "false".to_string());
    match value.as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(anyhow!(
            "{} must be 'true' or 'false', got '{}'",
            name,
            other
        )),
    }
}
