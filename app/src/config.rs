use std::collections::HashMap;

use anyhow::{Context, Error};
use log::*;
use postgres::NoTls;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use serde::{Deserialize, Serialize};

use infra::persistence::DocumentConnectionManager;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Config {
    pub postgres: PgConfig,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct PgConfig {
    pub url: String,
    #[serde(default)]
    pub max_size: Option<u32>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl PgConfig {
    pub(crate) fn build(&self) -> Result<Pool<DocumentConnectionManager>, Error> {
        debug!("Build pool from {:?}", self);

        let config: postgres::Config = self.url.parse().context("parse postgres url")?;
        let manager = PostgresConnectionManager::new(config, NoTls);

        let mut builder = r2d2::Pool::builder();
        if let Some(max_size) = self.max_size {
            builder = builder.max_size(max_size);
        }

        let pool = builder
            .build(DocumentConnectionManager::new(manager))
            .context("build pool")?;

        Ok(pool)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct EnvLogger {
    level: Option<LogLevel>,
    #[serde(default)]
    modules: HashMap<String, LogLevel>,
    #[serde(default)]
    timestamp_nanos: bool,
}

impl LogLevel {
    fn to_filter(&self) -> log::LevelFilter {
        match self {
            &LogLevel::Off => log::LevelFilter::Off,
            &LogLevel::Error => log::LevelFilter::Error,
            &LogLevel::Warn => log::LevelFilter::Warn,
            &LogLevel::Info => log::LevelFilter::Info,
            &LogLevel::Debug => log::LevelFilter::Debug,
            &LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl EnvLogger {
    pub fn builder(&self) -> env_logger::Builder {
        let mut b = env_logger::Builder::from_default_env();
        if let Some(level) = self.level.as_ref() {
            b.filter_level(level.to_filter());
        }

        for (module, level) in self.modules.iter() {
            b.filter_module(module, level.to_filter());
        }

        if self.timestamp_nanos {
            b.format_timestamp_nanos();
        }

        b
    }
}
