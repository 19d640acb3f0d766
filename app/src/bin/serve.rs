use std::fs::File;
use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::{middleware, App, HttpServer};
use anyhow::{Context, Result};
use log::*;
use serde::Deserialize;
use structopt::StructOpt;

use pizzadb::catalog::resources;
use pizzadb::PizzaDb;

#[derive(Debug, StructOpt)]
#[structopt(name = "serve", about = "Serve the pizza catalog.")]
struct Opt {
    /// Input file
    #[structopt(parse(from_os_str))]
    config: PathBuf,
}

#[derive(Deserialize, Debug)]
struct Config {
    #[serde(flatten)]
    pizzadb: pizzadb::config::Config,
    env_logger: pizzadb::config::EnvLogger,
    listener: Listener,
}

#[derive(Deserialize, Debug)]
struct Listener {
    addr: SocketAddr,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();

    let mut config_buf = String::new();
    File::open(&opt.config)
        .with_context(|| format!("open config {:?}", opt.config))?
        .read_to_string(&mut config_buf)?;
    let config: Config = toml::from_str(&config_buf).context("parse config")?;

    config.env_logger.builder().init();
    debug!("Options: {:?}", opt);

    let app = PizzaDb::new(&config.pizzadb)?;
    app.setup()?;
    let catalog = app.catalog();

    info!("Listening on: {}", config.listener.addr);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(|cfg| resources::configure(catalog.clone(), cfg))
    })
    .bind(config.listener.addr)
    .context("bind listener")?
    .run()
    .await?;

    Ok(())
}
