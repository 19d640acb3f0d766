use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use structopt::StructOpt;

use pizzadb::catalog::ProductStore;
use pizzadb::PizzaDb;

#[derive(Debug, StructOpt)]
#[structopt(name = "pz", about = "Pizza catalog CLI")]
struct Opt {
    /// Input file
    #[structopt(parse(from_os_str))]
    config: PathBuf,
    #[structopt(subcommand)]
    command: Commands,
}

#[derive(Debug, StructOpt)]
enum Commands {
    #[structopt(name = "setup", about = "Initialize storage")]
    Setup,
    #[structopt(name = "show-catalog", about = "Show the product catalog")]
    ShowCatalog,
    #[structopt(name = "show-category", about = "Show products in one category")]
    ShowCategory { category: String },
}

#[derive(Deserialize, Debug)]
struct Config {
    #[serde(flatten)]
    pizzadb: pizzadb::config::Config,
    env_logger: pizzadb::config::EnvLogger,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let mut config_buf = String::new();
    File::open(&opt.config)
        .with_context(|| format!("open config {:?}", opt.config))?
        .read_to_string(&mut config_buf)?;
    let config: Config = toml::from_str(&config_buf).context("parse config")?;

    config.env_logger.builder().init();

    let app = PizzaDb::new(&config.pizzadb)?;

    match opt.command {
        Commands::Setup => {
            app.setup()?;
        }
        Commands::ShowCatalog => {
            for product in app.catalog().find_all()? {
                println!(
                    "{}: {} [{}/{}] {:.2}",
                    product.sku, product.name, product.category, product.size, product.price
                );
            }
        }
        Commands::ShowCategory { category } => {
            for product in app.catalog().find_by_category(&category)? {
                println!(
                    "{}: {} [{}] {:.2}",
                    product.sku, product.name, product.size, product.price
                );
            }
        }
    }

    Ok(())
}
