//! Product Manager
//!
//! A CLI for managing product records through the remote products API:
//! list, inspect, create, update, and delete.

use clap::{Parser, Subcommand};
use core_config::api::ApiConfig;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_products::{HttpProductGateway, ProductInput, ProductService};
use eyre::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "product-manager")]
#[command(about = "Manage product records through the remote products API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    List,

    /// Show a single product
    Get {
        /// Product id
        id: String,
    },

    /// Create a new product
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Initial stock quantity
        #[arg(long, default_value_t = 0)]
        stock: i32,

        /// Unit price
        #[arg(long, default_value_t = 0.0)]
        price: f64,
    },

    /// Update an existing product
    Update {
        /// Product id
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        stock: i32,

        #[arg(long)]
        price: f64,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let config = ApiConfig::from_env()?;
    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    let service = ProductService::new(HttpProductGateway::new(config));

    match cli.command {
        Commands::List => {
            let products = service.list_products().await?;
            if products.is_empty() {
                println!("No products found");
            } else {
                for product in &products {
                    println!(
                        "{}  {}  stock={}  price={:.2}",
                        product.id, product.name, product.stock, product.price
                    );
                }
            }
        }

        Commands::Get { id } => {
            let product = service.get_product(&id).await?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }

        Commands::Create {
            name,
            description,
            stock,
            price,
        } => {
            let input = ProductInput {
                name,
                description,
                stock,
                price,
            };
            let product = service.create_product(&input).await?;
            info!("Created product {}", product.id);
            println!("{}", serde_json::to_string_pretty(&product)?);
        }

        Commands::Update {
            id,
            name,
            description,
            stock,
            price,
        } => {
            let input = ProductInput {
                name,
                description,
                stock,
                price,
            };
            let product = service.update_product(&id, &input).await?;
            info!("Updated product {}", product.id);
            println!("{}", serde_json::to_string_pretty(&product)?);
        }

        Commands::Delete { id } => {
            service.delete_product(&id).await?;
            info!("Deleted product {}", id);
            println!("Deleted product {}", id);
        }
    }

    Ok(())
}
