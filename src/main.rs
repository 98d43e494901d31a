use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use recordstore::{
    NewProduct, NewUser, Product, ProductPatch, ProductService, Reply, Store, User, UserPatch,
    UserService,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recordstore")]
#[command(about = "RecordStore CLI - exercise the users/products CRUD API against a local store")]
#[command(version)]
struct Cli {
    /// Path to the store directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    store_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on the user collection
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Operate on the product collection
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List all users
    List,
    /// Show one user by id
    Get { id: String },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Update fields of a user
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user by id
    Delete { id: String },
    /// Look a user up by email
    ByEmail { email: String },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List all products
    List,
    /// Show one product by id
    Get { id: String },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        in_stock: Option<bool>,
    },
    /// Update fields of a product
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        in_stock: Option<bool>,
    },
    /// Delete a product by id
    Delete { id: String },
    /// List products with price in [min, max]
    PriceRange { min: f64, max: f64 },
    /// List products currently in stock
    InStock,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = Store::open(&cli.store_path)?;

    match cli.command {
        Commands::Users { command } => run_users(&UserService::new(store), command),
        Commands::Products { command } => run_products(&ProductService::new(store), command),
    }
}

fn run_users(service: &UserService, command: UserCommands) -> Result<()> {
    match command {
        UserCommands::List => match service.list_all() {
            Ok(users) => print_reply(&Reply::ok(users)),
            Err(err) => print_reply(&Reply::<Vec<User>>::failure(&err)),
        },
        UserCommands::Get { id } => match service.get_by_id(&id) {
            Ok(Some(user)) => print_reply(&Reply::ok(user)),
            Ok(None) => print_reply(&Reply::<User>::not_found("User")),
            Err(err) => print_reply(&Reply::<User>::failure(&err)),
        },
        UserCommands::Create { name, email } => match service.create(NewUser { name, email }) {
            Ok(user) => print_reply(&Reply::created(user)),
            Err(err) => print_reply(&Reply::<User>::failure(&err)),
        },
        UserCommands::Update { id, name, email } => {
            match service.update(&id, UserPatch { name, email }) {
                Ok(Some(user)) => print_reply(&Reply::ok_with(user, "User updated successfully")),
                Ok(None) => print_reply(&Reply::<User>::not_found("User")),
                Err(err) => print_reply(&Reply::<User>::failure(&err)),
            }
        }
        UserCommands::Delete { id } => match service.delete(&id) {
            Ok(true) => print_reply(&Reply::ok_with(
                json!({ "id": id }),
                "User deleted successfully",
            )),
            Ok(false) => print_reply(&Reply::<serde_json::Value>::not_found("User")),
            Err(err) => print_reply(&Reply::<serde_json::Value>::failure(&err)),
        },
        UserCommands::ByEmail { email } => match service.get_by_email(&email) {
            Ok(Some(user)) => print_reply(&Reply::ok(user)),
            Ok(None) => print_reply(&Reply::<User>::not_found("User")),
            Err(err) => print_reply(&Reply::<User>::failure(&err)),
        },
    }
}

fn run_products(service: &ProductService, command: ProductCommands) -> Result<()> {
    match command {
        ProductCommands::List => match service.list_all() {
            Ok(products) => print_reply(&Reply::ok(products)),
            Err(err) => print_reply(&Reply::<Vec<Product>>::failure(&err)),
        },
        ProductCommands::Get { id } => match service.get_by_id(&id) {
            Ok(Some(product)) => print_reply(&Reply::ok(product)),
            Ok(None) => print_reply(&Reply::<Product>::not_found("Product")),
            Err(err) => print_reply(&Reply::<Product>::failure(&err)),
        },
        ProductCommands::Create {
            name,
            description,
            price,
            in_stock,
        } => match service.create(NewProduct {
            name,
            description,
            price,
            in_stock,
        }) {
            Ok(product) => print_reply(&Reply::created(product)),
            Err(err) => print_reply(&Reply::<Product>::failure(&err)),
        },
        ProductCommands::Update {
            id,
            name,
            description,
            price,
            in_stock,
        } => {
            let patch = ProductPatch {
                name,
                description,
                price,
                in_stock,
            };
            match service.update(&id, patch) {
                Ok(Some(product)) => {
                    print_reply(&Reply::ok_with(product, "Product updated successfully"))
                }
                Ok(None) => print_reply(&Reply::<Product>::not_found("Product")),
                Err(err) => print_reply(&Reply::<Product>::failure(&err)),
            }
        }
        ProductCommands::Delete { id } => match service.delete(&id) {
            Ok(true) => print_reply(&Reply::ok_with(
                json!({ "id": id }),
                "Product deleted successfully",
            )),
            Ok(false) => print_reply(&Reply::<serde_json::Value>::not_found("Product")),
            Err(err) => print_reply(&Reply::<serde_json::Value>::failure(&err)),
        },
        ProductCommands::PriceRange { min, max } => match service.by_price_range(min, max) {
            Ok(products) => print_reply(&Reply::ok(products)),
            Err(err) => print_reply(&Reply::<Vec<Product>>::failure(&err)),
        },
        ProductCommands::InStock => match service.in_stock_only() {
            Ok(products) => print_reply(&Reply::ok(products)),
            Err(err) => print_reply(&Reply::<Vec<Product>>::failure(&err)),
        },
    }
}

fn print_reply<T: Serialize>(reply: &Reply<T>) -> Result<()> {
    let status = reply.status.to_string();
    let status = if reply.body.success {
        status.green()
    } else {
        status.red()
    };

    println!("{} {}", status, serde_json::to_string_pretty(&reply.body)?);
    Ok(())
}
