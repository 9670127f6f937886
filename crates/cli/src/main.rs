//! Fashionista command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! fashionista products --category shoes --sort price-low
//!
//! # Build a cart
//! fashionista cart add 5 --size 9 --color White --quantity 2
//! fashionista cart show
//!
//! # Sign in and place the order
//! fashionista login -e maya@example.com
//! fashionista checkout --first-name Maya --last-name Kade \
//!     --email maya@example.com --address "1 Canal St" --city Amsterdam \
//!     --zip 1011 --country NL
//!
//! # Rate a purchase
//! fashionista review 5 --rating 4.5
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog through the active filters
//! - `cart` - Add, remove, update, clear or show cart lines
//! - `wishlist` - Toggle and show wishlisted products
//! - `login` / `logout` - Session management
//! - `review` - Rate a product
//! - `checkout` - Turn the cart into an order
//! - `orders` - Show order history

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroU32;

use clap::{Parser, Subcommand};
use fashionista_core::types::{CategoryFilter, SortKey};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "fashionista")]
#[command(author, version, about = "Fashionista command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products through the active filters
    Products {
        /// Category to narrow to (all, men, women, shoes, accessories)
        #[arg(long)]
        category: Option<CategoryFilter>,

        /// Search text matched against name, description and category
        #[arg(long)]
        search: Option<String>,

        /// Lower price bound
        #[arg(long)]
        min: Option<Decimal>,

        /// Upper price bound
        #[arg(long)]
        max: Option<Decimal>,

        /// Sort order (featured, price-low, price-high, rating)
        #[arg(long)]
        sort: Option<SortKey>,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Sign in with an email address
    Login {
        /// Email address to sign in with
        #[arg(short, long)]
        email: String,
    },
    /// Sign out
    Logout,
    /// Rate a product from 1 to 5
    Review {
        /// Product id
        product: i32,

        /// Rating between 1 and 5
        #[arg(short, long)]
        rating: f64,
    },
    /// Turn the cart into an order
    Checkout {
        /// Recipient first name
        #[arg(long)]
        first_name: String,

        /// Recipient last name
        #[arg(long)]
        last_name: String,

        /// Contact email for the order
        #[arg(long)]
        email: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// City
        #[arg(long)]
        city: String,

        /// Postal code
        #[arg(long)]
        zip: String,

        /// Country
        #[arg(long)]
        country: String,
    },
    /// Show order history
    Orders,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        product: i32,

        /// Size (defaults to the product's first listed size)
        #[arg(long)]
        size: Option<String>,

        /// Color (defaults to the product's first listed color)
        #[arg(long)]
        color: Option<String>,

        /// Units to add
        #[arg(short, long, default_value = "1")]
        quantity: NonZeroU32,
    },
    /// Remove a cart line
    Remove {
        /// Product id
        product: i32,

        /// Size of the line to remove
        #[arg(long)]
        size: String,

        /// Color of the line to remove
        #[arg(long)]
        color: String,
    },
    /// Set a cart line's quantity
    SetQty {
        /// Product id
        product: i32,

        /// Size of the line to update
        #[arg(long)]
        size: String,

        /// Color of the line to update
        #[arg(long)]
        color: String,

        /// New quantity
        #[arg(short, long)]
        quantity: NonZeroU32,
    },
    /// Empty the cart
    Clear,
    /// Show the cart with totals
    Show,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add or remove a product from the wishlist
    Toggle {
        /// Product id
        product: i32,
    },
    /// Show wishlisted products
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products {
            category,
            search,
            min,
            max,
            sort,
        } => commands::products::list(category, search, min, max, sort)?,
        Commands::Cart { action } => match action {
            CartAction::Add {
                product,
                size,
                color,
                quantity,
            } => commands::cart::add(product, size, color, quantity)?,
            CartAction::Remove {
                product,
                size,
                color,
            } => commands::cart::remove(product, size, color)?,
            CartAction::SetQty {
                product,
                size,
                color,
                quantity,
            } => commands::cart::set_quantity(product, size, color, quantity)?,
            CartAction::Clear => commands::cart::clear()?,
            CartAction::Show => commands::cart::show()?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Toggle { product } => commands::wishlist::toggle(product)?,
            WishlistAction::Show => commands::wishlist::show()?,
        },
        Commands::Login { email } => commands::session::login(&email)?,
        Commands::Logout => commands::session::logout()?,
        Commands::Review { product, rating } => commands::products::review(product, rating)?,
        Commands::Checkout {
            first_name,
            last_name,
            email,
            address,
            city,
            zip,
            country,
        } => commands::checkout::place(fashionista_core::types::ShippingDetails {
            first_name,
            last_name,
            email,
            address,
            city,
            zip_code: zip,
            country,
        })?,
        Commands::Orders => commands::orders::list()?,
    }
    Ok(())
}
