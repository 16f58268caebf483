use clap::Parser;
use hexcheckout::application::checkout::CheckoutService;
use hexcheckout::domain::order::Order;
use hexcheckout::domain::ports::{OrderStoreBox, PaymentGatewayBox};
use hexcheckout::infrastructure::fake_gateway::FakePaymentGateway;
use hexcheckout::infrastructure::in_memory::InMemoryOrderStore;
use hexcheckout::interfaces::csv::order_reader::OrderReader;
use hexcheckout::interfaces::csv::order_writer::OrderWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (`id, amount`). Without it, a single demo order is checked out.
    input: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "HEXCHECKOUT_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Make the payment gateway reject every charge.
    #[arg(long)]
    fail_payments: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let order_store = open_store(cli.db_path)?;
    let payment_gateway: PaymentGatewayBox =
        Box::new(FakePaymentGateway::with_failure(cli.fail_payments));
    let service = CheckoutService::new(order_store, payment_gateway);

    match cli.input {
        Some(input) => run_batch(&service, input).await,
        None => run_demo(&service).await,
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<PathBuf>) -> Result<OrderStoreBox> {
    use hexcheckout::infrastructure::rocksdb::RocksDbOrderStore;

    match db_path {
        Some(path) => Ok(Box::new(RocksDbOrderStore::open(path).into_diagnostic()?)),
        None => Ok(Box::new(InMemoryOrderStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<PathBuf>) -> Result<OrderStoreBox> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
        );
    }
    Ok(Box::new(InMemoryOrderStore::new()))
}

/// Checks out one order and prints it back; any failure ends the process.
async fn run_demo(service: &CheckoutService) -> Result<()> {
    let order = Order::new("o-1", 100);
    let id = order.id().to_string();
    service.checkout(order).await.into_diagnostic()?;

    if let Some(saved) = service.find_order(&id).await.into_diagnostic()? {
        println!("Saved order: {} {}", saved.id(), saved.amount());
    }
    Ok(())
}

/// Checks out every order in the file, then writes the stored orders to stdout.
async fn run_batch(service: &CheckoutService, input: PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    for order_result in reader.orders() {
        match order_result {
            Ok(order) => {
                let id = order.id().to_string();
                if let Err(e) = service.checkout(order).await {
                    error!(order_id = %id, stage = ?e.stage(), "Error processing order: {}", e);
                }
            }
            Err(e) => {
                error!("Error reading order: {}", e);
            }
        }
    }

    let orders = service.orders().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = OrderWriter::new(stdout.lock());
    writer.write_orders(orders).into_diagnostic()?;

    Ok(())
}
