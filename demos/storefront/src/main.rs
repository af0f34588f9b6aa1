//! Terminal storefront - a scripted walk through the kicks-commerce flow:
//! browse the catalog, fill a cart, step through checkout, and place an
//! order against the mock gateway.
//!
//! Run with `--decline` to watch a failed submission recover, or
//! `--verbose` for the underlying tracing events.

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use console::style;
use kicks_commerce::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Kicks storefront demo
#[derive(Parser)]
#[command(name = "kicks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Decline the first order submission to show the retry path
    #[arg(long)]
    decline: bool,

    /// Enable verbose tracing output
    #[arg(short, long)]
    verbose: bool,
}

/// Renders notices the way a web surface would pop toasts.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("{} {}", style("✓").green(), message),
            NoticeKind::Error => eprintln!("{} {}", style("✗").red(), style(message).red()),
            NoticeKind::Info => println!("{} {}", style("ℹ").blue(), message),
        }
    }
}

/// Applies the configured submission deadline around a gateway call.
struct DeadlineGateway<G> {
    inner: G,
    limit: Duration,
}

#[async_trait]
impl<G: OrderGateway> OrderGateway for DeadlineGateway<G> {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt, GatewayError> {
        match tokio::time::timeout(self.limit, self.inner.place_order(request)).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::TimedOut),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let catalog = MemoryCatalog::with_demo_inventory();
    let config = CheckoutConfig::default();

    browse(&catalog).await?;

    let mut store = CartStore::new(notifier.clone());
    store.subscribe(|state| {
        println!(
            "  {}",
            style(format!(
                "cart: {} item(s) — {}",
                state.item_count(),
                state.total()
            ))
            .dim()
        );
    });

    fill_cart(&catalog, &mut store).await?;
    checkout(&cli, &config, &mut store, notifier).await?;

    Ok(())
}

async fn browse(catalog: &MemoryCatalog) -> Result<()> {
    println!("{}", style("Kicks — today's lineup").bold());
    for category in [
        ProductCategory::Discount,
        ProductCategory::Latest,
        ProductCategory::Regular,
    ] {
        let products = catalog.by_category(category).await?;
        println!("  {} ({})", style(category.as_str()).cyan(), products.len());
        for product in products.iter().take(2) {
            let badge = product
                .badge
                .as_deref()
                .map(|b| format!(" [{b}]"))
                .unwrap_or_default();
            println!(
                "    #{:<2} {} — {}{}",
                product.id.get(),
                product.title,
                product.price,
                badge
            );
        }
    }

    let hits = catalog.search("air").await?;
    println!(
        "  search \"air\": {}",
        hits.iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

async fn fill_cart(catalog: &MemoryCatalog, store: &mut CartStore) -> Result<()> {
    println!("\n{}", style("Filling the cart").bold());
    for id in [1u32, 1, 12] {
        if let Some(product) = catalog.by_id(ProductId::new(id)).await? {
            store.add_item(&product);
        }
    }
    // Second thoughts about the Air Force 1s.
    store.update_quantity(ProductId::new(12), 2);
    store.remove_item(ProductId::new(12));
    Ok(())
}

async fn checkout(
    cli: &Cli,
    config: &CheckoutConfig,
    store: &mut CartStore,
    notifier: Arc<dyn Notifier>,
) -> Result<()> {
    println!("\n{}", style("Checkout").bold());
    let mut session = CheckoutSession::new(config.clone(), notifier);

    session.advance(store.state())?;
    print_step(&session);

    let form = session.form_mut();
    form.email = "jordan@example.com".into();
    form.first_name = "Jordan".into();
    form.last_name = "Avery".into();
    form.address = "123 Main St".into();
    form.city = "New York".into();
    form.state = "ny".into();
    form.zip_code = "10001".into();

    session.advance(store.state())?;
    print_step(&session);

    let form = session.form_mut();
    form.card_number = "4532 1234 5678 9010".into();
    form.expiry_date = "12/39".into();
    form.cvv = "123".into();

    let totals = OrderTotals::compute(store.state(), config);
    println!("  subtotal {}", totals.subtotal);
    println!("  shipping {}", totals.shipping);
    println!("  tax      {}", totals.tax);
    println!("  total    {}", style(totals.grand_total).bold());

    let mock = MockGateway::new();
    mock.set_decline(cli.decline);
    let gateway = DeadlineGateway {
        inner: mock,
        limit: config.submit_timeout,
    };

    let order_id = match session.submit(store.state(), &gateway).await {
        Ok(order_id) => order_id,
        Err(CheckoutError::Gateway(_)) => {
            // Still on the payment step; the user clicks submit again.
            gateway.inner.set_decline(false);
            session.submit(store.state(), &gateway).await?
        }
        Err(other) => return Err(other.into()),
    };
    print_step(&session);
    println!(
        "  order {} — thank you for your purchase",
        style(order_id.as_str()).green()
    );

    tokio::time::sleep(config.confirmation_hold).await;
    session.finish(store)?;
    Ok(())
}

fn print_step(session: &CheckoutSession) {
    println!(
        "  step {}/{}: {}",
        session.step().number(),
        4,
        session.step().display_name()
    );
}
