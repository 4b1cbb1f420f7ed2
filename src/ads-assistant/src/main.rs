//! Ads Assistant: command-line console over the ads domain store.
//!
//! Each invocation opens the store from a file-backed slot, applies one
//! operation, and leaves the persisted snapshot behind for the next run.

use ads_core::config::AppConfig;
use ads_core::types::{
    BudgetType, CampaignDetails, CampaignRecord, CampaignState, DraftProduct, Pacing,
};
use ads_store::board::{
    brief_quality, campaign_board, resolve_campaign_product, sort_products, BriefQuality,
    PriceRange, StatusSort, CURRENCIES,
};
use ads_store::normalize::{
    DEFAULT_BID_STRATEGY, DEFAULT_BUDGET_AMOUNT, DEFAULT_END_DATE, DEFAULT_FREQUENCY_CAP,
    DEFAULT_OBJECTIVE, DEFAULT_START_DATE,
};
use ads_store::{
    default_targeting, generate_sentiment, generate_targeting, shared, DomainStore, FileSlot,
    GenerationHandle, SeedDataset, StoreOptions, SystemClock, SENTIMENT_PHASES,
};
use anyhow::{anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "ads-assistant")]
#[command(about = "Product targeting and campaign console")]
#[command(version)]
struct Cli {
    /// Directory holding the persisted store (overrides config)
    #[arg(long, env = "ADS_ASSISTANT__STORE__DATA_DIR")]
    data_dir: Option<String>,

    /// Targeting generation delay in milliseconds (overrides config)
    #[arg(long, env = "ADS_ASSISTANT__GENERATION__TARGETING_DELAY_MS")]
    targeting_delay_ms: Option<u64>,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products
    Products {
        #[arg(long, value_enum, default_value_t = SortArg::Workflow)]
        sort: SortArg,
    },
    /// List campaigns (seed and created)
    Campaigns {
        #[arg(long, value_enum, default_value_t = SortArg::Workflow)]
        sort: SortArg,
    },
    /// Select a product and show its targeting
    Select { product_id: String },
    /// Select a product and run targeting generation for it
    GenerateTargeting { product_id: String },
    /// Toggle a segment in the current segment selection
    ToggleSegment { segment_id: String },
    /// Clear generated targeting and the segment selection
    ResetTargeting,
    /// Create a campaign for a product
    CreateCampaign(CreateCampaignArgs),
    /// Approve a product
    ApproveProduct { product_id: String },
    /// Mark a campaign Active
    ActivateCampaign { campaign_id: String },
    /// Create a product through the draft, targeting and sentiment steps
    NewProduct(NewProductArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Workflow,
    Reverse,
}

impl From<SortArg> for StatusSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Workflow => StatusSort::Workflow,
            SortArg::Reverse => StatusSort::Reverse,
        }
    }
}

#[derive(Args, Debug)]
struct CreateCampaignArgs {
    #[arg(long)]
    product: String,
    /// Campaign name; setting it switches to a fully specified campaign
    #[arg(long)]
    name: Option<String>,
    #[arg(long, default_value = DEFAULT_OBJECTIVE)]
    objective: String,
    #[arg(long, value_enum, default_value_t = BudgetArg::Daily)]
    budget_type: BudgetArg,
    #[arg(long, default_value = DEFAULT_BUDGET_AMOUNT)]
    budget: String,
    #[arg(long, default_value = DEFAULT_START_DATE)]
    start: String,
    #[arg(long, default_value = DEFAULT_END_DATE)]
    end: String,
    #[arg(long, default_value = DEFAULT_BID_STRATEGY)]
    bid_strategy: String,
    #[arg(long, value_enum, default_value_t = PacingArg::Even)]
    pacing: PacingArg,
    #[arg(long, default_value = DEFAULT_FREQUENCY_CAP)]
    frequency_cap: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BudgetArg {
    Daily,
    Lifetime,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PacingArg {
    Even,
    Ahead,
    Asap,
}

impl CreateCampaignArgs {
    fn details(&self, name: &str) -> CampaignDetails {
        CampaignDetails {
            product_id: self.product.clone(),
            name: name.to_string(),
            objective: self.objective.clone(),
            budget_type: match self.budget_type {
                BudgetArg::Daily => BudgetType::Daily,
                BudgetArg::Lifetime => BudgetType::Lifetime,
            },
            budget_amount: self.budget.clone(),
            start_date: self.start.clone(),
            end_date: self.end.clone(),
            bid_strategy: self.bid_strategy.clone(),
            pacing: match self.pacing {
                PacingArg::Even => Pacing::Even,
                PacingArg::Ahead => Pacing::Ahead,
                PacingArg::Asap => Pacing::Asap,
            },
            frequency_cap: self.frequency_cap.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct NewProductArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    category: String,
    #[arg(long, default_value = "USD", value_parser = clap::builder::PossibleValuesParser::new(CURRENCIES))]
    currency: String,
    #[arg(long)]
    min_price: String,
    #[arg(long)]
    max_price: String,
    /// Launch date (YYYY-MM-DD)
    #[arg(long)]
    launch_date: String,
    #[arg(long)]
    tone: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Keep the drafts without generating sentiment or committing
    #[arg(long, default_value_t = false)]
    draft_only: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ads_assistant=info,ads_store=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load();
    let json_logs = cli.json_logs
        || loaded
            .as_ref()
            .map(|config| config.logging.json)
            .unwrap_or(false);
    init_tracing(json_logs);

    let mut config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(dir) = cli.data_dir {
        config.store.data_dir = dir;
    }
    if let Some(delay) = cli.targeting_delay_ms {
        config.generation.targeting_delay_ms = delay;
    }

    info!(
        data_dir = %config.store.data_dir,
        storage_key = %config.store.storage_key,
        "Configuration loaded"
    );

    let store = DomainStore::open(
        SeedDataset::builtin(),
        Arc::new(FileSlot::new(&config.store.data_dir)),
        Arc::new(SystemClock),
        StoreOptions::from_config(&config.store),
    );

    run(cli.command, store, &config).await
}

async fn run(command: Command, mut store: DomainStore, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Command::Products { sort } => {
            for p in sort_products(&store.state().products, sort.into()) {
                println!(
                    "{:<20} {:<24} {:<14} {:<24} launch {}",
                    p.id,
                    p.name,
                    p.status.as_str(),
                    p.category,
                    p.launch_date
                );
            }
        }
        Command::Campaigns { sort } => {
            let state = store.state();
            for c in campaign_board(&store.seed().campaigns, &state.campaigns, sort.into()) {
                let product = resolve_campaign_product(&state.products, &c)
                    .map(|p| p.name.as_str())
                    .unwrap_or("-");
                println!(
                    "{:<38} {:<26} {:<7} {:<32} product {}",
                    c.id,
                    c.name,
                    c.state.as_str(),
                    c.scope,
                    product
                );
            }
        }
        Command::Select { product_id } => {
            require_product(&store, &product_id)?;
            store.select_product(&product_id);
            print_selection(&store);
        }
        Command::GenerateTargeting { product_id } => {
            require_product(&store, &product_id)?;
            store.select_product(&product_id);
            let store = shared(store);
            let delay = Duration::from_millis(config.generation.targeting_delay_ms);
            println!("Generating targeting...");
            if until_interrupted(generate_targeting(&store, delay)).await.is_none() {
                println!("Targeting generation cancelled");
            }
            print_selection(&store.lock());
        }
        Command::ToggleSegment { segment_id } => {
            if !store.state().segments.iter().any(|s| s.id == segment_id) {
                bail!("unknown segment {segment_id}");
            }
            store.toggle_segment(&segment_id);
            println!("Selected segments: {}", store.state().selected_segments.join(", "));
        }
        Command::ResetTargeting => {
            store.reset_targeting();
            println!("Targeting reset");
        }
        Command::CreateCampaign(args) => {
            require_product(&store, &args.product)?;
            match &args.name {
                Some(name) => store.create_campaign_with_details(&args.details(name)),
                None => store.create_campaign_for_product(&args.product),
            }
            if let Some(campaign) = store.state().campaigns.first() {
                println!("Created campaign {} ({})", campaign.id, campaign.name);
            }
        }
        Command::ApproveProduct { product_id } => {
            require_product(&store, &product_id)?;
            store.approve_product(&product_id);
            if let Some(p) = store.state().product(&product_id) {
                println!("{} is now {}", p.name, p.status);
            }
        }
        Command::ActivateCampaign { campaign_id } => {
            let campaign = find_campaign(&store, &campaign_id)
                .ok_or_else(|| anyhow!("unknown campaign {campaign_id}"))?;
            store.set_campaign_state(&campaign, CampaignState::Active);
            println!("{} is now {}", campaign.name, CampaignState::Active);
        }
        Command::NewProduct(args) => new_product(store, args, config).await?,
    }
    Ok(())
}

async fn until_interrupted<T: Send + 'static>(mut handle: GenerationHandle<T>) -> Option<T> {
    tokio::select! {
        out = &mut handle => out,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, cancelling generation");
            handle.cancel();
            handle.await
        }
    }
}

fn require_product(store: &DomainStore, product_id: &str) -> anyhow::Result<()> {
    match store.state().product(product_id) {
        Some(_) => Ok(()),
        None => bail!("unknown product {product_id}"),
    }
}

/// The campaign as the store holds it, else the seed record.
fn find_campaign(store: &DomainStore, campaign_id: &str) -> Option<CampaignRecord> {
    store
        .state()
        .campaign(campaign_id)
        .or_else(|| store.seed().campaigns.iter().find(|c| c.id == campaign_id))
        .cloned()
}

fn print_selection(store: &DomainStore) {
    let state = store.state();
    let Some(product) = state.selected_product() else {
        println!("No product selected");
        return;
    };
    println!("{} [{}] {}", product.name, product.sku, product.status);
    if let Some(t) = &product.targeting {
        println!("  objective     {}", t.objective);
        println!("  age           {}-{}", t.age_min, t.age_max);
        println!("  interests     {}", t.interests);
        println!("  topics        {}", t.content_topics);
        println!("  frequency cap {}", t.frequency_cap);
    }
    if state.targeting_generated {
        println!("  segments      {}", state.selected_segments.join(", "));
        println!(
            "  reach         {} (confidence {})",
            state.metrics.estimated_reach, state.metrics.confidence
        );
    }
}

async fn new_product(
    mut store: DomainStore,
    args: NewProductArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let price = PriceRange::new(&args.currency, &args.min_price, &args.max_price);
    let description = args.description.filter(|d| !d.trim().is_empty());
    if let Some(text) = &description {
        let quality = brief_quality(text);
        println!(
            "Brief quality {}/{} ({} words)",
            quality.score(),
            BriefQuality::MAX_SCORE,
            quality.words
        );
        for missing in quality.missing() {
            println!("  missing: {missing}");
        }
    }

    let targeting = default_targeting(&args.category, args.tone.as_deref());
    store.set_draft_product(DraftProduct {
        name: args.name,
        category: args.category,
        price_range: price.to_string(),
        launch_date: args.launch_date,
        brand_tone: args.tone,
        description,
    });
    store.set_draft_targeting(targeting);
    if args.draft_only {
        println!("Draft saved");
        return Ok(());
    }

    let store = shared(store);
    let run = generate_sentiment(&store, &config.generation)
        .ok_or_else(|| anyhow!("draft incomplete"))?;
    let mut phase = run.phase.clone();
    let printer = tokio::spawn(async move {
        let mut shown = 0;
        println!("{}...", SENTIMENT_PHASES[shown]);
        while phase.changed().await.is_ok() {
            let current = *phase.borrow_and_update();
            if current != shown {
                shown = current;
                println!("{}...", SENTIMENT_PHASES[shown]);
            }
        }
    });
    let sentiment = until_interrupted(run.handle).await;
    let _ = printer.await;

    let Some(sentiment) = sentiment else {
        println!("Sentiment generation cancelled, draft kept");
        return Ok(());
    };
    println!(
        "Net sentiment {} (confidence {}%, momentum {})",
        sentiment.net_sentiment, sentiment.confidence, sentiment.momentum
    );
    let id = store
        .lock()
        .commit_draft(Some(sentiment))
        .ok_or_else(|| anyhow!("draft incomplete"))?;
    println!("Created product {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_campaign_defaults_match_store_defaults() {
        let cli = Cli::try_parse_from(["ads-assistant", "create-campaign", "--product", "p-1"])
            .unwrap();
        let Command::CreateCampaign(args) = cli.command else {
            panic!("expected create-campaign");
        };
        let details = args.details("Lumen Launch");
        assert_eq!(details.start_date, "2026-02-10");
        assert_eq!(details.end_date, "2026-03-20");
        assert_eq!(details.objective, "Awareness");
        assert_eq!(details.budget_amount, "$1,200");
        assert_eq!(details.budget_type, BudgetType::Daily);
        assert_eq!(details.pacing, Pacing::Even);
    }
}
