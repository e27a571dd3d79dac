use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use storefront_prefs::config::toml_config::{LogFormat, StorageBackend};
use storefront_prefs::config::{Command, FavoritesCommand, LanguageCommand};
use storefront_prefs::core::carousel::{Carousel, CarouselTimer};
use storefront_prefs::core::colors::ColorGallery;
use storefront_prefs::core::product_view::DIMENSIONS;
use storefront_prefs::utils::error::ErrorSeverity;
use storefront_prefs::utils::{logger, validation::Validate};
use storefront_prefs::{
    AppContext, Category, CliConfig, KeyValueStorage, Language, LocalStorage, MemoryDocument,
    MemoryStorage, PrefsConfig, ProductView, Section, StoreError,
};

type App = AppContext<dyn KeyValueStorage, MemoryDocument>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = PrefsConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("Failed to load config file '{}'", cli.config))?;

    if let Some(dir) = &cli.storage_dir {
        config.storage.dir = dir.clone();
        config.storage.backend = StorageBackend::File;
    }
    if cli.ephemeral {
        config.storage.backend = StorageBackend::Memory;
    }

    let verbose = cli.verbose || config.logging.verbose;
    match config.logging.format {
        LogFormat::Json => logger::init_json_logger(verbose),
        LogFormat::Compact => logger::init_cli_logger(verbose),
    }
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage: Arc<dyn KeyValueStorage> = match config.storage.backend {
        StorageBackend::File => Arc::new(LocalStorage::new(config.storage.dir.clone())),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    };
    let mut app: App =
        AppContext::with_default_language(storage, MemoryDocument::new(), config.default_language()?);

    if let Err(e) = run(&mut app, cli.command, &config).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(app: &mut App, command: Command, config: &PrefsConfig) -> Result<(), StoreError> {
    match command {
        Command::Favorites(cmd) => run_favorites(app, cmd),
        Command::Language(cmd) => run_language(app, cmd)?,
        Command::Translate { key } => println!("{}", app.locale.translate(&key)),
        Command::Catalog { category } => {
            let categories = match category {
                Some(slug) => vec![slug.parse::<Category>()?],
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                println!("{}", app.category_title(category));
                for card in app.category_cards(category) {
                    let heart = if card.is_favorite { "♥" } else { "♡" };
                    println!(
                        "  {} {:<16} {:<32} ${}",
                        heart, card.product.id, card.product.name, card.product.price
                    );
                }
            }
        }
        Command::Product {
            id,
            category,
            image,
            color,
        } => {
            let category = category.map(|slug| slug.parse::<Category>()).transpose()?;
            match app.catalog.product_by_id(&id, category) {
                Some(product) => {
                    let mut view = ProductView::new(product);
                    if !view.select_image(image) {
                        tracing::warn!("No image {} for {}, showing the first", image, product.id);
                    }
                    if let Some(color) = color {
                        if !view.select_color(&color) {
                            tracing::warn!("Unknown color '{}', keeping the default", color);
                        }
                    }

                    println!("{} (${})", product.name, product.price);
                    if let Some(path) = view.current_image_path() {
                        println!("  {}", path);
                    }
                    println!(
                        "{}: {}",
                        app.locale.translate("product.color"),
                        view.color().selected()
                    );
                    println!(
                        "{}",
                        app.locale
                            .translate_with("product.description.text", &[("product", product.name)])
                    );
                    if view.is_open(Section::Dimensions) {
                        println!("{}", app.locale.translate(Section::Dimensions.title_key()));
                        for (key, value) in DIMENSIONS {
                            println!("  {}: {}", app.locale.translate(key), value);
                        }
                    }
                }
                None => {
                    println!("{}", app.locale.translate("product.error.title"));
                    println!("{}", app.locale.translate("product.error.message"));
                }
            }
        }
        Command::Colors => {
            println!("{}", app.locale.translate("colors.title"));
            let gallery = ColorGallery::new();
            for swatch in gallery.swatches() {
                println!(
                    "  {} {} {}",
                    app.locale.translate("colors.category"),
                    swatch.id,
                    swatch.image
                );
            }
        }
        Command::Carousel { ticks } => {
            let timer =
                CarouselTimer::start(Carousel::hero(&app.catalog), config.carousel_interval())?;
            let mut rx = timer.subscribe();
            if let Some(slide) = timer.current_slide() {
                println!("{}", slide);
            }
            for _ in 0..ticks {
                if rx.changed().await.is_err() {
                    break;
                }
                if let Some(slide) = timer.current_slide() {
                    println!("{}", slide);
                }
            }
            timer.stop();
        }
    }
    Ok(())
}

fn run_favorites(app: &mut App, cmd: FavoritesCommand) {
    match cmd {
        FavoritesCommand::List => {
            let cards = app.favorite_cards();
            if cards.is_empty() {
                println!("{}", app.locale.translate("favorites.empty.title"));
                println!("{}", app.locale.translate("favorites.empty.message"));
                return;
            }
            println!("{}", app.locale.translate("favorites.title"));
            for card in cards {
                println!("  {:<16} {}", card.product.id, card.product.name);
            }
        }
        FavoritesCommand::Add { id } => {
            app.favorites.add_favorite(id.as_str());
            println!("♥ {}", id);
        }
        FavoritesCommand::Remove { id } => {
            app.favorites.remove_favorite(&id);
            println!("♡ {}", id);
        }
        FavoritesCommand::Toggle { id } => {
            let now_favorite = app.favorites.toggle_favorite(id.as_str());
            println!("{} {}", if now_favorite { "♥" } else { "♡" }, id);
        }
        FavoritesCommand::Clear => {
            app.favorites.clear_all_favorites();
            println!("{}", app.locale.translate("favorites.empty.title"));
        }
    }
}

fn run_language(app: &mut App, cmd: LanguageCommand) -> Result<(), StoreError> {
    match cmd {
        LanguageCommand::Show => {}
        LanguageCommand::Set { tag } => {
            let language: Language = tag.parse()?;
            app.locale.set_language(language);
        }
        LanguageCommand::Toggle => {
            app.locale.toggle_language();
        }
    }

    let attrs = app.locale.document().attributes();
    println!(
        "lang={} dir={} (switch: {})",
        app.locale.language(),
        app.locale.direction(),
        app.locale.switch_label()
    );
    tracing::debug!("Document attributes: {:?}", attrs);
    Ok(())
}
