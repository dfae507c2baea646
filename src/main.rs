use myco_glossary::config::Config;
use myco_glossary::ingestion::fetcher::WikipediaSource;
use myco_glossary::router::build_router;
use myco_glossary::search::engine::GlossaryEngine;
use myco_glossary::storage::cache::TermCache;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [--bind <addr:port>] [--page <wiki page>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:3000", args[0]);
        std::process::exit(0);
    }

    let config = Config::from_env(&args)?;

    // 1. Source + cache:
    let source = Arc::new(WikipediaSource::new(&config.source)?);
    tracing::info!(
        "Glossary source: {} (page {}, timeout {:?})",
        config.source.endpoint,
        source.page(),
        config.source.timeout
    );
    tracing::info!("Cache TTL: {:?}", config.cache_ttl);
    let cache = Arc::new(TermCache::new(source, config.cache_ttl));
    let engine = Arc::new(GlossaryEngine::new(cache.clone()));

    // 2. Warm the cache so the first request does not pay for the fetch:
    let warm_cache = cache.clone();
    tokio::spawn(async move {
        match warm_cache.refresh().await {
            Ok(index) => tracing::info!("Glossary warm-up loaded {} terms", index.len()),
            Err(e) => tracing::warn!("Glossary warm-up failed, will retry lazily: {}", e),
        }
    });

    // 3. HTTP Router:
    let app = build_router(engine);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
