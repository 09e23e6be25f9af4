use std::error::Error;

use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use pokemon_card_catalog::cards::card_row::CardRow;
use pokemon_card_catalog::catalog_client::CardCatalogClient;
use pokemon_card_catalog::image_loader::ImageLoader;
use pokemon_card_catalog::session::CatalogSession;
use pokemon_card_catalog::utilities::{config::CONFIG, file_management::save_image};

fn print_rows(rows: &[CardRow]) {
    for (index, row) in rows.iter().enumerate() {
        println!("{:>4}  {:<30} {}", index, row.name, row.types);
    }
    println!("{} cards", rows.len());
}

async fn show_detail(session: &CatalogSession, images: &ImageLoader, index: usize) {
    let Some(detail) = session.select(index) else {
        println!("No card at row {}", index);
        return;
    };
    println!("{}", detail);

    if CONFIG.image_dir.is_empty() {
        return;
    }
    let url = detail.image_url.as_ref().map(|url| url.as_str());
    if let Some(bytes) = images.load(url).await {
        match save_image(&CONFIG.image_dir, &detail.name, detail.image_url.as_ref(), &bytes) {
            Ok(path) => info!("Saved image of {} to {}", detail.name, path.display()),
            Err(e) => error!("Failed to save image of {}: {}", detail.name, e),
        }
    }
}

/// One query per line, `#N` opens row N of the current results.
async fn run_interactive(session: &CatalogSession, images: &ImageLoader) -> std::io::Result<()> {
    println!("Search Pokemon by Type (#N shows the details of row N, Ctrl-D quits)");
    print_rows(&session.search(""));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.strip_prefix('#').map(|n| n.trim().parse::<usize>()) {
            Some(Ok(index)) => show_detail(session, images, index).await,
            Some(Err(_)) => println!("Expected a row number after '#'"),
            None => print_rows(&session.search(&line)),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("Starting");

    let client = reqwest::Client::new();
    let catalog_client = CardCatalogClient::new(Some(&CONFIG.api_url), client.clone())
        .with_connectivity_retry(CONFIG.connectivity_retry_interval())
        .with_timeout(CONFIG.fetch_timeout());
    let session = CatalogSession::new(Box::new(catalog_client));
    let images = ImageLoader::new(client);

    let start_time = chrono::prelude::Local::now();
    if let Err(e) = session.refresh().await {
        error!("Continuing without a catalog: {}", e);
    }
    let end_time = chrono::prelude::Local::now();
    info!(
        "Catalog fetch started at: {}. Finished at: {}. Took: {} seconds",
        start_time,
        end_time,
        (end_time - start_time).num_seconds()
    );

    match &CONFIG.search {
        Some(query) => {
            print_rows(&session.search(query));
            if let Some(index) = CONFIG.selected {
                show_detail(&session, &images, index).await;
            }
        }
        None => run_interactive(&session, &images).await?,
    }

    Ok(())
}
