//! Site search example - query a running site's data document

use sinai_core::{Result, SiteApi};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());
    let query = args.next().unwrap_or_else(|| "water".to_string());

    println!("Loading site data from {}", base_url);
    let api = SiteApi::new(&base_url).await?;
    println!("Indexed {} entries", api.index_len());

    let results = api.search(&query);
    if results.is_empty() {
        println!("No results for {:?}", query);
    } else {
        println!("Found {} results:", results.len());
        for result in results {
            println!(
                "  - [{}] {} ({})",
                result.entry.kind.label(),
                result.entry.display_title,
                result.entry.id
            );
        }
    }

    Ok(())
}
