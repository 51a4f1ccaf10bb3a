use marquee_core::{CatalogBrowser, ClientConfig, Filter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env();
    println!("Catalog API: {}", config.base_url);

    let client = marquee_core::CatalogClient::with_config(config)?;
    let mut browser = CatalogBrowser::with_client(client);

    // First page plus viewport prefetch, like the list view on load.
    browser.fill_viewport(800).await?;
    println!("\nLoaded {} movies:", browser.list().movies().len());
    for movie in browser.list().movies().iter().take(10) {
        println!(
            "  [{}] {} ({}) - ${:.1}M",
            movie.rank, movie.title, movie.year, movie.revenue
        );
    }

    // Top 10 by revenue across the catalog.
    browser.toggle_top().await?;
    println!("\nTop 10 by revenue:");
    for movie in browser.list().movies() {
        println!("  {} - ${:.1}M", movie.title, movie.revenue);
    }

    // Narrow to the most recent year the catalog knows about.
    let years = browser.init_year_options().await?.to_vec();
    if let Some(&year) = years.first() {
        browser.open_year_picker().await?;
        browser.pick_year(year).await?;
        println!("\nTop 10 for {year}:");
        for movie in browser.list().movies() {
            println!("  {} - ${:.1}M", movie.title, movie.revenue);
        }
    }

    // Back to the unfiltered listing, then open the first movie.
    browser.apply_filter(Filter::None).await?;
    if let Some(id) = browser.list().movies().first().map(|m| m.id.clone()) {
        browser.open_movie(&id).await?;
        if let Some(detail) = browser.modal().detail() {
            println!("\nDetail: {} ({})", detail.title, detail.year);
            println!("  Director: {}", detail.director);
            println!("  Cast: {}", detail.actors);
            println!("  {} min, rating {}, metascore {}", detail.runtime, detail.rating, detail.metascore);
        }
        browser.close_movie();
    }

    Ok(())
}
