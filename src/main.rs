use author_accounts::{config::AppConfig, password::hash_password, Author, PublicAuthor};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .init();
    }

    let hash = hash_password("password", &config.hasher)?;

    let author = Author::new(
        "305e6e9e-806b-49b3-8c44-cd859e737a38",
        Some("09090909099999999999999999999999"),
        "https://example.com/avatars/myusername.png",
        "something@some.thing",
        &hash,
        "myusername",
    )?;

    tracing::info!(author_id = %author.id(), username = author.username(), "author created");
    println!("{}", serde_json::to_string_pretty(&PublicAuthor::from(&author))?);

    Ok(())
}
