//! Creates and alters a `users` table.
//!
//! Without `DATABASE_URL` the statements are only logged:
//!
//! ```bash
//! cargo run -p oxide-schema --example users_table
//! DATABASE_URL=mysql://root@localhost/app cargo run -p oxide-schema --example users_table
//! ```

use oxide_schema::prelude::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SchemaConfig::default().with_database("app");
    let schema = match std::env::var("DATABASE_URL") {
        Ok(url) => Schema::connect(config.with_url(url)).await?,
        Err(_) => {
            let executor = MySqlExecutor::connect_lazy("mysql://root@localhost/app")?;
            Schema::new(config, executor).dry_run(true)
        }
    };

    let created = schema
        .create("users", |t| {
            t.id();
            t.string("account", Some(50));
            t.string("name", Some(30))
                .default("")
                .comment("display name");
            t.unsigned_tiny_int("age").index();
            t.enumeration("role", ["member", "admin"]).default("member");
            t.timestamps();
            t.soft_deletes();
            t.unique(["account", "name"]);
            t.comment("registered users");
        })
        .await?;

    let altered = schema
        .table("users", |t| {
            t.string("nickname", Some(50)).nullable();
            t.string("name", Some(60)).change();
            t.drop_column(["age"]);
        })
        .await?;

    for sql in created.iter().chain(&altered) {
        println!("{sql};");
    }

    if schema.config().url.is_some() {
        info!(
            exists = schema.has_table("users").await?,
            "Checked users table"
        );
    }

    Ok(())
}
