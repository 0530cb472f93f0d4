use clap::{Parser, Subcommand};
use log::debug;
use pantry_pages::{open_workspace, session, view, DraftField, PantryConfig, PantryError};
use std::process;
use tokio::io::BufReader;

/// Browse and add recipes served by a REST collection
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Collection URL (overrides pantry.toml and PANTRY__API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the recipe list and detail panel
    Browse {
        /// Free-text search over title, cuisine, tags and ingredients
        #[arg(short, long)]
        search: Option<String>,

        /// Recipe id to show in the detail panel
        #[arg(long)]
        select: Option<String>,
    },

    /// Add a recipe
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        cuisine: String,
        #[arg(long, default_value = "")]
        time: String,
        #[arg(long, default_value = "")]
        difficulty: String,
        #[arg(long, default_value = "")]
        servings: String,
        /// Comma separated
        #[arg(long, default_value = "")]
        tags: String,
        /// Comma separated
        #[arg(long)]
        ingredients: String,
        #[arg(long)]
        instructions: String,
    },

    /// Read commands from stdin (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let api_url = match cli.api_url {
        Some(url) => url,
        None => PantryConfig::load().map_err(PantryError::from)?.api_url,
    };
    debug!("Using collection {}", api_url);

    let (mut ws, store) = open_workspace(&api_url).await;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Browse { search, select } => {
            if let Some(query) = search {
                ws.set_query(query);
            }
            if let Some(id) = select {
                ws.select_input(&id);
            }
            print!("{}", view::render_page(&ws));
            if ws.error().is_some() {
                process::exit(1);
            }
        }
        Commands::Add {
            title,
            cuisine,
            time,
            difficulty,
            servings,
            tags,
            ingredients,
            instructions,
        } => {
            let fields = [
                (DraftField::Title, title),
                (DraftField::Cuisine, cuisine),
                (DraftField::Time, time),
                (DraftField::Difficulty, difficulty),
                (DraftField::Servings, servings),
                (DraftField::Tags, tags),
                (DraftField::Ingredients, ingredients),
                (DraftField::Instructions, instructions),
            ];
            for (field, value) in fields {
                ws.update_field(field, value);
            }

            match ws.submit(&store).await {
                Ok(true) => print!("{}", view::render_page(&ws)),
                Ok(false) => {
                    eprintln!("{}", ws.error().unwrap_or("Unable to add recipe"));
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        Commands::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            session::run(&mut ws, &store, stdin, tokio::io::stdout()).await?;
        }
    }

    Ok(())
}
