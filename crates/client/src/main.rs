//! `charcat` -- interactive terminal front end for the character catalog.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default                 | Description            |
//! |-------------------|----------|-------------------------|------------------------|
//! | `CHARCAT_API_URL` | no       | `http://localhost:3000` | Base URL of the API    |

use charcat_client::api::CatalogClient;
use charcat_client::command::{Command, HELP};
use charcat_client::interaction::{Interaction, Terminal};
use charcat_client::view::CatalogView;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charcat_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api_url = std::env::var("CHARCAT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    tracing::info!(api_url = %api_url, "Starting charcat");

    let mut view = CatalogView::new(CatalogClient::new(api_url));
    let mut term = Terminal::stdio();

    term.println("Characters");
    view.load().await;
    term.println(&view.render());

    while let Some(line) = term.read_line("> ") {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                term.notify(&message);
                continue;
            }
        };

        let changed = match command {
            Command::List => true,
            Command::Reload => {
                view.load().await;
                true
            }
            Command::Add => {
                view.fill_draft(&mut term);
                view.submit_draft(&mut term).await
            }
            Command::Rename(id) => view.rename(&mut term, id).await,
            Command::Edit(id) => view.edit(&mut term, id).await,
            Command::Delete(id) => view.remove(&mut term, id).await,
            Command::Help => {
                term.println(HELP);
                false
            }
            Command::Quit => break,
        };

        if changed {
            term.println(&view.render());
        }
    }
}
