use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Router, response::Html, routing::get};
use serde::Deserialize;
use std::net::SocketAddr;
use temper::prelude::*;

const TOTAL_PAGES: u32 = 12;

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

fn config() -> TemperConfig {
    match std::env::var("TEMPER_CONFIG") {
        Ok(path) => TemperConfig::from_file(&path).unwrap_or_else(|err| {
            tracing::warn!("{err}, using defaults");
            TemperConfig::default()
        }),
        Err(_) => TemperConfig::default(),
    }
}

fn navbar(active: &str) -> Element {
    Navbar::new(true)
        .fixed_top()
        .brand(link("/", "Temper"))
        .left_link(active == "/", "/", "Home")
        .left_link(active == "/about", "/about", "About")
        .right_text("Signed in as guest")
        .right_link("/login", "Log in")
        .render()
}

fn render(config: &TemperConfig, title: &str, active: &str, body: Element) -> Result<String, Error> {
    BootstrapPage::from_config(config)
        .title(title)
        .body(div().child(navbar(active)).child(container(false, [body])))
        .render()
}

async fn index(Query(query): Query<PageQuery>) -> Result<Html<String>, (StatusCode, String)> {
    let config = config();
    let current = query.page.unwrap_or(1);

    let pager = Pager::from_config(&config.pagination)
        .render(|p| format!("/?page={p}"), current, TOTAL_PAGES)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let body = div()
        .child(page_header([h1().text("Articles")]))
        .child(alert(
            AlertKind::Info,
            true,
            [text(&format!("Showing page {current} of {TOTAL_PAGES}"))],
        ))
        .child(ulist_group(
            (1..=5).map(|i| list_group_item([text(&format!("Article {current}.{i}"))])),
        ))
        .child(pager);

    render(&config, "Articles", "/", body)
        .map(Html)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
}

async fn about() -> Result<Html<String>, (StatusCode, String)> {
    let config = config();
    let body = panel(
        PanelState::Default,
        [
            panel_heading([text("About Us")]),
            panel_body([p().text("We build pages out of small typed pieces.")]),
        ],
    );

    render(&config, "About", "/about", body)
        .map(Html)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let app = Router::new()
        .route("/", get(index))
        .route("/about", get(about));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
