use std::sync::Arc;

use analysis::Lexicon;
use setup::Config;
use warp::Filter;

pub mod controllers;
pub mod handlers;

use handlers::{handle_rejection, PageRouter};

pub async fn server(config: Config, lexicon: Arc<Lexicon>) {
    pretty_env_logger::init();
    let client = scrape::build_client(config.fetch.timeout_seconds, &config.fetch.user_agent);
    let router = PageRouter::new(client, lexicon, config.clone());
    let routes = router
        .routes()
        .with(warp::log("pagelens"))
        .recover(handle_rejection);
    let port = config.general.port;
    println!("Starting server at: http://0.0.0.0:{}", port);
    warp::serve(routes).run(([0, 0, 0, 0], port)).await;
}
