use std::sync::Arc;

use analysis::Lexicon;
use reqwest::Client;
use setup::Config;
use warp::{Filter, Rejection};

pub fn with_client(
    client: Client,
) -> impl Filter<Extract = (Client,), Error = Rejection> + Clone {
    warp::any().map(move || client.clone()).boxed()
}

pub fn with_lexicon(
    lexicon: Arc<Lexicon>,
) -> impl Filter<Extract = (Arc<Lexicon>,), Error = Rejection> + Clone {
    warp::any().map(move || lexicon.clone()).boxed()
}

pub fn with_config(
    config: Config,
) -> impl Filter<Extract = (Config,), Error = Rejection> + Clone {
    warp::any().map(move || config.clone()).boxed()
}
