use std::{collections::HashMap, sync::Arc};

use analysis::Lexicon;
use reqwest::Client;
use setup::Config;
use warp::{filters::BoxedFilter, Filter, Reply};

use crate::controllers;

use super::{
    filters::{with_client, with_config, with_lexicon},
    MAX_BODY_SIZE,
};

pub struct PageRouter {
    client: Client,
    lexicon: Arc<Lexicon>,
    config: Config,
}

impl PageRouter {
    pub fn new(client: Client, lexicon: Arc<Lexicon>, config: Config) -> Self {
        Self {
            client,
            lexicon,
            config,
        }
    }

    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        self.analyze().or(self.error()).or(self.home()).boxed()
    }

    fn home(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path::end())
            .then(|| async { controllers::home().await })
            .boxed()
    }

    fn analyze(&self) -> BoxedFilter<(impl Reply,)> {
        warp::post()
            .and(warp::path("analyze"))
            .and(
                // repeated info_type keys would collapse in a HashMap body,
                // so the form is read as raw pairs
                warp::body::content_length_limit(MAX_BODY_SIZE).and(warp::body::form()),
            )
            .and(with_client(self.client.clone()))
            .and(with_lexicon(self.lexicon.clone()))
            .and(with_config(self.config.clone()))
            .then(
                |form: Vec<(String, String)>,
                 client: Client,
                 lexicon: Arc<Lexicon>,
                 config: Config| async move {
                    controllers::analyze(form, client, lexicon, config).await
                },
            )
            .boxed()
    }

    fn error(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path("error"))
            .and(warp::query::<HashMap<String, String>>())
            .then(|query: HashMap<String, String>| async move {
                controllers::error(query).await
            })
            .boxed()
    }
}
