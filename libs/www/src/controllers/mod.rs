use std::{collections::HashMap, sync::Arc, time::Instant};

use analysis::{
    category_distribution, sections::combined_text, top_k_frequencies, Lexicon, SectionKind,
    TextSection,
};
use charts::BarChart;
use render::{
    error_page::ErrorPage,
    home_page::HomePage,
    report_page::{ReportPage, SectionResult},
    Render,
};
use reqwest::Client;
use scrape::{extract_sections, fetch_page, PageExtract};
use setup::Config;
use thiserror::Error;
use urlencoding::encode;
use warp::{hyper::Uri, reply::Response, Reply};

const FETCH_FAILED_MSG: &str =
    "Error fetching data from URL. Please check the URL and try again.";

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Please enter a valid URL.")]
    MissingUrl,
    #[error("Please select at least one type of information to fetch.")]
    NoSelection,
}

/// Which page regions the multi-select asked for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub title: bool,
    pub headings: bool,
    pub paragraphs: bool,
    pub links: bool,
}

impl Selection {
    pub fn from_form(form: &[(String, String)]) -> Self {
        form.iter()
            .filter(|(key, _)| key == "info_type")
            .fold(Selection::default(), |mut selection, (_, value)| {
                match value.as_str() {
                    "title" => selection.title = true,
                    "headings" => selection.headings = true,
                    "paragraphs" => selection.paragraphs = true,
                    "links" => selection.links = true,
                    _ => {}
                }
                selection
            })
    }

    pub fn any(&self) -> bool {
        self.title || self.headings || self.paragraphs || self.links
    }

    fn includes(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Title => self.title,
            SectionKind::Headings => self.headings,
            SectionKind::Paragraphs => self.paragraphs,
        }
    }
}

pub async fn home() -> impl Reply {
    let ctx = HomePage {};
    warp::reply::html(ctx.render().await)
}

pub async fn error(query: HashMap<String, String>) -> impl Reply {
    let msg = query
        .get("msg")
        .cloned()
        .unwrap_or_else(|| String::from("Something went wrong."));
    let ctx = ErrorPage::new(msg);
    warp::reply::html(ctx.render().await)
}

pub async fn analyze(
    form: Vec<(String, String)>,
    client: Client,
    lexicon: Arc<Lexicon>,
    config: Config,
) -> Response {
    let url = form
        .iter()
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.trim().to_owned())
        .unwrap_or_default();
    let selection = Selection::from_form(&form);
    if url.is_empty() {
        return redirect_with_msg(&FormError::MissingUrl.to_string());
    }
    if !selection.any() {
        return redirect_with_msg(&FormError::NoSelection.to_string());
    }

    let now = Instant::now();
    let html = match fetch_page(&client, &url).await {
        Ok(html) => html,
        Err(e) => {
            log::error!("[analyze] {}: {}", url, e);
            return redirect_with_msg(FETCH_FAILED_MSG);
        }
    };
    let extract = extract_sections(&html);
    let (sections, results) = build_sections(&extract, selection, config.analysis.top_words);
    let category_chart = category_chart(&sections, &lexicon);
    let ctx = ReportPage {
        url: url.clone(),
        sections: results,
        links: selection.links.then(|| extract.links.clone()),
        category_chart,
    };
    let page = ctx.render().await;
    log::info!("[analyze] {}: {:?}", url, now.elapsed());
    warp::reply::html(page).into_response()
}

/// Walks the fixed section order once, producing both the analyzer's view
/// (every section plus its included flag) and the page's view (only the
/// requested sections, with their charts).
fn build_sections(
    extract: &PageExtract,
    selection: Selection,
    top_words: usize,
) -> (Vec<TextSection>, Vec<SectionResult>) {
    let mut sections = Vec::new();
    let mut results = Vec::new();
    for kind in SectionKind::ORDER {
        let included = selection.includes(kind);
        let text = extract.section_text(kind);
        if included {
            results.push(SectionResult {
                kind,
                items: extract.section_items(kind),
                chart: section_chart(&text, top_words),
            });
        }
        sections.push(TextSection::new(kind, included, text));
    }
    (sections, results)
}

fn section_chart(text: &str, top_words: usize) -> Option<String> {
    let table = top_k_frequencies(text, top_words);
    if table.is_empty() {
        return None;
    }
    let chart = BarChart {
        title: format!("Top {} Words", top_words),
        x_label: String::from("Words"),
        y_label: String::from("Counts"),
        bars: table,
    };
    Some(chart.data_uri())
}

fn category_chart(sections: &[TextSection], lexicon: &Lexicon) -> Option<String> {
    if combined_text(sections).trim().is_empty() {
        return None;
    }
    let counts = category_distribution(sections, lexicon);
    let chart = BarChart {
        title: String::from("Word Categories"),
        x_label: String::from("Category"),
        y_label: String::from("Count"),
        bars: counts
            .entries()
            .into_iter()
            .map(|(category, count)| (category.as_str().to_owned(), count))
            .collect(),
    };
    Some(chart.data_uri())
}

fn redirect_with_msg(msg: &str) -> Response {
    let uri = format!("/error?msg={}", encode(msg));
    warp::redirect(uri.parse::<Uri>().unwrap()).into_response()
}
