use analysis::SectionKind;
use scraper::{Html, Selector};

lazy_static::lazy_static! {
    static ref TITLE_SEL: Selector = Selector::parse("title").unwrap();
    static ref HEADING_SEL: Selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    static ref PARAGRAPH_SEL: Selector = Selector::parse("p").unwrap();
    static ref LINK_SEL: Selector = Selector::parse("a[href]").unwrap();
}

/// The structured regions pulled out of one fetched page. Links are kept for
/// display only and never run through the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtract {
    pub title: Option<String>,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
    pub links: Vec<String>,
}

pub fn extract_sections(html: &str) -> PageExtract {
    let document = Html::parse_document(html);
    let title = document
        .select(&TITLE_SEL)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|title| !title.is_empty());
    let headings = collect_text(&document, &HEADING_SEL);
    let paragraphs = collect_text(&document, &PARAGRAPH_SEL);
    let links = document
        .select(&LINK_SEL)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_owned)
        .collect();
    PageExtract {
        title,
        headings,
        paragraphs,
        links,
    }
}

impl PageExtract {
    /// The exact string the analyzer sees for `kind`: the title itself, or
    /// the headings/paragraphs joined with single spaces. A missing title is
    /// an empty string, not placeholder text.
    pub fn section_text(&self, kind: SectionKind) -> String {
        match kind {
            SectionKind::Title => self.title.clone().unwrap_or_default(),
            SectionKind::Headings => self.headings.join(" "),
            SectionKind::Paragraphs => self.paragraphs.join(" "),
        }
    }

    /// The individual entries of `kind`, for display rather than analysis.
    pub fn section_items(&self, kind: SectionKind) -> Vec<String> {
        match kind {
            SectionKind::Title => self.title.iter().cloned().collect(),
            SectionKind::Headings => self.headings.clone(),
            SectionKind::Paragraphs => self.paragraphs.clone(),
        }
    }
}

fn collect_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}
