use analysis::SectionKind;
use async_trait::async_trait;

use crate::{escape_html, get_template_file, render_includes, Render};

/// One requested page region, ready for display: its extracted entries and
/// the top-words chart, already encoded as a `data:` URI. A `None` chart
/// means the section had no tokens to count.
pub struct SectionResult {
    pub kind: SectionKind,
    pub items: Vec<String>,
    pub chart: Option<String>,
}

pub struct ReportPage {
    pub url: String,
    pub sections: Vec<SectionResult>,
    pub links: Option<Vec<String>>,
    pub category_chart: Option<String>,
}

impl ReportPage {
    fn render_sections(&self) -> String {
        let mut out = String::new();
        for section in self.sections.iter() {
            out.push_str(&format!(
                "<section><h2>{}</h2>",
                display_name(section.kind)
            ));
            match section.kind {
                SectionKind::Title => {
                    let title = section
                        .items
                        .first()
                        .map(|title| escape_html(title))
                        .unwrap_or_else(|| String::from("No title found"));
                    out.push_str(&format!("<p>{}</p>", title));
                }
                _ => {
                    if section.items.is_empty() {
                        out.push_str("<p>None found.</p>");
                    } else {
                        out.push_str("<ul>");
                        for item in section.items.iter() {
                            out.push_str(&format!("<li>{}</li>", escape_html(item)));
                        }
                        out.push_str("</ul>");
                    }
                }
            }
            match &section.chart {
                Some(uri) => out.push_str(&format!(
                    "<img src=\"{}\" alt=\"Top words in {}\" />",
                    uri,
                    section.kind.as_str()
                )),
                None => out.push_str("<p class=\"empty\">No words to chart for this section.</p>"),
            }
            out.push_str("</section>");
        }
        out
    }

    fn render_links(&self) -> String {
        match &self.links {
            Some(links) if !links.is_empty() => {
                let mut out = String::from("<section><h2>Links</h2><ul>");
                for link in links.iter() {
                    let href = escape_html(link);
                    out.push_str(&format!("<li><a href=\"{}\">{}</a></li>", href, href));
                }
                out.push_str("</ul></section>");
                out
            }
            Some(_) => String::from("<section><h2>Links</h2><p>None found.</p></section>"),
            None => String::with_capacity(0),
        }
    }

    fn render_category(&self) -> String {
        match &self.category_chart {
            Some(uri) => format!(
                "<section><h2>Word Categories</h2><img src=\"{}\" alt=\"Word categories\" /></section>",
                uri
            ),
            None => String::from(
                "<section><h2>Word Categories</h2><p class=\"empty\">No words to categorize.</p></section>",
            ),
        }
    }
}

fn display_name(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Title => "Title",
        SectionKind::Headings => "Headings",
        SectionKind::Paragraphs => "Paragraphs",
    }
}

#[async_trait]
impl Render for ReportPage {
    async fn render(&self) -> String {
        let mut ctx = get_template_file("report").await.unwrap();
        ctx = ctx
            .replace("<%= url %>", &escape_html(&self.url))
            .replace("<%= sections %>", &self.render_sections())
            .replace("<%= links %>", &self.render_links())
            .replace("<%= category %>", &self.render_category());
        render_includes(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> ReportPage {
        ReportPage {
            url: String::from("https://example.com"),
            sections: vec![
                SectionResult {
                    kind: SectionKind::Title,
                    items: vec![],
                    chart: None,
                },
                SectionResult {
                    kind: SectionKind::Headings,
                    items: vec![String::from("One <script>")],
                    chart: Some(String::from("data:image/svg+xml;base64,AAAA")),
                },
            ],
            links: Some(vec![]),
            category_chart: None,
        }
    }

    #[test]
    fn missing_title_gets_placeholder() {
        let sections = page().render_sections();
        assert!(sections.contains("No title found"));
        assert!(sections.contains("No words to chart for this section."));
    }

    #[test]
    fn section_items_are_escaped() {
        let sections = page().render_sections();
        assert!(sections.contains("One &lt;script&gt;"));
        assert!(!sections.contains("One <script>"));
        assert!(sections.contains("data:image/svg+xml;base64,AAAA"));
    }

    #[test]
    fn links_section_reflects_selection() {
        let mut ctx = page();
        assert!(ctx.render_links().contains("None found."));
        ctx.links = None;
        assert!(ctx.render_links().is_empty());
        ctx.links = Some(vec![String::from("https://a.example/\"x\"")]);
        let links = ctx.render_links();
        assert!(links.contains("https://a.example/&quot;x&quot;"));
    }

    #[test]
    fn category_placeholder_when_nothing_analyzed() {
        assert!(page().render_category().contains("No words to categorize."));
    }
}
