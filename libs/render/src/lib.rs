use std::io;

use async_trait::async_trait;
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use tokio::fs;

pub mod error_page;
pub mod home_page;
pub mod report_page;

#[async_trait]
pub trait Render {
    async fn render(&self) -> String;
}

pub fn parse_includes(include_str: &str) -> String {
    let included_file = include_str
        .strip_prefix("<%= include \"")
        .unwrap()
        .strip_suffix("\" %>")
        .unwrap();
    included_file.to_string()
}

async fn process_included_file(file: String) -> String {
    match file.as_ref() {
        "styles" => get_template_file("styles").await.unwrap(),
        "analyze_form" => get_template_file("analyze_form").await.unwrap(),
        "footer" => get_template_file("footer").await.unwrap(),
        _ => String::with_capacity(0),
    }
}

pub async fn render_includes(ctx: String) -> String {
    let mut lines = Vec::new();
    for line in ctx.lines() {
        let line = line.trim();
        if line.starts_with("<%= include") {
            lines.push(process_included_file(parse_includes(line)).await);
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join(" ")
}

/// Page content comes straight from fetched markup and query strings, so
/// everything interpolated into a template goes through here first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub async fn get_template_file(requested_file: &str) -> Result<String, io::Error> {
    let file_path = get_template_location(requested_file);
    if let Ok(filestring) = fs::read_to_string(&file_path).await {
        Ok(filestring)
    } else {
        eprintln!("Could not find {}", requested_file);
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Could not find {}", requested_file),
        ))
    }
}

#[cfg(debug_assertions)]
fn get_template_location(requested_file: &str) -> String {
    format!("templates/{}.html", requested_file)
}

#[cfg(not(debug_assertions))]
fn get_template_location(requested_file: &str) -> String {
    let project_dir = ProjectDirs::from("", "", "pagelens").unwrap();
    let mut data_dir = project_dir.data_dir().to_owned();
    data_dir.push(format!("templates/{}.html", requested_file));
    data_dir.to_string_lossy().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_include_lines() {
        assert_eq!(parse_includes(r#"<%= include "styles" %>"#), "styles");
        assert_eq!(parse_includes(r#"<%= include "footer" %>"#), "footer");
    }

    #[test]
    fn escapes_markup_characters() {
        let escaped = escape_html(r#"<img src="x" onerror='a&b'>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert_eq!(
            escaped,
            "&lt;img src=&quot;x&quot; onerror=&#39;a&amp;b&#39;&gt;"
        );
    }
}
