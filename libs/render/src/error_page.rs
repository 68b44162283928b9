use async_trait::async_trait;

use crate::{escape_html, get_template_file, render_includes, Render};

pub struct ErrorPage {
    pub msg: String,
}

impl ErrorPage {
    pub fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[async_trait]
impl Render for ErrorPage {
    async fn render(&self) -> String {
        let mut ctx = get_template_file("error_page").await.unwrap();
        // msg arrives from the query string, never trust it
        ctx = ctx.replace("<%= msg %>", &escape_html(&self.msg));
        render_includes(ctx).await
    }
}
