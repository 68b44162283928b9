use async_trait::async_trait;

use crate::{get_template_file, render_includes, Render};

pub struct HomePage {}

#[async_trait]
impl Render for HomePage {
    async fn render(&self) -> String {
        let ctx = get_template_file("home").await.unwrap();
        render_includes(ctx).await
    }
}
