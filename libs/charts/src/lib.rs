//! Self-contained SVG bar charts, base64-encoded for inline `<img>` tags.

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 90.0;
const Y_TICKS: usize = 4;

pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, usize)>,
}

impl BarChart {
    /// Draws the chart as a standalone SVG document. An empty bar list still
    /// renders the frame and axis titles, so the output is always valid
    /// markup.
    pub fn svg(&self) -> String {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_h;
        let max = self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let scale_max = max.max(1) as f64;

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">",
            w = WIDTH,
            h = HEIGHT
        );
        svg.push_str(&format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>",
            WIDTH, HEIGHT
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"32\" text-anchor=\"middle\" font-size=\"22\">{}</text>",
            WIDTH / 2.0,
            escape_xml(&self.title)
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"16\">{}</text>",
            WIDTH / 2.0,
            HEIGHT - 24.0,
            escape_xml(&self.x_label)
        ));
        svg.push_str(&format!(
            "<text x=\"24\" y=\"{y}\" text-anchor=\"middle\" font-size=\"16\" transform=\"rotate(-90 24 {y})\">{label}</text>",
            y = MARGIN_TOP + plot_h / 2.0,
            label = escape_xml(&self.y_label)
        ));

        // axes
        svg.push_str(&format!(
            "<line x1=\"{x}\" y1=\"{top}\" x2=\"{x}\" y2=\"{bottom}\" stroke=\"#333333\"/>",
            x = MARGIN_LEFT,
            top = MARGIN_TOP,
            bottom = baseline
        ));
        svg.push_str(&format!(
            "<line x1=\"{left}\" y1=\"{y}\" x2=\"{right}\" y2=\"{y}\" stroke=\"#333333\"/>",
            left = MARGIN_LEFT,
            right = MARGIN_LEFT + plot_w,
            y = baseline
        ));

        for tick in 0..=Y_TICKS {
            let value = max * tick / Y_TICKS;
            let y = baseline - plot_h * tick as f64 / Y_TICKS as f64;
            svg.push_str(&format!(
                "<line x1=\"{x1}\" y1=\"{y}\" x2=\"{x2}\" y2=\"{y}\" stroke=\"#cccccc\"/>",
                x1 = MARGIN_LEFT - 6.0,
                x2 = MARGIN_LEFT,
                y = y
            ));
            svg.push_str(&format!(
                "<text x=\"{x}\" y=\"{y}\" text-anchor=\"end\" font-size=\"12\">{value}</text>",
                x = MARGIN_LEFT - 10.0,
                y = y + 4.0,
                value = value
            ));
        }

        if !self.bars.is_empty() {
            let slot = plot_w / self.bars.len() as f64;
            let bar_w = slot * 0.6;
            for (i, (label, count)) in self.bars.iter().enumerate() {
                let bar_h = plot_h * *count as f64 / scale_max;
                let x = MARGIN_LEFT + slot * i as f64 + slot * 0.2;
                let y = baseline - bar_h;
                svg.push_str(&format!(
                    "<rect class=\"bar\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" fill=\"#4472a8\"/>",
                    x = x,
                    y = y,
                    w = bar_w,
                    h = bar_h
                ));
                svg.push_str(&format!(
                    "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"12\">{count}</text>",
                    x = x + bar_w / 2.0,
                    y = y - 6.0,
                    count = count
                ));
                svg.push_str(&format!(
                    "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"12\">{label}</text>",
                    x = x + bar_w / 2.0,
                    y = baseline + 18.0,
                    label = escape_xml(label)
                ));
            }
        }

        svg.push_str("</svg>");
        svg
    }

    /// The chart as a `data:` URI, ready for an `<img src>` attribute.
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", base64::encode(self.svg()))
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
