//! Standalone HTML export for plots received in the terminal.
//!
//! Each page loads Plotly from its CDN and draws the figure with the same
//! `Plotly.newPlot(el, data, layout, { responsive: true })` call the browser
//! client makes.

use std::fs;
use std::path::{Path, PathBuf};

use plotchat::PlotPayload;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub struct PlotExporter {
    dir: PathBuf,
}

impl PlotExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `plot` to a fresh HTML file under the export directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn write(&self, plot: &PlotPayload) -> Result<PathBuf, std::io::Error> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("plot-{}.html", uuid::Uuid::new_v4().simple()));
        fs::write(&path, render_page(plot))?;
        Ok(path)
    }
}

/// Full HTML document for one figure.
pub fn render_page(plot: &PlotPayload) -> String {
    let title = html_escape(plot.title().unwrap_or("plot"));
    let data = script_safe_json(&plot.data_value());
    let layout = script_safe_json(&plot.layout_value());
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="plot" style="width:100%;height:400px;"></div>
<script>
Plotly.newPlot("plot", {data}, {layout}, {{ responsive: true }});
</script>
</body>
</html>
"#
    )
}

/// JSON text that cannot terminate the surrounding `<script>` element.
fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
#[path = "plot_file_test.rs"]
mod tests;
