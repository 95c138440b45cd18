//! Figure export.
//!
//! Writes the finished figure either as raw JSON or as a standalone HTML
//! page that loads plotly.js from a CDN, embeds the figure, and plays the
//! animation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LorenzResult;
use crate::figure::Figure;

/// Serialize a figure to a JSON string.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json(figure: &Figure) -> LorenzResult<String> {
    Ok(serde_json::to_string(figure)?)
}

/// Write a figure to `path` as JSON.
///
/// # Errors
///
/// Returns error if serialization or file I/O fails.
pub fn write_json<P: AsRef<Path>>(figure: &Figure, path: P) -> LorenzResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, figure)?;
    writer.flush()?;
    Ok(())
}

/// Write a figure to `path` as a standalone HTML page.
///
/// # Errors
///
/// Returns error if serialization or file I/O fails.
pub fn write_html<P: AsRef<Path>>(figure: &Figure, path: P) -> LorenzResult<()> {
    let html = render_html(figure)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render the standalone HTML page for a figure.
///
/// # Errors
///
/// Returns error if figure serialization fails.
pub fn render_html(figure: &Figure) -> LorenzResult<String> {
    let json = to_json(figure)?;
    Ok(HTML_TEMPLATE.replace(FIGURE_PLACEHOLDER, &json))
}

/// Placeholder the figure JSON is spliced into.
const FIGURE_PLACEHOLDER: &str = "__FIGURE_JSON__";

/// Standalone page: plotly.js from CDN, the embedded figure, autoplay.
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Lorenz attractor</title>
    <script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
    <style>
        html, body { margin: 0; height: 100%; }
        #plot { width: 100%; height: 100%; }
    </style>
</head>
<body>
    <div id="plot"></div>
    <script>
        const figure = __FIGURE_JSON__;
        const el = document.getElementById('plot');
        Plotly.newPlot(el, figure.data, figure.layout).then(() => {
            if (figure.frames && figure.frames.length > 0) {
                Plotly.addFrames(el, figure.frames);
                Plotly.animate(el, null, {
                    frame: { duration: 30, redraw: true },
                    transition: { duration: 0 },
                });
            }
        });
    </script>
</body>
</html>"#;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::LorenzConfig;
    use crate::pipeline::build_figure;

    fn small_figure() -> Figure {
        let config = LorenzConfig::builder().steps(10).stride(5).build();
        build_figure(&config).unwrap()
    }

    #[test]
    fn test_to_json_contains_contract_keys() {
        let json = to_json(&small_figure()).unwrap();
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"data\""));
        assert!(json.contains("\"frames\""));
        assert!(json.contains("\"scatter3d\""));
        assert!(json.contains("\"autorange\":false"));
        assert!(json.contains("\"title\":\"Lorenz attractor\""));
    }

    #[test]
    fn test_render_html_embeds_figure() {
        let html = render_html(&small_figure()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("cdn.plot.ly"));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("\"scatter3d\""));
        assert!(!html.contains(FIGURE_PLACEHOLDER));
    }

    #[test]
    fn test_write_json_roundtrip() {
        let dir = std::env::temp_dir().join("lorenzviz-test-json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("figure.json");

        let figure = small_figure();
        write_json(&figure, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: Figure = serde_json::from_str(&content).unwrap();
        assert_eq!(back, figure);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_html_creates_file() {
        let dir = std::env::temp_dir().join("lorenzviz-test-html");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("figure.html");

        write_html(&small_figure(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Plotly.addFrames"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
