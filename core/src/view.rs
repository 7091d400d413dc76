//! Render model for the upload widget.
//!
//! [`ResultView`] is what both the Leptos component and the HTML export
//! display for a held [`FitResult`]. [`render_html`] produces the full
//! widget markup as a string.

use crate::types::{format_coefficient, FitResult};

/// Heading shown above the file picker.
pub const TITLE: &str = "File Uploader";

/// One labelled coefficient line.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
}

impl FieldView {
    /// Text of the paragraph, e.g. `slope is: 2.0`.
    pub fn text(&self) -> String {
        format!("{} is: {}", self.label, self.value)
    }
}

/// Display-ready projection of a [`FitResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub image_src: String,
    pub fields: Vec<FieldView>,
}

impl From<&FitResult> for ResultView {
    fn from(result: &FitResult) -> Self {
        Self {
            image_src: result.image_data_uri(),
            fields: vec![
                FieldView {
                    label: "slope",
                    value: format_coefficient(result.slope),
                },
                FieldView {
                    label: "intercept",
                    value: format_coefficient(result.intercept),
                },
                FieldView {
                    label: "r_squared",
                    value: format_coefficient(result.r_squared),
                },
            ],
        }
    }
}

/// Render the whole widget: heading, file picker, and the result if held.
pub fn render_html(result: Option<&FitResult>) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"file-uploader\">");
    html.push_str(&format!("<h1>{}</h1>", TITLE));
    html.push_str("<input type=\"file\" name=\"file\"/>");

    if let Some(result) = result {
        let view = ResultView::from(result);
        html.push_str("<div class=\"fit-result\">");
        html.push_str(&format!("<img src=\"{}\"/>", escape(&view.image_src)));
        for field in &view.fields {
            html.push_str(&format!("<p>{}</p>", escape(&field.text())));
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

/// Wrap the widget markup in a standalone page.
pub fn render_page(result: Option<&FitResult>) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        TITLE,
        render_html(result)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
