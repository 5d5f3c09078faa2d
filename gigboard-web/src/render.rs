//! HTML page rendering
//!
//! Pages are assembled from embedded templates with `{{PLACEHOLDER}}`
//! substitution. Every substituted value passes through [`escape`] at the
//! call site unless it is markup this module produced itself.

use axum::response::Html;

const LAYOUT_HTML: &str = include_str!("ui/layout.html");

/// Escape text for inclusion in HTML body or attribute position
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Render a full page: layout shell + optional notice banner + content markup
pub fn render_page(title: &str, notice: Option<&str>, content: &str) -> Html<String> {
    let notice_markup = match notice {
        Some(text) => format!("<div class=\"notice\">{}</div>", escape(text)),
        None => String::new(),
    };

    let page = LAYOUT_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{NOTICE}}", &notice_markup)
        .replace("{{CONTENT}}", content);

    Html(page)
}

/// `<option>` markup for a select, marking the current value selected
pub fn select_options(values: &[&str], current: &str) -> String {
    let mut out = String::new();
    for value in values {
        if *value == current {
            out.push_str(&format!(
                "<option value=\"{v}\" selected>{v}</option>",
                v = escape(value)
            ));
        } else {
            out.push_str(&format!("<option value=\"{v}\">{v}</option>", v = escape(value)));
        }
    }
    out
}

/// `<ul class="errors">` markup for a validation error list, empty string
/// when there is nothing to report
pub fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut out = String::from("<ul class=\"errors\">");
    for error in errors {
        out.push_str(&format!("<li>{}</li>", escape(error)));
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape("<b>\"Fish & Chips\"</b>"),
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("O'Malley's"), "O&#39;Malley&#39;s");
    }

    #[test]
    fn test_render_page_substitutes_all_slots() {
        let page = render_page("Venues", Some("Saved!"), "<p>body</p>");
        assert!(page.0.contains("<title>Venues"));
        assert!(page.0.contains("class=\"notice\">Saved!"));
        assert!(page.0.contains("<p>body</p>"));
        assert!(!page.0.contains("{{"));
    }

    #[test]
    fn test_render_page_without_notice() {
        let page = render_page("Venues", None, "");
        assert!(!page.0.contains("class=\"notice\""));
    }

    #[test]
    fn test_select_options_marks_current() {
        let markup = select_options(&["ID", "WA"], "WA");
        assert!(markup.contains("<option value=\"ID\">ID</option>"));
        assert!(markup.contains("<option value=\"WA\" selected>WA</option>"));
    }

    #[test]
    fn test_error_list_empty_and_filled() {
        assert_eq!(error_list(&[]), "");
        let markup = error_list(&["Name is required".to_string()]);
        assert!(markup.contains("<li>Name is required</li>"));
    }
}
