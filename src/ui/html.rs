//! HTML rendering of the panel for the DOM surface.

use std::fmt::Write as _;

use super::panel::PanelView;

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
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

fn disabled(enabled: bool, busy: bool) -> &'static str {
    if enabled && !busy {
        ""
    } else {
        " disabled"
    }
}

impl PanelView {
    /// Render the panel as an HTML fragment. Every text value is escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<section class=\"nitroso-panel\" data-step=\"{}\">",
            self.step
        );
        let _ = write!(html, "<h2>{}</h2>", escape(self.title));
        let _ = write!(html, "<p class=\"equation\">{}</p>", escape(self.equation));
        let _ = write!(html, "<p class=\"body\">{}</p>", escape(self.body));

        html.push_str("<table class=\"properties\">");
        for row in &self.rows {
            let _ = write!(
                html,
                "<tr><th>{}</th><td>{}</td></tr>",
                escape(row.label),
                escape(&row.value)
            );
        }
        html.push_str("</table>");

        html.push_str("<nav>");
        let _ = write!(
            html,
            "<button data-action=\"previous\"{}>Previous</button>",
            disabled(self.prev_enabled, self.busy)
        );
        let _ = write!(
            html,
            "<span class=\"indicator\">{}</span>",
            escape(&self.indicator)
        );
        let _ = write!(
            html,
            "<button data-action=\"next\"{}>Next</button>",
            disabled(self.next_enabled, self.busy)
        );
        html.push_str("</nav></section>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::Step;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"R₂N–N=O" & 'x'</b>"#),
            "&lt;b&gt;&quot;R₂N–N=O&quot; &amp; &#39;x&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn first_step_disables_previous() {
        let html = PanelView::project(Step::FIRST).to_html();
        assert!(html.contains("<button data-action=\"previous\" disabled>"));
        assert!(html.contains("<button data-action=\"next\">"));
        assert!(html.contains("Step 1 of 4"));
    }

    #[test]
    fn busy_disables_both_buttons() {
        let html = PanelView::project(Step::new(1).unwrap_or_default())
            .with_busy(true)
            .to_html();
        assert!(html.contains("<button data-action=\"previous\" disabled>"));
        assert!(html.contains("<button data-action=\"next\" disabled>"));
    }

    #[test]
    fn values_are_escaped() {
        let mut view = PanelView::project(Step::LAST);
        view.rows[0].value = "<script>".into();
        let html = view.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
