//! HTML rendering of a finished listing.

use std::fmt::Write;

use crate::types::ListingOutput;

/// Renders [`ListingOutput`] into a fixed HTML fragment.
///
/// With `escape_html` off, field values are interpolated verbatim; generated
/// or user-supplied markup then ends up in the page as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlRenderer {
    pub escape_html: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self { escape_html: true }
    }
}

impl HtmlRenderer {
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    pub fn render(&self, listing: &ListingOutput) -> String {
        let text = |s: &str| -> String {
            if self.escape_html {
                escape(s)
            } else {
                s.to_string()
            }
        };

        let mut html = String::new();
        let _ = writeln!(html, "<title>{}</title>", text(&listing.title));
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            text(&listing.meta_description)
        );
        let _ = writeln!(html, "<h1>{}</h1>", text(&listing.headline));
        let _ = writeln!(
            html,
            "<section id=\"description\">\n  <p>\n{}\n  </p>\n</section>",
            text(&listing.full_description)
        );

        html.push_str("<ul id=\"key-features\">\n");
        for feature in &listing.key_features_list {
            let _ = writeln!(html, "  <li>{}</li>", text(feature));
        }
        html.push_str("</ul>\n");

        let _ = writeln!(
            html,
            "<section id=\"neighborhood\">\n  <p>\n  {}\n  </p>\n</section>",
            text(&listing.neighborhood_summary)
        );
        let _ = write!(
            html,
            "<p class=\"call-to-action\">{}</p>",
            text(&listing.call_to_action)
        );

        html
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> ListingOutput {
        ListingOutput {
            title: "T1 Apartment in Lavapies, Madrid".into(),
            meta_description: "1-bedroom apartment for rent in Lavapies".into(),
            headline: "Cozy T1 in Lavapies".into(),
            full_description: "A bright flat.".into(),
            key_features_list: vec![
                "35 sqm of living space".into(),
                "1 bedroom and 1 bathroom".into(),
                "Located in Lavapies, Madrid".into(),
            ],
            neighborhood_summary: "Lively and diverse.".into(),
            call_to_action: "Visit today in Madrid.".into(),
        }
    }

    #[test]
    fn test_render_skeleton() {
        let html = HtmlRenderer::default().render(&listing());

        assert_eq!(
            html,
            "<title>T1 Apartment in Lavapies, Madrid</title>\n\
             <meta name=\"description\" content=\"1-bedroom apartment for rent in Lavapies\">\n\
             <h1>Cozy T1 in Lavapies</h1>\n\
             <section id=\"description\">\n  <p>\nA bright flat.\n  </p>\n</section>\n\
             <ul id=\"key-features\">\n  \
             <li>35 sqm of living space</li>\n  \
             <li>1 bedroom and 1 bathroom</li>\n  \
             <li>Located in Lavapies, Madrid</li>\n\
             </ul>\n\
             <section id=\"neighborhood\">\n  <p>\n  Lively and diverse.\n  </p>\n</section>\n\
             <p class=\"call-to-action\">Visit today in Madrid.</p>"
        );
    }

    #[test]
    fn test_escaping_on_by_default() {
        let mut listing = listing();
        listing.headline = "<script>alert('x')</script>".into();
        listing.meta_description = "Say \"hi\" & bye".into();

        let html = HtmlRenderer::default().render(&listing);

        assert!(html.contains("<h1>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</h1>"));
        assert!(html.contains("content=\"Say &quot;hi&quot; &amp; bye\""));
    }

    #[test]
    fn test_verbatim_when_escaping_disabled() {
        let mut listing = listing();
        listing.headline = "<em>Cozy</em>".into();

        let html = HtmlRenderer::new(false).render(&listing);
        assert!(html.contains("<h1><em>Cozy</em></h1>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = HtmlRenderer::default();
        assert_eq!(renderer.render(&listing()), renderer.render(&listing()));
    }
}
