use rocket_dyn_templates::Template;
use serde_json::{json, Value};

pub const SITE_NAME: &str = "Inkpost";

/// Merge the shared site chrome into the page context and hand the pair to
/// the template engine. Every page template extends `base` and expects a
/// `site` object for the head, nav, and footer.
pub fn page(name: &'static str, mut context: Value) -> Template {
    if let Value::Object(ref mut map) = context {
        map.insert(
            "site".to_string(),
            json!({
                "name": SITE_NAME,
                "nav": [
                    { "label": "Home", "href": "/" },
                    { "label": "About", "href": "/about" },
                    { "label": "Contact", "href": "/contact" },
                    { "label": "New Post", "href": "/new-post" },
                ],
                "year": chrono::Local::now().format("%Y").to_string(),
            }),
        );
    }
    Template::render(name, context)
}
