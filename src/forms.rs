use rocket::form::{self, Context};
use serde_json::{json, Value};
use url::Url;

use crate::models::post::NewPost;

const FIELDS: [&str; 5] = ["title", "subtitle", "author", "img_url", "body"];

/// The blog post form. All five fields are required; the image URL must
/// additionally parse as a well-formed URL. Values pass through untouched on
/// success — escaping is the template engine's job.
#[derive(Debug, FromForm)]
pub struct PostForm {
    #[field(validate = len(1..))]
    pub title: String,
    #[field(validate = len(1..))]
    pub subtitle: String,
    #[field(validate = len(1..))]
    pub author: String,
    #[field(validate = len(1..))]
    #[field(validate = valid_url())]
    pub img_url: String,
    #[field(validate = len(1..))]
    pub body: String,
}

impl PostForm {
    pub fn to_new_post(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            body: self.body.clone(),
            author: self.author.clone(),
            img_url: self.img_url.clone(),
        }
    }
}

/// Emptiness is reported by the `len` validator; only check URL shape here.
fn valid_url<'v>(value: &str) -> form::Result<'v, ()> {
    if value.is_empty() {
        return Ok(());
    }
    if Url::parse(value).is_err() {
        return Err(form::Error::validation("must be a well-formed URL").into());
    }
    Ok(())
}

/// Field values for an untouched form.
pub fn empty_values() -> Value {
    let mut map = serde_json::Map::new();
    for field in FIELDS {
        map.insert(field.to_string(), json!(""));
    }
    Value::Object(map)
}

/// Per-field error lists, all empty. Templates iterate these unconditionally.
pub fn no_errors() -> Value {
    let mut map = serde_json::Map::new();
    for field in FIELDS {
        map.insert(field.to_string(), json!([]));
    }
    Value::Object(map)
}

/// Values as submitted, for re-rendering a rejected form.
pub fn submitted_values(ctx: &Context<'_>) -> Value {
    let mut map = serde_json::Map::new();
    for field in FIELDS {
        map.insert(field.to_string(), json!(ctx.field_value(field).unwrap_or("")));
    }
    Value::Object(map)
}

/// Validation messages keyed by field name.
pub fn submitted_errors(ctx: &Context<'_>) -> Value {
    let mut map = serde_json::Map::new();
    for field in FIELDS {
        let messages: Vec<String> = ctx.field_errors(field).map(|e| e.to_string()).collect();
        map.insert(field.to_string(), json!(messages));
    }
    Value::Object(map)
}
