use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use crate::db::DbPool;
use crate::models::post::Post;
use crate::render;

// ── Landing page ───────────────────────────────────────

#[get("/")]
pub fn index(pool: &State<DbPool>) -> Template {
    let posts = Post::list(pool);

    render::page(
        "index",
        json!({
            "all_posts": posts,
            "page_type": "index",
        }),
    )
}

// ── Individual post ────────────────────────────────────

#[get("/post/<id>")]
pub fn show_post(pool: &State<DbPool>, id: i64) -> Option<Template> {
    let post = Post::find_by_id(pool, id)?;

    Some(render::page(
        "post",
        json!({
            "post": post,
            "page_type": "post",
        }),
    ))
}

// ── Static pages ───────────────────────────────────────

#[get("/about")]
pub fn about() -> Template {
    render::page("about", json!({ "page_type": "about" }))
}

#[get("/contact")]
pub fn contact() -> Template {
    render::page("contact", json!({ "page_type": "contact" }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, show_post, about, contact]
}
