use log::{error, warn};
use rocket::form::{Contextual, Form};
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use crate::db::DbPool;
use crate::forms::{self, PostForm};
use crate::models::post::Post;
use crate::render;

/// Outcome of a form submission: redirect on success, re-render with
/// field errors on invalid input, 500 when the store rejects the write.
#[derive(Responder)]
pub enum FormOutcome {
    Redirect(Redirect),
    Rerender(Template),
    Failed(Status),
}

// ── Create ─────────────────────────────────────────────

#[get("/new-post")]
pub fn new_post() -> Template {
    render::page(
        "make-post",
        json!({
            "is_edit": false,
            "values": forms::empty_values(),
            "errors": forms::no_errors(),
            "page_type": "make-post",
        }),
    )
}

#[post("/new-post", data = "<form>")]
pub fn create_post(pool: &State<DbPool>, form: Form<Contextual<'_, PostForm>>) -> FormOutcome {
    match form.value {
        Some(ref fields) => match Post::create(pool, &fields.to_new_post()) {
            Ok(_) => FormOutcome::Redirect(Redirect::to("/")),
            Err(e) => {
                error!("Failed to create post: {}", e);
                FormOutcome::Failed(Status::InternalServerError)
            }
        },
        None => FormOutcome::Rerender(render::page(
            "make-post",
            json!({
                "is_edit": false,
                "values": forms::submitted_values(&form.context),
                "errors": forms::submitted_errors(&form.context),
                "page_type": "make-post",
            }),
        )),
    }
}

// ── Edit ───────────────────────────────────────────────

#[get("/edit_post/<id>")]
pub fn edit_post(pool: &State<DbPool>, id: i64) -> Option<Template> {
    let post = Post::find_by_id(pool, id)?;

    Some(render::page(
        "make-post",
        json!({
            "is_edit": true,
            "post_id": id,
            "values": {
                "title": post.title,
                "subtitle": post.subtitle,
                "author": post.author,
                "img_url": post.img_url,
                "body": post.body,
            },
            "errors": forms::no_errors(),
            "page_type": "make-post",
        }),
    ))
}

#[post("/edit_post/<id>", data = "<form>")]
pub fn update_post(
    pool: &State<DbPool>,
    id: i64,
    form: Form<Contextual<'_, PostForm>>,
) -> FormOutcome {
    match form.value {
        Some(ref fields) => match Post::update(pool, id, &fields.to_new_post()) {
            Ok(()) => FormOutcome::Redirect(Redirect::to(format!("/post/{}", id))),
            Err(e) => {
                error!("Failed to update post {}: {}", id, e);
                FormOutcome::Failed(Status::InternalServerError)
            }
        },
        None => FormOutcome::Rerender(render::page(
            "make-post",
            json!({
                "is_edit": true,
                "post_id": id,
                "values": forms::submitted_values(&form.context),
                "errors": forms::submitted_errors(&form.context),
                "page_type": "make-post",
            }),
        )),
    }
}

// ── Delete ─────────────────────────────────────────────

// Deliberately POST-only: deleting through GET would put a mutating side
// effect behind a safe verb.
#[post("/delete/<id>")]
pub fn delete_post(pool: &State<DbPool>, id: i64) -> Redirect {
    if let Err(e) = Post::delete(pool, id) {
        warn!("Failed to delete post {}: {}", id, e);
    }
    Redirect::to("/")
}

pub fn routes() -> Vec<rocket::Route> {
    routes![new_post, create_post, edit_post, update_post, delete_post]
}
