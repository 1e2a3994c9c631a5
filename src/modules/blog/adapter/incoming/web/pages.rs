// src/modules/blog/adapter/incoming/web/pages.rs
//
// Server-side page assembly. The markup is intentionally plain; the data it
// carries (titles, byline, topics, content) is what matters.

use crate::modules::blog::application::ports::outgoing::post_query::{
    PostDetailView, PostSummary,
};

const SITE_TITLE: &str = "Sosyall Philosophy";

pub fn render_home(posts: &[PostSummary]) -> String {
    let mut items = String::new();

    if posts.is_empty() {
        items.push_str("<p class=\"empty\">No posts yet.</p>");
    } else {
        items.push_str("<ul class=\"posts\">");
        for post in posts {
            items.push_str(&format!(
                "<li><a href=\"/posts/{slug}\">{title}</a>{excerpt}\
                 <time datetime=\"{created}\">{created}</time></li>",
                slug = escape(&post.slug),
                title = escape(&post.title),
                excerpt = match &post.excerpt {
                    Some(excerpt) => format!("<p>{}</p>", escape(excerpt)),
                    None => String::new(),
                },
                created = escape(&post.created_at),
            ));
        }
        items.push_str("</ul>");
    }

    page(
        SITE_TITLE,
        &format!("<h1>{SITE_TITLE}</h1>{items}"),
    )
}

pub fn render_post(post: &PostDetailView) -> String {
    let topics = if post.topics.is_empty() {
        "<span class=\"no-topics\">No topics</span>".to_string()
    } else {
        post.topics
            .iter()
            .map(|t| format!("<span class=\"topic\">{}</span>", escape(&t.topic_name)))
            .collect::<Vec<_>>()
            .join(" ")
    };

    page(
        &format!("{} | {SITE_TITLE}", escape(&post.title)),
        &format!(
            "<h1>{title}</h1>\
             <p class=\"byline\">{author} · <time datetime=\"{created}\">{created}</time></p>\
             <div class=\"topics\">{topics}</div>\
             <article style=\"white-space: pre-wrap\">{content}</article>",
            title = escape(&post.title),
            author = escape(post.author_label()),
            created = escape(&post.created_at),
            content = escape(&post.content),
        ),
    )
}

pub fn render_not_found() -> String {
    page(
        &format!("Not found | {SITE_TITLE}"),
        "<h1>404</h1><p>This page could not be found.</p>",
    )
}

pub fn render_internal_error() -> String {
    page(
        &format!("Error | {SITE_TITLE}"),
        "<h1>500</h1><p>Something went wrong. Please try again later.</p>",
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{title}</title></head><body><main>{body}</main></body></html>"
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
