//! Server-rendered HTML pages.
//!
//! Each page is tagged with the name of the template that produced it. The
//! name travels on the response as a [`RenderedTemplate`] extension and an
//! `x-template` header so callers and tests can tell which page was served.

use std::fmt::Write;

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::models::mood_entry::{CreateMoodEntryForm, MoodEntry};

pub const MAIN_TEMPLATE: &str = "main.html";
pub const CREATE_MOOD_ENTRY_TEMPLATE: &str = "create_mood_entry.html";

pub const TEMPLATE_HEADER: &str = "x-template";

/// Response extension naming the template a page was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedTemplate(pub &'static str);

#[derive(Debug)]
pub struct Page {
    template: &'static str,
    status: StatusCode,
    html: String,
}

impl Page {
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let mut res = (self.status, Html(self.html)).into_response();
        res.headers_mut().insert(
            HeaderName::from_static(TEMPLATE_HEADER),
            HeaderValue::from_static(self.template),
        );
        res.extensions_mut().insert(RenderedTemplate(self.template));
        res
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(template: &'static str, title: &str, body: &str) -> Page {
    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    );
    Page {
        template,
        status: StatusCode::OK,
        html,
    }
}

/// `main.html`: every entry with its derived classification.
pub fn main_page(app_name: &str, entries: &[MoodEntry]) -> Page {
    let mut body = format!("<h1>{}</h1>\n", escape(app_name));
    // Writing to a String cannot fail.
    let _ = writeln!(body, "<p>{} entries</p>", entries.len());
    body.push_str("<a href=\"/create-mood-entry\">Add mood entry</a>\n");

    if entries.is_empty() {
        body.push_str("<p>No mood entries yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>Mood</th><th>Time</th><th>Feelings</th>\
             <th>Mood intensity</th><th>Sadness level</th><th>Happy?</th></tr>\n",
        );
        for e in entries {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&e.mood),
                e.time.format("%Y-%m-%d"),
                escape(&e.feelings),
                e.mood_intensity,
                e.sadness_level,
                if e.is_happy() { "Happy" } else { "Not happy" },
            );
        }
        body.push_str("</table>\n");
    }

    layout(MAIN_TEMPLATE, app_name, &body)
}

/// `create_mood_entry.html`, optionally re-filled after a failed submit.
pub fn create_mood_entry_page(
    app_name: &str,
    form: &CreateMoodEntryForm,
    errors: &[String],
) -> Page {
    let mut body = String::from("<h1>Add New Mood Entry</h1>\n");

    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for err in errors {
            let _ = writeln!(body, "<li>{}</li>", escape(err));
        }
        body.push_str("</ul>\n");
    }

    let _ = write!(
        body,
        "<form method=\"post\" action=\"/create-mood-entry\">\n\
         <label>Mood <input type=\"text\" name=\"mood\" maxlength=\"255\" value=\"{}\"></label>\n\
         <label>Feelings <textarea name=\"feelings\">{}</textarea></label>\n\
         <label>Mood intensity <input type=\"number\" name=\"mood_intensity\" value=\"{}\"></label>\n\
         <label>Sadness level <input type=\"number\" name=\"sadness_level\" value=\"{}\"></label>\n\
         <button type=\"submit\">Add Mood Entry</button>\n\
         </form>\n",
        escape(&form.mood),
        escape(&form.feelings),
        escape(&form.mood_intensity),
        escape(&form.sadness_level),
    );

    layout(
        CREATE_MOOD_ENTRY_TEMPLATE,
        &format!("{app_name} | Add Mood Entry"),
        &body,
    )
}
