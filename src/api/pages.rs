// HTML pages rendered with askama templates (see templates/)

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;

use crate::loader::PageData;
use crate::model::{CacheEntryDetail, Chapter, DepsMap, OpHead};
use crate::routing::Route;

pub struct ChapterLink<'a> {
    pub chapter: &'a Chapter,
    pub href: String,
    pub current: bool,
}

pub struct OpLink<'a> {
    pub op: &'a OpHead,
    pub href: String,
    pub current: bool,
}

pub struct DepsView<'a> {
    pub label: &'static str,
    pub deps: &'a DepsMap,
}

pub struct EntryView<'a> {
    pub key: &'a str,
    pub entry: &'a CacheEntryDetail,
    pub fresh: bool,
    pub maps: Vec<DepsView<'a>>,
}

#[derive(Template)]
#[template(path = "op.html")]
pub struct OpPageTemplate<'a> {
    pub title: String,
    pub heading: String,
    pub chapters: Vec<ChapterLink<'a>>,
    pub chapter: &'a Chapter,
    pub ops: Vec<OpLink<'a>>,
    pub entries: Vec<EntryView<'a>>,
    pub stale_entries: usize,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub reason: &'a str,
    pub message: &'a str,
    pub detail: &'a str,
}

impl<'a> OpPageTemplate<'a> {
    pub fn new(data: &'a PageData) -> Self {
        let chapter = &data.chapter_details.head;

        let chapters = data
            .chapters
            .iter()
            .map(|c| ChapterLink {
                chapter: c,
                href: Route::Chapter { ch: c.id }.path(),
                current: c.id == data.ch,
            })
            .collect();

        let ops = data
            .chapter_details
            .ops
            .iter()
            .map(|op| OpLink {
                op,
                href: Route::Op {
                    ch: data.ch,
                    op: op.id,
                }
                .path(),
                current: op.id == data.op,
            })
            .collect();

        let entries: Vec<EntryView<'a>> = data
            .cache_state
            .iter()
            .map(|keyed| EntryView {
                key: &keyed.key,
                entry: &keyed.entry,
                fresh: keyed.entry.is_fully_fresh(),
                maps: vec![
                    DepsView {
                        label: "World state",
                        deps: &keyed.entry.world_state,
                    },
                    DepsView {
                        label: "Direct world state",
                        deps: &keyed.entry.direct_world_state,
                    },
                    DepsView {
                        label: "Dependencies",
                        deps: &keyed.entry.deps_state,
                    },
                ],
            })
            .collect();
        let stale_entries = entries.iter().filter(|e| !e.fresh).count();

        let heading = match data.chapter_details.op(data.op) {
            Some(op) => format!("Op {}: {}", op.id, op.desc),
            None => format!("Op {}", data.op),
        };

        Self {
            title: format!("Chapter {} / op {} - Cache analyzer", data.ch, data.op),
            heading,
            chapters,
            chapter,
            ops,
            entries,
            stale_entries,
        }
    }
}

pub fn render_op_page(data: &PageData) -> Result<Html<String>, askama::Error> {
    OpPageTemplate::new(data).render().map(Html)
}

pub fn render_error_page(status: StatusCode, message: &str, detail: &str) -> Html<String> {
    let template = ErrorTemplate {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error"),
        message,
        detail,
    };
    Html(template.render().unwrap_or_else(|e| {
        format!("{} {}: {}", status.as_u16(), message, e)
    }))
}
