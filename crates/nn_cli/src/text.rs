//! Plain-text rendering of page views for the terminal.

use nn_web::render::article::ArticleView;
use nn_web::render::feeds::FeedsView;
use nn_web::render::{Frame, ListingView, Notice};
use std::fmt::Write;

fn notice(out: &mut String, notice: &Notice) {
    let _ = writeln!(out, "{}", notice.message);
    if let Some(link) = &notice.link {
        let _ = writeln!(out, "→ {} ({})", link.label, link.href);
    }
}

fn frame(out: &mut String, frame: &Frame) {
    if frame.loading {
        let _ = writeln!(out, "Loading...");
    }
    if let Some(error) = &frame.error {
        notice(out, error);
    }
    if let Some(empty) = &frame.empty {
        notice(out, empty);
    }
}

fn heading(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{}\n{}", heading, "=".repeat(heading.chars().count()));
}

pub fn listing(view: &ListingView) -> String {
    let mut out = String::new();
    heading(&mut out, &view.heading);
    frame(&mut out, &view.frame);
    if let Some(table) = &view.table {
        for row in &table.rows {
            let _ = writeln!(
                out,
                "{}\n  {}: {}\n  Date Processed: {}\n  {}",
                row.title, table.detail_heading, row.detail, row.date, row.href
            );
        }
    }
    out
}

pub fn feeds(view: &FeedsView) -> String {
    let mut out = String::new();
    heading(&mut out, view.heading);
    frame(&mut out, &view.frame);
    for feed in &view.feeds {
        let _ = writeln!(out, "- {} ({})", feed.label, feed.href);
    }
    out
}

pub fn article(view: &ArticleView) -> String {
    let mut out = String::new();
    heading(&mut out, &view.heading);
    frame(&mut out, &view.frame);
    if let Some(article) = &view.article {
        let _ = writeln!(out, "Author: {}", article.author);
        let _ = writeln!(out, "Source Link: {}", article.source_link);
        let _ = writeln!(out, "PDF URL: {}", article.pdf_url);
        let _ = writeln!(out, "\n{}", article.content);
    }
    out
}
