//! HTML fragments for trend entries.
//!
//! Trust boundary: `raw_response` is written by our own ingestion job, so the
//! markdown converter's output is embedded as-is without sanitising. Plain-text
//! fields around it (slot label, timestamp) are still escaped. Revisit this if
//! entries ever come from anywhere else.

use crate::date_window::DateWindow;
use crate::models::Entry;
use html_escape::encode_text;
use pulldown_cmark::{html, Options, Parser};

pub const NO_DATA_HTML: &str =
    r#"<div class="notice notice-empty">この日のデータはありません。</div>"#;

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

pub fn render_entry(entry: &Entry) -> String {
    format!(
        r#"<article class="entry">
  <header class="entry-header">
    <span class="slot">{label}</span>
    <time class="fetched-at">{fetched_at}</time>
  </header>
  <div class="markdown-body">
{body}  </div>
</article>
"#,
        label = encode_text(entry.slot.label()),
        fetched_at = encode_text(&entry.fetched_at),
        body = render_markdown(&entry.raw_response),
    )
}

pub fn render_entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return NO_DATA_HTML.to_string();
    }

    entries.iter().map(render_entry).collect()
}

pub fn render_out_of_range(window: &DateWindow) -> String {
    format!(
        r#"<div class="notice notice-warning">指定された日付は範囲外です。{min} 〜 {max} の日付を選択してください。</div>"#,
        min = encode_text(&window.min_date),
        max = encode_text(&window.max_date),
    )
}
