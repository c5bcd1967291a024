use crate::date_window::DateWindow;
use crate::models::Entry;
use crate::render::render_entries;
use html_escape::encode_double_quoted_attribute;

pub struct PageContext<'a> {
    pub date: &'a str,
    pub entries: &'a [Entry],
    pub window: &'a DateWindow,
    pub base_path: &'a str,
}

pub fn render_page(page: &PageContext<'_>) -> String {
    // Entries go in last so placeholder-like text inside markdown stays untouched.
    INDEX_HTML
        .replace("{{DATE}}", &encode_double_quoted_attribute(page.date))
        .replace("{{MIN_DATE}}", &encode_double_quoted_attribute(&page.window.min_date))
        .replace("{{MAX_DATE}}", &encode_double_quoted_attribute(&page.window.max_date))
        .replace("{{HOME}}", &encode_double_quoted_attribute(home_path(page.base_path)))
        .replace("{{BASE}}", &encode_double_quoted_attribute(page.base_path))
        .replace("{{ENTRIES}}", &render_entries(page.entries))
}

fn home_path(base_path: &str) -> &str {
    if base_path.is_empty() {
        "/"
    } else {
        base_path
    }
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Trends</title>
  <script src="https://unpkg.com/htmx.org@2.0.4" defer></script>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #25231f;
      --muted: #77716a;
      --accent: #2f4858;
      --warn: #b4532a;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Hiragino Sans", "Noto Sans JP", system-ui, sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .picker {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    .picker input[type="date"] {
      font: inherit;
      padding: 8px 12px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    .picker button {
      font: inherit;
      padding: 8px 18px;
      border: none;
      border-radius: 10px;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
    }

    .picker .range {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .entry {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
      margin-bottom: 18px;
    }

    .entry-header {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      color: var(--muted);
      font-size: 0.9rem;
      margin-bottom: 12px;
    }

    .entry-header .slot {
      font-weight: 600;
      color: var(--accent);
    }

    .markdown-body table {
      border-collapse: collapse;
    }

    .markdown-body th,
    .markdown-body td {
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 4px 8px;
    }

    .notice {
      padding: 18px;
      border-radius: 14px;
      background: var(--card);
      color: var(--muted);
    }

    .notice-warning {
      color: var(--warn);
    }

    .htmx-request #entries {
      opacity: 0.5;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Trends</h1>
    </header>
    <form class="picker" method="get" action="{{HOME}}"
          hx-get="{{BASE}}/api/entry" hx-target="#entries" hx-swap="innerHTML">
      <input id="date" type="date" name="date" value="{{DATE}}" min="{{MIN_DATE}}" max="{{MAX_DATE}}" required />
      <button type="submit">表示</button>
      <span class="range">{{MIN_DATE}} 〜 {{MAX_DATE}}</span>
    </form>
    <section id="entries" aria-live="polite">
{{ENTRIES}}
    </section>
  </main>
</body>
</html>
"##;
