//! HTML page rendering

use crate::urls::static_url;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Render the wall page with one tile per folder
///
/// Initial image sources come from the snapshot; the page script keeps them
/// fresh by polling `/latest-images`.
pub fn render_index(static_root: &Path, snapshot: &BTreeMap<String, PathBuf>) -> String {
    let mut tiles = String::new();

    for (name, path) in snapshot {
        let name = escape_html(name);
        let src = static_url(static_root, path)
            .map(|url| escape_html(&url))
            .unwrap_or_default();

        let _ = writeln!(
            tiles,
            "    <figure><img id=\"img-{name}\" src=\"{src}\" alt=\"{name}\"><figcaption>{name}</figcaption></figure>"
        );
    }

    INDEX_TEMPLATE.replace("{{tiles}}", tiles.trim_end())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
