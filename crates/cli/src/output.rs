//! Rendering of starship pages for the terminal

use serde::Serialize;
use shipyard_core::PageView;
use shipyard_domain::Starship;

const NAME_HEADER: &str = "NAME";
const MANUFACTURER_HEADER: &str = "MANUFACTURER";
const MISSING: &str = "-";

#[derive(Serialize)]
struct JsonPage<'a> {
    manufacturer: Option<&'a str>,
    current_page: usize,
    total_pages: usize,
    total_records: usize,
    starships: &'a [Starship],
}

/// Pretty-printed JSON document for one page.
pub fn render_json(
    view: &PageView<Starship>,
    manufacturer: Option<&str>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonPage {
        manufacturer: manufacturer.filter(|m| !m.is_empty()),
        current_page: view.current_page,
        total_pages: view.total_pages,
        total_records: view.total_records,
        starships: &view.items,
    })
}

/// Aligned two-column table followed by a page footer.
pub fn render_table(view: &PageView<Starship>) -> String {
    if view.total_records == 0 {
        return "No starships found.".to_string();
    }

    let rows: Vec<(&str, &str)> = view
        .items
        .iter()
        .map(|ship| {
            (
                ship.name.as_deref().unwrap_or(MISSING),
                ship.manufacturer.as_deref().unwrap_or(MISSING),
            )
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());

    let mut out = format!("{NAME_HEADER:<name_width$}  {MANUFACTURER_HEADER}\n");
    for (name, manufacturer) in rows {
        out.push_str(&format!("{name:<name_width$}  {manufacturer}\n"));
    }
    out.push_str(&footer(view));
    out
}

fn footer(view: &PageView<Starship>) -> String {
    let mut line = format!(
        "page {} of {} ({} starships)",
        view.current_page, view.total_pages, view.total_records
    );
    if view.has_next() {
        line.push_str(&format!(", next: --page {}", view.current_page + 1));
    }
    line
}
