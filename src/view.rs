//! Plain-text rendering of the cookbook page.
//!
//! Everything here reads a `Workspace` and writes text; nothing is stored.

use crate::form::{Draft, DraftField};
use crate::model::Recipe;
use crate::workspace::Workspace;
use std::fmt::Write;

pub const LOADING: &str = "Loading recipes…";
pub const NO_RESULTS: &str = "No recipes found. Try clearing search.";
pub const PLACEHOLDER: &str = "Select a recipe to view details.";
pub const SEARCH_PROMPT: &str = "Search by title, cuisine, or ingredients";

/// The whole page: header, list panel, then detail and form panel
pub fn render_page(ws: &Workspace) -> String {
    let mut out = String::new();
    out.push_str(&render_header(ws.api_url()));
    out.push('\n');
    out.push_str(&render_list_panel(ws));
    out.push('\n');
    out.push_str(&render_detail_panel(ws.selected()));
    out.push('\n');
    out.push_str(&render_form(ws.draft(), ws.is_saving()));
    out
}

pub fn render_header(api_url: &str) -> String {
    format!("Pantry Pages\n# Cookbook workspace\nAPI: {}\n", api_url)
}

/// Search line, status messages and one card per visible recipe
pub fn render_list_panel(ws: &Workspace) -> String {
    let mut out = String::new();
    if ws.query().is_empty() {
        let _ = writeln!(out, "Search: ({})", SEARCH_PROMPT);
    } else {
        let _ = writeln!(out, "Search: {}", ws.query());
    }

    if ws.is_loading() {
        let _ = writeln!(out, "{}", LOADING);
    }
    if let Some(error) = ws.visible_error() {
        let _ = writeln!(out, "{}", error);
    }
    if ws.shows_no_results() {
        let _ = writeln!(out, "{}", NO_RESULTS);
    }

    let active = ws.selected().map(|r| &r.id);
    for recipe in ws.filtered() {
        out.push('\n');
        out.push_str(&render_card(recipe, active == Some(&recipe.id)));
    }
    out
}

/// Card: meta line, title, cuisine, tag pills and the select action
pub fn render_card(recipe: &Recipe, active: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", recipe.id, meta_line(recipe));
    let _ = writeln!(out, "  {}", recipe.title);
    if let Some(cuisine) = recipe.cuisine.as_deref() {
        let _ = writeln!(out, "  {}", cuisine);
    }
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "  {}", pills(&recipe.tags));
    }
    let _ = writeln!(
        out,
        "  <{}>",
        if active { "Viewing" } else { "View details" }
    );
    out
}

pub fn render_detail_panel(selected: Option<&Recipe>) -> String {
    let mut out = String::from("## Recipe detail\n");
    match selected {
        Some(recipe) => out.push_str(&render_detail(recipe)),
        None => {
            let _ = writeln!(out, "{}", PLACEHOLDER);
        }
    }
    out
}

pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", meta_line(recipe));
    let _ = writeln!(out, "### {}", recipe.title);
    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "{}", pills(&recipe.tags));
    }
    let _ = writeln!(out, "#### Ingredients");
    for item in &recipe.ingredients {
        let _ = writeln!(out, "- {}", item);
    }
    let _ = writeln!(out, "#### Instructions");
    let _ = writeln!(out, "{}", recipe.instructions.as_deref().unwrap_or_default());
    out
}

/// Form fields with their current values (or placeholders) and the submit control
pub fn render_form(draft: &Draft, saving: bool) -> String {
    let mut out = String::from("## Add a recipe\n");
    for field in DraftField::ALL {
        let value = draft.get(field);
        let shown = if value.is_empty() {
            format!("({})", field.placeholder())
        } else {
            value.to_string()
        };
        let _ = writeln!(
            out,
            "{}{}{}: {}",
            field.label(),
            if field.is_list() { " (comma separated)" } else { "" },
            if field.is_required() { " *" } else { "" },
            shown
        );
    }
    if saving {
        let _ = writeln!(out, "[Saving…] (disabled)");
    } else {
        let _ = writeln!(out, "[Add recipe]");
    }
    out
}

fn meta_line(recipe: &Recipe) -> String {
    format!(
        "{} | {} | {} servings",
        recipe.time.as_deref().unwrap_or_default(),
        recipe.difficulty.as_deref().unwrap_or_default(),
        recipe.servings.as_deref().unwrap_or_default()
    )
}

fn pills(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("({})", tag))
        .collect::<Vec<_>>()
        .join(" ")
}
