//! Gallery renderers: terminal text, JSON and standalone HTML
//!
//! Every renderer draws one group per stage, one card per species and an
//! arrow between consecutive stages.

use colored::Colorize;
use handlebars::Handlebars;
use itertools::Itertools;
use thiserror::Error;

use crate::domain::palette::{hex_to_rgb, type_color_or_fallback};
use crate::domain::{EvolutionGallery, EvolutionStages, SpeciesCard};

const ARROW: &str = "↓";
const NO_TYPE_COLOR: &str = "#cccccc";

/// `mr-mime` becomes `Mr-Mime`.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .join("-")
}

/// Failures while producing JSON or HTML output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("gallery template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render gallery: {0}")]
    Html(#[from] handlebars::RenderError),

    #[error("serialize gallery: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================
// TEXT
// ============================================================

fn type_badge(category: &str) -> String {
    let label = format!(" {} ", category);
    match hex_to_rgb(type_color_or_fallback(category)) {
        Some((r, g, b)) => label.black().on_truecolor(r, g, b).to_string(),
        None => label,
    }
}

fn card_lines(card: &SpeciesCard) -> Vec<String> {
    let name = display_name(&card.name).bold();
    let badges = card.types.iter().map(|t| type_badge(t)).join(" ");

    let mut lines = vec![if badges.is_empty() {
        format!("  • {}", name)
    } else {
        format!("  • {}  {}", name, badges)
    }];
    if let Some(url) = &card.artwork_url {
        lines.push(format!("    {}", url.dimmed()));
    }
    lines
}

/// Terminal rendering of a full gallery.
pub fn render_text(gallery: &EvolutionGallery) -> String {
    let mut lines = Vec::new();
    for (i, stage) in gallery.stages.iter().enumerate() {
        if i > 0 {
            lines.push(format!("      {}", ARROW.cyan()));
        }
        lines.push(format!("Stage {}", i + 1).cyan().bold().to_string());
        lines.extend(stage.iter().flat_map(card_lines));
    }
    lines.into_iter().map(|line| line + "\n").collect()
}

/// One line per stage, arrows in between.
pub fn render_stages_text(stages: &EvolutionStages) -> String {
    stages
        .iter()
        .map(|stage| stage.iter().map(|name| display_name(name)).join("  "))
        .join(&format!("\n{}\n", ARROW))
}

// ============================================================
// JSON
// ============================================================

pub fn render_json(gallery: &EvolutionGallery) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(gallery)?)
}

// ============================================================
// HTML
// ============================================================

const GALLERY_TEMPLATE_NAME: &str = "gallery";
const GALLERY_TEMPLATE: &str = include_str!("templates/gallery.html.hbs");

/// Standalone HTML page renderer backed by a `handlebars` registry.
pub struct HtmlRenderer {
    handlebars: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();

        handlebars.register_helper("display_name", Box::new(display_name_helper));
        handlebars.register_helper("type_color", Box::new(type_color_helper));
        handlebars.register_helper("card_color", Box::new(card_color_helper));
        handlebars.register_template_string(GALLERY_TEMPLATE_NAME, GALLERY_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    pub fn render(&self, gallery: &EvolutionGallery) -> Result<String, RenderError> {
        let data = serde_json::to_value(gallery)?;
        Ok(self.handlebars.render(GALLERY_TEMPLATE_NAME, &data)?)
    }
}

/// Standalone HTML page for a gallery.
pub fn render_html(gallery: &EvolutionGallery) -> Result<String, RenderError> {
    HtmlRenderer::new()?.render(gallery)
}

// Handlebars helpers
//
// Helper output bypasses template escaping, names are escaped here.

fn display_name_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&handlebars::html_escape(&display_name(param)))?;
    Ok(())
}

fn type_color_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(type_color_or_fallback(param))?;
    Ok(())
}

/// Border colour from the primary category of a card's `types` list.
fn card_color_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let primary = h
        .param(0)
        .and_then(|v| v.value().as_array())
        .and_then(|types| types.first())
        .and_then(|t| t.as_str());
    out.write(primary.map(type_color_or_fallback).unwrap_or(NO_TYPE_COLOR))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_hyphenated_name_when_displaying_then_capitalizes_each_part() {
        assert_eq!(display_name("mr-mime"), "Mr-Mime");
        assert_eq!(display_name("eevee"), "Eevee");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn given_gallery_template_when_registering_then_compiles() {
        assert!(HtmlRenderer::new().is_ok());
    }

    #[test]
    fn given_card_without_types_when_rendering_html_then_uses_neutral_border() {
        let gallery = EvolutionGallery {
            query: "unown".to_string(),
            stages: vec![vec![SpeciesCard {
                name: "unown".to_string(),
                artwork_url: None,
                types: Vec::new(),
            }]],
        };

        let html = render_html(&gallery).unwrap();

        assert!(html.contains(r#"style="border-color: #cccccc""#));
        assert!(!html.contains(r#"<p class="types">"#));
    }
}
