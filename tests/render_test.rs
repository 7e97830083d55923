//! Tests for gallery renderers

use rstest::{fixture, rstest};

use evochain::cli::render::{render_html, render_json, render_stages_text, render_text};
use evochain::domain::palette::{hex_to_rgb, type_color, type_color_or_fallback, FALLBACK_COLOR};
use evochain::domain::{flatten, EvolutionGallery, EvolutionNode, SpeciesCard};

fn card(name: &str, types: &[&str], artwork: Option<&str>) -> SpeciesCard {
    SpeciesCard {
        name: name.to_string(),
        artwork_url: artwork.map(str::to_string),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

#[fixture]
fn gallery() -> EvolutionGallery {
    colored::control::set_override(false);
    EvolutionGallery {
        query: "eevee".to_string(),
        stages: vec![
            vec![card("eevee", &["normal"], Some("https://img/eevee.png"))],
            vec![
                card("vaporeon", &["water"], Some("https://img/vaporeon.png")),
                card("jolteon", &["electric"], None),
                card("flareon", &["fire"], Some("https://img/flareon.png")),
            ],
        ],
    }
}

// ============================================================
// Text
// ============================================================

#[rstest]
fn given_gallery_when_rendering_text_then_lists_stages_with_arrows(gallery: EvolutionGallery) {
    let text = render_text(&gallery);

    assert!(text.contains("Stage 1"));
    assert!(text.contains("Stage 2"));
    assert!(!text.contains("Stage 3"));
    assert_eq!(text.matches('↓').count(), 1);
    assert!(text.contains("Vaporeon"));
    assert!(text.contains("https://img/flareon.png"));
    assert!(text.contains(" electric "));
}

#[test]
fn given_stages_when_rendering_stage_lines_then_one_line_per_stage() {
    let chain = EvolutionNode::with_children(
        "poliwag",
        vec![EvolutionNode::with_children(
            "poliwhirl",
            vec![
                EvolutionNode::leaf("poliwrath"),
                EvolutionNode::leaf("politoed"),
            ],
        )],
    );

    let text = render_stages_text(&flatten(&chain));

    assert_eq!(text, "Poliwag\n↓\nPoliwhirl\n↓\nPoliwrath  Politoed");
}

// ============================================================
// HTML
// ============================================================

#[rstest]
fn given_gallery_when_rendering_html_then_one_group_per_stage_and_card_per_species(
    gallery: EvolutionGallery,
) {
    let html = render_html(&gallery).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches(r#"<div class="stage">"#).count(), 2);
    assert_eq!(html.matches(r#"<div class="card""#).count(), 4);
    assert_eq!(html.matches(r#"<div class="arrow">"#).count(), 1);
    assert_eq!(html.matches("<img ").count(), 3, "jolteon has no artwork");
    assert!(html.contains(r#"<span class="type" style="background-color: #6890F0">water</span>"#));
    assert!(html.contains("<title>Evolution chain: Eevee</title>"));
}

#[test]
fn given_markup_in_names_when_rendering_html_then_escapes_it() {
    let gallery = EvolutionGallery {
        query: "x".to_string(),
        stages: vec![vec![card(
            "<script>",
            &["bird&"],
            Some(r#"https://img/"onload=".png"#),
        )]],
    };

    let html = render_html(&gallery).unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains(">bird&amp;</span>"));
    assert!(!html.contains(r#""onload"#));
    assert!(html.contains("&quot;onload"));
}

// ============================================================
// JSON
// ============================================================

#[rstest]
fn given_gallery_when_rendering_json_then_keeps_stage_structure(gallery: EvolutionGallery) {
    let json = render_json(&gallery).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["query"], "eevee");
    assert_eq!(value["stages"].as_array().unwrap().len(), 2);
    assert_eq!(value["stages"][1][2]["name"], "flareon");
    assert_eq!(value["stages"][1][1]["artwork_url"], serde_json::Value::Null);
}

// ============================================================
// Palette
// ============================================================

#[rstest]
#[case("fire", Some("#F08030"))]
#[case("WATER", Some("#6890F0"))]
#[case("stellar", None)]
fn given_category_when_looking_up_color_then_returns_table_value(
    #[case] category: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(type_color(category), expected);
}

#[test]
fn given_unknown_category_when_falling_back_then_uses_neutral_color() {
    assert_eq!(type_color_or_fallback("shadow"), FALLBACK_COLOR);
    assert_eq!(hex_to_rgb(FALLBACK_COLOR), Some((0x68, 0xA0, 0x90)));
    assert_eq!(hex_to_rgb("F08030"), None);
}
