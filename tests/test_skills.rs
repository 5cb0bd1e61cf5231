use starfall::display::{icon_label, skill_names};
use starfall::skills::*;

// ── known lookups ─────────────────────────────────────────────────────────────

#[test]
fn react_detail_is_complete() {
    let detail = get_skill_details("React");
    assert_eq!(detail.name, "React");
    assert_eq!(
        detail.quick_start,
        [
            "Install Node.js",
            "npx create-react-app my-app",
            "cd my-app",
            "npm start",
        ]
    );
    assert!(detail.definition.contains("JavaScript library"));
}

#[test]
fn every_catalog_entry_has_a_real_detail_page() {
    let default = default_detail();
    for category in &SKILL_CATEGORIES {
        for entry in &category.skills {
            let detail = get_skill_details(entry.name);
            assert_ne!(
                detail.definition, default.definition,
                "{} fell through to the default record",
                entry.name
            );
        }
    }
}

#[test]
fn quick_start_always_has_four_ordered_steps() {
    for category in &SKILL_CATEGORIES {
        for entry in &category.skills {
            let detail = get_skill_details(entry.name);
            assert_eq!(detail.quick_start.len(), 4);
            assert!(detail.quick_start.iter().all(|s| !s.is_empty()));
        }
    }
}

// ── fallback ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_skill_degrades_to_default_with_name_substituted() {
    let detail = get_skill_details("NoSuchTech");
    let default = default_detail();
    assert_eq!(detail.name, "NoSuchTech");
    assert_eq!(detail.utilities, default.utilities);
    assert_eq!(detail.quick_start, default.quick_start);
    assert_eq!(detail.definition, default.definition);
}

#[test]
fn empty_name_still_resolves() {
    let detail = get_skill_details("");
    assert_eq!(detail.name, "");
    assert_eq!(detail.utilities, default_detail().utilities);
}

// ── catalog shape ─────────────────────────────────────────────────────────────

#[test]
fn catalog_has_six_categories_of_four() {
    assert_eq!(SKILL_CATEGORIES.len(), 6);
    for category in &SKILL_CATEGORIES {
        assert_eq!(category.skills.len(), 4);
    }
}

#[test]
fn proficiency_levels_are_percentages() {
    for category in &SKILL_CATEGORIES {
        for entry in &category.skills {
            assert!(entry.level <= 100);
        }
    }
}

#[test]
fn skill_names_flatten_in_catalog_order() {
    let names = skill_names();
    assert_eq!(names.len(), 24);
    assert_eq!(names[0], "React");
    assert_eq!(names[23], "Linux");
}

// ── icon variants ─────────────────────────────────────────────────────────────

#[test]
fn font_class_icons_resolve_to_their_brand_token() {
    let label = icon_label(&SkillIcon::FontGlyphClass("devicon-react-original colored"));
    assert_eq!(label, "react");
}

#[test]
fn raw_markup_icons_resolve_to_a_placeholder_glyph() {
    let label = icon_label(&SkillIcon::RawMarkup("<svg viewBox=\"0 0 24 24\"/>"));
    assert_eq!(label, "◆");
}

#[test]
fn both_icon_variants_appear_in_the_catalog() {
    let mut raw = 0;
    let mut font = 0;
    for category in &SKILL_CATEGORIES {
        for entry in &category.skills {
            match entry.icon {
                SkillIcon::RawMarkup(_) => raw += 1,
                SkillIcon::FontGlyphClass(_) => font += 1,
            }
        }
    }
    assert!(raw > 0);
    assert!(font > 0);
    assert_eq!(raw + font, 24);
}
