//! Stat block rendering
//!
//! Pure functions from a `MonsterDetail` to the HTML fragment shown in the
//! results container. Field values come from the reference API and are
//! inserted as-is; the fragment fully replaces prior result content.

use bestiary_domain::{ArmorClassEntry, MonsterDetail, SpeedProfile};

/// Armor class text: the first entry as `{value} {type}`, or `N/A ` when
/// the sequence is empty (value placeholder plus empty type suffix).
pub fn armor_class_text(armor_class: &[ArmorClassEntry]) -> String {
    match armor_class.first() {
        Some(entry) => format!("{} {}", entry.value, entry.kind),
        None => "N/A ".to_string(),
    }
}

/// Speed line: `Speed: ` followed by a `{Label}: {value} ` fragment for
/// each present movement kind in fixed order (walk, swim, fly, burrow,
/// climb), joined with `| `. An empty profile yields exactly `Speed: `.
pub fn speed_line(speed: &SpeedProfile) -> String {
    let kinds = [
        ("Walking", speed.walk.as_deref()),
        ("Swimming", speed.swim.as_deref()),
        ("Flying", speed.fly.as_deref()),
        ("Burrowing", speed.burrow.as_deref()),
        ("Climbing", speed.climb.as_deref()),
    ];

    let fragments: Vec<String> = kinds
        .iter()
        .filter_map(|(label, rate)| rate.map(|r| format!("{label}: {r} ")))
        .collect();

    format!("Speed: {}", fragments.join("| "))
}

/// Absolute image URL: the API base origin prefixed to the relative path.
pub fn image_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// Full stat block fragment for a detail record.
pub fn monster_markup(detail: &MonsterDetail, api_base: &str) -> String {
    let image_html = match &detail.image {
        Some(path) => format!(
            r#"<img class="monster-image" src="{}" alt="an image depicting the Dungeons and Dragons monster: {}" />"#,
            image_url(api_base, path),
            detail.name
        ),
        None => String::new(),
    };

    let mut html = String::new();
    html.push_str(&format!("<h2>{}</h2>", detail.name));
    html.push_str("<div>");
    html.push_str(&format!("<p><strong>Size:</strong> {}</p>", detail.size));
    html.push_str(&format!(
        "<p><strong>Type:</strong> {}, {}</p>",
        detail.kind, detail.alignment
    ));
    html.push_str(&format!(
        "<p><strong>Armour Class:</strong> {}</p>",
        armor_class_text(&detail.armor_class)
    ));
    html.push_str(&format!(
        "<p><strong>Hit Points:</strong> {}</p>",
        detail.hit_points
    ));
    html.push_str(&format!(
        "<p><strong>Hit Dice:</strong> {}</p>",
        detail.hit_points_roll
    ));
    html.push_str(&format!("<p>{}</p>", speed_line(&detail.speed)));
    html.push_str("</div>");
    html.push_str(&format!(
        r#"<div class="monster-image-container">{image_html}</div>"#
    ));
    html
}
