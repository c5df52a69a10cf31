//! Tests for package palette assignment

use colored::Color;
use mvntree::domain::palette::{COLORS, ICONS};
use mvntree::domain::{package_key, style_at, Palette};

fn assign(keys: &[&str]) -> Vec<(Color, String)> {
    let mut palette = Palette::new();
    keys.iter()
        .map(|k| {
            let style = palette.style_for(k);
            (style.color, style.icon.clone())
        })
        .collect()
}

#[test]
fn given_same_first_seen_order_when_assigning_then_results_are_identical() {
    let keys = ["org.slf4j:slf4j-api", "junit:junit", "org.slf4j:slf4j-api", "io.netty:netty-all"];

    assert_eq!(assign(&keys), assign(&keys));
}

#[test]
fn given_four_distinct_packages_when_assigning_then_each_gets_unique_style() {
    let names = [
        "com.acme:app:jar:1.0",
        "com.acme:lib-a:jar:1.0:compile",
        "com.acme:lib-b:jar:1.0:compile",
        "com.other:lib-c:jar:2.0:compile",
    ];
    let keys: Vec<&str> = names.iter().map(|n| package_key(n)).collect();

    let styles = assign(&keys);

    for (i, style) in styles.iter().enumerate() {
        assert_eq!(style.0, COLORS[i]);
        assert_eq!(style.1, ICONS[i]);
    }
}

#[test]
fn given_versions_of_one_package_when_assigning_then_share_style() {
    let mut palette = Palette::new();

    let v1 = palette.style_for(package_key("g:a:jar:1.0:compile")).clone();
    let v2 = palette.style_for(package_key("g:a:jar:2.0:test")).clone();

    assert_eq!(v1, v2);
    assert_eq!(palette.len(), 1);
}

#[test]
fn given_fresh_palette_when_assigning_then_starts_from_first_slot() {
    let mut first = Palette::new();
    first.style_for("a:a");
    first.style_for("b:b");

    let mut second = Palette::new();
    let style = second.style_for("b:b").clone();

    assert_eq!(style, style_at(0));
}

#[test]
fn given_more_packages_than_icons_when_assigning_then_suffixes_cycle_count() {
    let keys: Vec<String> = (0..=ICONS.len()).map(|i| format!("g{}:a", i)).collect();
    let mut palette = Palette::new();

    let last = keys
        .iter()
        .map(|k| palette.style_for(k).clone())
        .last()
        .unwrap();

    assert_eq!(last.icon, format!("{}1", ICONS[0]));
    assert_eq!(last.color, COLORS[ICONS.len() % COLORS.len()]);
}
