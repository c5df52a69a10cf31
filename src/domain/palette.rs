//! Deterministic color/icon identities for packages.
//!
//! Each distinct package key gets the next slot of two fixed cycling
//! palettes in first-request order. The lists are part of the output
//! contract: reordering them changes every rendered report.

use std::collections::HashMap;

use colored::Color;
use tracing::trace;

/// Package colors in assignment order.
pub const COLORS: [Color; 15] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

/// Package icons in assignment order (duplicates are intentional slots).
pub const ICONS: [&str; 216] = [
    "🐒", "🐱", "🦊", "🐶", "🐻", "🐼", "🐲", "🐠", "🐞", "🦋", "🐔",
    "🦄", "🐬", "🐯", "🦁", "🐷", "🐸", "🐰", "🐻‍❄️", "🐨", "🦝",
    "🦫", "🦘", "🦙", "🦌", "🦓", "🦍", "🐵", "🦦", "🦥", "🦧", "🐺",
    "🦄", "🐐", "🐑", "🦙", "🦒", "🐪", "🐫", "🐳", "🐬", "🐟", "🐠",
    "🐡", "🦈", "🐙", "🦑", "🦐", "🦞", "🦀", "🐚", "🦭", "🐝", "🐞",
    "🦋", "🐌", "🐛", "🦟", "🦗", "🕷️", "🦂", "🦠", "🐜", "🦫", "🍏",
    "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🫐", "🍒", "🍑",
    "🥭", "🍍", "🥥", "🥝", "🍅", "🥗", "🥑", "🥒", "🍔", "🍟", "🍕",
    "🌭", "🥪", "🌮", "🌯", "🥨", "🥚", "🍳", "🥐", "🥞", "🧇", "🍝",
    "🍣", "🍜", "🍲", "🍛", "🍱", "🥟", "🦞", "🍤", "🍙", "🍘", "🍢",
    "🥫", "🍰", "🎂", "🧁", "🍮", "🍭", "🍬", "🍫", "🍿", "🍩", "🍪",
    "🌰", "🥜", "🍯", "☕", "🍺", "🍻", "🥂", "🍷", "🍸", "🍹", "🧃",
    "🧊", "🍶", "🥤", "🧋", "💊", "💉", "⚗️", "🔬", "🧬", "🩺", "🩹",
    "🩸", "🏥", "🧪", "🐭", "🔮", "🧿", "✨", "🌟", "💫", "☄️", "🌈",
    "🪄", "🎱", "🛡️", "⚔️", "🔧", "🔨", "🔩", "⚙️", "⏰", "⌛",
    "🧰", "🔬", "🎨", "✏️", "📐", "🌏", "🌙", "⭐", "☄️", "🔥", "🌋",
    "🌈", "🌊", "🌴", "🌵", "🌲", "🌳", "🍄", "🌻", "🌷", "🌱", "🍃",
    "🍂", "🍁", "🌿", "☘️", "🍀", "😀", "😃", "😄", "😁", "😆", "😅",
    "🤣", "😂", "🙂", "🙃", "😉", "😊", "😇", "🥰", "😍", "🤩", "😘",
    "😗", "😚", "😙", "😋", "😛", "😜", "🤪", "😝", "🤑",
];

/// Visual identity of one package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageStyle {
    pub color: Color,
    pub icon: String,
}

/// Group and artifact of a coordinate (`group:artifact`), or the whole name
/// when it has fewer than two segments.
pub fn package_key(name: &str) -> &str {
    let mut parts = name.splitn(3, ':');
    match (parts.next(), parts.next()) {
        (Some(group), Some(artifact)) => &name[..group.len() + 1 + artifact.len()],
        _ => name,
    }
}

/// Style for the `index`-th distinct package.
///
/// Icons repeat after a full pass through `ICONS`; later passes carry the pass
/// number as a suffix (`🐒1`, `🐒2`, ...).
pub fn style_at(index: usize) -> PackageStyle {
    let color = COLORS[index % COLORS.len()];
    let round = index / ICONS.len();
    let mut icon = ICONS[index % ICONS.len()].to_string();
    if round > 0 {
        icon.push_str(&round.to_string());
    }
    PackageStyle { color, icon }
}

/// Per-project package-to-style mapping.
///
/// Create a fresh palette for each project so assignments never bleed
/// across projects.
#[derive(Debug, Default)]
pub struct Palette {
    mappings: HashMap<String, PackageStyle>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for `key`, assigning the next slot on first request.
    pub fn style_for(&mut self, key: &str) -> &PackageStyle {
        let next = self.mappings.len();
        self.mappings.entry(key.to_string()).or_insert_with(|| {
            trace!("assigning slot {} to {}", next, key);
            style_at(next)
        })
    }

    /// Number of distinct packages assigned so far.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("com.acme:lib-a:jar:1.0:compile", "com.acme:lib-a")]
    #[case("com.acme:lib-a", "com.acme:lib-a")]
    #[case("com.acme:", "com.acme:")]
    #[case("standalone", "standalone")]
    fn given_coordinate_when_extracting_key_then_keeps_group_and_artifact(
        #[case] name: &str,
        #[case] key: &str,
    ) {
        assert_eq!(package_key(name), key);
    }

    #[test]
    fn given_index_past_icon_cycle_when_styling_then_appends_round() {
        assert_eq!(style_at(0).icon, "🐒");
        assert_eq!(style_at(ICONS.len() - 1).icon, ICONS[ICONS.len() - 1]);
        assert_eq!(style_at(ICONS.len()).icon, "🐒1");
        assert_eq!(style_at(2 * ICONS.len() + 1).icon, "🐱2");
    }

    #[test]
    fn given_index_past_color_cycle_when_styling_then_wraps_colors() {
        assert_eq!(style_at(0).color, Color::Red);
        assert_eq!(style_at(7).color, Color::BrightBlack);
        assert_eq!(style_at(COLORS.len()).color, Color::Red);
        assert_eq!(style_at(COLORS.len() + 1).color, Color::Green);
    }

    #[test]
    fn given_repeated_key_when_requesting_style_then_mapping_is_stable() {
        let mut palette = Palette::new();

        let first = palette.style_for("g:a").clone();
        let second = palette.style_for("g:b").clone();
        let again = palette.style_for("g:a").clone();

        assert_eq!(first, style_at(0));
        assert_eq!(second, style_at(1));
        assert_eq!(again, first);
        assert_eq!(palette.len(), 2);
    }
}
