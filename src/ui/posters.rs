//! Poster artwork for the catalog. The original data ships image identifiers
//! rather than pixels, so the TUI renders each entry as a repeating ASCII
//! motif. The identifier-to-motif mapping is an explicit table; unknown
//! identifiers resolve to a placeholder motif and a warning instead of an
//! error, since a missing poster should never take the catalog down.

use tracing::warn;

/// Motif used when an image identifier has no entry in [`POSTER_ART`].
const PLACEHOLDER_ART: &[&str] = &["?  ?", "  ??"];

/// ASCII textures keyed by the image identifiers used in the seed catalog.
/// Two short rows per motif tile seamlessly at any card size.
const POSTER_ART: &[(&str, &[&str])] = &[
    ("poster_breaking_bad", &["/\\/\\/", "\\/\\/\\"]),
    ("poster_the_wire", &["||--", "--||"]),
    ("poster_peaky_blinders", &["=--=", "--=="]),
    ("poster_narcos", &["$..$", "..$$"]),
    ("poster_true_detective", &["<>><", "><<>"]),
    ("poster_stranger_things", &["^v^v", "v^v^"]),
    ("poster_the_expanse", &["oOo ", " OoO"]),
    ("poster_dark", &["##  ", "  ##"]),
    ("poster_westworld", &["x  x", "  xx"]),
    ("poster_black_mirror", &["[]__", "__[]"]),
    ("poster_attack_on_titan", &["/--/", "--//"]),
    ("poster_death_note", &["+-+-", "-+-+"]),
    ("poster_fullmetal_alchemist", &["*+*+", "+*+*"]),
    ("poster_arcane", &["::''", "''::"]),
    ("poster_avatar_last_airbender", &["~~  ", "  ~~"]),
];

/// Resolve an image identifier to its poster motif. Unknown identifiers fall
/// back to the placeholder and leave a warning in the log.
pub(crate) fn poster_art(image: &str) -> &'static [&'static str] {
    match POSTER_ART.iter().find(|(key, _)| *key == image) {
        Some((_, art)) => art,
        None => {
            warn!(image, "no poster art for image identifier, using placeholder");
            PLACEHOLDER_ART
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::bundled_catalog;

    #[test]
    fn known_identifier_resolves_to_its_motif() {
        assert_eq!(poster_art("poster_dark"), ["##  ", "  ##"]);
    }

    #[test]
    fn unknown_identifier_falls_back_to_placeholder() {
        assert_eq!(poster_art("poster_missing"), PLACEHOLDER_ART);
    }

    #[test]
    fn every_seeded_image_has_a_motif() {
        for movie in bundled_catalog().expect("bundled catalog must parse") {
            assert_ne!(
                poster_art(&movie.image),
                PLACEHOLDER_ART,
                "seeded image {} is missing poster art",
                movie.image
            );
        }
    }
}
