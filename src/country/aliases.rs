//! Curated colloquial spellings accepted in addition to the display names.
//!
//! Keys are already in normalized form ([`super::normalize::normalize`]).

/// Built-in alias table: normalized spelling → ISO code.
pub static BUILT_IN: &[(&str, &str)] = &[
    ("usa", "US"),
    ("u s a", "US"),
    ("united states", "US"),
    ("vereinigte staaten", "US"),
    ("vereinigte staaten von amerika", "US"),
    ("america", "US"),
    ("amerika", "US"),
    ("uk", "GB"),
    ("u k", "GB"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("grossbritannien", "GB"),
    // "Großbritannien" after ß folding
    ("gro britannien", "GB"),
    // tolerated, even though England is only part of it
    ("england", "GB"),
    ("south korea", "KR"),
    ("sudkorea", "KR"),
    ("north korea", "KP"),
    ("nordkorea", "KP"),
    ("russia", "RU"),
    ("russland", "RU"),
    ("czechia", "CZ"),
    ("tschechien", "CZ"),
    ("the netherlands", "NL"),
    ("niederlande", "NL"),
    ("holland", "NL"),
    ("ivory coast", "CI"),
    ("cote d ivoire", "CI"),
    ("vatican", "VA"),
    ("vatikan", "VA"),
    ("cape verde", "CV"),
    ("kap verde", "CV"),
    ("u a e", "AE"),
    ("uae", "AE"),
    ("vereinigte arabische emirate", "AE"),
    ("united arab emirates", "AE"),
    ("dr congo", "CD"),
    ("demokratische republik kongo", "CD"),
    ("republic of the congo", "CG"),
    ("kongo", "CG"),
    ("laos", "LA"),
    ("myanmar", "MM"),
    ("burma", "MM"),
    ("timor leste", "TL"),
    ("osttimor", "TL"),
];
