//! Fitzpatrick skin tone variants
//!
//! Tone 0 is the default (yellow) form; tones 1-5 append the matching
//! Fitzpatrick modifier (U+1F3FB..=U+1F3FF) after the first scalar of emoji
//! that accept one.

/// Highest tone index
pub const MAX_TONE: u8 = 5;

/// Skin tone selectable with Up/Down in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SkinTone {
    #[default]
    None,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    const ALL: [Self; 6] = [
        Self::None,
        Self::Light,
        Self::MediumLight,
        Self::Medium,
        Self::MediumDark,
        Self::Dark,
    ];

    /// Tone for `index`, clamped to `0..=5`
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        let clamped = if index > MAX_TONE { MAX_TONE } else { index };
        Self::ALL[clamped as usize]
    }

    /// Numeric index of this tone
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Next lighter-to-darker tone, saturating at `Dark`
    #[must_use]
    pub const fn darker(self) -> Self {
        Self::from_index(self.index().saturating_add(1))
    }

    /// Previous tone, saturating at `None`
    #[must_use]
    pub const fn lighter(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    /// Modifier character for this tone, if any
    #[must_use]
    pub const fn modifier(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Light => Some('\u{1F3FB}'),
            Self::MediumLight => Some('\u{1F3FC}'),
            Self::Medium => Some('\u{1F3FD}'),
            Self::MediumDark => Some('\u{1F3FE}'),
            Self::Dark => Some('\u{1F3FF}'),
        }
    }
}

// Emoji_Modifier_Base ranges from Unicode emoji-data.txt
const MODIFIER_BASES: &[(u32, u32)] = &[
    (0x261D, 0x261D),
    (0x26F9, 0x26F9),
    (0x270A, 0x270D),
    (0x1F385, 0x1F385),
    (0x1F3C2, 0x1F3C4),
    (0x1F3C7, 0x1F3C7),
    (0x1F3CA, 0x1F3CC),
    (0x1F442, 0x1F443),
    (0x1F446, 0x1F450),
    (0x1F466, 0x1F478),
    (0x1F47C, 0x1F47C),
    (0x1F481, 0x1F483),
    (0x1F485, 0x1F487),
    (0x1F48F, 0x1F48F),
    (0x1F491, 0x1F491),
    (0x1F4AA, 0x1F4AA),
    (0x1F574, 0x1F575),
    (0x1F57A, 0x1F57A),
    (0x1F590, 0x1F590),
    (0x1F595, 0x1F596),
    (0x1F645, 0x1F647),
    (0x1F64B, 0x1F64F),
    (0x1F6A3, 0x1F6A3),
    (0x1F6B4, 0x1F6B6),
    (0x1F6C0, 0x1F6C0),
    (0x1F6CC, 0x1F6CC),
    (0x1F90C, 0x1F90C),
    (0x1F90F, 0x1F90F),
    (0x1F918, 0x1F91F),
    (0x1F926, 0x1F926),
    (0x1F930, 0x1F939),
    (0x1F93C, 0x1F93E),
    (0x1F977, 0x1F977),
    (0x1F9B5, 0x1F9B6),
    (0x1F9B8, 0x1F9B9),
    (0x1F9BB, 0x1F9BB),
    (0x1F9CD, 0x1F9CF),
    (0x1F9D1, 0x1F9DD),
    (0x1FAC3, 0x1FAC5),
    (0x1FAF0, 0x1FAF8),
];

/// Whether `c` accepts a skin tone modifier
#[must_use]
pub fn is_modifier_base(c: char) -> bool {
    let cp = u32::from(c);
    MODIFIER_BASES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

fn is_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Render `emoji` with `tone` applied
///
/// Only the modifier attached to the leading scalar is replaced, so
/// re-rendering with a different tone never stacks modifiers and toned
/// people later in a ZWJ sequence keep their own tones. Emoji whose leading
/// scalar is not a modifier base get no modifier regardless of `tone`.
#[must_use]
pub fn apply(emoji: &str, tone: SkinTone) -> String {
    let mut chars = emoji.chars().peekable();
    let Some(first) = chars.next() else {
        return String::new();
    };
    chars.next_if(|c| is_modifier(*c));

    let mut out = String::with_capacity(emoji.len() + 4);
    out.push(first);
    if is_modifier_base(first)
        && let Some(modifier) = tone.modifier()
    {
        out.push(modifier);
    }
    out.extend(chars);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(SkinTone::from_index(0), SkinTone::None);
        assert_eq!(SkinTone::from_index(3), SkinTone::Medium);
        assert_eq!(SkinTone::from_index(5), SkinTone::Dark);
        assert_eq!(SkinTone::from_index(42), SkinTone::Dark);
    }

    #[test]
    fn test_darker_and_lighter_saturate() {
        assert_eq!(SkinTone::Dark.darker(), SkinTone::Dark);
        assert_eq!(SkinTone::None.lighter(), SkinTone::None);
        assert_eq!(SkinTone::Light.darker(), SkinTone::MediumLight);
        assert_eq!(SkinTone::Medium.lighter(), SkinTone::MediumLight);
    }

    #[test]
    fn test_apply_to_modifier_base() {
        assert_eq!(apply("👍", SkinTone::None), "👍");
        assert_eq!(apply("👍", SkinTone::Light), "👍\u{1F3FB}");
        assert_eq!(apply("👍", SkinTone::Dark), "👍\u{1F3FF}");
    }

    #[test]
    fn test_apply_replaces_existing_modifier() {
        let medium = apply("👍", SkinTone::Medium);
        assert_eq!(apply(&medium, SkinTone::Light), "👍\u{1F3FB}");
        assert_eq!(apply(&medium, SkinTone::None), "👍");
    }

    #[test]
    fn test_apply_ignores_non_bases() {
        assert_eq!(apply("🐱", SkinTone::Dark), "🐱");
        assert_eq!(apply("🍕", SkinTone::Medium), "🍕");
    }

    #[test]
    fn test_apply_keeps_tones_of_later_people() {
        // People holding hands, light + dark
        let emoji = "\u{1F9D1}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}";
        assert_eq!(
            apply(emoji, SkinTone::Medium),
            "\u{1F9D1}\u{1F3FD}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}"
        );
        assert_eq!(
            apply(emoji, SkinTone::None),
            "\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}"
        );
    }

    #[test]
    fn test_apply_empty() {
        assert_eq!(apply("", SkinTone::Dark), "");
    }

    #[test]
    fn test_apply_keeps_trailing_sequence() {
        // Woman raising hand: U+1F64B ZWJ U+2640 U+FE0F
        let emoji = "\u{1F64B}\u{200D}\u{2640}\u{FE0F}";
        assert_eq!(
            apply(emoji, SkinTone::MediumDark),
            "\u{1F64B}\u{1F3FE}\u{200D}\u{2640}\u{FE0F}"
        );
    }
}
