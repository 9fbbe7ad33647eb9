//! Refinement requests — revise an existing letter along one axis instead of starting over.

/// What the user asked the model to change about an existing letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementKind {
    StrengthenOpener,
    AchievementFocused,
    MoreCompelling,
    OptimizeLength,
    Shorten,
}

impl RefinementKind {
    /// Parses the client identifier. Unknown identifiers yield `None`.
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim() {
            "strengthen-opener" => Some(RefinementKind::StrengthenOpener),
            "achievement-focused" => Some(RefinementKind::AchievementFocused),
            "make-more-compelling" | "make-more" => Some(RefinementKind::MoreCompelling),
            "optimize-length" => Some(RefinementKind::OptimizeLength),
            "shorten-letter" => Some(RefinementKind::Shorten),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            RefinementKind::StrengthenOpener => "strengthen-opener",
            RefinementKind::AchievementFocused => "achievement-focused",
            RefinementKind::MoreCompelling => "make-more-compelling",
            RefinementKind::OptimizeLength => "optimize-length",
            RefinementKind::Shorten => "shorten-letter",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            RefinementKind::StrengthenOpener => "Rewrite the opening paragraph with a sharper hook that shows immediate understanding of the company and role. Keep the rest of the letter intact.",
            RefinementKind::AchievementFocused => "Rework the body so every paragraph leads with a concrete, quantified achievement (numbers, percentages, timeframes).",
            RefinementKind::MoreCompelling => "Make the letter more compelling: stronger action verbs, more specific examples, and a more confident call to action.",
            RefinementKind::OptimizeLength => "Adjust the letter to roughly 300-600 words, cutting repetition and expanding thin sections.",
            RefinementKind::Shorten => "Shorten the letter by about a third while keeping the strongest examples and the closing call to action.",
        }
    }
}

/// A usable refinement request: a known kind plus a non-blank letter to revise.
#[derive(Debug, Clone, Copy)]
pub struct Refinement<'a> {
    pub kind: RefinementKind,
    pub existing_letter: &'a str,
}

impl<'a> Refinement<'a> {
    /// `None` unless both a recognised kind and a non-blank letter were supplied.
    pub fn from_request(kind: Option<&str>, existing_letter: Option<&'a str>) -> Option<Self> {
        let kind = RefinementKind::parse(kind?)?;
        let existing_letter = existing_letter.filter(|l| !l.trim().is_empty())?;
        Some(Self {
            kind,
            existing_letter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!(
            RefinementKind::parse("strengthen-opener"),
            Some(RefinementKind::StrengthenOpener)
        );
        assert_eq!(
            RefinementKind::parse("shorten-letter"),
            Some(RefinementKind::Shorten)
        );
        assert_eq!(RefinementKind::parse("rewrite-everything"), None);
    }

    #[test]
    fn test_make_more_is_an_alias() {
        assert_eq!(
            RefinementKind::parse("make-more"),
            RefinementKind::parse("make-more-compelling")
        );
    }

    #[test]
    fn test_ids_round_trip() {
        for kind in [
            RefinementKind::StrengthenOpener,
            RefinementKind::AchievementFocused,
            RefinementKind::MoreCompelling,
            RefinementKind::OptimizeLength,
            RefinementKind::Shorten,
        ] {
            assert_eq!(RefinementKind::parse(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_refinement_requires_kind_and_letter() {
        assert!(Refinement::from_request(Some("optimize-length"), Some("Dear team")).is_some());
        assert!(Refinement::from_request(None, Some("Dear team")).is_none());
        assert!(Refinement::from_request(Some("optimize-length"), None).is_none());
        assert!(Refinement::from_request(Some("optimize-length"), Some("  ")).is_none());
        assert!(Refinement::from_request(Some("unknown"), Some("Dear team")).is_none());
    }
}
