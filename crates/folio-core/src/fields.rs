use std::fmt;

/// The eight profile sections exposed as REPL variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// The person's name, verbatim.
    Name,
    /// Name, label and bio, plus social handles.
    About,
    /// Skills with star ratings.
    Skills,
    /// Work history.
    Experience,
    /// Talks, from the `publications` section.
    ConferenceTalks,
    /// Open-source work, from the `projects` section.
    OpenSourceContributions,
    Education,
    Certifications,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Name,
        FieldKind::About,
        FieldKind::Skills,
        FieldKind::Experience,
        FieldKind::ConferenceTalks,
        FieldKind::OpenSourceContributions,
        FieldKind::Education,
        FieldKind::Certifications,
    ];

    /// The variable name shown at the prompt.
    pub fn var_name(self) -> &'static str {
        match self {
            FieldKind::Name => "NAME",
            FieldKind::About => "ABOUT",
            FieldKind::Skills => "SKILLS",
            FieldKind::Experience => "EXPERIENCE",
            FieldKind::ConferenceTalks => "CONFERENCE_TALKS",
            FieldKind::OpenSourceContributions => "OPEN_SOURCE_CONTRIBUTIONS",
            FieldKind::Education => "EDUCATION",
            FieldKind::Certifications => "CERTIFICATIONS",
        }
    }

    /// Parse a user-typed variable name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_uppercase();
        FieldKind::ALL.into_iter().find(|f| f.var_name() == name)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.var_name())
    }
}
