use serde::{Deserialize, Serialize};

/// A person's profile as returned by the portfolio API.
///
/// The schema is owned by the remote service and this model is coupled to
/// it. Every top-level section is required: a response missing one fails
/// deserialization rather than rendering a partial profile. Keys this
/// program never reads are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDocument {
    pub basics: Basics,
    pub skills: Vec<Skill>,
    pub work: Vec<WorkEntry>,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub education: Vec<SchoolEntry>,
    pub certificates: Vec<Certificate>,
}

/// Identity block: who the person is, one-line label, bio, social handles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub summary: String,
    pub profiles: Vec<SocialProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialProfile {
    pub network: String,
    pub username: String,
    pub url: String,
}

/// A named skill with a 0–5 star rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub rating: u32,
}

/// One position in the work history. `name` is the organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub name: String,
    pub position: String,
    pub website: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    /// Bullet points for the role. The API omits the key for roles without
    /// any, so an absent list reads the same as an empty one.
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Conference talks live under `publications` in the remote schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub name: String,
    pub url: String,
    pub summary: String,
}

/// Open-source contributions live under `projects`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub github_url: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolEntry {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
}
