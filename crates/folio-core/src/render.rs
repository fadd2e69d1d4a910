//! Pure formatting of profile sections into display strings.
//!
//! No I/O happens here: every function is a deterministic map from a
//! [`ProfileDocument`] to text, so repeated calls over the same document are
//! byte-identical.

use crate::document::ProfileDocument;
use crate::fields::FieldKind;

/// Placeholder returned for section names with no formatting rule.
pub const WIP: &str = "WIP";

/// Format one profile section.
pub fn format_field(field: FieldKind, doc: &ProfileDocument) -> String {
    match field {
        FieldKind::Name => doc.basics.name.clone(),
        FieldKind::About => about(doc),
        FieldKind::Skills => skills(doc),
        FieldKind::Experience => experience(doc),
        FieldKind::ConferenceTalks => conference_talks(doc),
        FieldKind::OpenSourceContributions => open_source_contributions(doc),
        FieldKind::Education => education(doc),
        FieldKind::Certifications => certifications(doc),
    }
}

/// Format a section by user-typed name. Names outside the known set format
/// as the [`WIP`] placeholder instead of failing.
pub fn format_section(name: &str, doc: &ProfileDocument) -> String {
    match FieldKind::from_name(name) {
        Some(field) => format_field(field, doc),
        None => WIP.to_string(),
    }
}

fn about(doc: &ProfileDocument) -> String {
    let basics = &doc.basics;
    let mut out = format!("{} \n{} \n", basics.name, basics.label);
    out.push_str(&format!("{}\n", basics.summary));
    if !basics.profiles.is_empty() {
        out.push_str("\nSocial Profiles: \n");
        for profile in &basics.profiles {
            out.push_str(&format!(
                "{}: {}\n{} \n\n",
                profile.network, profile.username, profile.url
            ));
        }
    }
    out
}

fn skills(doc: &ProfileDocument) -> String {
    doc.skills
        .iter()
        .map(|skill| format!("{} {}", skill.name, "☆ ".repeat(skill.rating as usize)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn experience(doc: &ProfileDocument) -> String {
    let mut out = String::new();
    for entry in &doc.work {
        out.push_str(&format!(
            "\n{}\n{} at {}  | {} - {} | {} \n\n",
            "-".repeat(30),
            entry.position,
            entry.name,
            entry.start_date,
            entry.end_date,
            entry.website
        ));
        out.push_str(&format!("{} \n", entry.summary));
        if !entry.highlights.is_empty() {
            out.push_str(
                &entry
                    .highlights
                    .iter()
                    .map(|highlight| format!("- {}", highlight))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        out.push_str("\n\n");
    }
    out
}

fn conference_talks(doc: &ProfileDocument) -> String {
    let mut out = String::new();
    for talk in &doc.publications {
        out.push_str(&format!("\n{}\n", talk.name));
        out.push_str(&format!("{} \n{} \n", talk.url, talk.summary));
    }
    out
}

fn open_source_contributions(doc: &ProfileDocument) -> String {
    let mut out = String::new();
    for project in &doc.projects {
        out.push_str(&format!("\n☆ {}\n", project.name));
        out.push_str(&format!("{} \n{} \n", project.github_url, project.summary));
    }
    out
}

fn education(doc: &ProfileDocument) -> String {
    let mut out = String::new();
    for school in &doc.education {
        out.push_str(&format!(
            "\n{} | {} | {} | {} - {} \n",
            school.institution, school.area, school.study_type, school.start_date, school.end_date
        ));
        out.push_str(&format!("{} \n", school.description));
    }
    out
}

fn certifications(doc: &ProfileDocument) -> String {
    doc.certificates
        .iter()
        .map(|cert| format!("\n{} | {} \n", cert.name, cert.issuer))
        .collect()
}
