//! Site data model.
//!
//! # Responsibility
//! - Define the structured content sections rendered by the page.
//! - Provide entry constructors that generate stable per-list ids.
//! - Own the built-in defaults used when storage is absent or malformed.
//!
//! # Invariants
//! - Entry ids are unique within their list and never regenerated.
//! - `ListName::fields` is the authoritative field order for card
//!   extraction; `field_fallback` supplies the value stored when a saved
//!   field is left blank.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four editable list sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    Education,
    Career,
    Skills,
    Projects,
}

impl ListName {
    pub const ALL: [ListName; 4] = [
        ListName::Education,
        ListName::Career,
        ListName::Skills,
        ListName::Projects,
    ];

    /// Marker value used by `data-list` containers in the page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Career => "career",
            Self::Skills => "skills",
            Self::Projects => "projects",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Self::Education => "edu",
            Self::Career => "car",
            Self::Skills => "skill",
            Self::Projects => "proj",
        }
    }

    /// Tagged fields carried by one card of this list, in display order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Education => &["degree", "college", "year"],
            Self::Career => &["text"],
            Self::Skills => &["title", "description"],
            Self::Projects => &["name", "description", "technologies", "status", "extra"],
        }
    }

    /// Fallback value stored when a saved field trims to empty.
    pub fn field_fallback(self, field: &str) -> &'static str {
        match (self, field) {
            (Self::Education, "degree") => "Education",
            (Self::Education, "college") => "College Name",
            (Self::Education, "year") => "Year",
            (Self::Career, "text") => "Career Interest",
            (Self::Skills, "title") => "Skill",
            (Self::Skills, "description") => "Skill description",
            (Self::Projects, "name") => "Project Name",
            (Self::Projects, "description") => "Project description",
            (Self::Projects, "technologies") => "Tools and technologies",
            (Self::Projects, "status") => "Ongoing",
            _ => "",
        }
    }
}

/// Generates a fresh list-entry id: list prefix plus a random UUID.
pub fn generate_entry_id(list: ListName) -> String {
    format!("{}-{}", list.id_prefix(), Uuid::new_v4())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub year: String,
}

impl EducationEntry {
    pub fn new(
        degree: impl Into<String>,
        college: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_entry_id(ListName::Education),
            degree: degree.into(),
            college: college.into(),
            year: year.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEntry {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

impl CareerEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_entry_id(ListName::Career),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl SkillEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: generate_entry_id(ListName::Skills),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub extra: String,
}

impl ProjectEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        technologies: impl Into<String>,
        status: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_entry_id(ListName::Projects),
            name: name.into(),
            description: description.into(),
            technologies: technologies.into(),
            status: status.into(),
            extra: extra.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
}

/// Full structured content of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub career: Vec<CareerEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "malarvannan@example.com".to_string(),
            phone: "+91 00000 00000".to_string(),
            github: "github.com/your-username".to_string(),
            linkedin: "linkedin.com/in/your-username".to_string(),
        }
    }
}

impl Default for SiteData {
    fn default() -> Self {
        Self {
            about: "I am a Mechanical / Mechatronics Engineering student who enjoys \
                    turning ideas into functional prototypes. I like working on \
                    mechanisms, sensors, and automation projects that solve practical \
                    problems."
                .to_string(),
            education: vec![EducationEntry {
                id: "edu-1".to_string(),
                degree: "B.E. Mechanical / Mechatronics Engineering".to_string(),
                college: "Your College Name".to_string(),
                year: "2022 - 2026".to_string(),
            }],
            career: vec![
                CareerEntry {
                    id: "car-1".to_string(),
                    text: "Mechanical Design".to_string(),
                },
                CareerEntry {
                    id: "car-2".to_string(),
                    text: "Robotics and Automation".to_string(),
                },
            ],
            skills: vec![
                SkillEntry {
                    id: "skill-1".to_string(),
                    title: "Mechanical Design".to_string(),
                    description: "CAD modeling, assemblies, and technical drawings.".to_string(),
                },
                SkillEntry {
                    id: "skill-2".to_string(),
                    title: "Manufacturing Engineering".to_string(),
                    description: "Fabrication basics, process planning, and tolerances."
                        .to_string(),
                },
                SkillEntry {
                    id: "skill-3".to_string(),
                    title: "SolidWorks & AutoCAD".to_string(),
                    description: "2D drafting and 3D modeling for mechanical parts.".to_string(),
                },
                SkillEntry {
                    id: "skill-4".to_string(),
                    title: "Basic Programming".to_string(),
                    description: "C and Python for logic, data, and automation tasks.".to_string(),
                },
            ],
            projects: vec![
                ProjectEntry {
                    id: "proj-1".to_string(),
                    name: "Automated Conveyor Sorting".to_string(),
                    description: "Built a prototype conveyor that sorts objects using sensors."
                        .to_string(),
                    technologies: "IR sensors, DC motors, Arduino".to_string(),
                    status: "Completed".to_string(),
                    extra: "My role: Mechanical layout and sensor mounting.".to_string(),
                },
                ProjectEntry {
                    id: "proj-2".to_string(),
                    name: "Robotic Arm Gripper".to_string(),
                    description: "Designed a compact gripper mechanism for a small robotic arm."
                        .to_string(),
                    technologies: "SolidWorks, 3D printing".to_string(),
                    status: "Completed".to_string(),
                    extra: "My role: CAD design and prototype assembly.".to_string(),
                },
                ProjectEntry {
                    id: "proj-3".to_string(),
                    name: "Smart Irrigation System".to_string(),
                    description: "Created a basic automation system to control water flow."
                        .to_string(),
                    technologies: "Soil sensor, relay module, C".to_string(),
                    status: "Ongoing".to_string(),
                    extra: "My role: System integration and testing.".to_string(),
                },
            ],
            contact: ContactInfo::default(),
        }
    }
}

impl SiteData {
    /// Entry ids of one list, in model order.
    pub fn entry_ids(&self, list: ListName) -> Vec<String> {
        match list {
            ListName::Education => self.education.iter().map(|e| e.id.clone()).collect(),
            ListName::Career => self.career.iter().map(|e| e.id.clone()).collect(),
            ListName::Skills => self.skills.iter().map(|e| e.id.clone()).collect(),
            ListName::Projects => self.projects.iter().map(|e| e.id.clone()).collect(),
        }
    }

    /// Applies extracted card field values to the entry with a matching id.
    ///
    /// Returns `false` when no entry matches; unknown field names are
    /// ignored so stale markup cannot corrupt the model.
    pub fn apply_card_update(
        &mut self,
        list: ListName,
        id: &str,
        values: &[(String, String)],
    ) -> bool {
        match list {
            ListName::Education => {
                let Some(entry) = self.education.iter_mut().find(|e| e.id == id) else {
                    return false;
                };
                for (field, value) in values {
                    match field.as_str() {
                        "degree" => entry.degree = value.clone(),
                        "college" => entry.college = value.clone(),
                        "year" => entry.year = value.clone(),
                        _ => {}
                    }
                }
                true
            }
            ListName::Career => {
                let Some(entry) = self.career.iter_mut().find(|e| e.id == id) else {
                    return false;
                };
                for (field, value) in values {
                    if field == "text" {
                        entry.text = value.clone();
                    }
                }
                true
            }
            ListName::Skills => {
                let Some(entry) = self.skills.iter_mut().find(|e| e.id == id) else {
                    return false;
                };
                for (field, value) in values {
                    match field.as_str() {
                        "title" => entry.title = value.clone(),
                        "description" => entry.description = value.clone(),
                        _ => {}
                    }
                }
                true
            }
            ListName::Projects => {
                let Some(entry) = self.projects.iter_mut().find(|e| e.id == id) else {
                    return false;
                };
                for (field, value) in values {
                    match field.as_str() {
                        "name" => entry.name = value.clone(),
                        "description" => entry.description = value.clone(),
                        "technologies" => entry.technologies = value.clone(),
                        "status" => entry.status = value.clone(),
                        "extra" => entry.extra = value.clone(),
                        _ => {}
                    }
                }
                true
            }
        }
    }

    /// Removes the entry with a matching id from its list.
    ///
    /// Removing an unknown id is a no-op and returns `false`.
    pub fn remove_entry(&mut self, list: ListName, id: &str) -> bool {
        match list {
            ListName::Education => {
                let before = self.education.len();
                self.education.retain(|e| e.id != id);
                before != self.education.len()
            }
            ListName::Career => {
                let before = self.career.len();
                self.career.retain(|e| e.id != id);
                before != self.career.len()
            }
            ListName::Skills => {
                let before = self.skills.len();
                self.skills.retain(|e| e.id != id);
                before != self.skills.len()
            }
            ListName::Projects => {
                let before = self.projects.len();
                self.projects.retain(|e| e.id != id);
                before != self.projects.len()
            }
        }
    }
}
