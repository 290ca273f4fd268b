use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::Email;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub hero_background: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TechStack {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Contact {
    pub email: Email,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub details: String,
    pub technologies: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Builds a brand new project from user input.
    pub fn create(input: ProjectCreate, now: DateTime<Utc>) -> Self {
        Self::replacing(Uuid::new_v4().to_string(), input, now)
    }

    /// Builds the record that takes the place of project `id`. Only the
    /// identifier survives; everything else comes from `input`.
    pub fn replacing(id: String, input: ProjectCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            details: input.details,
            technologies: input.technologies,
            live_link: input.live_link,
            github_link: input.github_link,
            image: input.image,
            featured: input.featured,
            created_at: now,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Education {
    pub fn create(input: EducationCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            degree: input.degree,
            institution: input.institution,
            graduation_year: input.graduation_year,
            status: input.status,
            created_at: now,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Portfolio {
    pub id: String,
    pub personal: PersonalInfo,
    pub tech_stack: TechStack,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub contact: Contact,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

//
// ──────────────────────────────────────────────────────────
// Create / patch shapes (user supplied fields only)
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ProjectCreate {
    pub name: String,
    pub description: String,
    pub details: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct EducationCreate {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PortfolioCreate {
    pub personal: PersonalInfo,
    pub tech_stack: TechStack,
    pub projects: Vec<ProjectCreate>,
    pub education: Vec<EducationCreate>,
    pub contact: Contact,
}

/// Field-level patch. `None` (absent or `null` in the body) keeps the stored
/// value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct PortfolioUpdate {
    pub personal: Option<PersonalInfo>,
    pub tech_stack: Option<TechStack>,
    pub contact: Option<Contact>,
}

impl PortfolioUpdate {
    pub fn is_empty(&self) -> bool {
        self.personal.is_none() && self.tech_stack.is_none() && self.contact.is_none()
    }
}
