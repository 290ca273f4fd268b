use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_messages;
use crate::modules::contact::domain::entities::ContactMessage;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_education, portfolio_projects, portfolios,
};
use crate::modules::portfolio::application::ports::outgoing::NewPortfolioData;
use crate::modules::portfolio::domain::entities::{
    Contact, Education, EducationCreate, PersonalInfo, Portfolio, PortfolioCreate, Project,
    ProjectCreate, TechStack,
};
use crate::shared::domain::Email;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

//
// ──────────────────────────────────────────────────────────
// Domain values
// ──────────────────────────────────────────────────────────
//

pub fn sample_personal() -> PersonalInfo {
    PersonalInfo {
        name: "Jane Doe".to_string(),
        title: "Backend Engineer".to_string(),
        location: "Berlin".to_string(),
        bio: "Builds APIs.".to_string(),
        profile_image: None,
        hero_background: None,
    }
}

pub fn sample_tech_stack() -> TechStack {
    TechStack {
        languages: strings(&["Rust", "SQL"]),
        frameworks: strings(&["actix-web"]),
        tools: strings(&["Docker"]),
        databases: strings(&["PostgreSQL"]),
    }
}

pub fn sample_contact() -> Contact {
    Contact {
        email: Email::parse("jane.doe@example.com").unwrap(),
        linkedin: None,
        github: Some("https://github.com/janedoe".to_string()),
    }
}

pub fn sample_project_create(name: &str) -> ProjectCreate {
    ProjectCreate {
        name: name.to_string(),
        description: format!("{name} description"),
        details: format!("{name} details"),
        technologies: strings(&["Rust"]),
        live_link: Some("https://example.com".to_string()),
        github_link: None,
        image: None,
        featured: true,
    }
}

pub fn sample_education_create() -> EducationCreate {
    EducationCreate {
        degree: "BSc Computer Science".to_string(),
        institution: "TU Berlin".to_string(),
        graduation_year: "2020".to_string(),
        status: "Completed".to_string(),
    }
}

pub fn sample_portfolio_create() -> PortfolioCreate {
    PortfolioCreate {
        personal: sample_personal(),
        tech_stack: sample_tech_stack(),
        projects: vec![sample_project_create("Alpha"), sample_project_create("Beta")],
        education: vec![sample_education_create()],
        contact: sample_contact(),
    }
}

pub fn sample_portfolio() -> Portfolio {
    let now = fixed_now();
    Portfolio {
        id: "pf-1".to_string(),
        personal: sample_personal(),
        tech_stack: sample_tech_stack(),
        projects: vec![
            Project::replacing("alpha".to_string(), sample_project_create("Alpha"), now),
            Project::replacing("beta".to_string(), sample_project_create("Beta"), now),
        ],
        education: vec![Education {
            id: "edu-1".to_string(),
            degree: "BSc Computer Science".to_string(),
            institution: "TU Berlin".to_string(),
            graduation_year: "2020".to_string(),
            status: "Completed".to_string(),
            created_at: now,
        }],
        contact: sample_contact(),
        created_at: now,
        updated_at: now,
        active: true,
    }
}

/// What a repository would hand back after storing `data` for the first time.
pub fn portfolio_from_data(data: NewPortfolioData) -> Portfolio {
    Portfolio {
        id: data.id,
        personal: data.personal,
        tech_stack: data.tech_stack,
        projects: data.projects,
        education: data.education,
        contact: data.contact,
        created_at: data.now,
        updated_at: data.now,
        active: true,
    }
}

pub fn sample_message(id: &str) -> ContactMessage {
    ContactMessage {
        id: id.to_string(),
        name: "John Smith".to_string(),
        email: Email::parse("john.smith@example.com").unwrap(),
        message: "Are you available for freelance work?".to_string(),
        created_at: fixed_now(),
        replied: false,
    }
}

//
// ──────────────────────────────────────────────────────────
// Database rows
// ──────────────────────────────────────────────────────────
//

pub fn portfolio_row(id: &str) -> portfolios::Model {
    portfolios::Model {
        id: id.to_string(),
        personal: json!({
            "name": "Jane Doe",
            "title": "Backend Engineer",
            "location": "Berlin",
            "bio": "Builds APIs.",
            "profile_image": null,
            "hero_background": null
        }),
        tech_stack: json!({
            "languages": ["Rust", "SQL"],
            "frameworks": ["actix-web"],
            "tools": ["Docker"],
            "databases": ["PostgreSQL"]
        }),
        contact: json!({
            "email": "jane.doe@example.com",
            "linkedin": null,
            "github": "https://github.com/janedoe"
        }),
        active: true,
        created_at: fixed_now().into(),
        updated_at: fixed_now().into(),
    }
}

pub fn project_row(id: &str, position: i64) -> portfolio_projects::Model {
    portfolio_projects::Model {
        portfolio_id: "pf".to_string(),
        id: id.to_string(),
        position,
        name: format!("Project {id}"),
        description: "desc".to_string(),
        details: "details".to_string(),
        technologies: json!(["Rust"]),
        live_link: None,
        github_link: Some(format!("https://github.com/janedoe/{id}")),
        image: None,
        featured: false,
        created_at: fixed_now().into(),
    }
}

pub fn education_row(id: &str, position: i64) -> portfolio_education::Model {
    portfolio_education::Model {
        portfolio_id: "pf".to_string(),
        id: id.to_string(),
        position,
        degree: "BSc Computer Science".to_string(),
        institution: "TU Berlin".to_string(),
        graduation_year: "2020".to_string(),
        status: "Completed".to_string(),
        created_at: fixed_now().into(),
    }
}

pub fn message_row(id: &str) -> contact_messages::Model {
    contact_messages::Model {
        id: id.to_string(),
        name: "John Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        message: "Are you available for freelance work?".to_string(),
        created_at: fixed_now().into(),
        replied: false,
    }
}
