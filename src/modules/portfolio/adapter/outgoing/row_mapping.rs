//! Conversions between the domain records and the table rows.
//!
//! JSON columns hold the nested value objects; a decode failure means the
//! stored document does not match the current shape.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_education, portfolio_projects, portfolios,
};
use crate::modules::portfolio::domain::entities::{Education, Portfolio, Project};

pub(super) fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(data)
}

pub(super) fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, serde_json::Error> {
    serde_json::from_value(json.clone())
}

pub(super) fn project_from_row(row: portfolio_projects::Model) -> Result<Project, serde_json::Error> {
    Ok(Project {
        technologies: from_json(&row.technologies)?,
        id: row.id,
        name: row.name,
        description: row.description,
        details: row.details,
        live_link: row.live_link,
        github_link: row.github_link,
        image: row.image,
        featured: row.featured,
        created_at: row.created_at.into(),
    })
}

/// Row for `project`. `position` is left to the identity column.
pub(super) fn project_to_row(
    portfolio_id: &str,
    project: &Project,
) -> Result<portfolio_projects::ActiveModel, serde_json::Error> {
    Ok(portfolio_projects::ActiveModel {
        portfolio_id: Set(portfolio_id.to_string()),
        id: Set(project.id.clone()),
        position: NotSet,
        name: Set(project.name.clone()),
        description: Set(project.description.clone()),
        details: Set(project.details.clone()),
        technologies: Set(to_json(&project.technologies)?),
        live_link: Set(project.live_link.clone()),
        github_link: Set(project.github_link.clone()),
        image: Set(project.image.clone()),
        featured: Set(project.featured),
        created_at: Set(project.created_at.fixed_offset()),
    })
}

pub(super) fn education_from_row(row: portfolio_education::Model) -> Education {
    Education {
        id: row.id,
        degree: row.degree,
        institution: row.institution,
        graduation_year: row.graduation_year,
        status: row.status,
        created_at: row.created_at.into(),
    }
}

pub(super) fn education_to_row(
    portfolio_id: &str,
    education: &Education,
) -> portfolio_education::ActiveModel {
    portfolio_education::ActiveModel {
        portfolio_id: Set(portfolio_id.to_string()),
        id: Set(education.id.clone()),
        position: NotSet,
        degree: Set(education.degree.clone()),
        institution: Set(education.institution.clone()),
        graduation_year: Set(education.graduation_year.clone()),
        status: Set(education.status.clone()),
        created_at: Set(education.created_at.fixed_offset()),
    }
}

pub(super) fn portfolio_from_rows(
    model: portfolios::Model,
    projects: Vec<Project>,
    education: Vec<Education>,
) -> Result<Portfolio, serde_json::Error> {
    let created_at: DateTime<Utc> = model.created_at.into();
    let updated_at: DateTime<Utc> = model.updated_at.into();

    Ok(Portfolio {
        personal: from_json(&model.personal)?,
        tech_stack: from_json(&model.tech_stack)?,
        contact: from_json(&model.contact)?,
        id: model.id,
        projects,
        education,
        created_at,
        updated_at,
        active: model.active,
    })
}
