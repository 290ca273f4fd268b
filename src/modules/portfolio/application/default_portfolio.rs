// src/modules/portfolio/application/default_portfolio.rs
//
// Content seeded by `POST /api/init-portfolio` on an empty store.

use chrono::{DateTime, Utc};

use crate::modules::portfolio::domain::entities::{
    Contact, Education, PersonalInfo, Portfolio, Project, TechStack,
};
use crate::shared::domain::{Email, InvalidEmail};

pub const DEFAULT_PORTFOLIO_ID: &str = "nishant_portfolio_2025";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_portfolio(now: DateTime<Utc>) -> Result<Portfolio, InvalidEmail> {
    Ok(Portfolio {
        id: DEFAULT_PORTFOLIO_ID.to_string(),
        personal: PersonalInfo {
            name: "Nishant Kumar Dwivedi".to_string(),
            title: "Full Stack Developer".to_string(),
            location: "India".to_string(),
            bio: "I'm a passionate full-stack developer skilled in building scalable web \
                  applications using React, Node.js, MongoDB, Express.js, TailwindCSS, and more. \
                  I architect efficient backend systems, design intuitive UIs, and optimize \
                  performance for real-world impact. With hands-on experience in web development, \
                  AI, and RESTful APIs, I thrive on turning complex problems into clean, \
                  maintainable code. Tech isn't just my job, it's my playground."
                .to_string(),
            profile_image: Some(
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face"
                    .to_string(),
            ),
            hero_background: Some(
                "https://images.pexels.com/photos/5475750/pexels-photo-5475750.jpeg".to_string(),
            ),
        },
        tech_stack: TechStack {
            languages: strings(&["C++", "JavaScript", "SQL"]),
            frameworks: strings(&[
                "React.js",
                "Node.js",
                "Express.js",
                "Next.js",
                "TailwindCSS",
                "Vite",
                "Remix",
            ]),
            tools: strings(&["Socket.io", "REST APIs", "Git", "Docker", "Zustand"]),
            databases: strings(&["MySQL", "MongoDB"]),
        },
        projects: vec![
            Project {
                id: "wechat_project".to_string(),
                name: "WeChat".to_string(),
                description: "A full-stack chat app enabling secure, real-time messaging with \
                              dynamic sync across users"
                    .to_string(),
                details: "Engineered a responsive chat interface using React.js and Tailwind CSS, \
                          delivering intuitive UI/UX and improving user interaction time by 40%. \
                          Orchestrated real-time communication using Socket.IO, reducing message \
                          delivery latency to under 20ms. Constructed a scalable backend using \
                          Node.js, Express.js and MongoDB supporting 500+ concurrent users and \
                          securing access via JWT authentication, reducing unauthorized logins by 95%."
                    .to_string(),
                technologies: strings(&[
                    "React.js",
                    "Node.js",
                    "Express.js",
                    "MongoDB",
                    "Socket.IO",
                    "JWT",
                    "Tailwind CSS",
                ]),
                live_link: Some("https://wechat-8o7y.onrender.com/".to_string()),
                github_link: Some("https://github.com/NishantDwd/WeChat".to_string()),
                image: Some(
                    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?crop=entropy&cs=srgb&fm=jpg&q=85"
                        .to_string(),
                ),
                featured: true,
                created_at: now,
            },
            Project {
                id: "weathere_project".to_string(),
                name: "Weathere".to_string(),
                description: "A real-time weather app with a personalized dashboard and live \
                              global forecasts"
                    .to_string(),
                details: "Provides real-time features like temperature, wind speed, humidity, \
                          and feels-like, along with a 5-day forecast. Enhanced backend efficiency \
                          by 30% and added an interactive dashboard with charts and a blog section. \
                          Implemented a user-friendly UI/UX for seamless weather exploration, \
                          featuring live weather insights with 95% accuracy. The app also offers \
                          alerts, favorites and history management for a personalized experience."
                    .to_string(),
                technologies: strings(&[
                    "React.js",
                    "Vite",
                    "Node.js",
                    "Express.js",
                    "MySQL",
                    "TailwindCSS",
                ]),
                live_link: Some("https://weathere-1.onrender.com/".to_string()),
                github_link: Some("https://github.com/NishantDwd/Weathere".to_string()),
                image: Some(
                    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?crop=entropy&cs=srgb&fm=jpg&q=85"
                        .to_string(),
                ),
                featured: true,
                created_at: now,
            },
            Project {
                id: "dropcraft_project".to_string(),
                name: "DropCraft".to_string(),
                description: "A fast, modern drag-and-drop form builder web app".to_string(),
                details: "Developed with Remix, React, Zustand and TailwindCSS for creating custom \
                          multi-step forms using a drag-and-drop interface in 2 minutes. Facilitate \
                          live device preview, field validation, undo/redo and instant sharing via \
                          unique links with 100% data persisted in localStorage of user. Designed \
                          for rapid form creation, management, and response viewing, includes an \
                          admin dashboard and response analytics in a responsive user-friendly UI, \
                          improving productivity by 50%."
                    .to_string(),
                technologies: strings(&["Remix", "React", "Zustand", "TailwindCSS", "LocalStorage"]),
                live_link: Some("https://dropcraft.onrender.com/".to_string()),
                github_link: Some("https://github.com/NishantDwd/DropCraft".to_string()),
                image: Some(
                    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?crop=entropy&cs=srgb&fm=jpg&q=85"
                        .to_string(),
                ),
                featured: true,
                created_at: now,
            },
        ],
        education: vec![Education {
            id: "jiit_education".to_string(),
            degree: "Bachelor of Technology in Computer Science".to_string(),
            institution: "Jaypee Institute of Information Technology".to_string(),
            graduation_year: "2026".to_string(),
            status: "Currently Pursuing".to_string(),
            created_at: now,
        }],
        contact: Contact {
            email: Email::parse("nishant.dwivedi237@gmail.com")?,
            linkedin: Some("https://www.linkedin.com/in/nishant-dwivedi-0a2b2b226".to_string()),
            github: Some("https://github.com/NishantDwd".to_string()),
        },
        created_at: now,
        updated_at: now,
        active: true,
    })
}
