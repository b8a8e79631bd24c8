//! Portfolio landing data: hero, skills, experience and projects, loaded
//! from JSON files in the profile directory.
//!
//! Field names mirror the content files (camelCase). A missing or broken
//! file degrades to an empty section with a warning; the landing page
//! always renders something.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub primary_cta_label: String,
    pub primary_cta_href: String,
    pub secondary_cta_label: String,
    pub secondary_cta_href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Technical,
    Tool,
    Language,
    Soft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cert {
    pub issuer: String,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SkillKind,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub certified: bool,
    #[serde(default)]
    pub cert: Option<Cert>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub period: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub blog_slug: Option<String>,
}

/// Everything the landing page needs, in one payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Profile {
    pub hero: HeroContent,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<Project>,
}

async fn read_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("bad JSON in {}", path.display()))
}

async fn section<T: DeserializeOwned + Default>(dir: &Path, name: &str) -> T {
    match read_json(dir, name).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("profile section unavailable: {e:#}");
            T::default()
        }
    }
}

/// Load the full profile, substituting empty sections for anything that
/// cannot be read.
pub async fn load_profile(dir: &Path) -> Profile {
    Profile {
        hero: section(dir, "hero.json").await,
        skills: section(dir, "skills.json").await,
        experience: section(dir, "experience.json").await,
        projects: section(dir, "projects.json").await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_files_degrade_to_empty_sections() {
        let dir = TempDir::new().expect("tempdir");
        let profile = load_profile(dir.path()).await;
        assert_eq!(profile.hero.name, "");
        assert!(profile.skills.is_empty());
        assert!(profile.projects.is_empty());
    }

    #[tokio::test]
    async fn reads_camel_case_content_files() {
        let dir = TempDir::new().expect("tempdir");
        std_fs::write(
            dir.path().join("hero.json"),
            r##"{"name":"Alex Morgan","title":"Engineer","summary":"Hi","primaryCtaLabel":"Read the blog","primaryCtaHref":"/blog","secondaryCtaLabel":"Contact","secondaryCtaHref":"#contact"}"##,
        )
        .expect("write hero");
        std_fs::write(
            dir.path().join("skills.json"),
            r#"[{"label":"Rust","type":"technical","level":"advanced","certified":true,"cert":{"issuer":"Acme","name":"Cert","date":"2024-01"}}]"#,
        )
        .expect("write skills");
        std_fs::write(
            dir.path().join("projects.json"),
            r#"[{"title":"Folio","desc":"This site","tags":["rust"],"image":"/images/folio.png","blogSlug":"building-folio"}]"#,
        )
        .expect("write projects");

        let profile = load_profile(dir.path()).await;
        assert_eq!(profile.hero.primary_cta_href, "/blog");
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.skills[0].kind, SkillKind::Technical);
        assert!(profile.skills[0].certified);
        assert_eq!(
            profile.projects[0].blog_slug.as_deref(),
            Some("building-folio")
        );
        // experience.json was not written; the section is just empty.
        assert!(profile.experience.is_empty());
    }
}
