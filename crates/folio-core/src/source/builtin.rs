//! In-memory [`CatalogSource`] and the portfolio's own project list.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::ProjectRecord;

use super::CatalogSource;

/// A source that hands out a fixed record list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<ProjectRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// The six projects shown on the portfolio's Projects page.
    pub fn builtin() -> Self {
        Self::new(builtin_projects())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load(&self) -> Result<Vec<ProjectRecord>> {
        Ok(self.records.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    tags: [&str; 3],
    photo: &str,
    featured: bool,
    year: &str,
) -> ProjectRecord {
    ProjectRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: format!(
            "https://images.pexels.com/photos/{}.jpeg?auto=compress&cs=tinysrgb&w=800",
            photo
        ),
        link: format!("https://example.com/project{}", id),
        featured,
        year: year.to_string(),
    }
}

pub fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            1,
            "Brand Identity Design",
            "Complete brand identity package for a tech startup including logo, color palette, and brand guidelines.",
            "Branding",
            ["Logo Design", "Brand Identity", "Visual Design"],
            "196644/pexels-photo-196644",
            true,
            "2024",
        ),
        project(
            2,
            "E-commerce Website UI",
            "Modern and intuitive user interface design for an online fashion retailer with focus on conversion optimization.",
            "Web Design",
            ["UI/UX", "E-commerce", "Responsive Design"],
            "267350/pexels-photo-267350",
            true,
            "2024",
        ),
        project(
            3,
            "Mobile App Interface",
            "Sleek mobile application design for a fitness tracking app with emphasis on user engagement.",
            "Mobile Design",
            ["Mobile UI", "App Design", "User Experience"],
            "147413/twitter-facebook-together-exchange-of-information-147413",
            false,
            "2023",
        ),
        project(
            4,
            "Print Campaign Design",
            "Eye-catching print advertisement campaign for a luxury watch brand targeting high-end consumers.",
            "Print Design",
            ["Print Design", "Advertisement", "Luxury Branding"],
            "326503/pexels-photo-326503",
            false,
            "2023",
        ),
        project(
            5,
            "Social Media Graphics",
            "Consistent visual content creation for social media platforms including Instagram, Facebook, and Twitter.",
            "Social Media",
            ["Social Media", "Content Creation", "Visual Design"],
            "267371/pexels-photo-267371",
            true,
            "2024",
        ),
        project(
            6,
            "Corporate Website Redesign",
            "Complete website redesign for a consulting firm focusing on professional appearance and user experience.",
            "Web Design",
            ["Web Design", "Corporate", "Redesign"],
            "265087/pexels-photo-265087",
            false,
            "2023",
        ),
    ]
}
