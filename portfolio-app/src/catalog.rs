#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    WebApp,
    DesktopApp,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::WebApp => "Web App",
            Category::DesktopApp => "Desktop App",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::WebApp),
        CategoryFilter::Only(Category::DesktopApp),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub category: Category,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Blood Bank Management System",
        description: "Java desktop application to manage blood donors, inventory, and reports.",
        tech: &["Java", "MySQL", "Swing"],
        image: "/BloodBank.png",
        github: "https://github.com/BenjaminKing0520/BloodBankSystem.git",
        demo: None,
        category: Category::DesktopApp,
    },
    Project {
        title: "Hakeem Art Academy Website",
        description: "Modern React website showcasing courses, events, and academy content.",
        tech: &["React", "Tailwind CSS"],
        image: "/HakeemArt.png",
        github: "https://github.com/BenjaminKing0520/Hakeem-Art-Academy.git",
        demo: Some("https://hakeem-art-academy.vercel.app/"),
        category: Category::WebApp,
    },
    Project {
        title: "Car Booking Web App",
        description: "Car rental and booking system using PHP and MySQL backend.",
        tech: &["HTML", "CSS", "PHP", "MySQL"],
        image: "/CarReant.png",
        github: "https://github.com/BenjaminKing0520/Ruzaik-rent-car.git",
        demo: None,
        category: Category::WebApp,
    },
];

pub fn all_projects() -> &'static [Project] {
    PROJECTS
}

pub fn filter_projects(catalog: &'static [Project], filter: CategoryFilter) -> Vec<&'static Project> {
    catalog.iter().filter(|project| filter.matches(project)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_filter_yields_single_entry() {
        let desktop = filter_projects(all_projects(), CategoryFilter::Only(Category::DesktopApp));
        assert_eq!(desktop.len(), 1);
        assert_eq!(desktop[0].title, "Blood Bank Management System");
    }

    #[test]
    fn all_keeps_catalog_order() {
        let everything = filter_projects(all_projects(), CategoryFilter::All);
        let titles: Vec<_> = everything.iter().map(|project| project.title).collect();
        assert_eq!(
            titles,
            [
                "Blood Bank Management System",
                "Hakeem Art Academy Website",
                "Car Booking Web App",
            ]
        );
    }

    #[test]
    fn filter_labels_match_buttons() {
        let labels: Vec<_> = CategoryFilter::CHOICES.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Web App", "Desktop App"]);
    }
}
