//! Display metadata for task and goal categories.

use synkr_core::tasks::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub category: Category,
    pub label: &'static str,
    pub icon: &'static str,
    /// Hex RGB
    pub color: &'static str,
}

const STYLES: [CategoryStyle; 6] = [
    CategoryStyle {
        category: Category::Sports,
        label: "Sports",
        icon: "🏋",
        color: "#FF6B6B",
    },
    CategoryStyle {
        category: Category::Study,
        label: "Study",
        icon: "📚",
        color: "#4D96FF",
    },
    CategoryStyle {
        category: Category::Work,
        label: "Work",
        icon: "💼",
        color: "#6BCB77",
    },
    CategoryStyle {
        category: Category::Meetings,
        label: "Meetings",
        icon: "👥",
        color: "#FFD93D",
    },
    CategoryStyle {
        category: Category::Habits,
        label: "Habits",
        icon: "🔁",
        color: "#B983FF",
    },
    CategoryStyle {
        category: Category::Others,
        label: "Others",
        icon: "📌",
        color: "#A0A0A0",
    },
];

pub fn style_for(category: Category) -> &'static CategoryStyle {
    STYLES
        .iter()
        .find(|style| style.category == category)
        .unwrap_or(&STYLES[STYLES.len() - 1])
}
