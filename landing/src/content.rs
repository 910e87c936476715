//! Fixed content descriptors.
//!
//! Display order is declaration order.

use crate::icons::{
    ICON_GAMEPAD, ICON_SETTINGS, ICON_TROPHY, ICON_USER, ICON_USERS, IconPaths,
};

/// A header navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: IconPaths,
    pub href: &'static str,
}

/// A card in the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconPaths,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number in the stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Games",
        icon: ICON_GAMEPAD,
        href: "/games",
    },
    NavItem {
        label: "Leaderboard",
        icon: ICON_TROPHY,
        href: "/leaderboard",
    },
    NavItem {
        label: "Profile",
        icon: ICON_USER,
        href: "/profile",
    },
    NavItem {
        label: "Settings",
        icon: ICON_SETTINGS,
        href: "/settings",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_GAMEPAD,
        title: "Multiple Games",
        description: "Enjoy a variety of challenging mini games designed to test your skills and reflexes.",
    },
    Feature {
        icon: ICON_TROPHY,
        title: "Global Leaderboards",
        description: "Compete with players worldwide and see how you rank against the best.",
    },
    Feature {
        icon: ICON_USERS,
        title: "Community",
        description: "Join a thriving community of gamers and make new friends along the way.",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "10K+",
        label: "Active Players",
    },
    Stat {
        value: "50+",
        label: "Games Available",
    },
    Stat {
        value: "1M+",
        label: "Games Played",
    },
];

/// Where every "play" button leads.
pub const PLAY_HREF: &str = "/games";
pub const LEADERBOARD_HREF: &str = "/leaderboard";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_items_in_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|i| (i.label, i.href)).collect();
        assert_eq!(
            labels,
            vec![
                ("Games", "/games"),
                ("Leaderboard", "/leaderboard"),
                ("Profile", "/profile"),
                ("Settings", "/settings"),
            ]
        );
    }

    #[test]
    fn three_features_and_three_stats() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Multiple Games", "Global Leaderboards", "Community"]
        );

        let stats: Vec<_> = STATS.iter().map(|s| (s.value, s.label)).collect();
        assert_eq!(
            stats,
            vec![
                ("10K+", "Active Players"),
                ("50+", "Games Available"),
                ("1M+", "Games Played"),
            ]
        );
    }
}
