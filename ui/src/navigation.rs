//! Decides which navigation entries an identity may see and which one is active.

use api::identity::Role;

/// A declarative navigation link.
///
/// An empty `allowed_roles` means every role may see the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub target: &'static str,
    pub icon: Option<&'static str>,
    pub allowed_roles: &'static [Role],
}

impl NavEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }
}

/// A visible entry together with its highlight state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    pub entry: &'a NavEntry,
    pub is_active: bool,
}

/// Marketplace menu. Common entries first, then admin, seller and buyer groups.
pub const MARKET_NAV: &[NavEntry] = &[
    NavEntry {
        title: "Home",
        target: "/",
        icon: Some("⌂"),
        allowed_roles: &[],
    },
    NavEntry {
        title: "Listings",
        target: "/listings",
        icon: Some("▤"),
        allowed_roles: &[],
    },
    NavEntry {
        title: "Users",
        target: "/admin/users",
        icon: Some("☷"),
        allowed_roles: &[Role::Admin],
    },
    NavEntry {
        title: "Moderation",
        target: "/admin/listings",
        icon: Some("⚑"),
        allowed_roles: &[Role::Admin],
    },
    NavEntry {
        title: "My Products",
        target: "/seller/products",
        icon: Some("▦"),
        allowed_roles: &[Role::Seller, Role::Admin],
    },
    NavEntry {
        title: "Sales",
        target: "/seller/orders",
        icon: Some("↗"),
        allowed_roles: &[Role::Seller],
    },
    NavEntry {
        title: "Orders",
        target: "/buyer/orders",
        icon: Some("↘"),
        allowed_roles: &[Role::Buyer],
    },
    NavEntry {
        title: "Favorites",
        target: "/buyer/favorites",
        icon: Some("★"),
        allowed_roles: &[Role::Buyer, Role::Seller, Role::Admin],
    },
    NavEntry {
        title: "Sign in",
        target: "/login",
        icon: None,
        allowed_roles: &[Role::Guest],
    },
];

/// Filters `entries` down to those `role` may see, keeping their order, and
/// marks each one active when `location` is its target or lies beneath it.
///
/// Overlapping targets can leave more than one entry active.
pub fn resolve<'a>(entries: &'a [NavEntry], role: Role, location: &str) -> Vec<ResolvedEntry<'a>> {
    entries
        .iter()
        .filter(|entry| entry.allows(role))
        .map(|entry| ResolvedEntry {
            entry,
            is_active: is_path_prefix(entry.target, location),
        })
        .collect()
}

/// Finds the most specific entry covering `location`, regardless of role.
pub fn entry_for<'a>(entries: &'a [NavEntry], location: &str) -> Option<&'a NavEntry> {
    entries
        .iter()
        .filter(|entry| is_path_prefix(entry.target, location))
        .max_by_key(|entry| segments(entry.target).count())
}

/// True when every path segment of `target` matches the leading segments of
/// `location`. `admin/users` covers `admin/users/42` but not `admin/userschema`.
fn is_path_prefix(target: &str, location: &str) -> bool {
    let location = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let mut target = segments(target).peekable();
    let mut location = segments(location).peekable();

    // The root only covers itself.
    if target.peek().is_none() {
        return location.peek().is_none();
    }

    loop {
        match (target.next(), location.next()) {
            (None, _) => return true,
            (Some(want), Some(have)) if want == have => continue,
            _ => return false,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn entry(title: &'static str, target: &'static str, roles: &'static [Role]) -> NavEntry {
        NavEntry {
            title,
            target,
            icon: None,
            allowed_roles: roles,
        }
    }

    const DASHBOARD_NAV: &[NavEntry] = &[
        entry("Dashboard", "dashboard", &[]),
        entry("Users", "admin/users", &[Role::Admin]),
        entry("Products", "products", &[Role::Seller, Role::Admin]),
        entry("Orders", "orders", &[Role::Buyer]),
    ];

    fn titles(resolved: &[ResolvedEntry<'_>]) -> Vec<&'static str> {
        resolved.iter().map(|r| r.entry.title).collect()
    }

    #[test]
    fn filters_by_role_and_keeps_order() {
        let resolved = resolve(DASHBOARD_NAV, Role::Seller, "dashboard");
        assert_eq!(titles(&resolved), ["Dashboard", "Products"]);

        let resolved = resolve(DASHBOARD_NAV, Role::Admin, "dashboard");
        assert_eq!(titles(&resolved), ["Dashboard", "Users", "Products"]);

        let resolved = resolve(DASHBOARD_NAV, Role::Buyer, "dashboard");
        assert_eq!(titles(&resolved), ["Dashboard", "Orders"]);
    }

    #[test]
    fn unlisted_roles_only_see_unrestricted_entries() {
        let resolved = resolve(DASHBOARD_NAV, Role::Guest, "dashboard");
        assert_eq!(titles(&resolved), ["Dashboard"]);
    }

    #[test]
    fn descendant_locations_activate_entry() {
        let nav = [entry("Users", "admin/users", &[])];
        assert!(resolve(&nav, Role::Admin, "admin/users")[0].is_active);
        assert!(resolve(&nav, Role::Admin, "admin/users/42")[0].is_active);
        assert!(!resolve(&nav, Role::Admin, "admin/userschema")[0].is_active);
        assert!(!resolve(&nav, Role::Admin, "admin")[0].is_active);
    }

    #[test]
    fn slashes_query_and_fragment_are_ignored() {
        let nav = [entry("Users", "/admin/users", &[])];
        assert!(resolve(&nav, Role::Admin, "/admin/users/")[0].is_active);
        assert!(resolve(&nav, Role::Admin, "admin/users?page=2")[0].is_active);
        assert!(resolve(&nav, Role::Admin, "/admin/users#top")[0].is_active);
    }

    #[test]
    fn root_target_is_only_active_at_root() {
        let nav = [entry("Home", "/", &[])];
        assert!(resolve(&nav, Role::Buyer, "/")[0].is_active);
        assert!(resolve(&nav, Role::Buyer, "")[0].is_active);
        assert!(!resolve(&nav, Role::Buyer, "/listings")[0].is_active);
    }

    #[test]
    fn overlapping_targets_are_both_active() {
        let nav = [
            entry("Admin", "admin", &[]),
            entry("Users", "admin/users", &[]),
        ];
        let resolved = resolve(&nav, Role::Admin, "admin/users/3");
        assert!(resolved.iter().all(|r| r.is_active));
    }

    #[test]
    fn market_nav_groups_per_role() {
        let seller = resolve(MARKET_NAV, Role::Seller, "/seller/products/7");
        assert_eq!(
            titles(&seller),
            ["Home", "Listings", "My Products", "Sales", "Favorites"]
        );
        let active: Vec<_> = seller.iter().filter(|r| r.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].entry.title, "My Products");

        let guest = resolve(MARKET_NAV, Role::Guest, "/");
        assert_eq!(titles(&guest), ["Home", "Listings", "Sign in"]);
    }

    #[test]
    fn entry_for_prefers_the_deepest_match() {
        let nav = [
            entry("Admin", "admin", &[]),
            entry("Users", "admin/users", &[Role::Admin]),
        ];
        assert_eq!(entry_for(&nav, "admin/users/9").map(|e| e.title), Some("Users"));
        assert_eq!(entry_for(&nav, "admin/stats").map(|e| e.title), Some("Admin"));
        assert!(entry_for(&nav, "listings").is_none());
    }
}
