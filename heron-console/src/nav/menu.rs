//! The shipped navigation configuration
//!
//! Declared order is render order. Parent entries with children are
//! expanders; role tags on children are independent of the parent's.

use super::NavItem;
use shared::models::role::Role::{self, *};

const EVERYONE: &[Role] = &[Admin, TaExecutive, TaManager, HiringManager, Interviewer, HrOps];

/// The main menu tree
pub const MAIN_MENU: &[NavItem] = &[
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
        allowed_roles: EVERYONE,
        children: &[],
    },
    NavItem {
        path: "/jobs",
        label: "Jobs",
        allowed_roles: &[Admin, TaExecutive, TaManager, HiringManager],
        children: &[],
    },
    NavItem {
        path: "/candidates",
        label: "Candidates",
        allowed_roles: &[Admin, TaExecutive, TaManager, HiringManager, HrOps],
        children: &[],
    },
    NavItem {
        path: "/interviews",
        label: "Interviews",
        allowed_roles: &[Admin, TaManager, HiringManager, Interviewer],
        children: &[],
    },
    NavItem {
        path: "/admin",
        label: "Administration",
        allowed_roles: &[Admin, TaExecutive, HrOps],
        children: &[
            NavItem {
                path: "/admin/users",
                label: "Users",
                allowed_roles: &[Admin],
                children: &[],
            },
            NavItem {
                path: "/admin/roles",
                label: "Roles",
                allowed_roles: &[Admin],
                children: &[],
            },
            NavItem {
                path: "/admin/organizations",
                label: "Organizations",
                allowed_roles: &[Admin, HrOps],
                children: &[],
            },
            NavItem {
                path: "/admin/skills",
                label: "Skills",
                allowed_roles: &[Admin, TaExecutive, HrOps],
                children: &[],
            },
            NavItem {
                path: "/admin/permissions",
                label: "Permissions",
                allowed_roles: &[Admin],
                children: &[],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::visible_tree;

    #[test]
    fn test_paths_are_unique() {
        fn collect(tree: &'static [NavItem], out: &mut Vec<&'static str>) {
            for item in tree {
                out.push(item.path);
                collect(item.children, out);
            }
        }
        let mut paths = Vec::new();
        collect(MAIN_MENU, &mut paths);
        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(paths.len(), deduped.len());
    }

    #[test]
    fn test_admin_sees_everything() {
        let visible = visible_tree(MAIN_MENU, Admin);
        assert_eq!(visible.len(), MAIN_MENU.len());
        let admin_branch = visible.last().unwrap();
        assert_eq!(admin_branch.children.len(), 5);
    }

    #[test]
    fn test_interviewer_menu_is_minimal() {
        let visible = visible_tree(MAIN_MENU, Interviewer);
        let paths: Vec<&str> = visible.iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/dashboard", "/interviews"]);
    }

    #[test]
    fn test_hr_ops_admin_branch_is_scoped() {
        let visible = visible_tree(MAIN_MENU, HrOps);
        let admin_branch = visible.iter().find(|i| i.path == "/admin").unwrap();
        let child_paths: Vec<&str> = admin_branch.children.iter().map(|c| c.path).collect();
        assert_eq!(child_paths, vec!["/admin/organizations", "/admin/skills"]);
    }
}
