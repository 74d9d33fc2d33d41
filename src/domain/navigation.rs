use serde::Serialize;

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The top-level navigation rendered by the front end next to the wallet control.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub brand: &'static str,
    pub home: &'static str,
    pub links: &'static [NavLink],
}

pub const NAVIGATION: Navigation = Navigation {
    brand: "BlockLens",
    home: "/",
    links: &[
        NavLink {
            label: "Dashboard",
            href: "/dashboard",
        },
        NavLink {
            label: "Gas Fees",
            href: "/gasfee",
        },
    ],
};
