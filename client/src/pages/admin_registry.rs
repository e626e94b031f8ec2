//! Static registry of admin panel modules.
//!
//! DESIGN
//! ======
//! Each module is named by an `AdminModuleKey` and built by a plain function
//! known at compile time. Route segments resolve through `lookup`, so an
//! unknown segment can only ever produce `None`, never a load attempt.

#[cfg(test)]
#[path = "admin_registry_test.rs"]
mod admin_registry_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::admin::{ActivityModule, MembersModule, StorageModule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminModuleKey {
    Storage,
    Activity,
    Members,
}

impl AdminModuleKey {
    pub const ALL: [AdminModuleKey; 3] = [AdminModuleKey::Storage, AdminModuleKey::Activity, AdminModuleKey::Members];

    /// Route segment for the module.
    pub fn as_str(self) -> &'static str {
        match self {
            AdminModuleKey::Storage => "storage",
            AdminModuleKey::Activity => "activity",
            AdminModuleKey::Members => "members",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminModuleKey::Storage => "Local storage",
            AdminModuleKey::Activity => "Activity",
            AdminModuleKey::Members => "Members",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

pub type AdminModuleFactory = fn() -> AnyView;

fn storage_module() -> AnyView {
    view! { <StorageModule/> }.into_any()
}

fn activity_module() -> AnyView {
    view! { <ActivityModule/> }.into_any()
}

fn members_module() -> AnyView {
    view! { <MembersModule/> }.into_any()
}

const REGISTRY: [(AdminModuleKey, AdminModuleFactory); 3] = [
    (AdminModuleKey::Storage, storage_module),
    (AdminModuleKey::Activity, activity_module),
    (AdminModuleKey::Members, members_module),
];

pub fn registry() -> &'static [(AdminModuleKey, AdminModuleFactory)] {
    &REGISTRY
}

/// Factory for the module named by route segment `raw`.
pub fn lookup(raw: &str) -> Option<AdminModuleFactory> {
    let key = AdminModuleKey::parse(raw)?;
    registry().iter().find(|(k, _)| *k == key).map(|(_, factory)| *factory)
}
