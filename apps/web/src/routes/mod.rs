pub(crate) mod admin;
mod dashboard;
mod denied;
mod health;
mod login;
mod not_found;

pub(crate) use admin::{AdminOverviewPage, AdminUsersPage, UserDetailPage};
pub(crate) use dashboard::DashboardPage;
pub(crate) use denied::DeniedContent;
pub(crate) use health::HealthPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use crate::components::layout::AdminLayout;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

/// Route path constants shared by links, guards, and navigation effects.
pub(crate) mod paths {
    pub const DASHBOARD: &str = "/";
    /// Fixed login path the gate redirects to.
    pub const AUTH: &str = "/auth";
    pub const ADMIN: &str = "/admin";
    pub const ADMIN_USERS: &str = "/admin/users";

    pub fn admin_user_detail(id: &str) -> String {
        format!("{ADMIN_USERS}/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/auth") view=LoginPage />
            <Route path=path!("/health") view=HealthPage />
            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("") view=AdminOverviewPage />
                <Route path=path!("users") view=AdminUsersPage />
                <Route path=path!("users/:id") view=UserDetailPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
