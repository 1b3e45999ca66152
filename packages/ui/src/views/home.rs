use dioxus::prelude::*;
use store::{ApiMode, UserInfo};

use crate::components::{Button, ButtonVariant, PageHeader};
use crate::icons::{FaListUl, FaPlus, FaRightFromBracket, FaUsers};
use crate::session::use_app;
use crate::Icon;

/// Header title and subtitle for the signed-in user.
fn greeting(user: Option<&UserInfo>) -> (String, Option<String>) {
    match user {
        Some(user) => (
            format!("Hello, {}", user.display_name()),
            Some(format!("{} · {}", user.role.label(), user.email)),
        ),
        None => ("Hello".to_string(), None),
    }
}

/// Landing page after sign-in.
#[component]
pub fn HomeView(
    on_report_list: EventHandler<()>,
    on_report_create: EventHandler<()>,
    on_supervisor: EventHandler<()>,
    /// Called after the full logout, to go to the login page.
    on_logged_out: EventHandler<()>,
) -> Element {
    let app = use_app();
    let user = app.user();

    // Logout stays reachable even if the stored profile is gone
    let (title, subtitle) = greeting(user.as_ref());
    let reviews_team = user.as_ref().is_some_and(|u| u.role.can_review_team());
    // Development builds show which backend is answering
    let mode = cfg!(debug_assertions).then(|| app.api.read().mode());

    rsx! {
        div {
            class: "page",
            PageHeader {
                title,
                subtitle,
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        app.logout();
                        on_logged_out.call(());
                    },
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    " Log out"
                }
            }
            {match mode {
                Some(ApiMode::Mock) => rsx! {
                    p { class: "dev-mode", "Mock API: data lives in memory and resets on reload." }
                },
                Some(ApiMode::Http) => rsx! {
                    p { class: "dev-mode", "Real API" }
                },
                None => rsx! {},
            }}
            div {
                class: "home-grid",
                button {
                    class: "home-tile",
                    onclick: move |_| on_report_list.call(()),
                    Icon { icon: FaListUl, width: 28, height: 28 }
                    h2 { "My reports" }
                    p { class: "muted", "Browse, search and manage your daily reports." }
                }
                button {
                    class: "home-tile",
                    onclick: move |_| on_report_create.call(()),
                    Icon { icon: FaPlus, width: 28, height: 28 }
                    h2 { "Write today's report" }
                    p { class: "muted", "Start a new report as a draft or submit it directly." }
                }
                if reviews_team {
                    button {
                        class: "home-tile",
                        onclick: move |_| on_supervisor.call(()),
                        Icon { icon: FaUsers, width: 28, height: 28 }
                        h2 { "Team reports" }
                        p { class: "muted", "Review the reports written by your team." }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::UserRole;

    use super::*;

    #[test]
    fn greets_by_display_name_with_role() {
        let user = UserInfo {
            id: "2".to_string(),
            username: "manager".to_string(),
            email: "manager@example.com".to_string(),
            role: UserRole::Supervisor,
            display_name: Some("Ichiro Suzuki".to_string()),
        };
        let (title, subtitle) = greeting(Some(&user));
        assert_eq!(title, "Hello, Ichiro Suzuki");
        let subtitle = subtitle.unwrap();
        assert!(subtitle.ends_with("manager@example.com"));
        assert!(subtitle.starts_with(UserRole::Supervisor.label()));
    }

    #[test]
    fn missing_profile_still_gets_a_header() {
        assert_eq!(greeting(None), ("Hello".to_string(), None));
    }
}
