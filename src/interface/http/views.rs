use askama::Template;
use axum::response::Html;

use crate::{
    application::dto::UserPageResponse,
    core::UserRecord,
    interface::http::problem::{ApiProblem, ApiResult},
};

pub struct PageLink {
    pub number: u64,
    pub current: bool,
}

/// List view: one page of users with links to every page.
#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate<'a> {
    pub users: &'a [UserRecord],
    pub page: u64,
    pub links: Vec<PageLink>,
}

impl<'a> UsersTemplate<'a> {
    pub fn new(data: &'a UserPageResponse) -> Self {
        let links = (1..=data.pages)
            .map(|number| PageLink {
                number,
                current: number == data.page,
            })
            .collect();

        Self {
            users: &data.users,
            page: data.page,
            links,
        }
    }
}

/// Detail view. `user` is `None` when the id is unknown.
#[derive(Template)]
#[template(path = "user.html")]
pub struct UserTemplate<'a> {
    pub user: Option<&'a UserRecord>,
    pub requested_id: &'a str,
    pub back_page: i64,
}

#[derive(Template)]
#[template(path = "create_user.html")]
pub struct CreateUserTemplate {
    pub heading: &'static str,
}

impl Default for CreateUserTemplate {
    fn default() -> Self {
        Self {
            heading: "New user",
        }
    }
}

pub fn render<T: Template>(template: &T) -> ApiResult<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|err| ApiProblem::internal(format!("failed to render view: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed_users;

    #[test]
    fn test_list_view_marks_current_page() {
        let data = UserPageResponse {
            users: seed_users().into_iter().take(3).collect(),
            pages: 2,
            page: 1,
        };

        let html = render(&UsersTemplate::new(&data)).unwrap().0;
        assert!(html.contains("George Bluth"));
        assert!(html.contains("emma.wong@reqres.in"));
        assert!(!html.contains("Eve Holt"));
        assert!(html.contains(r#"<a class="current" href="/1">1</a>"#));
        assert!(html.contains(r#"<a href="/2">2</a>"#));
    }

    #[test]
    fn test_list_view_percent_encodes_detail_links() {
        let data = UserPageResponse {
            users: vec![UserRecord::new("a/b?c#d", "x@y.z", "Ann", "Lee", "a.jpg")],
            pages: 1,
            page: 1,
        };

        let html = render(&UsersTemplate::new(&data)).unwrap().0;
        assert!(html.contains(r#"href="/users/a%2Fb%3Fc%23d""#));
    }

    #[test]
    fn test_empty_list_view() {
        let data = UserPageResponse {
            users: Vec::new(),
            pages: 2,
            page: 9,
        };

        let html = render(&UsersTemplate::new(&data)).unwrap().0;
        assert!(html.contains("No users on page 9."));
    }

    #[test]
    fn test_detail_view_not_found_indicator() {
        let template = UserTemplate {
            user: None,
            requested_id: "42",
            back_page: 2,
        };

        let html = render(&template).unwrap().0;
        assert!(html.contains("User not found"));
        assert!(html.contains("Back to page 2"));
    }

    #[test]
    fn test_detail_view_escapes_fields() {
        let user = UserRecord::new("9", "x@y.z", "<b>Bo</b>", "Lo", "a.jpg");
        let template = UserTemplate {
            user: Some(&user),
            requested_id: "9",
            back_page: 1,
        };

        let html = render(&template).unwrap().0;
        assert!(!html.contains("<b>Bo</b>"));
        assert!(html.contains("&lt;b&gt;Bo"));
    }
}
