use super::LibraryController;
use crate::api::Transport;
use crate::domain::ClientResult;
use crate::forms::{FormFields, SignupForm};
use crate::page::Page;
use crate::session::SessionStore;

impl<T: Transport, S: SessionStore> LibraryController<T, S> {
    /// Submit credentials, persist the token, return the page to open
    pub async fn login(&self, fields: &FormFields) -> ClientResult<Page> {
        let token = self.client.login(fields).await?;
        self.session.store(&token);
        Ok(Page::Index)
    }

    /// Register an account. Admin signups ask for the admin password and
    /// send nothing if the prompt is dismissed.
    pub async fn signup<P>(&self, fields: FormFields, prompt_admin_password: P) -> ClientResult<Page>
    where
        P: FnOnce() -> Option<String>,
    {
        let form = SignupForm::prepare(fields, prompt_admin_password)?;
        self.client.signup(&form).await?;
        Ok(Page::Login)
    }

    pub fn logout(&self) -> Page {
        self.session.clear();
        Page::Login
    }

    /// Redirect target when `page` needs a session and there is none.
    /// Presence is all that is checked; expiry is the server's business.
    pub fn guard(&self, page: Page) -> Option<Page> {
        (page.requires_session() && self.token().is_none()).then_some(Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{controller, signed_in, transport};
    use crate::api::{Body, Method};
    use crate::domain::ClientError;
    use crate::forms::FormFields;
    use crate::page::Page;
    use crate::session::{MemorySession, SessionStore};
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let ctl = controller(MemorySession::new());
        transport(&ctl).respond(200, json!({ "message": "Login successful", "access_token": "abc123" }));

        let next = ctl
            .login(&fields(&[("email", "a@x.io"), ("password", "pw")]))
            .await
            .expect("login failed");

        assert_eq!(next, Page::Index);
        assert_eq!(ctl.session().token().unwrap().as_str(), "abc123");

        let sent = transport(&ctl).requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body, Body::Json(json!({ "email": "a@x.io", "password": "pw" })));
    }

    #[tokio::test]
    async fn test_login_failure_keeps_session_empty() {
        let ctl = controller(MemorySession::new());
        transport(&ctl).respond(401, json!({ "error": "Invalid credentials" }));

        let err = ctl.login(&fields(&[("email", "a@x.io")])).await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(ctl.session().token().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_admin_signup_sends_nothing() {
        let ctl = controller(MemorySession::new());
        let err = ctl.signup(fields(&[("account", "admin")]), || None).await.unwrap_err();

        assert_eq!(err, ClientError::Cancelled);
        assert!(transport(&ctl).requests().is_empty());
    }

    #[tokio::test]
    async fn test_signup_leads_to_login() {
        let ctl = controller(MemorySession::new());
        transport(&ctl).respond(201, json!({ "message": "User created successfully" }));

        let next = ctl
            .signup(fields(&[("account", "admin"), ("email", "a@x.io")]), || Some("admin".into()))
            .await
            .expect("signup failed");

        assert_eq!(next, Page::Login);
        assert_eq!(transport(&ctl).calls(), ["POST /signup"]);
        assert!(!transport(&ctl).requests()[0].with_credentials);
    }

    #[test]
    fn test_logout_and_guard() {
        let ctl = signed_in();
        assert_eq!(ctl.guard(Page::Index), None);

        assert_eq!(ctl.logout(), Page::Login);
        assert_eq!(ctl.guard(Page::Index), Some(Page::Login));
        assert_eq!(ctl.guard(Page::ManageBooks), None);
    }
}
