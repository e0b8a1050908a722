//! Login & Signup Forms

use leptos::prelude::*;
use leptos::task::spawn_local;

use library_core::{ClientError, FormFields};

use crate::commands;
use crate::components::transient_message::{ErrorMessage, TransientMessage};

/// Flat form payload from `(field name, value)` pairs
pub fn form_fields(pairs: &[(&str, String)]) -> FormFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = TransientMessage::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = form_fields(&[("email", email.get()), ("password", password.get())]);

        spawn_local(async move {
            match commands::controller().login(&fields).await {
                Ok(next) => {
                    web_sys::console::log_1(&"[LOGIN] Signed in".into());
                    commands::navigate(next);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOGIN] {}", e).into());
                    error.show(e.user_message());
                }
            }
        });
    };

    view! {
        <main class="form-signin w-100 m-auto">
            <form id="loginForm" on:submit=submit>
                <h1 class="h3 mb-3 fw-normal">"Please sign in"</h1>
                <div class="form-floating">
                    <input type="email" class="form-control" id="email" name="email" placeholder="name@example.com" bind:value=email />
                    <label for="email">"Email address"</label>
                </div>
                <div class="form-floating">
                    <input type="password" class="form-control" id="password" name="password" placeholder="Password" bind:value=password />
                    <label for="password">"Password"</label>
                </div>
                <button class="btn btn-primary w-100 py-2" type="submit">"Sign in"</button>
                <ErrorMessage message=error />
                <p class="mt-3">
                    "No account? " <a href=library_core::Page::Register.href()>"Register"</a>
                </p>
            </form>
        </main>
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let account = RwSignal::new(String::from("user"));
    let error = TransientMessage::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = form_fields(&[
            ("username", username.get()),
            ("email", email.get()),
            ("password", password.get()),
            ("city", city.get()),
            ("age", age.get()),
            ("account", account.get()),
        ]);

        spawn_local(async move {
            let ctl = commands::controller();
            match ctl.signup(fields, || commands::prompt("Enter Admin Password:")).await {
                Ok(next) => commands::navigate(next),
                Err(ClientError::Cancelled) => {
                    web_sys::console::log_1(&"[SIGNUP] Admin password prompt dismissed".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SIGNUP] {}", e).into());
                    error.show(e.user_message());
                }
            }
        });
    };

    view! {
        <main class="form-signin w-100 m-auto">
            <form id="signupForm" on:submit=submit>
                <h1 class="h3 mb-3 fw-normal">"Create an account"</h1>
                <input type="text" class="form-control" name="username" placeholder="Username" bind:value=username />
                <input type="email" class="form-control" name="email" placeholder="Email" bind:value=email />
                <input type="password" class="form-control" name="password" placeholder="Password" bind:value=password />
                <input type="text" class="form-control" name="city" placeholder="City" bind:value=city />
                <input type="number" class="form-control" name="age" placeholder="Age" bind:value=age />
                <select class="form-select" name="account" bind:value=account>
                    <option value="user">"User"</option>
                    <option value="admin">"Admin"</option>
                </select>
                <button class="btn btn-primary w-100 py-2" type="submit">"Sign up"</button>
                <ErrorMessage message=error />
                <p class="mt-3">
                    "Already registered? " <a href=library_core::Page::Login.href()>"Sign in"</a>
                </p>
            </form>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields() {
        let fields = form_fields(&[("email", "a@x.io".to_string()), ("password", String::new())]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["email"], "a@x.io");
        assert_eq!(fields["password"], "");
    }
}
