//! Customers Table
//!
//! Admin view of registered users. Members get a 403 from the server,
//! which is only logged.

use leptos::prelude::*;
use leptos::task::spawn_local;

use library_core::{ClientError, Customer, UserId};

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_set_customers, use_app_store, AppStateStoreFields};

#[component]
pub fn CustomersTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match commands::controller().list_customers().await {
                Ok(customers) => {
                    web_sys::console::log_1(&format!("[CUSTOMERS] Loaded {} customers", customers.len()).into());
                    store_set_customers(&store, customers);
                }
                Err(e) => web_sys::console::error_1(&format!("[CUSTOMERS] {}", e).into()),
            }
        });
    });

    let delete_customer = move |id: UserId| {
        spawn_local(async move {
            let ctl = commands::controller();
            match ctl.delete_customer(id, || commands::confirm("Are you sure you want to delete this customer?")).await {
                Ok(()) => ctx.reload(),
                Err(ClientError::Cancelled) => {}
                Err(e) => web_sys::console::error_1(&format!("[CUSTOMERS] Failed to delete {}: {}", id, e).into()),
            }
        });
    };

    let rows = move || {
        store.customers().get()
            .into_iter()
            .map(|customer: Customer| {
                let id = customer.id;
                let is_admin = customer.role().is_admin();
                view! {
                    <tr data-user-id=id.to_string()>
                        <td>{id}</td>
                        <td>{customer.username}</td>
                        <td>{customer.email}</td>
                        <td>{customer.city}</td>
                        <td>{customer.age.map(|age| age.to_string()).unwrap_or_default()}</td>
                        <td class:fw-bold=is_admin>{customer.account}</td>
                        <td>
                            <button type="button" class="btn btn-sm btn-outline-danger" on:click=move |_| delete_customer(id)>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <main class="container my-4">
            <h2>"Customers"</h2>
            <table id="customersTable" class="table table-striped">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"City"</th>
                        <th>"Age"</th>
                        <th>"Account"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </main>
    }
}
