//! User management: the list of platform accounts plus the invite form. The
//! admin gate already wrapped this route; the backend still enforces
//! authorization on every call.

use crate::app_lib::AppError;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, EmptyState, FormCard, Spinner};
use crate::features::users::client;
use crate::features::users::types::InviteUserRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = LocalResource::new(move || async move { client::list_users().await });

    let (invite_email, set_invite_email) = signal(String::new());
    let (invite_role, set_invite_role) = signal("member".to_string());
    let (invite_error, set_invite_error) = signal::<Option<AppError>>(None);
    let (invited, set_invited) = signal::<Option<String>>(None);

    let invite_action = Action::new_local(move |request: &InviteUserRequest| {
        let request = request.clone();
        async move { client::invite_user(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = invite_action.value().get() {
            match result {
                Ok(user) => {
                    set_invited.set(Some(user.email));
                    users.refetch();
                }
                Err(err) => set_invite_error.set(Some(err)),
            }
        }
    });

    let on_invite = move |event: SubmitEvent| {
        event.prevent_default();
        set_invite_error.set(None);
        set_invited.set(None);

        let email = invite_email.get_untracked().trim().to_string();
        if email.is_empty() {
            set_invite_error.set(Some(AppError::Config("Email is required.".to_string())));
            return;
        }

        invite_action.dispatch(InviteUserRequest {
            email,
            role: invite_role.get_untracked(),
        });
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Users"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "View and manage all registered platform users."
                </p>
            </div>

            <Suspense fallback=move || {
                view! {
                    <div class="flex justify-center py-12">
                        <Spinner />
                    </div>
                }
                .into_any()
            }>
                {move || match users.get().map(|w| w.take()) {
                    Some(Ok(list)) if list.is_empty() => {
                        view! {
                            <EmptyState
                                icon="group_off"
                                title="No users yet"
                                description="Nobody has been invited to this deployment. Send the first invitation below."
                            />
                        }
                        .into_any()
                    }
                    Some(Ok(list)) => render_users_table(list).into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="flex justify-center py-12">
                                <Spinner />
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Suspense>

            <FormCard
                title="Invite a user"
                description="Sends an invitation email with a one-time signup link."
            >
                <form class="space-y-5" on:submit=on_invite>
                    <div>
                        <label class=Theme::LABEL for="invite-email">
                            "Email"
                        </label>
                        <input
                            id="invite-email"
                            type="email"
                            class=Theme::INPUT
                            placeholder="name@inbox.im"
                            required
                            on:input=move |event| set_invite_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="invite-role">
                            "Role"
                        </label>
                        <select
                            id="invite-role"
                            class=Theme::INPUT
                            on:change=move |event| set_invite_role.set(event_target_value(&event))
                        >
                            <option value="member" selected>"Member"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </div>
                    <Button button_type="submit" disabled=invite_action.pending()>
                        "Send invite"
                    </Button>
                    {move || {
                        invited
                            .get()
                            .map(|email| {
                                view! {
                                    <Alert
                                        kind=AlertKind::Success
                                        message=format!("Invitation sent to {email}.")
                                    />
                                }
                            })
                    }}
                    {move || {
                        invite_error
                            .get()
                            .map(|err| {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            })
                    }}
                </form>
            </FormCard>
        </div>
    }
}

fn render_users_table(list: Vec<crate::features::users::types::UserSummary>) -> impl IntoView {
    view! {
        <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Email"
                        </th>
                        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Role"
                        </th>
                        <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                            "Actions"
                        </th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=move || list.clone()
                        key=|user| user.id.clone()
                        children=|user| {
                            view! {
                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                        <A
                                            href={paths::admin_user_detail(&user.id)}
                                            {..}
                                            class="text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                                        >
                                            {user.email}
                                        </A>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                        {user.role}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                        <A
                                            href={paths::admin_user_detail(&user.id)}
                                            {..}
                                            class="text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                                        >
                                            "View"
                                        </A>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
