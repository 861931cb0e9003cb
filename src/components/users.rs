use crate::components::Modal;
use crate::hooks::use_resource_list;
use crate::model::{DialogState, User};
use gloo::dialogs::alert;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Registered users: table plus view, edit, delete and message dialogs.
/// Messaging is simulated; it only raises a notification.
#[function_component(UsersView)]
pub fn users_view() -> Html {
    let handle = use_resource_list::<User>();
    let dialog = use_state(DialogState::<User>::default);
    let message_body = use_state(String::new);

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(DialogState::Closed))
    };

    let open_view = {
        let dialog = dialog.clone();
        Callback::from(move |user: User| dialog.set(DialogState::Viewing(user)))
    };

    let open_edit = {
        let dialog = dialog.clone();
        Callback::from(move |user: User| dialog.set(DialogState::Editing(user)))
    };

    let open_delete = {
        let dialog = dialog.clone();
        Callback::from(move |user: User| dialog.set(DialogState::Confirming(user)))
    };

    let open_message = {
        let dialog = dialog.clone();
        let message_body = message_body.clone();
        Callback::from(move |user: User| {
            message_body.set(String::new());
            dialog.set(DialogState::Action(user));
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Editing(user) = &*dialog {
                handle.update(user.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let on_confirm_delete = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |_| {
            if let DialogState::Confirming(user) = &*dialog {
                handle.remove(user.id.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let edit_name = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(user) = &*dialog {
                let mut user = user.clone();
                user.name = Some(input.value());
                dialog.set(DialogState::Editing(user));
            }
        })
    };

    let edit_email = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(user) = &*dialog {
                let mut user = user.clone();
                user.email = Some(input.value());
                dialog.set(DialogState::Editing(user));
            }
        })
    };

    let edit_team = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(user) = &*dialog {
                let mut user = user.clone();
                user.team = Some(input.value());
                dialog.set(DialogState::Editing(user));
            }
        })
    };

    let edit_message = {
        let message_body = message_body.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message_body.set(input.value());
        })
    };

    let send_message = {
        let dialog = dialog.clone();
        let message_body = message_body.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Action(user) = &*dialog {
                log::info!(
                    "message for {}: {}",
                    user.full_name(),
                    (*message_body).clone()
                );
                alert(&format!("Message sent to {}!", user.full_name()));
                dialog.set(DialogState::Closed);
            }
        })
    };

    html! {
        <div class="fitboard-users">
            <h2 class="fitboard-users__title">{"Users"}</h2>
            <table class="fitboard-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Team"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for handle.roster().records().iter().enumerate().map(|(index, user)| {
                        let user = user.clone();
                        let row_id = if user.id.is_empty() {
                            (index + 1).to_string()
                        } else {
                            user.id.clone()
                        };
                        let on_view = {
                            let open_view = open_view.clone();
                            let user = user.clone();
                            Callback::from(move |_| open_view.emit(user.clone()))
                        };
                        let on_edit = {
                            let open_edit = open_edit.clone();
                            let user = user.clone();
                            Callback::from(move |_| open_edit.emit(user.clone()))
                        };
                        let on_delete = {
                            let open_delete = open_delete.clone();
                            let user = user.clone();
                            Callback::from(move |_| open_delete.emit(user.clone()))
                        };
                        let on_message = {
                            let open_message = open_message.clone();
                            let user = user.clone();
                            Callback::from(move |_| open_message.emit(user.clone()))
                        };

                        html! {
                            <tr key={row_id.clone()}>
                                <td>{row_id.clone()}</td>
                                <td>{user.full_name()}</td>
                                <td>{user.email_label()}</td>
                                <td>
                                    <span class={classes!("fitboard-badge", user.team_css_class())}>
                                        {user.team_label()}
                                    </span>
                                </td>
                                <td class="fitboard-table__actions">
                                    <button class="fitboard-button fitboard-button--view" onclick={on_view}>{"View Profile"}</button>
                                    <button class="fitboard-button fitboard-button--edit" onclick={on_edit}>{"Edit"}</button>
                                    <button class="fitboard-button fitboard-button--delete" onclick={on_delete}>{"Delete"}</button>
                                    <button class="fitboard-button fitboard-button--primary" onclick={on_message}>{"Message"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            {match &*dialog {
                DialogState::Viewing(user) => html! {
                    <Modal title="User Profile" on_close={close.clone()}>
                        <p><strong>{"Name: "}</strong>{user.full_name()}</p>
                        <p><strong>{"Email: "}</strong>{user.email_label()}</p>
                        <p><strong>{"Team: "}</strong>{user.team_label()}</p>
                        <p><strong>{"ID: "}</strong>{&user.id}</p>
                    </Modal>
                },
                DialogState::Editing(user) => html! {
                    <Modal title="Edit User" on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={on_submit.clone()}>
                            <label class="fitboard-form__label">{"Name"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={user.name.clone().unwrap_or_default()}
                                    oninput={edit_name.clone()}
                                    required=true
                                />
                            </label>
                            <label class="fitboard-form__label">{"Email"}
                                <input
                                    class="fitboard-form__input"
                                    type="email"
                                    value={user.email.clone().unwrap_or_default()}
                                    oninput={edit_email.clone()}
                                    required=true
                                />
                            </label>
                            <label class="fitboard-form__label">{"Team"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={user.team.clone().unwrap_or_default()}
                                    oninput={edit_team.clone()}
                                    required=true
                                />
                            </label>
                            <button class="fitboard-button fitboard-button--primary" type="submit">
                                {"Save Changes"}
                            </button>
                        </form>
                    </Modal>
                },
                DialogState::Confirming(user) => html! {
                    <Modal title="Delete User" on_close={close.clone()}>
                        <p>{format!("Are you sure you want to delete \"{}\"?", user.full_name())}</p>
                        <div class="fitboard-modal__footer">
                            <button
                                class="fitboard-button"
                                onclick={{
                                    let close = close.clone();
                                    Callback::from(move |_| close.emit(()))
                                }}
                            >
                                {"Cancel"}
                            </button>
                            <button class="fitboard-button fitboard-button--delete" onclick={on_confirm_delete.clone()}>
                                {"Delete"}
                            </button>
                        </div>
                    </Modal>
                },
                DialogState::Action(user) => html! {
                    <Modal title={format!("Message {}", user.full_name())} on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={send_message.clone()}>
                            <label class="fitboard-form__label">{"Message"}
                                <textarea
                                    class="fitboard-form__input"
                                    rows="4"
                                    value={(*message_body).clone()}
                                    oninput={edit_message.clone()}
                                    required=true
                                />
                            </label>
                            <button class="fitboard-button fitboard-button--primary" type="submit">
                                {"Send Message"}
                            </button>
                        </form>
                    </Modal>
                },
                DialogState::Closed => html! {},
            }}
        </div>
    }
}
