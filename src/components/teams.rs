use crate::components::Modal;
use crate::hooks::use_resource_list;
use crate::model::{DialogState, Named, Team};
use gloo::dialogs::alert;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Team roster: table plus view, edit, delete and join dialogs. Joining is
/// simulated; it only raises a notification.
#[function_component(TeamsView)]
pub fn teams_view() -> Html {
    let handle = use_resource_list::<Team>();
    let dialog = use_state(DialogState::<Team>::default);
    let introduction = use_state(String::new);

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(DialogState::Closed))
    };

    let open_view = {
        let dialog = dialog.clone();
        Callback::from(move |team: Team| dialog.set(DialogState::Viewing(team)))
    };

    let open_edit = {
        let dialog = dialog.clone();
        Callback::from(move |team: Team| dialog.set(DialogState::Editing(team)))
    };

    let open_delete = {
        let dialog = dialog.clone();
        Callback::from(move |team: Team| dialog.set(DialogState::Confirming(team)))
    };

    let open_join = {
        let dialog = dialog.clone();
        let introduction = introduction.clone();
        Callback::from(move |team: Team| {
            introduction.set(String::new());
            dialog.set(DialogState::Action(team));
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Editing(team) = &*dialog {
                handle.update(team.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let on_confirm_delete = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |_| {
            if let DialogState::Confirming(team) = &*dialog {
                handle.remove(team.id.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let edit_name = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(team) = &*dialog {
                let mut team = team.clone();
                team.name = Some(input.value());
                dialog.set(DialogState::Editing(team));
            }
        })
    };

    let edit_description = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(team) = &*dialog {
                let mut team = team.clone();
                team.description = Some(input.value());
                dialog.set(DialogState::Editing(team));
            }
        })
    };

    let edit_introduction = {
        let introduction = introduction.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            introduction.set(input.value());
        })
    };

    let send_join = {
        let dialog = dialog.clone();
        let introduction = introduction.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Action(team) = &*dialog {
                log::info!("join request for {}: {}", team.name(), (*introduction).clone());
                alert(&format!("Joined team {}!", team.name()));
                dialog.set(DialogState::Closed);
            }
        })
    };

    html! {
        <div class="fitboard-teams">
            <h2 class="fitboard-teams__title">{"Teams"}</h2>
            <table class="fitboard-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Team Name"}</th>
                        <th>{"Description"}</th>
                        <th>{"Members"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for handle.roster().records().iter().enumerate().map(|(index, team)| {
                        let team = team.clone();
                        let row_id = if team.id.is_empty() {
                            (index + 1).to_string()
                        } else {
                            team.id.clone()
                        };
                        let on_view = {
                            let open_view = open_view.clone();
                            let team = team.clone();
                            Callback::from(move |_| open_view.emit(team.clone()))
                        };
                        let on_edit = {
                            let open_edit = open_edit.clone();
                            let team = team.clone();
                            Callback::from(move |_| open_edit.emit(team.clone()))
                        };
                        let on_delete = {
                            let open_delete = open_delete.clone();
                            let team = team.clone();
                            Callback::from(move |_| open_delete.emit(team.clone()))
                        };
                        let on_join = {
                            let open_join = open_join.clone();
                            let team = team.clone();
                            Callback::from(move |_| open_join.emit(team.clone()))
                        };

                        html! {
                            <tr key={row_id.clone()}>
                                <td>{row_id.clone()}</td>
                                <td>{team.name()}</td>
                                <td>{team.description_label()}</td>
                                <td>{team.member_count_label()}</td>
                                <td class="fitboard-table__actions">
                                    <button class="fitboard-button fitboard-button--view" onclick={on_view}>{"View Team"}</button>
                                    <button class="fitboard-button fitboard-button--edit" onclick={on_edit}>{"Edit"}</button>
                                    <button class="fitboard-button fitboard-button--delete" onclick={on_delete}>{"Delete"}</button>
                                    <button class="fitboard-button fitboard-button--primary" onclick={on_join}>{"Join Team"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            {match &*dialog {
                DialogState::Viewing(team) => html! {
                    <Modal title="Team Details" on_close={close.clone()}>
                        <p><strong>{"Name: "}</strong>{team.name()}</p>
                        <p><strong>{"Description: "}</strong>{team.description_label()}</p>
                        <p><strong>{"Members:"}</strong></p>
                        if team.member_names().is_empty() {
                            <p>{"No members listed"}</p>
                        } else {
                            <ul class="fitboard-teams__members">
                                {for team.member_names().iter().map(|member| html! {
                                    <li key={member.clone()}>{member}</li>
                                })}
                            </ul>
                        }
                    </Modal>
                },
                DialogState::Editing(team) => html! {
                    <Modal title="Edit Team" on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={on_submit.clone()}>
                            <label class="fitboard-form__label">{"Team Name"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={team.name.clone().unwrap_or_default()}
                                    oninput={edit_name.clone()}
                                    required=true
                                />
                            </label>
                            <label class="fitboard-form__label">{"Description"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={team.description.clone().unwrap_or_default()}
                                    oninput={edit_description.clone()}
                                    required=true
                                />
                            </label>
                            <button class="fitboard-button fitboard-button--primary" type="submit">
                                {"Save Changes"}
                            </button>
                        </form>
                    </Modal>
                },
                DialogState::Confirming(team) => html! {
                    <Modal title="Delete Team" on_close={close.clone()}>
                        <p>{format!("Are you sure you want to delete \"{}\"?", team.name())}</p>
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
                DialogState::Action(team) => html! {
                    <Modal title={format!("Join {}", team.name())} on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={send_join.clone()}>
                            <label class="fitboard-form__label">{"Introduce yourself"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    placeholder="Why do you want to join?"
                                    value={(*introduction).clone()}
                                    oninput={edit_introduction.clone()}
                                    required=true
                                />
                            </label>
                            <button class="fitboard-button fitboard-button--primary" type="submit">
                                {"Join"}
                            </button>
                        </form>
                    </Modal>
                },
                DialogState::Closed => html! {},
            }}
        </div>
    }
}
