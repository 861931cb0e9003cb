use crate::components::Modal;
use crate::hooks::use_resource_list;
use crate::model::{Activity, DialogState, Named};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Logged exercise sessions: table plus view, edit and delete dialogs.
#[function_component(ActivitiesView)]
pub fn activities_view() -> Html {
    let handle = use_resource_list::<Activity>();
    let dialog = use_state(DialogState::<Activity>::default);

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(DialogState::Closed))
    };

    let open_view = {
        let dialog = dialog.clone();
        Callback::from(move |activity: Activity| dialog.set(DialogState::Viewing(activity)))
    };

    let open_edit = {
        let dialog = dialog.clone();
        Callback::from(move |activity: Activity| dialog.set(DialogState::Editing(activity)))
    };

    let open_delete = {
        let dialog = dialog.clone();
        Callback::from(move |activity: Activity| dialog.set(DialogState::Confirming(activity)))
    };

    let on_submit = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Editing(activity) = &*dialog {
                handle.update(activity.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let on_confirm_delete = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |_| {
            if let DialogState::Confirming(activity) = &*dialog {
                handle.remove(activity.id.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let edit_user = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(activity) = &*dialog {
                let mut activity = activity.clone();
                activity.user = Some(input.value());
                dialog.set(DialogState::Editing(activity));
            }
        })
    };

    let edit_activity = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(activity) = &*dialog {
                let mut activity = activity.clone();
                activity.activity = Some(input.value());
                dialog.set(DialogState::Editing(activity));
            }
        })
    };

    let edit_duration = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(activity) = &*dialog {
                let mut activity = activity.clone();
                activity.duration = input.value().parse().ok();
                dialog.set(DialogState::Editing(activity));
            }
        })
    };

    html! {
        <div class="fitboard-activities">
            <h2 class="fitboard-activities__title">{"Activities"}</h2>
            <table class="fitboard-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"User"}</th>
                        <th>{"Activity"}</th>
                        <th>{"Duration"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for handle.roster().records().iter().enumerate().map(|(index, activity)| {
                        let activity = activity.clone();
                        let row_id = if activity.id.is_empty() {
                            (index + 1).to_string()
                        } else {
                            activity.id.clone()
                        };
                        let on_view = {
                            let open_view = open_view.clone();
                            let activity = activity.clone();
                            Callback::from(move |_| open_view.emit(activity.clone()))
                        };
                        let on_edit = {
                            let open_edit = open_edit.clone();
                            let activity = activity.clone();
                            Callback::from(move |_| open_edit.emit(activity.clone()))
                        };
                        let on_delete = {
                            let open_delete = open_delete.clone();
                            let activity = activity.clone();
                            Callback::from(move |_| open_delete.emit(activity.clone()))
                        };

                        html! {
                            <tr key={row_id.clone()}>
                                <td>{row_id.clone()}</td>
                                <td>{activity.user_label()}</td>
                                <td>{activity.name()}</td>
                                <td>{activity.duration_label()}</td>
                                <td class="fitboard-table__actions">
                                    <button class="fitboard-button fitboard-button--view" onclick={on_view}>{"View"}</button>
                                    <button class="fitboard-button fitboard-button--edit" onclick={on_edit}>{"Edit"}</button>
                                    <button class="fitboard-button fitboard-button--delete" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            {match &*dialog {
                DialogState::Viewing(activity) => html! {
                    <Modal title="Activity Details" on_close={close.clone()}>
                        <p><strong>{"User: "}</strong>{activity.user_label()}</p>
                        <p><strong>{"Activity: "}</strong>{activity.name()}</p>
                        <p><strong>{"Duration: "}</strong>{activity.duration_label()}</p>
                        <p><strong>{"ID: "}</strong>{&activity.id}</p>
                    </Modal>
                },
                DialogState::Editing(activity) => html! {
                    <Modal title="Edit Activity" on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={on_submit.clone()}>
                            <label class="fitboard-form__label">{"User"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={activity.user.clone().unwrap_or_default()}
                                    oninput={edit_user.clone()}
                                    required=true
                                />
                            </label>
                            <label class="fitboard-form__label">{"Activity"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={activity.activity.clone().unwrap_or_default()}
                                    oninput={edit_activity.clone()}
                                    required=true
                                />
                            </label>
                            <label class="fitboard-form__label">{"Duration (minutes)"}
                                <input
                                    class="fitboard-form__input"
                                    type="number"
                                    min="1"
                                    value={activity.duration.map(|d| d.to_string()).unwrap_or_default()}
                                    oninput={edit_duration.clone()}
                                    required=true
                                />
                            </label>
                            <button class="fitboard-button fitboard-button--primary" type="submit">
                                {"Save Changes"}
                            </button>
                        </form>
                    </Modal>
                },
                DialogState::Confirming(activity) => html! {
                    <Modal title="Delete Activity" on_close={close.clone()}>
                        <p>{format!("Are you sure you want to delete \"{}\"?", activity.name())}</p>
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
                _ => html! {},
            }}
        </div>
    }
}
