use crate::components::Modal;
use crate::hooks::use_resource_list;
use crate::model::{DialogState, Named, Workout};
use crate::services::{progress_stream, SessionGuard};
use futures::StreamExt;
use gloo::dialogs::alert;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Assumed session length when a workout carries no duration.
const DEFAULT_WORKOUT_MINUTES: u32 = 30;

/// Suggested workouts: table with a derived difficulty badge, plus view,
/// edit, delete and a live workout session dialog. Session progress tracks
/// real elapsed time and stops when the dialog is closed.
#[function_component(WorkoutsView)]
pub fn workouts_view() -> Html {
    let handle = use_resource_list::<Workout>();
    let dialog = use_state(DialogState::<Workout>::default);
    let progress = use_state(|| 0u8);
    let session = use_mut_ref(SessionGuard::default);

    // Every dialog transition goes through here, so whatever session is
    // ticking stops the moment its dialog is replaced.
    let set_dialog = {
        let dialog = dialog.clone();
        let session = session.clone();
        Callback::from(move |state: DialogState<Workout>| {
            session.borrow_mut().cancel();
            dialog.set(state);
        })
    };

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            // stop the session when the view unmounts
            move || session.borrow_mut().cancel()
        });
    }

    let close = {
        let set_dialog = set_dialog.clone();
        Callback::from(move |_: ()| set_dialog.emit(DialogState::Closed))
    };

    let open_view = {
        let set_dialog = set_dialog.clone();
        Callback::from(move |workout: Workout| set_dialog.emit(DialogState::Viewing(workout)))
    };

    let open_edit = {
        let set_dialog = set_dialog.clone();
        Callback::from(move |workout: Workout| set_dialog.emit(DialogState::Editing(workout)))
    };

    let open_delete = {
        let set_dialog = set_dialog.clone();
        Callback::from(move |workout: Workout| set_dialog.emit(DialogState::Confirming(workout)))
    };

    let start_session = {
        let dialog = dialog.clone();
        let progress = progress.clone();
        let session = session.clone();
        Callback::from(move |workout: Workout| {
            let flag = session.borrow_mut().begin();
            progress.set(0);
            dialog.set(DialogState::Action(workout.clone()));

            let minutes = workout.duration.unwrap_or(DEFAULT_WORKOUT_MINUTES);
            let total = Duration::from_secs(u64::from(minutes) * 60);
            let progress = progress.clone();
            let dialog = dialog.clone();
            spawn_local(async move {
                let stream = progress_stream(total, Duration::from_secs(1));
                futures::pin_mut!(stream);
                while let Some(percent) = stream.next().await {
                    if flag.get() {
                        log::debug!("workout session cancelled at {}%", percent);
                        return;
                    }
                    progress.set(percent);
                    if percent >= 100 {
                        break;
                    }
                }
                if !flag.get() {
                    alert(&format!("{} complete!", workout.name()));
                    dialog.set(DialogState::Closed);
                }
            });
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Editing(workout) = &*dialog {
                handle.update(workout.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let on_confirm_delete = {
        let dialog = dialog.clone();
        let handle = handle.clone();
        Callback::from(move |_| {
            if let DialogState::Confirming(workout) = &*dialog {
                handle.remove(workout.id.clone());
                dialog.set(DialogState::Closed);
            }
        })
    };

    let edit_name = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(workout) = &*dialog {
                let mut workout = workout.clone();
                workout.name = Some(input.value());
                dialog.set(DialogState::Editing(workout));
            }
        })
    };

    let edit_duration = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let DialogState::Editing(workout) = &*dialog {
                let mut workout = workout.clone();
                workout.duration = input.value().parse().ok();
                dialog.set(DialogState::Editing(workout));
            }
        })
    };

    html! {
        <div class="fitboard-workouts">
            <h2 class="fitboard-workouts__title">{"Workouts"}</h2>
            <table class="fitboard-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Workout Name"}</th>
                        <th>{"Difficulty"}</th>
                        <th>{"Duration"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for handle.roster().records().iter().enumerate().map(|(index, workout)| {
                        let workout = workout.clone();
                        let difficulty = workout.difficulty();
                        let row_id = if workout.id.is_empty() {
                            (index + 1).to_string()
                        } else {
                            workout.id.clone()
                        };
                        let on_view = {
                            let open_view = open_view.clone();
                            let workout = workout.clone();
                            Callback::from(move |_| open_view.emit(workout.clone()))
                        };
                        let on_edit = {
                            let open_edit = open_edit.clone();
                            let workout = workout.clone();
                            Callback::from(move |_| open_edit.emit(workout.clone()))
                        };
                        let on_delete = {
                            let open_delete = open_delete.clone();
                            let workout = workout.clone();
                            Callback::from(move |_| open_delete.emit(workout.clone()))
                        };
                        let on_start = {
                            let start_session = start_session.clone();
                            let workout = workout.clone();
                            Callback::from(move |_| start_session.emit(workout.clone()))
                        };

                        html! {
                            <tr key={row_id.clone()}>
                                <td>{row_id.clone()}</td>
                                <td>{workout.name()}</td>
                                <td>
                                    <span class={classes!("fitboard-badge", difficulty.css_class())}>
                                        {difficulty.label()}
                                    </span>
                                </td>
                                <td>{workout.duration_label()}</td>
                                <td class="fitboard-table__actions">
                                    <button class="fitboard-button fitboard-button--primary" onclick={on_start}>{"Start Workout"}</button>
                                    <button class="fitboard-button fitboard-button--view" onclick={on_view}>{"View Details"}</button>
                                    <button class="fitboard-button fitboard-button--edit" onclick={on_edit}>{"Edit"}</button>
                                    <button class="fitboard-button fitboard-button--delete" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            {match &*dialog {
                DialogState::Viewing(workout) => html! {
                    <Modal title="Workout Details" on_close={close.clone()}>
                        <p><strong>{"Name: "}</strong>{workout.name()}</p>
                        <p><strong>{"Difficulty: "}</strong>{workout.difficulty().label()}</p>
                        <p><strong>{"Duration: "}</strong>{workout.duration_label()}</p>
                        <p><strong>{"Suggested for:"}</strong></p>
                        if workout.suggested_for.is_empty() {
                            <p>{"Anyone"}</p>
                        } else {
                            <ul class="fitboard-workouts__suggestions">
                                {for workout.suggested_for.iter().map(|name| html! {
                                    <li key={name.clone()}>{name}</li>
                                })}
                            </ul>
                        }
                    </Modal>
                },
                DialogState::Editing(workout) => html! {
                    <Modal title="Edit Workout" on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={on_submit.clone()}>
                            <label class="fitboard-form__label">{"Workout Name"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    value={workout.name.clone().unwrap_or_default()}
                                    oninput={edit_name.clone()}
                                    required=true
                                />
                            </label>
                            <label class="fitboard-form__label">{"Duration (minutes)"}
                                <input
                                    class="fitboard-form__input"
                                    type="number"
                                    min="1"
                                    value={workout.duration.map(|d| d.to_string()).unwrap_or_default()}
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
                DialogState::Confirming(workout) => html! {
                    <Modal title="Delete Workout" on_close={close.clone()}>
                        <p>{format!("Are you sure you want to delete \"{}\"?", workout.name())}</p>
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
                DialogState::Action(workout) => html! {
                    <Modal title={format!("{} in progress", workout.name())} on_close={close.clone()}>
                        <div class="fitboard-progress">
                            <div
                                class="fitboard-progress__bar"
                                style={format!("width: {}%", *progress)}
                            />
                        </div>
                        <p class="fitboard-progress__label">{format!("{}% complete", *progress)}</p>
                        <button
                            class="fitboard-button"
                            onclick={{
                                let close = close.clone();
                                Callback::from(move |_| close.emit(()))
                            }}
                        >
                            {"Stop Workout"}
                        </button>
                    </Modal>
                },
                DialogState::Closed => html! {},
            }}
        </div>
    }
}
