use crate::components::Modal;
use crate::hooks::use_resource_list;
use crate::model::{DialogState, LeaderboardEntry, Named, RankBadge};
use gloo::dialogs::alert;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Team standings. Rank badges follow the row position as served, not the
/// point values. The challenge dialog is simulated: it notifies and logs,
/// nothing is sent.
#[function_component(LeaderboardView)]
pub fn leaderboard_view() -> Html {
    let handle = use_resource_list::<LeaderboardEntry>();
    let dialog = use_state(DialogState::<LeaderboardEntry>::default);
    let challenge_message = use_state(String::new);

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(DialogState::Closed))
    };

    let open_view = {
        let dialog = dialog.clone();
        Callback::from(move |entry: LeaderboardEntry| dialog.set(DialogState::Viewing(entry)))
    };

    let open_challenge = {
        let dialog = dialog.clone();
        let challenge_message = challenge_message.clone();
        Callback::from(move |entry: LeaderboardEntry| {
            challenge_message.set(String::new());
            dialog.set(DialogState::Action(entry));
        })
    };

    let edit_message = {
        let challenge_message = challenge_message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            challenge_message.set(input.value());
        })
    };

    let send_challenge = {
        let dialog = dialog.clone();
        let challenge_message = challenge_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let DialogState::Action(entry) = &*dialog {
                log::info!(
                    "challenge for {}: {}",
                    entry.name(),
                    (*challenge_message).clone()
                );
                alert(&format!("Challenge sent to {}!", entry.name()));
                dialog.set(DialogState::Closed);
            }
        })
    };

    html! {
        <div class="fitboard-leaderboard">
            <h2 class="fitboard-leaderboard__title">{"Leaderboard"}</h2>
            <table class="fitboard-table">
                <thead>
                    <tr>
                        <th>{"Rank"}</th>
                        <th>{"Name"}</th>
                        <th>{"Points"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for handle.roster().records().iter().enumerate().map(|(index, entry)| {
                        let entry = entry.clone();
                        let badge = RankBadge::for_position(index);
                        let row_id = if entry.id.is_empty() {
                            (index + 1).to_string()
                        } else {
                            entry.id.clone()
                        };
                        let on_view = {
                            let open_view = open_view.clone();
                            let entry = entry.clone();
                            Callback::from(move |_| open_view.emit(entry.clone()))
                        };
                        let on_challenge = {
                            let open_challenge = open_challenge.clone();
                            let entry = entry.clone();
                            Callback::from(move |_| open_challenge.emit(entry.clone()))
                        };

                        html! {
                            <tr key={row_id}>
                                <td>
                                    <span class={classes!("fitboard-badge", badge.css_class())}>
                                        {badge.label()}
                                    </span>
                                </td>
                                <td>{entry.name()}</td>
                                <td>{entry.points_label()}</td>
                                <td class="fitboard-table__actions">
                                    <button class="fitboard-button fitboard-button--view" onclick={on_view}>{"View Profile"}</button>
                                    <button class="fitboard-button fitboard-button--primary" onclick={on_challenge}>{"Challenge"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>

            {match &*dialog {
                DialogState::Viewing(entry) => html! {
                    <Modal title="Profile" on_close={close.clone()}>
                        <p><strong>{"Name: "}</strong>{entry.name()}</p>
                        <p><strong>{"Points: "}</strong>{entry.points_label()}</p>
                        <p><strong>{"ID: "}</strong>{&entry.id}</p>
                    </Modal>
                },
                DialogState::Action(entry) => html! {
                    <Modal title={format!("Challenge {}", entry.name())} on_close={close.clone()}>
                        <form class="fitboard-form" onsubmit={send_challenge.clone()}>
                            <label class="fitboard-form__label">{"Message"}
                                <input
                                    class="fitboard-form__input"
                                    type="text"
                                    placeholder="Name your challenge"
                                    value={(*challenge_message).clone()}
                                    oninput={edit_message.clone()}
                                    required=true
                                />
                            </label>
                            <button class="fitboard-button fitboard-button--primary" type="submit">
                                {"Send Challenge"}
                            </button>
                        </form>
                    </Modal>
                },
                _ => html! {},
            }}
        </div>
    }
}
