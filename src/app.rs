use fitboard::prelude::*;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Activities,
        Tab::Leaderboard,
        Tab::Teams,
        Tab::Users,
        Tab::Workouts,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Activities => "Activities",
            Tab::Leaderboard => "Leaderboard",
            Tab::Teams => "Teams",
            Tab::Users => "Users",
            Tab::Workouts => "Workouts",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let active = use_state(|| Tab::Activities);

    html! {
        <div class="fitboard-app">
            <header class="fitboard-app__header">
                <h1 class="fitboard-app__title">{"Fitboard"}</h1>
                <nav class="fitboard-app__nav">
                    {for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_| active.set(tab))
                        };
                        let class = if *active == tab {
                            classes!("fitboard-app__tab", "active")
                        } else {
                            classes!("fitboard-app__tab")
                        };
                        html! {
                            <button {class} {onclick}>{tab.label()}</button>
                        }
                    })}
                </nav>
            </header>
            <main class="fitboard-app__content">
                {match *active {
                    Tab::Activities => html! { <ActivitiesView /> },
                    Tab::Leaderboard => html! { <LeaderboardView /> },
                    Tab::Teams => html! { <TeamsView /> },
                    Tab::Users => html! { <UsersView /> },
                    Tab::Workouts => html! { <WorkoutsView /> },
                }}
            </main>
        </div>
    }
}
