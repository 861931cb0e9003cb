use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Shared dialog chrome: backdrop, title bar with a close button, body.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fitboard-modal">
            <div class="fitboard-modal__dialog">
                <div class="fitboard-modal__header">
                    <h3 class="fitboard-modal__title">{&props.title}</h3>
                    <button class="fitboard-modal__close" {onclick}>{"\u{00d7}"}</button>
                </div>
                <div class="fitboard-modal__body">
                    {for props.children.iter()}
                </div>
            </div>
        </div>
    }
}
