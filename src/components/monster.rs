use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MonsterProps {
    pub glyph: &'static str,
    /// `monster-<id>` class while an emotion is shown, empty when idle.
    pub animation: String,
}

#[function_component(Monster)]
pub fn monster(props: &MonsterProps) -> Html {
    html! {
        <div
            class={props.animation.clone()}
            role="img"
            aria-label="Monstro das Cores"
            style="font-size:clamp(120px, 30vw, 150px); line-height:1; width:250px; height:250px; display:flex; align-items:center; justify-content:center; transition:transform 0.3s ease-in-out; filter:drop-shadow(0 4px 8px rgba(0,0,0,0.15));"
        >
            { props.glyph }
        </div>
    }
}
