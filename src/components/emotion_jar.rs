use crate::model::{Emotion, EmotionId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmotionJarProps {
    pub emotion: &'static Emotion,
    pub disabled: bool,
    /// Shakes the jar after a wrong pick.
    #[prop_or(false)]
    pub is_wrong: bool,
    pub on_pick: Callback<EmotionId>,
}

#[function_component(EmotionJar)]
pub fn emotion_jar(props: &EmotionJarProps) -> Html {
    let e = props.emotion;
    let onclick = {
        let cb = props.on_pick.clone();
        let id = e.id;
        Callback::from(move |_| cb.emit(id))
    };
    html! {
        <button
            {onclick}
            disabled={props.disabled}
            class={classes!("jar-button", props.is_wrong.then_some("shake-animation"))}
            aria-label={format!("Pote da cor: {}", e.color_name)}
        >
            <div class="jar-tooltip">{ e.color_name }</div>
            <div class="jar-lid"></div>
            <div class="jar-body" style={format!("--jar-color:{};", e.color)}></div>
        </button>
    }
}
