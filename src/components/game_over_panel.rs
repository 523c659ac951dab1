use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverPanelProps {
    pub message: &'static str,
    pub mistakes: u32,
    pub on_replay: Callback<()>,
}

fn mistakes_label(n: u32) -> String {
    match n {
        0 => "Nenhum erro!".to_string(),
        1 => "1 erro".to_string(),
        n => format!("{} erros", n),
    }
}

#[function_component]
pub fn GameOverPanel(props: &GameOverPanelProps) -> Html {
    let replay_btn = {
        let cb = props.on_replay.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="padding:20px 0;">
            <p style="font-size:1.5rem; color:#43a047; margin-bottom:8px;">{ props.message }</p>
            <p style="font-size:1rem; opacity:0.75; margin:0 0 20px 0;">{ mistakes_label(props.mistakes) }</p>
            <button class="restart-button" onclick={replay_btn}>{"Jogar Novamente"}</button>
        </div>
    }
}
