use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TutorialOverlayProps {
    pub on_start: Callback<()>,
}

#[function_component(TutorialOverlay)]
pub fn tutorial_overlay(props: &TutorialOverlayProps) -> Html {
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let text_style = "font-size:clamp(1rem, 2.5vw, 1.2rem); line-height:1.6; margin-bottom:20px; color:#37474f;";
    html! {
        <div style="position:fixed; inset:0; background-color:rgba(0,0,0,0.6); display:flex; justify-content:center; align-items:center; z-index:1000; backdrop-filter:blur(5px); font-family:'Nunito', sans-serif;">
            <div style="background:white; padding:30px 40px; border-radius:20px; text-align:center; max-width:500px; width:90%; box-shadow:0 10px 30px rgba(0,0,0,0.2); border:2px solid #eee;">
                <h2 style="font-size:clamp(1.8rem, 4vw, 2.2rem); color:#263238; margin-bottom:15px;">{"Como Jogar"}</h2>
                <p style={text_style}>
                    {"O Monstro das Cores está com os sentimentos todos misturados! Ajude-o a entender o que ele está sentindo."}
                </p>
                <p style={text_style}>
                    {"Leia a emoção que o monstro quer sentir. Depois, clique no pote com a cor certa para ajudá-lo!"}
                </p>
                <button class="restart-button" onclick={start_btn}>{"Começar!"}</button>
                <div style="margin-top:12px; font-size:12px; opacity:0.6;">{"Dica: use as teclas 1 a 6 para escolher um pote."}</div>
            </div>
        </div>
    }
}
