use crate::model::Emotion;
use yew::prelude::*;

pub const PROMPT: &str = "Ajude o monstro a descobrir o que ele sente. Ele quer sentir...";
const NEUTRAL_COLOR: &str = "#37474f";
const WRONG_COLOR: &str = "#e53935";

#[derive(Properties, PartialEq, Clone)]
pub struct InstructionLineProps {
    pub feedback: Option<&'static str>,
    pub target: &'static Emotion,
    pub wrong: bool,
}

/// Leading text, highlighted suffix and its color.
fn parts(
    feedback: Option<&'static str>,
    target: &Emotion,
    wrong: bool,
) -> (&'static str, String, &'static str) {
    match feedback {
        None => (PROMPT, format!(" {}", target.name), NEUTRAL_COLOR),
        Some(text) if wrong => (text, String::new(), WRONG_COLOR),
        Some(text) => (text, format!(" {}!", target.name), target.color),
    }
}

#[function_component(InstructionLine)]
pub fn instruction_line(props: &InstructionLineProps) -> Html {
    let (text, suffix, color) = parts(props.feedback, props.target, props.wrong);
    html! {
        <p style="font-size:clamp(1.1rem, 3vw, 1.5rem); margin:0 0 25px 0; min-height:50px; font-weight:400;">
            { text }
            <strong style={format!("color:{};", color)}>{ suffix }</strong>
        </p>
    }
}
