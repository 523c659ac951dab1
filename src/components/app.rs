use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    emotion_jar::EmotionJar, game_over_panel::GameOverPanel, instruction_line::InstructionLine,
    monster::Monster, styles::STYLESHEET, tutorial_overlay::TutorialOverlay,
};
use crate::config::GameConfig;
use crate::model::{EMOTIONS, EmotionId, GameAction, GameState};
use crate::rng::browser_seed;
use crate::state::{KeyCommand, TransitionTimer};

const TITLE: &str = "O Monstro das Cores";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::load());
    let game = {
        let config = config.clone();
        use_reducer(move || {
            if config.tutorial_seen() {
                GameState::started(browser_seed())
            } else {
                GameState::new()
            }
        })
    };
    let timer = use_mut_ref(TransitionTimer::default);
    // keyboard listener is registered once; it reads the latest handle from here
    let game_ref = use_mut_ref(|| game.clone());
    *game_ref.borrow_mut() = game.clone();

    // Schedule the timed transition for this round. Any state change runs the
    // cleanup first, so a timer from an older round never fires.
    {
        let game = game.clone();
        let config = config.clone();
        let timer = timer.clone();
        use_effect_with((game.round, game.phase), move |_| {
            if let Some(pending) = game.pending_transition() {
                let ms = config.delay_ms(pending.delay);
                debug!(delay = ?pending.delay, ms, round = game.round, "scheduling transition");
                let dispatcher = game.dispatcher();
                timer
                    .borrow_mut()
                    .schedule(ms, move || dispatcher.dispatch(pending.action));
            }
            move || timer.borrow_mut().cancel()
        });
    }

    let on_start = {
        let game = game.clone();
        let config = config.clone();
        Callback::from(move |_: ()| {
            config.mark_tutorial_seen();
            game.dispatch(GameAction::DismissTutorial { seed: browser_seed() });
        })
    };
    let on_replay = {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::Replay { seed: browser_seed() }))
    };
    let on_pick = {
        let game = game.clone();
        Callback::from(move |emotion: EmotionId| game.dispatch(GameAction::Guess { emotion }))
    };

    // Keyboard: 1-6 pick a jar, Enter/Space start or replay
    {
        let game_ref = game_ref.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let Some(cmd) = KeyCommand::from_key(&e.key()) else {
                    return;
                };
                let handle = game_ref.borrow().clone();
                match cmd {
                    KeyCommand::Jar(emotion) => handle.dispatch(GameAction::Guess { emotion }),
                    KeyCommand::Confirm => {
                        if handle.tutorial_visible() {
                            e.prevent_default();
                            config.mark_tutorial_seen();
                            handle.dispatch(GameAction::DismissTutorial { seed: browser_seed() });
                        } else if handle.is_game_over() {
                            e.prevent_default();
                            handle.dispatch(GameAction::Replay { seed: browser_seed() });
                        }
                    }
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            if let Some(win) = &window {
                if let Err(err) = win
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                {
                    warn!(?err, "could not register keyboard shortcuts");
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    if game.tutorial_visible() {
        return html! {
            <>
                <style>{ STYLESHEET }</style>
                <TutorialOverlay on_start={on_start} />
            </>
        };
    }

    let interaction = if game.is_game_over() {
        html! {
            <GameOverPanel
                message={game.feedback().unwrap_or_default()}
                mistakes={game.mistakes}
                on_replay={on_replay}
            />
        }
    } else if let Some(target) = game.target() {
        let disabled = game.jars_disabled();
        let wrong = game.wrong_guess();
        html! {
            <>
                <InstructionLine
                    feedback={game.feedback()}
                    target={target}
                    wrong={wrong.is_some()}
                />
                <div style="display:flex; flex-wrap:wrap; justify-content:center; gap:20px;">
                    { for EMOTIONS.iter().map(|e| html! {
                        <EmotionJar
                            key={e.id.as_str()}
                            emotion={e}
                            disabled={disabled}
                            is_wrong={wrong == Some(e.id)}
                            on_pick={on_pick.clone()}
                        />
                    }) }
                </div>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <main style="font-family:'Nunito', sans-serif; display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100vh; background:linear-gradient(135deg, #e0f7fa 0%, #f3e5f5 100%); color:#37474f; text-align:center; padding:20px; box-sizing:border-box;">
            <style>{ STYLESHEET }</style>
            <h1 style="font-size:clamp(2rem, 5vw, 3rem); color:#263238; margin-bottom:20px; text-shadow:0 2px 4px rgba(0,0,0,0.05);">{ TITLE }</h1>
            <div class="game-area-layout" style="padding:30px; border-radius:24px; width:100%; max-width:800px; background:rgba(255,255,255,0.6); backdrop-filter:blur(10px); border:1px solid rgba(255,255,255,0.2); box-shadow:0 10px 30px rgba(0,0,0,0.1);">
                <div class="monster-container-layout" style="min-height:250px; position:relative; display:flex; justify-content:center; align-items:center;">
                    <Monster glyph={game.monster_glyph()} animation={game.monster_animation()} />
                </div>
                <div class="interaction-area-layout">
                    { interaction }
                </div>
            </div>
        </main>
    }
}
