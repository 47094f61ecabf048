use std::cell::RefCell;
use std::rc::Rc;

use crate::settings::Preferences;
use crate::utils::*;
use gloo::events::EventListener;
use gloo::utils::window;
use memorder_core as game;
use memorder_core::messages;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    InputChanged(String),
    Start,
    Press(game::ButtonId),
    GiveUp,
    Resize,
    Redraw,
}

fn button_style(button: &game::ButtonEntity) -> String {
    let game::Position { top, left } = button.position();
    format!(
        "top: {}px; left: {}px; background-color: {};",
        top,
        left,
        button.color()
    )
}

#[derive(Properties, Clone, PartialEq)]
struct ButtonProps {
    button: game::ButtonEntity,
    callback: Callback<game::ButtonId>,
}

#[function_component(ButtonView)]
fn button_component(props: &ButtonProps) -> Html {
    let ButtonProps { button, callback } = props.clone();
    let id = button.id();

    let mut class = classes!("game-button");
    if !button.is_clickable() {
        class.push("disable-click-button");
    }
    let style = button_style(&button);
    let label = if button.is_number_visible() {
        id.to_string()
    } else {
        String::new()
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("button {} clicked", id);
        callback.emit(id);
    });

    html! {
        <button {class} {style} {onclick}>{label}</button>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    game: Rc<RefCell<game::GameController>>,
    prefs: Preferences,
    input: String,
    header_ref: NodeRef,
    _resize_listener: EventListener,
}

impl GameView {
    fn create_resize_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&window(), "resize", move |_| link.send_message(Msg::Resize))
    }

    fn measure(&self) -> Option<(game::Viewport, game::Px, f32)> {
        let window = window();
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        let header = self.header_ref.cast::<HtmlElement>()?;

        let font_px = window
            .get_computed_style(&header)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("font-size").ok())
            .and_then(|value| parse_px(&value))
            .unwrap_or(game::GameController::DEFAULT_FONT_PX);

        let viewport = game::Viewport::new(width as game::Px, height as game::Px);
        let header_height = header.offset_height().max(0) as game::Px;
        Some((viewport, header_height, font_px))
    }

    fn start(&mut self, ctx: &Context<Self>) -> bool {
        // unparsable input counts as an invalid size
        let count = parse_count(&self.input).unwrap_or(0);
        let plan = match self.game.borrow_mut().start_round(count) {
            Ok(plan) => plan,
            Err(game::GameError::RoundInProgress) => return false,
            Err(err) => {
                log::debug!("start rejected: {}", err);
                return true;
            }
        };

        self.prefs.last_count = Some(count);
        self.prefs.local_save();
        self.spawn_round(ctx, plan);
        true
    }

    fn spawn_round(&self, ctx: &Context<Self>, plan: game::RoundPlan) {
        let session = Rc::clone(&self.game);
        let link = ctx.link().clone();

        spawn_local(async move {
            let result = game::play_round(&BrowserDelay, plan, |step| {
                session.borrow_mut().advance(plan.token, step)?;
                link.send_message(Msg::Redraw);
                Ok(())
            })
            .await;

            match result {
                Ok(()) => log::debug!("round {} playing", plan.token.generation()),
                Err(err) => log::debug!(
                    "round {} sequence stopped: {}",
                    plan.token.generation(),
                    err
                ),
            }
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let prefs = Preferences::local_or_default();
        let input = prefs.count_input();
        Self {
            game: Rc::new(RefCell::new(game::GameController::new(
                game::GameSettings::default(),
                seed,
            ))),
            prefs,
            input,
            header_ref: NodeRef::default(),
            _resize_listener: GameView::create_resize_listener(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            InputChanged(input) => {
                self.input = input;
                false
            }
            Start => self.start(ctx),
            Press(id) => {
                let outcome = self.game.borrow_mut().click(id);
                log::debug!("press {}: {:?}", id, outcome);
                outcome.has_update()
            }
            GiveUp => self.game.borrow_mut().give_up(),
            Resize => match self.measure() {
                Some((viewport, header_height, font_px)) => {
                    self.game
                        .borrow_mut()
                        .resize(viewport, header_height, font_px);
                    true
                }
                None => {
                    log::error!("could not measure the game board");
                    false
                }
            },
            Redraw => true,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Resize);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = self.game.borrow();
        let settings = session.settings();
        let disabled = !session.controls_enabled();
        let in_progress = session.state().is_in_progress();
        let message = session.message().map_or("", |message| message.text());

        let oninput = ctx.link().callback(|e: InputEvent| {
            InputChanged(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then(|| {
                e.prevent_default();
                Start
            })
        });
        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_give_up = ctx.link().callback(|_: MouseEvent| GiveUp);
        let cb_press = ctx.link().callback(Press);

        html! {
            <div class="memorder">
                <header id="game-header" ref={self.header_ref.clone()}>
                    <h1>{messages::GAME_HEADER}</h1>
                    <label id="num-btn-label" for="num-btn-input">{messages::BUTTON_COUNT_LABEL}</label>
                    <input
                        id="num-btn-input"
                        type="number"
                        min={settings.min_buttons.to_string()}
                        max={settings.max_buttons.to_string()}
                        value={self.input.clone()}
                        {disabled}
                        {oninput}
                        {onkeypress}
                    />
                    <button id="start-btn" {disabled} onclick={cb_start}>{messages::START_BUTTON}</button>
                    if in_progress {
                        <button id="give-up-btn" onclick={cb_give_up}>{messages::GIVE_UP_BUTTON}</button>
                    }
                    <p id="game-message">{message}</p>
                </header>
                <main id="game-board">
                    {
                        for session.board().buttons().iter().map(|&button| html! {
                            <ButtonView key={button.id()} {button} callback={cb_press.clone()}/>
                        })
                    }
                </main>
            </div>
        }
    }
}
