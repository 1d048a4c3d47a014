/// Browser chrome: tab bar, toolbar and URL field

use std::rc::Rc;

use patternfly_yew::prelude::*;
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::BrowserConfig;
use crate::host::{after_delay, dispatch, Host, WebHost};
use crate::shortcuts::{command_for, url_field_command, Modifiers};
use crate::tab_strip::{Command, TabStrip};
use crate::ui::components::{NavButton, TabLabel};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: BrowserConfig,
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: Uuid,
    message: String,
}

/// Transient messages, each removed on its own timer
#[derive(Clone, Default, PartialEq)]
struct Toasts {
    items: Vec<Toast>,
}

enum ToastAction {
    Show(Toast),
    Expire(Uuid),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Show(toast) => items.push(toast),
            ToastAction::Expire(id) => items.retain(|t| t.id != id),
        }
        Rc::new(Toasts { items })
    }
}

fn show_toast(toasts: &UseReducerHandle<Toasts>, message: String, millis: u32) {
    let id = Uuid::new_v4();
    toasts.dispatch(ToastAction::Show(Toast { id, message }));

    let toasts = toasts.clone();
    if let Err(e) = after_delay(millis, move || toasts.dispatch(ToastAction::Expire(id))) {
        log::error!("{}", e);
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let strip = use_state(|| TabStrip::new(props.config.clone()));
    let toasts = use_reducer(Toasts::default);

    // Keep the document title on the active tab
    {
        let title = strip.window_title();
        use_effect_with(title, move |title| {
            if let Err(e) = WebHost.set_title(title) {
                log::error!("{}", e);
            }
            || ()
        });
    }

    // Run a command against the current strip and hand its effects to the host
    let run = {
        let strip = strip.clone();
        let toasts = toasts.clone();
        let toast_millis = props.config.toast_millis;

        Callback::from(move |command: Command| {
            log::debug!("Command {:?}", command);

            let mut next = (*strip).clone();
            let effects = next.execute(command);
            strip.set(next);

            for effect in effects {
                let toasts = toasts.clone();
                dispatch(&WebHost, effect, move |message| {
                    show_toast(&toasts, message, toast_millis)
                });
            }
        })
    };

    // Global shortcuts: the listener lives for the whole app, so it reads the
    // latest `run` through a shared cell
    let latest_run = use_mut_ref(|| run.clone());
    *latest_run.borrow_mut() = run.clone();
    {
        let latest_run = latest_run.clone();

        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                let modifiers = Modifiers {
                    ctrl: e.ctrl_key(),
                    alt: e.alt_key(),
                    meta: e.meta_key(),
                };
                if let Some(command) = command_for(&e.key(), modifiers) {
                    e.prevent_default();
                    latest_run.borrow().emit(command);
                }
            });

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                {
                    log::error!("Failed to register shortcuts: {:?}", e);
                }
            }

            move || {
                if let Some(window) = &window {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    ) {
                        log::error!("Failed to unregister shortcuts: {:?}", e);
                    }
                }
                drop(listener);
            }
        });
    }

    let on_command = |command: Command| {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run.emit(command))
    };

    let on_tab_click = |index: usize| {
        let strip = strip.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*strip).clone();
            match next.switch_tab(index) {
                Ok(()) => strip.set(next),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_url_input = {
        let strip = strip.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*strip).clone();
                next.set_url_field(input.value());
                strip.set(next);
            }
        })
    };

    let on_url_keypress = {
        let run = run.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(command) = url_field_command(&e.key()) {
                run.emit(command);
            }
        })
    };

    html! {
        <div class="browser-chrome">
            <div id="tabbar" class="tabbar">
                {for strip.entries().iter().enumerate().map(|(index, entry)| html! {
                    <TabLabel
                        key={entry.id.to_string()}
                        label={entry.label.clone()}
                        url={entry.tab.url.clone()}
                        active={strip.is_active(index)}
                        onclick={on_tab_click(index)}
                    />
                })}
            </div>

            <div class="toolbar">
                <NavButton id="back" title="Back" onclick={on_command(Command::Back)}>{"←"}</NavButton>
                <NavButton id="forward" title="Forward" onclick={on_command(Command::Forward)}>{"→"}</NavButton>
                <NavButton id="reload" title="Reload" onclick={on_command(Command::Reload)}>{"↻"}</NavButton>
                <NavButton id="copy" title="Copy link" onclick={on_command(Command::CopyLink)}>{"Copy Link"}</NavButton>
                <NavButton id="share" title="Share" onclick={on_command(Command::ShareLink)}>{"Share"}</NavButton>

                <input
                    id="url"
                    class="pf-v5-c-form-control url-input"
                    type="text"
                    placeholder="Search or type URL"
                    value={strip.url_field().to_string()}
                    oninput={on_url_input}
                    onkeypress={on_url_keypress}
                />

                <NavButton id="go" title="Go" onclick={on_command(Command::Go)}>{"Go"}</NavButton>
                <NavButton id="newtab" title="New tab" onclick={on_command(Command::NewTab)}>{"+"}</NavButton>
                <NavButton
                    id="fullscreen"
                    title="Fullscreen"
                    pressed={strip.is_fullscreen()}
                    onclick={on_command(Command::ToggleFullscreen)}
                >
                    {"Fullscreen"}
                </NavButton>
            </div>

            <div class="toast-stack">
                {for toasts.items.iter().map(|toast| html! {
                    <div key={toast.id.to_string()} class="toast">
                        <Alert r#type={AlertType::Success} title={toast.message.clone()} inline={true}>
                        </Alert>
                    </div>
                })}
            </div>
        </div>
    }
}
