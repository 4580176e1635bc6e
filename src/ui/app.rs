/// Root component: search box, trigger buttons and the results panel

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::HttpBackend;
use crate::config::ApiConfig;
use crate::controller::{PanelState, ReplyTarget, ResultsKind, ResultsView, ViewController};
use crate::replies::{ReplyAction, ReplyBoard};
use crate::ui::components::AnalysisBlock;
use crate::ui::post::PostCard;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ApiConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let controller = use_memo(props.config.clone(), |config| {
        ViewController::new(HttpBackend::new(config.clone()))
    });
    let panel = use_state(|| PanelState::Idle);
    let replies = use_reducer(ReplyBoard::default);
    let search_text = use_state(String::new);
    let brand_name = use_state(String::new);
    let force_refresh = use_state(|| false);

    let render_panel = {
        let panel = panel.clone();
        let replies = replies.clone();
        move |state: PanelState| {
            if let Some(action) = ReplyAction::for_panel(&state) {
                replies.dispatch(action);
            }
            panel.set(state);
        }
    };

    let on_search = {
        let controller = controller.clone();
        let search_text = search_text.clone();
        let force_refresh = force_refresh.clone();
        let render_panel = render_panel.clone();

        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let text = (*search_text).clone();
            let force = *force_refresh;
            let render = render_panel.clone();

            spawn_local(async move {
                controller.search_by_keyword(&text, force, render).await;
            });
        })
    };

    let on_fetch = {
        let controller = controller.clone();
        let search_text = search_text.clone();
        let render_panel = render_panel.clone();

        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let text = (*search_text).clone();
            let render = render_panel.clone();

            spawn_local(async move {
                controller.fetch_by_url(&text, render).await;
            });
        })
    };

    let on_generate = {
        let controller = controller.clone();
        let replies = replies.clone();
        let brand_name = brand_name.clone();

        Callback::from(move |(target, text): (ReplyTarget, String)| {
            let controller = controller.clone();
            let replies = replies.clone();
            let brand = (*brand_name).clone();
            let epoch = replies.epoch();

            spawn_local(async move {
                controller
                    .generate_reply(target, &text, &brand, move |state| {
                        replies.dispatch(ReplyAction::Update {
                            epoch,
                            target,
                            state,
                        });
                    })
                    .await;
            });
        })
    };

    let on_search_input = {
        let search_text = search_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search_text.set(input.value());
            }
        })
    };

    let on_search_keypress = {
        let on_search = on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_search.emit(());
            }
        })
    };

    let on_brand_input = {
        let brand_name = brand_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                brand_name.set(input.value());
            }
        })
    };

    let on_refresh_change = {
        let force_refresh = force_refresh.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                force_refresh.set(input.checked());
            }
        })
    };

    html! {
        <div class="container py-4">
            <h1 class="app-title">{"Reddit Reply Studio"}</h1>

            <div class="search-form mb-4">
                <input
                    type="text"
                    class="form-control mb-2"
                    placeholder="Enter a keyword or a Reddit thread URL..."
                    value={(*search_text).clone()}
                    oninput={on_search_input}
                    onkeypress={on_search_keypress}
                />
                <input
                    type="text"
                    class="form-control mb-2"
                    placeholder="Brand name (optional)"
                    value={(*brand_name).clone()}
                    oninput={on_brand_input}
                />
                <label class="form-check mb-2">
                    <input
                        type="checkbox"
                        class="form-check-input"
                        checked={*force_refresh}
                        onchange={on_refresh_change}
                    />
                    <span class="form-check-label">{" Hard refresh (skip cached results)"}</span>
                </label>
                <TriggerButtons
                    busy={panel.is_loading()}
                    on_search={on_search}
                    on_fetch={on_fetch}
                />
            </div>

            <PanelView
                panel={(*panel).clone()}
                replies={(*replies).clone()}
                on_generate={on_generate}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TriggerButtonsProps {
    /// Both buttons stay disabled while a request is in flight
    pub busy: bool,
    pub on_search: Callback<()>,
    pub on_fetch: Callback<()>,
}

#[function_component(TriggerButtons)]
pub fn trigger_buttons(props: &TriggerButtonsProps) -> Html {
    html! {
        <div class="d-flex gap-2">
            <Button
                onclick={props.on_search.reform(|_: MouseEvent| ())}
                disabled={props.busy}
                variant={ButtonVariant::Primary}
            >
                <i class="fas fa-search me-1"></i>
                {"Search by Keyword"}
            </Button>
            <Button
                onclick={props.on_fetch.reform(|_: MouseEvent| ())}
                disabled={props.busy}
                variant={ButtonVariant::Secondary}
            >
                <i class="fas fa-link me-1"></i>
                {"Fetch by Thread URL"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PanelViewProps {
    pub panel: PanelState,
    pub replies: ReplyBoard,
    pub on_generate: Callback<(ReplyTarget, String)>,
}

/// Status / results panel
#[function_component(PanelView)]
pub fn panel_view(props: &PanelViewProps) -> Html {
    match &props.panel {
        PanelState::Idle => html! {},
        PanelState::Loading => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{"Fetching from Reddit..."}</p>
            </div>
        },
        PanelState::Error(err) => html! {
            <div class="message-top-margin">
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err.clone()}
                </Alert>
            </div>
        },
        PanelState::Results(view) => html! {
            <ResultsPanel
                view={view.clone()}
                replies={props.replies.clone()}
                on_generate={props.on_generate.clone()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
struct ResultsPanelProps {
    view: ResultsView,
    replies: ReplyBoard,
    on_generate: Callback<(ReplyTarget, String)>,
}

#[function_component(ResultsPanel)]
fn results_panel(props: &ResultsPanelProps) -> Html {
    let view = &props.view;
    let icon = match view.kind {
        ResultsKind::Search => "fas fa-list me-2",
        ResultsKind::Thread => "fas fa-link me-2",
    };

    html! {
        <div class="results-container">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2 class="results-title"><i class={icon}></i>{&view.title}</h2>
                <span class="results-count text-muted">{&view.count_label}</span>
            </div>
            <div class="posts-container">
                if let Some(analysis) = &view.analysis {
                    <AnalysisBlock analysis={analysis.clone()} />
                }
                {for view.posts.iter().enumerate().map(|(index, post)| html! {
                    <PostCard
                        key={index}
                        index={index}
                        post={post.clone()}
                        replies={props.replies.clone()}
                        on_generate={props.on_generate.clone()}
                    />
                })}
            </div>
        </div>
    }
}
