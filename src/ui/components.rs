/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::controller::{ReplyState, ReplyView};
use crate::markup::analysis_html;
use crate::models::Analysis;

#[derive(Properties, PartialEq)]
pub struct ReplyBadgesProps {
    pub view: ReplyView,
}

/// Sentiment, primary emotion and brand badges under a generated reply
#[function_component(ReplyBadges)]
pub fn reply_badges(props: &ReplyBadgesProps) -> Html {
    let view = &props.view;

    html! {
        <div class="row">
            <div class="col-md-6">
                <strong>{"Sentiment: "}</strong>
                <span class={view.sentiment_tone.badge_class()}>{&view.sentiment_label}</span>
            </div>
            <div class="col-md-6">
                <strong>{"Primary Emotion: "}</strong>
                <span class="badge bg-info">{&view.primary_emotion}</span>
            </div>
            if let Some(brand) = &view.brand_badge {
                <div class="col-md-12">
                    <span class="badge bg-warning">{brand}</span>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReplyPanelProps {
    pub state: ReplyState,
    #[prop_or(false)]
    pub main_post: bool,
    pub on_regenerate: Callback<()>,
}

/// The region that holds one AI reply, with its regenerate control
#[function_component(ReplyPanel)]
pub fn reply_panel(props: &ReplyPanelProps) -> Html {
    let (heading, alert_class) = if props.main_post {
        ("AI Reply to Main Post:", "alert alert-success")
    } else {
        ("AI Generated Reply:", "alert alert-info")
    };

    let busy = matches!(props.state, ReplyState::Generating(_));

    html! {
        <div class="mt-2 reply-region">
            <div class={alert_class}>
                <div class="d-flex justify-content-between align-items-center mb-2">
                    <strong><i class="fas fa-robot me-2"></i>{heading}</strong>
                    <Button
                        onclick={props.on_regenerate.reform(|_: MouseEvent| ())}
                        disabled={busy}
                        variant={ButtonVariant::Secondary}
                        size={ButtonSize::Small}
                    >
                        <i class="fas fa-redo me-1"></i>
                        {"Regenerate"}
                    </Button>
                </div>
                {match &props.state {
                    ReplyState::Generating(msg) => html! {
                        <div class="reply-content">
                            <Spinner />
                            <span class="loading-text">{msg}</span>
                        </div>
                    },
                    ReplyState::Ready(view) => html! {
                        <>
                            <div class="reply-content">
                                <p class="mb-0">{&view.reply}</p>
                            </div>
                            <div class="mt-2 small text-muted reply-analysis">
                                <ReplyBadges view={view.clone()} />
                            </div>
                        </>
                    },
                    ReplyState::Failed(err) => html! {
                        <div class="reply-content text-danger">
                            <i class="fas fa-exclamation-triangle me-1"></i>
                            {err}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalysisBlockProps {
    pub analysis: Analysis,
}

/// AI summary shown above keyword search results
#[function_component(AnalysisBlock)]
pub fn analysis_block(props: &AnalysisBlockProps) -> Html {
    let analysis = &props.analysis;
    // analysis_html escapes the text; only its <p>/<br> wrappers are raw
    let body = Html::from_html_unchecked(AttrValue::from(analysis_html(&analysis.analysis)));

    html! {
        <div class="alert alert-info mb-4 analysis-block">
            <div class="d-flex align-items-center mb-3">
                <i class="fas fa-robot me-2"></i>
                <strong>{"ChatGPT Analysis"}</strong>
                <span class="badge bg-success ms-2">{"Reddit cited as source"}</span>
            </div>
            <div class="analysis-content">
                {body}
            </div>
            <div class="mt-3 small text-muted">
                <i class="fas fa-chart-bar me-1"></i>
                {format!(
                    "Analyzed {} Reddit posts for query: \"{}\"",
                    analysis.reddit_posts_analyzed,
                    analysis.query
                )}
            </div>
        </div>
    }
}
