/// Post cards: one Reddit post, its comments and their reply regions

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::controller::ReplyTarget;
use crate::markup::safe_link;
use crate::models::{Comment, Post};
use crate::replies::ReplyBoard;
use crate::ui::components::ReplyPanel;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub index: usize,
    pub post: Post,
    pub replies: ReplyBoard,
    /// Fired with the reply target and the text to answer
    pub on_generate: Callback<(ReplyTarget, String)>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let main_target = ReplyTarget::MainPost { post: props.index };

    let generate_main = props.on_generate.reform({
        let title = post.title.clone();
        move |_: ()| (main_target, title.clone())
    });

    html! {
        <div class="card mb-4 post-card">
            <div class="card-header d-flex justify-content-between align-items-center">
                <div>
                    <span class="badge bg-secondary me-2">{format!("r/{}", post.subreddit)}</span>
                    <small class="text-muted post-author">
                        <i class="fas fa-user me-1"></i>
                        {&post.author}
                    </small>
                </div>
                <div class="d-flex align-items-center">
                    <i class="fas fa-arrow-up me-1"></i>
                    <span class="badge bg-info">{post.score}</span>
                </div>
            </div>
            <div class="card-body">
                <h5 class="card-title mb-3">
                    if let Some(href) = safe_link(&post.url) {
                        <a href={href} target="_blank" rel="noopener noreferrer" class="text-decoration-none">
                            {&post.title}
                            <i class="fas fa-external-link-alt ms-1 small"></i>
                        </a>
                    } else {
                        <span class="post-title">{&post.title}</span>
                    }
                </h5>

                <div class="mt-3 mb-4">
                    <Button onclick={generate_main.reform(|_: MouseEvent| ())} variant={ButtonVariant::Primary}>
                        <i class="fas fa-reply me-1"></i>
                        {"Generate Reply to Main Post"}
                    </Button>
                    if let Some(state) = props.replies.get(main_target) {
                        <ReplyPanel
                            state={state.clone()}
                            main_post={true}
                            on_regenerate={generate_main.clone()}
                        />
                    }
                </div>

                <div class="mt-4">
                    <h6 class="text-muted mb-3">
                        <i class="fas fa-comments me-2"></i>
                        {format!("Top 10 Most Upvoted Comments ({})", post.comments.len())}
                    </h6>
                    <div class="comments-section">
                        if post.comments.is_empty() {
                            <p class="text-muted fst-italic">{"No comments available"}</p>
                        } else {
                            {for post.comments.iter().enumerate().map(|(comment_index, comment)| html! {
                                <CommentItem
                                    key={comment_index}
                                    target={ReplyTarget::Comment { post: props.index, comment: comment_index }}
                                    comment={comment.clone()}
                                    replies={props.replies.clone()}
                                    on_generate={props.on_generate.clone()}
                                />
                            })}
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CommentItemProps {
    target: ReplyTarget,
    comment: Comment,
    replies: ReplyBoard,
    on_generate: Callback<(ReplyTarget, String)>,
}

#[function_component(CommentItem)]
fn comment_item(props: &CommentItemProps) -> Html {
    let comment = &props.comment;
    let target = props.target;

    let generate = props.on_generate.reform({
        let body = comment.body.clone();
        move |_: ()| (target, body.clone())
    });

    html! {
        <div class="border-start border-secondary ps-3 mb-3 comment-item">
            <div class="d-flex justify-content-between align-items-center mb-2">
                <small class="text-muted comment-author">
                    <i class="fas fa-user me-1"></i>
                    {&comment.author}
                </small>
                <div class="d-flex align-items-center">
                    <i class="fas fa-arrow-up me-1 text-success"></i>
                    <span class="badge bg-success me-2">{comment.score}</span>
                    <Button
                        onclick={generate.reform(|_: MouseEvent| ())}
                        variant={ButtonVariant::Secondary}
                        size={ButtonSize::Small}
                    >
                        <i class="fas fa-reply me-1"></i>
                        {"Generate Reply"}
                    </Button>
                </div>
            </div>
            <p class="mb-0 mt-1 comment-body">{&comment.body}</p>
            if let Some(state) = props.replies.get(target) {
                <ReplyPanel state={state.clone()} on_regenerate={generate.clone()} />
            }
        </div>
    }
}
