use super::ReviewHandle;
use crate::shared::dom::alert;
use crate::shared::timers::after;
use contracts::domain::a004_review::Review;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductReviews(catalog_reviews: Vec<Review>, reviews: ReviewHandle, feedback_ms: u32) -> impl IntoView {
    let listing = RwSignal::new(reviews.with_value(|r| r.combined(&catalog_reviews)));
    let name = RwSignal::new(String::new());
    let rating = RwSignal::new("5".to_string());
    let text = RwSignal::new(String::new());
    let (feedback, set_feedback) = signal(false);

    let submit = move |_| {
        let result = reviews.with_value(|r| {
            r.submit(&name.get_untracked(), &rating.get_untracked(), &text.get_untracked())
        });
        match result {
            Ok(saved) => {
                listing.set(catalog_reviews.iter().cloned().chain(saved).collect());
                name.set(String::new());
                text.set(String::new());
                set_feedback.set(true);
                after(feedback_ms, move || set_feedback.set(false));
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    view! {
        <section class="product-reviews">
            <h3>"Reviews"</h3>
            <div id="reviews-list">
                {move || {
                    let all = listing.get();
                    if all.is_empty() {
                        view! { "No reviews yet." }.into_any()
                    } else {
                        all.into_iter()
                            .map(|r| {
                                view! {
                                    <div style="margin-bottom:8px">
                                        <strong>{r.author().to_string()}</strong>
                                        " "
                                        <span style="color:#ff7e00">{r.rating_label()}</span>
                                        <div>{r.text.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <div class="review-form">
                <input
                    id="review-name"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <select id="review-rating" prop:value=move || rating.get() on:change=move |ev| rating.set(event_target_value(&ev))>
                    {(1..=5)
                        .rev()
                        .map(|n| view! { <option value=n.to_string()>{format!("{}★", n)}</option> })
                        .collect_view()}
                </select>
                <textarea
                    id="review-text"
                    rows="3"
                    placeholder="Share your thoughts"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <button id="review-submit" class="btn" type="button" on:click=submit>
                    "Submit review"
                </button>
                <span id="review-feedback" style:display=move || if feedback.get() { "inline" } else { "none" }>
                    "Thanks for your review!"
                </span>
            </div>
        </section>
    }
}
